//! Process-wide shutdown state.
//!
//! - `SHUTDOWN`: Ctrl+C received
//! - `SERVER`: preview server to unblock on Ctrl+C
//! - `INTERRUPT_HOOK`: cleanup for child processes (e2e web server)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tiny_http::Server;

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// HTTP server reference for graceful shutdown
static SERVER: OnceLock<Arc<Server>> = OnceLock::new();

/// Runs before exiting on Ctrl+C when no server is registered
static INTERRUPT_HOOK: OnceLock<fn()> = OnceLock::new();

/// Exit status for a process terminated by SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Setup the global Ctrl+C handler. Call once at program start.
///
/// - With a registered server: unblock it and let the loop return
/// - Otherwise: run the interrupt hook, then exit
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if let Some(server) = SERVER.get() {
            crate::log!("serve"; "shutting down...");
            server.unblock();
        } else {
            if let Some(hook) = INTERRUPT_HOOK.get() {
                hook();
            }
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Register the HTTP server for graceful shutdown.
///
/// Call this after binding the server, before entering the request loop.
pub fn register_server(server: Arc<Server>) {
    let _ = SERVER.set(server);
}

/// Register cleanup to run when Ctrl+C arrives outside serve mode.
pub fn register_interrupt_hook(hook: fn()) {
    let _ = INTERRUPT_HOOK.set(hook);
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
