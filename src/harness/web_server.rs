//! Dev server bootstrap for browser tests.
//!
//! ```text
//! GET url ─ready─► reuse allowed? ─yes─► Reused
//!     │                   └─no──► PortInUse
//!     └─not ready─► sh -c <command> ─► poll until 200..=403 or timeout ─► Spawned
//! ```
//!
//! The spawned child lives in a global slot so Ctrl+C can kill it.

use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use url::Url;

use super::{HarnessError, ServerPlan};
use crate::{debug, log};

/// Child process of the spawned server, if any.
static SPAWNED: Mutex<Option<Child>> = parking_lot::const_mutex(None);

const POLL_INTERVAL: Duration = Duration::from_millis(500);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Statuses that count as "server is up". Redirects and auth walls are fine.
pub fn is_ready_status(status: u16) -> bool {
    (200..=403).contains(&status)
}

/// Server the tests run against. Dropping it stops a spawned server.
#[derive(Debug)]
pub enum WebServer {
    Reused,
    Spawned,
}

impl Drop for WebServer {
    fn drop(&mut self) {
        if matches!(self, Self::Spawned) {
            stop_spawned();
        }
    }
}

/// Reuse a running server or start one and wait for it.
pub fn ensure(plan: &ServerPlan) -> Result<WebServer, HarnessError> {
    let url = parse_url(&plan.url)?;
    let client = readiness_client()?;

    if fetch_status(&client, &url).is_some_and(is_ready_status) {
        if plan.reuse_existing {
            log!("webserver"; "reusing server at {}", plan.url);
            return Ok(WebServer::Reused);
        }
        return Err(HarnessError::PortInUse(plan.url.clone()));
    }

    spawn(plan)?;
    let server = WebServer::Spawned;
    wait_ready(&client, &url, plan)?;
    Ok(server)
}

/// Client for readiness checks.
///
/// Redirects are not followed so a `302` counts as ready on its own. Local
/// dev servers often use self-signed certificates, so those are accepted.
fn readiness_client() -> Result<Client, HarnessError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::none())
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(HarnessError::HttpClient)
}

fn spawn(plan: &ServerPlan) -> Result<(), HarnessError> {
    log!("webserver"; "starting `{}`", plan.command);

    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(&plan.command)
        .current_dir(&plan.cwd)
        .stdin(Stdio::null());

    // own process group, so stopping reaches `npm` and its children
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command
        .spawn()
        .map_err(|source| HarnessError::Spawn {
            program: "sh".into(),
            source,
        })?;
    *SPAWNED.lock() = Some(child);
    Ok(())
}

fn wait_ready(client: &Client, url: &Url, plan: &ServerPlan) -> Result<(), HarnessError> {
    let deadline = Instant::now() + plan.startup_timeout;

    loop {
        if let Some(status) = fetch_status(client, url) {
            if is_ready_status(status) {
                log!("webserver"; "ready at {} ({})", plan.url, status);
                return Ok(());
            }
            debug!("webserver"; "{} answered {}, waiting", plan.url, status);
        }

        if let Some(status) = exited_status() {
            return Err(HarnessError::ServerExited(status));
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::StartupTimeout {
                url: plan.url.clone(),
                timeout: plan.startup_timeout.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Exit description if the spawned server already died.
fn exited_status() -> Option<String> {
    let mut slot = SPAWNED.lock();
    let child = slot.as_mut()?;
    match child.try_wait() {
        Ok(Some(status)) => {
            *slot = None;
            Some(status.to_string())
        }
        Ok(None) => None,
        Err(e) => Some(e.to_string()),
    }
}

/// Kill the spawned server, if any. Safe to call more than once.
pub fn stop_spawned() {
    let Some(mut child) = SPAWNED.lock().take() else {
        return;
    };

    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        // the child leads its own group, see `spawn`
        if let Err(e) = killpg(Pid::from_raw(child.id() as i32), Signal::SIGTERM) {
            debug!("webserver"; "SIGTERM to process group failed: {}", e);
        }
    }

    let _ = child.kill();
    let _ = child.wait();
    debug!("webserver"; "stopped");
}

fn parse_url(raw: &str) -> Result<Url, HarnessError> {
    Url::parse(raw).map_err(|source| HarnessError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })
}

/// Status code of a `GET` against `url`, or `None` if no HTTP server answers.
///
/// Anything that is not an HTTP response (a failed TLS handshake, a
/// non-HTTP service on the port) counts as "nothing answered".
pub fn fetch_status(client: &Client, url: &Url) -> Option<u16> {
    match client.get(url.as_str()).send() {
        Ok(resp) => Some(resp.status().as_u16()),
        Err(e) => {
            debug!("webserver"; "{} not answering: {}", url, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    #[test]
    fn test_ready_status_range() {
        assert!(is_ready_status(200));
        assert!(is_ready_status(302));
        assert!(is_ready_status(403));
        assert!(!is_ready_status(404));
        assert!(!is_ready_status(500));
        assert!(!is_ready_status(199));
    }

    /// One-shot TCP server writing `reply` after reading the request.
    fn reply_once(scheme: &str, reply: String) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(reply.as_bytes());
            }
        });
        Url::parse(&format!("{scheme}://127.0.0.1:{port}/")).unwrap()
    }

    /// One-shot HTTP server answering with `status`.
    fn serve_once(status: u16) -> Url {
        reply_once(
            "http",
            format!("HTTP/1.1 {status} X\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"),
        )
    }

    #[test]
    fn test_fetch_status_reads_status() {
        let client = readiness_client().unwrap();
        assert_eq!(fetch_status(&client, &serve_once(204)), Some(204));
        assert_eq!(fetch_status(&client, &serve_once(500)), Some(500));
    }

    #[test]
    fn test_redirect_is_not_followed() {
        let client = readiness_client().unwrap();
        let url = reply_once(
            "http",
            "HTTP/1.1 302 Found\r\nLocation: /login\r\nContent-Length: 0\r\n\r\n".into(),
        );
        assert_eq!(fetch_status(&client, &url), Some(302));
    }

    #[test]
    fn test_fetch_status_nothing_listening() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let client = readiness_client().unwrap();
        assert_eq!(fetch_status(&client, &url), None);
    }

    #[test]
    fn test_https_non_http_listener_is_not_ready() {
        // accepts the connection but never speaks TLS or HTTP
        let url = reply_once("https", "SSH-2.0-OpenSSH_9.6\r\n".into());
        let client = readiness_client().unwrap();
        assert_eq!(fetch_status(&client, &url), None);
    }

    #[test]
    fn test_ensure_https_non_http_listener_spawns() {
        let url = reply_once("https", "SSH-2.0-OpenSSH_9.6\r\n".into());
        let plan = ServerPlan {
            command: "exit 3".into(),
            url: url.to_string(),
            cwd: std::env::temp_dir(),
            startup_timeout: Duration::from_secs(5),
            reuse_existing: true,
        };
        // not mistaken for a running server, so the command is started
        assert!(matches!(ensure(&plan), Err(HarnessError::ServerExited(_))));
    }

    #[test]
    fn test_ensure_reachable_without_reuse() {
        let url = serve_once(200);
        let plan = ServerPlan {
            command: "true".into(),
            url: url.to_string(),
            cwd: std::env::temp_dir(),
            startup_timeout: Duration::from_secs(1),
            reuse_existing: false,
        };
        assert!(matches!(ensure(&plan), Err(HarnessError::PortInUse(_))));
    }

    #[test]
    fn test_ensure_reuses_running_server() {
        let url = serve_once(200);
        let plan = ServerPlan {
            command: "true".into(),
            url: url.to_string(),
            cwd: std::env::temp_dir(),
            startup_timeout: Duration::from_secs(1),
            reuse_existing: true,
        };
        assert!(matches!(ensure(&plan), Ok(WebServer::Reused)));
    }
}
