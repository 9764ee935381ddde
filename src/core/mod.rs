//! Process-wide state shared across commands.

mod state;

pub use state::{is_shutdown, register_interrupt_hook, register_server, setup_shutdown_handler};
