//! Configuration support types.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `error`  | `ConfigError` and collected diagnostics         |
//! | `field`  | `FieldPath` produced by the `Config` derive     |
//! | `status` | Experimental / deprecated / unimplemented keys  |

mod error;
mod field;
pub mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use status::{ConfigPresence, FieldStatus};
