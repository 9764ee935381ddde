//! Small shared helpers.

pub mod date;
pub mod mime;
pub mod plural;
