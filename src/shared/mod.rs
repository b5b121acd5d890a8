pub mod error;
pub mod result;

pub use error::{ExitCode, GateError};
pub use result::Result;
