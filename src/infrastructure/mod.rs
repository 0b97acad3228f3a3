pub mod diagnostics;
pub mod logging;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
