// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::cli::Cli;
pub use crate::commands::{handle_capture, CaptureConfig};
pub use crate::errors::Error;
