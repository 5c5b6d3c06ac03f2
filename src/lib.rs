pub mod ranking;
pub mod scanner;

pub use scanner::{scan, ScanError, ScanStats};
