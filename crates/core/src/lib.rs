pub mod config;
pub mod error;
pub mod report;
pub mod source;

pub use config::Config;
pub use error::*;
pub use report::*;
pub use source::{JsonFileSource, ReportSource};
