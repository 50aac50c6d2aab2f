pub mod analyzers;
pub mod error;
pub mod output;
pub mod parser;

pub use analyzers::analyzer::{IngestMode, analyze};
pub use analyzers::config::GradingPolicy;
pub use error::{ErrorKind, GradingError};
