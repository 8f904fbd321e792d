pub mod processing_result;
pub mod split_config;

pub use processing_result::{ProcessOutcome, ProcessingResult};
pub use split_config::{SourceFile, SplitConfig, DEFAULT_ZIP_NAME};
