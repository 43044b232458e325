pub mod encoding;
pub mod file_finder;
pub mod processor;
pub mod stripper;

pub use encoding::{DecodedText, ENCODING_CANDIDATES};

pub use file_finder::{CliArgs, Command, CompletionArgs, DecommentArgs, find_files};

pub use processor::{FileOutcome, ProcessedFileResult, process_files};
pub use stripper::{StripError, strip_comments};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("read failed for {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("write failed for {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("no candidate encoding could decode {path}")]
    Decode { path: String },

    #[error("stripped text for {path} is not representable as {encoding}")]
    Encode { path: String, encoding: String },

    #[error("comment stripping failed for {path}: {message}")]
    Strip { path: String, message: String },
}
