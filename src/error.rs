// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfmaskError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to find band '{name}' of product '{product}' in the scene metadata for initializing the output metadata")]
    ReferenceBandNotFound { name: String, product: String },

    #[error("Allocating {what} for {product}: {reason}")]
    AllocationFailure {
        what: &'static str,
        product: String,
        reason: String,
    },

    #[error("Clock error while stamping {product}: {reason}")]
    Clock { product: String, reason: String },

    #[error("Short name '{source_name}' is shorter than the {required}-character prefix required for {product}")]
    ShortNameTooShort { source_name: String, required: usize, product: String },

    #[error("Short name '{short_name}' exceeds the maximum length of {max} characters")]
    ShortNameTooLong { short_name: String, max: usize },

    #[error("Unable to open output file {path:?} for {product}: {source}")]
    StreamOpen {
        path: PathBuf,
        product: String,
        #[source]
        source: io::Error,
    },

    #[error("{operation}: {product} output file not open")]
    NotOpen { operation: &'static str, product: String },

    #[error("{operation}: {product} output file still open")]
    StillOpen { operation: &'static str, product: String },

    #[error("{operation}: writing {product} output failed: {source}")]
    Write {
        operation: &'static str,
        product: String,
        #[source]
        source: io::Error,
    },

    #[error("{operation}: invalid argument for {product}: {reason}")]
    InvalidArgument { operation: &'static str, product: String, reason: String },
}

impl CfmaskError {
    /// True for errors caused by calling the output lifecycle out of order
    /// in a way that indicates a bug in the caller rather than a runtime fault.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CfmaskError::StillOpen { .. })
    }
}

pub type Result<T> = std::result::Result<T, CfmaskError>;
