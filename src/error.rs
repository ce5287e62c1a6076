use std::io;
use thiserror::Error;

/// Errors that abort an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("env_name is required")]
    InvalidArgument,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ExportError::Io {
            context: context.into(),
            source,
        }
    }
}
