use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("page area is empty: {width:.1}pt x {height:.1}pt after margins")]
    PageTooSmall { width: f64, height: f64 },
    #[error("failed to write report markup")]
    Markup(#[source] std::io::Error),
    #[error("report markup is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
