use thiserror::Error;

use tecgas_model::ModelError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("dependency cycle between rules: {}", rules.join(", "))]
    Cycle { rules: Vec<String> },
    #[error("rule {rule} declares no output")]
    NoOutput { rule: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
