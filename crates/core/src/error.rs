use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerceptionError {
    #[error("Invariant violated at frame {frame}: {detail}")]
    InvariantViolation { frame: i32, detail: String },
    #[error("Invalid agent config: {0}")]
    InvalidConfig(String),
}
