use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("landmark buffer length mismatch: expected {expected} values, got {got}")]
    LandmarkBuffer { expected: usize, got: usize },
}
