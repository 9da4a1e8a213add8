use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("Input sequence cannot be empty")]
    EmptyInput,

    #[error("At least {required} readings are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
