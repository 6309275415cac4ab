use sp_core::SpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McError {
    #[error(transparent)]
    Core(#[from] SpError),

    #[error("{missing} of {requested} runs produced no sample")]
    MissingSamples {
        missing:   usize,
        requested: usize,
    },

    #[error("none of {requested} runs produced a sample")]
    NoSamples { requested: usize },
}

pub type McResult<T> = Result<T, McError>;
