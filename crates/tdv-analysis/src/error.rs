use tdv_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("solution for {0} contains no routes")]
    EmptySolution(String),

    #[error("replay failed: {0}")]
    Replay(#[from] SimError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
