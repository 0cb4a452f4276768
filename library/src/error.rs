use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("invalid position {pos} for timeline of length {len}")]
    InvalidPosition { pos: usize, len: usize },
    #[error("identifier generation failed: {0}")]
    IdentityGeneration(String),
}
