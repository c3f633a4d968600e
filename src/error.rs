use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("too many edges for the requested graph")]
    TooManyEdges,
    #[error("too few edges for the requested graph")]
    TooFewEdges,
    #[error("too few nodes for the requested shape")]
    TooFewNodes,
    #[error("too many samples for the given range")]
    TooManySamples,
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
