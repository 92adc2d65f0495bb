use thiserror::Error;

/// Rejection of a set of measurements that cannot describe a shape.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}
