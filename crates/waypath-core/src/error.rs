use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid path: requires at least {required} control points, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("segment anchor {anchor} out of range [1, {max}]")]
    AnchorOutOfRange { anchor: usize, max: usize },

    #[error("parameter {t} resolves to a segment before the start of the path")]
    ParameterOutOfRange { t: f64 },

    #[error("control point {index} has a non-finite coordinate")]
    NonFinitePosition { index: usize },
}

pub type Result<T> = std::result::Result<T, PathError>;
