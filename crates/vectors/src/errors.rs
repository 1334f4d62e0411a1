#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VectorError {
    #[error("This vector has zero magnitude and so has no direction")]
    Degenerate,

    #[error("This vector has a non-finite component and so has no direction")]
    NonFinite,

    #[error("Quadrant bearing angles must be within [0, 90] degrees, got {0}")]
    InvalidBearing(f64),
}

pub type Result<T, E = VectorError> = std::result::Result<T, E>;
