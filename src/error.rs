use thiserror::Error;

/// Top-level error type for the kinaxis geometry library.
#[derive(Debug, Error)]
pub enum KinaxisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to body-frame construction.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame markers are coincident or collinear")]
    CollinearMarkers,

    #[error("frame axes are not perpendicular (dot = {dot})")]
    AxesNotOrthogonal { dot: f64 },
}

/// Convenience type alias for results using [`KinaxisError`].
pub type Result<T> = std::result::Result<T, KinaxisError>;
