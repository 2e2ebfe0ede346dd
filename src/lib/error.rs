use thiserror::Error;

/// Everything that can go wrong while decoding GeoJSON.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input is not valid JSON, or a member has the wrong JSON kind.
    #[error("malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A `type` string that names no supported geometry.
    #[error("unknown geometry type '{0}'")]
    UnknownGeometryType(String),

    /// `coordinates` is valid JSON, but not nested the way the declared type requires.
    #[error("coordinates do not match {geometry_type}: {reason}")]
    CoordinateShapeMismatch {
        geometry_type: String,
        reason: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            DecodeError::Io(err.into())
        } else {
            DecodeError::MalformedInput(err)
        }
    }
}
