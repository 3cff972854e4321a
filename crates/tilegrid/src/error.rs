/// Errors that can occur when configuring a tilemap series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilegridError {
    /// The configured tile shape name did not match any known shape.
    ///
    /// Every downstream call assumes a resolved shape, so an unknown name
    /// must surface at option-setup time rather than default silently.
    UnknownShape(String),
}

impl std::fmt::Display for TilegridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilegridError::UnknownShape(name) => {
                write!(
                    f,
                    "Unknown tile shape: {:?} (expected hexagon, diamond, circle or square)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for TilegridError {}

/// Result type for tilegrid operations.
pub type TilegridResult<T> = Result<T, TilegridError>;
