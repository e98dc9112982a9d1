use std::path::PathBuf;

use thiserror::Error;

/// Plafond d'un buffer de rendu (4 Gio).
pub const MAX_SURFACE_BYTES: u64 = 1 << 32;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Invalid width/height dimensions (zero on either axis, or oversized).
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// An output artifact could not be written.
    #[error("Écriture impossible : {}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Reject a zero-sized surface before anything is allocated for it.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either axis is zero.
    ///
    /// # Example
    /// ```
    /// use ring_core::CoreError;
    /// assert!(CoreError::check_dimensions(100, 100).is_ok());
    /// assert!(CoreError::check_dimensions(0, 100).is_err());
    /// ```
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), Self> {
        if width == 0 || height == 0 {
            return Err(Self::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Comme [`check_dimensions`](Self::check_dimensions), et refuse aussi les
    /// surfaces dont le buffer (`width × height × bytes_per_cell`) dépasse
    /// [`MAX_SURFACE_BYTES`] ou `usize`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either axis is zero or the
    /// buffer would be too large.
    ///
    /// # Example
    /// ```
    /// use ring_core::CoreError;
    /// assert!(CoreError::check_surface(8000, 8000, 4).is_ok());
    /// assert!(CoreError::check_surface(u32::MAX, u32::MAX, 4).is_err());
    /// ```
    pub fn check_surface(width: u32, height: u32, bytes_per_cell: u64) -> Result<(), Self> {
        Self::check_dimensions(width, height)?;
        let bytes = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|cells| cells.checked_mul(bytes_per_cell));
        match bytes {
            Some(b) if b <= MAX_SURFACE_BYTES && usize::try_from(b).is_ok() => Ok(()),
            _ => Err(Self::InvalidDimensions { width, height }),
        }
    }
}
