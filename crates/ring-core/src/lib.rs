/// Configuration, classification, and shared structures for endrings.
///
/// This crate holds the ring classifier and every type shared by the
/// raster, ASCII, and survey renderers.

pub mod config;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod output;
pub mod ring;

pub use config::{RenderConfig, RingConfig};
pub use error::CoreError;
pub use glyph::char_for_density;
pub use grid::CharGrid;
pub use ring::{RingClassification, RingClassifier, WorldPoint};
