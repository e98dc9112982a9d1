/// ASCII density renderer for endrings.
///
/// Samples the ring density field on a coarse grid and writes it as text.
pub mod renderer;

pub use renderer::{AsciiRenderer, render_ascii_file};
