/// File artifacts for endrings: the missing-ring PNG map, the ring survey
/// report and the band geometry table.
pub mod geometry;
pub mod raster;
pub mod survey;

pub use geometry::{RingBand, RingGeometry, render_geometry_file};
pub use raster::{Rasterizer, render_png_file};
pub use survey::{RingSurvey, SurveyEntry, render_survey_file};
