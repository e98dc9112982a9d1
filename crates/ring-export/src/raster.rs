use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use ring_core::config::PngConfig;
use ring_core::error::CoreError;
use ring_core::output::report_write;
use ring_core::ring::{RingClassifier, WorldPoint};

/// Fond opaque (terrain normal).
pub const SKY_BLUE: Rgba<u8> = Rgba([50, 150, 255, 255]);
/// Pixel manquant, mode transparent.
pub const MISSING_TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
/// Pixel manquant, mode opaque.
pub const MISSING_GRAY: Rgba<u8> = Rgba([100, 100, 100, 255]);
/// Échelle fixe pixel → monde.
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Peint l'anneau manquant dans une image RGBA centrée sur l'origine.
///
/// # Example
/// ```
/// use ring_core::RingClassifier;
/// use ring_export::raster::{Rasterizer, SKY_BLUE};
///
/// let rasterizer = Rasterizer::new(64, 32, true).unwrap();
/// let img = rasterizer.render(&RingClassifier::default());
/// assert_eq!(img.dimensions(), (64, 32));
/// assert_eq!(*img.get_pixel(0, 0), SKY_BLUE);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    show_missing_transparent: bool,
}

impl Rasterizer {
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `width` or `height` is zero
    /// or the RGBA buffer would be too large.
    pub fn new(width: u32, height: u32, show_missing_transparent: bool) -> Result<Self, CoreError> {
        CoreError::check_surface(width, height, 4)?;
        Ok(Self {
            width,
            height,
            show_missing_transparent,
        })
    }

    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if the configured size is zero or too large.
    pub fn from_config(config: &PngConfig) -> Result<Self, CoreError> {
        Self::new(config.width, config.height, config.show_missing_transparent)
    }

    /// Pixel (x, y) → monde, 100 pixels par bloc.
    #[inline(always)]
    #[must_use]
    pub fn world_point(&self, x: u32, y: u32) -> WorldPoint {
        WorldPoint::new(
            (f64::from(x) - f64::from(self.width) / 2.0) / PIXELS_PER_UNIT,
            (f64::from(y) - f64::from(self.height) / 2.0) / PIXELS_PER_UNIT,
        )
    }

    #[must_use]
    pub fn missing_color(&self) -> Rgba<u8> {
        if self.show_missing_transparent {
            MISSING_TRANSPARENT
        } else {
            MISSING_GRAY
        }
    }

    /// Fond bleu partout, puis chaque pixel manquant est remplacé. Row-major.
    #[must_use]
    pub fn render(&self, classifier: &RingClassifier) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, SKY_BLUE);
        let missing_color = self.missing_color();
        let mut missing = 0u64;

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if classifier.is_missing(self.world_point(x, y).radius()) {
                *pixel = missing_color;
                missing += 1;
            }
        }

        log::debug!(
            "Raster {}x{} : {missing} pixels manquants",
            self.width,
            self.height
        );
        img
    }

    /// Rend puis encode en PNG dans `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or the PNG encoding fails.
    pub fn write(&self, classifier: &RingClassifier, path: &Path) -> Result<()> {
        let img = self.render(classifier);

        let io_err = |source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        img.write_to(&mut writer, ImageFormat::Png)
            .with_context(|| format!("Encodage PNG impossible : {}", path.display()))?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}

/// Point d'entrée du rendu PNG : construit, rend, écrit, log.
///
/// Les erreurs sont loguées et ne remontent pas. Retourne `true` si le
/// fichier a été écrit.
pub fn render_png_file(classifier: &RingClassifier, config: &PngConfig) -> bool {
    let started = std::time::Instant::now();
    let result = Rasterizer::from_config(config)
        .map_err(anyhow::Error::from)
        .and_then(|rasterizer| rasterizer.write(classifier, &config.output));
    log::debug!("Rendu PNG en {:.2?}", started.elapsed());
    report_write("Image PNG", &config.output, result)
}
