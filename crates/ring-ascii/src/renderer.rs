use std::path::Path;

use anyhow::Result;
use ring_core::config::RingConfig;
use ring_core::error::CoreError;
use ring_core::glyph::char_for_density;
use ring_core::grid::CharGrid;
use ring_core::output::{report_write, write_text};
use ring_core::ring::{RingClassifier, WorldPoint};

/// Échantillonne la densité sur une grille grossière couvrant tout le diamètre.
///
/// L'échelle par axe vaut `ring_end * 2 / cols` (resp. `rows`), calculée en
/// entiers puis élargie en `f64` : la troncature est conservée.
///
/// # Example
/// ```
/// use ring_ascii::AsciiRenderer;
/// use ring_core::RingClassifier;
///
/// let classifier = RingClassifier::default();
/// let renderer = AsciiRenderer::new(100, 100, classifier.config()).unwrap();
/// let grid = renderer.render(&classifier).unwrap();
/// assert_eq!(grid.get(50, 50), '#');
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AsciiRenderer {
    cols: u32,
    rows: u32,
    scale_x: f64,
    scale_y: f64,
}

impl AsciiRenderer {
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `cols` or `rows` is zero or
    /// the grid would be too large.
    pub fn new(cols: u32, rows: u32, ring: &RingConfig) -> Result<Self, CoreError> {
        CoreError::check_surface(cols, rows, std::mem::size_of::<char>() as u64)?;
        let diameter = ring.ring_end.saturating_mul(2);
        Ok(Self {
            cols,
            rows,
            scale_x: (diameter / u64::from(cols)) as f64,
            scale_y: (diameter / u64::from(rows)) as f64,
        })
    }

    /// Blocs par cellule, (horizontal, vertical).
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Cellule (x, y) → coordonnées monde, grille centrée sur l'origine.
    #[inline(always)]
    #[must_use]
    pub fn world_point(&self, x: u32, y: u32) -> WorldPoint {
        WorldPoint::new(
            (f64::from(x) - f64::from(self.cols) / 2.0) * self.scale_x,
            (f64::from(y) - f64::from(self.rows) / 2.0) * self.scale_y,
        )
    }

    /// Remplit `grid`, row-major. Aucun test d'anneau : la densité est
    /// affichée partout.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] (with the grid's size) if
    /// `grid` was not allocated for this renderer; `grid` is left untouched.
    pub fn render_into(
        &self,
        classifier: &RingClassifier,
        grid: &mut CharGrid,
    ) -> Result<(), CoreError> {
        if grid.cols != self.cols || grid.rows != self.rows {
            return Err(CoreError::InvalidDimensions {
                width: grid.cols,
                height: grid.rows,
            });
        }

        for y in 0..self.rows {
            for x in 0..self.cols {
                let radius = self.world_point(x, y).radius();
                grid.set(x, y, char_for_density(classifier.density(radius)));
            }
        }
        Ok(())
    }

    /// # Errors
    /// Never fails once the renderer exists; the `Result` comes from grid allocation.
    pub fn render(&self, classifier: &RingClassifier) -> Result<CharGrid, CoreError> {
        let mut grid = CharGrid::new(self.cols, self.rows)?;
        self.render_into(classifier, &mut grid)?;
        Ok(grid)
    }

    /// Rend puis écrit le texte dans `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write(&self, classifier: &RingClassifier, path: &Path) -> Result<()> {
        log::debug!(
            "Grille ASCII {}x{}, échelle {}x{} blocs/cellule",
            self.cols,
            self.rows,
            self.scale_x,
            self.scale_y
        );
        let grid = self.render(classifier)?;
        write_text(path, &grid.to_text())?;
        Ok(())
    }
}

/// Point d'entrée du rendu texte : construit, rend, écrit, log.
///
/// Les erreurs (dimensions nulles, I/O) sont loguées et ne remontent pas.
/// Retourne `true` si le fichier a été écrit.
pub fn render_ascii_file(classifier: &RingClassifier, cols: u32, rows: u32, path: &Path) -> bool {
    let result = AsciiRenderer::new(cols, rows, classifier.config())
        .map_err(anyhow::Error::from)
        .and_then(|renderer| renderer.write(classifier, path));
    report_write("Grille ASCII", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_core::glyph::DENSITY_GLYPHS;

    fn default_renderer() -> (RingClassifier, AsciiRenderer) {
        let classifier = RingClassifier::default();
        let renderer = AsciiRenderer::new(100, 100, classifier.config()).unwrap();
        (classifier, renderer)
    }

    #[test]
    fn scale_truncates_integer_division() {
        let (_, renderer) = default_renderer();
        // 59_993_760 / 100 = 599_937.6 → 599_937
        assert_eq!(renderer.scale(), (599_937.0, 599_937.0));
    }

    #[test]
    fn scale_per_axis() {
        let renderer = AsciiRenderer::new(200, 50, &RingConfig::default()).unwrap();
        assert_eq!(renderer.scale(), (299_968.0, 1_199_875.0));
    }

    #[test]
    fn centre_cell_is_dense_even_outside_annulus() {
        let (classifier, renderer) = default_renderer();
        assert_eq!(renderer.world_point(50, 50).radius(), 0.0);
        assert!(!classifier.is_missing(0.0));
        let grid = renderer.render(&classifier).unwrap();
        assert_eq!(grid.get(50, 50), '#');
    }

    #[test]
    fn reference_cells() {
        let (classifier, renderer) = default_renderer();
        let grid = renderer.render(&classifier).unwrap();
        // densité ≈ 0.1329 à un pas du centre
        assert_eq!(grid.get(49, 50), ' ');
        assert_eq!(grid.get(51, 50), ' ');
        assert_eq!(grid.get(50, 49), ' ');
        // densité ≈ 0.9925 au coin haut-gauche
        assert_eq!(grid.get(0, 0), '#');
        assert_eq!(grid.get(99, 99), ' ');
    }

    #[test]
    fn grid_uses_only_palette_glyphs() {
        let (classifier, renderer) = default_renderer();
        let grid = renderer.render(&classifier).unwrap();
        assert!(grid.cells.iter().all(|c| DENSITY_GLYPHS.contains(c)));
    }

    #[test]
    fn mismatched_grid_is_an_error() {
        let (classifier, renderer) = default_renderer();
        let mut grid = CharGrid::new(10, 10).unwrap();
        assert!(matches!(
            renderer.render_into(&classifier, &mut grid),
            Err(CoreError::InvalidDimensions {
                width: 10,
                height: 10
            })
        ));
        assert!(grid.cells.iter().all(|&c| c == ' '));
    }

    #[test]
    fn oversized_grid_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("end_world.txt");
        assert!(AsciiRenderer::new(u32::MAX, u32::MAX, &RingConfig::default()).is_err());
        assert!(!render_ascii_file(
            &RingClassifier::default(),
            u32::MAX,
            u32::MAX,
            &path
        ));
        assert!(!path.exists());
    }

    #[test]
    fn zero_columns_rejected() {
        assert!(AsciiRenderer::new(0, 100, &RingConfig::default()).is_err());
    }

    #[test]
    fn written_file_has_rows_lines_of_cols_chars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("end_world.txt");
        let classifier = RingClassifier::default();
        assert!(render_ascii_file(&classifier, 37, 21, &path));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|l| l.chars().count() == 37));
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("end_world.txt");
        assert!(!render_ascii_file(&RingClassifier::default(), 10, 10, &path));
        assert!(!path.exists());
        assert!(!render_ascii_file(&RingClassifier::default(), 0, 10, &dir.path().join("z.txt")));
    }
}
