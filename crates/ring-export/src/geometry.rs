use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use ring_core::output::{report_write, write_text};

/// Constante `C` de `sin((x² + z²) / C)`, soit `1 / omega` arrondi.
pub const RING_CONSTANT: f64 = 43_748_181_634.0;
/// Hauteur visible estimée, en multiple du rayon extérieur.
pub const VIEW_HEIGHT_FACTOR: f64 = 1.15;
/// Zone d'imprécision flottante (rayon extérieur, bornes exclues).
pub const GLITCH_ZONE: (f64, f64) = (3e10, 3.43e10);

/// Aire constante de chaque bande : `C·π²`.
#[must_use]
pub fn band_area() -> f64 {
    RING_CONSTANT * PI * PI
}

#[must_use]
pub fn in_glitch_zone(radius: f64) -> bool {
    radius > GLITCH_ZONE.0 && radius < GLITCH_ZONE.1
}

/// Bande `n` : rayons `sqrt(C·π·2n)` et `sqrt(C·π·(2n+1))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    pub index: u64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub width: f64,
    pub view_height: f64,
    pub glitch: bool,
}

impl RingBand {
    /// # Example
    /// ```
    /// use ring_export::geometry::RingBand;
    /// let first = RingBand::nth(0);
    /// assert_eq!(first.inner_radius, 0.0);
    /// assert_eq!(first.outer_radius.floor(), 370_727.0);
    /// ```
    #[must_use]
    pub fn nth(index: u64) -> Self {
        let n = index as f64;
        let inner_radius = (RING_CONSTANT * PI * (2.0 * n)).sqrt();
        let outer_radius = (RING_CONSTANT * PI * (2.0 * n + 1.0)).sqrt();
        Self {
            index,
            inner_radius,
            outer_radius,
            width: outer_radius - inner_radius,
            view_height: outer_radius * VIEW_HEIGHT_FACTOR,
            glitch: in_glitch_zone(outer_radius),
        }
    }

    /// `π(r_ext² − r_int²)`, égale à [`band_area`] aux arrondis près.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }
}

/// Table bornée de `count` bandes consécutives à partir de `first`.
#[derive(Clone, Debug)]
pub struct RingGeometry {
    bands: Vec<RingBand>,
}

impl RingGeometry {
    #[must_use]
    pub fn run(first: u64, count: u32) -> Self {
        let bands = (0..u64::from(count))
            .map_while(|i| first.checked_add(i))
            .map(RingBand::nth)
            .collect();
        Self { bands }
    }

    #[must_use]
    pub fn bands(&self) -> &[RingBand] {
        &self.bands
    }

    /// Rapport texte, rayons en millions de blocs.
    #[must_use]
    pub fn to_report(&self) -> String {
        let mut out = String::with_capacity(256 * self.bands.len() + 128);
        let _ = writeln!(out, "=== Géométrie des anneaux ===");
        let _ = writeln!(out, "Constante C : {RING_CONSTANT}");
        let _ = writeln!(out, "Aire par bande : {:.2} M blocs²\n", band_area() / 1e6);

        for b in &self.bands {
            let _ = writeln!(out, "[Anneau {}]", b.index);
            let _ = writeln!(out, "Rayon intérieur : {:.2} M blocs", b.inner_radius / 1e6);
            let _ = writeln!(out, "Rayon extérieur : {:.2} M blocs", b.outer_radius / 1e6);
            let _ = writeln!(out, "Largeur : {:.2} M blocs", b.width / 1e6);
            let _ = writeln!(
                out,
                "Hauteur visible estimée : {:.2} M blocs",
                b.view_height / 1e6
            );
            if b.glitch {
                let _ = writeln!(
                    out,
                    "Attention : zone d'imprécision flottante, visibilité des anneaux incohérente"
                );
            }
            let _ = writeln!(out, "--------------------------------------");
        }

        let _ = write!(out, "=== {} anneaux ===", self.bands.len());
        out
    }

    /// # Errors
    /// Returns an error if the report cannot be written.
    pub fn write(&self, path: &Path) -> Result<()> {
        write_text(path, &self.to_report())?;
        Ok(())
    }
}

/// Calcule et écrit la table. Erreurs loguées, jamais propagées.
pub fn render_geometry_file(first: u64, count: u32, path: &Path) -> bool {
    let geometry = RingGeometry::run(first, count);
    log::debug!(
        "Géométrie : {} bandes à partir de {first}",
        geometry.bands().len()
    );
    report_write("Géométrie", path, geometry.write(path))
}
