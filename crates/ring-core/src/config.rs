use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Constantes de la fonction de classification des anneaux.
///
/// Une seule source pour les trois rendus (PNG, ASCII, survey).
///
/// # Example
/// ```
/// use ring_core::config::RingConfig;
/// let ring = RingConfig::default();
/// assert_eq!(ring.ring_start, 370_720);
/// assert_eq!(ring.total_rings, 3274);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct RingConfig {
    /// Fréquence du terme périodique `sin²(r²·omega)`.
    pub omega: f64,
    /// Rayon intérieur de l'anneau (blocs).
    pub ring_start: u64,
    /// Rayon extérieur de l'anneau (blocs).
    pub ring_end: u64,
    /// Nombre d'anneaux échantillonnés par le survey.
    pub total_rings: u32,
    /// Seuil de détection : `sin² > threshold` ⇒ anneau manquant.
    pub threshold: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            omega: 0.000_000_000_022_858_092_9,
            ring_start: 370_720,
            ring_end: 29_996_880,
            total_rings: 3274,
            threshold: 1e-9,
        }
    }
}

/// Paramètres du rendu PNG.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PngConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Missing pixels become fully transparent instead of solid gray.
    pub show_missing_transparent: bool,
    /// Destination file.
    pub output: PathBuf,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            width: 8000,
            height: 8000,
            show_missing_transparent: true,
            output: PathBuf::from("end_world.png"),
        }
    }
}

/// Paramètres du rendu texte.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AsciiConfig {
    /// Characters per line.
    pub cols: u32,
    /// Number of lines.
    pub rows: u32,
    /// Destination file.
    pub output: PathBuf,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            cols: 100,
            rows: 100,
            output: PathBuf::from("end_world.txt"),
        }
    }
}

/// Configuration complète d'un passage de rendu.
///
/// Chaque champ a une valeur par défaut : sans fichier TOML, le programme
/// produit exactement `end_world.png` (8000×8000) et `end_world.txt` (100×100).
///
/// # Example
/// ```
/// use ring_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.png.width, 8000);
/// assert_eq!(config.ascii.cols, 100);
/// assert!(config.png.show_missing_transparent);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Classification constants.
    pub ring: RingConfig,
    /// Raster output.
    pub png: PngConfig,
    /// Character-grid output.
    pub ascii: AsciiConfig,
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent unusable values.
    pub fn clamp_all(&mut self) {
        self.png.width = self.png.width.max(1);
        self.png.height = self.png.height.max(1);
        self.ascii.cols = self.ascii.cols.max(1);
        self.ascii.rows = self.ascii.rows.max(1);
        self.ring.ring_end = self.ring.ring_end.max(self.ring.ring_start);
        self.ring.total_rings = self.ring.total_rings.max(2);
        if !(self.ring.threshold.is_finite() && self.ring.threshold > 0.0) {
            log::warn!(
                "Seuil invalide ({}), retour au défaut.",
                self.ring.threshold
            );
            self.ring.threshold = RingConfig::default().threshold;
        }
        if !self.ring.omega.is_finite() {
            log::warn!("Omega invalide ({}), retour au défaut.", self.ring.omega);
            self.ring.omega = RingConfig::default().omega;
        }
    }
}

/// Structure TOML intermédiaire : toutes les sections sont optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    ring: Option<RingSection>,
    png: Option<PngSection>,
    ascii: Option<AsciiSection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RingSection {
    omega: Option<f64>,
    ring_start: Option<u64>,
    ring_end: Option<u64>,
    total_rings: Option<u32>,
    threshold: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PngSection {
    width: Option<u32>,
    height: Option<u32>,
    show_missing_transparent: Option<bool>,
    output: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AsciiSection {
    cols: Option<u32>,
    rows: Option<u32>,
    output: Option<PathBuf>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML or names unknown keys.
///
/// # Example
/// ```
/// use ring_core::config::parse_config;
/// let config = parse_config("[ascii]\ncols = 40\n").unwrap();
/// assert_eq!(config.ascii.cols, 40);
/// assert_eq!(config.ascii.rows, 100);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| CoreError::Config(e.message().to_string()))?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.ring {
        if let Some(v) = r.omega {
            config.ring.omega = v;
        }
        if let Some(v) = r.ring_start {
            config.ring.ring_start = v;
        }
        if let Some(v) = r.ring_end {
            config.ring.ring_end = v;
        }
        if let Some(v) = r.total_rings {
            config.ring.total_rings = v;
        }
        if let Some(v) = r.threshold {
            config.ring.threshold = v;
        }
    }

    if let Some(p) = file.png {
        if let Some(v) = p.width {
            config.png.width = v;
        }
        if let Some(v) = p.height {
            config.png.height = v;
        }
        if let Some(v) = p.show_missing_transparent {
            config.png.show_missing_transparent = v;
        }
        if let Some(v) = p.output {
            config.png.output = v;
        }
    }

    if let Some(a) = file.ascii {
        if let Some(v) = a.cols {
            config.ascii.cols = v;
        }
        if let Some(v) = a.rows {
            config.ascii.rows = v;
        }
        if let Some(v) = a.output {
            config.ascii.output = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ring_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}
