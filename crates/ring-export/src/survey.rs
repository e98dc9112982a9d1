use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use ring_core::config::RingConfig;
use ring_core::output::{report_write, write_text};
use ring_core::ring::RingClassifier;

/// Une ligne du survey : un anneau échantillonné.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurveyEntry {
    /// Numéro d'anneau, à partir de 1.
    pub index: u32,
    /// Rayon interpolé linéairement entre `ring_start` et `ring_end`.
    pub theoretical_radius: f64,
    /// Rayon aligné sur le bloc (plancher).
    pub actual_radius: u64,
    /// `sin²` au rayon effectif.
    pub sin_squared: f64,
    pub missing: bool,
}

/// Tabulation de la classification sur `total_rings` rayons régulièrement
/// espacés dans l'anneau.
///
/// # Example
/// ```
/// use ring_core::RingClassifier;
/// use ring_export::survey::RingSurvey;
///
/// let survey = RingSurvey::run(&RingClassifier::default());
/// assert_eq!(survey.entries().len(), 3274);
/// assert_eq!(survey.entries()[0].actual_radius, 370_720);
/// ```
#[derive(Clone, Debug)]
pub struct RingSurvey {
    config: RingConfig,
    entries: Vec<SurveyEntry>,
}

impl RingSurvey {
    #[must_use]
    pub fn run(classifier: &RingClassifier) -> Self {
        let config = *classifier.config();
        let span = config.ring_end.saturating_sub(config.ring_start);
        let steps = f64::from(config.total_rings.saturating_sub(1).max(1));

        let entries = (1..=config.total_rings)
            .map(|index| {
                // produit entier, division réelle
                let offset = u64::from(index - 1).saturating_mul(span) as f64 / steps;
                let theoretical_radius = config.ring_start as f64 + offset;
                let actual_radius = theoretical_radius.floor() as u64;
                let k = classifier.classify(actual_radius as f64);
                SurveyEntry {
                    index,
                    theoretical_radius,
                    actual_radius,
                    sin_squared: k.sin_squared,
                    missing: k.missing,
                }
            })
            .collect();

        Self { config, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SurveyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.missing).count()
    }

    /// Rapport texte : en-tête, un bloc par anneau, pied.
    #[must_use]
    pub fn to_report(&self) -> String {
        let mut out = String::with_capacity(128 * self.entries.len() + 256);
        // fmt::Write sur String ne peut pas échouer
        let _ = writeln!(out, "=== Survey des anneaux manquants ===");
        let _ = writeln!(out, "Anneaux : {}", self.config.total_rings);
        let _ = writeln!(out, "Rayon de départ : ±{} blocs", self.config.ring_start);
        let _ = writeln!(out, "Rayon de fin : ±{} blocs\n", self.config.ring_end);

        for e in &self.entries {
            let _ = writeln!(out, "Anneau {} :", e.index);
            let _ = writeln!(out, "  rayon théorique : {} blocs", e.theoretical_radius);
            let _ = writeln!(out, "  rayon effectif : {} blocs", e.actual_radius);
            let _ = writeln!(
                out,
                "  état : {}",
                if e.missing { "manquant" } else { "généré" }
            );
            let _ = writeln!(out, "  sin² : {:e}\n", e.sin_squared);
        }

        let _ = writeln!(
            out,
            "Manquants : {} / {}",
            self.missing_count(),
            self.entries.len()
        );
        let _ = write!(out, "=== Survey terminé ===");
        out
    }

    /// # Errors
    /// Returns an error if the report cannot be written.
    pub fn write(&self, path: &Path) -> Result<()> {
        write_text(path, &self.to_report())?;
        Ok(())
    }
}

/// Calcule et écrit le survey. Erreurs loguées, jamais propagées.
pub fn render_survey_file(classifier: &RingClassifier, path: &Path) -> bool {
    let survey = RingSurvey::run(classifier);
    log::debug!(
        "Survey : {} anneaux manquants sur {}",
        survey.missing_count(),
        survey.entries().len()
    );
    report_write("Survey", path, survey.write(path))
}
