use crate::config::RingConfig;

/// Point du plan monde (x, z), en blocs, centré sur l'origine.
///
/// # Example
/// ```
/// use ring_core::ring::WorldPoint;
/// let p = WorldPoint::new(3.0, 4.0);
/// assert_eq!(p.radius(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    /// East-west coordinate.
    pub x: f64,
    /// North-south coordinate.
    pub z: f64,
}

impl WorldPoint {
    #[must_use]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Distance à l'origine.
    #[inline(always)]
    #[must_use]
    pub fn radius(self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

/// Résultat complet de la classification pour un rayon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingClassification {
    /// Rayon évalué.
    pub radius: f64,
    /// `sin²(r²·omega)`.
    pub sin_squared: f64,
    /// Dans l'anneau et `sin_squared > threshold`.
    pub missing: bool,
    /// `1 − sin_squared`, dans [0, 1].
    pub density: f64,
}

/// Fonction pure rayon → état "anneau manquant" / densité.
///
/// # Example
/// ```
/// use ring_core::RingClassifier;
/// let classifier = RingClassifier::default();
/// assert!(!classifier.is_missing(0.0));
/// assert!(classifier.is_missing(370_720.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RingClassifier {
    config: RingConfig,
}

impl RingClassifier {
    #[must_use]
    pub fn new(config: RingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Terme périodique partagé : `sin(r²·omega)²`.
    #[inline(always)]
    #[must_use]
    pub fn sin_squared(&self, radius: f64) -> f64 {
        let s = (radius * radius * self.config.omega).sin();
        s * s
    }

    /// `radius` ∈ [ring_start, ring_end], bornes incluses.
    #[inline(always)]
    #[must_use]
    pub fn in_annulus(&self, radius: f64) -> bool {
        radius >= self.config.ring_start as f64 && radius <= self.config.ring_end as f64
    }

    /// Vrai si le rayon tombe dans l'anneau et que `sin²` dépasse le seuil.
    ///
    /// # Example
    /// ```
    /// use ring_core::RingClassifier;
    /// let classifier = RingClassifier::default();
    /// // Hors anneau : toujours faux, quelle que soit la valeur de sin².
    /// assert!(!classifier.is_missing(1_000.0));
    /// assert!(!classifier.is_missing(30_000_000.0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn is_missing(&self, radius: f64) -> bool {
        self.in_annulus(radius) && self.sin_squared(radius) > self.config.threshold
    }

    /// Densité continue `1 − sin²`, sans test d'anneau.
    ///
    /// # Example
    /// ```
    /// use ring_core::RingClassifier;
    /// let classifier = RingClassifier::default();
    /// assert_eq!(classifier.density(0.0), 1.0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn density(&self, radius: f64) -> f64 {
        1.0 - self.sin_squared(radius)
    }

    /// Toutes les grandeurs d'un coup, pour le survey et le debug.
    #[must_use]
    pub fn classify(&self, radius: f64) -> RingClassification {
        let sin_squared = self.sin_squared(radius);
        RingClassification {
            radius,
            sin_squared,
            missing: self.in_annulus(radius) && sin_squared > self.config.threshold,
            density: 1.0 - sin_squared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> RingClassifier {
        RingClassifier::default()
    }

    #[test]
    fn origin_is_not_missing() {
        assert!(!classifier().is_missing(0.0));
    }

    #[test]
    fn ring_start_reference_value() {
        let c = classifier();
        let sin_sq = c.sin_squared(370_720.0);
        assert!(
            (sin_sq - 1.666_527e-8).abs() < 1e-12,
            "sin² au rayon de départ : {sin_sq}"
        );
        assert!(c.is_missing(370_720.0));
    }

    #[test]
    fn outside_annulus_never_missing() {
        let c = classifier();
        // 1e6² · omega ≈ 22.86, sin² ≈ 0.58 : bien au-dessus du seuil.
        let wide = RingClassifier::new(RingConfig {
            ring_start: 2_000_000,
            ..RingConfig::default()
        });
        assert!(wide.sin_squared(1_000_000.0) > 0.5);
        assert!(!wide.is_missing(1_000_000.0));

        for r in [0.0, 1.0, 56.57, 370_719.0, 29_996_881.0, 1e9] {
            assert!(!c.is_missing(r), "r = {r}");
        }
    }

    #[test]
    fn inside_annulus_matches_threshold() {
        let c = classifier();
        let threshold = c.config().threshold;
        let mut r = 370_720.0;
        while r <= 29_996_880.0 {
            assert_eq!(c.is_missing(r), c.sin_squared(r) > threshold, "r = {r}");
            r += 123_457.0;
        }
        assert_eq!(
            c.is_missing(29_996_880.0),
            c.sin_squared(29_996_880.0) > threshold
        );
    }

    #[test]
    fn density_stays_in_unit_interval() {
        let c = classifier();
        let mut r = 0.0;
        while r < 40_000_000.0 {
            let d = c.density(r);
            assert!((0.0..=1.0).contains(&d), "densité hors bornes à r = {r} : {d}");
            r += 9_973.0;
        }
    }

    #[test]
    fn classify_agrees_with_single_operations() {
        let c = classifier();
        for r in [0.0, 370_720.0, 1_000_000.0, 29_996_880.0] {
            let k = c.classify(r);
            assert_eq!(k.missing, c.is_missing(r));
            assert_eq!(k.density.to_bits(), c.density(r).to_bits());
            assert_eq!(k.sin_squared.to_bits(), c.sin_squared(r).to_bits());
        }
    }

    #[test]
    fn world_point_radius() {
        assert_eq!(WorldPoint::new(-3.0, 4.0).radius(), 5.0);
        assert_eq!(WorldPoint::new(0.0, 0.0).radius(), 0.0);
    }
}
