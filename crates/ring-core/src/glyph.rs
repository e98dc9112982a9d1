/// Palette de densité, du plus clair au plus dense.
pub const DENSITY_GLYPHS: [char; 4] = [' ', '.', '*', '#'];

/// Bornes inférieures (exclusives pour le palier précédent) des paliers 1..=3.
pub const DENSITY_THRESHOLDS: [f64; 3] = [0.3, 0.6, 0.9];

/// Map a density in [0, 1] to one of the four glyphs.
///
/// Une densité égale à une borne bascule dans le palier supérieur.
///
/// # Example
/// ```
/// use ring_core::glyph::char_for_density;
/// assert_eq!(char_for_density(0.0), ' ');
/// assert_eq!(char_for_density(0.3), '.');
/// assert_eq!(char_for_density(0.95), '#');
/// ```
#[inline(always)]
#[must_use]
pub fn char_for_density(density: f64) -> char {
    DENSITY_THRESHOLDS
        .iter()
        .position(|&bound| density < bound)
        .map_or(DENSITY_GLYPHS[DENSITY_THRESHOLDS.len()], |tier| {
            DENSITY_GLYPHS[tier]
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_upper_tier() {
        assert_eq!(char_for_density(0.299_999), ' ');
        assert_eq!(char_for_density(0.3), '.');
        assert_eq!(char_for_density(0.6), '*');
        assert_eq!(char_for_density(0.9), '#');
        assert_eq!(char_for_density(1.0), '#');
    }

    #[test]
    fn glyphs_monotonic_in_density() {
        let mut prev_idx = 0usize;
        for i in 0..=1000 {
            let d = f64::from(i) / 1000.0;
            let ch = char_for_density(d);
            let idx = DENSITY_GLYPHS.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "palette non monotone à densité {d}");
            prev_idx = idx;
        }
        assert_eq!(prev_idx, DENSITY_GLYPHS.len() - 1);
    }
}
