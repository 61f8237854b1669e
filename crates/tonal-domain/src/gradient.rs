//! Natural gradient generation
//!
//! Builds a five-shade gradient around a reference color. Digital gradients
//! usually vary lightness linearly; natural ones drift in hue and saturation
//! as well. The tuning constants below are empirical.
//!
//! The reference color's HSL lightness is classified with
//! [`crate::range_state`] to decide where the reference sits inside the
//! gradient, so that no generated shade runs off either end of `[0, 1]`:
//!
//! ```text
//! FarBelow  [*] [-] [-] [-] [-]
//! Below     [-] [*] [-] [-] [-]
//! Within    [-] [-] [*] [-] [-]
//! Above     [-] [-] [-] [*] [-]
//! FarAbove  [-] [-] [-] [-] [*]
//! ```

use crate::color::{ColorError, Hsl, Lab, Rgb};
use crate::range_state::{RangeState, Sampler, SAMPLE_COUNT};

/// Tuning parameters for [`natural_gradient_with`]
#[derive(Debug, Clone, PartialEq)]
pub struct GradientParams {
    /// Sampler used to classify the reference lightness
    pub sampler: Sampler,
    /// Saturation below which colors count as greyish
    pub sat_low_breakpoint: f64,
    /// Saturation above which colors count as vivid
    pub sat_high_breakpoint: f64,
    /// Lightness above which shades are pulled darker
    pub lit_high_breakpoint: f64,
    /// Lightness step when the reference is centred
    pub centred_step: f64,
    /// Lightness step when the reference is one slot off centre
    pub offset_step: f64,
    /// Lightness step when the reference is at an end
    pub edge_step: f64,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            sampler: Sampler::default(),
            sat_low_breakpoint: 0.08,
            sat_high_breakpoint: 0.5,
            lit_high_breakpoint: 0.79,
            centred_step: 0.09,
            offset_step: 0.07,
            edge_step: 0.06,
        }
    }
}

/// One color of a gradient
#[derive(Debug, Clone, PartialEq)]
pub struct Shade {
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// HSL after wrapping and clamping
    pub hsl: Hsl,
    /// CIE L*a*b* of the quantized color
    pub lab: Lab,
}

/// A generated gradient
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Classification of the reference lightness
    pub state: RangeState,
    /// Shades ordered dark to light
    pub shades: Vec<Shade>,
}

impl Gradient {
    /// Index of the slot built from the unmodified reference color
    pub fn reference_index(&self) -> usize {
        reference_index(self.state)
    }

    /// The shade built from the reference color
    pub fn reference(&self) -> &Shade {
        &self.shades[self.reference_index()]
    }
}

/// Slot occupied by the reference color for a given state
pub fn reference_index(state: RangeState) -> usize {
    match state {
        RangeState::FarBelow => 0,
        RangeState::Below => 1,
        RangeState::Within => 2,
        RangeState::Above => 3,
        RangeState::FarAbove => 4,
    }
}

/// Generate a natural gradient with default parameters
pub fn natural_gradient(hex: &str) -> Result<Gradient, ColorError> {
    natural_gradient_with(hex, &GradientParams::default())
}

/// Generate a natural gradient around the color `hex`
pub fn natural_gradient_with(hex: &str, params: &GradientParams) -> Result<Gradient, ColorError> {
    let Hsl { h, s, l } = Rgb::from_hex(hex)?.to_hsl();
    let state = params.sampler.classify(l);

    let (light, sat) = boosters(s, l, params);

    let v = match state {
        RangeState::Within => params.centred_step,
        RangeState::Above | RangeState::Below => params.offset_step,
        RangeState::FarAbove | RangeState::FarBelow => params.edge_step,
    };

    let (hue, saturation, lightness): ([f64; 5], [f64; 5], [f64; 5]) = match state {
        RangeState::Within => (
            [h - 2.0, h - 1.0, h, h + 1.0, h + 2.0],
            [s * 0.83, s * 0.91, s, s * (1.1 + sat), s * (1.2 + sat * 2.0)],
            [
                l - v * 1.75 + 2.0 * light,
                l - v + light,
                l,
                l + v + light,
                l + 2.0 * v + 2.0 * light,
            ],
        ),
        RangeState::Above => (
            [h - 3.0, h - 2.0, h - 1.0, h, h + 1.0],
            [s * 0.77, s * 0.83, s * 0.91, s, s * (1.1 + sat)],
            [
                l - 3.0 * v + 3.0 * light,
                l - 2.0 * v + 2.0 * light,
                l - v + light,
                l,
                l + v + light,
            ],
        ),
        RangeState::FarAbove => (
            [h - 4.0, h - 3.0, h - 2.0, h - 1.0, h],
            [s * 0.5, s * 0.6, s * 0.7, s * 0.8, s],
            [l - 4.0 * v, l - 3.0 * v, l - 2.0 * v, l - v, l],
        ),
        RangeState::FarBelow => (
            [h, h + 1.0, h + 2.0, h + 3.0, h + 4.0],
            [s, s, s, s * (1.1 + sat), s * (1.2 + sat * 2.0)],
            [
                l,
                l + v + light,
                l + 2.0 * v + 2.0 * light,
                l + 3.0 * v + 3.0 * light,
                l + 4.0 * v + 4.0 * light,
            ],
        ),
        RangeState::Below => (
            [h - 1.0, h, h + 1.0, h + 2.0, h + 3.0],
            [
                s * 0.9,
                s,
                s * (1.1 + sat),
                s * (1.2 + sat * 2.0),
                s * (1.3 + sat * 2.0),
            ],
            [
                l - v,
                l,
                l + v,
                l + v * 2.0 + 2.0 * light,
                l + v * 3.0 + 3.0 * light,
            ],
        ),
    };

    let shades = (0..SAMPLE_COUNT)
        .map(|i| shade(hue[i], saturation[i], lightness[i]))
        .collect();

    Ok(Gradient { state, shades })
}

/// Lightness and saturation corrections for a reference color
fn boosters(s: f64, l: f64, params: &GradientParams) -> (f64, f64) {
    let (mut light, mut sat) = (0.0, 0.0);

    if s < params.sat_low_breakpoint {
        light = 0.03;
        sat = 0.05;
    } else if s > params.sat_high_breakpoint {
        sat = -0.05;
    }

    // Lightness breakpoint overrides the saturation-driven light boost
    if l < params.lit_high_breakpoint {
        light = 0.0;
    } else if l > params.lit_high_breakpoint {
        light = -0.03;
    }

    (light, sat)
}

fn shade(h: f64, s: f64, l: f64) -> Shade {
    let hsl = Hsl::new(
        h.rem_euclid(360.0),
        s.clamp(0.0, 1.0),
        l.clamp(0.01, 0.99),
    );
    // Lab of the color actually emitted, not of the unquantized one
    let (r, g, b) = hsl.to_rgb().to_rgb255();
    let rgb = Rgb::from_rgb255(r, g, b);

    Shade {
        hex: rgb.to_hex(),
        hsl,
        lab: rgb.to_lab(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_has_five_shades() {
        let gradient = natural_gradient("#8a4578").unwrap();
        assert_eq!(gradient.shades.len(), 5);
    }

    #[test]
    fn test_mid_lightness_is_centred() {
        // hsl(0, 100%, 50%)
        let gradient = natural_gradient("#ff0000").unwrap();
        assert_eq!(gradient.state, RangeState::Within);
        assert_eq!(gradient.reference_index(), 2);
        assert_eq!(gradient.reference().hex, "#ff0000");
    }

    #[test]
    fn test_black_starts_gradient() {
        let gradient = natural_gradient("#000000").unwrap();
        assert_eq!(gradient.state, RangeState::FarBelow);
        assert_eq!(gradient.reference_index(), 0);
        // Lightness is clamped to at least 0.01
        assert_ne!(gradient.shades[0].hex, "#000000");
    }

    #[test]
    fn test_white_ends_gradient() {
        let gradient = natural_gradient("#ffffff").unwrap();
        assert_eq!(gradient.state, RangeState::FarAbove);
        assert_eq!(gradient.reference_index(), 4);
    }

    #[test]
    fn test_shades_get_lighter() {
        for hex in ["#000000", "#333333", "#ff0000", "#bbbbbb", "#ffffff", "#8a4578"] {
            let gradient = natural_gradient(hex).unwrap();
            for pair in gradient.shades.windows(2) {
                assert!(
                    pair[0].hsl.l <= pair[1].hsl.l,
                    "{} not ordered dark to light: {} > {}",
                    hex,
                    pair[0].hex,
                    pair[1].hex
                );
            }
        }
    }

    #[test]
    fn test_shades_stay_in_gamut() {
        let gradient = natural_gradient("#edf246").unwrap();
        for shade in &gradient.shades {
            assert!((0.0..360.0).contains(&shade.hsl.h));
            assert!((0.0..=1.0).contains(&shade.hsl.s));
            assert!((0.01..=0.99).contains(&shade.hsl.l));
        }
    }

    #[test]
    fn test_invalid_hex() {
        assert!(natural_gradient("not-a-color").is_err());
    }

    #[test]
    fn test_boosters() {
        let params = GradientParams::default();
        // Greyish and light
        assert_eq!(boosters(0.0, 0.9, &params), (-0.03, 0.05));
        // Greyish and dark
        assert_eq!(boosters(0.0, 0.3, &params), (0.0, 0.05));
        // Vivid
        assert_eq!(boosters(0.9, 0.5, &params), (0.0, -0.05));
        // Exactly at the lightness breakpoint keeps the saturation boost
        assert_eq!(boosters(0.0, 0.79, &params), (0.03, 0.05));
    }

    #[test]
    fn test_custom_sampler_changes_placement() {
        // A narrow window keeps dark colors centred
        let params = GradientParams {
            sampler: Sampler::default().with_spacing(0.05),
            ..GradientParams::default()
        };
        let gradient = natural_gradient_with("#1a1a1a", &params).unwrap();
        assert_eq!(gradient.state, RangeState::Within);

        let default = natural_gradient("#1a1a1a").unwrap();
        assert_eq!(default.state, RangeState::FarBelow);
        assert_eq!(natural_gradient("#333333").unwrap().state, RangeState::Below);
    }

    #[test]
    fn test_reference_index_covers_all_states() {
        let indices: Vec<usize> = RangeState::ALL.iter().map(|&s| reference_index(s)).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}
