//! Range state classification
//!
//! Classifies a point by sampling four neighbors around it and checking
//! which of them fall outside a range. The result tells a caller how far
//! a window of five evenly spaced samples centred on the point would spill
//! past either end of the range.

/// Default interval between sample points
pub const DEFAULT_SPACING: f64 = 0.2;

/// Number of conceptual sample points (the point plus four neighbors)
pub const SAMPLE_COUNT: usize = 5;

/// Inclusive band of valid values
///
/// `min <= max` is expected but not enforced. Classification against an
/// inverted range is still deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl SampleRange {
    /// Create a new range. No validation is performed.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Width of the range
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `min <= max`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Check if the range contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reflect a value across the midpoint of the range
    pub fn mirror(&self, value: f64) -> f64 {
        self.min + self.max - value
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl From<[f64; 2]> for SampleRange {
    fn from(bounds: [f64; 2]) -> Self {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<(f64, f64)> for SampleRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Where a point's sample window sits relative to a range
///
/// Variants are ordered from most-below to most-above, so `Ord` agrees
/// with [`RangeState::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeState {
    /// Both low neighbors are below the range (`-2`)
    FarBelow,

    /// Only the farthest low neighbor is below the range (`-1`)
    Below,

    /// All evaluated neighbors are inside the range (`0`)
    Within,

    /// Only the farthest high neighbor is above the range (`1`)
    Above,

    /// Both high neighbors are above the range (`2`)
    FarAbove,
}

impl RangeState {
    /// All states, lowest code first
    pub const ALL: [RangeState; 5] = [
        RangeState::FarBelow,
        RangeState::Below,
        RangeState::Within,
        RangeState::Above,
        RangeState::FarAbove,
    ];

    /// Integer classification code in `-2..=2`
    pub fn code(&self) -> i8 {
        match self {
            RangeState::FarBelow => -2,
            RangeState::Below => -1,
            RangeState::Within => 0,
            RangeState::Above => 1,
            RangeState::FarAbove => 2,
        }
    }

    /// State for an integer code, if it is in `-2..=2`
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -2 => Some(RangeState::FarBelow),
            -1 => Some(RangeState::Below),
            0 => Some(RangeState::Within),
            1 => Some(RangeState::Above),
            2 => Some(RangeState::FarAbove),
            _ => None,
        }
    }

    /// The state a mirrored point would get (negated code)
    pub fn mirrored(&self) -> Self {
        match self {
            RangeState::FarBelow => RangeState::FarAbove,
            RangeState::Below => RangeState::Above,
            RangeState::Within => RangeState::Within,
            RangeState::Above => RangeState::Below,
            RangeState::FarAbove => RangeState::FarBelow,
        }
    }

    /// Get the state name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeState::FarBelow => "far-below",
            RangeState::Below => "below",
            RangeState::Within => "within",
            RangeState::Above => "above",
            RangeState::FarAbove => "far-above",
        }
    }

    /// Parse a state from its name or its code
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i8>() {
            return Self::from_code(code);
        }
        match s.to_lowercase().replace('_', "-").as_str() {
            "far-below" => Some(RangeState::FarBelow),
            "below" => Some(RangeState::Below),
            "within" => Some(RangeState::Within),
            "above" => Some(RangeState::Above),
            "far-above" => Some(RangeState::FarAbove),
            _ => None,
        }
    }
}

impl std::fmt::Display for RangeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RangeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid range state: {}", s))
    }
}

impl From<RangeState> for i8 {
    fn from(state: RangeState) -> Self {
        state.code()
    }
}

/// Sample positions `[p1, p2, p3, p4, p5]` around `point`
///
/// The window spans `spacing * (SAMPLE_COUNT - 1)` and is centred on
/// `point`, which is `p3`.
pub fn neighbors(point: f64, spacing: f64) -> [f64; SAMPLE_COUNT] {
    let span = spacing * (SAMPLE_COUNT - 1) as f64;
    [
        point - span / 2.0,
        point - span / 4.0,
        point,
        point + span / 4.0,
        point + span / 2.0,
    ]
}

/// Classify `point` against `range` using samples `spacing` apart
///
/// Checks run most-extreme first and the first match wins:
///
/// | condition | state |
/// |-----------|-------|
/// | `p1 < min && p2 < min` | [`RangeState::FarBelow`] |
/// | `p1 < min` | [`RangeState::Below`] |
/// | `p5 > max && p4 > max` | [`RangeState::FarAbove`] |
/// | `p5 > max` | [`RangeState::Above`] |
/// | otherwise | [`RangeState::Within`] |
///
/// Total over all `f64` inputs. Non-positive `spacing` or an inverted
/// range are not rejected; the comparisons above are evaluated as-is.
/// A NaN anywhere makes every comparison false, which yields `Within`.
pub fn classify(point: f64, spacing: f64, range: SampleRange) -> RangeState {
    let [p1, p2, _, p4, p5] = neighbors(point, spacing);

    if p1 < range.min && p2 < range.min {
        RangeState::FarBelow
    } else if p1 < range.min {
        RangeState::Below
    } else if p5 > range.max && p4 > range.max {
        RangeState::FarAbove
    } else if p5 > range.max {
        RangeState::Above
    } else {
        RangeState::Within
    }
}

/// Classify with the default spacing (0.2) and range (`[0, 1]`)
pub fn classify_default(point: f64) -> RangeState {
    Sampler::default().classify(point)
}

/// Spacing and range bundled together
///
/// Stands in for the optional parameters of [`classify`]: start from
/// [`Sampler::default`] and override what the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    /// Interval between sample points
    pub spacing: f64,
    /// Range the samples are checked against
    pub range: SampleRange,
}

impl Sampler {
    /// Create a sampler from explicit parameters
    pub fn new(spacing: f64, range: impl Into<SampleRange>) -> Self {
        Self {
            spacing,
            range: range.into(),
        }
    }

    /// Replace the spacing
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replace the range
    pub fn with_range(mut self, range: impl Into<SampleRange>) -> Self {
        self.range = range.into();
        self
    }

    /// Total width covered by the five samples
    pub fn span(&self) -> f64 {
        self.spacing * (SAMPLE_COUNT - 1) as f64
    }

    /// Sample positions around `point`
    pub fn neighbors(&self, point: f64) -> [f64; SAMPLE_COUNT] {
        neighbors(point, self.spacing)
    }

    /// Classify `point` with this sampler's parameters
    pub fn classify(&self, point: f64) -> RangeState {
        classify(point, self.spacing, self.range)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            range: SampleRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_within() {
        assert_eq!(classify_default(0.5), RangeState::Within);
    }

    #[test]
    fn test_far_below() {
        assert_eq!(classify_default(-0.5), RangeState::FarBelow);
        assert_eq!(classify_default(0.05), RangeState::FarBelow);
    }

    #[test]
    fn test_below() {
        // p1 = -0.15, p2 = 0.05
        assert_eq!(classify_default(0.25), RangeState::Below);
    }

    #[test]
    fn test_far_above() {
        assert_eq!(classify_default(1.5), RangeState::FarAbove);
        assert_eq!(classify_default(0.95), RangeState::FarAbove);
        assert_eq!(classify_default(0.85), RangeState::FarAbove);
    }

    #[test]
    fn test_above() {
        // p4 = 0.95, p5 = 1.15
        assert_eq!(classify_default(0.75), RangeState::Above);
    }

    #[test]
    fn test_codes() {
        let codes: Vec<i8> = [-0.5, 0.25, 0.5, 0.75, 1.5]
            .iter()
            .map(|&p| classify_default(p).code())
            .collect();
        assert_eq!(codes, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_neighbors() {
        let n = neighbors(0.5, 0.25);
        assert_eq!(n, [0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // Samples landing exactly on the bounds count as inside
        let sampler = Sampler::new(0.25, [0.0, 1.0]);
        assert_eq!(sampler.classify(0.5), RangeState::Within);
    }

    #[test]
    fn test_low_checks_win_over_high() {
        // Window wider than the range trips both ends; low is reported
        let sampler = Sampler::default().with_spacing(1.0);
        assert_eq!(sampler.classify(0.5), RangeState::FarBelow);
    }

    #[test]
    fn test_custom_range() {
        let sampler = Sampler::default().with_range((10.0, 20.0));
        assert_eq!(sampler.classify(15.0), RangeState::Within);
        assert_eq!(sampler.classify(5.0), RangeState::FarBelow);
        assert_eq!(sampler.classify(25.0), RangeState::FarAbove);
    }

    #[test]
    fn test_nan_point_is_within() {
        assert_eq!(classify_default(f64::NAN), RangeState::Within);
    }

    #[test]
    fn test_infinite_points() {
        assert_eq!(classify_default(f64::NEG_INFINITY), RangeState::FarBelow);
        assert_eq!(classify_default(f64::INFINITY), RangeState::FarAbove);
    }

    #[test]
    fn test_inverted_range_is_deterministic() {
        let range = SampleRange::new(1.0, 0.0);
        assert!(!range.is_ordered());
        let first = classify(0.5, 0.2, range);
        let second = classify(0.5, 0.2, range);
        assert_eq!(first, second);
        // p1 = 0.1 < 1.0 and p2 = 0.3 < 1.0
        assert_eq!(first, RangeState::FarBelow);
    }

    #[test]
    fn test_zero_spacing_collapses_window() {
        assert_eq!(classify(0.0, 0.0, SampleRange::default()), RangeState::Within);
        assert_eq!(classify(-0.1, 0.0, SampleRange::default()), RangeState::FarBelow);
    }

    #[test]
    fn test_mirrored() {
        for state in RangeState::ALL {
            assert_eq!(state.mirrored().code(), -state.code());
            assert_eq!(state.mirrored().mirrored(), state);
        }
    }

    #[test]
    fn test_from_code() {
        for state in RangeState::ALL {
            assert_eq!(RangeState::from_code(state.code()), Some(state));
        }
        assert_eq!(RangeState::from_code(3), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(RangeState::parse("far-below"), Some(RangeState::FarBelow));
        assert_eq!(RangeState::parse("FAR_ABOVE"), Some(RangeState::FarAbove));
        assert_eq!(RangeState::parse("-1"), Some(RangeState::Below));
        assert_eq!(RangeState::parse("sideways"), None);
        assert!("within".parse::<RangeState>().is_ok());
    }

    #[test]
    fn test_ordering_matches_code() {
        for pair in RangeState::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].code() < pair[1].code());
        }
    }

    #[test]
    fn test_range_helpers() {
        let range = SampleRange::from([2.0, 6.0]);
        assert_eq!(range.midpoint(), 4.0);
        assert_eq!(range.width(), 4.0);
        assert_eq!(range.mirror(3.0), 5.0);
        assert!(range.contains(2.0));
        assert!(!range.contains(6.5));
    }
}
