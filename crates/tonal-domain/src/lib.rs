//! Tonal Domain Layer
//!
//! Pure logic for range-state classification and the color gradients built
//! on top of it. No I/O, no logging and no external dependencies.
//!
//! ## Key Concepts
//!
//! - **Point**: a position along one axis
//! - **Spacing**: interval between the five virtual samples around a point
//! - **Range**: inclusive `[min, max]` band of valid values
//! - **Range state**: how far the sample window spills outside the range,
//!   as a code in `-2..=2`
//! - **Natural gradient**: five shades around a reference color, placed
//!   according to the range state of its lightness
//!
//! ## Example
//!
//! ```
//! use tonal_domain::{classify, classify_default, RangeState, SampleRange};
//!
//! assert_eq!(classify_default(0.5), RangeState::Within);
//! assert_eq!(classify(0.25, 0.2, SampleRange::new(0.0, 1.0)).code(), -1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod gradient;
pub mod range_state;

// Re-exports for convenience
pub use color::{Cmyk, ColorError, Hsl, Hsv, Lab, Rgb};
pub use gradient::{natural_gradient, natural_gradient_with, Gradient, GradientParams, Shade};
pub use range_state::{
    classify, classify_default, neighbors, RangeState, SampleRange, Sampler, DEFAULT_SPACING,
    SAMPLE_COUNT,
};
