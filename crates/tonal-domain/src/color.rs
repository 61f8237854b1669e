//! Color model
//!
//! sRGB colors parsed from hex strings, with conversions to HSL, HSV,
//! CMYK and CIE L*a*b* (D65 white point).

use std::fmt;

/// D65 reference white in XYZ
const D65: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// Errors from parsing or converting colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string is not `#rgb` or `#rrggbb`
    InvalidHex(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHex(hex) => write!(f, "Invalid hex color: {}", hex),
        }
    }
}

impl std::error::Error for ColorError {}

/// sRGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

/// HSL color
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

/// HSV color
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

/// CMYK color with all components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

/// CIE L*a*b* color, `l` in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Rgb {
    /// Create a color from channels in `[0, 1]`
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb255(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::from_rgb255(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::from_rgb255(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// 8-bit channels, clamped and rounded
    pub fn to_rgb255(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb255();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert to HSL
    pub fn to_hsl(&self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };

        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        Hsl::new(h * 60.0, s, l)
    }

    /// Convert to HSV. Hue matches [`Rgb::to_hsl`].
    pub fn to_hsv(&self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };

        Hsv {
            h: self.to_hsl().h,
            s,
            v: max,
        }
    }

    /// Convert to CMYK. Pure black is `(0, 0, 0, 1)`.
    pub fn to_cmyk(&self) -> Cmyk {
        let (r, g, b) = self.to_rgb255();
        let c = 1.0 - r as f64 / 255.0;
        let m = 1.0 - g as f64 / 255.0;
        let y = 1.0 - b as f64 / 255.0;
        let k = c.min(m).min(y);

        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }

        Cmyk {
            c: (c - k) / (1.0 - k),
            m: (m - k) / (1.0 - k),
            y: (y - k) / (1.0 - k),
            k,
        }
    }

    /// Convert to CIE L*a*b* against D65
    pub fn to_lab(&self) -> Lab {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        let x = 0.4123907992659595 * r + 0.3575843393838780 * g + 0.1804807884018343 * b;
        let y = 0.2126390058715104 * r + 0.7151686787677559 * g + 0.0721923153607337 * b;
        let z = 0.0193308187155919 * r + 0.1191947797946260 * g + 0.9505321522496606 * b;

        let fx = lab_f(x / D65[0]);
        let fy = lab_f(y / D65[1]);
        let fz = lab_f(z / D65[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl Hsl {
    /// Create an HSL color. No wrapping or clamping is performed.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to sRGB
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            return Rgb::new(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h.rem_euclid(360.0) / 360.0;

        Rgb::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb255();
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({:.1}, {:.1}%, {:.1}%)", self.h, self.s * 100.0, self.v * 100.0)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({:.1}%, {:.1}%, {:.1}%, {:.1}%)",
            self.c * 100.0,
            self.m * 100.0,
            self.y * 100.0,
            self.k * 100.0
        )
    }
}

/// Prints L* on the `[0, 100]` scale, e.g. `lab(53.24, 80.09, 67.20)` for red.
impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab({:.2}, {:.2}, {:.2})", self.l, self.a, self.b)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn linearize(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}
