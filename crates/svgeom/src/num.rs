//! Numeric formatting shared by geometry helpers and path serialization.
//!
//! - `RoundCfg`: rounding policy (decimal places, on/off), passed explicitly.
//! - `format_number`: shortest decimal text for a value under a policy.
//! - `strip_decimal_separator`, `angle_of_deg`: small normalizations used by
//!   polyline lowering and angle queries.

use std::fmt::Write;

use nalgebra::Vector2;

/// Upper bound on honoured decimal places; beyond this `f64` has no digits left.
const MAX_PLACES: u32 = 15;

/// Noise threshold under which a value is treated as integral.
const INTEGRAL_EPS: f64 = 1e-9;

/// Rounding policy for every number written into path data.
///
/// Defaults to 4 decimal places. Each `AnalyticalPath` owns one; geometry
/// helpers that format take it by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundCfg {
    pub enabled: bool,
    pub places: u32,
}

impl Default for RoundCfg {
    fn default() -> Self {
        Self {
            enabled: true,
            places: 4,
        }
    }
}

impl RoundCfg {
    /// Rounding enabled with `places` decimals.
    #[inline]
    pub fn places(places: u32) -> Self {
        Self {
            enabled: true,
            places,
        }
    }

    /// No rounding; numbers print in their shortest round-tripping form.
    #[inline]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            places: 0,
        }
    }

    /// Round half away from zero to `places` decimals (identity when disabled).
    /// Negative zero comes back as `0.0`. Values too large to scale carry no
    /// fraction and pass through unchanged.
    pub fn apply(&self, v: f64) -> f64 {
        let out = if self.enabled && v.is_finite() {
            let factor = 10f64.powi(self.places.min(MAX_PLACES) as i32);
            let scaled = v * factor;
            if scaled.is_finite() {
                scaled.round() / factor
            } else {
                v
            }
        } else {
            v
        };
        if out == 0.0 {
            0.0
        } else {
            out
        }
    }
}

/// Text of `v` under `cfg`: `12` not `12.0`, `0.5` not `0.5000`.
pub fn format_number(v: f64, cfg: &RoundCfg) -> String {
    let mut out = String::new();
    write_number(&mut out, v, cfg);
    out
}

/// Append the text of `v` under `cfg` to `out`.
///
/// Non-finite values are written as Rust prints them (`NaN`, `inf`), which is
/// not path-data syntax; `AnalyticalPath` refuses them before they get here.
pub fn write_number(out: &mut String, v: f64, cfg: &RoundCfg) {
    let r = cfg.apply(v);
    if !cfg.enabled {
        let _ = write!(out, "{}", r);
        return;
    }
    let places = cfg.places.min(MAX_PLACES) as usize;
    let formatted = format!("{:.*}", places, r);
    if formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        out.push_str(trimmed);
    } else {
        out.push_str(&formatted);
    }
}

/// Collapse floating noise around an integer (`2.9999999999` → `3`).
#[inline]
pub fn strip_decimal_separator(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < INTEGRAL_EPS {
        if r == 0.0 {
            0.0
        } else {
            r
        }
    } else {
        v
    }
}

/// Direction of `v` in degrees, in `[0, 360)`.
///
/// The quadrant comes from the signs of both components, so `(0, 1)` is 90
/// and `(0, -1)` is 270. The zero vector maps to 0.
pub fn angle_of_deg(v: Vector2<f64>) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }
    let deg = v.y.atan2(v.x).to_degrees();
    let deg = if deg < 0.0 { deg + 360.0 } else { deg };
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}
