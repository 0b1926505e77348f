//! Decorative background rotation
//!
//! The rotation is a pure function of elapsed time. Nothing accumulates
//! between frames, so the animation can resume from any clock value.

use serde::{Deserialize, Serialize};

/// Radians per second around the x axis
pub const ROTATION_RATE_X: f64 = 0.1;
/// Radians per second around the y axis
pub const ROTATION_RATE_Y: f64 = 0.15;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    /// CSS transform applying both angles.
    pub fn css_transform(&self) -> String {
        format!("rotateX({:.4}rad) rotateY({:.4}rad)", self.x, self.y)
    }
}

pub fn rotation_at(elapsed_seconds: f64) -> Rotation {
    let elapsed = if elapsed_seconds.is_finite() {
        elapsed_seconds.max(0.0)
    } else {
        0.0
    };
    Rotation {
        x: elapsed * ROTATION_RATE_X,
        y: elapsed * ROTATION_RATE_Y,
    }
}

/// Look of the rotating background object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbientScene {
    pub color: String,
    pub emissive: String,
    pub scale: f64,
}

impl Default for AmbientScene {
    fn default() -> Self {
        Self {
            color: "#6d28d9".to_string(),
            emissive: "#4c1d95".to_string(),
            scale: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_linear_in_elapsed_time() {
        let r = rotation_at(10.0);
        assert!((r.x - 1.0).abs() < 1e-12);
        assert!((r.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_restartable() {
        // Same clock value, same angles, regardless of history.
        let _ = rotation_at(3.0);
        assert_eq!(rotation_at(42.5), rotation_at(42.5));
        assert_eq!(rotation_at(0.0), Rotation::default());
    }

    #[test]
    fn bad_clock_values_clamp_to_zero() {
        assert_eq!(rotation_at(-5.0), Rotation::default());
        assert_eq!(rotation_at(f64::NAN), Rotation::default());
        assert_eq!(rotation_at(f64::INFINITY), Rotation::default());
    }

    #[test]
    fn css_transform_formats_both_axes() {
        assert_eq!(
            rotation_at(2.0).css_transform(),
            "rotateX(0.2000rad) rotateY(0.3000rad)"
        );
    }
}
