//! Numeric product rating.
//!
//! Ratings are stored as a number with half-star granularity. The star-glyph
//! string (e.g. `★★★★☆`) is a display format only, never a data
//! representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of half-star steps in a full five-star rating.
const MAX_HALF_STEPS: u8 = 10;

/// A product rating between 0 and 5 stars, in half-star steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Rating(u8);

impl Rating {
    /// A rating from a whole number of stars, clamped to 0..=5.
    #[must_use]
    pub const fn from_stars(stars: u8) -> Self {
        let stars = if stars > 5 { 5 } else { stars };
        Self(stars * 2)
    }

    /// A rating from a star value with half-star precision, e.g. `4.5`.
    /// Values are rounded to the nearest half star and clamped to 0..=5.
    #[must_use]
    pub fn from_value(value: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let half_steps = (value * 2.0).round().clamp(0.0, f32::from(MAX_HALF_STEPS)) as u8;
        Self(half_steps)
    }

    /// The rating as a star value, e.g. `4.5`.
    #[must_use]
    pub fn value(&self) -> f32 {
        f32::from(self.0) / 2.0
    }

    /// Number of completely filled stars.
    #[must_use]
    pub const fn full_stars(&self) -> u8 {
        self.0 / 2
    }

    /// Whether the rating ends in a half star.
    #[must_use]
    pub const fn has_half_star(&self) -> bool {
        self.0 % 2 == 1
    }

    /// Number of empty stars needed to pad the display to five.
    #[must_use]
    pub const fn empty_stars(&self) -> u8 {
        5 - self.full_stars() - if self.has_half_star() { 1 } else { 0 }
    }
}

impl From<f32> for Rating {
    fn from(value: f32) -> Self {
        Self::from_value(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

/// Renders the star-glyph form, e.g. `★★★★½` or `★★★☆☆`.
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full_stars() {
            write!(f, "★")?;
        }
        if self.has_half_star() {
            write!(f, "½")?;
        }
        for _ in 0..self.empty_stars() {
            write!(f, "☆")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stars_clamps() {
        assert_eq!(Rating::from_stars(4).value(), 4.0);
        assert_eq!(Rating::from_stars(9).value(), 5.0);
    }

    #[test]
    fn test_half_star_breakdown() {
        let rating = Rating::from_value(4.5);
        assert_eq!(rating.full_stars(), 4);
        assert!(rating.has_half_star());
        assert_eq!(rating.empty_stars(), 0);
    }

    #[test]
    fn test_glyph_display() {
        assert_eq!(Rating::from_stars(5).to_string(), "★★★★★");
        assert_eq!(Rating::from_stars(4).to_string(), "★★★★☆");
        assert_eq!(Rating::from_value(3.5).to_string(), "★★★½☆");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&Rating::from_value(4.5)).unwrap();
        assert_eq!(json, "4.5");
        let parsed: Rating = serde_json::from_str("4.0").unwrap();
        assert_eq!(parsed, Rating::from_stars(4));
    }
}
