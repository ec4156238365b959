//! Generator configuration

use serde::{Deserialize, Serialize};

use crate::GenError;

/// Smallest width/height that still has an interior cell
pub const MIN_DIMENSION: usize = 3;

/// Largest accepted width/height; keeps signed grid arithmetic exact
pub const MAX_DIMENSION: usize = i16::MAX as usize;

/// How candidate rooms are tested against already placed rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapTest {
    /// Reject when a corner of either padded box lies inside the other.
    /// Misses crossings where neither box holds a corner of the other.
    #[default]
    Corners,
    /// Reject on any shared cell of the padded boxes.
    Full,
}

/// Parameters of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width; odd values keep the rightmost column aligned
    pub width: usize,
    /// Grid height; odd values keep the bottom row aligned
    pub height: usize,
    /// Number of room placement attempts
    pub room_tries: u32,
    /// Chance (0-100) that a corridor turns when it could go straight
    pub winding_percent: u32,
    /// Trim dead-end corridors after connecting regions
    pub remove_dead_ends: bool,
    /// Room overlap rejection rule
    pub overlap_test: OverlapTest,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 101,
            height: 101,
            room_tries: 100,
            winding_percent: 0,
            remove_dead_ends: true,
            overlap_test: OverlapTest::Corners,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given size and defaults for everything else
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reject configurations that would index outside the grid
    pub fn validate(&self) -> Result<(), GenError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_DIMENSION {
                return Err(GenError::config(format!(
                    "{name} {value} leaves no interior (minimum {MIN_DIMENSION})"
                )));
            }
            if value > MAX_DIMENSION {
                return Err(GenError::config(format!(
                    "{name} {value} exceeds maximum {MAX_DIMENSION}"
                )));
            }
        }
        if self.winding_percent > 100 {
            return Err(GenError::config(format!(
                "winding_percent {} is not a percentage",
                self.winding_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.room_tries, 100);
        assert_eq!(config.winding_percent, 0);
        assert!(config.remove_dead_ends);
        assert_eq!(config.overlap_test, OverlapTest::Corners);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_dimensions() {
        for (w, h) in [(0, 11), (11, 0), (2, 11), (11, 2)] {
            let err = GeneratorConfig::with_size(w, h).validate().unwrap_err();
            assert!(matches!(err, GenError::InvalidConfig { .. }), "{w}x{h}");
        }
        assert!(GeneratorConfig::with_size(3, 3).validate().is_ok());
    }

    #[test]
    fn test_rejects_huge_dimensions() {
        let config = GeneratorConfig::with_size(MAX_DIMENSION + 1, 11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_winding_over_100() {
        let config = GeneratorConfig {
            winding_percent: 101,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("winding_percent"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"width": 31, "height": 21, "overlap_test": "full"}"#)
                .unwrap();
        assert_eq!(config.width, 31);
        assert_eq!(config.height, 21);
        assert_eq!(config.room_tries, 100);
        assert_eq!(config.overlap_test, OverlapTest::Full);
    }
}
