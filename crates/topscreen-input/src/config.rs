//! Adapter configuration: default gesture coordinates and the adb executable.

use serde::{Deserialize, Serialize};

use crate::action::InputAction;

/// A device screen coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Input adapter settings.
///
/// Constructed once and read for the lifetime of the adapter; the adapter
/// itself never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Target for a tap with no explicit coordinates.
    #[serde(default = "default_tap_point")]
    pub tap_point: Point,

    /// Start of the default swipe gesture.
    #[serde(default = "default_swipe_start")]
    pub swipe_start: Point,

    /// End of the default swipe gesture.
    #[serde(default = "default_swipe_end")]
    pub swipe_end: Point,

    /// Duration of the default swipe gesture in milliseconds.
    #[serde(default = "default_swipe_duration_ms")]
    pub swipe_duration_ms: u64,

    /// Explicit adb executable. `None` resolves `adb` from `PATH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adb_path: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tap_point: default_tap_point(),
            swipe_start: default_swipe_start(),
            swipe_end: default_swipe_end(),
            swipe_duration_ms: default_swipe_duration_ms(),
            adb_path: None,
        }
    }
}

impl InputConfig {
    /// Resolve an optionally-overridden tap into a concrete action.
    ///
    /// Each omitted coordinate falls back to its configured default
    /// independently of the other.
    #[must_use]
    pub fn tap_action(&self, x: Option<i32>, y: Option<i32>) -> InputAction {
        InputAction::Tap {
            x: x.unwrap_or(self.tap_point.x),
            y: y.unwrap_or(self.tap_point.y),
        }
    }

    /// Resolve an optionally-overridden swipe into a concrete action.
    ///
    /// Every omitted parameter falls back independently; provided
    /// parameters override only themselves.
    #[must_use]
    pub fn swipe_action(
        &self,
        x1: Option<i32>,
        y1: Option<i32>,
        x2: Option<i32>,
        y2: Option<i32>,
        duration_ms: Option<u64>,
    ) -> InputAction {
        InputAction::Swipe {
            x1: x1.unwrap_or(self.swipe_start.x),
            y1: y1.unwrap_or(self.swipe_start.y),
            x2: x2.unwrap_or(self.swipe_end.x),
            y2: y2.unwrap_or(self.swipe_end.y),
            duration_ms: duration_ms.unwrap_or(self.swipe_duration_ms),
        }
    }
}

fn default_tap_point() -> Point {
    Point::new(100, 100)
}

fn default_swipe_start() -> Point {
    Point::new(100, 300)
}

fn default_swipe_end() -> Point {
    Point::new(300, 300)
}

fn default_swipe_duration_ms() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = InputConfig::default();
        assert_eq!(config.tap_point, Point::new(100, 100));
        assert_eq!(config.swipe_start, Point::new(100, 300));
        assert_eq!(config.swipe_end, Point::new(300, 300));
        assert_eq!(config.swipe_duration_ms, 200);
        assert!(config.adb_path.is_none());
    }

    #[test]
    fn tap_action_defaults_from_config() {
        let config = InputConfig::default();
        assert_eq!(
            config.tap_action(None, None),
            InputAction::Tap { x: 100, y: 100 }
        );
    }

    #[test]
    fn tap_action_overrides_each_coordinate_independently() {
        let config = InputConfig::default();
        assert_eq!(
            config.tap_action(Some(7), None),
            InputAction::Tap { x: 7, y: 100 }
        );
        assert_eq!(
            config.tap_action(None, Some(9)),
            InputAction::Tap { x: 100, y: 9 }
        );
        assert_eq!(
            config.tap_action(Some(7), Some(9)),
            InputAction::Tap { x: 7, y: 9 }
        );
    }

    #[test]
    fn swipe_action_defaults_from_config() {
        let config = InputConfig::default();
        assert_eq!(
            config.swipe_action(None, None, None, None, None),
            InputAction::Swipe {
                x1: 100,
                y1: 300,
                x2: 300,
                y2: 300,
                duration_ms: 200,
            }
        );
    }

    #[test]
    fn swipe_action_overrides_are_not_coupled() {
        let config = InputConfig::default();
        // Override a single parameter at a time; the rest stay configured.
        assert_eq!(
            config.swipe_action(Some(1), None, None, None, None),
            InputAction::Swipe {
                x1: 1,
                y1: 300,
                x2: 300,
                y2: 300,
                duration_ms: 200,
            }
        );
        assert_eq!(
            config.swipe_action(None, None, None, None, Some(999)),
            InputAction::Swipe {
                x1: 100,
                y1: 300,
                x2: 300,
                y2: 300,
                duration_ms: 999,
            }
        );
        assert_eq!(
            config.swipe_action(Some(50), Some(60), Some(70), Some(80), Some(500)),
            InputAction::Swipe {
                x1: 50,
                y1: 60,
                x2: 70,
                y2: 80,
                duration_ms: 500,
            }
        );
    }

    #[test]
    fn parse_partial_toml_table() {
        let toml_str = r#"
tap_point = { x = 540, y = 960 }
"#;
        let config: InputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tap_point, Point::new(540, 960));
        // Everything else keeps its default.
        assert_eq!(config.swipe_start, Point::new(100, 300));
        assert_eq!(config.swipe_duration_ms, 200);
        assert!(config.adb_path.is_none());
    }

    #[test]
    fn parse_explicit_adb_path() {
        let toml_str = r#"
adb_path = "/opt/android/platform-tools/adb"
swipe_duration_ms = 350
"#;
        let config: InputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.adb_path.as_deref(),
            Some("/opt/android/platform-tools/adb")
        );
        assert_eq!(config.swipe_duration_ms, 350);
    }
}
