//! Input actions and their argument rendering.

use std::fmt;

/// A single device input intent, fully resolved to concrete parameters.
///
/// Each variant maps to exactly one `adb shell input` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Touch the screen at a point.
    Tap { x: i32, y: i32 },

    /// Drag between two points over a duration.
    Swipe {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        duration_ms: u64,
    },

    /// Press the BACK navigation key.
    Back,

    /// Press the HOME navigation key.
    Home,
}

impl InputAction {
    /// Arguments passed to the adb executable, as discrete tokens.
    ///
    /// The argument list is handed directly to the process-spawning
    /// primitive; no shell interpreter is involved, so coordinates need
    /// no quoting. Coordinates are forwarded unvalidated, negative and
    /// out-of-screen values included.
    #[must_use]
    pub fn shell_args(&self) -> Vec<String> {
        match *self {
            Self::Tap { x, y } => vec![
                "shell".to_string(),
                "input".to_string(),
                "tap".to_string(),
                x.to_string(),
                y.to_string(),
            ],
            Self::Swipe {
                x1,
                y1,
                x2,
                y2,
                duration_ms,
            } => vec![
                "shell".to_string(),
                "input".to_string(),
                "swipe".to_string(),
                x1.to_string(),
                y1.to_string(),
                x2.to_string(),
                y2.to_string(),
                duration_ms.to_string(),
            ],
            Self::Back => keyevent("KEYCODE_BACK"),
            Self::Home => keyevent("KEYCODE_HOME"),
        }
    }
}

fn keyevent(code: &str) -> Vec<String> {
    vec![
        "shell".to_string(),
        "input".to_string(),
        "keyevent".to_string(),
        code.to_string(),
    ]
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Tap { x, y } => write!(f, "tap {x} {y}"),
            Self::Swipe {
                x1,
                y1,
                x2,
                y2,
                duration_ms,
            } => write!(f, "swipe {x1} {y1} {x2} {y2} {duration_ms}"),
            Self::Back => write!(f, "keyevent KEYCODE_BACK"),
            Self::Home => write!(f, "keyevent KEYCODE_HOME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_args_preserve_coordinate_order() {
        let action = InputAction::Tap { x: 42, y: 7 };
        assert_eq!(action.shell_args(), ["shell", "input", "tap", "42", "7"]);
    }

    #[test]
    fn tap_args_pass_negative_coordinates_through() {
        let action = InputAction::Tap { x: -5, y: -10 };
        assert_eq!(action.shell_args(), ["shell", "input", "tap", "-5", "-10"]);
    }

    #[test]
    fn swipe_args_order_is_start_end_duration() {
        let action = InputAction::Swipe {
            x1: 50,
            y1: 60,
            x2: 70,
            y2: 80,
            duration_ms: 500,
        };
        assert_eq!(
            action.shell_args(),
            ["shell", "input", "swipe", "50", "60", "70", "80", "500"]
        );
    }

    #[test]
    fn back_and_home_are_fixed_commands() {
        assert_eq!(
            InputAction::Back.shell_args(),
            ["shell", "input", "keyevent", "KEYCODE_BACK"]
        );
        assert_eq!(
            InputAction::Home.shell_args(),
            ["shell", "input", "keyevent", "KEYCODE_HOME"]
        );
    }

    #[test]
    fn display_matches_invocation_shape() {
        let action = InputAction::Swipe {
            x1: 1,
            y1: 2,
            x2: 3,
            y2: 4,
            duration_ms: 5,
        };
        assert_eq!(action.to_string(), "swipe 1 2 3 4 5");
        assert_eq!(InputAction::Back.to_string(), "keyevent KEYCODE_BACK");
    }
}
