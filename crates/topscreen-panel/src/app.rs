//! Application state for the control panel.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use topscreen_input::InputConfig;

/// Maximum number of log lines to keep.
const MAX_LOG_LINES: usize = 100;

/// How long an outcome flash stays visible.
const FLASH_DURATION: Duration = Duration::from_millis(160);

/// The four panel buttons in display order.
pub const BUTTONS: [PanelButton; 4] = [
    PanelButton::Tap,
    PanelButton::Swipe,
    PanelButton::Back,
    PanelButton::Home,
];

/// A button on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Tap,
    Swipe,
    Back,
    Home,
}

impl PanelButton {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tap => "Tap",
            Self::Swipe => "Swipe",
            Self::Back => "Back",
            Self::Home => "Home",
        }
    }

    /// Keyboard shortcut that triggers the button.
    #[must_use]
    pub fn shortcut(self) -> char {
        match self {
            Self::Tap => 't',
            Self::Swipe => 's',
            Self::Back => 'b',
            Self::Home => 'h',
        }
    }
}

/// Transient visual feedback for the last completed action.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub button: PanelButton,
    pub success: bool,
    expires: Instant,
}

/// Panel state shared between the event loop and rendering.
pub struct PanelApp {
    /// Configured defaults, shown on the buttons.
    pub config: InputConfig,
    pub log_lines: VecDeque<String>,
    flash: Option<Flash>,
}

impl PanelApp {
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            log_lines: VecDeque::new(),
            flash: None,
        }
    }

    pub fn log(&mut self, msg: String) {
        self.log_lines.push_back(msg);
        if self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
    }

    /// Record an action outcome: a log line plus an armed flash.
    pub fn record_outcome(&mut self, button: PanelButton, success: bool) {
        let outcome = if success { "ok" } else { "failed" };
        self.log(format!("{}: {outcome}", button.label()));
        self.flash = Some(Flash {
            button,
            success,
            expires: Instant::now() + FLASH_DURATION,
        });
    }

    /// The flash to render, if it has not expired yet.
    #[must_use]
    pub fn active_flash(&self) -> Option<Flash> {
        self.flash.filter(|flash| Instant::now() < flash.expires)
    }

    /// Tick interval for the panel refresh.
    #[must_use]
    pub fn tick_rate() -> Duration {
        Duration::from_millis(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_labels_and_shortcuts() {
        assert_eq!(PanelButton::Tap.label(), "Tap");
        assert_eq!(PanelButton::Tap.shortcut(), 't');
        assert_eq!(PanelButton::Swipe.shortcut(), 's');
        assert_eq!(PanelButton::Back.shortcut(), 'b');
        assert_eq!(PanelButton::Home.shortcut(), 'h');
    }

    #[test]
    fn record_outcome_logs_and_flashes() {
        let mut app = PanelApp::new(InputConfig::default());
        app.record_outcome(PanelButton::Back, false);

        assert_eq!(app.log_lines.back().unwrap(), "Back: failed");
        let flash = app.active_flash().expect("flash should be armed");
        assert_eq!(flash.button, PanelButton::Back);
        assert!(!flash.success);
    }

    #[test]
    fn log_is_bounded() {
        let mut app = PanelApp::new(InputConfig::default());
        for i in 0..150 {
            app.log(format!("line {i}"));
        }
        assert_eq!(app.log_lines.len(), MAX_LOG_LINES);
        assert_eq!(app.log_lines.front().unwrap(), "line 50");
    }
}
