//! Maps terminal keyboard events to device input operations.

use crossterm::event::{KeyCode, KeyEvent};
use topscreen_input::DeviceInput;

use crate::app::{PanelApp, PanelButton};

/// Handle a terminal key event, dispatching panel actions.
///
/// Returns `true` if the app should quit. A dispatched action blocks
/// until the device invocation finishes; the panel redraws afterwards
/// with the outcome flash.
pub fn handle_key(key: KeyEvent, input: &dyn DeviceInput, app: &mut PanelApp) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char(c) => {
            if let Some(button) = button_for_key(c) {
                dispatch(button, input, app);
            }
            false
        }
        _ => false,
    }
}

/// Map a shortcut character to its panel button.
fn button_for_key(c: char) -> Option<PanelButton> {
    match c.to_ascii_lowercase() {
        't' => Some(PanelButton::Tap),
        's' => Some(PanelButton::Swipe),
        'b' => Some(PanelButton::Back),
        'h' => Some(PanelButton::Home),
        _ => None,
    }
}

/// Invoke the device operation for `button` with the configured defaults
/// and record the outcome.
fn dispatch(button: PanelButton, input: &dyn DeviceInput, app: &mut PanelApp) {
    let success = match button {
        PanelButton::Tap => input.tap(None, None),
        PanelButton::Swipe => input.swipe(None, None, None, None, None),
        PanelButton::Back => input.back(),
        PanelButton::Home => input.home(),
    };
    app.record_outcome(button, success);
}
