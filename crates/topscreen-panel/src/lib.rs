//! Terminal control panel for topscreen.
//!
//! A small always-available surface with four buttons bound to keyboard
//! shortcuts. Each press forwards one input intent through the device
//! adapter and flashes the outcome: green for success, red for failure.

pub mod app;
pub mod input_handler;
pub mod ui;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use topscreen_input::{DeviceInput, InputConfig};

pub use app::PanelApp;

/// Run the panel until the user quits.
///
/// Owns terminal setup and teardown (raw mode, alternate screen). The
/// `config` snapshot is only used for display; the actual defaults are
/// applied by the adapter behind `input`.
pub fn run_panel(config: InputConfig, input: &dyn DeviceInput) -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = PanelApp::new(config);
    app.log("Control panel started.".to_string());
    app.log("Shortcuts: T=Tap, S=Swipe, B=Back, H=Home, Q=Quit".to_string());

    let result = run_loop(&mut terminal, &mut app, input);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PanelApp,
    input: &dyn DeviceInput,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(PanelApp::tick_rate())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && input_handler::handle_key(key, input, app) {
                    return Ok(());
                }
            }
        }
    }
}
