//! Panel rendering with ratatui.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use topscreen_input::Point;

use crate::app::{PanelApp, PanelButton, BUTTONS};

pub fn draw(f: &mut Frame, app: &PanelApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Buttons
            Constraint::Min(6),    // Outcome log
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    draw_title(f, chunks[0]);
    draw_buttons(f, chunks[1], app);
    draw_log(f, chunks[2], app);
    draw_help(f, chunks[3]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("topscreen control panel")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_buttons(f: &mut Frame, area: Rect, app: &PanelApp) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (button, col) in BUTTONS.into_iter().zip(cols.iter()) {
        draw_button(f, *col, app, button);
    }
}

fn draw_button(f: &mut Frame, area: Rect, app: &PanelApp, button: PanelButton) {
    // Flash the triggered button green or red while the flash lasts.
    let color = match app.active_flash() {
        Some(flash) if flash.button == button => outcome_color(flash.success),
        _ => Color::White,
    };

    let block = Block::default()
        .title(button.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let detail = Paragraph::new(button_detail(app, button))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(detail, inner);
}

fn outcome_color(success: bool) -> Color {
    if success {
        Color::Green
    } else {
        Color::Red
    }
}

/// What the button will send, from the configured defaults.
fn button_detail(app: &PanelApp, button: PanelButton) -> String {
    match button {
        PanelButton::Tap => format_point(app.config.tap_point),
        PanelButton::Swipe => format!(
            "{} -> {}",
            format_point(app.config.swipe_start),
            format_point(app.config.swipe_end)
        ),
        PanelButton::Back => "KEYCODE_BACK".to_string(),
        PanelButton::Home => "KEYCODE_HOME".to_string(),
    }
}

fn format_point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}

fn draw_log(f: &mut Frame, area: Rect, app: &PanelApp) {
    let items: Vec<ListItem> = app
        .log_lines
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let color = if line.ends_with(": failed") {
                Color::Red
            } else if line.ends_with(": ok") {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(Span::styled(
                format!("> {line}"),
                Style::default().fg(color),
            ))
        })
        .collect();

    let log = List::new(items).block(Block::default().title("Outcomes").borders(Borders::ALL));
    f.render_widget(log, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("t: tap  s: swipe  b: back  h: home  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
