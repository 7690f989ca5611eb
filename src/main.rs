//! Atlas TUI - Actor-based country browser
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Source Layer (Tokio) - async simulated fetches

mod app;
mod constants;
mod messages;
mod models;
mod source;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use constants::APP_NAME;
use messages::ui_events::key_to_ui_event;
use messages::{RenderState, SourceCommand, SourceResponse, UiEvent, View};
use source::SourceActor;
use ui::{country_card_lines, country_list_item};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "atlas.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (source_cmd_tx, source_cmd_rx) = mpsc::unbounded_channel::<SourceCommand>();
    let (source_resp_tx, source_resp_rx) = mpsc::unbounded_channel::<SourceResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn source actor
    let source_actor = SourceActor::new(source_resp_tx);
    tokio::spawn(source_actor.run(source_cmd_rx));

    // Spawn app actor (fetches on startup)
    let app_actor = AppActor::new(source_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, source_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    // Content depends on the current view
    match state.view() {
        View::Loading => draw_loading(f, main_chunks[1]),
        View::Error => draw_error(f, state, main_chunks[1]),
        View::Populated => draw_countries(f, state, main_chunks[1]),
        View::Empty => draw_empty(f, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled(APP_NAME, Style::default().fg(Color::Cyan).bold()),
        Span::raw(" - countries from the REST Countries API (simulated)"),
    ])];

    // Stats only once something is loaded
    if !state.countries.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} countries", state.countries.len()),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(
                format!("❤ {} favorites", state.favorite_count()),
                Style::default().fg(Color::Red),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Countries [...] ");

    let loading = Paragraph::new("Loading countries...")
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    f.render_widget(loading, area);
}

fn draw_error(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ");

    let message = state.error.as_deref().unwrap_or("Unknown error");
    let content = format!("{}\n\nPress 'r' to retry.", message);

    let error = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(error, area);
}

fn draw_empty(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Countries ");

    let content = "No countries loaded.\n\nPress 'l' to load countries.";
    let empty = Paragraph::new(content)
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(empty, area);
}

fn draw_countries(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_country_list(f, state, chunks[0]);
    draw_country_card(f, state, chunks[1]);
}

fn draw_country_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .countries
        .iter()
        .map(|c| country_list_item(c, state.favorites.contains(&c.cca3)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Countries (↑/↓ select) "),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_country_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    match state.countries.get(state.selected) {
        Some(country) => {
            let lines = country_card_lines(country, state.favorites.contains(&country.cca3));
            let card = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false });
            f.render_widget(card, area);
        }
        None => {
            let placeholder = Paragraph::new("Select a country")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        String::from(" Loading... ")
    } else {
        let updated = state
            .last_updated
            .map(|t| format!(" | updated {}", t.format("%H:%M:%S")))
            .unwrap_or_default();
        format!(" ↑/↓:select | f:favorite | r:reload | ?:help | q:quit{}", updated)
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 ATLAS TUI - Keyboard Shortcuts

 NAVIGATION
   ↑ / k              Previous country
   ↓ / j              Next country

 ACTIONS
   f / Space / Enter  Toggle favorite
   r                  Reload country list
   l                  Load countries (empty state)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
