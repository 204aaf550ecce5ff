//! A single-page portfolio rendered as a terminal UI.
//!
//! Run the binary to launch the page: wheel (or j/k) pages between
//! sections, clicking PROJECTS/ABOUT toggles the hero panels, and the
//! caption in the header follows whichever section is centered.

mod app;
mod content;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_sources, AppEvent},
    handler,
    state::AppState,
};
use crate::content::{DATE_LINE, SECTIONS};
use crate::ui::{layout::AppLayout, page::PageWidget, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Single-page portfolio TUI")]
struct Cli {
    /// Animation tick interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Section index to open on (0 = hero).
    #[arg(long, default_value_t = 0)]
    start_section: usize,
}

const STATUS_HINT: &str = " wheel/j/k page · click or p/a toggle panels · q quit ";

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let mut state = AppState::new();

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_sources(Duration::from_millis(cli.tick_ms.max(10)));

    let start = cli.start_section.min(SECTIONS.len().saturating_sub(1));
    let mut start_pending = start > 0;

    // ── event loop ────────────────────────────────────────────
    loop {
        let now = Instant::now();

        // Advance every timeline before drawing so the frame shows the
        // current animation state.
        state.advance(now);

        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            state.page_area = layout.page_area;

            let header = Paragraph::new(vec![
                Line::from(Span::styled(state.caption, Theme::caption_style())),
                Line::from(Span::styled(DATE_LINE, Theme::date_style())),
            ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::BOTTOM)
                        .border_style(Theme::border_style()),
                );
            frame.render_widget(header, layout.header_area);

            frame.render_widget(
                PageWidget {
                    stage: &state.stage,
                    revealed: &state.revealed,
                    offset: state.offset,
                    reel: &state.reel,
                    now,
                },
                layout.page_area,
            );

            let status_text = state.status_message.as_deref().unwrap_or(STATUS_HINT);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        // The starting section needs the page geometry from the first
        // draw, so it is applied here rather than at construction.
        if start_pending {
            start_pending = false;
            let target = start as u16 * state.page_area.height;
            state.set_offset(target, now);
        }

        tokio::select! {
            Some(event) = events.recv() => {
                let now = Instant::now();
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k, now),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, now),
                    AppEvent::Resize(_, _) => {}
                    AppEvent::Tick => {}
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
