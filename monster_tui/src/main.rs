//! monster_tui - Interactive TUI for viewing and tweaking monster sheets
//!
//! Usage: `monster_tui [bestiary.toml|bestiary.json]`

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "monster_tui.log";

/// Log to a file; stdout belongs to the terminal UI
fn init_logging() {
    let file = match std::fs::File::create(LOG_FILE) {
        Ok(file) => file,
        Err(_) => return,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MONSTER_TUI_LOG")
                .unwrap_or_else(|_| "monster_tui=info,monster_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

fn main() -> io::Result<()> {
    init_logging();

    let source = std::env::args().nth(1).map(PathBuf::from);
    tracing::info!("Starting monster_tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Enter, _) => app.on_enter(),
                    (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.adjust_level(1),
                    (KeyCode::Char('-'), _) => app.adjust_level(-1),
                    (KeyCode::Char('w'), _) => app.adjust_weight(1),
                    (KeyCode::Char('W'), _) => app.adjust_weight(-1),
                    (KeyCode::Char('x'), _) => app.unset_attribute(),
                    (KeyCode::Char('z'), _) => app.randomize(),
                    (KeyCode::Char('r'), _) => app.reload(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("Exiting monster_tui");
    Ok(())
}
