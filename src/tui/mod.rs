// File: ./src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::controller::RangeToggleController;
use crate::logging;
use crate::model::load_checklist;
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::LevelFilter;
use std::{env, io, path::PathBuf, thread, time::Duration};
use tokio::sync::mpsc;

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
}

/// Reads terminal events on a plain thread so the UI loop sees them in order.
fn spawn_input_pump(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        while !event_tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if event_tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::error!("Terminal read failed: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Terminal poll failed: {}", e);
                    break;
                }
            }
        }
    });
}

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let arg = env::args().nth(1).map(PathBuf::from);
    let Some(path) = config.resolve_checklist(arg) else {
        eprintln!("Usage: shiftlist <CHECKLIST>");
        eprintln!("Or set `checklist` in ~/.config/shiftlist/config.toml");
        return Ok(());
    };

    if let Some(log_path) = config.log_path() {
        // Terminal is not in raw mode yet, stderr is still readable
        if let Err(e) = logging::init(&log_path, LevelFilter::Debug) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }

    let items = load_checklist(&path)?;
    let controller = RangeToggleController::new(items, config.modifier.key_id());
    let mut app_state = AppState::new(controller, config.modifier);

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        log::error!("PANIC: {:?}", info);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Lets terminals that support it report bare modifier press/release
    if supports_keyboard_enhancement().unwrap_or(false) {
        let _ = execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        );
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::channel(32);
    spawn_input_pump(event_tx);

    let result: Result<()> = async {
        terminal.draw(|f| draw(f, &mut app_state))?;
        while let Some(ev) = event_rx.recv().await {
            let actions = action::from_event(&ev, app_state.modifier, |col, row| {
                app_state.row_at(col, row)
            });
            let mut running = true;
            for act in actions {
                if !app_state.apply(act) {
                    running = false;
                    break;
                }
            }
            if !running {
                break;
            }
            terminal.draw(|f| draw(f, &mut app_state))?;
        }
        Ok(())
    }
    .await;

    event_rx.close();
    restore_terminal();
    terminal.show_cursor()?;
    log::info!(
        "Exiting with {}/{} items done",
        app_state.controller.completed_count(),
        app_state.controller.items().len()
    );
    result
}
