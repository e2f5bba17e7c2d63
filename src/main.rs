use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::{io, time::Duration, time::Instant};
use tokio::sync::Mutex;

mod app;
mod constants;
mod error;
mod receipt;
mod submission;
mod ui;
mod utils;
mod wallet;

use app::App;
use constants::{BALANCE_REFRESH_INTERVAL_SECS, EVENT_POLL_MILLIS, RECEIPT_POLL_INTERVAL_SECS};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // initialize application state
    let app = Arc::new(Mutex::new(App::new()?));

    // run the app
    let result = run_app(&mut terminal, Arc::clone(&app)).await;

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        println!("{:?}", err);
    }

    Ok(())
}

/// Log to a file under the home directory; stdout belongs to the TUI.
fn init_tracing() -> Result<()> {
    let log_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?
        .join(".postermint");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("postermint.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    let mut last_receipt_poll = Instant::now();
    let mut last_balance_refresh = Instant::now();
    let receipt_interval = Duration::from_secs(RECEIPT_POLL_INTERVAL_SECS);
    let balance_interval = Duration::from_secs(BALANCE_REFRESH_INTERVAL_SECS);

    loop {
        let app_arc = Arc::clone(&app);

        // drive the receipt watcher off the tick, never the draw path
        if last_receipt_poll.elapsed() >= receipt_interval {
            let wants_poll = {
                let app_guard = app_arc.lock().await;
                app_guard.receipt.wants_poll()
            };
            if wants_poll {
                tokio::spawn(App::poll_receipt(Arc::clone(&app_arc)));
            }
            last_receipt_poll = Instant::now();
        }

        if last_balance_refresh.elapsed() >= balance_interval {
            let connected = {
                let app_guard = app_arc.lock().await;
                app_guard.is_connected()
            };
            if connected {
                tokio::spawn(App::refresh_balance(Arc::clone(&app_arc)));
            }
            last_balance_refresh = Instant::now();
        }

        {
            let mut app_guard = app_arc.lock().await;
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
        }

        if crossterm_event::poll(Duration::from_millis(EVENT_POLL_MILLIS))? {
            if let Event::Key(key) = crossterm_event::read()? {
                let mut app_guard = app_arc.lock().await;
                if !app_guard.is_connected() {
                    // connect screen keys
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Up => app_guard.previous_connector(),
                        KeyCode::Down => app_guard.next_connector(),
                        KeyCode::Char('n') => {
                            if app_guard.is_switching_network {
                                app_guard.cancel_network_switch();
                            } else {
                                app_guard.start_network_switch();
                            }
                        }
                        KeyCode::Char('1') | KeyCode::Char('2') => {
                            if app_guard.is_switching_network {
                                let chain_index = match key.code {
                                    KeyCode::Char('1') => 0,
                                    _ => 1,
                                };
                                app_guard.switch_to_chain(chain_index)?;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char('c') => {
                            if !app_guard.is_switching_network && !app_guard.is_connecting {
                                if let Some(kind) = app_guard.selected_connector() {
                                    drop(app_guard);
                                    tokio::spawn(App::run_connect(Arc::clone(&app_arc), kind));
                                }
                            }
                        }
                        _ => {
                            app_guard.clear_messages();
                        }
                    }
                } else {
                    // main screen keys
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Char('y') => {
                            if app_guard.is_confirming {
                                drop(app_guard);
                                tokio::spawn(App::run_mint(Arc::clone(&app_arc)));
                            }
                        }
                        KeyCode::Char('n') => {
                            if app_guard.is_confirming {
                                app_guard.cancel_mint();
                            } else if app_guard.is_switching_network {
                                app_guard.cancel_network_switch();
                            } else {
                                app_guard.start_network_switch();
                            }
                        }
                        KeyCode::Char('m') => {
                            if !app_guard.is_confirming && !app_guard.is_switching_network {
                                app_guard.start_mint_confirm();
                            }
                        }
                        KeyCode::Char('d') => {
                            if !app_guard.is_confirming && !app_guard.is_switching_network {
                                app_guard.disconnect();
                            }
                        }
                        KeyCode::Char('1') | KeyCode::Char('2') => {
                            if app_guard.is_switching_network {
                                let chain_index = match key.code {
                                    KeyCode::Char('1') => 0,
                                    _ => 1,
                                };
                                app_guard.switch_to_chain(chain_index)?;
                            }
                        }
                        _ => {
                            app_guard.clear_messages();
                        }
                    }
                }
            }
        }
    }
}
