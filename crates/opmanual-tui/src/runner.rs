//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use opmanual_app::config::Settings;
use opmanual_app::{process_message, signals, AppState, Message};
use opmanual_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive manual until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(settings);
    info!("Manual viewer started");

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);
    signal_task.abort();

    if let Err(e) = terminal::restore() {
        error!("Failed to restore terminal: {}", e);
    }
    info!("Manual viewer exited");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        let area = terminal.draw(|frame| render::view(frame, state))?.area;

        if let Some(message) =
            event::poll(|column, row| render::click_target(state, area, column, row))?
        {
            process_message(state, message);
        }
    }

    Ok(())
}
