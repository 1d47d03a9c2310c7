//! Terminal setup and restoration
//!
//! On top of ratatui's raw mode and alternate screen, mouse capture is
//! enabled so tabs, rows and the reveal button can be clicked.

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use opmanual_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen, and capture the mouse
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(Error::TerminalInit(format!("mouse capture: {}", e)));
    }
    Ok(terminal)
}

/// Release the mouse and leave raw mode and the alternate screen
pub fn restore() -> Result<()> {
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        warn!("Failed to release mouse capture: {}", e);
    }
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
