use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

/// Terminal modes that were switched on and must be undone
#[derive(Debug, Default)]
pub struct TerminalModes {
    /// Key press/repeat/release events are reported
    pub keyboard_enhanced: bool,
}

/// Raw mode, alternate screen, mouse capture, hidden cursor. Key release
/// reporting is requested where the terminal supports it.
pub fn enter_terminal(out: &mut impl Write) -> Result<TerminalModes> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    if let Err(e) = execute!(
        out,
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide,
        terminal::DisableLineWrap,
    ) {
        let _ = restore_terminal(out, &TerminalModes::default());
        return Err(e).context("failed to prepare terminal");
    }

    // Only a terminal that answers the query honours the pushed flags
    let supported = match terminal::supports_keyboard_enhancement() {
        Ok(supported) => supported,
        Err(e) => {
            log::warn!("could not query keyboard enhancement: {e}");
            false
        }
    };
    let keyboard_enhanced = supported
        && match execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        ) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("key release events unavailable: {e}");
                false
            }
        };
    if !keyboard_enhanced {
        log::info!("terminal does not report key releases, racket keys expire");
    }

    Ok(TerminalModes { keyboard_enhanced })
}

/// Undo everything `enter_terminal` did
pub fn restore_terminal(out: &mut impl Write, modes: &TerminalModes) -> io::Result<()> {
    if modes.keyboard_enhanced {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(
        out,
        terminal::EnableLineWrap,
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()
}
