use crate::canvas::Canvas;
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyboardEnhancementFlags, read, poll};
use crossterm::event::{PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use log::{info, warn};

pub struct TermManager {
    stdout: Stdout,
    origin: Coords,
    // What is currently on screen, `None` forces a full redraw
    front: Option<Canvas>,
    // Set when the terminal reports press/repeat/release separately
    event_types_pushed: bool,
}

impl TermManager {
    /// Fails if the terminal cannot fit a `width` x `height` canvas.
    pub fn new(width: TermInt, height: TermInt) -> Result<Self> {
        let (term_width, term_height) = terminal::size().context("Failed to read terminal size")?;
        if term_width < width || term_height < height {
            bail!(
                "Terminal is {}x{}, the game needs at least {}x{}",
                term_width, term_height, width, height
            );
        }

        // Center the canvas
        let origin = ((term_width - width) / 2, (term_height - height) / 2);
        Ok(TermManager { stdout: stdout(), origin, front: None, event_types_pushed: false })
    }

    pub fn setup(&mut self, title: &str) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(title))
            .context("Failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;

        // Without this, legacy terminals send a held key's auto-repeats as presses
        match terminal::supports_keyboard_enhancement() {
            Ok(true) => {
                execute!(
                    self.stdout,
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )
                .context("Failed to enable key event types")?;
                self.event_types_pushed = true;
            }
            Ok(false) => warn!("Terminal cannot tell key repeats from presses"),
            Err(e) => warn!("Keyboard enhancement query failed: {}", e),
        }

        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Failed to prepare the screen")?;

        self.front = None;
        info!("Terminal ready, canvas origin at {:?}", self.origin);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if self.event_types_pushed {
            execute!(self.stdout, PopKeyboardEnhancementFlags)
                .context("Failed to reset key event types")?;
            self.event_types_pushed = false;
        }
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;

        info!("Terminal restored");
        Ok(())
    }

    /// Drains every key event that is already waiting, without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO).context("Failed to poll terminal events")? {
            if let Event::Key(ev) = read().context("Failed to read terminal event")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Writes the cells of `canvas` that changed since the last call.
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        let mut color = None;

        for ((x, y), cell) in canvas.diff(self.front.as_ref()) {
            if color != Some(cell.color) {
                queue!(self.stdout, style::SetForegroundColor(cell.color))?;
                color = Some(cell.color);
            }
            queue!(
                self.stdout,
                cursor::MoveTo(self.origin.0 + x, self.origin.1 + y),
                style::Print(cell.ch)
            )?;
        }

        self.stdout.flush().context("Failed to flush stdout")?;

        match self.front.as_mut() {
            Some(front) => front.clone_from(canvas),
            None => self.front = Some(canvas.clone()),
        }

        Ok(())
    }
}
