//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the framework event types.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a click, if it is one
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::state::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! loop {
//!     match poll_event(Duration::from_millis(16))? {
//!         Some(InputEvent::Key(key)) => { pin.handle_key(&key); }
//!         Some(InputEvent::Click { x, y }) => { pin.handle_click(x, y, &layout); }
//!         _ => {}
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyEventKind, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
    poll, read,
    EnableMouseCapture, DisableMouseCapture,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::keyboard::{KeyboardEvent, KeyState, Modifiers};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for PIN hosts
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard event (key press, release, etc.)
    Key(KeyboardEvent),
    /// Left-button press at a terminal position
    Click { x: u16, y: u16 },
    /// Bracketed paste - arrives as one whole edit
    Paste(String),
    /// Terminal gained (true) or lost (false) focus
    Focus(bool),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to a click. Only left-button presses count.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Mouse(mouse) => match convert_mouse_event(mouse) {
            Some((x, y)) => InputEvent::Click { x, y },
            None => InputEvent::None,
        },
        CrosstermEvent::Paste(text) => InputEvent::Paste(text),
        CrosstermEvent::FocusGained => InputEvent::Focus(true),
        CrosstermEvent::FocusLost => InputEvent::Focus(false),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
