//! Focus capability - how the component asks the host for focus.
//!
//! The component never touches a platform focus manager directly. It calls
//! a [`FocusRequester`] at two well-defined points:
//!
//! - on mount (when auto-focus is enabled)
//! - when a cell is tapped
//!
//! Requests are fire-and-forget. Whether and when focus actually arrives is
//! reported back through the host's focus signal.
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::state::focus::{RecordingFocusRequester, FocusTrigger};
//!
//! let requester = Rc::new(RecordingFocusRequester::new());
//! // ... mount a pin_input with `requester.clone()` ...
//! assert_eq!(requester.triggers(), vec![FocusTrigger::Mount]);
//! ```

use std::cell::RefCell;

use spark_signals::Signal;
use tracing::debug;

/// Why focus was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTrigger {
    /// Component mounted with auto-focus.
    Mount,
    /// User tapped the cell at this index.
    CellTap(usize),
}

/// Capability to request input focus from the host.
pub trait FocusRequester {
    fn request_focus(&self, trigger: FocusTrigger);
}

/// Capability to show or hide the on-screen keyboard.
pub trait KeyboardController {
    fn show(&self);
    fn hide(&self);
}

// =============================================================================
// SIGNAL-BACKED REQUESTER
// =============================================================================

/// Requester for hosts where focus is just a flag, such as a terminal.
///
/// A request grants focus immediately by setting the host's focus signal.
pub struct SignalFocusRequester {
    focused: Signal<bool>,
}

impl SignalFocusRequester {
    pub fn new(focused: Signal<bool>) -> Self {
        Self { focused }
    }
}

impl FocusRequester for SignalFocusRequester {
    fn request_focus(&self, trigger: FocusTrigger) {
        debug!(?trigger, "focus granted");
        self.focused.set(true);
    }
}

// =============================================================================
// RECORDING DOUBLES
// =============================================================================

/// Requester that records every request instead of moving focus.
#[derive(Debug, Default)]
pub struct RecordingFocusRequester {
    triggers: RefCell<Vec<FocusTrigger>>,
}

impl RecordingFocusRequester {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests so far, oldest first.
    pub fn triggers(&self) -> Vec<FocusTrigger> {
        self.triggers.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.triggers.borrow().len()
    }
}

impl FocusRequester for RecordingFocusRequester {
    fn request_focus(&self, trigger: FocusTrigger) {
        self.triggers.borrow_mut().push(trigger);
    }
}

/// Keyboard action seen by [`RecordingKeyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    Show,
    Hide,
}

/// Keyboard controller that records show/hide calls.
#[derive(Debug, Default)]
pub struct RecordingKeyboard {
    actions: RefCell<Vec<KeyboardAction>>,
}

impl RecordingKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<KeyboardAction> {
        self.actions.borrow().clone()
    }
}

impl KeyboardController for RecordingKeyboard {
    fn show(&self) {
        self.actions.borrow_mut().push(KeyboardAction::Show);
    }

    fn hide(&self) {
        self.actions.borrow_mut().push(KeyboardAction::Hide);
    }
}
