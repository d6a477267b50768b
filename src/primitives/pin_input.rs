//! PinInput Primitive - fixed-length PIN/OTP entry.
//!
//! Binds host-owned signals to the pure PIN core:
//!
//! ```text
//! key / paste / edit ──► propose_with ──► value.set ──► on_value_change
//!                                    └─ completed ──► on_pin_entered
//! tap / click ─────────► FocusRequester (+ keyboard show)
//! value + focused + is_error ──► resolve ──► Vec<CellVisualState>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::primitives::{pin_input, PinInputProps};
//! use spark_pin::state::SignalFocusRequester;
//! use spark_signals::signal;
//!
//! let pin = signal(String::new());
//! let focused = signal(false);
//! let requester = Rc::new(SignalFocusRequester::new(focused.clone()));
//!
//! let mut props = PinInputProps::new(pin.clone(), focused.clone(), requester);
//! props.on_pin_entered = Some(Rc::new(|pin| println!("entered {pin}")));
//! let handle = pin_input(props);
//!
//! handle.handle_key(&KeyboardEvent::new("1"));
//! let cells = handle.cells();
//! ```

use std::rc::Rc;

use spark_signals::{derived, Derived, Signal};
use tracing::{debug, info, trace};

use crate::layout::PinLayout;
use crate::pin::{
    append, drop_last, propose_with, resolve, CellVisualState, PinConfig,
};
use crate::state::focus::{FocusRequester, FocusTrigger, KeyboardController};
use crate::state::keyboard::KeyboardEvent;

use super::types::{
    FocusChangeCallback, PinEnteredCallback, PinInputProps, PropValue, ValueChangeCallback,
};

// =============================================================================
// Edit Outcome
// =============================================================================

/// What happened to a proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Stored; the PIN is still incomplete.
    Accepted,
    /// Stored and every cell is now filled.
    Completed,
    /// Too long or disallowed; the value did not change.
    Rejected,
    /// Candidate equals the current value - not an edit.
    Unchanged,
}

// =============================================================================
// Handle
// =============================================================================

/// A mounted PIN input.
///
/// Holds only handles to host state and the immutable config. Every read
/// goes back to the host signals, so external writes are always honoured.
pub struct PinInputHandle {
    value: Signal<String>,
    focused: Signal<bool>,
    config: Rc<PinConfig>,
    is_error: PropValue<bool>,
    on_value_change: Option<ValueChangeCallback>,
    on_pin_entered: Option<PinEnteredCallback>,
    on_focus_change: Option<FocusChangeCallback>,
    focus_requester: Rc<dyn FocusRequester>,
    keyboard: Option<Rc<dyn KeyboardController>>,
}

/// Mount a PIN input.
///
/// Requests focus once when `auto_focus` is set. The config is expected to
/// have gone through [`PinConfig::build`].
pub fn pin_input(props: PinInputProps) -> PinInputHandle {
    let is_error = props
        .is_error
        .unwrap_or(PropValue::Static(props.config.is_error));

    let handle = PinInputHandle {
        value: props.value,
        focused: props.focused,
        config: Rc::new(props.config),
        is_error,
        on_value_change: props.on_value_change,
        on_pin_entered: props.on_pin_entered,
        on_focus_change: props.on_focus_change,
        focus_requester: props.focus_requester,
        keyboard: props.keyboard,
    };

    debug!(max_size = handle.config.max_size, "pin input mounted");

    if props.auto_focus {
        handle.focus_requester.request_focus(FocusTrigger::Mount);
    }

    handle
}

impl PinInputHandle {
    pub fn config(&self) -> &PinConfig {
        &self.config
    }

    /// Current value, read from the host.
    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn is_error(&self) -> bool {
        self.is_error.get()
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// A raw text change from the input surface.
    pub fn handle_edit(&self, candidate: &str) -> EditOutcome {
        let current = self.value.get();
        if candidate == current {
            return EditOutcome::Unchanged;
        }

        let proposal = propose_with(
            &current,
            candidate,
            self.config.max_size,
            self.config.char_policy,
        );
        if proposal.value == current {
            return EditOutcome::Rejected;
        }

        self.value.set(proposal.value.clone());
        if let Some(ref cb) = self.on_value_change {
            cb(&proposal.value);
        }

        if proposal.completed {
            info!(len = self.config.max_size, "pin entered");
            if let Some(ref cb) = self.on_pin_entered {
                cb(&proposal.value);
            }
            EditOutcome::Completed
        } else {
            EditOutcome::Accepted
        }
    }

    /// Pasted text, inserted at the end like a hidden text field would.
    pub fn handle_paste(&self, text: &str) -> EditOutcome {
        let candidate = format!("{}{}", self.value.get(), text);
        self.handle_edit(&candidate)
    }

    /// A key press. Returns true when the event was consumed.
    ///
    /// Only handled while focused. Characters append, Backspace removes the
    /// last character, Enter acts as the keyboard's "done" action.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if event.is_release() || !self.focused.get() {
            return false;
        }

        match event.key.as_str() {
            "Backspace" if !event.modifiers.is_command() => {
                self.handle_edit(&drop_last(&self.value.get()));
                true
            }
            "Enter" => {
                trace!("pin input done action");
                if let Some(ref keyboard) = self.keyboard {
                    keyboard.hide();
                }
                true
            }
            _ => match event.typed_char() {
                Some(ch) => {
                    self.handle_edit(&append(&self.value.get(), ch));
                    true
                }
                None => false,
            },
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// A tap on the cell at `index`.
    pub fn handle_tap(&self, index: usize) {
        trace!(index, "pin cell tapped");
        self.focus_requester.request_focus(FocusTrigger::CellTap(index));
        if let Some(ref keyboard) = self.keyboard {
            keyboard.show();
        }
    }

    /// A click at `(x, y)`, in the same coordinate space as `layout`.
    /// Returns true when it landed on a cell.
    pub fn handle_click(&self, x: u16, y: u16, layout: &PinLayout) -> bool {
        match layout.hit_test(x, y) {
            Some(index) => {
                self.handle_tap(index);
                true
            }
            None => false,
        }
    }

    /// Focus-change notification from the host platform.
    pub fn set_focused(&self, focused: bool) {
        if self.focused.get() == focused {
            return;
        }
        debug!(focused, "pin input focus changed");
        self.focused.set(focused);
        if let Some(ref cb) = self.on_focus_change {
            cb(focused);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Display state of every cell for the current inputs.
    pub fn cells(&self) -> Vec<CellVisualState> {
        resolve(
            &self.value.get(),
            self.focused.get(),
            self.is_error.get(),
            self.config.max_size,
            self.config.mask,
        )
    }

    /// Derived cell states that track this input's signals.
    pub fn cells_derived(
        &self,
    ) -> Derived<Vec<CellVisualState>> {
        create_cells_derived(
            self.value.clone(),
            self.focused.clone(),
            self.is_error.clone(),
            self.config.clone(),
        )
    }

    /// Unmount. The host keeps its value and focus signals.
    pub fn cleanup(self) {
        debug!("pin input unmounted");
    }
}

/// Cell states recomputed whenever `value`, `focused` or `is_error` change.
pub fn create_cells_derived(
    value: Signal<String>,
    focused: Signal<bool>,
    is_error: PropValue<bool>,
    config: Rc<PinConfig>,
) -> Derived<Vec<CellVisualState>> {
    derived(move || {
        resolve(
            &value.get(),
            focused.get(),
            is_error.get(),
            config.max_size,
            config.mask,
        )
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use spark_signals::signal;

    use crate::layout::compute_pin_layout;
    use crate::pin::{BorderEmphasis, CharPolicy};
    use crate::state::focus::{KeyboardAction, RecordingFocusRequester, RecordingKeyboard};
    use crate::state::keyboard::{KeyState, Modifiers};

    struct Fixture {
        value: Signal<String>,
        focused: Signal<bool>,
        requester: Rc<RecordingFocusRequester>,
        keyboard: Rc<RecordingKeyboard>,
        changes: Rc<RefCell<Vec<String>>>,
        entered: Rc<RefCell<Vec<String>>>,
    }

    fn mount(config: PinConfig) -> (Fixture, PinInputHandle) {
        let fx = Fixture {
            value: signal(String::new()),
            focused: signal(true),
            requester: Rc::new(RecordingFocusRequester::new()),
            keyboard: Rc::new(RecordingKeyboard::new()),
            changes: Rc::new(RefCell::new(Vec::new())),
            entered: Rc::new(RefCell::new(Vec::new())),
        };

        let mut props = PinInputProps::new(
            fx.value.clone(),
            fx.focused.clone(),
            fx.requester.clone(),
        );
        props.config = config;
        props.keyboard = Some(fx.keyboard.clone());
        props.on_value_change = Some(Rc::new({
            let changes = fx.changes.clone();
            move |v| changes.borrow_mut().push(v.to_string())
        }));
        props.on_pin_entered = Some(Rc::new({
            let entered = fx.entered.clone();
            move |v| entered.borrow_mut().push(v.to_string())
        }));

        let handle = pin_input(props);
        (fx, handle)
    }

    fn type_str(handle: &PinInputHandle, s: &str) {
        for c in s.chars() {
            handle.handle_key(&KeyboardEvent::new(c.to_string()));
        }
    }

    #[test]
    fn test_mount_requests_focus_once() {
        let (fx, _handle) = mount(PinConfig::default());
        assert_eq!(fx.requester.triggers(), vec![FocusTrigger::Mount]);
    }

    #[test]
    fn test_mount_without_auto_focus() {
        let requester = Rc::new(RecordingFocusRequester::new());
        let mut props = PinInputProps::new(signal(String::new()), signal(false), requester.clone());
        props.auto_focus = false;
        let _handle = pin_input(props);
        assert_eq!(requester.count(), 0);
    }

    #[test]
    fn test_typing_writes_host_value() {
        let (fx, handle) = mount(PinConfig::default());
        type_str(&handle, "12");
        assert_eq!(fx.value.get(), "12");
        assert_eq!(*fx.changes.borrow(), vec!["1", "12"]);
        assert!(fx.entered.borrow().is_empty());
    }

    #[test]
    fn test_completion_fires_once_on_fourth_key() {
        let (fx, handle) = mount(PinConfig::default());

        type_str(&handle, "123");
        assert!(fx.entered.borrow().is_empty());

        type_str(&handle, "4");
        assert_eq!(*fx.entered.borrow(), vec!["1234"]);

        // A fifth key is rejected and fires nothing
        type_str(&handle, "5");
        assert_eq!(fx.value.get(), "1234");
        assert_eq!(fx.entered.borrow().len(), 1);
        assert_eq!(fx.changes.borrow().len(), 4);
    }

    #[test]
    fn test_backspace_then_refill_completes_again() {
        let (fx, handle) = mount(PinConfig::default());
        type_str(&handle, "1234");
        assert!(handle.handle_key(&KeyboardEvent::new("Backspace")));
        assert_eq!(fx.value.get(), "123");
        type_str(&handle, "9");
        assert_eq!(*fx.entered.borrow(), vec!["1234", "1239"]);
    }

    #[test]
    fn test_backspace_on_empty_is_consumed_without_change() {
        let (fx, handle) = mount(PinConfig::default());
        assert!(handle.handle_key(&KeyboardEvent::new("Backspace")));
        assert!(fx.changes.borrow().is_empty());
    }

    #[test]
    fn test_digits_policy_rejects_letters() {
        let (fx, handle) = mount(PinConfig::default());
        assert!(handle.handle_key(&KeyboardEvent::new("a")));
        assert_eq!(fx.value.get(), "");
        assert_eq!(handle.handle_edit("12x"), EditOutcome::Rejected);
    }

    #[test]
    fn test_any_policy_accepts_letters() {
        let (fx, handle) = mount(PinConfig::default().with_char_policy(CharPolicy::Any));
        type_str(&handle, "ab");
        assert_eq!(fx.value.get(), "ab");
    }

    #[test]
    fn test_handle_edit_outcomes() {
        let (_fx, handle) = mount(PinConfig::default());
        assert_eq!(handle.handle_edit(""), EditOutcome::Unchanged);
        assert_eq!(handle.handle_edit("12"), EditOutcome::Accepted);
        assert_eq!(handle.handle_edit("12345"), EditOutcome::Rejected);
        assert_eq!(handle.handle_edit("1234"), EditOutcome::Completed);
        assert_eq!(handle.handle_edit("1234"), EditOutcome::Unchanged);
    }

    #[test]
    fn test_paste_appends_or_rejects_whole() {
        let (fx, handle) = mount(PinConfig::new(6));
        assert_eq!(handle.handle_paste("123"), EditOutcome::Accepted);
        assert_eq!(handle.handle_paste("4567"), EditOutcome::Rejected);
        assert_eq!(fx.value.get(), "123");
        assert_eq!(handle.handle_paste("456"), EditOutcome::Completed);
        assert_eq!(*fx.entered.borrow(), vec!["123456"]);
    }

    #[test]
    fn test_keys_ignored_while_unfocused() {
        let (fx, handle) = mount(PinConfig::default());
        fx.focused.set(false);
        assert!(!handle.handle_key(&KeyboardEvent::new("1")));
        assert_eq!(fx.value.get(), "");
    }

    #[test]
    fn test_release_and_shortcuts_ignored() {
        let (fx, handle) = mount(PinConfig::default());

        let mut release = KeyboardEvent::new("1");
        release.state = KeyState::Release;
        assert!(!handle.handle_key(&release));

        assert!(!handle.handle_key(&KeyboardEvent::with_modifiers("1", Modifiers::ctrl())));
        assert!(!handle.handle_key(&KeyboardEvent::new("Tab")));
        assert_eq!(fx.value.get(), "");
    }

    #[test]
    fn test_enter_hides_keyboard() {
        let (fx, handle) = mount(PinConfig::default());
        assert!(handle.handle_key(&KeyboardEvent::new("Enter")));
        assert_eq!(fx.keyboard.actions(), vec![KeyboardAction::Hide]);
    }

    #[test]
    fn test_tap_requests_focus_and_shows_keyboard() {
        let (fx, handle) = mount(PinConfig::default());
        handle.handle_tap(2);
        handle.handle_tap(0);
        assert_eq!(
            fx.requester.triggers(),
            vec![
                FocusTrigger::Mount,
                FocusTrigger::CellTap(2),
                FocusTrigger::CellTap(0),
            ]
        );
        assert_eq!(
            fx.keyboard.actions(),
            vec![KeyboardAction::Show, KeyboardAction::Show]
        );
    }

    #[test]
    fn test_click_hit_tests_layout() {
        let (fx, handle) = mount(PinConfig::default());
        let layout = compute_pin_layout(handle.config()).unwrap();

        // Second cell starts at x=8 with default metrics
        assert!(handle.handle_click(9, 2, &layout));
        // Row padding is not a cell
        assert!(!handle.handle_click(0, 0, &layout));
        assert_eq!(
            fx.requester.triggers(),
            vec![FocusTrigger::Mount, FocusTrigger::CellTap(1)]
        );
    }

    #[test]
    fn test_set_focused_notifies_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let focused = signal(false);
        let mut props = PinInputProps::new(
            signal(String::new()),
            focused.clone(),
            Rc::new(RecordingFocusRequester::new()),
        );
        props.on_focus_change = Some(Rc::new({
            let seen = seen.clone();
            move |f| seen.borrow_mut().push(f)
        }));
        let handle = pin_input(props);

        handle.set_focused(true);
        handle.set_focused(true);
        handle.set_focused(false);

        assert!(!focused.get());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_cells_follow_host_signals() {
        let (fx, handle) = mount(PinConfig::default());
        fx.value.set("12".to_string());

        let cells = handle.cells();
        assert_eq!(cells[2].border_emphasis, BorderEmphasis::Focused);
        assert_eq!(cells[0].display_char, Some('1'));

        fx.focused.set(false);
        assert!(handle.cells().iter().all(|c| c.border_emphasis == BorderEmphasis::Normal));
    }

    #[test]
    fn test_reactive_error_flag() {
        let error = signal(false);
        let mut props = PinInputProps::new(
            signal("9999".to_string()),
            signal(true),
            Rc::new(RecordingFocusRequester::new()),
        );
        props.is_error = Some(PropValue::Signal(error.clone()));
        let handle = pin_input(props);

        assert!(!handle.is_error());
        error.set(true);
        assert!(handle.is_error());
        assert!(handle.cells().iter().all(|c| c.border_emphasis == BorderEmphasis::Error));
    }

    #[test]
    fn test_static_error_from_config() {
        let (_fx, handle) = mount(PinConfig::default().with_error(true));
        assert!(handle.is_error());
    }

    #[test]
    fn test_cells_derived_tracks_value() {
        let (fx, handle) = mount(PinConfig::default().with_mask('*'));
        let cells = handle.cells_derived();

        assert!(cells.get().iter().all(|c| c.display_char.is_none()));

        fx.value.set("1".to_string());
        let now = cells.get();
        assert_eq!(now[0].display_char, Some('*'));
        assert!(now[1].is_active);
    }

    #[test]
    fn test_backspace_clears_externally_set_letters() {
        let (fx, handle) = mount(PinConfig::default());
        fx.value.set("1a2".to_string());

        assert!(handle.handle_key(&KeyboardEvent::new("Backspace")));
        assert_eq!(fx.value.get(), "1a");
        assert!(handle.handle_key(&KeyboardEvent::new("Backspace")));
        assert_eq!(fx.value.get(), "1");
        assert_eq!(*fx.changes.borrow(), vec!["1a", "1"]);
    }

    #[test]
    fn test_value_set_externally_is_respected() {
        let (fx, handle) = mount(PinConfig::default());
        fx.value.set("123".to_string());
        type_str(&handle, "4");
        assert_eq!(*fx.entered.borrow(), vec!["1234"]);
    }
}
