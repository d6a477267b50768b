//! Primitive types - Props and callbacks.
//!
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;
use spark_signals::Signal;

use crate::pin::PinConfig;
use crate::state::focus::{FocusRequester, KeyboardController};

// =============================================================================
// Callback Types
// =============================================================================

/// Value change callback. Receives the accepted value.
pub type ValueChangeCallback = Rc<dyn Fn(&str)>;

/// Completion callback. Receives the full PIN.
pub type PinEnteredCallback = Rc<dyn Fn(&str)>;

/// Focus change callback. Receives the new focus flag.
pub type FocusChangeCallback = Rc<dyn Fn(bool)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// PinInput Props
// =============================================================================

/// Properties for [`pin_input`](super::pin_input).
///
/// `value` and `focused` belong to the host. The component reads them and
/// writes accepted edits / focus notifications back; it keeps no copy.
pub struct PinInputProps {
    /// Current PIN (two-way bound signal).
    pub value: Signal<String>,

    /// Whether the input surface holds focus (two-way bound signal).
    pub focused: Signal<bool>,

    /// Validated configuration.
    pub config: PinConfig,

    /// Error flag. Overrides `config.is_error` when set, so a host can flip
    /// it after checking a PIN without rebuilding the config.
    pub is_error: Option<PropValue<bool>>,

    /// Request focus once on mount (default: true).
    pub auto_focus: bool,

    /// Called with every accepted edit.
    pub on_value_change: Option<ValueChangeCallback>,

    /// Called once per accepted edit that fills every cell.
    pub on_pin_entered: Option<PinEnteredCallback>,

    /// Called when the focus flag changes.
    pub on_focus_change: Option<FocusChangeCallback>,

    /// Where focus requests go.
    pub focus_requester: Rc<dyn FocusRequester>,

    /// On-screen keyboard, if the host has one.
    pub keyboard: Option<Rc<dyn KeyboardController>>,
}

impl PinInputProps {
    /// Props with default config, auto-focus on, and no callbacks.
    pub fn new(
        value: Signal<String>,
        focused: Signal<bool>,
        focus_requester: Rc<dyn FocusRequester>,
    ) -> Self {
        Self {
            value,
            focused,
            config: PinConfig::default(),
            is_error: None,
            auto_focus: true,
            on_value_change: None,
            on_pin_entered: None,
            on_focus_change: None,
            focus_requester,
            keyboard: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_variants() {
        assert!(PropValue::Static(true).get());

        let flag = signal(false);
        let prop = PropValue::from(flag.clone());
        assert!(!prop.get());
        flag.set(true);
        assert!(prop.get());

        let getter: PropValue<u16> = PropValue::Getter(Rc::new(|| 7));
        assert_eq!(getter.get(), 7);

        assert!(!PropValue::<bool>::default().get());
    }
}
