//! Primitives - Component building blocks.
//!
//! - [`pin_input`] - fixed-length PIN/OTP entry bound to host signals
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `is_error: PropValue::Static(false)`
//! - Signals: `is_error: PropValue::Signal(error_signal)` (stays connected!)
//! - Getters: `is_error: PropValue::Getter(Rc::new(|| check()))`
//!
//! The value and focus flag are always signals. The component never copies
//! them, so a host write between two events is seen by the next one.
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! props.is_error = Some(PropValue::Signal(error));
//!
//! // WRONG - extracts value, breaks reactivity
//! props.is_error = Some(PropValue::Static(error.get()));
//! ```

mod pin_input;
mod types;

pub use pin_input::{create_cells_derived, pin_input, EditOutcome, PinInputHandle};
pub use types::*;
