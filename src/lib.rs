//! # spark-pin
//!
//! Fixed-length PIN / OTP input for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The host owns two signals, the current value and the focus flag. Everything
//! else is derived from them:
//!
//! ```text
//! edit ──► propose ──► value signal ──► resolve ──► Vec<CellVisualState> ──► renderer
//!                                           ▲
//!                         focused, is_error ┘
//! ```
//!
//! `propose` bounds an edit to the configured length and decides completion.
//! `resolve` maps (value, focused, is_error) to one display state per cell.
//! Both are pure; [`primitives::pin_input`] wires them to signals, key events,
//! focus requests and callbacks.
//!
//! ## Modules
//!
//! - [`pin`] - Normalizer, resolver and configuration
//! - [`primitives`] - The `pin_input` component
//! - [`state`] - Key events, crossterm input, focus and keyboard capabilities
//! - [`layout`] - Cell rectangles via Taffy
//! - [`theme`] - Palettes mapping cell states to colors
//! - [`types`] - Colors, attributes, border styles

pub mod error;
pub mod layout;
pub mod pin;
pub mod primitives;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{ConfigError, LayoutError};

pub use pin::{
    propose, propose_with, resolve, resolve_config, BorderEmphasis, CellFill, CellVisualState,
    CharPolicy, PinConfig, PinMetrics, PinStyle, Proposal, DEFAULT_MAX_SIZE,
};

pub use primitives::{
    create_cells_derived, pin_input, EditOutcome, PinInputHandle, PinInputProps, PropValue,
};

pub use state::{
    FocusRequester, FocusTrigger, KeyState, KeyboardController, KeyboardEvent, Modifiers,
    SignalFocusRequester,
};

pub use layout::{compute_pin_layout, CellRect, PinLayout};

pub use theme::PinPalette;
