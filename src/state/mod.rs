//! State Module - Runtime input and focus plumbing
//!
//! - **Focus** - focus/keyboard capabilities the component calls into
//! - **Keyboard** - framework key event type
//! - **Input** - crossterm event conversion and polling

pub mod focus;
pub mod input;
pub mod keyboard;

pub use focus::{
    FocusRequester, FocusTrigger, KeyboardAction, KeyboardController, RecordingFocusRequester,
    RecordingKeyboard, SignalFocusRequester,
};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
