//! PIN Auth Example - four boxed cells guarding a secret
//!
//! Demonstrates:
//! - Host-owned value / focus / error signals
//! - Completion callback checking the PIN
//! - Error state flipped by the host, cleared on the next edit
//! - Click-to-focus through layout hit-testing
//!
//! Type `1234` to unlock. Esc or Ctrl+C quits.
//!
//! Run with: cargo run --example pin_auth
//! Logs: RUST_LOG=spark_pin=debug cargo run --example pin_auth 2> pin.log

mod common;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{signal, Signal};
use spark_pin::pin::PinConfig;
use spark_pin::state::input::{poll_event, InputEvent};
use spark_pin::state::{KeyboardController, SignalFocusRequester};
use spark_pin::theme::PinPalette;
use spark_pin::{compute_pin_layout, pin_input, Attr, PinInputProps, PropValue, Rgba};

use common::{init_tracing, Terminal};

const SECRET: &str = "1234";
const ORIGIN: (u16, u16) = (2, 2);

/// Terminals have no on-screen keyboard; show a keypad hint instead.
struct KeypadHint {
    visible: Signal<bool>,
}

impl KeyboardController for KeypadHint {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let value = signal(String::new());
    let focused = signal(false);
    let error = signal(false);
    let keypad = signal(true);
    let status = Rc::new(RefCell::new(String::from("Enter your PIN")));
    let unlocked = signal(false);

    let config = PinConfig::default()
        .with_mask('●')
        .with_palette(PinPalette::default().with_font(Rgba::WHITE).with_font_attrs(Attr::BOLD))
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let layout = compute_pin_layout(&config)
        .map_err(io::Error::other)?
        .at(ORIGIN.0, ORIGIN.1);

    let mut props = PinInputProps::new(
        value.clone(),
        focused.clone(),
        Rc::new(SignalFocusRequester::new(focused.clone())),
    );
    props.config = config;
    props.is_error = Some(PropValue::Signal(error.clone()));
    props.keyboard = Some(Rc::new(KeypadHint { visible: keypad.clone() }));
    props.on_value_change = Some(Rc::new({
        let error = error.clone();
        move |_| {
            if error.get() {
                error.set(false);
            }
        }
    }));
    props.on_pin_entered = Some(Rc::new({
        let error = error.clone();
        let status = status.clone();
        let unlocked = unlocked.clone();
        move |pin| {
            if pin == SECRET {
                *status.borrow_mut() = "Unlocked".to_string();
                unlocked.set(true);
            } else {
                *status.borrow_mut() = "Wrong PIN, try again".to_string();
                error.set(true);
            }
        }
    }));

    let pin = pin_input(props);
    let mut term = Terminal::enter()?;

    loop {
        term.clear()?;
        term.pin_row(&layout, &pin.cells(), pin.config())?;

        let below = ORIGIN.1 + layout.height + 1;
        let status_color = if error.get() { Rgba::RED } else { Rgba::LIGHT_GRAY };
        term.line(ORIGIN.0, below, &status.borrow(), status_color)?;
        if keypad.get() && focused.get() {
            term.line(ORIGIN.0, below + 1, "[ 1 2 3 4 5 6 7 8 9 0 ]  Enter hides", Rgba::GRAY)?;
        }
        term.flush()?;

        if unlocked.get() {
            std::thread::sleep(Duration::from_millis(600));
            break;
        }

        match poll_event(Duration::from_millis(100))? {
            Some(InputEvent::Key(key)) => {
                if key.key == "Escape" || (key.modifiers.ctrl && key.key == "c") {
                    break;
                }
                pin.handle_key(&key);
            }
            Some(InputEvent::Click { x, y }) => {
                pin.handle_click(x, y, &layout);
            }
            Some(InputEvent::Paste(text)) => {
                pin.handle_paste(&text);
            }
            Some(InputEvent::Focus(gained)) => pin.set_focused(gained),
            _ => {}
        }
    }

    drop(term);
    pin.cleanup();
    Ok(())
}
