//! OTP Example - six underlined cells, masked
//!
//! Demonstrates:
//! - A 6-digit one-time code with underlined cells
//! - Masking with `*`
//! - Palette presets (pass a name: terminal, dracula, nord)
//! - Cell states through a derived that follows the signals
//!
//! Run with: cargo run --example otp_underline -- nord

mod common;

use std::io;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::signal;
use spark_pin::pin::{PinConfig, PinStyle};
use spark_pin::state::input::{poll_event, InputEvent};
use spark_pin::state::SignalFocusRequester;
use spark_pin::theme::{get_preset, preset_names};
use spark_pin::{compute_pin_layout, pin_input, PinInputProps, Rgba};
use tracing::info;

use common::{init_tracing, Terminal};

fn main() -> io::Result<()> {
    init_tracing();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "dracula".to_string());
    let Some(palette) = get_preset(&preset) else {
        eprintln!("unknown preset {preset:?}, expected one of {:?}", preset_names());
        return Ok(());
    };

    let value = signal(String::new());
    let focused = signal(false);
    let entered = signal(None::<String>);

    let config = PinConfig::new(6)
        .with_mask('*')
        .with_style(PinStyle::Underlined)
        .with_palette(palette)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let layout = compute_pin_layout(&config).map_err(io::Error::other)?.at(2, 2);

    let mut props = PinInputProps::new(
        value.clone(),
        focused.clone(),
        Rc::new(SignalFocusRequester::new(focused.clone())),
    );
    props.config = config;
    props.on_pin_entered = Some(Rc::new({
        let entered = entered.clone();
        move |code| {
            info!(code, "otp entered");
            entered.set(Some(code.to_string()));
        }
    }));

    let otp = pin_input(props);
    let cells = otp.cells_derived();
    let mut term = Terminal::enter()?;

    loop {
        term.clear()?;
        term.pin_row(&layout, &cells.get(), otp.config())?;
        let below = 2 + layout.height + 1;
        let hint = match entered.get() {
            Some(code) => format!("Code {code} sent. Backspace to edit, Esc to quit"),
            None => "Enter the 6-digit code".to_string(),
        };
        term.line(2, below, &hint, Rgba::LIGHT_GRAY)?;
        term.flush()?;

        match poll_event(Duration::from_millis(100))? {
            Some(InputEvent::Key(key)) => {
                if key.key == "Escape" || (key.modifiers.ctrl && key.key == "c") {
                    break;
                }
                if otp.handle_key(&key) && key.key == "Backspace" {
                    entered.set(None);
                }
            }
            Some(InputEvent::Click { x, y }) => {
                otp.handle_click(x, y, &layout);
            }
            Some(InputEvent::Paste(text)) => {
                otp.handle_paste(text.trim());
            }
            Some(InputEvent::Focus(gained)) => otp.set_focused(gained),
            _ => {}
        }
    }

    drop(term);
    otp.cleanup();
    Ok(())
}
