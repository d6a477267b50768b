//! PIN core - the pure input-state and rendering-policy model.
//!
//! - [`normalizer`] - `propose`: bound a raw edit, decide completion
//! - [`resolver`] - `resolve`: derive each cell's display state
//! - [`config`] - `PinConfig`: the parameters both read
//!
//! Neither function holds state. The host owns the value and focus flag and
//! re-invokes them on every edit and every render.

pub mod config;
pub mod normalizer;
pub mod resolver;

pub use config::{PinConfig, PinMetrics, PinStyle, DEFAULT_MAX_SIZE};
pub use normalizer::{append, drop_last, propose, propose_with, CharPolicy, Proposal};
pub use resolver::{resolve, resolve_config, BorderEmphasis, CellFill, CellVisualState};
