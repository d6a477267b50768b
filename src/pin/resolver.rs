//! Cell state resolver - per-render derivation of each cell's display state.
//!
//! Pure function of `(value, focused, is_error, max_size, mask)`. There is no
//! transition table: whenever any input changes the whole row is recomputed.
//!
//! Border emphasis precedence, highest first:
//!
//! ```text
//! is_error            -> Error    (every cell)
//! focused && i == len -> Focused  (the active cell only)
//! otherwise           -> Normal
//! ```
//!
//! Fill is independent of emphasis: cells holding a character are `Filled`.

use super::config::PinConfig;

/// Border emphasis of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderEmphasis {
    #[default]
    Normal,
    Focused,
    Error,
}

/// Background token of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFill {
    #[default]
    Empty,
    Filled,
}

/// Display state of one cell. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellVisualState {
    pub index: usize,
    pub has_character: bool,
    /// Mask or the entered character; `None` for empty cells.
    pub display_char: Option<char>,
    /// The cell the next typed character lands in, while focused.
    pub is_active: bool,
    pub border_emphasis: BorderEmphasis,
    pub fill: CellFill,
}

/// Resolve the display state of all `max_size` cells.
pub fn resolve(
    value: &str,
    focused: bool,
    is_error: bool,
    max_size: usize,
    mask: Option<char>,
) -> Vec<CellVisualState> {
    let mut chars = value.chars();
    let len = value.chars().count();

    (0..max_size)
        .map(|index| {
            let entered = chars.next();
            let has_character = index < len;
            let is_active = focused && index == len;

            let border_emphasis = if is_error {
                BorderEmphasis::Error
            } else if is_active {
                BorderEmphasis::Focused
            } else {
                BorderEmphasis::Normal
            };

            CellVisualState {
                index,
                has_character,
                display_char: entered.map(|c| mask.unwrap_or(c)),
                is_active,
                border_emphasis,
                fill: if has_character { CellFill::Filled } else { CellFill::Empty },
            }
        })
        .collect()
}

/// [`resolve`] with the state-relevant fields taken from `config`.
pub fn resolve_config(value: &str, focused: bool, config: &PinConfig) -> Vec<CellVisualState> {
    resolve(value, focused, config.is_error, config.max_size, config.mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasis(cells: &[CellVisualState]) -> Vec<BorderEmphasis> {
        cells.iter().map(|c| c.border_emphasis).collect()
    }

    #[test]
    fn test_resolve_len_matches_max_size() {
        assert_eq!(resolve("", false, false, 4, None).len(), 4);
        assert_eq!(resolve("12", true, false, 6, None).len(), 6);
        assert!(resolve("", true, false, 0, None).is_empty());
    }

    #[test]
    fn test_resolve_empty_focused_activates_first_cell() {
        let cells = resolve("", true, false, 4, None);
        assert!(cells[0].is_active);
        assert_eq!(
            emphasis(&cells),
            vec![
                BorderEmphasis::Focused,
                BorderEmphasis::Normal,
                BorderEmphasis::Normal,
                BorderEmphasis::Normal,
            ]
        );
        assert!(cells.iter().all(|c| c.fill == CellFill::Empty));
    }

    #[test]
    fn test_resolve_unfocused_has_no_active_cell() {
        let cells = resolve("12", false, false, 4, None);
        assert!(cells.iter().all(|c| !c.is_active));
        assert!(cells.iter().all(|c| c.border_emphasis == BorderEmphasis::Normal));
    }

    #[test]
    fn test_resolve_full_value_has_no_active_cell() {
        let cells = resolve("1234", true, false, 4, None);
        assert!(cells.iter().all(|c| !c.is_active));
        assert!(cells.iter().all(|c| c.fill == CellFill::Filled));
    }

    #[test]
    fn test_resolve_error_overrides_focus_everywhere() {
        let cells = resolve("1", true, true, 4, None);
        assert!(cells.iter().all(|c| c.border_emphasis == BorderEmphasis::Error));
        // Active flag is still reported; only the emphasis is overridden
        assert!(cells[1].is_active);
    }

    #[test]
    fn test_resolve_mask_substitutes_filled_cells() {
        let cells = resolve("12", false, false, 4, Some('*'));
        assert_eq!(cells[0].display_char, Some('*'));
        assert_eq!(cells[1].display_char, Some('*'));
        assert_eq!(cells[2].display_char, None);

        let cells = resolve("12", false, false, 4, None);
        assert_eq!(cells[0].display_char, Some('1'));
        assert_eq!(cells[1].display_char, Some('2'));
    }

    #[test]
    fn test_resolve_six_cells_active_last() {
        let cells = resolve("11111", true, false, 6, None);
        for cell in &cells[..5] {
            assert!(cell.has_character);
            assert_eq!(cell.fill, CellFill::Filled);
            assert_eq!(cell.border_emphasis, BorderEmphasis::Normal);
        }
        assert_eq!(cells[5].border_emphasis, BorderEmphasis::Focused);
        assert!(!cells[5].has_character);
    }

    #[test]
    fn test_resolve_value_longer_than_max_size() {
        // Host-supplied values are not clamped; only max_size cells exist
        let cells = resolve("123456", true, false, 4, None);
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.has_character && !c.is_active));
    }

    #[test]
    fn test_resolve_config_uses_config_fields() {
        let config = PinConfig::default().with_mask('•').with_error(true);
        let cells = resolve_config("7", true, &config);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].display_char, Some('•'));
        assert!(cells.iter().all(|c| c.border_emphasis == BorderEmphasis::Error));
    }
}
