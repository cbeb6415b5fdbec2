//! Keyboard focus state machine.
//!
//! Focus moves between the query input and the rendered suggestion rows via
//! the arrow keys, with a global shortcut jumping from the page body to the
//! input. Transitions are pure index arithmetic over the ordered row list.

/// The element currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing widget-related holds focus.
    Body,
    /// The query input line.
    Input,
    /// The row at this zero-based position in the suggestion panel.
    Row(usize),
}

impl Focus {
    /// ArrowDown transition given the number of rendered rows.
    ///
    /// Returns the new focus and whether the event was consumed (a transition
    /// occurred). Moving below the last row wraps to the input, never back to
    /// row zero.
    #[must_use]
    pub fn arrow_down(self, row_count: usize) -> (Self, bool) {
        match self {
            Self::Input if row_count > 0 => (Self::Row(0), true),
            Self::Row(index) if index + 1 < row_count => (Self::Row(index + 1), true),
            Self::Row(_) => (Self::Input, true),
            other => (other, false),
        }
    }

    /// ArrowUp transition given the number of rendered rows.
    #[must_use]
    pub fn arrow_up(self, row_count: usize) -> (Self, bool) {
        match self {
            Self::Input if row_count > 0 => (Self::Row(row_count - 1), true),
            Self::Row(index) if index > 0 => (Self::Row(index - 1), true),
            Self::Row(_) => (Self::Input, true),
            other => (other, false),
        }
    }

    /// Global focus shortcut: `/` or `s` jump to the input, but only while
    /// the page body holds focus. Anywhere else those keys are ordinary
    /// characters.
    #[must_use]
    pub fn global_shortcut(self, key: char) -> Option<Self> {
        match self {
            Self::Body if key == '/' || key == 's' => Some(Self::Input),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_arrow_down_focuses_first_row() {
        assert_eq!(Focus::Input.arrow_down(3), (Focus::Row(0), true));
    }

    #[test]
    fn input_arrow_up_focuses_last_row() {
        assert_eq!(Focus::Input.arrow_up(3), (Focus::Row(2), true));
    }

    #[test]
    fn arrows_on_input_are_ignored_without_rows() {
        assert_eq!(Focus::Input.arrow_down(0), (Focus::Input, false));
        assert_eq!(Focus::Input.arrow_up(0), (Focus::Input, false));
    }

    #[test]
    fn last_row_wraps_to_input_not_to_row_zero() {
        assert_eq!(Focus::Row(2).arrow_down(3), (Focus::Input, true));
    }

    #[test]
    fn first_row_arrow_up_returns_to_input() {
        assert_eq!(Focus::Row(0).arrow_up(3), (Focus::Input, true));
    }

    #[test]
    fn rows_step_through_their_neighbours() {
        assert_eq!(Focus::Row(0).arrow_down(3), (Focus::Row(1), true));
        assert_eq!(Focus::Row(2).arrow_up(3), (Focus::Row(1), true));
    }

    #[test]
    fn body_ignores_arrow_keys() {
        assert_eq!(Focus::Body.arrow_down(3), (Focus::Body, false));
        assert_eq!(Focus::Body.arrow_up(3), (Focus::Body, false));
    }

    #[test]
    fn shortcut_fires_only_from_the_body() {
        assert_eq!(Focus::Body.global_shortcut('/'), Some(Focus::Input));
        assert_eq!(Focus::Body.global_shortcut('s'), Some(Focus::Input));
        assert_eq!(Focus::Body.global_shortcut('x'), None);
        assert_eq!(Focus::Input.global_shortcut('/'), None);
        assert_eq!(Focus::Row(1).global_shortcut('s'), None);
    }
}
