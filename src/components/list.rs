//! List cursor over items owned elsewhere

use ratatui::widgets::ListState;

/// Selection state for a list whose items live outside the component.
///
/// Every operation takes the current item count so the cursor stays valid
/// as the list grows and shrinks.
#[derive(Debug, Default)]
pub struct ListCursor {
    /// The list state for ratatui
    pub state: ListState,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected index
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Keep the selection inside `0..len`
    pub fn clamp(&mut self, len: usize) {
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            None => self.state.select(Some(0)),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    /// Select the next item, wrapping around
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.state.select(None);
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Select the previous item, wrapping around
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.state.select(None);
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.state.select(Some(i));
    }

    /// Select the last item
    pub fn select_last(&mut self, len: usize) {
        self.state.select(len.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_wrap() {
        let mut cursor = ListCursor::new();
        cursor.next(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.previous(3);
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = ListCursor::new();
        cursor.select_last(5);
        assert_eq!(cursor.selected(), Some(4));
        cursor.clamp(2);
        assert_eq!(cursor.selected(), Some(1));
        cursor.clamp(0);
        assert_eq!(cursor.selected(), None);
        cursor.clamp(1);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn test_empty_list() {
        let mut cursor = ListCursor::new();
        cursor.next(0);
        cursor.previous(0);
        cursor.select_last(0);
        assert_eq!(cursor.selected(), None);
    }
}
