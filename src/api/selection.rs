/// Exclusive series highlight: at most one series id owns the selection.
///
/// Clicking a series (line, marker, or legend entry) selects it; clicking the
/// current selection again, or an external reset, returns to none-selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Toggles the given id; selecting a new id deselects the previous one.
    ///
    /// Returns `true` when the state changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_owned());
        }
        true
    }

    /// External reset to none-selected. Returns `true` when the state changed.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.selected = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn selecting_second_series_replaces_first() {
        let mut selection = SelectionState::default();
        selection.toggle("a");
        selection.toggle("b");
        assert!(selection.is_selected("b"));
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn reselecting_clears() {
        let mut selection = SelectionState::default();
        selection.toggle("a");
        selection.toggle("a");
        assert_eq!(selection.selected(), None);
    }
}
