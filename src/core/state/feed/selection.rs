//! Selection state for the feed
//!
//! The selected card plays the role of the scroll position: moving it is how
//! the user scrolls, and its distance from the end drives the load trigger.

/// Messages that can be sent to update the selection state
pub enum Message {
    /// The previous item in the list was selected
    PreviousItemSelected,
    /// The next item in the list was selected
    NextItemSelected { max_index: usize },
    /// The first item in the list was selected
    FirstItemSelected,
    /// The last item in the list was selected
    LastItemSelected { max_index: usize },
    /// An item was inserted at `index`; keep the same item highlighted
    ItemInserted { index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected_index: Option<usize>,
}

impl Selection {
    /// Create a new selection state with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Get the currently selected index
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Update the selection state based on a message
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PreviousItemSelected => match self.selected_index {
                Some(index) => {
                    self.selected_index = Some(index.saturating_sub(1));
                }
                None => {
                    self.selected_index = Some(0);
                }
            },
            Message::NextItemSelected { max_index } => match self.selected_index {
                Some(index) if index < max_index => {
                    self.selected_index = Some(index + 1);
                }
                None => {
                    self.selected_index = Some(0);
                }
                _ => {}
            },
            Message::FirstItemSelected => {
                self.selected_index = Some(0);
            }
            Message::LastItemSelected { max_index } => {
                self.selected_index = Some(max_index);
            }
            Message::ItemInserted { index } => {
                if let Some(selected) = self.selected_index {
                    if index <= selected {
                        self.selected_index = Some(selected + 1);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_default() {
        let state = Selection::new();
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_first_and_last() {
        let mut state = Selection::new();
        state.update(Message::LastItemSelected { max_index: 5 });
        assert_eq!(state.selected_index(), Some(5));

        state.update(Message::FirstItemSelected);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_scroll_down_stops_at_end() {
        let mut state = Selection::new();
        state.update(Message::NextItemSelected { max_index: 1 });
        assert_eq!(state.selected_index(), Some(0));
        state.update(Message::NextItemSelected { max_index: 1 });
        assert_eq!(state.selected_index(), Some(1));
        state.update(Message::NextItemSelected { max_index: 1 });
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut state = Selection::new();
        state.update(Message::LastItemSelected { max_index: 1 });
        state.update(Message::PreviousItemSelected);
        state.update(Message::PreviousItemSelected);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_insert_before_selection_shifts_it() {
        let mut state = Selection::new();
        state.update(Message::LastItemSelected { max_index: 3 });

        state.update(Message::ItemInserted { index: 0 });
        assert_eq!(state.selected_index(), Some(4));

        state.update(Message::ItemInserted { index: 10 });
        assert_eq!(state.selected_index(), Some(4));
    }

    #[test]
    fn test_insert_without_selection() {
        let mut state = Selection::new();
        state.update(Message::ItemInserted { index: 0 });
        assert_eq!(state.selected_index(), None);
    }
}
