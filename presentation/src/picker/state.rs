//! Picker state: query, filtered matches and cursor
//!
//! Pure data; no terminal access. The event loop feeds it
//! [`PickerAction`]s and renders it with
//! [`PickerWidget`](super::widget::PickerWidget).

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Append a character to the query
    InsertChar(char),
    /// Remove the last query character
    DeleteChar,
    /// Clear the whole query (Ctrl+U)
    ClearQuery,
    /// Move the cursor one match up
    Up,
    /// Move the cursor one match down
    Down,
    /// Choose the highlighted match
    Submit,
    /// Abort the selection
    Cancel,
    /// Key with no binding
    None,
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Keep the picker open
    Pending,
    /// The item at this index (into the original list) was chosen
    Selected(usize),
    /// The player cancelled
    Cancelled,
}

/// Case-insensitive subsequence match: every query character appears in
/// `candidate` in order. An empty query matches everything.
pub fn fuzzy_match(query: &str, candidate: &str) -> bool {
    let mut haystack = candidate.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|needle| haystack.any(|c| c == needle))
}

/// State of one selection session
#[derive(Debug, Clone)]
pub struct PickerState {
    items: Vec<String>,
    header: String,
    query: String,
    /// Indices into `items` that match `query`, in item order
    matches: Vec<usize>,
    /// Position within `matches`
    cursor: usize,
}

impl PickerState {
    pub fn new(items: Vec<String>, header: impl Into<String>) -> Self {
        let matches = (0..items.len()).collect();
        Self {
            items,
            header: header.into(),
            query: String::new(),
            matches,
            cursor: 0,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Index into the original list of the highlighted match
    pub fn selected_index(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// Preview text for the highlighted match
    pub fn preview(&self) -> Option<String> {
        self.selected_index()
            .and_then(|i| self.item(i))
            .map(|word| format!("Word: {}", word))
    }

    pub fn apply(&mut self, action: PickerAction) -> PickerOutcome {
        match action {
            PickerAction::InsertChar(c) => {
                self.query.push(c);
                self.refilter();
            }
            PickerAction::DeleteChar => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            PickerAction::ClearQuery => {
                self.query.clear();
                self.refilter();
            }
            PickerAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.matches.len() {
                    self.cursor += 1;
                }
            }
            PickerAction::Submit => {
                // Enter with nothing matched keeps the picker open.
                if let Some(index) = self.selected_index() {
                    return PickerOutcome::Selected(index);
                }
            }
            PickerAction::Cancel => return PickerOutcome::Cancelled,
            PickerAction::None => {}
        }
        PickerOutcome::Pending
    }

    fn refilter(&mut self) {
        self.matches = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| fuzzy_match(&self.query, item))
            .map(|(i, _)| i)
            .collect();
        self.cursor = self.cursor.min(self.matches.len().saturating_sub(1));
    }
}
