//! Constructor selection
//!
//! The in progress burger as an ordered list of ingredient ids. Duplicates are
//! allowed and order is the order fillings are stacked. None of the operations
//! fail; out of range indices are ignored.

/// Constructor action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorAction {
    /// Append an ingredient id
    Add(String),
    /// Remove the id at index
    Remove(usize),
    /// Relocate the id at `from` to `to` in the shortened sequence
    Move {
        /// Current index
        from: usize,
        /// Index after removal
        to: usize,
    },
    /// Empty the selection
    Clear,
}

/// Constructor selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorState {
    selected_ids: Vec<String>,
}

impl ConstructorState {
    /// Selection built from ids
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected ids in constructor order
    pub fn selected_ids(&self) -> &[String] {
        &self.selected_ids
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Apply an action
    pub fn reduce(mut self, action: ConstructorAction) -> Self {
        match action {
            ConstructorAction::Add(id) => self.selected_ids.push(id),
            ConstructorAction::Remove(index) => {
                if index < self.selected_ids.len() {
                    self.selected_ids.remove(index);
                }
            }
            ConstructorAction::Move { from, to } => {
                if from < self.selected_ids.len() {
                    let id = self.selected_ids.remove(from);
                    let to = to.min(self.selected_ids.len());
                    self.selected_ids.insert(to, id);
                }
            }
            ConstructorAction::Clear => self.selected_ids.clear(),
        }
        self
    }
}
