use std::slice;

use super::action::Action;

/// Ordered list of actions owned by a single country.
///
/// Not `Clone`: a list belongs to exactly one record.
#[derive(Debug, Default, PartialEq)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    /// Creates an empty action list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action to the end of the list.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Appends an action and returns the list, for chained construction.
    pub fn with(mut self, action: Action) -> Self {
        self.push(action);
        self
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the list holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates over the actions in replay order.
    pub fn iter(&self) -> slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl FromIterator<Action> for ActionList {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Action>> for ActionList {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}
