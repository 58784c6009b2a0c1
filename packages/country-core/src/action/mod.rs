//! Single-field mutation actions and the ordered list a country replays.

#[allow(clippy::module_inception)]
mod action;
mod action_list;

pub use action::Action;
pub use action_list::ActionList;
