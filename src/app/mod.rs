//! Menu controller and its navigation state machine.
//!
//! [`NavState::reduce`] is pure: it maps an [`Action`](types::Action) to the next state
//! plus a list of [`Effect`](types::Effect)s. [`App`] owns the collaborators (config
//! store, session launcher, overlays) and carries the effects out.

mod controller;
mod host;
pub mod keymap;
mod state;
mod types;

pub use controller::App;
pub use types::{NavState, View};

#[cfg(test)]
pub use types::Action;
