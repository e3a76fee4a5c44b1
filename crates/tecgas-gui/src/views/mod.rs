//! Views for the planner window

mod form;
mod status;

pub use form::FormView;
pub use status::StatusBar;
