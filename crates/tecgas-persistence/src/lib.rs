//! Save and load gas plans as JSON.
//!
//! A plan file is a single JSON object keyed by section name. There is no
//! version field; loading is positional and tolerant of short, missing or
//! unknown sections.
//!
//! - `document` - the [`PlanDocument`] type and its mapping to and from a form
//! - `io` - atomic save and load
//! - `error` - error types with user-facing messages

mod document;
mod error;
mod io;

pub use document::{LoadSummary, PlanDocument, SectionValues, apply_document, to_document};
pub use error::{PersistenceError, Result};
pub use io::{load_plan, read_document, save_plan, serialize_document};
