//! File I/O for plan documents.

mod load;
mod save;

pub use load::{load_plan, read_document};
pub use save::{save_plan, serialize_document};
