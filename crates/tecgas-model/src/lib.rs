//! Form model for the Tec40/45 gas planning sheet.

pub mod error;
pub mod field;
pub mod form;
pub mod ids;
pub mod section;
pub mod sheet;
pub mod table;

pub use error::{ModelError, Result};
pub use field::{ClearPolicy, Field};
pub use form::FormModel;
pub use ids::{FieldId, FieldPath, SectionId};
pub use section::{Section, SectionKind};
pub use sheet::gas_planning_sheet;
pub use table::{Row, Table};
