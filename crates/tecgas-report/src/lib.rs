//! Printable export of the gas planning sheet.
//!
//! The form is first laid out on pages ([`paginate`]) and then rendered as
//! print-ready XHTML ([`render_report`]): one heading and grid table per
//! section, grey header row, equal column widths across the printable width.

mod error;
mod layout;
mod options;
mod render;

pub use error::{ReportError, Result};
pub use layout::{
    HEADING_HEIGHT_PT, ReportBlock, ReportDocument, ReportPage, SPACER_PT, TITLE_HEIGHT_PT,
    paginate,
};
pub use options::{ExportOptions, PageSize};
pub use render::{export_plan, render_report, write_report};
