//! Page layout for the export.
//!
//! Each section becomes a block: a heading, a header row and one row per
//! field row. Blocks flow top to bottom; a block that runs past the bottom
//! margin continues on the next page with its header row repeated.

use chrono::NaiveDateTime;
use tecgas_model::{FormModel, Section, SectionKind};

use crate::error::{ReportError, Result};
use crate::options::{ExportOptions, PageSize};

/// Height reserved for a section heading.
pub const HEADING_HEIGHT_PT: f64 = 18.0;
/// Gap after every block.
pub const SPACER_PT: f64 = 6.0;
/// Height reserved for the document title on the first page.
pub const TITLE_HEIGHT_PT: f64 = 24.0;
/// Top plus bottom cell padding.
const CELL_PADDING_PT: f64 = 2.0;
const LEADING: f64 = 1.2;
const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportBlock {
    pub heading: String,
    /// True for the second and later parts of a split section.
    pub continued: bool,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_width_pt: f64,
}

impl ReportBlock {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub blocks: Vec<ReportBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: Option<String>,
    pub generated_at: Option<NaiveDateTime>,
    pub page_size: PageSize,
    pub margin_pt: f64,
    pub font_size_pt: f64,
    pub pages: Vec<ReportPage>,
}

/// Header and rows of one section, before it is placed on pages.
struct SectionTable {
    heading: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn section_table(section: &Section) -> SectionTable {
    let (header, rows) = match section.kind() {
        SectionKind::Flat(fields) => (
            vec![String::new(), String::new()],
            fields
                .iter()
                .map(|field| vec![field.name().to_string(), field.text().to_string()])
                .collect(),
        ),
        SectionKind::Table(table) => (
            table.headers().to_vec(),
            table
                .rows()
                .iter()
                .map(|row| row.texts().map(str::to_string).collect())
                .collect(),
        ),
    };
    SectionTable {
        heading: section.name().to_string(),
        header,
        rows,
    }
}

/// Lay the form out on pages.
pub fn paginate(form: &FormModel, options: &ExportOptions) -> Result<ReportDocument> {
    let (width, height) = options.content_area_pt();
    if width <= 0.0 || height <= 0.0 {
        return Err(ReportError::PageTooSmall { width, height });
    }
    let row_height = options.font_size_pt * LEADING + CELL_PADDING_PT;

    let mut pages = Vec::new();
    let mut current: Vec<ReportBlock> = Vec::new();
    let mut used = if options.title.is_some() {
        TITLE_HEIGHT_PT
    } else {
        0.0
    };

    for section in form.sections() {
        let table = section_table(section);
        let column_width_pt = width / table.header.len().max(1) as f64;
        let mut remaining = table.rows.as_slice();
        let mut continued = false;

        loop {
            let start = HEADING_HEIGHT_PT + row_height;
            let min_rows = usize::from(!remaining.is_empty());
            // Start a new page unless the heading, header and first row fit.
            if !current.is_empty() && used + start + min_rows as f64 * row_height > height + EPSILON {
                pages.push(ReportPage {
                    blocks: std::mem::take(&mut current),
                });
                used = 0.0;
            }

            used += start;
            let fit = ((height - used + EPSILON) / row_height).floor().max(0.0) as usize;
            let take = fit.max(min_rows).min(remaining.len());
            let (placed, rest) = remaining.split_at(take);
            used += take as f64 * row_height;

            current.push(ReportBlock {
                heading: table.heading.clone(),
                continued,
                header: table.header.clone(),
                rows: placed.to_vec(),
                column_width_pt,
            });

            if rest.is_empty() {
                used += SPACER_PT;
                break;
            }
            pages.push(ReportPage {
                blocks: std::mem::take(&mut current),
            });
            used = 0.0;
            remaining = rest;
            continued = true;
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(ReportPage { blocks: current });
    }

    Ok(ReportDocument {
        title: options.title.clone(),
        generated_at: options.generated_at,
        page_size: options.page_size,
        margin_pt: options.margin_pt,
        font_size_pt: options.font_size_pt,
        pages,
    })
}
