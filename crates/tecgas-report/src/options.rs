use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

/// Paper sizes supported by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    pub const fn all() -> &'static [PageSize] {
        &[Self::Letter, Self::A4]
    }

    /// Width and height in points.
    pub const fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::A4 => (595.28, 841.89),
        }
    }

    /// Value for the CSS `@page size` property.
    pub const fn css_size(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::A4 => "A4",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Letter => "Letter",
            Self::A4 => "A4",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(Self::Letter),
            "a4" => Ok(Self::A4),
            other => Err(format!("unknown page size: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub page_size: PageSize,
    /// Same margin on all four sides, in points.
    pub margin_pt: f64,
    pub font_size_pt: f64,
    pub title: Option<String>,
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin_pt: 20.0,
            font_size_pt: 8.0,
            title: None,
            generated_at: None,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Printable width and height inside the margins.
    pub fn content_area_pt(&self) -> (f64, f64) {
        let (width, height) = self.page_size.dimensions_pt();
        (
            width - 2.0 * self.margin_pt,
            height - 2.0 * self.margin_pt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_content_width_matches_sheet_layout() {
        let options = ExportOptions::default();
        assert_eq!(options.content_area_pt(), (572.0, 752.0));
    }

    #[test]
    fn page_size_parses_case_insensitively() {
        assert_eq!("A4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!(" letter ".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert!("legal".parse::<PageSize>().is_err());
    }
}
