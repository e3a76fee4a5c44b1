/// What Clear All does with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Restore the declared default text.
    #[default]
    Reset,
    /// Leave the current text in place.
    Keep,
}

/// A named text value on the sheet.
///
/// Values stay free-form text; numeric interpretation happens only when a
/// derivation reads the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    text: String,
    default: String,
    editable: bool,
    clear: ClearPolicy,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            default: String::new(),
            editable: true,
            clear: ClearPolicy::Reset,
        }
    }

    /// Set the default text; the current text starts out equal to it.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self.text = self.default.clone();
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    #[must_use]
    pub fn kept_on_clear(mut self) -> Self {
        self.clear = ClearPolicy::Keep;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn clear_policy(&self) -> ClearPolicy {
        self.clear
    }

    /// Replace the text, returning whether it changed.
    pub(crate) fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        true
    }

    /// Apply the clear policy.
    pub(crate) fn clear(&mut self) {
        if self.clear == ClearPolicy::Reset {
            self.text.clone_from(&self.default);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_text() {
        let field = Field::new("Depth").with_default("70");
        assert_eq!(field.text(), "70");
        assert_eq!(field.default_text(), "70");
        assert!(field.is_editable());
    }

    #[test]
    fn clear_respects_policy() {
        let mut reset = Field::new("Time").with_default("Total");
        reset.set_text("12");
        reset.clear();
        assert_eq!(reset.text(), "Total");

        let mut kept = Field::new("Time").with_default("Total").kept_on_clear();
        kept.set_text("12");
        kept.clear();
        assert_eq!(kept.text(), "12");
    }

    #[test]
    fn set_text_reports_change() {
        let mut field = Field::new("ATA");
        assert!(field.set_text("3.12"));
        assert!(!field.set_text("3.12"));
    }
}
