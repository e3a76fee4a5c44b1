//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

/// Text input widths
pub mod width {
    /// Value column of a labelled section
    pub const VALUE: f32 = 140.0;
    /// One table cell
    pub const CELL: f32 = 90.0;
}

pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}
