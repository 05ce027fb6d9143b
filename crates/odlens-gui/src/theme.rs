//! Theme and styling constants.

/// Spacing constants.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Common color constants not covered by egui's visuals.
pub mod colors {
    use egui::Color32;

    /// Background tint for the derived (read-only) field of a group.
    pub const DERIVED_LIGHT: Color32 = Color32::from_rgb(224, 255, 224);
    /// Dark-mode counterpart of [`DERIVED_LIGHT`].
    pub const DERIVED_DARK: Color32 = Color32::from_rgb(28, 56, 28);
}
