use eframe::egui;

/// Shared palette and frame styles for the dashboard.
pub struct DesignSystem;

impl DesignSystem {
    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(12, 14, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 28, 36);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(16, 19, 25);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 179, 0);
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 202, 70);

    // Price movement
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    /// Visuals for the given theme tag; anything that is not "light" renders
    /// as the default dark theme.
    pub fn visuals(theme: Option<&str>) -> egui::Visuals {
        if theme == Some("light") {
            let mut visuals = egui::Visuals::light();
            visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
            visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);
            return visuals;
        }

        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard card styling.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Main layout frame for the central panel.
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
