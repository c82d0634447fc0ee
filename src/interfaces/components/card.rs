use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A generic card container with standard styling.
pub struct Card {
    title: Option<String>,
    min_height: f32,
    highlighted: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            min_height: 0.0,
            highlighted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let mut frame = DesignSystem::card_frame();

        if self.highlighted {
            frame = frame.stroke(egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY));
        }

        frame.show(ui, |ui| {
            if self.min_height > 0.0 {
                ui.set_min_height(self.min_height);
            }
            if let Some(title) = &self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(13.0)
                        .strong()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.add_space(8.0);
            }
            add_contents(ui)
        })
    }
}
