//! Transient toast notifications rendered over the main view.

use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::time::{Duration, Instant};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

/// Frame-driven toast queue: callers push, `render` draws and expires.
#[derive(Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title, message, Severity::Info);
    }

    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title, message, Severity::Error);
    }

    fn push(&mut self, title: impl Into<String>, message: impl Into<String>, severity: Severity) {
        self.items.push(Notification {
            title: title.into(),
            message: message.into(),
            severity,
            created: Instant::now(),
        });
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.items
            .retain(|n| n.created.elapsed() < NOTIFICATION_TTL);
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notification_center"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in &self.items {
                    let accent = match notification.severity {
                        Severity::Info => DesignSystem::ACCENT_PRIMARY,
                        Severity::Error => DesignSystem::DANGER,
                    };

                    egui::Frame::NONE
                        .fill(DesignSystem::BG_CARD)
                        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
                        .stroke(egui::Stroke::new(1.0, accent))
                        .inner_margin(12)
                        .show(ui, |ui| {
                            ui.set_max_width(280.0);
                            ui.label(
                                egui::RichText::new(&notification.title)
                                    .strong()
                                    .color(accent),
                            );
                            if !notification.message.is_empty() {
                                ui.label(
                                    egui::RichText::new(&notification.message)
                                        .size(12.0)
                                        .color(DesignSystem::TEXT_SECONDARY),
                                );
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
