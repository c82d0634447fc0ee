use crate::interfaces::app::{DashboardApp, Page};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let Some(user) = app.auth.current_user() else {
        // Route guard: nothing to show without a session.
        app.page = Page::Login;
        return;
    };

    let user_name = user.name.clone();
    let user_email = user.email.clone();
    let current_theme = user
        .preferences
        .theme
        .clone()
        .unwrap_or_else(|| "dark".to_string());
    let watchlist = user.preferences.selected_cryptos.clone();

    let account_title = app.i18n.t("profile.accountInfo").to_string();
    let name_label = app.i18n.t("auth.name").to_string();
    let email_label = app.i18n.t("auth.email").to_string();
    let logout_label = app.i18n.t("auth.logout").to_string();
    let prefs_title = app.i18n.t("profile.preferences").to_string();
    let theme_label = app.i18n.t("profile.theme").to_string();
    let dark_label = app.i18n.t("profile.theme.dark").to_string();
    let light_label = app.i18n.t("profile.theme.light").to_string();
    let watchlist_label = app.i18n.t("profile.watchlist").to_string();
    let back_label = app.i18n.t("backToDashboard").to_string();

    let mut logout = false;
    let mut theme_choice: Option<&'static str> = None;
    let mut to_dashboard = false;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(app.i18n.t("profile.manageAccount"))
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(back_label).clicked() {
                to_dashboard = true;
            }
        });
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.columns(2, |columns| {
        Card::new()
            .title(account_title)
            .show(&mut columns[0], |ui| {
                ui.label(
                    egui::RichText::new(name_label)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
                ui.label(egui::RichText::new(user_name).strong());
                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new(email_label)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
                ui.label(egui::RichText::new(user_email).strong());
                ui.add_space(16.0);

                let logout_button =
                    egui::Button::new(egui::RichText::new(logout_label).color(egui::Color32::WHITE))
                        .fill(DesignSystem::DANGER);
                if ui
                    .add_sized([ui.available_width(), 30.0], logout_button)
                    .clicked()
                {
                    logout = true;
                }
            });

        Card::new().title(prefs_title).show(&mut columns[1], |ui| {
            ui.label(
                egui::RichText::new(theme_label)
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(current_theme == "dark", dark_label)
                    .clicked()
                {
                    theme_choice = Some("dark");
                }
                if ui
                    .selectable_label(current_theme == "light", light_label)
                    .clicked()
                {
                    theme_choice = Some("light");
                }
            });
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new(watchlist_label)
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
            ui.horizontal_wrapped(|ui| {
                for id in &watchlist {
                    egui::Frame::NONE
                        .fill(DesignSystem::BG_INPUT)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 3))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(id)
                                    .size(12.0)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        });
                }
            });
        });
    });

    if let Some(theme) = theme_choice {
        app.set_theme(theme);
    }
    if logout {
        app.logout();
    }
    if to_dashboard {
        app.page = Page::Dashboard;
    }
}
