use crate::interfaces::app::{DashboardApp, Page};
use crate::interfaces::components::Card;
use eframe::egui;

pub fn render(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let title = app.i18n.t("auth.register").to_string();
    let name_label = app.i18n.t("auth.name").to_string();
    let email_label = app.i18n.t("auth.email").to_string();
    let password_label = app.i18n.t("auth.password").to_string();
    let submit_label = app.i18n.t("auth.register").to_string();
    let login_link = app.i18n.t("auth.haveAccount").to_string();
    let back_link = app.i18n.t("backToDashboard").to_string();

    let mut submit = false;
    let mut to_login = false;
    let mut to_dashboard = false;

    ui.vertical_centered(|ui| {
        ui.set_max_width(380.0);
        Card::new().title(title).show(ui, |ui| {
            ui.label(name_label);
            ui.text_edit_singleline(&mut app.register_form.name);
            ui.add_space(8.0);

            ui.label(email_label);
            ui.text_edit_singleline(&mut app.register_form.email);
            ui.add_space(8.0);

            ui.label(password_label);
            let password = egui::TextEdit::singleline(&mut app.register_form.password)
                .password(true)
                .desired_width(f32::INFINITY);
            ui.add(password);
            ui.add_space(12.0);

            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new(submit_label))
                .clicked()
            {
                submit = true;
            }
            ui.add_space(8.0);

            if ui.link(login_link).clicked() {
                to_login = true;
            }
            if ui.link(back_link).clicked() {
                to_dashboard = true;
            }
        });
    });

    if submit {
        app.submit_register();
    }
    if to_login {
        app.page = Page::Login;
    }
    if to_dashboard {
        app.page = Page::Dashboard;
    }
}
