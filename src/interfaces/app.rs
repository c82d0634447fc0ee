//! The eframe application: page routing, channel bridging and user-action
//! dispatch. Pure glue — every durable state change goes through the auth
//! service or the i18n service, and every fetch goes through the poller.

use crate::application::auth::AuthService;
use crate::application::market_poller::{MarketCommand, MarketUpdate};
use crate::domain::errors::AuthError;
use crate::domain::quote::AssetQuote;
use crate::domain::user::{GUEST_ASSETS, PreferencesUpdate};
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::components::NotificationCenter;
use crate::interfaces::components::language_selector::language_selector;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views;
use eframe::egui;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
    Register,
    Profile,
}

#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct DashboardApp {
    pub auth: AuthService,
    pub i18n: I18nService,
    pub page: Page,

    /// Quotes from the last completed poll. A failed poll leaves these in
    /// place until the next successful one.
    pub quotes: Vec<AssetQuote>,
    pub available_assets: Vec<AssetQuote>,
    pub selection: Vec<String>,
    pub last_error: Option<String>,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,

    pub notifications: NotificationCenter,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,

    selection_tx: watch::Sender<Vec<String>>,
    command_tx: mpsc::UnboundedSender<MarketCommand>,
    update_rx: crossbeam_channel::Receiver<MarketUpdate>,
    available_requested: bool,
}

impl DashboardApp {
    pub fn new(
        auth: AuthService,
        i18n: I18nService,
        selection_tx: watch::Sender<Vec<String>>,
        command_tx: mpsc::UnboundedSender<MarketCommand>,
        update_rx: crossbeam_channel::Receiver<MarketUpdate>,
    ) -> Self {
        let selection = match auth.current_user() {
            Some(user) => user.preferences.selected_cryptos.clone(),
            None => GUEST_ASSETS.iter().map(|s| s.to_string()).collect(),
        };

        let mut app = Self {
            auth,
            i18n,
            page: Page::Dashboard,
            quotes: Vec::new(),
            available_assets: Vec::new(),
            selection,
            last_error: None,
            last_updated: None,
            notifications: NotificationCenter::new(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            selection_tx,
            command_tx,
            update_rx,
            available_requested: false,
        };
        app.sync_selection();
        app
    }

    /// Pushes the current selection to the poller, skipping sends when the
    /// watched value is already identical (an unchanged key must not trigger
    /// a duplicate request).
    fn sync_selection(&self) {
        if *self.selection_tx.borrow() != self.selection {
            let _ = self.selection_tx.send(self.selection.clone());
        }
    }

    fn drain_updates(&mut self) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                MarketUpdate::Quotes(quotes) => {
                    debug!(count = quotes.len(), "received quotes");
                    self.quotes = quotes;
                    self.last_error = None;
                    self.last_updated = Some(chrono::Utc::now());
                }
                MarketUpdate::AvailableAssets(assets) => {
                    self.available_assets = assets;
                }
                MarketUpdate::Failed(message) => {
                    self.last_error = Some(message.clone());
                    let title = self.i18n.t("market.error").to_string();
                    self.notifications.push_error(title, message);
                }
            }
        }
    }

    /// Requests the picker's asset list, once per session.
    pub fn request_available_assets(&mut self) {
        if self.available_requested {
            return;
        }
        self.available_requested = true;
        let _ = self.command_tx.send(MarketCommand::LoadAvailableAssets);
    }

    pub fn submit_login(&mut self) {
        let email = self.login_form.email.trim().to_string();
        let password = self.login_form.password.clone();

        match self.auth.login(&email, &password) {
            Ok(session) => {
                self.selection = session.preferences.selected_cryptos.clone();
                self.sync_selection();
                self.login_form = LoginForm::default();
                self.page = Page::Dashboard;
                let title = self.i18n.t("auth.welcome").to_string();
                let message = self.i18n.t("auth.loginSuccess").to_string();
                self.notifications.push_info(title, message);
            }
            Err(e) => {
                let title = self.i18n.t("auth.loginFailed").to_string();
                let message = match e {
                    AuthError::InvalidCredentials => {
                        self.i18n.t("auth.invalidCredentials").to_string()
                    }
                    other => other.to_string(),
                };
                self.notifications.push_error(title, message);
            }
        }
    }

    pub fn submit_register(&mut self) {
        let name = self.register_form.name.trim().to_string();
        let email = self.register_form.email.trim().to_string();
        let password = self.register_form.password.clone();

        match self.auth.register(&name, &email, &password) {
            Ok(session) => {
                self.selection = session.preferences.selected_cryptos.clone();
                self.sync_selection();
                self.register_form = RegisterForm::default();
                self.page = Page::Dashboard;
                let title = self.i18n.t("auth.registered").to_string();
                let message = self.i18n.t("auth.accountCreated").to_string();
                self.notifications.push_info(title, message);
            }
            Err(e) => {
                let title = self.i18n.t("auth.registrationFailed").to_string();
                self.notifications.push_error(title, e.to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.selection = GUEST_ASSETS.iter().map(|s| s.to_string()).collect();
        self.sync_selection();
        self.page = Page::Dashboard;
        let title = self.i18n.t("auth.loggedOut").to_string();
        let message = self.i18n.t("auth.comeBackSoon").to_string();
        self.notifications.push_info(title, message);
    }

    /// Adds an asset to the watchlist (and, when signed in, to the stored
    /// preferences).
    pub fn add_asset(&mut self, id: String) {
        if self.selection.iter().any(|s| s == &id) {
            let title = self.i18n.t("crypto.alreadyAdded").to_string();
            let message = format!("{} {}", id, self.i18n.t("crypto.alreadyOnYourList"));
            self.notifications.push_info(title, message);
            return;
        }

        self.selection.push(id.clone());
        self.sync_selection();

        let title = self.i18n.t("crypto.added").to_string();
        let message = format!("{} {}", id, self.i18n.t("crypto.addedToYourList"));
        self.notifications.push_info(title, message);

        if self.auth.is_authenticated() {
            self.persist_preferences(PreferencesUpdate::selected_cryptos(self.selection.clone()));
        }
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.persist_preferences(PreferencesUpdate::theme(theme));
    }

    fn persist_preferences(&mut self, update: PreferencesUpdate) {
        match self.auth.update_preferences(update) {
            Ok(Some(_)) => {
                let title = self.i18n.t("settings.updated").to_string();
                let message = self.i18n.t("settings.preferencesUpdated").to_string();
                self.notifications.push_info(title, message);
            }
            Ok(None) => {}
            Err(e) => {
                let title = self.i18n.t("auth.errorOccurred").to_string();
                self.notifications.push_error(title, e.to_string());
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(self.i18n.t("dashboard.title"))
                        .size(24.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                let welcome = match self.auth.current_user() {
                    Some(user) => self
                        .i18n
                        .tf("dashboard.welcomeUser", &[("name", &user.name)]),
                    None => self.i18n.t("dashboard.welcome").to_string(),
                };
                ui.label(
                    egui::RichText::new(welcome)
                        .size(13.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.auth.is_authenticated() {
                    let profile_label = self.i18n.t("profile.title").to_string();
                    if ui.button(profile_label).clicked() {
                        self.page = Page::Profile;
                    }
                } else {
                    let register_label = self.i18n.t("auth.register").to_string();
                    let login_label = self.i18n.t("auth.login").to_string();
                    if ui.button(register_label).clicked() {
                        self.page = Page::Register;
                    }
                    if ui.button(login_label).clicked() {
                        self.page = Page::Login;
                    }
                }

                language_selector(ui, &mut self.i18n);
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self
            .auth
            .current_user()
            .and_then(|u| u.preferences.theme.clone());
        ctx.set_visuals(DesignSystem::visuals(theme.as_deref()));

        self.drain_updates();

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(DesignSystem::SPACING_LARGE);

                match self.page {
                    Page::Dashboard => views::dashboard::render(self, ui),
                    Page::Login => views::login::render(self, ui),
                    Page::Register => views::register::render(self, ui),
                    Page::Profile => views::profile::render(self, ui),
                }
            });

        self.notifications.render(ctx);

        // Poll results arrive on a channel; keep frames coming so they show
        // without user input.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
