use crate::domain::quote::AssetQuote;
use crate::infrastructure::i18n::I18nService;
use eframe::egui;

/// "Add crypto" menu fed by the first page of available assets.
///
/// Returns the id the user picked this frame, if any. `on_open` fires when
/// the menu is opened so the caller can request the asset list lazily.
pub fn crypto_picker(
    ui: &mut egui::Ui,
    i18n: &I18nService,
    available: &[AssetQuote],
    selected: &[String],
    mut on_open: impl FnMut(),
) -> Option<String> {
    let mut picked = None;

    let response = ui.menu_button(format!("＋ {}", i18n.t("crypto.add")), |ui| {
        ui.set_min_width(220.0);
        if available.is_empty() {
            ui.label(i18n.t("loading"));
            return;
        }
        for asset in available {
            let already = selected.iter().any(|id| id == &asset.id);
            let label = format!("{} ({})", asset.name, asset.symbol.to_uppercase());
            if ui
                .add_enabled(!already, egui::Button::new(label))
                .clicked()
            {
                picked = Some(asset.id.clone());
                ui.close();
            }
        }
    });

    if response.response.clicked() {
        on_open();
    }

    picked
}
