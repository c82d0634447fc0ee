use crate::infrastructure::i18n::I18nService;
use eframe::egui;

/// Dropdown for the fixed set of supported languages. Returns `true` when
/// the selection changed this frame.
pub fn language_selector(ui: &mut egui::Ui, i18n: &mut I18nService) -> bool {
    let current_label = i18n
        .current_language_info()
        .map(|l| format!("{} {}", l.flag, l.native_name))
        .unwrap_or_else(|| i18n.current_language_code().to_string());

    let mut chosen: Option<String> = None;

    egui::ComboBox::from_id_salt("language_selector")
        .selected_text(current_label)
        .show_ui(ui, |ui| {
            for language in i18n.available_languages() {
                let selected = language.code == i18n.current_language_code();
                let label = format!("{} {}", language.flag, language.native_name);
                if ui.selectable_label(selected, label).clicked() && !selected {
                    chosen = Some(language.code.clone());
                }
            }
        });

    if let Some(code) = chosen {
        // Unsupported codes cannot appear here, but set_language would
        // ignore them anyway.
        i18n.set_language(&code)
    } else {
        false
    }
}
