use crate::domain::quote::AssetQuote;
use crate::interfaces::app::DashboardApp;
use crate::interfaces::components::Card;
use crate::interfaces::components::crypto_picker::crypto_picker;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub fn render(app: &mut DashboardApp, ui: &mut egui::Ui) {
    render_stats(app, ui);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let mut picked: Option<String> = None;
    let mut picker_opened = false;

    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(app.i18n.t("crypto.list.title"))
                    .size(16.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                picked = crypto_picker(
                    ui,
                    &app.i18n,
                    &app.available_assets,
                    &app.selection,
                    || picker_opened = true,
                );
            });
        });
        ui.add_space(8.0);

        if app.quotes.is_empty() && !app.selection.is_empty() {
            ui.label(
                egui::RichText::new(app.i18n.t("loading"))
                    .color(DesignSystem::TEXT_MUTED),
            );
        } else {
            render_table(app, ui);
            if let Some(updated) = app.last_updated {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        app.i18n.t("market.lastUpdate"),
                        updated.format("%H:%M:%S UTC")
                    ))
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
                );
            }
        }

        if let Some(error) = &app.last_error {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("{}: {}", app.i18n.t("market.error"), error))
                    .size(11.0)
                    .color(DesignSystem::DANGER),
            );
        }
    });

    if picker_opened {
        app.request_available_assets();
    }
    if let Some(id) = picked {
        app.add_asset(id);
    }
}

fn render_stats(app: &DashboardApp, ui: &mut egui::Ui) {
    let tracked = app.selection.len();
    let total_volume: f64 = app
        .quotes
        .iter()
        .map(|q| q.total_volume.to_f64().unwrap_or(0.0))
        .sum();
    let top_mover = app
        .quotes
        .iter()
        .filter(|q| q.price_change_percentage_24h.is_some())
        .max_by(|a, b| {
            let a = a.price_change_percentage_24h.unwrap_or(0.0).abs();
            let b = b.price_change_percentage_24h.unwrap_or(0.0).abs();
            a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
        });

    ui.columns(3, |columns| {
        Card::new()
            .title(app.i18n.t("market.tracked"))
            .show(&mut columns[0], |ui| {
                ui.label(
                    egui::RichText::new(tracked.to_string())
                        .size(24.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
            });

        Card::new()
            .title(app.i18n.t("market.volume"))
            .show(&mut columns[1], |ui| {
                ui.label(
                    egui::RichText::new(format_volume_f64(total_volume))
                        .size(24.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
            });

        Card::new()
            .title(app.i18n.t("market.topMover"))
            .show(&mut columns[2], |ui| match top_mover {
                Some(quote) => {
                    let change = quote.price_change_percentage_24h.unwrap_or(0.0);
                    ui.label(
                        egui::RichText::new(&quote.name)
                            .size(18.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(format_change(change))
                            .size(13.0)
                            .color(change_color(change)),
                    );
                }
                None => {
                    ui.label(
                        egui::RichText::new("—").size(18.0).color(DesignSystem::TEXT_MUTED),
                    );
                }
            });
    });
}

fn render_table(app: &DashboardApp, ui: &mut egui::Ui) {
    egui::Grid::new("crypto_table")
        .num_columns(4)
        .spacing([32.0, 10.0])
        .striped(true)
        .show(ui, |ui| {
            for key in [
                "crypto.list.name",
                "crypto.list.price",
                "crypto.list.change",
                "crypto.list.volume",
            ] {
                ui.label(
                    egui::RichText::new(app.i18n.t(key))
                        .size(12.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            ui.end_row();

            for quote in &app.quotes {
                render_row(ui, quote);
                ui.end_row();
            }
        });
}

fn render_row(ui: &mut egui::Ui, quote: &AssetQuote) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(&quote.name)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(quote.symbol.to_uppercase())
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
    });

    ui.label(format_price(quote.current_price));

    match quote.price_change_percentage_24h {
        Some(change) => {
            ui.label(
                egui::RichText::new(format_change(change)).color(change_color(change)),
            );
        }
        None => {
            ui.label(egui::RichText::new("—").color(DesignSystem::TEXT_MUTED));
        }
    }

    ui.label(format_volume(quote.total_volume));
}

fn change_color(change: f64) -> egui::Color32 {
    if change >= 0.0 {
        DesignSystem::SUCCESS
    } else {
        DesignSystem::DANGER
    }
}

fn format_change(change: f64) -> String {
    let arrow = if change >= 0.0 { "▲" } else { "▼" };
    format!("{arrow} {:.2}%", change.abs())
}

fn format_price(price: Decimal) -> String {
    let value = price.to_f64().unwrap_or(0.0);
    if value >= 1.0 {
        format!("${}", with_thousands_separators(value))
    } else {
        format!("${value:.4}")
    }
}

fn with_thousands_separators(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (integer, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();
    format!("{integer}.{fraction}")
}

fn format_volume(volume: Decimal) -> String {
    format_volume_f64(volume.to_f64().unwrap_or(0.0))
}

fn format_volume_f64(volume: f64) -> String {
    if volume >= 1e9 {
        format!("${:.1}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("${:.1}M", volume / 1e6)
    } else {
        format!("${volume:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn prices_group_thousands() {
        assert_eq!(
            format_price(Decimal::from_f64(67234.12).unwrap()),
            "$67,234.12"
        );
        assert_eq!(format_price(Decimal::from(5)), "$5.00");
    }

    #[test]
    fn sub_dollar_prices_keep_precision() {
        assert_eq!(format_price(Decimal::from_f64(0.0421).unwrap()), "$0.0421");
    }

    #[test]
    fn volumes_abbreviate() {
        assert_eq!(format_volume_f64(28_123_456_789.0), "$28.1B");
        assert_eq!(format_volume_f64(7_500_000.0), "$7.5M");
        assert_eq!(format_volume_f64(950.0), "$950");
    }

    #[test]
    fn change_formatting_is_signed_by_arrow() {
        assert_eq!(format_change(2.5), "▲ 2.50%");
        assert_eq!(format_change(-1.52), "▼ 1.52%");
    }
}
