//! # Header Components
//!
//! App title + balance header and the month navigation row. The month label
//! doubles as the button that opens the month picker sheet.

use eframe::egui;

use crate::ui::app_state::PocketLedgerApp;
use crate::ui::components::month_picker::MONTH_NAMES;
use crate::ui::components::theme::colors;

impl PocketLedgerApp {
    /// Render the app header with the running balance
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💰 Pocket Ledger")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_HEADING),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let balance = self.ledger.balance();
                let balance_color = if balance >= 0.0 {
                    colors::INCOME
                } else {
                    colors::EXPENSE
                };
                ui.label(
                    egui::RichText::new(format!("${:.2}", balance))
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(balance_color),
                );
            });
        });
    }

    /// Render the month stepper row; the center label opens the picker sheet
    pub fn render_month_row(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() / 2.0 - 110.0).max(0.0));
                if ui.button("⬅").clicked() {
                    if self.selected_month == 1 {
                        self.selected_month = 12;
                        self.selected_year -= 1;
                    } else {
                        self.selected_month -= 1;
                    }
                }

                ui.add_space(10.0);
                let label = format!(
                    "{} {}",
                    MONTH_NAMES[(self.selected_month - 1) as usize],
                    self.selected_year
                );
                let month_button = egui::Button::new(
                    egui::RichText::new(label).strong().color(colors::TEXT_PRIMARY),
                )
                .fill(egui::Color32::from_rgb(240, 242, 244))
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(140.0, 30.0));
                if ui.add(month_button).clicked() {
                    self.show_month_picker = true;
                }
                ui.add_space(10.0);

                if ui.button("➡").clicked() {
                    if self.selected_month == 12 {
                        self.selected_month = 1;
                        self.selected_year += 1;
                    } else {
                        self.selected_month += 1;
                    }
                }
            });
        });
    }
}
