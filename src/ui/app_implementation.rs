use eframe::egui;

use crate::ui::app_state::{PocketLedgerApp, LEDGER_STORAGE_KEY};
use crate::ui::components::styling::{card_frame, setup_app_style};
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::transaction_list::render_transaction_list;

impl eframe::App for PocketLedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            ui.add_space(6.0);
            self.render_month_row(ui);
            ui.add_space(6.0);

            self.render_entries_section(ui);

            ui.add_space(10.0);
            self.render_add_button(ui);
        });

        // Sheets last so they stack above the screen; the entry form renders
        // last and therefore on top of the menu it was launched from
        self.render_month_picker_sheet(ctx);
        self.render_action_menu_sheet(ctx);
        self.render_entry_form_sheet(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.ledger) {
            Ok(json) => storage.set_string(LEDGER_STORAGE_KEY, json),
            Err(e) => log::warn!("⚠️ could not serialize ledger for saving: {}", e),
        }
    }
}

impl PocketLedgerApp {
    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(colors::EXPENSE, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(colors::INCOME, format!("✅ {}", success));
        }
    }

    /// Render the scrollable entry table for the selected month
    fn render_entries_section(&mut self, ui: &mut egui::Ui) {
        let entries = self
            .ledger
            .entries_for_month(self.selected_year, self.selected_month);
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 70.0).max(120.0))
                .show(ui, |ui| {
                    render_transaction_list(ui, &entries);
                });
        });
    }

    /// Render the big "+" button that opens the action menu sheet
    fn render_add_button(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                egui::RichText::new("➕  Add entry")
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_WHITE),
            )
            .fill(CURRENT_THEME.ledger.header)
            .rounding(egui::Rounding::same(22.0))
            .min_size(egui::vec2(180.0, 44.0));
            if ui.add(button).clicked() {
                self.clear_messages();
                self.show_action_menu = true;
            }
        });
    }
}
