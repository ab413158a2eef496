//! # Action Menu Sheet
//!
//! Bottom-sheet menu behind the "+" button: choose whether to record an
//! expense or an income entry. Picking one hands off to the entry form sheet.

use eframe::egui;
use log::debug;

use crate::ledger::EntryKind;
use crate::ui::app_state::PocketLedgerApp;
use crate::ui::components::bottom_sheet::BottomSheet;
use crate::ui::components::theme::colors;

impl PocketLedgerApp {
    /// Render the add-entry action menu sheet
    pub fn render_action_menu_sheet(&mut self, ctx: &egui::Context) {
        let PocketLedgerApp {
            action_menu_sheet: sheet,
            show_action_menu: visible_flag,
            show_entry_form,
            entry_form,
            ..
        } = self;

        if *visible_flag && !sheet.is_visible() {
            sheet.open();
        } else if !*visible_flag && sheet.is_visible() && !sheet.is_closing() {
            sheet.close();
        }

        let mut picked: Option<EntryKind> = None;
        BottomSheet::new("action_menu", sheet)
            .title("Add to your ledger")
            .image(egui::include_image!("../../../assets/coin.png"))
            .on_close(|| debug!("📋 action menu dismissed"))
            .show(ctx, |ui| {
                let expense = egui::Button::new(
                    egui::RichText::new("💸  Add expense").color(colors::TEXT_WHITE),
                )
                .fill(colors::EXPENSE)
                .rounding(egui::Rounding::same(10.0))
                .min_size(egui::vec2(ui.available_width(), 44.0));
                if ui.add(expense).clicked() {
                    picked = Some(EntryKind::Expense);
                }

                ui.add_space(8.0);

                let income = egui::Button::new(
                    egui::RichText::new("💰  Add income").color(colors::TEXT_WHITE),
                )
                .fill(colors::INCOME)
                .rounding(egui::Rounding::same(10.0))
                .min_size(egui::vec2(ui.available_width(), 44.0));
                if ui.add(income).clicked() {
                    picked = Some(EntryKind::Income);
                }
            });

        if let Some(kind) = picked {
            entry_form.clear();
            entry_form.kind = kind;
            *show_entry_form = true;
            *visible_flag = false;
        }

        // Backdrop/handle dismissal also has to drop the flag, or the
        // wrapper would immediately reopen the sheet.
        if !sheet.is_visible() {
            *visible_flag = false;
        }
    }
}
