//! # Transaction List
//!
//! Renders the selected month's ledger entries as a table with colored
//! income/expense amounts.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ledger::{EntryKind, LedgerEntry};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Render the entry table for one month
pub fn render_transaction_list(ui: &mut egui::Ui, entries: &[&LedgerEntry]) {
    if entries.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("No entries this month yet!")
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(12.0);
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(86.0)) // DATE
        .column(Column::remainder()) // DESCRIPTION
        .column(Column::exact(90.0)) // AMOUNT
        .header(30.0, |mut header| {
            for title in ["DATE", "DESCRIPTION", "AMOUNT"] {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    ui.painter()
                        .rect_filled(rect, egui::Rounding::ZERO, CURRENT_THEME.ledger.header);
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.colored_label(
                                colors::TEXT_WHITE,
                                egui::RichText::new(title).strong().small(),
                            );
                        },
                    );
                });
            }
        })
        .body(|mut body| {
            for entry in entries {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(entry.date.format("%b %d").to_string())
                                .color(colors::TEXT_SECONDARY),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(&entry.description)
                                .color(colors::TEXT_PRIMARY),
                        );
                    });
                    row.col(|ui| {
                        let (sign, color) = match entry.kind {
                            EntryKind::Income => ("+", colors::INCOME),
                            EntryKind::Expense => ("-", colors::EXPENSE),
                        };
                        ui.label(
                            egui::RichText::new(format!("{}${:.2}", sign, entry.amount))
                                .strong()
                                .color(color),
                        );
                    });
                });
            }
        });
}
