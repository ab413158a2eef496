//! # Month Picker Sheet
//!
//! Bottom-sheet picker for jumping the transaction list to another month.
//! A thin wrapper: it watches the app's `show_month_picker` flag and commands
//! the sheet controller accordingly; the sheet itself holds no opinion about
//! why it was opened.

use eframe::egui;

use crate::ui::app_state::PocketLedgerApp;
use crate::ui::components::bottom_sheet::BottomSheet;
use crate::ui::components::theme::colors;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl PocketLedgerApp {
    /// Render the month picker sheet
    pub fn render_month_picker_sheet(&mut self, ctx: &egui::Context) {
        let PocketLedgerApp {
            month_picker_sheet: sheet,
            show_month_picker: visible_flag,
            selected_month,
            selected_year,
            ..
        } = self;

        if *visible_flag && !sheet.is_visible() {
            sheet.open();
        } else if !*visible_flag && sheet.is_visible() && !sheet.is_closing() {
            sheet.close();
        }

        let response = BottomSheet::new("month_picker", sheet)
            .title("Jump to month")
            .surface_fill(egui::Color32::from_rgb(250, 251, 252))
            .show(ctx, |ui| {
                // Year stepper
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() / 2.0 - 70.0).max(0.0));
                        if ui.button("⬅").clicked() {
                            *selected_year -= 1;
                        }
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(format!("{}", selected_year))
                                .strong()
                                .color(colors::TEXT_HEADING),
                        );
                        ui.add_space(12.0);
                        if ui.button("➡").clicked() {
                            *selected_year += 1;
                        }
                    });
                });
                ui.add_space(8.0);

                // 3x4 month grid; picking one closes the sheet
                egui::Grid::new("month_picker_grid")
                    .num_columns(3)
                    .spacing(egui::vec2(8.0, 8.0))
                    .show(ui, |ui| {
                        for (index, name) in MONTH_NAMES.iter().enumerate() {
                            let month = index as u32 + 1;
                            let is_current = month == *selected_month;
                            let fill = if is_current {
                                colors::INCOME
                            } else {
                                egui::Color32::from_rgb(240, 242, 244)
                            };
                            let text_color = if is_current {
                                colors::TEXT_WHITE
                            } else {
                                colors::TEXT_PRIMARY
                            };
                            let button = egui::Button::new(
                                egui::RichText::new(*name).color(text_color),
                            )
                            .fill(fill)
                            .rounding(egui::Rounding::same(8.0))
                            .min_size(egui::vec2(110.0, 34.0));
                            if ui.add(button).clicked() {
                                *selected_month = month;
                                *visible_flag = false;
                            }
                            if month % 3 == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

        if response.closed {
            self.show_month_picker = false;
        }
    }
}
