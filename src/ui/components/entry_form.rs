//! # Entry Form Sheet
//!
//! Bottom-sheet form for adding an income or expense entry to the ledger.
//!
//! ## Responsibilities:
//! - Render description + amount fields with inline validation
//! - Keep the sheet controller in step with the app's visible flag
//! - Submit valid entries into the ledger and surface validation errors
//!
//! The submit/cancel buttons live in the sheet's footer region; they report
//! back through `Cell`s because the footer closure runs while the form state
//! is still borrowed by the body.

use std::cell::Cell;

use eframe::egui;
use log::info;

use crate::ledger::{EntryKind, LedgerError};
use crate::ui::app_state::PocketLedgerApp;
use crate::ui::components::bottom_sheet::BottomSheet;
use crate::ui::components::theme::colors;

const MAX_DESCRIPTION_CHARS: usize = 70;

/// Input state for the add-entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    pub description: String,
    pub amount: String,
    pub kind: EntryKind,
    pub description_error: Option<String>,
    pub amount_error: Option<String>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        EntryFormState {
            description: String::new(),
            amount: String::new(),
            kind: EntryKind::Expense,
            description_error: None,
            amount_error: None,
        }
    }
}

impl EntryFormState {
    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.description_error = None;
        self.amount_error = None;
    }

    /// Validate both fields, recording per-field error messages.
    pub fn validate(&mut self) -> bool {
        self.description_error = if self.description.trim().is_empty() {
            Some("Please enter a description".to_string())
        } else if self.description.len() > MAX_DESCRIPTION_CHARS {
            Some(format!("Keep it under {} characters", MAX_DESCRIPTION_CHARS))
        } else {
            None
        };

        self.amount_error = match self.amount.trim().parse::<f64>() {
            Err(_) if self.amount.trim().is_empty() => Some("Please enter an amount".to_string()),
            Err(_) => Some("Enter a number like 12.50".to_string()),
            Ok(v) if !(v.is_finite() && v > 0.0) => {
                Some("Amount must be more than zero".to_string())
            }
            Ok(_) => None,
        };

        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.description_error.is_none()
            && self.amount_error.is_none()
            && !self.description.trim().is_empty()
            && !self.amount.trim().is_empty()
    }
}

impl PocketLedgerApp {
    /// Render the add-entry form sheet
    pub fn render_entry_form_sheet(&mut self, ctx: &egui::Context) {
        let submit_clicked = Cell::new(false);
        let cancel_clicked = Cell::new(false);
        let form_valid = self.entry_form.is_valid();
        let title = match self.entry_form.kind {
            EntryKind::Income => "💰 Add income",
            EntryKind::Expense => "💸 Add expense",
        };

        let PocketLedgerApp {
            entry_form_sheet: sheet,
            show_entry_form: visible_flag,
            entry_form: form,
            ..
        } = self;

        // The wrapper owns the visible flag; the sheet just follows it.
        if *visible_flag && !sheet.is_visible() {
            sheet.open();
        } else if !*visible_flag && sheet.is_visible() && !sheet.is_closing() {
            sheet.close();
        }

        let response = BottomSheet::new("entry_form", sheet)
            .title(title)
            .footer(|ui| {
                ui.horizontal(|ui| {
                    let submit_color = if form_valid {
                        colors::INCOME
                    } else {
                        egui::Color32::from_rgb(180, 180, 180)
                    };
                    let submit_button = egui::Button::new(
                        egui::RichText::new("Save entry").color(colors::TEXT_WHITE),
                    )
                    .fill(submit_color)
                    .rounding(egui::Rounding::same(10.0))
                    .min_size(egui::vec2(130.0, 38.0));
                    let submit_response = ui.add(submit_button);
                    if submit_response.clicked() && form_valid {
                        submit_clicked.set(true);
                    }
                    if !form_valid {
                        submit_response.on_hover_text("Please fix the errors above to continue");
                    }

                    ui.add_space(12.0);

                    let cancel_button = egui::Button::new(
                        egui::RichText::new("Cancel").color(colors::TEXT_SECONDARY),
                    )
                    .fill(egui::Color32::from_rgb(245, 245, 245))
                    .stroke(egui::Stroke::new(1.5, egui::Color32::from_rgb(200, 200, 200)))
                    .rounding(egui::Rounding::same(10.0))
                    .min_size(egui::vec2(90.0, 38.0));
                    if ui.add(cancel_button).clicked() {
                        cancel_clicked.set(true);
                    }
                });
            })
            .show(ctx, |ui| {
                // Description label with a live character counter
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Description:").color(colors::TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let char_count = form.description.len();
                        let counter_color = if char_count > MAX_DESCRIPTION_CHARS {
                            colors::EXPENSE
                        } else if char_count > MAX_DESCRIPTION_CHARS - 10 {
                            egui::Color32::from_rgb(255, 165, 0)
                        } else {
                            colors::TEXT_SECONDARY
                        };
                        ui.label(
                            egui::RichText::new(format!(
                                "{}/{}",
                                char_count, MAX_DESCRIPTION_CHARS
                            ))
                            .small()
                            .color(counter_color),
                        );
                    });
                });
                ui.add_space(4.0);
                let description_response = ui.add(
                    egui::TextEdit::singleline(&mut form.description)
                        .hint_text("What was this for?")
                        .desired_width(f32::INFINITY),
                );
                if let Some(error) = &form.description_error {
                    ui.label(egui::RichText::new(error).small().color(colors::EXPENSE));
                }

                ui.add_space(10.0);

                ui.label(egui::RichText::new("Amount:").color(colors::TEXT_PRIMARY));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("$").color(colors::TEXT_PRIMARY));
                    let amount_response = ui.add(
                        egui::TextEdit::singleline(&mut form.amount)
                            .hint_text("0.00")
                            .desired_width(120.0),
                    );
                    if description_response.changed() || amount_response.changed() {
                        form.validate();
                    }
                });
                if let Some(error) = &form.amount_error {
                    ui.label(egui::RichText::new(error).small().color(colors::EXPENSE));
                }
            });

        if submit_clicked.get() {
            self.submit_entry();
        }
        if cancel_clicked.get() {
            self.entry_form.clear();
            self.show_entry_form = false;
        }
        if response.closed {
            self.show_entry_form = false;
        }
    }

    /// Validate and push the form into the ledger
    fn submit_entry(&mut self) {
        let today = chrono::Local::now().date_naive();
        match self.ledger.add_entry(
            today,
            &self.entry_form.description,
            &self.entry_form.amount,
            self.entry_form.kind,
        ) {
            Ok(entry) => {
                info!("✅ saved entry '{}'", entry.description);
                self.success_message = Some(format!("Saved \"{}\"", entry.description));
                self.entry_form.clear();
                self.show_entry_form = false;
            }
            Err(LedgerError::EmptyDescription) => {
                self.entry_form.description_error =
                    Some("Please enter a description".to_string());
            }
            Err(e @ (LedgerError::InvalidAmount(_) | LedgerError::NonPositiveAmount)) => {
                self.entry_form.amount_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_flags_both_fields() {
        let mut form = EntryFormState::default();
        assert!(!form.validate());
        assert!(form.description_error.is_some());
        assert!(form.amount_error.is_some());

        form.description = "Coffee".to_string();
        form.amount = "4.50".to_string();
        assert!(form.validate());
        assert!(form.description_error.is_none());
        assert!(form.amount_error.is_none());
    }

    #[test]
    fn validate_rejects_long_description_and_bad_amount() {
        let mut form = EntryFormState {
            description: "x".repeat(MAX_DESCRIPTION_CHARS + 1),
            amount: "zero".to_string(),
            ..Default::default()
        };
        assert!(!form.validate());
        assert!(form.description_error.is_some());
        assert!(form.amount_error.is_some());

        form.amount = "-2".to_string();
        form.validate();
        assert_eq!(
            form.amount_error.as_deref(),
            Some("Amount must be more than zero")
        );
    }

    #[test]
    fn clear_resets_fields_and_errors() {
        let mut form = EntryFormState {
            description: "Coffee".to_string(),
            amount: "bad".to_string(),
            ..Default::default()
        };
        form.validate();
        form.clear();
        assert!(form.description.is_empty());
        assert!(form.amount.is_empty());
        assert!(form.description_error.is_none());
        assert!(form.amount_error.is_none());
    }
}
