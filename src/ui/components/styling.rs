//! # Styling Module
//!
//! This module contains the global styling setup and small drawing helpers for
//! the pocket ledger app.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `card_frame()` - Card-style container frame with a border
//!
//! ## Purpose:
//! Keeps styling concerns in one place so screens and the bottom sheet stay
//! visually consistent. All colors come from the theme module.

use eframe::egui;
use crate::ui::components::theme::colors;

/// Setup the app-wide visual style
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::WINDOW_BACKGROUND;
        style.visuals.button_frame = true;

        // Text edits need a visible background against the light window fill.
        // In egui 0.28 they use extreme_bg_color.
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        // Slightly larger text for a phone-sized window
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style
    });
}

/// Card-style container frame used by the list sections
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(6.0))
}
