//! # Theme Configuration
//!
//! This module provides centralized color configuration for the pocket ledger app.
//! All visual styling should use these constants to ensure consistency and easy
//! theme management.
//!
//! ## Future Theming Support
//! The structure allows additional themes later. Currently it provides the
//! default "Mint" theme used by both light and compact layouts.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{Theme, CURRENT_THEME};
//!
//! let color = CURRENT_THEME.sheet.surface;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Bottom-sheet specific colors (backdrop, surface, handle)
    pub sheet: SheetColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Ledger list colors (income/expense chips, rows)
    pub ledger: LedgerColors,
}

/// Colors for the sliding bottom sheet
#[derive(Debug, Clone)]
pub struct SheetColors {
    /// Full-screen dimmed backdrop behind the sheet
    pub backdrop: Color32,
    /// Sheet surface fill
    pub surface: Color32,
    /// Drag handle bar
    pub handle: Color32,
    /// Border drawn along the sheet's top edge
    pub border: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Main window background
    pub window_background: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (less prominent)
    pub secondary: Color32,
    /// Heading text color
    pub heading: Color32,
    /// White text (for dark backgrounds)
    pub white: Color32,
}

/// Ledger list colors
#[derive(Debug, Clone)]
pub struct LedgerColors {
    /// Income amounts
    pub income: Color32,
    /// Expense amounts
    pub expense: Color32,
    /// Alternating row colors
    pub row_even: Color32,
    pub row_odd: Color32,
    /// Table header fill
    pub header: Color32,
}

/// The current active theme - "Mint" with teal accents
pub const CURRENT_THEME: Theme = Theme {
    sheet: SheetColors {
        // Semi-transparent black so the screen behind stays readable
        backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 110),
        surface: Color32::WHITE,
        handle: Color32::from_rgb(205, 210, 215),
        border: Color32::from_rgb(225, 228, 232),
    },
    layout: LayoutColors {
        window_background: Color32::from_rgb(244, 247, 249),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(222, 226, 230),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(45, 52, 60),
        secondary: Color32::from_rgb(115, 125, 135),
        heading: Color32::from_rgb(30, 40, 50),
        white: Color32::WHITE,
    },
    ledger: LedgerColors {
        income: Color32::from_rgb(36, 150, 90),
        expense: Color32::from_rgb(214, 60, 70),
        row_even: Color32::WHITE,
        row_odd: Color32::from_rgb(248, 250, 251),
        header: Color32::from_rgb(38, 166, 154),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Sheet colors - used by the bottom sheet component
    pub const SHEET_BACKDROP: Color32 = CURRENT_THEME.sheet.backdrop;
    pub const SHEET_SURFACE: Color32 = CURRENT_THEME.sheet.surface;
    pub const SHEET_HANDLE: Color32 = CURRENT_THEME.sheet.handle;
    pub const SHEET_BORDER: Color32 = CURRENT_THEME.sheet.border;

    // Typography colors
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    // Ledger colors
    pub const INCOME: Color32 = CURRENT_THEME.ledger.income;
    pub const EXPENSE: Color32 = CURRENT_THEME.ledger.expense;

    // Layout colors
    pub const WINDOW_BACKGROUND: Color32 = CURRENT_THEME.layout.window_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}
