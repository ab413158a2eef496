//! # UI Components Module
//!
//! This module organizes all UI components for the pocket ledger application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `bottom_sheet` - The sliding bottom-sheet panel (controller + widget)
//! - `theme` - Centralized color configuration
//! - `styling` - Global style setup and drawing helpers
//! - `header` - App header with balance and month navigation
//! - `transaction_list` - Monthly entry table rendering
//! - `month_picker` - Month picker sheet wrapper
//! - `action_menu` - Add-entry action menu sheet wrapper
//! - `entry_form` - Add-entry form sheet, state and validation
//!
//! ## Architecture:
//! The bottom sheet is the one component with real interactive state; the
//! pickers, menus and forms are thin wrappers that supply content to it and
//! observe their own visible flags.

pub mod action_menu;
pub mod bottom_sheet;
pub mod entry_form;
pub mod header;
pub mod month_picker;
pub mod styling;
pub mod theme;
pub mod transaction_list;

pub use bottom_sheet::{BottomSheet, SheetController};
pub use theme::*;
