//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the pocket ledger app.
//!
//! ## Key Types:
//! - `PocketLedgerApp` - Main application state struct
//!
//! ## Purpose:
//! Central state management for the entire application, containing:
//! - The in-memory ledger and the selected month
//! - UI state (success/error messages)
//! - One sheet controller + visible flag per bottom sheet, following the
//!   pattern where each wrapper observes its own flag and commands its
//!   controller
//! - Form input state for the add-entry sheet
//!
//! ## State Management:
//! The PocketLedgerApp struct holds all application state in a single
//! location, following the single source of truth principle.

use chrono::Datelike;
use log::{info, warn};

use crate::ledger::Ledger;
use crate::ui::components::bottom_sheet::SheetController;
use crate::ui::components::entry_form::EntryFormState;

/// Storage key for the persisted ledger JSON
pub const LEDGER_STORAGE_KEY: &str = "ledger";

/// Main application struct for the egui pocket ledger
pub struct PocketLedgerApp {
    // Application state
    pub ledger: Ledger,
    pub selected_month: u32,
    pub selected_year: i32,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Sheet states: each sheet is a controller plus the visible flag its
    // wrapper observes
    pub month_picker_sheet: SheetController,
    pub show_month_picker: bool,
    pub action_menu_sheet: SheetController,
    pub show_action_menu: bool,
    pub entry_form_sheet: SheetController,
    pub show_entry_form: bool,

    // Form states
    pub entry_form: EntryFormState,
}

impl PocketLedgerApp {
    /// Create a new PocketLedgerApp, restoring the ledger from storage if a
    /// previous session saved one
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing PocketLedgerApp");

        // Image loaders for the sheet media region
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let today = chrono::Local::now().date_naive();
        let ledger = match cc
            .storage
            .and_then(|storage| storage.get_string(LEDGER_STORAGE_KEY))
        {
            Some(json) => match serde_json::from_str(&json) {
                Ok(ledger) => {
                    info!("📖 restored ledger from storage");
                    ledger
                }
                Err(e) => {
                    warn!("⚠️ could not parse saved ledger ({}), starting fresh", e);
                    Ledger::with_sample_entries(today)
                }
            },
            None => {
                info!("📖 no saved ledger, seeding sample entries");
                Ledger::with_sample_entries(today)
            }
        };

        Ok(Self {
            ledger,
            selected_month: today.month(),
            selected_year: today.year(),

            error_message: None,
            success_message: None,

            month_picker_sheet: SheetController::new(),
            show_month_picker: false,
            action_menu_sheet: SheetController::new(),
            show_action_menu: false,
            entry_form_sheet: SheetController::new(),
            show_entry_form: false,

            entry_form: EntryFormState::default(),
        })
    }

    /// Clear success/error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}
