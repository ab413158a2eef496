use eframe::egui;
use log::{error, info};

mod ledger;
mod ui;

use ui::app_state::PocketLedgerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Pocket Ledger egui application");

    // Phone-shaped window: the layout is designed for a narrow portrait app
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Pocket Ledger")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Pocket Ledger",
        options,
        Box::new(|cc| match PocketLedgerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Pocket Ledger app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
