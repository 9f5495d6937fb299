// src/main.rs
use eframe::egui;
use anyhow::Result;

mod app;
mod classifier;
mod export;
mod file;
mod state;
mod ui;

use app::SentiscopeApp;
use classifier::{BertClassifier, Classifier};
use state::AppState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load the pretrained model once; the app still runs without it and
    // reports the model as unavailable on analyze.
    let classifier: Option<Box<dyn Classifier>> = match BertClassifier::load() {
        Ok(model) => Some(Box::new(model)),
        Err(e) => {
            tracing::warn!("running without sentiment model: {:#}", e);
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_title("Sentiscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiscope",
        options,
        Box::new(|_cc| Box::new(SentiscopeApp::new(AppState::new(classifier)))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
