// src/ui/results.rs
use eframe::egui;

use crate::state::AppState;

pub fn draw_results_view(ui: &mut egui::Ui, state: &AppState) {
    ui.group(|ui| {
        ui.heading("Detailed Results");
        ui.add_space(8.0);

        if state.session.is_empty() {
            ui.weak("No analyses yet this session.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("results_scroll")
            .max_height(240.0)
            .show(ui, |ui| {
                // Newest first
                for record in state.session.records().iter().rev() {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());

                        ui.horizontal(|ui| {
                            ui.strong(&record.label);
                            ui.label(format!("Confidence: {:.2}", record.score));
                            ui.weak(record.analyzed_at.format("%H:%M:%S").to_string());
                        });
                        ui.label(&record.text);
                    });
                }
            });
    });
}
