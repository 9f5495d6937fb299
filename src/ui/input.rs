// src/ui/input.rs
use eframe::egui;
use rfd::FileDialog;

use crate::file;
use crate::state::AppState;

pub fn draw_input_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.heading("Analyze Sentiment");
        ui.add_space(8.0);

        ui.add_sized(
            [ui.available_width(), 80.0],
            egui::TextEdit::multiline(&mut state.input_text)
                .hint_text("Enter your text here"),
        );

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("📂 Choose File…").clicked() {
                let file_dialog = FileDialog::new()
                    .add_filter("Text files", &["txt"])
                    .set_title("Open Text File");

                if let Some(path) = file_dialog.pick_file() {
                    match file::load_text_file(&path) {
                        Ok(loaded) => {
                            state.loaded_file = Some(loaded);
                        }
                        Err(e) => {
                            tracing::warn!("file load failed: {:#}", e);
                            state.error_message = Some(format!("{:#}", e));
                        }
                    }
                }
            }

            match &state.loaded_file {
                Some(file) => {
                    ui.label(&file.name);
                }
                None => {
                    ui.weak("No file loaded");
                }
            }
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Analyze Text").clicked() {
                state.analyze_input();
            }

            let analyze_file = ui.add_enabled(
                state.loaded_file.is_some(),
                egui::Button::new("Analyze File"),
            );
            if analyze_file.clicked() {
                state.analyze_file();
            }

            if ui.button("Clear").clicked() {
                state.clear();
            }
        });

        if let Some(message) = &state.status_message {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::YELLOW, message);
        }

        // Latest result inline
        if let Some(record) = state.session.records().last() {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Sentiment:");
                ui.strong(&record.label);
                ui.label(format!("Confidence: {:.2}", record.score));
            });
        }
    });
}
