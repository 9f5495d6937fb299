// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::export;
use crate::state::AppState;
use crate::ui;

pub struct SentiscopeApp {
    state: AppState,
}

impl SentiscopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let can_export = !self.state.session.is_empty();
                if ui
                    .add_enabled(can_export, egui::Button::new("Export CSV…"))
                    .clicked()
                {
                    self.export_csv();
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn export_csv(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("sentiment_results.csv")
            .set_title("Export Results");

        if let Some(path) = file_dialog.save_file() {
            match export::write_csv(&self.state.session, &path) {
                Ok(_) => {
                    tracing::info!(
                        "exported {} records to {}",
                        self.state.session.len(),
                        path.display()
                    );
                }
                Err(e) => {
                    self.state.error_message = Some(format!("Error exporting results: {:#}", e));
                }
            }
        }
    }
}

impl eframe::App for SentiscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::input::draw_input_view(ui, &mut self.state);
                ui.add_space(16.0);
                ui::chart::draw_distribution_view(ui, &self.state);
                ui.add_space(16.0);
                ui::results::draw_results_view(ui, &self.state);
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
