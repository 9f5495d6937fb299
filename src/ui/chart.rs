// src/ui/chart.rs
use eframe::egui;

use crate::state::AppState;

fn label_color(label: &str) -> egui::Color32 {
    match label {
        "POSITIVE" => egui::Color32::from_rgb(100, 200, 100),
        "NEGATIVE" => egui::Color32::from_rgb(200, 100, 100),
        _ => egui::Color32::from_rgb(230, 160, 60),
    }
}

pub fn draw_distribution_view(ui: &mut egui::Ui, state: &AppState) {
    ui.group(|ui| {
        ui.heading("Sentiment Distribution");

        if state.session.is_empty() {
            ui.weak("The chart appears after the first analysis.");
            return;
        }

        let histogram = state.session.histogram();

        let plot = egui_plot::Plot::new("sentiment_distribution")
            .height(200.0)
            .allow_zoom(false)
            .allow_drag(false)
            .show_background(false)
            .show_axes([false, true])
            .include_y(0.0)
            .legend(egui_plot::Legend::default());

        plot.show(ui, |plot_ui| {
            // One chart per label so the legend carries the label names
            for (i, (label, count)) in histogram.iter().enumerate() {
                let bar = egui_plot::Bar::new(i as f64, *count as f64)
                    .width(0.5)
                    .fill(label_color(label));

                plot_ui.bar_chart(
                    egui_plot::BarChart::new(vec![bar])
                        .name(label)
                        .color(label_color(label)),
                );
            }
        });

        ui.horizontal(|ui| {
            for (label, count) in &histogram {
                ui.label(format!("{}: {}", label, count));
            }
        });
    });
}
