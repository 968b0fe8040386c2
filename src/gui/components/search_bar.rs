// src/gui/components/search_bar.rs
use eframe::egui;
use crate::{config::consts::UNKNOWN_TIMESTAMP, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Brainport Jobs");
        ui.separator();

        // Filter on every edit; no debounce.
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query_text)
                .hint_text("Search title, company, location, description…")
                .desired_width(360.0),
        );
        if resp.changed() {
            app.apply_search();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let updated = app.session.last_updated().unwrap_or(UNKNOWN_TIMESTAMP);
            ui.weak(format!("Updated: {}", updated));
        });
    });
}
