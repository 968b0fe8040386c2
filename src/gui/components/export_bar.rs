// src/gui/components/export_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output folder ---
    ui.horizontal(|ui| {
        ui.label("Output folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }
    });

    // --- Actions (Copy / Export / Scrape) ---
    ui.horizontal(|ui| {
        let has_rows = app.session.filtered_len() > 0;

        if ui.add_enabled(has_rows, egui::Button::new("Copy"))
            .on_hover_text("Copy the filtered jobs as CSV")
            .clicked()
        {
            actions::copy(app, ui.ctx());
        }

        if ui.add_enabled(has_rows, egui::Button::new("Export CSV"))
            .on_hover_text("Write the filtered jobs to the output folder")
            .clicked()
        {
            actions::export(app);
        }

        let button_scrape = ui.add_enabled(
            !app.busy(),
            egui::Button::new(egui::RichText::new("Scrape").strong()),
        )
        .on_hover_text("Download fresh jobs from brainporteindhoven.com");
        if button_scrape.clicked() {
            actions::scrape(app, ui.ctx());
        }

        if app.busy() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
