// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ctx: &egui::Context) {
    match app.session.export_csv() {
        Ok(Some(txt)) => {
            logf!("Copy: rows={}", app.session.filtered_len());
            ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Ok(None) => {
            logd!("Copy: Clicked, but there's nothing to copy");
            app.status("Nothing to copy");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
