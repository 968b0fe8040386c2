// src/gui/components/jobs_table.rs
//
// Draws the live table from the session's filtered view. Purely a view.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::EXPORT_HEADERS, gui::app::App, render::JobRow};

const ROW_H: f32 = 20.0;

fn clipped_cell(ui: &mut egui::Ui, text: &str) {
    let resp = ui.add(egui::Label::new(text).truncate());
    if !text.is_empty() {
        resp.on_hover_text(text);
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let session = &app.session;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(240.0).at_least(60.0).clip(true)) // Title
        .column(Column::initial(160.0).at_least(60.0).clip(true)) // Company
        .column(Column::initial(130.0).at_least(60.0).clip(true)) // Location
        .column(Column::initial(360.0).at_least(80.0).clip(true)) // Description
        .column(Column::initial(90.0).at_least(60.0))             // Date
        .column(Column::remainder().at_least(40.0))               // Link
        .min_scrolled_height(0.0)
        .header(24.0, |mut header| {
            // Title..Date; the link column has no heading
            for h in &EXPORT_HEADERS[..5] {
                header.col(|ui| { ui.label(RichText::new(*h).strong()); });
            }
            header.col(|_| {});
        })
        .body(|body| {
            body.rows(ROW_H, session.filtered_len(), |mut row| {
                let Some(job) = session.filtered_at(row.index()) else { return };
                let r = JobRow::from_record(job);

                row.col(|ui| clipped_cell(ui, r.title));
                row.col(|ui| clipped_cell(ui, r.company));
                row.col(|ui| clipped_cell(ui, r.location));
                row.col(|ui| clipped_cell(ui, r.description));
                row.col(|ui| { ui.label(r.date); });
                row.col(|ui| {
                    if r.has_link() {
                        ui.hyperlink_to("View", r.url).on_hover_text(r.url);
                    } else {
                        ui.add_enabled(false, egui::Link::new("View"));
                    }
                });
            });
        });
}
