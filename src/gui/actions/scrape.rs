// src/gui/actions/scrape.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    loader::Source,
    scrape,
};

/// Run the downloader on a worker thread; the GUI reloads from its output
/// file once it finishes.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.busy() {
        logd!("Scrape: busy, ignoring click");
        return;
    }

    let opts = app.state.options.scrape.clone();
    let status = app.status.clone();
    let (tx, rx) = mpsc::channel();
    let ctx2 = ctx.clone();

    logf!("Scrape: Begin out={}", opts.out_file.display());

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        // → This is where the scrape happens ←
        let res = scrape::run(&opts, Some(&mut prog));
        let _ = tx.send(res);
        ctx2.request_repaint();
    });

    app.scrape_rx = Some(rx);
}

pub fn poll_scrape(app: &mut App, ctx: &egui::Context) {
    let Some(rx) = app.scrape_rx.as_ref() else { return };

    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Scrape: worker ended without a result");
            app.scrape_rx = None;
            return;
        }
    };
    app.scrape_rx = None;

    match res {
        Ok(summary) => {
            logf!(
                "Scrape: OK pages={} jobs={} → {}",
                summary.pages,
                summary.jobs,
                summary.path.display()
            );
            app.state.options.source = Source::Path(summary.path);
            super::start_load(app, ctx);
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Scrape error: {e}"));
        }
    }
}
