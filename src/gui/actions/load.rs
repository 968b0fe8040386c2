// src/gui/actions/load.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{gui::app::App, loader, session::Session};

/// Kick off the one-shot load on a worker thread.
pub fn start_load(app: &mut App, ctx: &egui::Context) {
    if app.loading() {
        logd!("Load: already running, ignoring");
        return;
    }

    let source = app.state.options.source.clone();
    let (tx, rx) = mpsc::channel();
    let ctx2 = ctx.clone();

    app.load_error = None;
    app.status(format!("Loading {}…", source));

    thread::spawn(move || {
        let res = loader::load(&source);
        // Receiver gone means the window closed; nothing to report to.
        let _ = tx.send(res);
        ctx2.request_repaint();
    });

    app.load_rx = Some(rx);
}

/// Apply a finished load, if any. Runs on the UI thread once per frame.
pub fn poll_load(app: &mut App, _ctx: &egui::Context) {
    let Some(rx) = app.load_rx.as_ref() else { return };

    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Load: worker ended without a result");
            app.load_rx = None;
            return;
        }
    };
    app.load_rx = None;

    match res {
        Ok(doc) => {
            app.session = Session::from_document(doc);
            app.apply_search();
            logf!(
                "Load: OK jobs={}, shown={}",
                app.session.full_len(),
                app.session.filtered_len()
            );
            app.status("Ready");
        }
        Err(e) => {
            loge!("Load: Error loading jobs: {}", e);
            app.session = Session::empty();
            app.load_error = Some(e.user_message());
            app.status(format!("Error: {e}"));
        }
    }
}
