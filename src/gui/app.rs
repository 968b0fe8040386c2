// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex, PoisonError},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    loader::LoadError,
    model::JobsDocument,
    scrape::{ScrapeError, ScrapeSummary},
    session::Session,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Brainport Jobs",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, AppState::default())))),
    )?;
    Ok(())
}

pub type LoadResult = Result<JobsDocument, LoadError>;
pub type ScrapeResult = Result<ScrapeSummary, ScrapeError>;

pub struct App {
    // options + text fields (UI thread only)
    pub state: AppState,

    // loaded data; replaced wholesale by a finished load
    pub session: Session,

    // fixed message after a failed load; replaces the counts line
    pub load_error: Option<&'static str>,

    // action status (workers write here)
    pub status: Arc<Mutex<String>>,

    // background tasks: one result each, delivered to the UI thread
    pub load_rx: Option<Receiver<LoadResult>>,
    pub scrape_rx: Option<Receiver<ScrapeResult>>,
}

impl App {
    pub fn new(ctx: &egui::Context, mut state: AppState) -> Self {
        state.gui.out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();

        let mut app = Self {
            state,
            session: Session::empty(),
            load_error: None,
            status: Arc::new(Mutex::new("Idle".to_string())),
            load_rx: None,
            scrape_rx: None,
        };

        logf!("Init: source={}", app.state.options.source);
        actions::start_load(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[inline]
    pub fn loading(&self) -> bool { self.load_rx.is_some() }

    #[inline]
    pub fn scraping(&self) -> bool { self.scrape_rx.is_some() }

    #[inline]
    pub fn busy(&self) -> bool { self.loading() || self.scraping() }

    /// Counts line above the table.
    pub fn stats_text(&self) -> String {
        if let Some(msg) = self.load_error {
            msg.to_string()
        } else if self.loading() && self.session.full_len() == 0 {
            "Loading jobs…".to_string()
        } else {
            self.session.status_line()
        }
    }

    /// Re-run the current search box text against the full set.
    pub fn apply_search(&mut self) {
        let query = self.state.gui.query_text.clone();
        self.session.search(&query);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self, ctx);
        actions::poll_scrape(self, ctx);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            ui.label(self.stats_text());
            components::jobs_table::draw(ui, self);
        });
    }
}
