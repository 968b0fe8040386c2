// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Report, Result, WrapErr};

use crate::{
    config::{
        consts::DEFAULT_SOURCE,
        options::{AppOptions, ScrapeOptions},
    },
    export,
    loader::{self, Source},
    progress::Progress,
    render,
    scrape,
    session::Session,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Search and export Brainport Eindhoven job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load jobs, filter them and print / export the result
    Search(SearchArgs),
    /// Download the current vacancies into a jobs file
    Scrape(ScrapeArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring; empty shows everything
    #[arg(default_value = "")]
    pub query: String,

    /// Jobs document: file path or http(s) URL
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Write `brainport_jobs_export_<date>.csv` into this folder
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Write the filtered rows as an HTML page
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Only print the status line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub out: PathBuf,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Pause between pages in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => search(args),
        Command::Scrape(args) => run_scrape(args),
    }
}

fn search(args: SearchArgs) -> Result<()> {
    let mut opts = AppOptions::default();
    opts.source = Source::parse(&args.source);
    if let Some(dir) = &args.export {
        opts.export.set_dir(&dir.to_string_lossy());
    }

    let doc = match loader::load(&opts.source) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("Load: Error loading jobs: {}", e);
            let msg = e.user_message();
            return Err(Report::new(e).wrap_err(msg));
        }
    };

    let mut session = Session::from_document(doc);
    session.search(&args.query);
    let status = session.status_line();
    println!("{}", status);

    if !args.quiet {
        for row in session.rows() {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                row.title, row.company, row.location, row.date, row.url
            );
        }
    }

    if args.export.is_some() {
        match export::write_export(&opts.export.out_dir, session.filtered(), export::today())? {
            Some(path) => println!("Wrote {}", path.display()),
            None => println!("Nothing to export"),
        }
    }

    if let Some(path) = &args.html {
        let page = render::render_page(session.filtered(), &status);
        fs::write(path, page).wrap_err_with(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: u32, jobs_in_page: usize, total_jobs: usize) {
        eprintln!("Downloaded page {page} ({jobs_in_page} jobs). Total: {total_jobs}");
    }
}

fn run_scrape(args: ScrapeArgs) -> Result<()> {
    let mut opts = ScrapeOptions {
        out_file: args.out,
        max_pages: args.max_pages,
        ..ScrapeOptions::default()
    };
    if let Some(ms) = args.pause_ms {
        opts.pause_ms = ms;
    }

    let summary = scrape::run(&opts, Some(&mut CliProgress))?;
    println!("Total jobs saved: {}", summary.jobs);
    println!("File saved as: {}", summary.path.display());
    Ok(())
}
