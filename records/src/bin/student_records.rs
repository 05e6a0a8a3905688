//! Interactive student record manager.
//!
//! Keeps up to `--capacity` students (default 100) in memory for the length
//! of the session.

use anyhow::{Context, Result};
use clap::Parser;
use console::args::SessionArgs;
use console::menu::run_stdio;
use console::{exit_codes, logging};
use records::core::student::Roster;
use records::shell::StudentMenu;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "student-records",
    version,
    about = "Add, search, update, delete and rank student records"
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Maximum number of students (overrides `records.capacity`).
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let mut cfg = cli.session.load_config().context("load config")?;
    if let Some(capacity) = cli.capacity {
        cfg.records.capacity = capacity;
        cfg.validate()?;
    }
    info!(capacity = cfg.records.capacity, "starting student records");

    let mut menu = StudentMenu::new(Roster::with_capacity(cfg.records.capacity));
    let exit = run_stdio(&mut menu, cli.session.loop_options(&cfg)).context("student menu")?;
    info!(?exit, students = menu.roster().len(), "session ended");
    Ok(())
}
