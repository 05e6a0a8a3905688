//! Interactive library catalog manager.

use anyhow::{Context, Result};
use clap::Parser;
use console::args::SessionArgs;
use console::menu::run_stdio;
use console::{exit_codes, logging};
use records::core::book::Catalog;
use records::shell::LibraryMenu;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "library-catalog",
    version,
    about = "Add, search, issue, return and remove library books"
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Maximum number of books (overrides `records.capacity`).
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
    info!(capacity = cfg.records.capacity, "starting library catalog");

    let mut menu = LibraryMenu::new(Catalog::with_capacity(cfg.records.capacity));
    let exit = run_stdio(&mut menu, cli.session.loop_options(&cfg)).context("library menu")?;
    info!(?exit, books = menu.catalog().len(), "session ended");
    Ok(())
}
