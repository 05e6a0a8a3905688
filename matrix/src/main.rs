//! Interactive matrix arithmetic tool.

use anyhow::{Context, Result};
use clap::Parser;
use console::args::SessionArgs;
use console::menu::run_stdio;
use console::{exit_codes, logging};
use matrix::shell::MatrixMenu;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "matrix-ops",
    version,
    about = "Add, subtract, multiply, transpose and symmetry-check integer matrices"
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Largest accepted row or column count (overrides `matrix.max_dim`).
    #[arg(long)]
    max_dim: Option<usize>,
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
    if let Some(max_dim) = cli.max_dim {
        cfg.matrix.max_dim = max_dim;
        cfg.validate()?;
    }
    info!(max_dim = cfg.matrix.max_dim, "starting matrix operations");

    let mut menu = MatrixMenu::new(cfg.matrix.max_dim);
    let exit = run_stdio(&mut menu, cli.session.loop_options(&cfg)).context("matrix menu")?;
    info!(?exit, "session ended");
    Ok(())
}
