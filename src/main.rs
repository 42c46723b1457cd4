use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod animation;
mod app;
mod cli;
mod config;
mod error;
mod event;
mod filter;
mod history;
mod i18n;
mod models;
mod ssh_service;
mod status;
mod text;
mod theme;
mod toast;
mod ui;

use animation::{spawn_ticker, SharedAnimations, FRAME_INTERVAL};
use app::App;
use cli::{Cli, Commands};
use config::{ConfigManager, ConfigStore};
use event::Tty;
use ssh_service::SshLauncher;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_file = init_logging(&log_dir, cli.verbose)?;
    info!("Starting hostmenu, logging to {:?}", log_file);

    let manager = ConfigManager::new(cli.config.clone()).context("Failed to initialize config manager")?;
    let mut config = manager.load().context("Failed to load config")?;
    cli.apply_overrides(&mut config.ui);
    info!("Config loaded from {:?}", manager.path());

    if let Some(Commands::List) = cli.command {
        for host in filter::all_hosts_sorted(&config.groups) {
            println!("{}\t{}", host.name, host.target());
        }
        return Ok(());
    }

    let animations = SharedAnimations::new();
    let ticker = spawn_ticker(animations.clone(), FRAME_INTERVAL);

    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;

    let mut app = App::new(
        config,
        Box::new(manager),
        Box::new(SshLauncher),
        animations,
    );
    let res = app.run(&mut terminal, &mut Tty);

    ticker.abort();
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = res {
        tracing::error!("Menu exited with error: {}", err);
        return Err(err).context("Display failure");
    }

    info!("hostmenu exited normally");
    Ok(())
}

fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hostmenu")
        .join("logs")
}

fn init_logging(log_dir: &Path, verbose: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_file = log_dir.join(format!(
        "hostmenu_{}.log",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = File::create(&log_file).context("Failed to create log file")?;

    let directive = if verbose { "hostmenu=debug" } else { "hostmenu=info" };
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_ansi(false)
        .with_writer(file)
        .init();

    Ok(log_file)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}
