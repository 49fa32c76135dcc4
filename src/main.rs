mod app;
mod checker;
mod event;
mod ticker;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::app::{App, Command, Input, TICK_INTERVAL};
use crate::checker::HttpChecker;
use crate::event::{AppEvent, Key};

#[derive(Parser)]
#[command(name = "url-monitor", about = "Poll URLs and show which ones are up")]
struct Cli {
    /// Write diagnostic logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = start(&cli) {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn start(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    log::info!("url-monitor starting");

    let checker = HttpChecker::new()?;

    // ── Terminal setup ──────────────────────────────────────────
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err).context("failed to initialise terminal");
        }
    };

    // Panic hook: restore terminal before printing the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    // ── Run ─────────────────────────────────────────────────────
    let result = run(&mut terminal, &checker);

    // ── Terminal teardown ───────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    log::info!("url-monitor stopped");
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)
        .context("failed to install logger")?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    checker: &HttpChecker,
) -> Result<()> {
    let mut app = App::new();
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // ── Keyboard + resize thread ────────────────────────────────
    let key_tx = tx.clone();
    thread::spawn(move || loop {
        // Poll with a timeout so the thread notices when the loop is gone.
        match ct_event::poll(Duration::from_millis(100)) {
            Ok(true) => match ct_event::read() {
                Ok(Event::Key(key)) => {
                    if key_tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if key_tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    });

    // ── Ticker thread ───────────────────────────────────────────
    let ticker = ticker::spawn(TICK_INTERVAL, tx)?;
    if app.init() == Command::ScheduleTick {
        ticker.arm();
    }

    // ── Main event loop ─────────────────────────────────────────
    terminal.draw(|frame| ui::draw(frame, &app))?;

    while let Ok(event) = rx.recv() {
        let input = match event {
            AppEvent::Key(key) => Input::Key(Key::from(key)),
            AppEvent::Tick => {
                log::debug!("tick: checking {} url(s)", app.urls.len());
                Input::Tick
            }
            AppEvent::Resize => {
                terminal.draw(|frame| ui::draw(frame, &app))?;
                continue;
            }
        };

        match app.update(input, checker) {
            Some(Command::Quit) => break,
            Some(Command::ScheduleTick) => ticker.arm(),
            None => {}
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    Ok(())
}
