use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use neochron::app::action::Action;
use neochron::app::event::AppEvent;
use neochron::app::frame::FrameScheduler;
use neochron::app::handler;
use neochron::app::state::AppState;
use neochron::cli::Args;
use neochron::config::{self, KeyMap};
use neochron::stopwatch::SystemClock;
use neochron::{logging, ui};
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config before touching the terminal so errors print normally
    let mut cfg = config::load_config(args.config.as_deref())?;
    args.apply(&mut cfg);
    let keys = KeyMap::from_names(&cfg.keys).with_context(|| "Invalid key binding")?;
    logging::init(&cfg.logging, args.verbose)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, keys).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("neochron exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    keys: KeyMap,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let frame_rate = cfg.ui.clamped_frame_rate();
    let mut frames = FrameScheduler::new(event_tx.clone(), frame_rate);
    let mut state = AppState::new(&cfg, keys, Box::new(SystemClock::new()));
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);
    tracing::debug!(
        frame_rate,
        interval_ms = frames.interval().as_millis() as u64,
        "event loop starting"
    );

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        // Frames cancelled while already queued are dropped here
        if let AppEvent::Frame(id) = event {
            if !frames.accept(id) {
                continue;
            }
        }

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::RequestFrame => frames.request(),
                Action::CancelFrame => frames.cancel(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            frames.cancel();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
