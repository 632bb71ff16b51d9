use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use discovery_core::{update, AppState, Msg};
use discovery_logging::{discovery_debug, discovery_info};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::config::AppConfig;
use super::effects::{EffectRunner, Flow};
use super::{input, logging, ui};
use crate::Cli;

type Backend = CrosstermBackend<io::Stdout>;

pub fn run_app(cli: Cli) -> Result<()> {
    logging::initialize(&cli.log_file, cli.log_level);

    let config = AppConfig::resolve(&cli.config, cli.base_url.as_deref())?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config.engine_settings(), msg_tx.clone())
        .context("start engine")?;

    // Background tick ages notices.
    let tick_rate = config.tick_rate();
    thread::spawn(move || {
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    let state = AppState::with_demo_pipelines().with_notice_ticks(config.ui.notice_ticks);
    let mut terminal = TerminalGuard::enter()?;
    discovery_info!("dashboard started");
    let result = run_loop(&mut terminal.terminal, state, &msg_rx, &effects);
    drop(terminal);
    discovery_info!("dashboard stopped");
    result
}

fn run_loop(
    terminal: &mut Terminal<Backend>,
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    effects: &EffectRunner,
) -> Result<()> {
    terminal
        .draw(|f| ui::render::render(f, &state.view()))
        .context("draw")?;

    loop {
        let mut inbox: Vec<Msg> = msg_rx.try_iter().collect();

        // Poll input with a short timeout to avoid blocking the message drain.
        let mut resized = false;
        if event::poll(Duration::from_millis(10)).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if let Some(msg) = input::map_key(&state.view(), key, Local::now()) {
                        inbox.push(msg);
                    }
                }
                Event::Resize(..) => resized = true,
                _ => {}
            }
        }

        let mut flow = Flow::Continue;
        for msg in inbox {
            discovery_debug!("msg {:?}", msg);
            let (next, requested) = update(state, msg);
            state = next;
            if effects.enqueue(requested) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        if flow == Flow::Quit || state.is_quitting() {
            return Ok(());
        }

        if state.consume_dirty() || resized {
            let view = state.view();
            terminal
                .draw(|f| ui::render::render(f, &view))
                .context("draw")?;
        }
    }
}

/// Raw mode plus alternate screen for as long as the guard lives.
struct TerminalGuard {
    terminal: Terminal<Backend>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("enter alternate screen");
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
        terminal.clear().ok();
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
