use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use review_header::app::HeaderApp;
use review_header::kernel::services::adapters::{
    ensure_settings_file, load_settings, AsyncRuntime, FileAccountService, StaticAccountService,
};
use review_header::kernel::services::ports::{AccountService, Settings};
use review_header::kernel::Action;
use review_header::tui::{
    exit_status, install_termination_signals, map_key_event, HeaderTheme, HeaderWidget,
    InputOutcome, TerminalGuard, TerminationSignal,
};

mod logging;

const FRAME_POLL: Duration = Duration::from_millis(50);

/// Code-review page header in the terminal.
#[derive(Parser)]
#[command(name = "review-header")]
#[command(version)]
#[command(about = "Code-review page header with search box and account status", long_about = None)]
struct Cli {
    /// Account document to resolve the signed-in user from (JSON, optional `)]}'` prefix)
    #[arg(short, long)]
    account: Option<PathBuf>,

    /// Treat the session as anonymous
    #[arg(long, conflicts_with = "account")]
    anonymous: bool,

    /// Initial search query
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let log_guard = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let accounts = account_service(&cli, &settings);
    let runtime = Arc::new(AsyncRuntime::new()?);
    let mut app = HeaderApp::new(runtime, accounts);

    app.state_mut()
        .search_query_property_mut()
        .subscribe(|query: &String| tracing::debug!(query = %query, "search query changed"));
    if let Some(query) = cli.query {
        app.dispatch(Action::SetSearchQuery(query));
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    install_termination_signals(guard.restorer(), signal_tx)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let theme = HeaderTheme::from_settings(&settings.theme);

    app.on_mount();
    let result = run_loop(&mut terminal, &mut app, &settings, theme, &signal_rx);
    app.on_unmount();

    drop(guard);
    let signal = result?;
    let code = exit_status(signal);
    if code != 0 {
        tracing::info!(?signal, exit_code = code, "exiting on signal");
        drop(log_guard);
        std::process::exit(code);
    }
    Ok(())
}

fn account_service(cli: &Cli, settings: &Settings) -> Arc<dyn AccountService> {
    if cli.anonymous {
        return Arc::new(StaticAccountService::anonymous());
    }
    match cli.account.clone().or_else(|| settings.account_file.clone()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "using account document");
            Arc::new(FileAccountService::new(path))
        }
        None => {
            tracing::info!("no account source configured, running anonymously");
            Arc::new(StaticAccountService::anonymous())
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut HeaderApp,
    settings: &Settings,
    theme: HeaderTheme,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        dirty |= app.poll_kernel_bus();

        if dirty {
            let status = app
                .last_submitted_search()
                .map(|q| format!("last search: {q}"));
            terminal.draw(|frame| {
                let area = frame.area();
                let header_area = Rect::new(area.x, area.y, area.width, area.height.min(2));
                let widget = HeaderWidget::new(app.state(), &settings.title)
                    .theme(theme)
                    .status(status.as_deref());
                frame.render_widget(widget, header_area);
            })?;
            dirty = false;
        }

        if !event::poll(FRAME_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match map_key_event(key) {
                InputOutcome::Quit => return Ok(None),
                InputOutcome::Action(action) => {
                    app.dispatch(action);
                    dirty = true;
                }
                InputOutcome::Ignored => {}
            },
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }
}
