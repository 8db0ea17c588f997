//! Main application logic

use anyhow::{Context, Result};
use chrono::Duration;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crate::Monitor;
use crate::cache::FreshnessCache;
use crate::client::{FetchResult, UptimeRobotClient};
use crate::config::Config;
use crate::service::MonitorService;

use super::{
    actions,
    state::{AppState, NoticeKind},
    ui,
};

/// Main TUI application
pub struct App {
    config: Config,
    api_key: String,
    state: AppState,
    service: Arc<MonitorService>,
    fetch_tx: mpsc::UnboundedSender<FetchResult<Vec<Monitor>>>,
    fetch_rx: mpsc::UnboundedReceiver<FetchResult<Vec<Monitor>>>,
    /// Cancelled on quit so an in-flight pagination stops between pages
    cancel: CancellationToken,
    /// The in-flight fetch was requested by the user
    manual_refresh: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let api_key = config.resolved_api_key().context(
            "No API key configured. Set `api_key` in the config file, pass --api-key, or export UPWATCH_API_KEY.",
        )?;

        let client = UptimeRobotClient::new(&config.api_url);
        let cache = FreshnessCache::in_memory(Duration::seconds(config.cache_seconds as i64));
        let service = Arc::new(MonitorService::new(Arc::new(client), cache));

        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: AppState::new(config.show_all),
            config,
            api_key,
            service,
            fetch_tx,
            fetch_rx,
            cancel: CancellationToken::new(),
            manual_refresh: false,
        })
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // First load
        self.start_fetch(self.config.force_refresh, false);

        // Run event loop
        let result = self.run_event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop
    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            // Render UI
            terminal.draw(|f| ui::render(f, &self.state))?;

            // Handle finished fetches (non-blocking)
            while let Ok(outcome) = self.fetch_rx.try_recv() {
                self.handle_fetch_outcome(outcome);
            }

            // Handle keyboard events (with timeout)
            if event::poll(std::time::Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code)?
            {
                break; // Quit
            }

            self.state.expire_notice();
        }

        // Abort any fetch still in flight
        self.cancel.cancel();

        Ok(())
    }

    /// Kick off a background fetch unless one is already running
    fn start_fetch(&mut self, force_refresh: bool, manual: bool) {
        if self.state.is_loading {
            return;
        }

        self.state.is_loading = true;
        self.manual_refresh = manual;

        let service = Arc::clone(&self.service);
        let api_key = self.api_key.clone();
        let cancel = self.cancel.clone();
        let tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            let outcome = service.get(&api_key, force_refresh, &cancel).await;
            let _ = tx.send(outcome);
        });
    }

    /// Apply a finished fetch to the state
    fn handle_fetch_outcome(&mut self, outcome: FetchResult<Vec<Monitor>>) {
        self.state.is_loading = false;
        let manual = std::mem::take(&mut self.manual_refresh);

        match outcome {
            Ok(monitors) => {
                let count = monitors.len();
                self.state.set_monitors(monitors);
                if manual {
                    self.state
                        .notify(NoticeKind::Info, format!("Loaded {count} monitors"));
                }
            }
            Err(err) => {
                error!("monitor fetch failed: {err}");
                self.state.set_error(err.to_string());
                self.state
                    .notify(NoticeKind::Error, format!("Failed to load monitors: {err}"));
            }
        }
    }

    /// Handle keyboard event, returning true to quit
    fn handle_key_event(&mut self, code: KeyCode) -> Result<bool> {
        if self.state.searching {
            match code {
                KeyCode::Esc => {
                    self.state.searching = false;
                    self.state.clear_query();
                }
                KeyCode::Enter => {
                    self.state.searching = false;
                }
                KeyCode::Backspace => {
                    self.state.pop_query_char();
                }
                KeyCode::Char(c) => {
                    self.state.push_query_char(c);
                }
                _ => {}
            }

            return Ok(false);
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Ok(true); // Quit
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous();
            }
            KeyCode::Char('/') => {
                self.state.searching = true;
            }
            KeyCode::Char('a') => {
                self.state.toggle_show_all();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.start_fetch(true, true);
            }
            KeyCode::Char('o') => {
                self.open_dashboard();
            }
            KeyCode::Char('u') => {
                self.open_monitor_url();
            }
            KeyCode::Char('c') => {
                self.copy_details();
            }
            _ => {}
        }

        Ok(false)
    }

    /// Open the selected monitor's dashboard page (or the dashboard root)
    fn open_dashboard(&mut self) {
        let url = match self.state.selected_monitor() {
            Some(monitor) => actions::dashboard_url(monitor),
            None => actions::DASHBOARD_URL.to_string(),
        };

        self.open_url(&url);
    }

    /// Open the selected monitor's own URL
    fn open_monitor_url(&mut self) {
        if let Some(monitor) = self.state.selected_monitor() {
            let url = monitor.url.clone();
            self.open_url(&url);
        }
    }

    fn open_url(&mut self, url: &str) {
        match actions::open_in_browser(url) {
            Ok(()) => {
                self.state.notify(NoticeKind::Info, format!("Opened {url}"));
            }
            Err(err) => {
                warn!("failed to open {url}: {err:#}");
                self.state
                    .notify(NoticeKind::Error, format!("Could not open browser: {err}"));
            }
        }
    }

    /// Copy the selected monitor's details block to the clipboard
    fn copy_details(&mut self) {
        let Some(monitor) = self.state.selected_monitor() else {
            return;
        };
        let details = actions::format_monitor_details(monitor);

        match actions::copy_to_clipboard(&details) {
            Ok(()) => {
                self.state.notify(NoticeKind::Info, "Monitor details copied");
            }
            Err(err) => {
                warn!("clipboard copy failed: {err:#}");
                self.state
                    .notify(NoticeKind::Error, format!("Could not copy: {err}"));
            }
        }
    }
}
