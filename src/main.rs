//! Line-driven shell around the AuraWalls library.
//!
//! Reads one command per line from stdin, turns it into an [`Event`], runs it
//! through [`handle_event`] and executes the returned [`Action`]s. The screen
//! is re-rendered as plain text whenever the controller asks for it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ stdin task   │   │ timer tasks  │   │ catalog load │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │ Event            │ TimerElapsed     │ CatalogLoaded / CatalogUnavailable
//!        └──────────────────┼──────────────────┘
//!                           ▼
//!                  mpsc channel → Shell::run (one event at a time)
//! ```
//!
//! Everything runs on a current-thread tokio runtime; the controller state is
//! only touched from the main loop.
//!
//! # Commands
//!
//! - `skip` or an empty line: leave the splash screen
//! - `mood <name>`, `category <name>`: browse from Home
//! - `search [query]`: search from Home or List (empty query lists everything)
//! - `open <id>`: show details
//! - `back`, `theme`, `retry`, `quit`
//! - `fav <id>`: toggle a favorite
//! - `preview home|lock`, `download`, `apply`: on the details screen
//!
//! # Arguments
//!
//! `--config <FILE>` reads a TOML file; every other flag overrides one field
//! of it. See `aurawalls --help`.

#![allow(clippy::multiple_crate_versions)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use aurawalls::app::TimerHandle;
use aurawalls::catalog::{self, CatalogSource, JsonFileSource};
use aurawalls::infrastructure::STORE_FILE_NAME;
use aurawalls::storage::{Favorites, JsonFileStore, KeyValueStore, MemoryStore};
use aurawalls::{handle_event, Action, AppState, AuraError, Config, Event, PreviewMode};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;

const HELP: &str = "commands: skip | mood <name> | category <name> | search [query] | open <id> | \
back | fav <id> | theme | preview home|lock | download | apply | retry | quit";

/// Browse a wallpaper catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "aurawalls")]
#[command(version)]
#[command(about = "Browse a wallpaper catalog from the terminal")]
struct Cli {
    /// TOML configuration file; the flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file holding the catalog array
    #[arg(long, value_name = "FILE")]
    catalog_path: Option<String>,

    /// Directory for favorites and the log file
    #[arg(long, value_name = "DIR")]
    data_dir: Option<String>,

    /// Splash screen duration in milliseconds
    #[arg(long, value_name = "MS")]
    splash_delay_ms: Option<u64>,

    /// Maximum wallpapers on the home feed
    #[arg(long, value_name = "N")]
    featured_limit: Option<usize>,

    /// Catalog load timeout in milliseconds
    #[arg(long, value_name = "MS")]
    load_timeout_ms: Option<u64>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Cli {
    /// Reads the config file if one was given, then applies the flags.
    fn into_config(self) -> aurawalls::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let path = aurawalls::infrastructure::expand_tilde(&path.to_string_lossy());
                Config::from_file(&PathBuf::from(path))?
            }
            None => Config::default(),
        };

        if let Some(path) = self.catalog_path {
            config.catalog_path = Some(path);
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }
        if let Some(level) = self.trace_level {
            config.trace_level = Some(level);
        }
        if let Some(ms) = self.splash_delay_ms {
            config.splash_delay_ms = ms;
        }
        if let Some(limit) = self.featured_limit {
            config.featured_limit = limit;
        }
        if let Some(ms) = self.load_timeout_ms {
            config.load_timeout_ms = ms;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("aurawalls: {e}");
            return ExitCode::from(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("aurawalls: cannot start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(run(config));
    // stdin is read on a blocking thread that never returns on its own.
    runtime.shutdown_timeout(Duration::from_millis(100));
    code
}

async fn run(config: Config) -> ExitCode {
    aurawalls::observability::init_tracing(&config);

    let span = tracing::debug_span!("shell_start");
    let guard = span.enter();
    tracing::debug!(config = ?config, "parsed configuration");

    let store = open_store(config.data_dir().join(STORE_FILE_NAME));
    let favorites = Favorites::load(store.as_ref());
    let (state, actions) = aurawalls::initialize(&config, favorites);
    let source: Arc<dyn CatalogSource> = Arc::new(JsonFileSource::new(config.catalog_path()));
    drop(guard);

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(read_commands(tx.clone()));

    let mut shell = Shell {
        app: state,
        store,
        source,
        load_timeout: config.load_timeout(),
        timers: HashMap::new(),
        tx,
    };
    shell.run(actions, rx).await;

    tracing::info!("session ended");
    ExitCode::SUCCESS
}

/// Opens the favorites store, falling back to memory so the session still runs.
fn open_store(path: PathBuf) -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "cannot open store, favorites will not persist");
            eprintln!("warning: {e}; favorites will not be saved");
            Box::new(MemoryStore::default())
        }
    }
}

async fn read_commands(tx: UnboundedSender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };

        match map_command(&line) {
            Ok(Some(event)) => {
                if tx.send(event).is_err() {
                    return;
                }
            }
            Ok(None) => println!("{HELP}"),
            Err(e) => println!("{e}"),
        }
    }
    let _ = tx.send(Event::Quit);
}

/// Translates one input line into an event.
///
/// `Ok(None)` asks for the help text; `Err` carries a message for the user.
fn map_command(line: &str) -> Result<Option<Event>, String> {
    let line = line.trim();
    let (command, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, a)| (c, a.trim()));

    let require = |what: &str| {
        if arg.is_empty() {
            Err(format!("{command}: missing {what}"))
        } else {
            Ok(arg.to_string())
        }
    };

    let event = match command.to_lowercase().as_str() {
        "" | "skip" => Event::SkipSplash,
        "mood" => Event::SelectMood(arg.parse().map_err(|e: AuraError| e.to_string())?),
        "category" | "cat" => Event::SelectCategory(arg.parse().map_err(|e: AuraError| e.to_string())?),
        "search" | "/" => Event::SubmitSearch(arg.to_string()),
        "open" => Event::SelectItem(require("wallpaper id")?),
        "back" | "b" => Event::Back,
        "fav" => Event::ToggleFavorite(require("wallpaper id")?),
        "theme" => Event::ToggleTheme,
        "preview" => match arg.to_lowercase().as_str() {
            "home" => Event::SetPreviewMode(PreviewMode::HomeScreen),
            "lock" => Event::SetPreviewMode(PreviewMode::LockScreen),
            _ => return Err("preview: expected 'home' or 'lock'".to_string()),
        },
        "download" => Event::Download,
        "apply" => Event::Apply,
        "retry" => Event::RetryLoad,
        "quit" | "q" | "exit" => Event::Quit,
        _ => return Ok(None),
    };
    Ok(Some(event))
}

/// Runtime that owns the controller state and executes its actions.
struct Shell {
    app: AppState,
    store: Box<dyn KeyValueStore>,
    source: Arc<dyn CatalogSource>,
    load_timeout: Duration,
    timers: HashMap<TimerHandle, JoinHandle<()>>,
    tx: UnboundedSender<Event>,
}

impl Shell {
    async fn run(&mut self, startup: Vec<Action>, mut rx: mpsc::UnboundedReceiver<Event>) {
        self.render();
        for action in startup {
            self.execute_action(action);
        }

        while let Some(event) = rx.recv().await {
            let span = tracing::debug_span!("shell_event");
            let _guard = span.enter();

            if let Event::TimerElapsed(handle) = &event {
                self.timers.remove(handle);
            }

            match handle_event(&mut self.app, &event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    let mut quit = false;
                    for action in actions {
                        quit |= self.execute_action(action);
                    }
                    if quit {
                        break;
                    }
                    if should_render {
                        self.render();
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    println!("error: {e}");
                }
            }
        }

        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }

    /// Executes one action. Returns `true` when the session should end.
    fn execute_action(&mut self, action: Action) -> bool {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::LoadCatalog => self.spawn_load(),
            Action::ScheduleTimer { handle, delay } => {
                let tx = self.tx.clone();
                let task = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Event::TimerElapsed(handle));
                });
                if let Some(previous) = self.timers.insert(handle, task) {
                    previous.abort();
                }
            }
            Action::CancelTimer(handle) => {
                if let Some(task) = self.timers.remove(&handle) {
                    task.abort();
                }
            }
            Action::PersistFavorites(ids) => {
                if let Err(e) = Favorites::from_ids(ids).save(self.store.as_mut()) {
                    tracing::warn!(error = %e, "failed to persist favorites");
                    println!("warning: favorites not saved ({e})");
                }
            }
            Action::Download {
                id,
                image_url,
                file_name,
            } => {
                tracing::info!(id = %id, "download requested");
                println!("Downloading \"{file_name}\" from {image_url}");
            }
            Action::ApplyWallpaper {
                id,
                image_url,
                target,
            } => {
                tracing::info!(id = %id, target = ?target, "apply requested");
                println!("Applying {image_url} to {}", target.label());
            }
            Action::Quit => return true,
        }
        false
    }

    fn spawn_load(&self) {
        let source = Arc::clone(&self.source);
        let timeout = self.load_timeout;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let event = match catalog::load_with_timeout(&*source, timeout).await {
                Ok(records) => Event::CatalogLoaded(records),
                Err(AuraError::DataUnavailable(reason)) => Event::CatalogUnavailable(reason),
                Err(e) => Event::CatalogUnavailable(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    fn render(&self) {
        let view = aurawalls::ui::compute_view(&self.app);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let result = writeln!(out)
            .and_then(|()| aurawalls::ui::render_text(&view, &mut out))
            .and_then(|()| out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "render failed");
        }
    }
}
