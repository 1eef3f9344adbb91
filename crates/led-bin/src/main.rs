//! ledit entrypoint.

use anyhow::Result;
use clap::Parser;
use core_actions::io_ops;
use core_config::{Config, load_from};
use core_state::EditorState;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod cipher;
mod menu;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "ledit", version, about = "Line-oriented text editor")]
struct Args {
    /// Optional path to open at startup. If omitted the buffer starts empty.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `ledit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, config: &Config) -> Result<()> {
        let log_path = config
            .file
            .log
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from("ledit.log"));
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }
        let dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = log_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "ledit.log".into());

        let file_appender = tracing_appender::rolling::never(dir, name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_from(args.config.clone())?;

    let mut startup = AppStartup::new();
    startup.configure_logging(&config)?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let mut state = EditorState::new()?;
    if let Some(path) = args.path.as_ref() {
        match io_ops::load_file(&mut state, path) {
            io_ops::LoadFileResult::Success { rows } => {
                info!(target: "runtime.startup", file = %path.display(), rows, "opened_at_startup");
            }
            io_ops::LoadFileResult::Error => {
                error!(target: "runtime.startup", file = %path.display(), "open_failed");
                println!("Error opening file");
            }
        }
    }
    info!(
        target: "runtime.startup",
        cipher_shift = config.file.cipher.shift,
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    menu::run_loop(&mut state, &config)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}
