mod cli;
mod export;
mod repl;
mod setup;

use std::io::{self, Write};

use sawit_ai::ChatSession;
use sawit_common::SawitError;
use sawit_config::SawitConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::Command;

fn init_logging(raw: &str) {
    let directive: Directive = raw.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {raw:?} ({e}), using info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Open the store and restore the session for the selected page.
fn open_session(config: &SawitConfig, args: &cli::Args) -> ChatSession {
    let page = setup::resolve_page(args.page.as_deref(), config);
    let session = setup::build_session(config, page, setup::open_store_or_memory(config));
    session.initialize();
    session
}

#[tokio::main]
async fn main() -> Result<(), SawitError> {
    let args = cli::parse();

    // Logging is set up after loading so `[logging] level` can apply.
    let loaded = sawit_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "sawit=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Sawit v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = SawitConfig::default();
        sawit_config::apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        config
    });

    if let Err(e) = sawit_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let session = open_session(&config, &args);
    let mut stdout = io::stdout();

    match args.command.clone().unwrap_or(Command::Chat) {
        Command::Chat => {
            if !config.api.is_configured() {
                tracing::warn!(
                    "no API key configured; set api.api_key or {}",
                    sawit_config::API_KEY_ENV_VARS.join("/")
                );
            }
            let client = setup::build_client(&config)?;
            let mut input = repl::Readline::new()
                .map_err(|e| SawitError::Other(format!("cannot open terminal: {e}")))?;
            repl::run(&session, &client, &mut input, &mut stdout).await?;
        }
        Command::Reset => {
            session.reset();
            repl::write_display_log(&mut stdout, &session.display_log())?;
        }
        Command::Export { output } => {
            let html = export::render_html(
                &session.display_log(),
                session.page(),
                chrono::Utc::now(),
            );
            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!("chat exported to {}", path.display());
                }
                None => stdout.write_all(html.as_bytes())?,
            }
        }
        Command::Show => {
            repl::write_display_log(&mut stdout, &session.display_log())?;
        }
    }

    stdout.flush()?;
    tracing::info!("Shutdown complete");
    Ok(())
}
