use anyhow::Result;
use tui_dict_app::config::{AppConfig, LoggingConfig};
use tui_dict_app::internal::ui::app::App;
use tui_dict_app::tui;

/// RUST_LOG wins when set; otherwise the filter is assembled from the
/// config's base level plus any per-module overrides.
fn build_env_filter(logging: &LoggingConfig) -> tracing_subscriber::EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::EnvFilter::from_default_env(),
        Err(_) => {
            let mut directives = logging.level.clone();
            for (module, level) in &logging.module_levels {
                directives.push_str(&format!(",{module}={level}"));
            }
            tracing_subscriber::EnvFilter::new(directives)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load();

    // Where tracing writes depends on whether the TUI owns the terminal.
    // With the alternate screen up, stderr output would corrupt the UI, so
    // logs go to a daily-rotating file; if the terminal cannot be set up
    // at all, fall back to console logging so the failure is visible.
    match tui::init() {
        Ok(terminal) => {
            let log_dir = config.logging.log_directory.as_deref().unwrap_or("logs");
            let file_appender = tracing_appender::rolling::daily(log_dir, "tui-dict-app.log");
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(build_env_filter(&config.logging))
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact()
                .init();

            let mut app = App::new();
            let res = app.run(terminal).await;

            // Leave the terminal usable even when the run loop errored.
            tui::restore()?;

            if let Err(err) = res {
                // The log file has the full trace; echo a short form for
                // anyone running the binary from a shell.
                eprintln!("{err:?}");
            }

            Ok(())
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();

            eprintln!("Failed to initialize terminal: {e:?}");
            Err(e.into())
        }
    }
}
