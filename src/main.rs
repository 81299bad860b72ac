use carbonboard::adapters::{HttpRecordSource, ReqwestHttpClient};
use carbonboard::app::App;
use carbonboard::cli::{fetch_plain, parse_args, run_cli_command, usage};
use carbonboard::logging::{setup_logging, LogTarget};
use carbonboard::startup::LeaderboardConfig;
use carbonboard::terminal::{setup_panic_hook, TerminalManager};
use carbonboard::traits::RecordSource;
use carbonboard::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;

/// Exit code for usage and configuration errors.
const EXIT_USAGE: i32 = 2;

fn main() -> Result<()> {
    // Handle --version/--help before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, usage());
            std::process::exit(EXIT_USAGE);
        }
    };
    let options = run_cli_command(command);

    color_eyre::install()?;

    let config = match LeaderboardConfig::from_env(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.user_message());
            std::process::exit(EXIT_USAGE);
        }
    };

    setup_logging(if config.print_only {
        LogTarget::Stderr
    } else {
        LogTarget::File
    })?;
    tracing::info!("carbonboard {} starting: {:?}", carbonboard::cli::VERSION, config);

    let runtime = tokio::runtime::Runtime::new()?;

    let client = ReqwestHttpClient::with_timeout(config.request_timeout())
        .map_err(|e| eyre!("failed to build HTTP client: {}", e))?;
    let source: Arc<dyn RecordSource> = Arc::new(
        HttpRecordSource::new(Arc::new(client), config.server_url.clone())
            .with_timeout_secs(config.request_timeout_secs),
    );

    if config.print_only {
        return match runtime.block_on(fetch_plain(&config, source.as_ref())) {
            Ok(text) => {
                print!("{}", text);
                Ok(())
            }
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("error: {} ({})", e.user_message(), e.recovery_hint());
                std::process::exit(1);
            }
        };
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut app = App::new(config, source);
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore();
    tracing::info!("carbonboard exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    app.refresh();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
