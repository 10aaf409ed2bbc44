use anyhow::Context;
use chat_widget::{
    api::ChatClient,
    config::{get_config, initialize_config},
    controller::{ChatWidget, ReplyReceiver},
    key_handlers::handle_terminal_event,
    logging::init_logger,
    ui, App,
};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event as CEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    initialize_config().context("Failed to load configuration")?;
    let config = get_config();
    let _logger = init_logger(&config).context("Failed to start logger")?;
    info!("Starting chat widget, endpoint {}", config.endpoint);

    let client = ChatClient::from_config(&config)?;
    let (widget, replies) = ChatWidget::mount(client);
    let app = App::new(widget);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, replies).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Exiting on error: {:?}", err);
    }
    info!("Chat widget stopped");

    res
}

/// Main loop. Terminal input and request completions are both handled
/// here, so widget state is only ever touched from this task.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut replies: ReplyReceiver,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(event) => handle_terminal_event(event, &mut app),
                Event::Tick => app.on_tick(),
            },
            Some(reply) = replies.recv() => app.widget.complete(reply),
            else => break,
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
