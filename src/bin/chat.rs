//! Tigris Chat terminal client
//!
//! Talks to `tigris-server` at `TIGRIS_SERVER_URL`.

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tigris_chat::client::QuestionClient;
use tigris_chat::config::ClientConfig;
use tigris_chat::ui::{ChatApp, Control};

/// Redraw / reveal cadence
const TICK: Duration = Duration::from_millis(30);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();
    let client = QuestionClient::new(&config.server_url);
    let mut app = ChatApp::new(Arc::new(client));

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut ChatApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(TICK)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.on_key(key) == Control::Quit {
                    return Ok(());
                }
            }
        }

        app.poll_replies();
        let now = Instant::now();
        app.on_tick(now.duration_since(last_tick));
        last_tick = now;
    }
}
