use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::infrastructure::catalog::CatalogSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

/// How long suggestions stay up after the input blurs, so a click that
/// caused the blur can still select before the list disappears.
pub const SUGGESTION_HIDE_GRACE: Duration = Duration::from_millis(200);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Arc<dyn CatalogSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Arc<dyn CatalogSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Initial load: the catalog arrives as an action like everything else.
    handle_command(Command::LoadCatalog, source.clone(), action_tx.clone());

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Deferred / async results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, source.clone(), action_tx.clone());
            }
        }
    }

    Ok(())
}

/// Executes a side effect on a background task, reporting back through the
/// action channel. Nothing here touches the state.
pub(crate) fn handle_command(
    command: Command,
    source: Arc<dyn CatalogSource>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::LoadCatalog => {
            tokio::spawn(async move {
                let result = source.load().await.map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::CatalogLoaded(result)).await;
            });
        }
        Command::ScheduleSuggestionHide(ticket) => {
            tokio::spawn(async move {
                tokio::time::sleep(SUGGESTION_HIDE_GRACE).await;
                let _ = tx.send(Action::SuggestionHideElapsed(ticket)).await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
