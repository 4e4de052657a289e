//! survey-tui - a survey form in the terminal
//!
//! This is the main entry point for the survey-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    // Load config, writing the defaults on first run
    let config = match Config::load() {
        Some(config) => config,
        None => {
            let config = Config::default();
            if let Err(err) = config.save() {
                eprintln!("Warning: could not save default config: {:#}", err);
            }
            config
        }
    };

    if let Err(err) = logging::initialize(&config) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(config);
    tracing::info!("survey-tui started");

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "survey-tui exited with an error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("survey-tui exited");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "dispatch");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
