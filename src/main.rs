use std::panic;

use tokio::sync::mpsc;

use planetfall::app::{AIMessage, Action, App};
use planetfall::tui::{Tui, TuiEvent};
use planetfall::{logging, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    log::info!("Planetfall start: {}", chrono::Local::now());

    // Restore the terminal before the panic message prints, or it is lost to
    // the alternate screen.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        default_hook(panic_info);
    }));

    // Channel for results coming back from gateway tasks.
    let (ai_sender, ai_receiver) = mpsc::unbounded_channel::<AIMessage>();

    let (app, action_receiver) = App::new(ai_sender).await;

    run(app, action_receiver, ai_receiver).await?;

    Ok(())
}

async fn run(
    mut app: App,
    mut action_receiver: mpsc::UnboundedReceiver<Action>,
    mut ai_receiver: mpsc::UnboundedReceiver<AIMessage>,
) -> anyhow::Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    loop {
        tui.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            Some(event) = tui.next() => {
                match event {
                    TuiEvent::Key(key) => app.on_key(key),
                    TuiEvent::Paste(text) => {
                        // Bracketed paste lands in whichever input has focus.
                        match &app.screen {
                            planetfall::screen::Screen::Chat { .. } => app.chat_input.insert_str(&text),
                            planetfall::screen::Screen::ApiKeyInput => app.api_key_input.insert_str(&text),
                            _ => {}
                        }
                    }
                    TuiEvent::Error => log::error!("terminal event stream error"),
                    _ => {}
                }
            }
            Some(action) = action_receiver.recv() => {
                app.handle_action(action).await;
            }
            Some(message) = ai_receiver.recv() => {
                app.handle_ai_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tui.exit();
    Ok(())
}
