use std::sync::Arc;

use quiz_core::model::QuizMode;
use services::QuizController;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use ui::{QuizIntent, ScreenVm, map_screen, parse_intent, render_screen};

use crate::bell::BellFeedback;

const CLEAR: &str = "\x1b[2J\x1b[H";

async fn draw(out: &mut tokio::io::Stdout, screen: &ScreenVm) -> std::io::Result<()> {
    out.write_all(CLEAR.as_bytes()).await?;
    out.write_all(render_screen(screen).as_bytes()).await?;
    out.flush().await
}

fn spawn_start(controller: &QuizController, mode: QuizMode) {
    let controller = controller.clone();
    tokio::spawn(async move {
        controller.request_start(mode).await;
    });
}

/// Read intents from stdin and redraw on every published snapshot until the user quits
/// or stdin closes.
pub async fn run(
    controller: QuizController,
    bell: Arc<BellFeedback>,
    autostart: Option<QuizMode>,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();
    let mut updates = controller.subscribe();

    let mut screen = map_screen(&updates.borrow_and_update());
    draw(&mut out, &screen).await?;

    if let Some(mode) = autostart {
        spawn_start(&controller, mode);
    }

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let next = map_screen(&updates.borrow_and_update());
                if next != screen {
                    screen = next;
                    draw(&mut out, &screen).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_intent(&line, &screen) {
                    Some(QuizIntent::Quit) => break,
                    Some(QuizIntent::Start(mode)) => spawn_start(&controller, mode),
                    Some(QuizIntent::Choose(option)) => {
                        controller.select_option(&option).await;
                    }
                    Some(QuizIntent::Restart) => {
                        controller.request_restart().await;
                    }
                    Some(QuizIntent::ToggleMute) => {
                        let muted = bell.toggle_mute();
                        tracing::info!(muted, "sound toggled");
                        let note = if muted { "Sound muted.\n" } else { "Sound on.\n" };
                        out.write_all(note.as_bytes()).await?;
                        out.flush().await?;
                    }
                    None => tracing::debug!(input = line.trim(), "ignoring input"),
                }
            }
        }
    }

    Ok(())
}
