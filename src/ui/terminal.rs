//! Interactive terminal loop

use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{
    state::Session,
    utils::shutdown_signal,
};
use super::{
    input::{parse_input, UserInput, HELP},
    render::{disabled_notice, status_line},
};

/// Run the UI on stdin/stdout until quit, EOF or a shutdown signal
pub async fn run_terminal(session: &Session) -> std::io::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_loop(session, input, shutdown_signal()).await
}

/// Render on every display change and dispatch typed commands.
///
/// Disabled controls are refused here and never reach the service.
pub async fn run_loop<R, F>(session: &Session, input: R, shutdown: F) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut display_rx = session.subscribe();
    let mut lines = input.lines();
    tokio::pin!(shutdown);

    println!("{}", status_line(&display_rx.borrow_and_update()));
    println!("{}", HELP);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }

            changed = display_rx.changed() => {
                if changed.is_err() {
                    debug!("Display state channel closed");
                    break;
                }
                let state = display_rx.borrow_and_update().clone();
                println!("{}", status_line(&state));
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };

                match parse_input(&line) {
                    UserInput::Quit => break,
                    UserInput::Empty => {}
                    UserInput::Help => println!("{}", HELP),
                    UserInput::Unknown(word) => println!("unknown command '{}'; {}", word, HELP),
                    UserInput::Command(command) => {
                        let state = session.display_state();
                        if !state.controls().is_enabled(command) {
                            println!("{}", disabled_notice(command, &state));
                            continue;
                        }
                        // Failures are already logged and the next tick corrects the display
                        let _ = session.dispatch(command).await;
                    }
                }
            }
        }
    }

    Ok(())
}
