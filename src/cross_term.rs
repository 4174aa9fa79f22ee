use crossterm::event::Event;
use log::error;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn receive_cross_term_events(
    cancellation_token: CancellationToken,
) -> tokio::sync::mpsc::Receiver<Event> {
    let (sender, receiver) = tokio::sync::mpsc::channel(10);
    tokio::task::spawn_blocking(move || {
        while !cancellation_token.is_cancelled() {
            match crossterm::event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {:?}", e);
                    break;
                }
            }
            match crossterm::event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to read terminal event: {:?}", e);
                    break;
                }
            }
        }
    });
    receiver
}
