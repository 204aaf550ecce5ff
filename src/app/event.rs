//! Event plumbing — input events and animation ticks on one channel.
//!
//! The fades and slide clips advance on `Tick`, so the tick stream comes
//! from a steady `tokio` interval at the animation cadence rather than from
//! an input-poll timeout: ticks keep their spacing even while wheel or drag
//! events are streaming in. Terminal input is read on a blocking thread,
//! since crossterm's poll/read block.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

/// How long the input thread waits per poll before checking for shutdown.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns the tick clock and the terminal input reader, both feeding the
/// returned channel. Both sources stop once the receiver is dropped.
pub fn spawn_event_sources(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    // Animation clock. A skipped tick is just a dropped frame — the
    // timelines interpolate against wall-clock time, so no catch-up burst.
    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut ticker = time::interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break; // receiver dropped
            }
        }
    });

    // Input reader.
    tokio::task::spawn_blocking(move || loop {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => {
                let Ok(ev) = event::read() else { continue };
                let app_event = match ev {
                    CtEvent::Key(k) => AppEvent::Key(k),
                    CtEvent::Mouse(m) => AppEvent::Mouse(m),
                    CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                if tx.send(app_event).is_err() {
                    break;
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            // No terminal attached — back off instead of spinning.
            Err(_) => std::thread::sleep(INPUT_POLL_TIMEOUT),
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ticks_flow_at_the_animation_cadence() {
        let mut rx = spawn_event_sources(Duration::from_millis(10));

        // No terminal is attached here, so the only traffic is the tick
        // clock — and it must keep delivering.
        for _ in 0..3 {
            let event = tokio::time::timeout(Duration::from_millis(500), rx.recv())
                .await
                .expect("tick within the timeout")
                .expect("channel open");
            assert!(matches!(event, AppEvent::Tick));
        }
    }
}
