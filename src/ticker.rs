use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::event::AppEvent;

/// Handle to the ticker thread.
///
/// Each call to [`Ticker::arm`] produces exactly one `AppEvent::Tick` after
/// the interval. Dropping the handle stops the thread.
pub struct Ticker {
    arm_tx: Sender<()>,
}

impl Ticker {
    /// Schedule the next tick.
    pub fn arm(&self) {
        // The thread only goes away once the event channel is closed,
        // at which point nobody is waiting for ticks anymore.
        let _ = self.arm_tx.send(());
    }
}

/// Start the ticker in its own thread. It stays idle until armed.
pub fn spawn(interval: Duration, tx: Sender<AppEvent>) -> Result<Ticker> {
    let (arm_tx, arm_rx) = mpsc::channel::<()>();

    thread::Builder::new()
        .name("ticker".into())
        .spawn(move || {
            while arm_rx.recv().is_ok() {
                thread::sleep(interval);
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        })
        .context("failed to start ticker thread")?;

    Ok(Ticker { arm_tx })
}
