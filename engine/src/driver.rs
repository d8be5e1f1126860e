//! Fixed-cadence tick source for the session engines.
//!
//! The engines have no clock. A [`TickDriver`] runs a tokio interval in a
//! background task and queues one tick per elapsed period; the frame loop
//! drains the queue and feeds the ticks to the engine synchronously, so all
//! state mutation stays on the UI task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

/// One engine tick per second of wall time.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const TICK_CHANNEL_CAPACITY: usize = 64; // bounded: a stalled UI backpressures the timer

#[derive(Debug)]
struct Armed {
    rx: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

/// Arm/disarm handle around a background interval.
///
/// At most one interval is live per driver. Dropping the driver disarms it,
/// so no exit path leaves a timer running without an owner.
#[derive(Debug)]
pub struct TickDriver {
    name: &'static str,
    period: Duration,
    armed: Option<Armed>,
}

impl TickDriver {
    #[must_use]
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            armed: None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Start ticking. The first tick arrives one full period from now.
    ///
    /// Re-arming an armed driver restarts the period. Must be called from
    /// within a tokio runtime.
    pub fn arm(&mut self) {
        self.disarm();

        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let period = self.period;
        let task = tokio::spawn(async move {
            // Default burst behavior: every elapsed period is delivered even
            // if the loop falls behind.
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        debug!(driver = self.name, ?period, "Tick driver armed");
        self.armed = Some(Armed { rx, task });
    }

    pub fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.task.abort();
            debug!(driver = self.name, "Tick driver disarmed");
        }
    }

    /// Number of ticks that elapsed since the last drain.
    pub fn drain(&mut self) -> usize {
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        let mut ticks = 0;
        while armed.rx.try_recv().is_ok() {
            ticks += 1;
        }
        ticks
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.disarm();
    }
}
