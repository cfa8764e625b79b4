//! Real-time tone playback.
//!
//! [`spawn_playback`] runs a schedule on a Tokio task, handing each tone to a
//! [`ToneSink`] when its start offset is reached. The returned
//! [`PlaybackHandle`] can cancel pending tones at any point; a tone already
//! delivered to the sink is not recalled.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::error::{AudioError, AudioResult};
use crate::tone::Tone;

/// Receives tones as they become due.
pub trait ToneSink: Send + 'static {
    fn play(&mut self, tone: &Tone);
}

impl<F> ToneSink for F
where
    F: FnMut(&Tone) + Send + 'static,
{
    fn play(&mut self, tone: &Tone) {
        self(tone)
    }
}

/// Outcome of a playback run.
#[derive(Debug)]
pub struct PlaybackReport<S> {
    /// Tones delivered to the sink.
    pub played: usize,
    /// Whether playback stopped early because it was cancelled.
    pub cancelled: bool,
    /// The sink, handed back to the caller.
    pub sink: S,
}

/// Cloneable cancel trigger for a playback task.
#[derive(Debug, Clone)]
pub struct Canceller(Arc<Notify>);

impl Canceller {
    /// Stops delivery of any tone not yet played. Idempotent.
    pub fn cancel(&self) {
        self.0.notify_one();
    }
}

/// Handle to a running playback task.
///
/// Dropping the handle detaches the task; it keeps playing to the end.
pub struct PlaybackHandle<S> {
    task: JoinHandle<PlaybackReport<S>>,
    canceller: Canceller,
}

impl<S: ToneSink> PlaybackHandle<S> {
    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }

    pub fn cancel(&self) {
        self.canceller.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for playback to finish or be cancelled.
    pub async fn wait(self) -> AudioResult<PlaybackReport<S>> {
        self.task.await.map_err(|e| AudioError::Playback {
            message: e.to_string(),
        })
    }
}

/// Starts playing `schedule` into `sink`.
///
/// Must be called from within a Tokio runtime with the time driver enabled.
pub fn spawn_playback<S: ToneSink>(schedule: Vec<Tone>, mut sink: S) -> PlaybackHandle<S> {
    let notify = Arc::new(Notify::new());
    let canceller = Canceller(Arc::clone(&notify));

    let task = tokio::spawn(async move {
        let origin = Instant::now();
        let mut played = 0;

        for tone in &schedule {
            let due = origin + Duration::from_millis(tone.start_ms);
            tokio::select! {
                biased;
                _ = notify.notified() => {
                    return PlaybackReport { played, cancelled: true, sink };
                }
                _ = sleep_until(due) => {}
            }
            sink.play(tone);
            played += 1;
        }

        PlaybackReport {
            played,
            cancelled: false,
            sink,
        }
    });

    PlaybackHandle { task, canceller }
}
