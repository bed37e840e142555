//! Scope-bound scene timers.
//!
//! A [`DwellTimer`] owns a spawned tokio task that posts a [`TimerEvent`] to the
//! frame loop when it fires. Dropping the handle aborts the task, so a timer
//! cannot outlive the scene state that holds it. Events that were already
//! queued before the drop are filtered by their [`TimerToken`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::sequencer::ActivationId;

/// Smallest period accepted for repeating timers.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// What a timer means to the scene that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The scene is done; the sequencer should advance.
    Dwell,
    /// Pipeline: the active processing step finished.
    PipelineStep,
    /// Student: the displayed gesture should be cleared.
    GestureExpired,
    /// Student: the AI feed should show a new gesture.
    AiGesture,
}

/// Identity of a single armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    activation: ActivationId,
    serial: u64,
}

impl TimerToken {
    #[must_use]
    pub fn activation(self) -> ActivationId {
        self.activation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub token: TimerToken,
    pub cue: Cue,
}

/// Handle to an armed timer. Cancelled on drop.
#[derive(Debug)]
pub struct DwellTimer {
    token: TimerToken,
    cue: Cue,
    armed_at: Instant,
    delay: Duration,
    repeating: bool,
    task: JoinHandle<()>,
}

impl DwellTimer {
    #[must_use]
    pub fn token(&self) -> TimerToken {
        self.token
    }

    #[must_use]
    pub fn cue(&self) -> Cue {
        self.cue
    }

    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Whether `event` was produced by this timer.
    #[must_use]
    pub fn owns(&self, event: &TimerEvent) -> bool {
        self.token == event.token
    }

    /// Fraction of the first delay that has elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.delay.is_zero() {
            return 1.0;
        }
        let elapsed = self.armed_at.elapsed().as_secs_f32();
        (elapsed / self.delay.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Drop for DwellTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Arms timers on behalf of one scene activation.
///
/// Every timer armed through the scope carries the scope's activation id, so
/// the frame loop can discard events from a scene that is no longer current.
#[derive(Debug)]
pub struct TimerScope {
    tx: mpsc::UnboundedSender<TimerEvent>,
    activation: ActivationId,
    next_serial: u64,
}

impl TimerScope {
    pub(crate) fn new(tx: mpsc::UnboundedSender<TimerEvent>, activation: ActivationId) -> Self {
        Self {
            tx,
            activation,
            next_serial: 0,
        }
    }

    #[must_use]
    pub fn activation(&self) -> ActivationId {
        self.activation
    }

    fn next_token(&mut self) -> TimerToken {
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        TimerToken {
            activation: self.activation,
            serial,
        }
    }

    /// Fires `cue` once after `delay`.
    pub fn once(&mut self, cue: Cue, delay: Duration) -> DwellTimer {
        let token = self.next_token();
        let tx = self.tx.clone();
        let event = TimerEvent { token, cue };
        tracing::debug!(?cue, ?delay, activation = token.activation.get(), "Timer armed");

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });

        DwellTimer {
            token,
            cue,
            armed_at: Instant::now(),
            delay,
            repeating: false,
            task,
        }
    }

    /// Fires `cue` every `period`, first after one full period.
    pub fn every(&mut self, cue: Cue, period: Duration) -> DwellTimer {
        let period = period.max(MIN_PERIOD);
        let token = self.next_token();
        let tx = self.tx.clone();
        let event = TimerEvent { token, cue };
        tracing::debug!(?cue, ?period, activation = token.activation.get(), "Repeating timer armed");

        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        DwellTimer {
            token,
            cue,
            armed_at: Instant::now(),
            delay: period,
            repeating: true,
            task,
        }
    }
}
