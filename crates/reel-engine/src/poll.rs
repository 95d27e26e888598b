//! Polling state machine for submitted render jobs.
//!
//! One driver run owns one job: it reads the engine status on a fixed
//! cadence, folds each snapshot into the [`RenderJob`], and stops at the
//! first terminal state. Transient fetch errors keep the machine in
//! `Rendering` and are retried on the next tick; the job may well still be
//! progressing on the engine side. A wall-clock/attempt ceiling turns a
//! stuck job into `TimedOut` instead of polling forever.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

use reel_models::{RenderJob, RenderJobId};

use crate::client::RenderClient;

/// Polling cadence and ceiling.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Time between status reads
    pub interval: Duration,
    /// Wall-clock ceiling measured from the start of polling
    pub max_wait: Duration,
    /// Attempt-count ceiling
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(600),
            max_attempts: 120,
        }
    }
}

/// How a driver run ended.
#[derive(Debug)]
pub enum PollOutcome {
    /// The job reached a terminal state (`Succeeded`, `Failed`, or
    /// `TimedOut`)
    Finished(RenderJob),
    /// The caller cancelled; the job is returned as last observed,
    /// non-terminal, and no further requests were issued
    Cancelled(RenderJob),
}

impl PollOutcome {
    /// The job in its final observed state.
    pub fn job(&self) -> &RenderJob {
        match self {
            PollOutcome::Finished(job) | PollOutcome::Cancelled(job) => job,
        }
    }
}

/// Handle to a background driver run.
pub struct PollHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<PollOutcome>,
}

impl PollHandle {
    /// Stop the driver. No poll is scheduled after this returns; an
    /// in-flight status read is allowed to finish but its result is
    /// discarded without side effects.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Wait for the driver to finish or acknowledge cancellation.
    pub async fn wait(self) -> Result<PollOutcome, JoinError> {
        self.task.await
    }
}

/// Drives one submitted job to completion by polling the engine.
#[derive(Clone)]
pub struct PollDriver {
    client: RenderClient,
    config: PollConfig,
}

impl PollDriver {
    /// Create a driver over the given client.
    pub fn new(client: RenderClient, config: PollConfig) -> Self {
        Self { client, config }
    }

    /// Run the poll loop in a background task, returning a cancellable
    /// handle.
    pub fn spawn(&self, job_id: RenderJobId) -> PollHandle {
        let (cancel, cancel_rx) = watch::channel(false);
        let driver = self.clone();
        let task = tokio::spawn(async move { driver.run(job_id, cancel_rx).await });
        PollHandle { cancel, task }
    }

    /// Poll the engine until the job is terminal, the ceiling trips, or
    /// `cancel` flips to true.
    ///
    /// At most one status request is in flight at any time: each read is
    /// awaited before the next tick is considered.
    pub async fn run(&self, job_id: RenderJobId, mut cancel: watch::Receiver<bool>) -> PollOutcome {
        let mut job = RenderJob::submitted(job_id);
        let deadline = Instant::now() + self.config.max_wait;
        let mut attempts: u32 = 0;

        // First read happens one interval after submission; the engine
        // never finishes instantly.
        let mut ticker = interval_at(Instant::now() + self.config.interval, self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    // A dropped sender counts as abandonment too
                    if changed.is_err() || *cancel.borrow() {
                        info!(job_id = %job.id, "Polling cancelled");
                        return PollOutcome::Cancelled(job);
                    }
                }
                _ = ticker.tick() => {
                    if attempts >= self.config.max_attempts || Instant::now() >= deadline {
                        warn!(
                            job_id = %job.id,
                            attempts,
                            "Polling ceiling exceeded, marking job timed out"
                        );
                        job.time_out(format!(
                            "No terminal status from the engine after {} poll(s)",
                            attempts
                        ));
                        return PollOutcome::Finished(job);
                    }
                    attempts += 1;

                    match self.client.fetch_status(&job.id).await {
                        Ok(snapshot) => {
                            // A cancellation that arrived while the read was
                            // in flight wins; the snapshot is discarded
                            if *cancel.borrow() {
                                info!(job_id = %job.id, "Polling cancelled");
                                return PollOutcome::Cancelled(job);
                            }
                            job.apply_snapshot(&snapshot);
                            if job.is_terminal() {
                                info!(
                                    job_id = %job.id,
                                    state = %job.state,
                                    "Render job reached terminal state"
                                );
                                return PollOutcome::Finished(job);
                            }
                        }
                        Err(e) => {
                            // The job may still be progressing engine-side;
                            // retry on the next tick
                            warn!(
                                job_id = %job.id,
                                attempt = attempts,
                                "Status poll failed, retrying next tick: {}", e
                            );
                        }
                    }
                }
            }
        }
    }
}
