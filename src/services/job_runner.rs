//! Background job runner service
//!
//! Runs a single request on a worker thread and delivers the result over an
//! mpsc channel, polled from the main loop's Tick. Network calls never block
//! the UI thread.

use crate::model::generation::{BackgroundJob, JobMessage};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

/// Job runner for one-shot background requests
pub struct JobRunner<T> {
    /// Current background job (if any)
    job: Option<BackgroundJob<T>>,
    /// Start instant of the most recent job, kept after completion for
    /// duration reporting until `clear` is called
    last_start: Option<Instant>,
}

impl<T: Send + 'static> Default for JobRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> JobRunner<T> {
    pub fn new() -> Self {
        Self {
            job: None,
            last_start: None,
        }
    }

    /// Whether a job is currently in flight
    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// Get the start instant of the current or most recent job
    pub fn start_instant(&self) -> Option<Instant> {
        self.job
            .as_ref()
            .map(|j| j.start_instant)
            .or(self.last_start)
    }

    /// Spawn a new background job
    ///
    /// Any job still tracked is dropped; callers gate on `is_running` so at
    /// most one request per runner is in flight.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: FnOnce() -> Result<T, String> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(JobMessage::Finished(task()));
        });

        let start_instant = Instant::now();
        self.last_start = Some(start_instant);
        self.job = Some(BackgroundJob {
            receiver: rx,
            start_instant,
        });
    }

    /// Poll for a finished job, returning its result if available
    ///
    /// Each result is delivered exactly once; the job is released when its
    /// result is taken, while `start_instant` stays available until `clear`.
    pub fn poll(&mut self) -> Option<Result<T, String>> {
        let job = self.job.as_ref()?;

        match job.receiver.try_recv() {
            Ok(JobMessage::Finished(result)) => {
                self.job = None;
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.job = None;
                Some(Err("Worker thread exited unexpectedly".to_string()))
            }
        }
    }

    /// Clear the current job and its start instant
    pub fn clear(&mut self) {
        self.job = None;
        self.last_start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_until<T: Send + 'static>(runner: &mut JobRunner<T>) -> Result<T, String> {
        for _ in 0..200 {
            if let Some(result) = runner.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("job did not finish in time");
    }

    #[test]
    fn test_spawn_and_poll_success() {
        let mut runner: JobRunner<String> = JobRunner::new();
        assert!(!runner.is_running());

        runner.spawn(|| Ok("done".to_string()));
        assert!(runner.is_running());

        let result = poll_until(&mut runner);
        assert_eq!(result, Ok("done".to_string()));
    }

    #[test]
    fn test_spawn_and_poll_failure() {
        let mut runner: JobRunner<Vec<String>> = JobRunner::new();
        runner.spawn(|| Err("boom".to_string()));

        let result = poll_until(&mut runner);
        assert_eq!(result, Err("boom".to_string()));
    }

    #[test]
    fn test_default_constructs_idle_runner() {
        let mut runner: JobRunner<String> = JobRunner::default();
        assert!(!runner.is_running());
        assert!(runner.start_instant().is_none());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_start_instant_survives_completion() {
        let mut runner: JobRunner<String> = JobRunner::new();
        assert!(runner.start_instant().is_none());

        runner.spawn(|| Ok("done".to_string()));
        poll_until(&mut runner);

        assert!(!runner.is_running());
        assert!(runner.start_instant().is_some());

        runner.clear();
        assert!(runner.start_instant().is_none());
    }

    #[test]
    fn test_clear_releases_job() {
        let mut runner: JobRunner<String> = JobRunner::new();
        runner.spawn(|| Ok(String::new()));
        runner.clear();
        assert!(!runner.is_running());
        assert!(runner.poll().is_none());
    }
}
