//! Background task completion handles.
//!
//! # Responsibility
//! - Run one unit of work on a named worker thread.
//! - Let the caller poll or block until the work itself finishes.
//!
//! # Invariants
//! - A handle yields its value at most once.
//! - A panicking worker surfaces as `TaskError::Panicked`, never as a hang.

use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug)]
pub enum TaskError {
    /// Worker thread could not be started.
    Spawn {
        label: &'static str,
        source: std::io::Error,
    },
    /// Worker panicked before producing a value.
    Panicked(&'static str),
    /// Value was already taken from this handle.
    AlreadyTaken(&'static str),
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { label, source } => write!(f, "failed to start task `{label}`: {source}"),
            Self::Panicked(label) => write!(f, "task `{label}` panicked"),
            Self::AlreadyTaken(label) => write!(f, "task `{label}` result already taken"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Channel-backed handle to work running on a worker thread.
pub struct TaskHandle<T> {
    label: &'static str,
    receiver: Receiver<T>,
    worker: Option<JoinHandle<()>>,
    taken: bool,
}

/// Starts `work` on a new thread named after `label`.
pub fn spawn_task<T, F>(label: &'static str, work: F) -> TaskResult<TaskHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let worker = thread::Builder::new()
        .name(format!("evidex-{label}"))
        .spawn(move || {
            // Receiver may be gone if the caller dropped the handle.
            let _ = sender.send(work());
        })
        .map_err(|source| TaskError::Spawn { label, source })?;

    debug!("event=task_spawned module=task status=ok label={label}");
    Ok(TaskHandle {
        label,
        receiver,
        worker: Some(worker),
        taken: false,
    })
}

impl<T> TaskHandle<T> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the value if the work has finished, `None` while it runs.
    pub fn poll(&mut self) -> TaskResult<Option<T>> {
        if self.taken {
            return Err(TaskError::AlreadyTaken(self.label));
        }
        match self.receiver.try_recv() {
            Ok(value) => {
                self.taken = true;
                self.join_worker();
                Ok(Some(value))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(self.panicked()),
        }
    }

    /// Blocks until the work finishes.
    pub fn wait(mut self) -> TaskResult<T> {
        if self.taken {
            return Err(TaskError::AlreadyTaken(self.label));
        }
        match self.receiver.recv() {
            Ok(value) => {
                self.taken = true;
                self.join_worker();
                Ok(value)
            }
            Err(_) => Err(self.panicked()),
        }
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    fn panicked(&mut self) -> TaskError {
        self.join_worker();
        error!(
            "event=task_failed module=task status=error label={} reason=panicked",
            self.label
        );
        TaskError::Panicked(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::{spawn_task, TaskError};
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn wait_returns_worker_value() {
        let handle = spawn_task("sum", || (1..=10).sum::<u32>()).unwrap();
        assert_eq!(handle.wait().unwrap(), 55);
    }

    #[test]
    fn poll_is_none_until_work_completes() {
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let mut handle = spawn_task("gated", move || {
            release_rx.recv().unwrap();
            "done"
        })
        .unwrap();

        assert!(handle.poll().unwrap().is_none());
        release_tx.send(()).unwrap();

        let mut value = None;
        for _ in 0..200 {
            if let Some(done) = handle.poll().unwrap() {
                value = Some(done);
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(value, Some("done"));
        assert!(matches!(handle.poll(), Err(TaskError::AlreadyTaken("gated"))));
    }

    #[test]
    fn panicking_worker_reports_error() {
        let handle = spawn_task("boom", || -> u32 { panic!("worker failure") }).unwrap();
        assert!(matches!(handle.wait(), Err(TaskError::Panicked("boom"))));
    }
}
