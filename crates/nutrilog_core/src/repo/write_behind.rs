//! Background persister applying snapshot writes off the caller's thread.
//!
//! # Responsibility
//! - Apply enqueued whole-collection writes in order on a worker thread.
//! - Keep mutation paths free of storage latency and storage errors.
//!
//! # Invariants
//! - Payloads are serialized at enqueue time, so racing writes for one
//!   key converge to last-write-wins in enqueue order.
//! - Write failures are logged and dropped; a later snapshot of the same
//!   key supersedes them.
//! - `flush` returns only after every previously enqueued write was
//!   attempted.

use crate::repo::snapshot_repo::SnapshotRepository;
use crossbeam_channel::{unbounded, Sender};
use log::{debug, error, warn};
use serde::Serialize;
use std::sync::Arc;
use std::thread::JoinHandle;

enum Job {
    Write {
        key: &'static str,
        payload: Vec<u8>,
    },
    Flush(Sender<()>),
    Shutdown,
}

/// Handle to the write-behind worker thread.
///
/// Dropping the handle drains the queue and joins the worker.
pub struct SnapshotWriter {
    tx: Sender<Job>,
    worker: Option<JoinHandle<()>>,
}

impl SnapshotWriter {
    /// Spawns the worker thread over the shared repository handle.
    pub fn spawn(repo: Arc<dyn SnapshotRepository>) -> Self {
        let (tx, rx) = unbounded::<Job>();
        let worker = std::thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                match job {
                    Job::Write { key, payload } => match repo.save_blob(key, &payload) {
                        Ok(()) => {
                            debug!(
                                "event=snapshot_persist module=repo status=ok key={key} bytes={}",
                                payload.len()
                            );
                        }
                        Err(err) => {
                            error!(
                                "event=snapshot_persist module=repo status=error key={key} error={err}"
                            );
                        }
                    },
                    Job::Flush(ack) => {
                        let _ = ack.send(());
                    }
                    Job::Shutdown => break,
                }
            }
        });

        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Serializes the collection now and enqueues the write.
    ///
    /// Serialization or queueing failures are logged and swallowed; the
    /// caller's in-memory state stays authoritative either way.
    pub fn enqueue_collection<T>(&self, key: &'static str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        let payload = match serde_json::to_vec(value) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=snapshot_persist module=repo status=encode_error key={key} error={err}");
                return;
            }
        };
        if self.tx.send(Job::Write { key, payload }).is_err() {
            warn!("event=snapshot_persist module=repo status=worker_gone key={key}");
        }
    }

    /// Blocks until all writes enqueued before this call were attempted.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = unbounded();
        if self.tx.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        let _ = self.tx.send(Job::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
