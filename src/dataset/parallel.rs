// src/dataset/parallel.rs

//! Multi-worker window loading.
//!
//! Each worker runs a private [`WindowIterator`] over its own track
//! sub-range and feeds a shared channel. Workers share nothing after
//! partitioning, so there is no cross-worker ordering guarantee; within
//! one worker, windows arrive in (file index, offset) order.

use tokio::sync::mpsc;

use crate::error::Result;

use super::corpus::WindowDataset;
use super::windows::Window;

/// Configuration for multi-worker loading.
#[derive(Debug, Clone)]
pub struct ParallelLoadConfig {
    /// Number of loader workers. Zero means the caller should iterate
    /// the dataset directly on its own thread.
    pub num_workers: u32,
    /// Channel buffer slots per worker.
    pub channel_buffer: usize,
}

impl Default for ParallelLoadConfig {
    fn default() -> Self {
        Self {
            num_workers: 0,
            channel_buffer: 4,
        }
    }
}

/// A window with the id of the worker that produced it.
#[derive(Debug, Clone)]
pub struct WindowFromWorker {
    pub window: Window,
    pub worker_id: u32,
}

/// Spawns loader workers over disjoint shards of `dataset`.
pub struct ParallelWindowLoader {
    dataset: WindowDataset,
    config: ParallelLoadConfig,
}

impl ParallelWindowLoader {
    pub fn new(dataset: WindowDataset, config: ParallelLoadConfig) -> Self {
        Self { dataset, config }
    }

    /// Start one blocking task per worker and return the combined
    /// window stream.
    ///
    /// Each worker iterates `dataset.shard(num_workers, worker_id)`. A
    /// worker that hits a load or label error sends the error and stops;
    /// other workers keep going. Dropping the receiver stops all
    /// workers at their next send.
    pub fn load(&self) -> mpsc::Receiver<Result<WindowFromWorker>> {
        let num_workers = self.config.num_workers.max(1);
        let (tx, rx) = mpsc::channel(self.config.channel_buffer * num_workers as usize);

        for worker_id in 0..num_workers {
            let tx = tx.clone();
            let shard = self.dataset.shard(num_workers, worker_id);

            tokio::task::spawn_blocking(move || {
                let mut iter = match shard.iter() {
                    Ok(iter) => iter,
                    Err(e) => {
                        let _ = tx.blocking_send(Err(e));
                        return;
                    }
                };

                loop {
                    match iter.next_window() {
                        Ok(Some(window)) => {
                            let item = WindowFromWorker { window, worker_id };
                            if tx.blocking_send(Ok(item)).is_err() {
                                return; // Receiver dropped
                            }
                        }
                        Ok(None) => return, // Shard exhausted
                        Err(e) => {
                            let _ = tx.blocking_send(Err(e));
                            return;
                        }
                    }
                }
            });
        }

        rx
    }

    /// Collect every window from every worker.
    ///
    /// Convenience for tests and small corpora; use [`load`](Self::load)
    /// for streaming access.
    pub async fn load_all(&self) -> Result<Vec<WindowFromWorker>> {
        let mut rx = self.load();
        let mut windows = Vec::new();
        while let Some(result) = rx.recv().await {
            windows.push(result?);
        }
        Ok(windows)
    }
}
