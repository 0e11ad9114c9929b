// src/dataset/batch.rs

use crate::encode::FEATURE_DIM;
use crate::error::Result;

use super::windows::Window;

/// A batch of windows, stacked along a leading batch dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowBatch {
    /// (batch, seq_len, 2)
    pub x: Vec<Vec<[f32; 2]>>,
    /// (batch, seq_len, FEATURE_DIM)
    pub y: Vec<Vec<[f32; FEATURE_DIM]>>,
    /// (batch,)
    pub labels: Vec<u32>,
}

impl WindowBatch {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn from_windows(windows: Vec<Window>) -> Self {
        let mut batch = Self {
            x: Vec::with_capacity(windows.len()),
            y: Vec::with_capacity(windows.len()),
            labels: Vec::with_capacity(windows.len()),
        };
        for window in windows {
            batch.x.push(window.x);
            batch.y.push(window.y);
            batch.labels.push(window.label);
        }
        batch
    }
}

/// Groups a window stream into fixed-size batches.
///
/// The final short batch is yielded unless `drop_last` is set. An error
/// from the underlying stream is passed through and ends batching.
pub struct Batcher<I> {
    windows: I,
    batch_size: usize,
    drop_last: bool,
    done: bool,
}

impl<I> Batcher<I>
where
    I: Iterator<Item = Result<Window>>,
{
    pub fn new(windows: I, batch_size: usize, drop_last: bool) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            windows,
            batch_size,
            drop_last,
            done: false,
        }
    }
}

impl<I> Iterator for Batcher<I>
where
    I: Iterator<Item = Result<Window>>,
{
    type Item = Result<WindowBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut pending = Vec::with_capacity(self.batch_size);
        while pending.len() < self.batch_size {
            match self.windows.next() {
                Some(Ok(window)) => pending.push(window),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    if pending.is_empty() || self.drop_last {
                        return None;
                    }
                    return Some(Ok(WindowBatch::from_windows(pending)));
                }
            }
        }

        Some(Ok(WindowBatch::from_windows(pending)))
    }
}
