// src/encode/sequence.rs

use crate::chart::Beatmap;

use super::datapoint::{DataPoint, NUM_EVENT_KINDS};
use super::embedding::{timestep_embedding, MAX_TIME_PERIOD, TIME_EMBED_DIM};
use super::encoder::encode;

/// Width of one feature row: embedded time plus the one-hot kind.
pub const FEATURE_DIM: usize = TIME_EMBED_DIM + NUM_EVENT_KINDS;

/// Encode a whole chart into one ordered sequence of rows.
///
/// Hit objects are encoded in chronological order as produced by the
/// parser; an empty chart yields an empty sequence.
pub fn beatmap_to_sequence(beatmap: &Beatmap) -> Vec<DataPoint> {
    beatmap.hit_objects.iter().flat_map(encode).collect()
}

/// A chart sequence split into the two views the model consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSequence {
    /// Normalized positions, one `[x, y]` row per data point.
    pub x: Vec<[f32; 2]>,
    /// Embedded time concatenated with the one-hot kind.
    pub y: Vec<[f32; FEATURE_DIM]>,
}

impl EncodedSequence {
    /// Split and embed a sequence. The time embedding is applied here,
    /// once per chart, so windows can slice without re-embedding.
    pub fn from_datapoints(sequence: &[DataPoint]) -> Self {
        let mut x = Vec::with_capacity(sequence.len());
        let mut y = Vec::with_capacity(sequence.len());

        for point in sequence {
            x.push(point.pos);

            let mut row = [0.0; FEATURE_DIM];
            let embedded = timestep_embedding(point.time, TIME_EMBED_DIM, MAX_TIME_PERIOD);
            row[..TIME_EMBED_DIM].copy_from_slice(&embedded);
            row[TIME_EMBED_DIM..].copy_from_slice(&point.one_hot());
            y.push(row);
        }

        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
