// src/encode/mod.rs

//! Encoding of hit objects into fixed-width numeric rows.
//!
//! Each hit object becomes one or more [`DataPoint`] rows: a playfield-
//! normalized position, a raw time scalar, and a 14-way event kind. A
//! whole chart concatenates into one ordered sequence, which is then
//! split into a position view and a feature view (sinusoidally embedded
//! time plus the one-hot kind) for windowing.

mod datapoint;
mod embedding;
mod encoder;
mod sequence;

pub use datapoint::{repeat_class, DataPoint, EventKind, NUM_EVENT_KINDS, PLAYFIELD_SIZE};
pub use embedding::{timestep_embedding, MAX_TIME_PERIOD, TIME_EMBED_DIM};
pub use encoder::{encode, MAX_CONTROL_POINTS};
pub use sequence::{beatmap_to_sequence, EncodedSequence, FEATURE_DIM};
