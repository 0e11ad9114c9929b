// src/encode/datapoint.rs

use std::time::Duration;

use crate::chart::Position;

/// Playfield extent used to normalize positions. Positions outside the
/// playfield are not clamped, so normalized values may leave [0, 1].
pub const PLAYFIELD_SIZE: (f32, f32) = (512.0, 384.0);

/// Width of the one-hot event-kind encoding.
pub const NUM_EVENT_KINDS: usize = 14;

/// The role a row plays within its hit object, one slot of the fixed
/// 14-way taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Slot 0: a plain circle.
    Circle,
    /// Slot 1: spinner/hold start.
    SpinnerStart,
    /// Slot 2: spinner/hold end.
    SpinnerEnd,
    /// Slot 3: slider head.
    SliderStart,
    /// Slot 4: interior bezier anchor that differs from its neighbors.
    BezierAnchor,
    /// Slot 5: interior anchor of a perfect (circular-arc) curve.
    PerfectAnchor,
    /// Slot 6: interior anchor of a catmull curve.
    CatmullAnchor,
    /// Slot 7: interior anchor of a linear curve, also used for a
    /// duplicated bezier anchor marking a sharp corner.
    LinearAnchor,
    /// Slot 8: slider tail at the last control point.
    SliderEnd,
    /// Slots 9-13: slider geometric end, bucketed by repeat count.
    Repeat(u32),
}

impl EventKind {
    /// One-hot slot index of this kind.
    pub fn slot(&self) -> usize {
        match self {
            Self::Circle => 0,
            Self::SpinnerStart => 1,
            Self::SpinnerEnd => 2,
            Self::SliderStart => 3,
            Self::BezierAnchor => 4,
            Self::PerfectAnchor => 5,
            Self::CatmullAnchor => 6,
            Self::LinearAnchor => 7,
            Self::SliderEnd => 8,
            Self::Repeat(class) => 9 + *class as usize,
        }
    }

    /// The repeat-parity kind for a slider traversed `repeat` times.
    pub fn from_repeat(repeat: u32) -> Self {
        Self::Repeat(repeat_class(repeat))
    }
}

/// Bucket a slider repeat count into one of five classes: 1, 2 and 3
/// repeats individually, everything higher by parity (an even bounce
/// count ends on the far side, an odd one back at the head).
pub fn repeat_class(repeat: u32) -> u32 {
    if repeat < 4 {
        repeat.saturating_sub(1)
    } else if repeat % 2 == 0 {
        3
    } else {
        4
    }
}

/// One fixed-width row of the encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Playfield-normalized (x, y).
    pub pos: [f32; 2],
    /// Absolute time in seconds times 10, not yet embedded.
    pub time: f32,
    pub kind: EventKind,
}

impl DataPoint {
    pub fn new(time: Duration, pos: Position, kind: EventKind) -> Self {
        Self {
            pos: [pos.x / PLAYFIELD_SIZE.0, pos.y / PLAYFIELD_SIZE.1],
            time: time.as_secs_f32() * 10.0,
            kind,
        }
    }

    /// Render the kind as a one-hot row. Exactly one slot is set.
    pub fn one_hot(&self) -> [f32; NUM_EVENT_KINDS] {
        let mut row = [0.0; NUM_EVENT_KINDS];
        row[self.kind.slot()] = 1.0;
        row
    }
}
