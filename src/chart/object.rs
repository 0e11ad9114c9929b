// src/chart/object.rs

use std::time::Duration;

/// A 2D position in playfield coordinates.
///
/// Positions are not restricted to the playfield; sliders routinely place
/// control points outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// The geometry rule a slider's control points are interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Straight line segments between control points.
    Linear,
    /// Catmull-Rom spline.
    Catmull,
    /// Circular arc through three points.
    Perfect,
    /// Piecewise bezier; duplicated control points split the pieces.
    Bezier,
}

/// Slider curve geometry as produced by the external parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    /// Ordered control points, including the head and tail.
    pub points: Vec<Position>,
    /// The curve evaluated at parameter 1.0. For perfect arcs this can
    /// differ from the last control point.
    pub end_position: Position,
}

/// One timed interactive element of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum HitObject {
    Circle {
        time: Duration,
        position: Position,
    },
    Spinner {
        start: Duration,
        end: Duration,
        position: Position,
    },
    Slider {
        start: Duration,
        end: Duration,
        position: Position,
        curve: Curve,
        /// Number of times the slider body is traversed (1 = no bounce).
        repeat: u32,
    },
}

impl HitObject {
    /// Start time of the object.
    pub fn start_time(&self) -> Duration {
        match self {
            Self::Circle { time, .. } => *time,
            Self::Spinner { start, .. } | Self::Slider { start, .. } => *start,
        }
    }
}

/// A parsed chart: an identifier plus its hit objects in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct Beatmap {
    pub beatmap_id: u64,
    pub hit_objects: Vec<HitObject>,
}
