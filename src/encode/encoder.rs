// src/encode/encoder.rs

use std::time::Duration;

use crate::chart::{Curve, CurveKind, HitObject, Position};

use super::datapoint::{DataPoint, EventKind};

/// Sliders with this many control points or more are treated as
/// degenerate and contribute no rows at all.
pub const MAX_CONTROL_POINTS: usize = 100;

/// Encode one hit object into its ordered rows.
///
/// Pure function; the only silent drop is a slider at or above
/// [`MAX_CONTROL_POINTS`], which returns an empty vector.
pub fn encode(object: &HitObject) -> Vec<DataPoint> {
    match object {
        HitObject::Circle { time, position } => {
            vec![DataPoint::new(*time, *position, EventKind::Circle)]
        }
        HitObject::Spinner {
            start,
            end,
            position,
        } => vec![
            DataPoint::new(*start, *position, EventKind::SpinnerStart),
            DataPoint::new(*end, *position, EventKind::SpinnerEnd),
        ],
        HitObject::Slider {
            start,
            end,
            position,
            curve,
            repeat,
        } => {
            if curve.points.len() >= MAX_CONTROL_POINTS {
                tracing::warn!(
                    control_points = curve.points.len(),
                    "skipping degenerate slider"
                );
                return Vec::new();
            }
            encode_slider(*start, *end, *position, curve, *repeat)
        }
    }
}

fn encode_slider(
    start: Duration,
    end: Duration,
    position: Position,
    curve: &Curve,
    repeat: u32,
) -> Vec<DataPoint> {
    let mut rows = vec![DataPoint::new(start, position, EventKind::SliderStart)];

    match curve.kind {
        CurveKind::Linear => append_anchors(&mut rows, start, end, curve, EventKind::LinearAnchor),
        CurveKind::Catmull => {
            append_anchors(&mut rows, start, end, curve, EventKind::CatmullAnchor)
        }
        CurveKind::Perfect => {
            append_anchors(&mut rows, start, end, curve, EventKind::PerfectAnchor)
        }
        CurveKind::Bezier => {
            let points = &curve.points;
            for i in 1..points.len().saturating_sub(1) {
                let time = anchor_time(start, end, i, points.len());
                // A point equal to its successor marks a sharp corner
                // and reuses the linear slot; a point equal to its
                // predecessor is a duplicate and emits nothing. The
                // successor check must come first.
                if points[i] == points[i + 1] {
                    rows.push(DataPoint::new(time, points[i], EventKind::LinearAnchor));
                } else if points[i] != points[i - 1] {
                    rows.push(DataPoint::new(time, points[i], EventKind::BezierAnchor));
                }
            }
        }
    }

    if let Some(last) = curve.points.last() {
        rows.push(DataPoint::new(end, *last, EventKind::SliderEnd));
    }
    rows.push(DataPoint::new(
        end,
        curve.end_position,
        EventKind::from_repeat(repeat),
    ));

    rows
}

/// Rows for every interior control point, all tagged `kind`.
fn append_anchors(
    rows: &mut Vec<DataPoint>,
    start: Duration,
    end: Duration,
    curve: &Curve,
    kind: EventKind,
) {
    let points = &curve.points;
    for i in 1..points.len().saturating_sub(1) {
        let time = anchor_time(start, end, i, points.len());
        rows.push(DataPoint::new(time, points[i], kind));
    }
}

/// Time of the `i`-th control point, linearly interpolated across the
/// slider's duration by point index.
fn anchor_time(start: Duration, end: Duration, i: usize, point_count: usize) -> Duration {
    let duration = end.saturating_sub(start);
    let fraction = i as f64 / (point_count - 1) as f64;
    start + duration.mul_f64(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Beatmap;
    use crate::encode::beatmap_to_sequence;

    fn pos(x: f32, y: f32) -> Position {
        Position::new(x, y)
    }

    fn slider(curve_kind: CurveKind, points: Vec<Position>, repeat: u32) -> HitObject {
        let end_position = *points.last().unwrap();
        HitObject::Slider {
            start: Duration::from_secs(1),
            end: Duration::from_secs(2),
            position: points[0],
            curve: Curve {
                kind: curve_kind,
                points,
                end_position,
            },
            repeat,
        }
    }

    #[test]
    fn test_circle_single_row() {
        let rows = encode(&HitObject::Circle {
            time: Duration::from_millis(500),
            position: pos(256.0, 192.0),
        });
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, EventKind::Circle);
        assert_eq!(rows[0].time, 5.0);
        assert_eq!(rows[0].pos, [0.5, 0.5]);
    }

    #[test]
    fn test_spinner_two_rows() {
        let rows = encode(&HitObject::Spinner {
            start: Duration::from_secs(1),
            end: Duration::from_secs(3),
            position: pos(256.0, 192.0),
        });
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, EventKind::SpinnerStart);
        assert_eq!(rows[1].kind, EventKind::SpinnerEnd);
        assert_eq!(rows[0].pos, rows[1].pos);
        assert_eq!(rows[0].time, 10.0);
        assert_eq!(rows[1].time, 30.0);
    }

    #[test]
    fn test_linear_slider_rows() {
        // 5 control points, 3 interior: start + 3 anchors + end + repeat
        let rows = encode(&slider(
            CurveKind::Linear,
            vec![
                pos(0.0, 0.0),
                pos(32.0, 0.0),
                pos(64.0, 0.0),
                pos(96.0, 0.0),
                pos(128.0, 0.0),
            ],
            1,
        ));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].kind, EventKind::SliderStart);
        for row in &rows[1..4] {
            assert_eq!(row.kind, EventKind::LinearAnchor);
        }
        assert_eq!(rows[4].kind, EventKind::SliderEnd);
        assert_eq!(rows[5].kind, EventKind::Repeat(0));
    }

    #[test]
    fn test_anchor_times_interpolated() {
        // Duration 1s over 4 segments: anchors at 1.25s, 1.5s, 1.75s
        let rows = encode(&slider(
            CurveKind::Catmull,
            vec![
                pos(0.0, 0.0),
                pos(32.0, 0.0),
                pos(64.0, 0.0),
                pos(96.0, 0.0),
                pos(128.0, 0.0),
            ],
            1,
        ));
        assert_eq!(rows[1].time, 12.5);
        assert_eq!(rows[2].time, 15.0);
        assert_eq!(rows[3].time, 17.5);
        assert_eq!(rows[1].kind, EventKind::CatmullAnchor);
    }

    #[test]
    fn test_perfect_anchor_slot() {
        let rows = encode(&slider(
            CurveKind::Perfect,
            vec![pos(0.0, 0.0), pos(50.0, 50.0), pos(100.0, 0.0)],
            1,
        ));
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].kind, EventKind::PerfectAnchor);
    }

    #[test]
    fn test_bezier_corner_and_duplicate() {
        // points[1] == points[2]: index 1 is a corner (slot 7), index 2
        // equals its predecessor and is suppressed.
        let rows = encode(&slider(
            CurveKind::Bezier,
            vec![
                pos(0.0, 0.0),
                pos(50.0, 50.0),
                pos(50.0, 50.0),
                pos(80.0, 20.0),
                pos(128.0, 0.0),
            ],
            1,
        ));
        let kinds: Vec<_> = rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::SliderStart,
                EventKind::LinearAnchor,
                EventKind::BezierAnchor,
                EventKind::SliderEnd,
                EventKind::Repeat(0),
            ]
        );
    }

    #[test]
    fn test_bezier_plain_anchors() {
        let rows = encode(&slider(
            CurveKind::Bezier,
            vec![pos(0.0, 0.0), pos(40.0, 40.0), pos(80.0, 10.0), pos(128.0, 0.0)],
            1,
        ));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].kind, EventKind::BezierAnchor);
        assert_eq!(rows[2].kind, EventKind::BezierAnchor);
    }

    #[test]
    fn test_repeat_row_uses_geometric_end() {
        // Perfect arcs can end away from the last control point.
        let geometric_end = pos(90.0, 30.0);
        let object = HitObject::Slider {
            start: Duration::from_secs(1),
            end: Duration::from_secs(2),
            position: pos(0.0, 0.0),
            curve: Curve {
                kind: CurveKind::Perfect,
                points: vec![pos(0.0, 0.0), pos(50.0, 50.0), pos(100.0, 0.0)],
                end_position: geometric_end,
            },
            repeat: 6,
        };
        let rows = encode(&object);
        let last = rows.last().unwrap();
        assert_eq!(last.kind, EventKind::Repeat(3));
        assert_eq!(last.pos, [90.0 / 512.0, 30.0 / 384.0]);
        // Slider end row still sits on the last control point
        assert_eq!(rows[rows.len() - 2].pos, [100.0 / 512.0, 0.0]);
    }

    #[test]
    fn test_degenerate_slider_skipped() {
        let points: Vec<Position> = (0..MAX_CONTROL_POINTS)
            .map(|i| pos(i as f32, 0.0))
            .collect();
        let rows = encode(&slider(CurveKind::Bezier, points, 1));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sequence_concatenates_in_order() {
        let beatmap = Beatmap {
            beatmap_id: 1,
            hit_objects: vec![
                HitObject::Circle {
                    time: Duration::from_secs(1),
                    position: pos(10.0, 10.0),
                },
                HitObject::Spinner {
                    start: Duration::from_secs(2),
                    end: Duration::from_secs(3),
                    position: pos(256.0, 192.0),
                },
            ],
        };
        let seq = beatmap_to_sequence(&beatmap);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[0].kind, EventKind::Circle);
        assert_eq!(seq[1].kind, EventKind::SpinnerStart);
        assert_eq!(seq[2].kind, EventKind::SpinnerEnd);
    }

    #[test]
    fn test_empty_beatmap_empty_sequence() {
        let beatmap = Beatmap {
            beatmap_id: 1,
            hit_objects: vec![],
        };
        assert!(beatmap_to_sequence(&beatmap).is_empty());
    }
}
