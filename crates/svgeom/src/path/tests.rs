use super::*;
use crate::geom::pt;
use crate::num::RoundCfg;
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn path_of(cmds: &[PathCommand]) -> AnalyticalPath {
    let mut path = AnalyticalPath::new();
    for cmd in cmds {
        path.push(*cmd).unwrap();
    }
    path.refresh();
    path
}

fn from_segment(seg: svgtypes::PathSegment) -> PathCommand {
    use svgtypes::PathSegment as S;
    match seg {
        S::MoveTo { abs, x, y } => PathCommand::MoveTo { x, y, relative: !abs },
        S::LineTo { abs, x, y } => PathCommand::LineTo { x, y, relative: !abs },
        S::HorizontalLineTo { abs, x } => PathCommand::HorizontalLineTo { x, relative: !abs },
        S::VerticalLineTo { abs, y } => PathCommand::VerticalLineTo { y, relative: !abs },
        S::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => PathCommand::CubicBezier {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative: !abs,
        },
        S::SmoothCurveTo { abs, x2, y2, x, y } => PathCommand::SmoothCubicBezier {
            x2,
            y2,
            x,
            y,
            relative: !abs,
        },
        S::Quadratic { abs, x1, y1, x, y } => PathCommand::QuadraticBezier {
            x1,
            y1,
            x,
            y,
            relative: !abs,
        },
        S::SmoothQuadratic { abs, x, y } => PathCommand::SmoothQuadraticBezier {
            x,
            y,
            relative: !abs,
        },
        S::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => PathCommand::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative: !abs,
        },
        S::ClosePath { .. } => PathCommand::ClosePath,
    }
}

fn parse(d: &str) -> Vec<PathCommand> {
    svgtypes::PathParser::from(d)
        .map(|seg| from_segment(seg.expect("valid path data")))
        .collect()
}

/// Absolute end points of parsed path data.
fn walk(d: &str) -> Vec<Vector2<f64>> {
    let mut current = Vector2::zeros();
    let mut start = Vector2::zeros();
    let mut out = Vec::new();
    for cmd in parse(d) {
        current = cmd.end_point(current, start);
        if cmd.is_move() {
            start = current;
        }
        out.push(current);
    }
    out
}

#[test]
fn move_then_lines() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(10.0, 0.0),
        PathCommand::line_to(10.0, 10.0),
    ]);
    assert_eq!(path.d(), "M0 0L10 0 10 10");
    assert_eq!(path.to_path_data(), "M0 0L10 0 10 10");
    assert_eq!(path.to_string(), "M0 0L10 0 10 10");
}

#[test]
fn plain_appends_batch_until_refresh() {
    let mut path = AnalyticalPath::new();
    path.push(PathCommand::move_to(0.0, 0.0))
        .unwrap()
        .push(PathCommand::line_to(10.0, 0.0))
        .unwrap();
    assert_eq!(path.d(), "");
    assert_eq!(path.to_path_data(), "M0 0L10 0");
    assert_eq!(path.refresh(), "M0 0L10 0");
    // idempotent
    assert_eq!(path.refresh(), "M0 0L10 0");
}

#[test]
fn close_refreshes_immediately() {
    let mut path = AnalyticalPath::new();
    path.push(PathCommand::move_to(0.0, 0.0)).unwrap();
    path.push(PathCommand::line_to(10.0, 0.0)).unwrap();
    path.push(PathCommand::close()).unwrap();
    assert_eq!(path.d(), "M0 0L10 0Z");
}

#[test]
fn append_refresh_updates_cache() {
    let mut path = AnalyticalPath::new();
    path.append_refresh(PathCommand::move_to(3.0, 4.0)).unwrap();
    assert_eq!(path.d(), "M3 4");
}

#[test]
fn relative_first_move_becomes_absolute() {
    let mut path = AnalyticalPath::new();
    path.push(PathCommand::move_to(5.0, 5.0).relative()).unwrap();
    path.refresh();
    assert_eq!(
        path.commands()[0],
        PathCommand::MoveTo {
            x: 5.0,
            y: 5.0,
            relative: false
        }
    );
    assert_eq!(path.d(), "M5 5");
}

#[test]
fn minus_sign_replaces_separator() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(-10.0, -5.0),
        PathCommand::line_to(3.0, -2.0),
        PathCommand::line_to(-1.0, 4.0),
    ]);
    assert_eq!(path.d(), "M0 0L-10-5 3-2-1 4");
}

#[test]
fn repeated_letters_are_elided() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::cubic_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0),
        PathCommand::cubic_to(4.0, 4.0, 5.0, 5.0, 6.0, 6.0),
        PathCommand::cubic_to(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).relative(),
        PathCommand::horizontal_to(10.0),
        PathCommand::horizontal_to(5.0).relative(),
        PathCommand::horizontal_to(2.0).relative(),
    ]);
    assert_eq!(path.d(), "M0 0C1 1 2 2 3 3 4 4 5 5 6 6c1 1 1 1 1 1H10h5 2");
}

#[test]
fn later_moves_absorb_line_letters() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(10.0, 0.0),
        PathCommand::move_to(5.0, 5.0),
        PathCommand::line_to(6.0, 6.0),
    ]);
    assert_eq!(path.d(), "M0 0L10 0M5 5 6 6");

    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::move_to(5.0, 5.0).relative(),
        PathCommand::line_to(1.0, 1.0).relative(),
        PathCommand::line_to(2.0, 2.0),
    ]);
    assert_eq!(path.d(), "M0 0m5 5 1 1L2 2");

    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(1.0, 1.0).relative(),
    ]);
    assert_eq!(path.d(), "M0 0l1 1");
}

#[test]
fn close_letter_is_never_elided() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(1.0, 1.0),
        PathCommand::close(),
        PathCommand::move_to(2.0, 2.0),
        PathCommand::line_to(3.0, 3.0),
        PathCommand::close(),
        PathCommand::close(),
    ]);
    assert_eq!(path.d(), "M0 0L1 1ZM2 2 3 3ZZ");
}

#[test]
fn arcs_print_flags_as_digits() {
    let path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::arc_to(5.0, 8.0, -14.0, false, true, 10.0, 20.0),
        PathCommand::arc_to(5.0, 8.0, -14.0, false, true, -100.0, -240.0).relative(),
    ]);
    assert_eq!(path.d(), "M0 0A5 8-14 0 1 10 20a5 8-14 0 1-100-240");
}

#[test]
fn first_command_must_move() {
    let mut path = AnalyticalPath::new();
    let err = path.push(PathCommand::line_to(1.0, 1.0)).unwrap_err();
    assert_eq!(
        err,
        PathError::FirstNotMove {
            kind: CommandKind::LineTo
        }
    );
    assert!(path.is_empty());

    path.push(PathCommand::move_to(0.0, 0.0)).unwrap();
    let err = path.append(PathCommand::close(), true).unwrap_err();
    assert_eq!(
        err,
        PathError::FirstNotMove {
            kind: CommandKind::ClosePath
        }
    );
    let err = path.insert(0, PathCommand::vertical_to(3.0)).unwrap_err();
    assert!(matches!(err, PathError::FirstNotMove { .. }));
    assert_eq!(path.len(), 1);
    assert!(err.to_string().contains("VerticalLineTo"));
}

#[test]
fn to_start_retrofits_a_move() {
    let mut path = path_of(&[
        PathCommand::move_to(10.0, 10.0),
        PathCommand::line_to(20.0, 20.0),
    ]);
    path.append(PathCommand::move_to(1.0, 1.0).relative(), true)
        .unwrap();
    path.refresh();
    assert_eq!(path.d(), "M1 1M10 10 20 20");
}

#[test]
fn insert_and_delete() {
    let mut path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(10.0, 0.0),
        PathCommand::line_to(10.0, 10.0),
    ]);
    path.insert(2, PathCommand::horizontal_to(5.0)).unwrap();
    assert_eq!(path.d(), "M0 0L10 0H5L10 10");
    path.insert(4, PathCommand::close()).unwrap();
    assert_eq!(path.d(), "M0 0L10 0H5L10 10Z");

    assert_eq!(path.delete(2).unwrap(), PathCommand::horizontal_to(5.0));
    assert_eq!(path.d(), "M0 0L10 0 10 10Z");
    assert_eq!(path.len(), 4);
}

#[test]
fn index_errors_leave_path_untouched() {
    let mut path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::line_to(1.0, 0.0),
    ]);
    assert_eq!(
        path.insert(5, PathCommand::line_to(2.0, 2.0)).unwrap_err(),
        PathError::IndexOutOfRange { index: 5, len: 2 }
    );
    assert_eq!(
        path.delete(2).unwrap_err(),
        PathError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        path.delete(0).unwrap_err(),
        PathError::FirstNotMove {
            kind: CommandKind::LineTo
        }
    );
    assert_eq!(path.len(), 2);
    assert_eq!(path.d(), "M0 0L1 0");
}

#[test]
fn deleting_head_promotes_next_move() {
    let mut path = path_of(&[
        PathCommand::move_to(0.0, 0.0),
        PathCommand::move_to(5.0, 5.0).relative(),
        PathCommand::line_to(1.0, 1.0).relative(),
    ]);
    path.delete(0).unwrap();
    assert!(!path.commands()[0].is_relative());
    assert_eq!(path.d(), "M5 5l1 1");

    let mut single = path_of(&[PathCommand::move_to(1.0, 1.0)]);
    single.delete(0).unwrap();
    assert!(single.is_empty());
    assert_eq!(single.d(), "");
}

#[test]
fn clear_with_and_without_refresh() {
    let mut path = path_of(&[PathCommand::move_to(1.0, 2.0)]);
    path.clear(false);
    assert!(path.is_empty());
    assert_eq!(path.d(), "M1 2");
    path.clear(true);
    assert_eq!(path.d(), "");
}

#[test]
fn commands_are_stored_rounded() {
    let path = path_of(&[PathCommand::move_to(1.234_567, 2.0)]);
    assert_eq!(path.commands()[0], PathCommand::move_to(1.2346, 2.0));
    assert_eq!(path.d(), "M1.2346 2");

    let mut coarse = AnalyticalPath::with_round_cfg(RoundCfg::places(1));
    coarse.append_refresh(PathCommand::move_to(1.26, -3.04)).unwrap();
    assert_eq!(coarse.d(), "M1.3-3");

    let mut raw = AnalyticalPath::with_round_cfg(RoundCfg::disabled());
    raw.append_refresh(PathCommand::move_to(0.123_456_789, 2.0)).unwrap();
    assert_eq!(raw.d(), "M0.123456789 2");

    raw.set_round_cfg(RoundCfg::places(2));
    assert_eq!(raw.d(), "M0.12 2");
    assert_eq!(raw.round_cfg(), &RoundCfg::places(2));
}

#[test]
fn polyline_closed_square() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(10.0, 10.0),
        pt(0.0, 10.0),
        pt(0.0, 0.0),
    ]);
    assert_eq!(path.d(), "M0 0h10v10H0Z");
}

#[test]
fn polyline_prefers_shorter_numerals() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[pt(100.0, 100.0), pt(101.0, 102.0), pt(150.0, 100.0)]);
    assert_eq!(path.d(), "M100 100l1 2 49-2");

    let mut path = AnalyticalPath::new();
    path.add_polyline(&[pt(0.0, 0.0), pt(100.0, 100.0), pt(1.0, 1.0)]);
    assert_eq!(path.d(), "M0 0l100 100L1 1");
}

#[test]
fn polyline_skips_repeated_points() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[
        pt(0.0, 0.0),
        pt(0.0, 0.0),
        pt(5.0, 0.0),
        pt(5.0, 0.0),
        pt(5.0, 5.0),
    ]);
    assert_eq!(path.d(), "M0 0h5v5");
    assert_eq!(path.len(), 3);
}

#[test]
fn polyline_rounds_points_first() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[pt(0.000_01, 0.0), pt(1.234_56, 0.0)]);
    assert_eq!(path.d(), "M0 0h1.2346");
}

#[test]
fn polyline_edge_cases() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[]);
    assert!(path.is_empty());
    assert_eq!(path.d(), "");

    path.push(PathCommand::move_to(0.0, 0.0)).unwrap();
    path.push(PathCommand::line_to(5.0, 5.0)).unwrap();
    path.add_polyline(&[pt(10.0, 10.0), pt(20.0, 10.0)]);
    assert_eq!(path.d(), "M0 0L5 5M10 10h10");
}

#[test]
fn polyline_closes_within_tolerance_without_rounding() {
    let mut path = AnalyticalPath::with_round_cfg(RoundCfg::disabled());
    path.add_polyline(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(1e-12, 0.0)]);
    assert_eq!(path.d(), "M0 0h10v10Z");

    let mut open = AnalyticalPath::with_round_cfg(RoundCfg::disabled());
    open.add_polyline(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.5, 0.0)]);
    assert!(!open.d().ends_with('Z'));
}

#[test]
fn polyline_drops_non_finite_points() {
    let mut path = AnalyticalPath::new();
    path.add_polyline(&[pt(0.0, 0.0), pt(f64::NAN, 1.0), pt(5.0, f64::INFINITY), pt(5.0, 0.0)]);
    assert_eq!(path.d(), "M0 0h5");

    let mut empty = AnalyticalPath::new();
    empty.add_polyline(&[pt(f64::NAN, f64::NAN)]);
    assert!(empty.is_empty());
}

#[test]
fn non_finite_parameters_are_refused() {
    let mut path = AnalyticalPath::new();
    let err = path.push(PathCommand::move_to(f64::NAN, 0.0)).unwrap_err();
    assert_eq!(
        err,
        PathError::NonFinite {
            kind: CommandKind::MoveTo
        }
    );
    assert!(path.is_empty());

    path.push(PathCommand::move_to(0.0, 0.0)).unwrap();
    let err = path
        .insert(1, PathCommand::line_to(f64::INFINITY, 1.0))
        .unwrap_err();
    assert!(matches!(err, PathError::NonFinite { .. }));
    assert_eq!(path.len(), 1);
    assert_eq!(path.refresh(), "M0 0");
}

#[test]
fn huge_coordinates_stay_numeric() {
    let mut path = AnalyticalPath::new();
    path.push(PathCommand::move_to(1e305, 0.0)).unwrap();
    let d = path.refresh().to_string();
    assert!(!d.contains("inf"));
    assert!(d.starts_with('M'));
    assert_eq!(path.commands()[0], PathCommand::move_to(1e305, 0.0));
}

#[test]
fn end_points_track_relative_commands() {
    let path = path_of(&[
        PathCommand::move_to(10.0, 10.0),
        PathCommand::horizontal_to(5.0).relative(),
        PathCommand::vertical_to(-3.0).relative(),
        PathCommand::line_to(1.0, 1.0).relative(),
        PathCommand::close(),
        PathCommand::move_to(2.0, 2.0).relative(),
    ]);
    assert_eq!(
        path.end_points(),
        vec![
            pt(10.0, 10.0),
            pt(15.0, 10.0),
            pt(15.0, 7.0),
            pt(16.0, 8.0),
            pt(10.0, 10.0),
            pt(12.0, 12.0),
        ]
    );
    assert_eq!(walk(path.d()), path.end_points());
}

#[test]
fn command_accessors() {
    let mut arc = PathCommand::arc_to(5.0, 8.0, -14.0, false, true, 10.0, 20.0);
    assert_eq!(arc.kind(), CommandKind::EllipticalArc);
    assert_eq!(arc.letter(), 'A');
    assert_eq!(arc.params(), vec![5.0, 8.0, -14.0, 0.0, 1.0, 10.0, 20.0]);
    arc.set_relative(true);
    assert_eq!(arc.letter(), 'a');
    assert!(arc.is_relative());

    let mut close = PathCommand::close();
    close.set_relative(true);
    assert_eq!(close.letter(), 'Z');
    assert!(!close.is_relative());
    assert!(close.params().is_empty());

    assert_eq!(PathCommand::line_to(1.5, -2.0).to_string(), "L1.5-2");
    assert_eq!(CommandKind::SmoothCubicBezier.fields(), &["x2", "y2", "x", "y"]);
}

#[test]
fn dynamic_construction() {
    assert_eq!(
        PathCommand::from_params('L', &[1.0, 2.0]).unwrap(),
        PathCommand::line_to(1.0, 2.0)
    );
    assert_eq!(
        PathCommand::from_params('l', &[1.0, 2.0]).unwrap(),
        PathCommand::line_to(1.0, 2.0).relative()
    );
    assert_eq!(
        PathCommand::from_params('A', &[1.0, 2.0, 0.0, 1.0, 0.0, 5.0, 6.0]).unwrap(),
        PathCommand::arc_to(1.0, 2.0, 0.0, true, false, 5.0, 6.0)
    );
    assert_eq!(PathCommand::from_params('z', &[]).unwrap(), PathCommand::ClosePath);

    let err = PathCommand::from_params('A', &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        PathError::MissingField {
            kind: CommandKind::EllipticalArc,
            field: "large-arc-flag"
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("EllipticalArc") && msg.contains("large-arc-flag"));

    assert_eq!(
        PathCommand::from_params('M', &[]).unwrap_err(),
        PathError::MissingField {
            kind: CommandKind::MoveTo,
            field: "x"
        }
    );
    assert_eq!(
        PathCommand::from_params('H', &[1.0, 2.0]).unwrap_err(),
        PathError::TooManyParams {
            kind: CommandKind::HorizontalLineTo,
            expected: 1,
            got: 2
        }
    );
    assert_eq!(
        PathCommand::from_params('X', &[]).unwrap_err(),
        PathError::UnknownCommand { letter: 'X' }
    );
}

#[test]
fn random_polylines_parse_back_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(2..12);
        let pts: Vec<Vector2<f64>> = (0..n)
            .map(|_| pt(rng.gen_range(-20..20) as f64, rng.gen_range(-20..20) as f64))
            .collect();
        let mut expected = vec![pts[0]];
        for i in 1..n {
            if i == n - 1 && pts[i] == pts[0] {
                expected.push(pts[0]);
            } else if pts[i] != pts[i - 1] {
                expected.push(pts[i]);
            }
        }
        let mut path = AnalyticalPath::new();
        path.add_polyline(&pts);
        assert_eq!(walk(path.d()), expected, "d = {}", path.d());
    }
}

fn num() -> impl Strategy<Value = f64> {
    (-5000i32..5000).prop_map(|v| f64::from(v) / 100.0)
}

fn radius() -> impl Strategy<Value = f64> {
    (1i32..5000).prop_map(|v| f64::from(v) / 100.0)
}

fn command() -> impl Strategy<Value = PathCommand> {
    prop_oneof![
        (num(), num(), any::<bool>())
            .prop_map(|(x, y, relative)| PathCommand::MoveTo { x, y, relative }),
        (num(), num(), any::<bool>())
            .prop_map(|(x, y, relative)| PathCommand::LineTo { x, y, relative }),
        (num(), any::<bool>())
            .prop_map(|(x, relative)| PathCommand::HorizontalLineTo { x, relative }),
        (num(), any::<bool>())
            .prop_map(|(y, relative)| PathCommand::VerticalLineTo { y, relative }),
        (num(), num(), num(), num(), num(), num(), any::<bool>()).prop_map(
            |(x1, y1, x2, y2, x, y, relative)| PathCommand::CubicBezier {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative
            }
        ),
        (num(), num(), num(), num(), any::<bool>()).prop_map(|(x2, y2, x, y, relative)| {
            PathCommand::SmoothCubicBezier {
                x2,
                y2,
                x,
                y,
                relative,
            }
        }),
        (num(), num(), num(), num(), any::<bool>()).prop_map(|(x1, y1, x, y, relative)| {
            PathCommand::QuadraticBezier {
                x1,
                y1,
                x,
                y,
                relative,
            }
        }),
        (num(), num(), any::<bool>())
            .prop_map(|(x, y, relative)| PathCommand::SmoothQuadraticBezier { x, y, relative }),
        (
            radius(),
            radius(),
            num(),
            any::<bool>(),
            any::<bool>(),
            num(),
            num(),
            any::<bool>()
        )
            .prop_map(|(rx, ry, x_axis_rotation, large_arc, sweep, x, y, relative)| {
                PathCommand::EllipticalArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                    relative,
                }
            }),
        Just(PathCommand::ClosePath),
    ]
}

proptest! {
    #[test]
    fn serialized_path_parses_back(
        head in (num(), num()),
        rest in prop::collection::vec(command(), 0..24),
    ) {
        let mut path = AnalyticalPath::new();
        path.push(PathCommand::move_to(head.0, head.1)).unwrap();
        for cmd in rest {
            path.push(cmd).unwrap();
        }
        path.refresh();
        let parsed = parse(path.d());
        prop_assert_eq!(parsed.as_slice(), path.commands());
        prop_assert_eq!(walk(path.d()), path.end_points());
    }
}
