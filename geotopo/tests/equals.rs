mod common;

use assert_matches::assert_matches;
use common::*;
use geotopo::Topology;

#[track_caller]
fn check(a: G, b: G, expected: bool) {
    init_logger();
    let forward = geotopo::equals(&a, &b);
    let backward = geotopo::equals(&b, &a);
    assert_eq!(forward, expected, "{a:?} vs {b:?}");
    assert_eq!(backward, expected, "{b:?} vs {a:?}");

    let matrix = geotopo::relate_pattern(&a, &b, "T*F**FFF*");
    assert_matches!(matrix, Ok(m) if m == expected, "relate of {a:?} vs {b:?}");
    let matrix = geotopo::relate_pattern(&b, &a, "T*F**FFF*");
    assert_matches!(matrix, Ok(m) if m == expected, "relate of {b:?} vs {a:?}");
}

const CASE_P1: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (0.0, 0.0)];
const TRIANGLE_4: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (0.0, 0.0)];
const HOLE_1: &[(f64, f64)] = &[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)];
const HOLE_2: &[(f64, f64)] = &[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 3.0), (2.0, 2.0)];

#[test]
fn reversed_linestring() {
    check(line(&[(1.0, 1.0), (3.0, 3.0)]), line(&[(3.0, 3.0), (1.0, 1.0)]), true);
    check(line(&[(1.0, 1.0), (2.0, 2.0)]), line(&[(1.0, 1.0), (2.0, 2.0)]), true);
}

#[test]
fn linestrings_with_collinear_points() {
    check(
        line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)]),
        line(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (2.0, 5.0)]),
        true,
    );
    check(
        line(&[(1.0, 0.0), (3.0, 3.0), (2.0, 5.0)]),
        line(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (2.0, 5.0)]),
        false,
    );
    check(
        line(&[(1.0, 0.0), (3.0, 3.0), (2.0, 5.0)]),
        line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)]),
        false,
    );
    check(
        line(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (6.0, 0.0)]),
        line(&[(0.0, 0.0), (6.0, 0.0)]),
        true,
    );
}

#[test]
fn self_overlapping_linestrings() {
    check(
        line(&[
            (0.0, 5.0),
            (5.0, 5.0),
            (10.0, 5.0),
            (10.0, 0.0),
            (5.0, 0.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (10.0, 10.0),
            (15.0, 10.0),
            (15.0, 5.0),
            (10.0, 5.0),
            (10.0, 10.0),
            (10.0, 15.0),
        ]),
        line(&[
            (0.0, 5.0),
            (15.0, 5.0),
            (15.0, 10.0),
            (5.0, 10.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 15.0),
        ]),
        true,
    );
    check(
        line(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 5.0), (5.0, 0.0)]),
        line(&[(0.0, 5.0), (5.0, 5.0), (5.0, 10.0), (10.0, 10.0), (10.0, 5.0), (5.0, 5.0), (5.0, 0.0)]),
        true,
    );
    check(
        line(&[(0.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 0.0)]),
        line(&[(0.0, 5.0), (5.0, 5.0), (5.0, 10.0), (10.0, 10.0), (10.0, 5.0), (5.0, 5.0), (5.0, 0.0)]),
        true,
    );
}

#[test]
fn non_simple_check_can_be_disabled() {
    let retraced = line(&[(0.0, 5.0), (5.0, 5.0), (5.0, 10.0), (10.0, 10.0), (10.0, 5.0), (5.0, 5.0), (5.0, 0.0)]);
    let simple = line(&[(0.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 0.0)]);

    assert!(Topology::default().equals(&retraced, &simple));
    let topology = Topology::default().with_non_simple_equals(false);
    assert!(!topology.equals(&retraced, &simple));
    assert!(topology.equals(&simple, &simple));
}

#[test]
fn overlapping_parts_of_multilinestring() {
    check(
        multi_line(&[&[(0.0, 0.0), (2.0, 0.0)], &[(1.0, 0.0), (2.0, 0.0)]]),
        line(&[(0.0, 0.0), (2.0, 0.0)]),
        true,
    );
    check(
        multi_line(&[&[(0.0, 0.0), (2.0, 0.0)], &[(0.0, 0.0), (2.0, 0.0)]]),
        line(&[(2.0, 0.0), (0.0, 0.0)]),
        true,
    );
    check(
        multi_line(&[&[(0.0, 0.0), (2.0, 0.0)], &[(1.0, 0.0), (2.0, 0.0)]]),
        line(&[(0.0, 0.0), (1.0, 0.0)]),
        false,
    );
}

#[test]
fn linestring_and_multilinestring() {
    check(
        line(&[(1.0, 1.0), (3.0, 3.0), (4.0, 4.0)]),
        multi_line(&[&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)], &[(3.0, 3.0), (4.0, 4.0)]]),
        true,
    );
    check(
        line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)]),
        multi_line(&[&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)], &[(3.0, 3.0), (2.0, 5.0)]]),
        true,
    );
    check(
        line(&[(1.0, 1.0), (3.0, 3.0), (2.0, 5.0)]),
        multi_line(&[&[(1.0, 1.0), (2.0, 2.0)], &[(3.0, 3.0), (2.0, 5.0)]]),
        false,
    );

    let two_parts = || {
        multi_line(&[
            &[(0.0, 5.0), (5.0, 5.0), (5.0, 0.0)],
            &[(5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 5.0)],
        ])
    };
    check(
        line(&[(0.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 0.0)]),
        two_parts(),
        true,
    );
    check(
        line(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 0.0)]),
        two_parts(),
        true,
    );
    check(
        line(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 5.0), (5.0, 0.0)]),
        two_parts(),
        true,
    );
}

#[test]
fn multilinestrings() {
    check(
        multi_line(&[&[(1.0, 1.0), (1.5, 1.5)], &[(1.5, 1.5), (3.0, 3.0), (2.0, 5.0)]]),
        multi_line(&[&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)], &[(3.0, 3.0), (2.0, 5.0)]]),
        true,
    );
    check(
        multi_line(&[
            &[(100000.0, 100000.0), (150000.0, 150000.0)],
            &[(150000.0, 150000.0), (300000.0, 300000.0), (200000.0, 500000.0)],
        ]),
        multi_line(&[
            &[(100000.0, 100000.0), (200000.0, 200000.0), (300000.0, 300000.0)],
            &[(300000.0, 300000.0), (200000.0, 500000.0)],
        ]),
        true,
    );
}

#[test]
fn segments() {
    use geo_types::Line;

    let segment = |a: (f64, f64), b: (f64, f64)| geom(Line::new(a, b));
    check(segment((0.0, 0.0), (1.0, 1.0)), segment((0.0, 0.0), (1.0, 1.0)), true);
    check(segment((0.0, 0.0), (1.0, 1.0)), segment((1.0, 1.0), (0.0, 0.0)), true);
}

#[test]
fn points() {
    check(geom(geo_types::point!(x: 1.0, y: 1.0)), geom(geo_types::point!(x: 1.0, y: 1.0)), true);
    check(geom(geo_types::point!(x: 1.0, y: 1.0)), geom(geo_types::point!(x: 1.0, y: 2.0)), false);
    check(
        multi_point(&[(3.0, 0.0), (0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]),
        multi_point(&[(1.0, 0.0), (3.0, 0.0), (0.0, 0.0)]),
        true,
    );
    check(
        multi_point(&[(3.0, 0.0), (0.0, 0.0), (2.0, 0.0), (2.0, 0.0)]),
        multi_point(&[(1.0, 0.0), (3.0, 0.0), (0.0, 0.0)]),
        false,
    );
}

#[test]
fn boxes() {
    check(rect(1.0, 1.0, 2.0, 2.0), rect(1.0, 2.0, 2.0, 2.0), false);
    check(rect(1.0, 2.0, 3.0, 4.0), rect(1.0, 2.0, 3.0, 4.0), true);

    let ring = || polygon(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)], &[]);
    check(rect(1.0, 1.0, 2.0, 2.0), ring(), true);
    check(rect(1.0, 1.0, 2.0, 3.0), ring(), false);
}

#[test]
fn rotated_and_reversed_rings() {
    check(polygon(CASE_P1, &[]), polygon(CASE_P1, &[]), true);
    check(
        polygon(&[(2.0, 2.0), (0.0, 0.0), (0.0, 2.0), (2.0, 2.0)], &[]),
        polygon(CASE_P1, &[]),
        true,
    );
    check(
        polygon(CASE_P1, &[]),
        polygon(&[(0.0, 2.0), (2.0, 2.0), (0.0, 0.0), (0.0, 2.0)], &[]),
        true,
    );
    check(
        polygon(CASE_P1, &[]),
        polygon(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)], &[]),
        true,
    );
}

#[test]
fn rings_with_extra_points() {
    check(
        polygon(CASE_P1, &[]),
        polygon(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (1.0, 1.0), (0.0, 0.0)], &[]),
        true,
    );
    check(
        polygon(&[(2.0, 2.0), (1.0, 1.0), (0.0, 0.0), (0.0, 2.0), (2.0, 2.0)], &[]),
        polygon(CASE_P1, &[]),
        true,
    );
    check(
        polygon(&[(1.0, 1.0), (0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (1.0, 1.0)], &[]),
        polygon(CASE_P1, &[]),
        true,
    );
    check(
        polygon(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 2.0), (0.0, 0.0)], &[]),
        polygon(&[(0.0, 0.0), (0.0, 2.0), (0.0, 2.0), (2.0, 2.0), (0.0, 0.0)], &[]),
        true,
    );
}

#[test]
fn same_area_different_shape() {
    check(
        polygon(
            &[(4.0, 0.0), (5.0, 3.0), (8.0, 4.0), (7.0, 7.0), (4.0, 8.0), (0.0, 4.0), (4.0, 0.0)],
            &[],
        ),
        polygon(
            &[(4.0, 0.0), (7.0, 1.0), (8.0, 4.0), (5.0, 5.0), (4.0, 8.0), (0.0, 4.0), (4.0, 0.0)],
            &[],
        ),
        false,
    );
    check(
        polygon(CASE_P1, &[]),
        polygon(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (1.0, 1.0)], &[]),
        false,
    );
}

#[test]
fn holes() {
    check(polygon(TRIANGLE_4, &[]), polygon(TRIANGLE_4, &[HOLE_1]), false);
    check(polygon(TRIANGLE_4, &[HOLE_1]), polygon(TRIANGLE_4, &[HOLE_1]), true);
    check(polygon(TRIANGLE_4, &[HOLE_1]), polygon(TRIANGLE_4, &[HOLE_2]), false);
    check(
        polygon(TRIANGLE_4, &[HOLE_1, HOLE_2]),
        polygon(TRIANGLE_4, &[HOLE_2, HOLE_1]),
        true,
    );

    let big = &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (0.0, 0.0)];
    let hole_3: &[(f64, f64)] = &[(4.0, 1.0), (5.0, 1.0), (5.0, 2.0), (4.0, 2.0), (4.0, 1.0)];
    check(
        polygon(big, &[HOLE_1, hole_3, HOLE_2]),
        polygon(big, &[hole_3, HOLE_2, HOLE_1]),
        true,
    );
}

#[test]
fn multipolygons() {
    let case1: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 7.0), (4.0, 2.0), (2.0, 0.0), (0.0, 0.0)];
    let other: &[(f64, f64)] = &[(10.0, 10.0), (10.0, 12.0), (12.0, 10.0), (10.0, 10.0)];

    check(multi_polygon(&[case1]), multi_polygon(&[case1]), true);
    check(
        multi_polygon(&[&[(0.0, 0.0), (0.0, 7.01), (4.0, 2.0), (2.0, 0.0), (0.0, 0.0)]]),
        multi_polygon(&[case1]),
        false,
    );
    check(multi_polygon(&[case1, other]), multi_polygon(&[other, case1]), true);
    check(polygon(case1, &[]), multi_polygon(&[case1]), true);
}

#[test]
fn different_dimensions_are_not_equal() {
    check(line(CASE_P1), polygon(CASE_P1, &[]), false);
    check(
        multi_point(&[(0.0, 0.0), (1.0, 1.0)]),
        line(&[(0.0, 0.0), (1.0, 1.0)]),
        false,
    );
}
