//! Union of two areal geometries.
//!
//! The rings of both inputs are oriented with the interior on the left side and split at their mutual
//! intersection points. A piece of the boundary of one input belongs to the boundary of the union if it lies in the
//! exterior of the other input. Pieces shared by both inputs are kept once if the interiors of both inputs are on
//! the same side of them, and dropped otherwise. The kept pieces are then stitched back into rings.

use std::f64::consts::TAU;

use geotopo_types::cartesian::{CartesianClosedContour, Point2d};
use geotopo_types::impls::{ClosedContour, MultiPolygon, Polygon};

use crate::noding::{midpoint, Noding};
use crate::relate::{locate_point, ring_contains, Location};
use crate::view::GeometryView;
use crate::{Tolerance, TopologyError};

type Edge = (Point2d, Point2d);

/// Union of two areal geometries.
///
/// Shells of the result are counterclockwise, holes are clockwise. Vertices created at the intersection points are
/// kept in the result even if they are collinear with their neighbours.
pub(crate) fn union(
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
) -> Result<MultiPolygon<Point2d>, TopologyError> {
    for view in [a, b] {
        if view.dimension() != 2 {
            return Err(TopologyError::UnsupportedGeometry {
                operation: "union",
                kind: view.kind(),
            });
        }
    }

    let noding = Noding::new(&oriented_edges(a), &oriented_edges(b), tolerance);
    let edges = select_edges(&noding, a, b, tolerance);
    let rings = stitch(&edges, tolerance);
    let result = assemble(rings, tolerance);

    log::debug!(
        "Union of {} and {}: {} edges, {} polygons",
        a.kind(),
        b.kind(),
        edges.len(),
        result.parts().len()
    );

    Ok(result)
}

/// Segments of all rings directed so that the interior is on their left.
fn oriented_edges(view: &GeometryView) -> Vec<Edge> {
    let mut edges = vec![];
    for (multi_index, ring_index, range) in view.ranges() {
        let forward = view.interior_on_left(multi_index, ring_index);
        edges.extend(
            range
                .segments()
                .map(|(start, end)| if forward { (start, end) } else { (end, start) }),
        );
    }

    edges
}

fn select_edges(
    noding: &Noding,
    a: &GeometryView,
    b: &GeometryView,
    tolerance: &Tolerance,
) -> Vec<Edge> {
    let mut edges = vec![];
    for piece in &noding.pieces_a {
        match locate_point(&midpoint(&piece.0, &piece.1), b, tolerance) {
            Location::Exterior => edges.push(*piece),
            Location::Interior => {}
            Location::Boundary => {
                let same_side = noding.pieces_b.iter().any(|other| {
                    tolerance.points_equal(&piece.0, &other.0)
                        && tolerance.points_equal(&piece.1, &other.1)
                });
                if same_side {
                    edges.push(*piece);
                }
            }
        }
    }

    // shared pieces were already taken from the first geometry
    for piece in &noding.pieces_b {
        if locate_point(&midpoint(&piece.0, &piece.1), a, tolerance) == Location::Exterior {
            edges.push(*piece);
        }
    }

    edges
}

/// Joins edges into closed rings. At a node with several outgoing edges the one that is the first clockwise from
/// the incoming edge is taken, so rings touching at a single point are kept apart.
fn stitch(edges: &[Edge], tolerance: &Tolerance) -> Vec<Vec<Point2d>> {
    let mut used = vec![false; edges.len()];
    let mut rings = vec![];

    for first in 0..edges.len() {
        if used[first] {
            continue;
        }

        used[first] = true;
        let start = edges[first].0;
        let mut ring = vec![start];
        let mut current = edges[first];
        loop {
            if tolerance.points_equal(&current.1, &start) {
                rings.push(ring);
                break;
            }

            ring.push(current.1);
            let Some(next) = next_edge(edges, &used, &current, tolerance) else {
                log::debug!("Dropping unclosed chain of {} points", ring.len());
                break;
            };
            used[next] = true;
            current = edges[next];
        }
    }

    rings
}

fn next_edge(edges: &[Edge], used: &[bool], incoming: &Edge, tolerance: &Tolerance) -> Option<usize> {
    let back = incoming.0 - incoming.1;
    let back_angle = back.y.atan2(back.x);

    edges
        .iter()
        .enumerate()
        .filter(|(index, edge)| !used[*index] && tolerance.points_equal(&edge.0, &incoming.1))
        .map(|(index, edge)| {
            let direction = edge.1 - edge.0;
            let turn = (back_angle - direction.y.atan2(direction.x)).rem_euclid(TAU);
            (index, if turn == 0.0 { TAU } else { turn })
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Sorts rings into shells and holes. Every hole goes to the smallest shell containing it.
fn assemble(rings: Vec<Vec<Point2d>>, tolerance: &Tolerance) -> MultiPolygon<Point2d> {
    let mut shells: Vec<(f64, Polygon<Point2d>)> = vec![];
    let mut holes = vec![];

    for points in rings {
        if points.len() < 3 {
            continue;
        }

        let ring = ClosedContour::new(points);
        let area = ring.area_signed();
        if tolerance.equals(area, 0.0) {
            log::debug!("Dropping ring with zero area");
        } else if area > 0.0 {
            shells.push((area, Polygon::from(ring)));
        } else {
            holes.push(ring);
        }
    }

    for hole in holes {
        let sample = midpoint(&hole.points[0], &hole.points[1]);
        let shell = shells
            .iter_mut()
            .filter(|(_, shell)| ring_contains(&sample, &shell.outer_contour.points))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        match shell {
            Some((_, shell)) => shell.inner_contours.push(hole),
            None => log::debug!("Dropping hole outside of all shells"),
        }
    }

    shells
        .into_iter()
        .map(|(_, polygon)| polygon)
        .collect::<Vec<_>>()
        .into()
}
