//! Turns between a linear and an areal geometry.
//!
//! A turn is a point where a linestring meets the boundary of a polygon. For every linestring location touching
//! a polygon one turn is generated per polygon. The operation of the linestring describes where the linestring
//! goes after the turn point:
//!
//! * [`Operation::Intersection`] - into the interior of the polygon,
//! * [`Operation::Union`] - into the exterior of the polygon,
//! * [`Operation::Continue`] - along the boundary of the polygon,
//! * [`Operation::Blocked`] - nowhere, the linestring ends at this point.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use geotopo_types::cartesian::{Orientation, Point2d};
use geotopo_types::Polygon as _;

use crate::intersection::{segment_intersection, IntersectionPoint, SegmentIntersection};
use crate::relate::locate::{locate_in_polygon, PointLocator};
use crate::relate::matrix::{Dimension, Location, RelateResult};
use crate::tolerance::scale;
use crate::view::{GeometryView, RangeRef};
use crate::Tolerance;

/// Operation of one geometry at a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Operation {
    None,
    Union,
    Intersection,
    Blocked,
    Continue,
}

impl Operation {
    /// Rank used to sort turns at the same location: blocked, union, continue, intersection.
    fn rank(self) -> u8 {
        match self {
            Operation::None => 0,
            Operation::Blocked => 1,
            Operation::Union => 2,
            Operation::Continue => 3,
            Operation::Intersection => 4,
        }
    }
}

/// Position of the turn point on the linestring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Position {
    /// First point of an open linestring.
    Front,
    Middle,
    /// Last point of an open linestring.
    Back,
}

/// Address of a segment: `(multi_index, ring_index, segment_index)`. Exterior rings (`None`) sort before holes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SegmentId {
    pub multi_index: usize,
    pub ring_index: Option<usize>,
    pub segment_index: usize,
}

/// Operation record of one of the geometries at a turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct TurnOperation {
    pub seg_id: SegmentId,
    pub operation: Operation,
    pub position: Position,
    /// The geometry arrives at the turn point along the boundary of the other geometry.
    pub is_collinear: bool,
    /// Position of the turn point on the segment.
    pub fraction: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Turn {
    pub point: Point2d,
    pub operations: [TurnOperation; 2],
}

/// Turns of one linestring, in the order they are met when walking along it.
#[derive(Debug, Clone)]
pub(crate) struct LinestringTurns {
    pub multi_index: usize,
    /// Location of the walk start of a closed linestring. Open linestrings are walked from their first point.
    pub start: Option<Location>,
    pub turns: Vec<Turn>,
}

/// Point of a closed linestring away from the areal boundary. The walk along the linestring starts and ends here,
/// so the seam of the ring never falls on the boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
struct WalkStart {
    segment: usize,
    fraction: f64,
    location: Location,
}

/// Orders the turns of one linestring along the walk.
fn sort_turns(turns: &mut [Turn], start: Option<WalkStart>, segment_count: usize) {
    let position = |op: &TurnOperation| {
        let index = op.seg_id.segment_index;
        match start {
            None => index,
            Some(start) if index == start.segment && op.fraction < start.fraction => segment_count,
            Some(start) => (index + segment_count - start.segment) % segment_count,
        }
    };

    turns.sort_by(|a, b| {
        let (op_a, op_b) = (&a.operations[0], &b.operations[0]);
        position(op_a)
            .cmp(&position(op_b))
            .then_with(|| op_a.fraction.total_cmp(&op_b.fraction))
            .then_with(|| op_a.operation.rank().cmp(&op_b.operation.rank()))
            .then_with(|| a.operations[1].seg_id.cmp(&b.operations[1].seg_id))
    });
}

/// Applied to the turns as soon as they are found, to stop the computation early.
fn apply_interrupt_policy(turns: &[Turn], areal: &GeometryView, result: &mut impl RelateResult) {
    for turn in turns {
        let op = &turn.operations[0];
        match op.operation {
            Operation::Intersection => {
                let has_holes = areal
                    .polygons()
                    .get(turn.operations[1].seg_id.multi_index)
                    .map_or(false, |polygon| polygon.has_holes());
                if !has_holes {
                    result.update(Location::Interior, Location::Interior, Dimension::One);
                }
            }
            Operation::Continue => {
                result.update(Location::Interior, Location::Boundary, Dimension::One);
            }
            Operation::Union | Operation::Blocked if op.position == Position::Middle => {
                result.update(Location::Interior, Location::Boundary, Dimension::Zero);
            }
            _ => {}
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct Hit {
    point: Point2d,
    segment: usize,
    t: f64,
    ring_index: Option<usize>,
    ring_segment: usize,
    tb: f64,
}

/// A piece of the polygon boundary starting at a turn point.
#[derive(Debug, Copy, Clone)]
struct Ray {
    end: Point2d,
    /// Whether the polygon interior is immediately counterclockwise from the ray.
    interior_ccw: bool,
}

/// Finds the turns between every linestring of `linear` and every polygon of `areal`.
///
/// Only the linestrings with turns are returned, each one with its turns sorted along the walk. The interrupt
/// policy is applied to `result` for every linestring, and the search stops early if the result is interrupted.
pub(crate) fn linear_areal_turns(
    linear: &GeometryView,
    areal: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) -> Vec<LinestringTurns> {
    let locator = PointLocator::new(areal, tolerance);
    let polygons: Vec<Vec<(Option<usize>, RangeRef)>> = (0..areal.polygons().len())
        .map(|polygon_index| {
            areal
                .ranges()
                .filter(|(index, _, _)| *index == polygon_index)
                .map(|(_, ring_index, ring)| (ring_index, ring))
                .collect()
        })
        .collect();

    let mut linestrings = vec![];
    for (multi_index, _, range) in linear.ranges() {
        let Some(range_envelope) = range.envelope() else {
            continue;
        };

        let mut polygon_hits = vec![];
        for (polygon_index, rings) in polygons.iter().enumerate() {
            let polygon_envelope = rings.first().and_then(|(_, ring)| ring.envelope());
            if polygon_envelope.is_some_and(|envelope| {
                let margin = tolerance.margin(scale(&envelope.into_quadrangle()));
                envelope.expand(margin).intersects(&range_envelope)
            }) {
                polygon_hits.push((polygon_index, find_hits(&range, rings, tolerance)));
            }
        }

        let start = if range.is_closed {
            let hits: Vec<Hit> = polygon_hits
                .iter()
                .flat_map(|(_, hits)| hits.iter().copied())
                .collect();
            match walk_start(&range, &hits, &locator) {
                Some(start) => Some(start),
                None => {
                    log::trace!("Closed linestring {multi_index} lies on the areal boundary");
                    continue;
                }
            }
        } else {
            None
        };

        let mut turns = vec![];
        for (polygon_index, hits) in polygon_hits {
            turns.extend(turns_from_hits(
                multi_index,
                &range,
                polygon_index,
                &polygons[polygon_index],
                areal,
                hits,
                tolerance,
            ));
        }
        if turns.is_empty() {
            continue;
        }

        sort_turns(&mut turns, start, range.segment_count());
        apply_interrupt_policy(&turns, areal, result);
        linestrings.push(LinestringTurns {
            multi_index,
            start: start.map(|start| start.location),
            turns,
        });
        if result.interrupt() {
            break;
        }
    }

    log::debug!(
        "Found {} linear/areal turns on {} linestrings",
        linestrings.iter().map(|l| l.turns.len()).sum::<usize>(),
        linestrings.len()
    );
    linestrings
}

/// Finds a point of a closed linestring that is not on the areal boundary. Such a point lies between two
/// consecutive hits of some segment. Returns `None` if the whole linestring lies on the boundary.
fn walk_start(range: &RangeRef, hits: &[Hit], locator: &PointLocator) -> Option<WalkStart> {
    for (segment, (p0, p1)) in range.segments().enumerate() {
        let mut fractions: Vec<f64> = hits
            .iter()
            .filter(|hit| hit.segment == segment)
            .map(|hit| hit.t)
            .chain([0.0, 1.0])
            .collect();
        fractions.sort_by(f64::total_cmp);
        fractions.dedup();

        for pair in fractions.windows(2) {
            let fraction = (pair[0] + pair[1]) / 2.0;
            let location = locator.locate(&(p0 + (p1 - p0) * fraction));
            if location != Location::Boundary {
                return Some(WalkStart {
                    segment,
                    fraction,
                    location,
                });
            }
        }
    }

    None
}

fn find_hits(
    range: &RangeRef,
    rings: &[(Option<usize>, RangeRef)],
    tolerance: &Tolerance,
) -> Vec<Hit> {
    let segment_count = range.segment_count();
    let mut hits = vec![];
    for (s, (p0, p1)) in range.segments().enumerate() {
        for (ring_index, ring) in rings {
            let ring_segments = ring.segment_count();
            for (q, (q0, q1)) in ring.segments().enumerate() {
                let mut push = |ip: IntersectionPoint| {
                    let (segment, t) = if ip.ta > 0.0 {
                        (s, ip.ta)
                    } else if s > 0 {
                        (s - 1, 1.0)
                    } else if range.is_closed {
                        (segment_count - 1, 1.0)
                    } else {
                        (0, 0.0)
                    };
                    let (ring_segment, tb) = if ip.tb > 0.0 {
                        (q, ip.tb)
                    } else {
                        ((q + ring_segments - 1) % ring_segments, 1.0)
                    };

                    hits.push(Hit {
                        point: ip.point,
                        segment,
                        t,
                        ring_index: *ring_index,
                        ring_segment,
                        tb,
                    });
                };

                match segment_intersection(&p0, &p1, &q0, &q1, tolerance) {
                    SegmentIntersection::Disjoint => {}
                    SegmentIntersection::Point(ip) => push(ip),
                    SegmentIntersection::Overlap(first, last) => {
                        push(first);
                        push(last);
                    }
                }
            }
        }
    }

    hits
}

fn turns_from_hits(
    multi_index: usize,
    range: &RangeRef,
    polygon_index: usize,
    rings: &[(Option<usize>, RangeRef)],
    areal: &GeometryView,
    mut hits: Vec<Hit>,
    tolerance: &Tolerance,
) -> Vec<Turn> {
    hits.sort_by(|a, b| {
        a.segment
            .cmp(&b.segment)
            .then_with(|| a.t.total_cmp(&b.t))
            .then_with(|| a.ring_index.cmp(&b.ring_index))
            .then_with(|| a.ring_segment.cmp(&b.ring_segment))
    });

    let mut groups: Vec<Vec<Hit>> = vec![];
    for hit in hits {
        match groups.last_mut() {
            Some(group)
                if group[0].segment == hit.segment
                    && tolerance.points_equal(&group[0].point, &hit.point) =>
            {
                group.push(hit)
            }
            _ => groups.push(vec![hit]),
        }
    }

    let last_segment = range.segment_count().saturating_sub(1);
    let mut turns = vec![];
    for group in groups {
        let hit = group[0];
        let areal_hit = group
            .iter()
            .min_by(|a, b| {
                a.ring_index
                    .cmp(&b.ring_index)
                    .then_with(|| a.ring_segment.cmp(&b.ring_segment))
            })
            .copied()
            .unwrap_or(hit);

        let position = if range.is_closed {
            Position::Middle
        } else if hit.segment == 0 && hit.t == 0.0 {
            Position::Front
        } else if hit.segment == last_segment && hit.t == 1.0 {
            Position::Back
        } else {
            Position::Middle
        };

        let before = (hit.t > 0.0).then(|| range.point(hit.segment));
        let after = if hit.t < 1.0 {
            Some(range.point(hit.segment + 1))
        } else if position == Position::Back {
            None
        } else {
            Some(range.point(hit.segment + 2))
        };

        let rays = boundary_rays(&hit.point, polygon_index, rings, areal, tolerance);
        let classify = |target: &Point2d| {
            classify_direction(&hit.point, target, &rays, tolerance).unwrap_or_else(|| {
                let middle = Point2d::new(
                    (hit.point.x + target.x) / 2.0,
                    (hit.point.y + target.y) / 2.0,
                );
                areal
                    .polygons()
                    .get(polygon_index)
                    .map_or(Location::Exterior, |polygon| {
                        locate_in_polygon(&middle, polygon, tolerance)
                    })
            })
        };

        let before_location = before.map(|p| classify(&p));
        let after_location = after.map(|p| classify(&p));
        if position == Position::Middle
            && before_location == Some(Location::Boundary)
            && after_location == Some(Location::Boundary)
        {
            continue;
        }

        let operation = match after_location {
            None => Operation::Blocked,
            Some(Location::Boundary) => Operation::Continue,
            Some(Location::Interior) => Operation::Intersection,
            Some(Location::Exterior) => Operation::Union,
        };

        log::trace!(
            "Turn at {:?}: {:?} {:?} (before: {:?}, after: {:?})",
            hit.point,
            operation,
            position,
            before_location,
            after_location
        );

        turns.push(Turn {
            point: hit.point,
            operations: [
                TurnOperation {
                    seg_id: SegmentId {
                        multi_index,
                        ring_index: None,
                        segment_index: hit.segment,
                    },
                    operation,
                    position,
                    is_collinear: before_location == Some(Location::Boundary),
                    fraction: hit.t,
                },
                TurnOperation {
                    seg_id: SegmentId {
                        multi_index: polygon_index,
                        ring_index: areal_hit.ring_index,
                        segment_index: areal_hit.ring_segment,
                    },
                    operation: Operation::None,
                    position: Position::Middle,
                    is_collinear: false,
                    fraction: areal_hit.tb,
                },
            ],
        });
    }

    turns
}

fn boundary_rays(
    point: &Point2d,
    polygon_index: usize,
    rings: &[(Option<usize>, RangeRef)],
    areal: &GeometryView,
    tolerance: &Tolerance,
) -> Vec<Ray> {
    let mut rays = vec![];
    for (ring_index, ring) in rings {
        let interior_left = areal.interior_on_left(polygon_index, *ring_index);
        for (q0, q1) in ring.segments() {
            if !tolerance.is_point_on_segment(point, &q0, &q1) {
                continue;
            }

            if !tolerance.points_equal(point, &q1) {
                rays.push(Ray {
                    end: q1,
                    interior_ccw: interior_left,
                });
            }
            if !tolerance.points_equal(point, &q0) {
                rays.push(Ray {
                    end: q0,
                    interior_ccw: !interior_left,
                });
            }
        }
    }

    rays
}

/// Location of the points immediately after `origin` in the direction of `target`. Returns `None` if there are no
/// boundary rays to classify against.
fn classify_direction(
    origin: &Point2d,
    target: &Point2d,
    rays: &[Ray],
    tolerance: &Tolerance,
) -> Option<Location> {
    let direction = target - origin;
    let mut best: Option<(f64, &Ray)> = None;
    for ray in rays {
        let ray_direction = ray.end - origin;
        if tolerance.side(origin, &ray.end, target) == Orientation::Collinear
            && ray_direction.dot(&direction) > 0.0
        {
            return Some(Location::Boundary);
        }

        let mut angle = ray_direction
            .perp(&direction)
            .atan2(ray_direction.dot(&direction));
        if angle <= 0.0 {
            angle += TAU;
        }

        if best.map_or(true, |(best_angle, _)| angle < best_angle) {
            best = Some((angle, ray));
        }
    }

    best.map(|(_, ray)| {
        if ray.interior_ccw {
            Location::Interior
        } else {
            Location::Exterior
        }
    })
}
