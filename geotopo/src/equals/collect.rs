//! Collection of the canonical vectors of linestrings and rings.

use geotopo_types::cartesian::{CartesianClosedContour, Point2d, Winding};
use geotopo_types::impls::ClosedContour;

use crate::equals::collected_vector::CollectedVector;
use crate::equals::segments_info::{SegmentCheck, SegmentKey, SegmentsInfo};
use crate::view::{GeometryView, RangeRef};
use crate::Tolerance;

/// Collects vectors of all rings of an areal geometry.
///
/// Exterior rings are traversed clockwise and holes counterclockwise, independently of the orientation they are
/// stored with.
pub(crate) fn collect_areal(view: &GeometryView, tolerance: &Tolerance) -> Vec<CollectedVector> {
    let mut vectors = vec![];
    for polygon in view.polygons() {
        collect_ring(&polygon.outer_contour, Winding::Clockwise, tolerance, &mut vectors);
        for hole in &polygon.inner_contours {
            collect_ring(hole, Winding::CounterClockwise, tolerance, &mut vectors);
        }
    }

    vectors
}

fn collect_ring(
    ring: &ClosedContour<Point2d>,
    winding: Winding,
    tolerance: &Tolerance,
    out: &mut Vec<CollectedVector>,
) {
    let reversed;
    let points = if ring.winding() == winding {
        &ring.points
    } else {
        reversed = ring.reversed();
        &reversed.points
    };

    let range = RangeRef {
        points,
        is_closed: true,
    };
    collect_range(&range, 0, true, None, tolerance, out);
}

/// Collects non-directional vectors of all linestrings of a linear geometry.
///
/// With `segments_info` the retraced and overlapping parts of non-simple linestrings produce their vectors only
/// once.
pub(crate) fn collect_linear(
    view: &GeometryView,
    mut segments_info: Option<&mut SegmentsInfo>,
    tolerance: &Tolerance,
) -> Vec<CollectedVector> {
    let mut vectors = vec![];
    for (range_index, (_, _, range)) in view.ranges().enumerate() {
        collect_range(
            &range,
            range_index,
            false,
            segments_info.as_deref_mut(),
            tolerance,
            &mut vectors,
        );
    }

    vectors
}

/// Pushes the vectors of one range into `out`, merging vectors of consecutive collinear segments.
fn collect_range(
    range: &RangeRef,
    range_index: usize,
    directional: bool,
    mut segments_info: Option<&mut SegmentsInfo>,
    tolerance: &Tolerance,
    out: &mut Vec<CollectedVector>,
) {
    let start = out.len();
    let mut first_segment = None;
    let mut last_segment: Option<usize> = None;

    for (index, (a, b)) in range.segments().enumerate() {
        let check = match segments_info.as_deref_mut() {
            Some(info) => info.check_segment(SegmentKey {
                range: range_index,
                index,
            }),
            None => SegmentCheck::NotShared,
        };
        let vector = match check {
            SegmentCheck::Vector(vector) => vector,
            SegmentCheck::Used => continue,
            SegmentCheck::NotShared => {
                match CollectedVector::from_segment(&a, &b, directional, tolerance) {
                    Some(vector) => vector,
                    None => continue,
                }
            }
        };

        let follows_last = last_segment.is_some_and(|last| last + 1 == index);
        last_segment = Some(index);
        if let Some(last) = out[start..].last_mut() {
            if follows_last && last.equal_direction(&vector, tolerance) {
                if !directional {
                    last.merge_origin(&vector.origin, tolerance);
                }
                continue;
            }
        }

        first_segment.get_or_insert(index);
        out.push(vector);
    }

    // the seam of a closed range may be in the middle of a straight run
    let wraps = range.is_closed
        && first_segment == Some(0)
        && last_segment == Some(range.segment_count() - 1);
    if wraps && out.len() - start > 1 {
        let first = out[start];
        if let Some(last) = out.last_mut() {
            if first.equal_direction(last, tolerance) {
                if !directional {
                    last.merge_origin(&first.origin, tolerance);
                }
                out.remove(start);
            }
        }
    }
}
