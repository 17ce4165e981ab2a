//! Shared vectors of coincident segments.
//!
//! A non-simple linear geometry may pass the same point several times, and may trace the same line more than once.
//! Collecting one vector per segment run would then produce a different set of vectors than for a simple geometry
//! covering the same points. [`SegmentsInfo`] finds all segments touching the points that occur more than once,
//! and assigns the same vector to all of them that go in the same direction. The vector is emitted only for the
//! first of these segments.

use std::ops::Range;

use geotopo_types::cartesian::Point2d;

use crate::equals::collected_vector::CollectedVector;
use crate::tolerance::lexicographic;
use crate::view::{GeometryView, RangeRef};
use crate::Tolerance;

/// Address of a point or a segment: index of the linestring and index of the point (segment) in it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SegmentKey {
    pub range: usize,
    pub index: usize,
}

/// Result of [`SegmentsInfo::check_segment`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum SegmentCheck {
    /// The segment does not share its vector with other segments.
    NotShared,
    /// The shared vector was already emitted for another segment.
    Used,
    /// First request of the shared vector.
    Vector(CollectedVector),
}

#[derive(Debug, Clone)]
struct SegmentInfo {
    point_group: usize,
    segment: SegmentKey,
    vector: CollectedVector,
    shared: Option<usize>,
}

#[derive(Debug, Clone)]
struct SharedVector {
    vector: CollectedVector,
    available: bool,
}

/// Index of the segments that share vectors in a linear geometry.
#[derive(Debug)]
pub(crate) struct SegmentsInfo {
    segments: Vec<SegmentInfo>,
    vectors: Vec<SharedVector>,
}

impl SegmentsInfo {
    pub fn new(view: &GeometryView, tolerance: &Tolerance) -> Self {
        let ranges: Vec<RangeRef> = view.ranges().map(|(_, _, range)| range).collect();
        let mut info = Self {
            segments: vec![],
            vectors: vec![],
        };

        info.fill_segments(&ranges, tolerance);
        let groups = equal_runs(&info.segments, |a, b| a.point_group == b.point_group);
        for group in groups {
            info.merge_touching(group, tolerance);
        }

        if !info.vectors.is_empty() {
            info.segments.sort_by_key(|s| s.segment);
            let duplicates = equal_runs(&info.segments, |a, b| a.segment == b.segment);
            for run in duplicates {
                info.merge_duplicated(run);
            }
        }

        log::trace!(
            "Found {} segments touching coincident points, {} shared vectors",
            info.segments.len(),
            info.vectors.len()
        );

        info
    }

    /// Checks whether the segment shares its vector with other segments. The shared vector is returned only once.
    pub fn check_segment(&mut self, segment: SegmentKey) -> SegmentCheck {
        if self.vectors.is_empty() {
            return SegmentCheck::NotShared;
        }

        let index = self.segments.partition_point(|s| s.segment < segment);
        let Some(shared) = self
            .segments
            .get(index)
            .filter(|s| s.segment == segment)
            .and_then(|s| s.shared)
        else {
            return SegmentCheck::NotShared;
        };

        let vector = &mut self.vectors[shared];
        if !vector.available {
            return SegmentCheck::Used;
        }

        vector.available = false;
        SegmentCheck::Vector(vector.vector)
    }

    /// Adds the segments around every point that occurs in the geometry more than once.
    fn fill_segments(&mut self, ranges: &[RangeRef], tolerance: &Tolerance) {
        let mut points: Vec<(Point2d, SegmentKey)> = ranges
            .iter()
            .enumerate()
            .flat_map(|(range_index, range)| {
                range.points.iter().enumerate().map(move |(index, p)| {
                    (
                        *p,
                        SegmentKey {
                            range: range_index,
                            index,
                        },
                    )
                })
            })
            .collect();
        points.sort_by(|a, b| lexicographic(&a.0, &b.0));

        // Points equal within the tolerance are not always neighbours in the exact order, so every point is compared
        // with the following ones that have a close `x`.
        let mut groups: Vec<Option<usize>> = vec![None; points.len()];
        let mut group_count = 0;
        for i in 0..points.len() {
            let group = *groups[i].get_or_insert_with(|| {
                group_count += 1;
                group_count - 1
            });
            let (p, _) = points[i];
            let margin = 2.0 * tolerance.margin(p.x);
            for j in i + 1..points.len() {
                if points[j].0.x > p.x + margin {
                    break;
                }
                if groups[j].is_none() && tolerance.points_equal(&p, &points[j].0) {
                    groups[j] = Some(group);
                }
            }
        }

        let mut grouped: Vec<(usize, SegmentKey)> = groups
            .into_iter()
            .zip(&points)
            .map(|(group, (_, key))| (group.unwrap_or_default(), *key))
            .collect();
        grouped.sort();

        let runs = equal_runs(&grouped, |a, b| a.0 == b.0);
        for (point_group, run) in runs.into_iter().enumerate() {
            let refs = &grouped[run];
            self.add_point(point_group, ranges, refs[0].1, tolerance);
            for pair in refs.windows(2) {
                let (prev, curr) = (pair[0].1, pair[1].1);
                if prev.range != curr.range || prev.index + 1 != curr.index {
                    self.add_point(point_group, ranges, curr, tolerance);
                }
            }
        }
    }

    fn add_point(
        &mut self,
        point_group: usize,
        ranges: &[RangeRef],
        point: SegmentKey,
        tolerance: &Tolerance,
    ) {
        let range = &ranges[point.range];
        let count = range.segment_count();
        let previous = match point.index {
            0 if range.is_closed => count.checked_sub(1),
            0 => None,
            index => Some(index - 1),
        };
        let next = (point.index < count).then_some(point.index);

        for index in previous.into_iter().chain(next) {
            let (a, b) = range.segment(index);
            if let Some(vector) = CollectedVector::from_segment(&a, &b, false, tolerance) {
                self.segments.push(SegmentInfo {
                    point_group,
                    segment: SegmentKey {
                        range: point.range,
                        index,
                    },
                    vector,
                    shared: None,
                });
            }
        }
    }

    /// Segments touching the same point in the same direction get the same vector.
    fn merge_touching(&mut self, group: Range<usize>, tolerance: &Tolerance) {
        for i in group.clone() {
            let mut shared: Option<usize> = None;
            for j in i + 1..group.end {
                if self.segments[j].shared.is_some() {
                    continue;
                }

                match shared {
                    None => {
                        let (first, second) = (&self.segments[i].vector, &self.segments[j].vector);
                        if first.equal_direction(second, tolerance) {
                            let mut vector = *first;
                            vector.merge_origin(&second.origin, tolerance);
                            self.vectors.push(SharedVector {
                                vector,
                                available: true,
                            });

                            let id = self.vectors.len() - 1;
                            shared = Some(id);
                            self.segments[i].shared = Some(id);
                            self.segments[j].shared = Some(id);
                        }
                    }
                    Some(id) => {
                        let candidate = self.segments[j].vector;
                        let vector = &mut self.vectors[id].vector;
                        if candidate.equal_direction(vector, tolerance) {
                            vector.merge_origin(&candidate.origin, tolerance);
                            self.segments[j].shared = Some(id);
                        }
                    }
                }
            }
        }
    }

    /// A segment touching two coincident points may have received two different vectors. All segments sharing any
    /// of them are moved to the one with the smallest origin.
    fn merge_duplicated(&mut self, run: Range<usize>) {
        let ids: Vec<usize> = self.segments[run.clone()]
            .iter()
            .filter_map(|s| s.shared)
            .collect();
        let Some(chosen) = ids.iter().copied().min_by(|a, b| {
            lexicographic(&self.vectors[*a].vector.origin, &self.vectors[*b].vector.origin)
        }) else {
            return;
        };

        for segment in &mut self.segments {
            if segment.shared.is_some_and(|id| ids.contains(&id)) {
                segment.shared = Some(chosen);
            }
        }
        for segment in &mut self.segments[run] {
            segment.shared = Some(chosen);
        }
    }
}

/// Ranges of consecutive equal items, longer than one item.
fn equal_runs<T>(items: &[T], equal: impl Fn(&T, &T) -> bool) -> Vec<Range<usize>> {
    let mut runs = vec![];
    let mut start = 0;
    for i in 1..=items.len() {
        if i == items.len() || !equal(&items[i - 1], &items[i]) {
            if i - start > 1 {
                runs.push(start..i);
            }
            start = i;
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::impls::{Contour, MultiContour};
    use geotopo_types::Geom;

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    fn key(range: usize, index: usize) -> SegmentKey {
        SegmentKey { range, index }
    }

    #[test]
    fn runs() {
        assert_eq!(equal_runs(&[1, 1, 2, 3, 3, 3, 4], |a, b| a == b), vec![0..2, 3..6]);
        assert!(equal_runs(&[1, 2, 3], |a, b| a == b).is_empty());
        assert!(equal_runs::<i32>(&[], |a, b| a == b).is_empty());
    }

    #[test]
    fn simple_linestring_has_no_shared_vectors() {
        let tolerance = Tolerance::default();
        let geom = Geom::Contour(Contour::open(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]));
        let view = GeometryView::new(&geom, &tolerance);
        let mut info = SegmentsInfo::new(&view, &tolerance);
        assert_eq!(info.check_segment(key(0, 0)), SegmentCheck::NotShared);
        assert_eq!(info.check_segment(key(0, 1)), SegmentCheck::NotShared);
    }

    #[test]
    fn retraced_segments_share_vector() {
        let tolerance = Tolerance::default();
        let geom = Geom::Contour(Contour::open(vec![
            p(0.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 10.0),
            p(10.0, 10.0),
            p(10.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 0.0),
        ]));
        let view = GeometryView::new(&geom, &tolerance);
        let mut info = SegmentsInfo::new(&view, &tolerance);

        let SegmentCheck::Vector(horizontal) = info.check_segment(key(0, 0)) else {
            panic!("segment is not shared");
        };
        assert_eq!(horizontal.origin, p(0.0, 5.0));

        let SegmentCheck::Vector(vertical) = info.check_segment(key(0, 1)) else {
            panic!("segment is not shared");
        };
        assert_eq!(vertical.origin, p(5.0, 0.0));

        assert_eq!(info.check_segment(key(0, 2)), SegmentCheck::NotShared);
        assert_eq!(info.check_segment(key(0, 4)), SegmentCheck::Used);
        assert_eq!(info.check_segment(key(0, 5)), SegmentCheck::Used);
    }

    #[test]
    fn coincident_points_within_tolerance() {
        let tolerance = Tolerance::default();
        let geom = Geom::Contour(Contour::open(vec![
            p(0.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 10.0),
            p(10.0, 10.0),
            p(10.0, 5.0),
            p(5.0 + 1e-14, 5.0),
            p(5.0, 0.0),
        ]));
        let view = GeometryView::new(&geom, &tolerance);
        let mut info = SegmentsInfo::new(&view, &tolerance);

        assert!(matches!(info.check_segment(key(0, 0)), SegmentCheck::Vector(_)));
        assert!(matches!(info.check_segment(key(0, 1)), SegmentCheck::Vector(_)));
        assert_eq!(info.check_segment(key(0, 4)), SegmentCheck::Used);
        assert_eq!(info.check_segment(key(0, 5)), SegmentCheck::Used);
    }

    #[test]
    fn continuation_in_another_linestring() {
        let tolerance = Tolerance::default();
        let geom = Geom::MultiContour(MultiContour::from(vec![
            Contour::open(vec![p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]),
            Contour::open(vec![p(3.0, 3.0), p(4.0, 4.0)]),
        ]));
        let view = GeometryView::new(&geom, &tolerance);
        let mut info = SegmentsInfo::new(&view, &tolerance);

        assert_eq!(info.check_segment(key(0, 0)), SegmentCheck::NotShared);
        let SegmentCheck::Vector(vector) = info.check_segment(key(0, 1)) else {
            panic!("segment is not shared");
        };
        assert_eq!(vector.origin, p(2.0, 2.0));
        assert_eq!(info.check_segment(key(1, 0)), SegmentCheck::Used);
    }
}
