//! Relate of a linear geometry with an areal geometry.
//!
//! The turns between the linestrings and the polygon boundaries are sorted along the linestrings and analysed one
//! by one. The analyser keeps track of the polygons the linestring is currently inside of, and updates the
//! matrix when the linestring enters or leaves them.

use std::cell::OnceCell;

use ahash::{HashSet, HashSetExt};
use geotopo_types::cartesian::Point2d;

use crate::noding::midpoint;
use crate::relate::boundary::{BoundaryChecker, BoundaryQuery};
use crate::relate::linear_linear::relate_linear_linear;
use crate::relate::locate::PointLocator;
use crate::relate::matrix::{Dimension, IntersectionMatrix, Location, RelateResult};
use crate::relate::turns::{linear_areal_turns, Operation, Position, SegmentId, Turn};
use crate::view::{GeometryView, RangeRef};
use crate::Tolerance;

use Location::{Boundary, Exterior, Interior};

/// Relates `linear` (first geometry) with `areal` (second geometry).
pub(crate) fn relate_linear_areal(
    linear: &GeometryView,
    areal: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    result.set(Exterior, Exterior, Dimension::Two);
    if result.interrupt() {
        return;
    }

    let linestrings = linear_areal_turns(linear, areal, tolerance, result);
    if result.interrupt() {
        return;
    }

    let boundary_checker = BoundaryChecker::new(linear, tolerance);
    let locator = PointLocator::new(areal, tolerance);

    let mut linestrings_with_turns = HashSet::new();
    let mut polygons_with_turns = HashSet::new();
    for linestring in &linestrings {
        linestrings_with_turns.insert(linestring.multi_index);
        for turn in &linestring.turns {
            polygons_with_turns.insert(turn.operations[1].seg_id.multi_index);
        }
    }

    let mut flags = 0u8;
    for (multi_index, _, range) in linear.ranges() {
        if linestrings_with_turns.contains(&multi_index) {
            continue;
        }

        flags |= relate_disjoint_linestring(&range, &locator, &boundary_checker, result);
        if flags == 0xF || result.interrupt() {
            break;
        }
    }
    if result.interrupt() {
        return;
    }

    let boundary_covered = OnceCell::new();
    let is_covered = || *boundary_covered.get_or_init(|| is_boundary_covered(areal, linear, tolerance));
    if (0..areal.polygons().len()).any(|index| !polygons_with_turns.contains(&index)) {
        result.update(Exterior, Interior, Dimension::Two);
        if !is_covered() {
            result.update(Exterior, Boundary, Dimension::One);
        }
    }
    if result.interrupt() || linestrings.is_empty() {
        return;
    }

    result.set(Exterior, Interior, Dimension::Two);
    if !is_covered() {
        result.set(Exterior, Boundary, Dimension::One);
    }
    if result.interrupt() {
        return;
    }

    let mut analyser = TurnsAnalyser::new(linear, areal, &boundary_checker, tolerance);
    for linestring in &linestrings {
        analyser.start(linestring.start);
        for turn in &linestring.turns {
            analyser.apply(turn, result);
            if result.interrupt() {
                return;
            }
        }
        analyser.finish(result);
    }
}

/// Linestring without any turns is either completely inside or completely outside of the areal geometry.
///
/// Returns the flags of the cells that were set: `1` II, `2` IE, `4` BI, `8` BE.
fn relate_disjoint_linestring(
    range: &RangeRef,
    locator: &PointLocator,
    boundary_checker: &BoundaryChecker,
    result: &mut impl RelateResult,
) -> u8 {
    let has_boundary = !range.is_closed
        && (boundary_checker.is_endpoint_boundary(&range.front(), BoundaryQuery::Front)
            || boundary_checker.is_endpoint_boundary(&range.back(), BoundaryQuery::Back));

    let mut location = locator.locate(&range.front());
    if location == Boundary {
        // A closed linestring may run along the boundary without producing turns.
        location = range
            .segments()
            .map(|(a, b)| locator.locate(&midpoint(&a, &b)))
            .find(|location| *location != Boundary)
            .unwrap_or(Boundary);
    }

    match location {
        Interior => {
            result.update(Interior, Interior, Dimension::One);
            if has_boundary {
                result.update(Boundary, Interior, Dimension::Zero);
                return 1 | 4;
            }
            1
        }
        Exterior => {
            result.update(Interior, Exterior, Dimension::One);
            if has_boundary {
                result.update(Boundary, Exterior, Dimension::Zero);
                return 2 | 8;
            }
            2
        }
        Boundary => {
            result.update(Interior, Boundary, Dimension::One);
            if has_boundary {
                result.update(Boundary, Boundary, Dimension::Zero);
            }
            0
        }
    }
}

/// Whether every point of the areal boundary lies on the linear geometry.
fn is_boundary_covered(areal: &GeometryView, linear: &GeometryView, tolerance: &Tolerance) -> bool {
    let Some(boundary) = areal.boundary() else {
        return false;
    };

    let mut matrix = IntersectionMatrix::new();
    relate_linear_linear(&boundary, linear, tolerance, &mut matrix);
    matrix.get(Interior, Exterior) == Dimension::False
}

/// Polygons the linestring is currently inside of, and the last detected exit.
#[derive(Debug, Default)]
struct ExitWatcher {
    entries: Vec<(Point2d, SegmentId)>,
    exit_operation: Option<(Operation, Point2d)>,
}

impl ExitWatcher {
    fn enter(&mut self, point: Point2d, other_id: SegmentId) {
        self.entries.push((point, other_id));
    }

    /// Leaves the polygon. Every entry into the polygon is dropped, the linestring may have entered it more than
    /// once on the way along its boundary.
    fn exit(&mut self, point: Point2d, other_id: SegmentId, operation: Operation) {
        let count = self.entries.len();
        self.entries
            .retain(|(_, id)| id.multi_index != other_id.multi_index);
        if self.entries.len() == count {
            return;
        }

        if self.entries.is_empty() {
            self.exit_operation = Some((operation, point));
        }
    }

    fn is_outside(&self) -> bool {
        self.entries.is_empty()
    }

    fn exit_operation(&self) -> Option<(Operation, Point2d)> {
        self.exit_operation
    }

    fn reset_detected_exit(&mut self) {
        self.exit_operation = None;
    }

    fn reset(&mut self) {
        self.exit_operation = None;
        self.entries.clear();
    }
}

struct TurnsAnalyser<'a> {
    linear: &'a GeometryView,
    areal: &'a GeometryView,
    boundary_checker: &'a BoundaryChecker<'a>,
    tolerance: Tolerance,
    exit_watcher: ExitWatcher,
    /// Location of the walk start of the current closed linestring.
    walk_start: Option<Location>,
    previous_turn: Option<Turn>,
    previous_operation: Operation,
    boundary_counter: u32,
    interior_detected: bool,
}

impl<'a> TurnsAnalyser<'a> {
    fn new(
        linear: &'a GeometryView,
        areal: &'a GeometryView,
        boundary_checker: &'a BoundaryChecker<'a>,
        tolerance: &Tolerance,
    ) -> Self {
        Self {
            linear,
            areal,
            boundary_checker,
            tolerance: *tolerance,
            exit_watcher: ExitWatcher::default(),
            walk_start: None,
            previous_turn: None,
            previous_operation: Operation::None,
            boundary_counter: 0,
            interior_detected: false,
        }
    }

    /// Prepares the analyser for the turns of the next linestring.
    fn start(&mut self, walk_start: Option<Location>) {
        self.walk_start = walk_start;
    }

    fn apply(&mut self, turn: &Turn, result: &mut impl RelateResult) {
        let op = turn.operations[0];
        let other_id = turn.operations[1].seg_id;
        if !matches!(
            op.operation,
            Operation::Union | Operation::Intersection | Operation::Blocked | Operation::Continue
        ) {
            return;
        }

        let first_in_range = self.previous_turn.is_none();

        log::trace!(
            "Analysing turn at {:?}: {:?} {:?}",
            turn.point,
            op.operation,
            op.position
        );

        let mut fake_enter_detected = false;
        match self.exit_watcher.exit_operation() {
            Some((Operation::Union, exit_point)) => {
                if !self.tolerance.points_equal(&turn.point, &exit_point) {
                    // the linestring really went out at the previous exit point
                    self.exit_watcher.reset_detected_exit();
                    result.update(Interior, Exterior, Dimension::One);
                } else if matches!(op.operation, Operation::Intersection | Operation::Continue) {
                    self.exit_watcher.reset_detected_exit();
                    fake_enter_detected = true;
                }
            }
            Some((Operation::Blocked, _)) => {
                if op.operation == Operation::Blocked {
                    return;
                }
                self.exit_watcher.reset_detected_exit();
            }
            _ => {}
        }

        if self.interior_detected {
            let previous_point = self.previous_turn.map(|t| t.point);
            if previous_point.map_or(true, |p| !self.tolerance.points_equal(&turn.point, &p)) {
                result.update(Interior, Interior, Dimension::One);
                self.interior_detected = false;
            } else if op.operation == Operation::Continue {
                self.interior_detected = false;
            }
        }

        match op.operation {
            Operation::Intersection | Operation::Continue => {
                let no_enters_detected = self.exit_watcher.is_outside();
                self.exit_watcher.enter(turn.point, other_id);

                if op.operation == Operation::Intersection {
                    if self.boundary_counter > 0 && op.is_collinear {
                        self.boundary_counter -= 1;
                    }
                    if self.boundary_counter == 0 {
                        // II is confirmed by the next turn, another ring may start at the same point
                        self.interior_detected = true;
                    }
                } else {
                    if first_in_range || !op.is_collinear {
                        self.boundary_counter += 1;
                    }
                    result.update(Interior, Boundary, Dimension::One);
                }

                if self
                    .boundary_checker
                    .is_on_boundary(&turn.point, &op, BoundaryQuery::Front)
                {
                    result.update(Boundary, Boundary, Dimension::Zero);
                } else {
                    result.update(Interior, Boundary, Dimension::Zero);

                    if no_enters_detected && !fake_enter_detected && op.position != Position::Front
                    {
                        let from_inside = first_in_range && self.is_from_inside(turn);
                        if from_inside {
                            result.update(Interior, Interior, Dimension::One);
                        } else {
                            result.update(Interior, Exterior, Dimension::One);
                        }

                        if first_in_range && self.is_front_boundary(op.seg_id) {
                            let location = if from_inside { Interior } else { Exterior };
                            result.update(Boundary, location, Dimension::Zero);
                        }
                    }
                }
            }
            Operation::Union | Operation::Blocked => {
                let is_blocked = op.operation == Operation::Blocked;
                let no_enters_detected = self.exit_watcher.is_outside();

                if is_blocked {
                    self.boundary_counter = 0;
                } else if self.boundary_counter > 0 && op.is_collinear {
                    self.boundary_counter -= 1;
                }

                if !no_enters_detected {
                    if is_blocked
                        && self
                            .boundary_checker
                            .is_endpoint_boundary(&turn.point, BoundaryQuery::Back)
                    {
                        result.update(Boundary, Boundary, Dimension::Zero);
                    }
                } else {
                    let this_boundary = self.boundary_checker.is_on_boundary(
                        &turn.point,
                        &op,
                        BoundaryQuery::Any,
                    );
                    if this_boundary {
                        result.update(Boundary, Boundary, Dimension::Zero);
                    } else {
                        result.update(Interior, Boundary, Dimension::Zero);
                    }

                    if op.position != Position::Front {
                        let from_inside = first_in_range && self.is_from_inside(turn);
                        if from_inside {
                            result.update(Interior, Interior, Dimension::One);
                            self.exit_watcher.enter(turn.point, other_id);
                        } else {
                            result.update(Interior, Exterior, Dimension::One);
                        }

                        if first_in_range
                            && (!this_boundary || is_blocked)
                            && self.is_front_boundary(op.seg_id)
                        {
                            let location = if from_inside { Interior } else { Exterior };
                            result.update(Boundary, location, Dimension::Zero);
                        }
                    }
                }

                // along the boundary the linestring leaves only if it arrived collinear
                if self.boundary_counter == 0 || op.is_collinear {
                    self.exit_watcher.exit(turn.point, other_id, op.operation);
                }
            }
            Operation::None => {}
        }

        self.previous_turn = Some(*turn);
        self.previous_operation = op.operation;
    }

    /// Handles the end of the current linestring.
    fn finish(&mut self, result: &mut impl RelateResult) {
        let previous_seg_id = self.previous_turn.map(|turn| turn.operations[0].seg_id);
        match self.previous_operation {
            Operation::Union => {
                result.update(Interior, Exterior, Dimension::One);
                if previous_seg_id.is_some_and(|id| self.is_back_boundary(id)) {
                    result.update(Boundary, Exterior, Dimension::Zero);
                }
            }
            Operation::Intersection => {
                result.update(Interior, Interior, Dimension::One);
                if previous_seg_id.is_some_and(|id| self.is_back_boundary(id)) {
                    result.update(Boundary, Interior, Dimension::Zero);
                }
            }
            _ => {}
        }

        if self.interior_detected {
            result.update(Interior, Interior, Dimension::One);
            self.interior_detected = false;
        }

        debug_assert!(
            self.previous_operation != Operation::Continue,
            "linestring cannot end with a continue operation"
        );

        self.exit_watcher.reset();
        self.boundary_counter = 0;
        self.previous_operation = Operation::None;
        self.previous_turn = None;
        self.walk_start = None;
    }

    fn is_front_boundary(&self, seg_id: SegmentId) -> bool {
        self.linear
            .range(seg_id.multi_index, None)
            .is_some_and(|range| {
                !range.is_closed
                    && self
                        .boundary_checker
                        .is_endpoint_boundary(&range.front(), BoundaryQuery::Front)
            })
    }

    fn is_back_boundary(&self, seg_id: SegmentId) -> bool {
        self.linear
            .range(seg_id.multi_index, None)
            .is_some_and(|range| {
                !range.is_closed
                    && self
                        .boundary_checker
                        .is_endpoint_boundary(&range.back(), BoundaryQuery::Back)
            })
    }

    /// Whether the part of the linestring before the first turn is inside the areal geometry.
    fn is_from_inside(&self, turn: &Turn) -> bool {
        match self.walk_start {
            Some(location) => location == Interior,
            None => self.calculate_from_inside(turn),
        }
    }

    /// Whether the part of an open linestring before the first turn is inside the polygon.
    ///
    /// The side of the previous linestring point is compared with the sides of the polygon boundary around the
    /// turn point.
    fn calculate_from_inside(&self, turn: &Turn) -> bool {
        let op = &turn.operations[0];
        let other = &turn.operations[1];
        if op.position == Position::Front {
            return false;
        }

        let (Some(range), Some(ring)) = (
            self.linear.range(op.seg_id.multi_index, None),
            self.areal
                .range(other.seg_id.multi_index, other.seg_id.ring_index),
        ) else {
            return false;
        };

        let ip = turn.point;
        let pi = range.point(op.seg_id.segment_index);
        let q = other.seg_id.segment_index;
        let qi = ring.point(q);
        let qj = ring.point(q + 1);
        let interior_sign = if self
            .areal
            .interior_on_left(other.seg_id.multi_index, other.seg_id.ring_index)
        {
            1
        } else {
            -1
        };

        let tolerance = &self.tolerance;
        let pk_p = tolerance.side(&qi, &ip, &pi);
        let (qk_p, pk_q2) = if tolerance.points_equal(&ip, &qj) {
            let qk = ring.point(q + 2);
            (tolerance.side(&qi, &ip, &qk), tolerance.side(&qj, &qk, &pi))
        } else {
            (tolerance.side(&qi, &ip, &qj), tolerance.side(&ip, &qj, &pi))
        };

        if !pk_p.is_opposite(qk_p) {
            pk_q2.sign() == interior_sign
        } else {
            pk_p.sign() == interior_sign
        }
    }
}

/// Relates `areal` (first geometry) with `linear` (second geometry).
pub(crate) fn relate_areal_linear(
    areal: &GeometryView,
    linear: &GeometryView,
    tolerance: &Tolerance,
    result: &mut impl RelateResult,
) {
    relate_linear_areal(
        linear,
        areal,
        tolerance,
        &mut crate::relate::matrix::Transposed(result),
    );
}
