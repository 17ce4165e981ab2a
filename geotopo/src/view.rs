//! Normalised representation of the input geometries.
//!
//! Every [`Geom`] is converted into a [`GeometryView`] before any computations. The view stores `f64` points,
//! removes consecutive duplicate points and drops degenerate parts, so the algorithms never have to deal with
//! zero length segments or rings with less than 3 points. Points of the view are addressed by
//! `(multi_index, ring_index, point_index)` triplets:
//!
//! * for linear geometries `multi_index` is the index of the linestring and `ring_index` is always `None`,
//! * for areal geometries `multi_index` is the index of the polygon, `ring_index` is `None` for the exterior ring
//!   and `Some(i)` for the `i`-th hole.

use geotopo_types::cartesian::{
    CartesianClosedContour, CartesianPoint2d, Point2d, Rect, Winding,
};
use geotopo_types::impls::{ClosedContour, Contour, Polygon};
use geotopo_types::{
    self as types, Contour as _, Geom, GeometryKind, MultiContour as _, MultiPoint as _,
    MultiPolygon as _, Polygon as _,
};

use crate::Tolerance;

/// Normalised geometry with `f64` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryView {
    kind: GeometryKind,
    shape: Shape,
}

/// Parts of a [`GeometryView`] grouped by the dimension of the geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Point or multipoint.
    Puntal(Vec<Point2d>),
    /// Linestrings. Closed linestrings have no boundary.
    Linear(Vec<Contour<Point2d>>),
    /// Polygons. Rings do not repeat the first point at the end.
    Areal(Vec<Polygon<Point2d>>),
}

/// Borrowed sequence of points of a linestring or a ring.
#[derive(Debug, Copy, Clone)]
pub(crate) struct RangeRef<'a> {
    pub points: &'a [Point2d],
    pub is_closed: bool,
}

impl<'a> RangeRef<'a> {
    pub fn segment_count(&self) -> usize {
        match (self.points.len(), self.is_closed) {
            (0 | 1, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }

    /// Point by index, indices past the end wrap around for closed ranges.
    pub fn point(&self, index: usize) -> Point2d {
        self.points[index % self.points.len()]
    }

    pub fn segment(&self, index: usize) -> (Point2d, Point2d) {
        (self.point(index), self.point(index + 1))
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point2d, Point2d)> + 'a {
        let range = *self;
        (0..range.segment_count()).map(move |i| range.segment(i))
    }

    pub fn front(&self) -> Point2d {
        self.points[0]
    }

    pub fn back(&self) -> Point2d {
        if self.is_closed {
            self.points[0]
        } else {
            self.points[self.points.len() - 1]
        }
    }

    pub fn envelope(&self) -> Option<Rect> {
        Rect::from_points(self.points)
    }
}

impl GeometryView {
    /// Creates a normalised view of the geometry.
    pub fn new<P: CartesianPoint2d>(geometry: &Geom<P>, tolerance: &Tolerance) -> Self {
        let kind = geometry.kind();
        let shape = match geometry {
            Geom::Point(p) => Shape::Puntal(vec![p.to_point2d()]),
            Geom::MultiPoint(mp) => Shape::Puntal(mp.iter_points().map(|p| p.to_point2d()).collect()),
            Geom::Contour(contour) => {
                Shape::Linear(normalize_line(contour, tolerance).into_iter().collect())
            }
            Geom::MultiContour(mc) => Shape::Linear(
                mc.contours()
                    .filter_map(|c| normalize_line(c, tolerance))
                    .collect(),
            ),
            Geom::Segment { start, end } => Shape::Linear(
                normalize_points([start, end], false, tolerance)
                    .into_iter()
                    .collect(),
            ),
            Geom::ClosedContour(ring) => Shape::Areal(
                normalize_ring(&ring.points, tolerance)
                    .map(Polygon::from)
                    .into_iter()
                    .collect(),
            ),
            Geom::Polygon(polygon) => {
                Shape::Areal(normalize_polygon(polygon, tolerance).into_iter().collect())
            }
            Geom::MultiPolygon(mp) => Shape::Areal(
                mp.polygons()
                    .filter_map(|polygon| normalize_polygon(polygon, tolerance))
                    .collect(),
            ),
            Geom::Rect { min, max } => {
                let rect = Rect::new(
                    min.to_point2d().x,
                    min.to_point2d().y,
                    max.to_point2d().x,
                    max.to_point2d().y,
                );
                Shape::Areal(
                    normalize_ring(&rect.into_quadrangle(), tolerance)
                        .map(Polygon::from)
                        .into_iter()
                        .collect(),
                )
            }
        };

        Self { kind, shape }
    }

    /// Linear view of the boundary of an areal geometry. Every ring becomes a closed linestring.
    ///
    /// Returns `None` for non-areal geometries.
    pub(crate) fn boundary(&self) -> Option<Self> {
        let Shape::Areal(polygons) = &self.shape else {
            return None;
        };

        let rings = polygons
            .iter()
            .flat_map(|polygon| {
                std::iter::once(&polygon.outer_contour).chain(polygon.inner_contours.iter())
            })
            .map(|ring| Contour::closed(ring.points.clone()))
            .collect();

        Some(Self {
            kind: GeometryKind::MultiLinestring,
            shape: Shape::Linear(rings),
        })
    }

    /// Kind of the source geometry.
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Normalised parts of the geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Topological dimension of the geometry.
    pub fn dimension(&self) -> u8 {
        match self.shape {
            Shape::Puntal(_) => 0,
            Shape::Linear(_) => 1,
            Shape::Areal(_) => 2,
        }
    }

    /// Whether all parts of the geometry were empty or degenerate.
    pub fn is_empty(&self) -> bool {
        match &self.shape {
            Shape::Puntal(points) => points.is_empty(),
            Shape::Linear(lines) => lines.is_empty(),
            Shape::Areal(polygons) => polygons.is_empty(),
        }
    }

    /// Bounding rectangle of the geometry.
    pub fn envelope(&self) -> Option<Rect> {
        match &self.shape {
            Shape::Puntal(points) => Rect::from_points(points),
            Shape::Linear(lines) => {
                Rect::merge_all(lines.iter().filter_map(|c| Rect::from_points(c.points())))
            }
            Shape::Areal(polygons) => Rect::merge_all(
                polygons
                    .iter()
                    .filter_map(|p| Rect::from_points(&p.outer_contour.points)),
            ),
        }
    }

    pub(crate) fn points(&self) -> &[Point2d] {
        match &self.shape {
            Shape::Puntal(points) => points,
            _ => &[],
        }
    }

    pub(crate) fn polygons(&self) -> &[Polygon<Point2d>] {
        match &self.shape {
            Shape::Areal(polygons) => polygons,
            _ => &[],
        }
    }

    /// Linestring or ring by its address.
    pub(crate) fn range(&self, multi_index: usize, ring_index: Option<usize>) -> Option<RangeRef<'_>> {
        match &self.shape {
            Shape::Puntal(_) => None,
            Shape::Linear(lines) => {
                let line = lines.get(multi_index)?;
                Some(RangeRef {
                    points: line.points(),
                    is_closed: line.is_closed(),
                })
            }
            Shape::Areal(polygons) => {
                let polygon = polygons.get(multi_index)?;
                let ring = match ring_index {
                    None => &polygon.outer_contour,
                    Some(index) => polygon.inner_contours.get(index)?,
                };
                Some(RangeRef {
                    points: &ring.points,
                    is_closed: true,
                })
            }
        }
    }

    /// Iterates over all linestrings or rings together with their addresses.
    pub(crate) fn ranges(&self) -> impl Iterator<Item = (usize, Option<usize>, RangeRef<'_>)> {
        let ranges: Vec<_> = match &self.shape {
            Shape::Puntal(_) => vec![],
            Shape::Linear(lines) => lines
                .iter()
                .enumerate()
                .map(|(index, line)| {
                    (
                        index,
                        None,
                        RangeRef {
                            points: line.points(),
                            is_closed: line.is_closed(),
                        },
                    )
                })
                .collect(),
            Shape::Areal(polygons) => polygons
                .iter()
                .enumerate()
                .flat_map(|(index, polygon)| {
                    std::iter::once((None, &polygon.outer_contour))
                        .chain(
                            polygon
                                .inner_contours
                                .iter()
                                .enumerate()
                                .map(|(hole, ring)| (Some(hole), ring)),
                        )
                        .map(move |(ring_index, ring)| {
                            (
                                index,
                                ring_index,
                                RangeRef {
                                    points: &ring.points,
                                    is_closed: true,
                                },
                            )
                        })
                })
                .collect(),
        };

        ranges.into_iter()
    }

    /// Whether the interior of the polygon is on the left side of the ring when walking along it.
    pub(crate) fn interior_on_left(&self, multi_index: usize, ring_index: Option<usize>) -> bool {
        let Some(polygon) = self.polygons().get(multi_index) else {
            return false;
        };
        let ring = match ring_index {
            None => &polygon.outer_contour,
            Some(index) => match polygon.inner_contours.get(index) {
                Some(ring) => ring,
                None => return false,
            },
        };

        let is_ccw = ring.winding() == Winding::CounterClockwise;
        is_ccw == ring_index.is_none()
    }
}

fn dedup(points: impl IntoIterator<Item = Point2d>, tolerance: &Tolerance) -> Vec<Point2d> {
    let mut result: Vec<Point2d> = vec![];
    for p in points {
        if result
            .last()
            .map_or(true, |last| !tolerance.points_equal(last, &p))
        {
            result.push(p);
        }
    }

    result
}

fn normalize_line<C>(contour: &C, tolerance: &Tolerance) -> Option<Contour<Point2d>>
where
    C: types::Contour,
    C::Point: CartesianPoint2d,
{
    normalize_points(contour.iter_points(), contour.is_closed(), tolerance)
}

fn normalize_points<'a, P: CartesianPoint2d + 'a>(
    points: impl IntoIterator<Item = &'a P>,
    is_closed: bool,
    tolerance: &Tolerance,
) -> Option<Contour<Point2d>> {
    let mut points = dedup(points.into_iter().map(|p| p.to_point2d()), tolerance);
    let ends_equal = points.len() >= 3
        && tolerance.points_equal(&points[0], &points[points.len() - 1]);
    let is_closed = is_closed || ends_equal;
    if is_closed && points.len() >= 2 && tolerance.points_equal(&points[0], &points[points.len() - 1]) {
        points.pop();
    }

    if points.len() < 2 {
        log::debug!("Skipping degenerate linestring with {} points", points.len());
        return None;
    }

    Some(Contour::new(points, is_closed))
}

fn normalize_ring<'a, P: CartesianPoint2d + 'a>(
    points: impl IntoIterator<Item = &'a P>,
    tolerance: &Tolerance,
) -> Option<ClosedContour<Point2d>> {
    let mut points = dedup(points.into_iter().map(|p| p.to_point2d()), tolerance);
    if points.len() >= 2 && tolerance.points_equal(&points[0], &points[points.len() - 1]) {
        points.pop();
    }

    if points.len() < 3 {
        log::debug!("Skipping degenerate ring with {} points", points.len());
        return None;
    }

    Some(ClosedContour::new(points))
}

/// Normalises the rings of a polygon. The polygon is dropped if its exterior ring is degenerate.
fn normalize_polygon<Poly>(polygon: &Poly, tolerance: &Tolerance) -> Option<Polygon<Point2d>>
where
    Poly: types::Polygon,
    <Poly::Contour as types::Contour>::Point: CartesianPoint2d,
{
    let mut rings = polygon.iter_contours();
    let exterior = normalize_ring(rings.next()?.iter_points(), tolerance)?;
    let holes = rings
        .filter_map(|ring| normalize_ring(ring.iter_points(), tolerance))
        .collect();

    Some(Polygon::new(exterior, holes))
}
