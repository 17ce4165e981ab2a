#![allow(dead_code)]

use geo_types::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Rect};
use geotopo::types::Geom;

pub type G = Geom<Coord<f64>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn geom(geometry: impl Into<Geometry<f64>>) -> G {
    Geom::try_from(geometry.into()).expect("geometry is supported")
}

pub fn line(coords: &[(f64, f64)]) -> G {
    geom(LineString::from(coords.to_vec()))
}

pub fn multi_line(lines: &[&[(f64, f64)]]) -> G {
    geom(MultiLineString::new(
        lines.iter().map(|l| LineString::from(l.to_vec())).collect(),
    ))
}

fn geo_polygon(exterior: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Polygon<f64> {
    Polygon::new(
        LineString::from(exterior.to_vec()),
        holes.iter().map(|h| LineString::from(h.to_vec())).collect(),
    )
}

pub fn polygon(exterior: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> G {
    geom(geo_polygon(exterior, holes))
}

pub fn multi_polygon(polygons: &[&[(f64, f64)]]) -> G {
    geom(MultiPolygon::new(
        polygons.iter().map(|p| geo_polygon(p, &[])).collect(),
    ))
}

pub fn multi_point(points: &[(f64, f64)]) -> G {
    geom(MultiPoint::from(points.to_vec()))
}

pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> G {
    geom(Rect::new((x1, y1), (x2, y2)))
}

pub fn square(x: f64, y: f64, size: f64) -> G {
    polygon(
        &[(x, y), (x, y + size), (x + size, y + size), (x + size, y)],
        &[],
    )
}
