mod common;

use common::*;
use geotopo::{Tolerance, Topology};

#[test]
fn default_configuration() {
    let topology = Topology::default();
    assert_eq!(topology.tolerance(), Tolerance::cartesian());
    assert!(topology.non_simple_equals());
}

#[test]
fn serde_round_trip() {
    let topology = Topology::default()
        .with_tolerance(Tolerance::geographic())
        .with_non_simple_equals(false);

    let json = serde_json::to_string(&topology).expect("serializable");
    let restored: Topology = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(restored, topology);
}

#[test]
fn missing_fields_take_defaults() {
    let topology: Topology = serde_json::from_str("{}").expect("deserializable");
    assert_eq!(topology, Topology::default());
}

#[test]
fn exact_tolerance_distinguishes_close_points() {
    let a = line(&[(0.0, 0.0), (1.0, 0.0)]);
    let b = line(&[(0.0, 0.0), (1.0 + 1e-14, 0.0)]);

    assert!(Topology::default().equals(&a, &b));
    assert!(!Topology::default()
        .with_tolerance(Tolerance::exact())
        .equals(&a, &b));
}
