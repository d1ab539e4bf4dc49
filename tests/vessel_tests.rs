use seabattle::{Coord, Orientation, Vessel, VesselClass};

#[test]
fn test_horizontal_layout() {
    let vessel = Vessel::new(
        VesselClass::new("Test", 3),
        Coord::new(2, 4),
        Orientation::Horizontal,
    );
    assert_eq!(
        vessel.cells(),
        [Coord::new(2, 4), Coord::new(3, 4), Coord::new(4, 4)]
    );
}

#[test]
fn test_vertical_layout() {
    let vessel = Vessel::new(
        VesselClass::new("Test", 4),
        Coord::new(1, 1),
        Orientation::Vertical,
    );
    assert_eq!(
        vessel.cells(),
        [
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(1, 3),
            Coord::new(1, 4)
        ]
    );
}

#[test]
fn test_hits_until_destroyed() {
    let mut vessel = Vessel::new(
        VesselClass::new("Test", 2),
        Coord::new(5, 5),
        Orientation::Horizontal,
    );
    assert_eq!(vessel.remaining(), 2);
    assert!(!vessel.is_destroyed());
    vessel.take_hit();
    assert_eq!(vessel.remaining(), 1);
    assert!(!vessel.is_destroyed());
    vessel.take_hit();
    assert!(vessel.is_destroyed());
}

#[test]
fn test_spans() {
    let vessel = Vessel::new(
        VesselClass::new("Test", 3),
        Coord::new(2, 2),
        Orientation::Vertical,
    );
    assert!(vessel.spans(Coord::new(2, 3)));
    assert!(!vessel.spans(Coord::new(3, 2)));
}
