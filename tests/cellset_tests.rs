use seabattle::{CellSet, Coord};

#[test]
fn test_insert_and_contains() {
    let mut set = CellSet::new();
    assert!(set.is_empty());
    set.insert(Coord::new(1, 1));
    set.insert(Coord::new(6, 6));
    set.insert(Coord::new(6, 6));
    assert!(set.contains(Coord::new(1, 1)));
    assert!(set.contains(Coord::new(6, 6)));
    assert!(!set.contains(Coord::new(3, 3)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_out_of_bounds_is_never_a_member() {
    let set = CellSet::new();
    assert!(!set.contains(Coord::new(0, 1)));
    assert!(!set.contains(Coord::new(1, 7)));
}

#[test]
fn test_debug_grid() {
    let mut set = CellSet::new();
    set.insert(Coord::new(2, 1));
    let text = format!("{:?}", set);
    assert!(text.starts_with(".#...."));
    assert_eq!(text.matches('#').count(), 1);
}
