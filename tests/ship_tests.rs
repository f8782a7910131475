use solitaire_battleship::{
    CellSet, Coordinate, GameError, Orientation, Ship, ShipHit, ShipSpec,
};

fn at(label: char, col: usize) -> Coordinate {
    Coordinate::from_label(label, col).unwrap()
}

#[test]
fn test_new_ship_is_unhit() -> Result<(), GameError> {
    let spec = ShipSpec::new("cruiser", 3);
    let ship = Ship::new(spec, Orientation::Horizontal, at('C', 1))?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![(at('C', 1), false), (at('C', 2), false), (at('C', 3), false)]
    );
    assert!(!ship.is_sunk());
    assert_eq!(ship.hit_count(), 0);
    Ok(())
}

#[test]
fn test_vertical_footprint() -> Result<(), GameError> {
    let spec = ShipSpec::new("battleship", 4);
    let ship = Ship::new(spec, Orientation::Vertical, at('A', 0))?;
    let cells: Vec<_> = ship.occupied().iter().collect();
    assert_eq!(cells, vec![at('A', 0), at('B', 0), at('C', 0), at('D', 0)]);
    assert!(ship.contains(at('D', 0)));
    assert!(!ship.contains(at('E', 0)));
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let spec = ShipSpec::new("carrier", 5);
    assert_eq!(
        Ship::new(spec, Orientation::Horizontal, at('A', 6)).unwrap_err(),
        GameError::ShipOutOfBounds {
            ship: "carrier",
            start: at('A', 6)
        }
    );
    assert!(Ship::new(spec, Orientation::Horizontal, at('A', 5)).is_ok());
    assert!(Ship::new(spec, Orientation::Vertical, at('G', 0)).is_err());
    assert!(Ship::new(spec, Orientation::Vertical, at('F', 0)).is_ok());
    assert_eq!(spec.footprint(at('J', 9), Orientation::Vertical), None);
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    let spec = ShipSpec::new("destroyer", 2);
    let mut ship = Ship::new(spec, Orientation::Horizontal, at('B', 1))?;
    assert_eq!(ship.register_hit(at('A', 0)), ShipHit::NotOnShip);
    assert_eq!(ship.register_hit(at('B', 1)), ShipHit::Hit);
    assert!(!ship.is_sunk());
    assert_eq!(ship.register_hit(at('B', 1)), ShipHit::AlreadyHit);
    assert_eq!(ship.hit_count(), 1);
    assert_eq!(ship.register_hit(at('B', 2)), ShipHit::Sunk);
    assert!(ship.is_sunk());
    // no second sink
    assert_eq!(ship.register_hit(at('B', 2)), ShipHit::AlreadyHit);
    assert!(ship.cells().all(|(_, hit)| hit));
    Ok(())
}

#[test]
fn test_cell_set_ops() {
    let a: CellSet = [at('A', 0), at('A', 1)].into_iter().collect();
    let b: CellSet = [at('A', 1), at('B', 1)].into_iter().collect();
    assert!(!a.is_disjoint(&b));
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![at('A', 1)]);
    assert_eq!((a | b).len(), 3);
    assert!(a.is_subset(&(a | b)));
    assert_eq!((!a).len(), 98);
    assert_eq!(CellSet::full().len(), 100);
    assert!(CellSet::new().is_empty());
}

#[test]
#[should_panic]
fn test_zero_length_spec_panics() {
    let _ = ShipSpec::new("dinghy", 0);
}

#[test]
fn test_is_hit_tracks_cells() -> Result<(), GameError> {
    let mut ship = Ship::new(ShipSpec::new("destroyer", 2), Orientation::Vertical, at('E', 5))?;
    assert!(!ship.is_hit(at('E', 5)));
    assert_eq!(ship.register_hit(at('E', 5)), ShipHit::Hit);
    assert!(ship.is_hit(at('E', 5)));
    assert!(!ship.is_hit(at('F', 5)));
    // off the ship is never hit
    assert_eq!(ship.register_hit(at('G', 5)), ShipHit::NotOnShip);
    assert!(!ship.is_hit(at('G', 5)));
    Ok(())
}
