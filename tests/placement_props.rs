use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use solitaire_battleship::{place_fleet, Orientation, FLEET, NUM_COLS, NUM_ROWS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &FLEET).unwrap();
        let ships = fleet.ships();
        prop_assert_eq!(ships.len(), FLEET.len());
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                prop_assert!(
                    a.occupied().is_disjoint(&b.occupied()),
                    "{:?} overlaps {:?}", a, b
                );
            }
        }
    }

    #[test]
    fn fleet_stays_in_bounds_and_straight(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &FLEET).unwrap();
        for ship in fleet.ships() {
            let cells: Vec<_> = ship.cells().map(|(c, _)| c).collect();
            prop_assert_eq!(cells.len(), ship.length());
            for (i, c) in cells.iter().enumerate() {
                prop_assert!(c.row() < NUM_ROWS as usize);
                prop_assert!(c.col() < NUM_COLS as usize);
                let origin = ship.origin();
                match ship.orientation() {
                    Orientation::Horizontal => {
                        prop_assert_eq!(c.row(), origin.row());
                        prop_assert_eq!(c.col(), origin.col() + i);
                    }
                    Orientation::Vertical => {
                        prop_assert_eq!(c.col(), origin.col());
                        prop_assert_eq!(c.row(), origin.row() + i);
                    }
                }
            }
        }
    }

    #[test]
    fn fresh_ships_unhit(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &FLEET).unwrap();
        for ship in fleet.ships() {
            prop_assert!(ship.cells().all(|(_, hit)| !hit));
            prop_assert!(!ship.is_sunk());
        }
    }
}
