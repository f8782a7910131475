#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use solitaire_battleship::cli::{play_round, run_session, Console, SessionOptions};
    use solitaire_battleship::{
        place_fleet, Coordinate, GameConfig, GameStatus, RoundSummary, FLEET,
    };
    use std::io::Cursor;

    fn run(input: &str, seed: u64, options: SessionOptions) -> (String, usize, usize, usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let stats = run_session(&mut console, &mut rng, options).unwrap();
        let (_, out) = console.into_inner();
        (
            String::from_utf8(out).unwrap(),
            stats.rounds,
            stats.wins,
            stats.losses,
        )
    }

    /// Row/column answers that hit every ship of the fleet the seed produces.
    fn winning_input(seed: u64) -> String {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &FLEET).unwrap();
        let mut input = String::new();
        for ship in fleet.ships() {
            for (c, _) in ship.cells() {
                input.push_str(&format!("{}\n{}\n", c.row_label(), c.col()));
            }
        }
        input
    }

    fn empty_cells(seed: u64, n: usize) -> Vec<Coordinate> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, &FLEET).unwrap();
        (!fleet.occupied()).iter().take(n).collect()
    }

    #[test]
    fn test_session_win_then_quit() {
        let input = winning_input(5) + "n\n";
        let (out, rounds, wins, losses) = run(&input, 5, SessionOptions::default());
        assert_eq!((rounds, wins, losses), (1, 1, 0));
        assert!(out.starts_with("Let's Play Battleship!"));
        for spec in FLEET.iter() {
            assert!(out.contains(&format!("You sunk the {}!", spec.name())));
        }
        assert!(out.contains("YOU WIN!"));
        assert!(out.contains("Play again (Y/N)? "));
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    #[test]
    fn test_loss_with_full_coordinates_and_bad_input() {
        let misses = empty_cells(11, 2);
        // junk rows and columns are re-prompted, full coordinates skip the column prompt
        let input = format!(
            "Q\n{}\n42\nfoo\n{}\n{}\nmaybe\nN\n",
            misses[0].row_label(),
            misses[0].col(),
            misses[1]
        );
        let options = SessionOptions {
            config: GameConfig::default().with_max_misses(2),
            json_summary: false,
        };
        let (out, rounds, wins, losses) = run(&input, 11, options);
        assert_eq!((rounds, wins, losses), (1, 0, 1));
        assert!(out.contains("Rows run from A to J."));
        assert!(out.contains("Columns run from 0 to 9."));
        assert!(out.contains("SORRY! NO GUESSES LEFT."));
        assert_eq!(out.matches("Play again (Y/N)? ").count(), 2);
    }

    #[test]
    fn test_play_again_starts_fresh_round() {
        let misses = empty_cells(3, 1);
        let options = SessionOptions {
            config: GameConfig::default().with_max_misses(1),
            json_summary: true,
        };
        // first round lost, second round ends when input runs out
        let input = format!("{}\ny\n", misses[0]);
        let (out, rounds, _, losses) = run(&input, 3, options);
        assert_eq!((rounds, losses), (1, 1));
        let json_line = out
            .lines()
            .find(|l| l.starts_with('{'))
            .expect("summary line");
        let v: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(v["status"], "Lost");
        assert_eq!(v["misses"], 1);
        assert_eq!(v["ships_afloat"].as_array().unwrap().len(), FLEET.len());
        assert!(out.trim_end().ends_with("Goodbye."));
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_guess_row_then_column() {
        let mut c = console("c\n4\n");
        assert_eq!(
            c.read_guess().unwrap(),
            Some(Coordinate::from_label('C', 4).unwrap())
        );
    }

    #[test]
    fn test_read_guess_reprompts_off_grid_column() {
        let mut c = console("J\n10\n-1\n9\n");
        assert_eq!(
            c.read_guess().unwrap(),
            Some(Coordinate::from_label('J', 9).unwrap())
        );
        let (_, out) = c.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Columns run from 0 to 9.").count(), 2);
        assert_eq!(out.matches("Enter a column: ").count(), 3);
    }

    #[test]
    fn test_read_guess_none_only_at_end_of_input() {
        let mut c = console("B\n");
        assert_eq!(c.read_guess().unwrap(), None);
        let mut c = console("");
        assert_eq!(c.read_guess().unwrap(), None);
    }

    #[test]
    fn test_round_ends_on_eof() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut console = Console::new(Cursor::new(b"A\n".to_vec()), Vec::new());
        let res: Option<RoundSummary> =
            play_round(&mut console, &mut rng, GameConfig::default()).unwrap();
        assert!(res.is_none());
    }

    #[test]
    fn test_round_summary_status() {
        let mut rng = SmallRng::seed_from_u64(8);
        let input = winning_input(8);
        let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        let summary = play_round(&mut console, &mut rng, GameConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.ships_sunk.len(), FLEET.len());
    }
}
