#[cfg(feature = "std")]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use sea_battle::cli::{placement_cells, render_board, run_session};
    use sea_battle::intent::ScriptedIntents;
    use sea_battle::{
        Board, CellView, Coordinate, GameDriver, GameError, GameSession, Intent, Orientation,
        Phase, PlacementIssue, Ship, ShipType, Side,
    };
    use tokio::time::Duration;

    fn c(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn sample_board() -> Board {
        let mut board = Board::new();
        let coords = vec![c("A1"), c("A2")];
        board
            .place_ship(Ship::new(ShipType::new("Destroyer", 2)).unwrap(), &coords)
            .unwrap();
        board.receive_attack(c("A1")).unwrap();
        board.receive_attack(c("J10")).unwrap();
        board
    }

    #[test]
    fn test_render_revealed_board() {
        let text = render_board(&sample_board().view(true));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].trim_start().starts_with("1  2"));
        assert!(lines[0].trim_end().ends_with("10"));
        assert!(lines[1].starts_with(" A "));
        assert!(lines[1].contains('X'));
        assert!(lines[1].contains('S'));
        assert!(lines[10].starts_with(" J "));
        assert!(lines[10].trim_end().ends_with('o'));
        assert!(text.contains("Destroyer (2): afloat"));
    }

    #[test]
    fn test_render_fogged_board_hides_ships() {
        let text = render_board(&sample_board().view(false));
        assert!(!text.contains('S'));
        assert!(text.contains('X'));
    }

    #[test]
    fn test_placement_cells_by_intent() {
        let board = sample_board();
        assert_eq!(
            placement_cells(
                &board,
                3,
                &Intent::PlaceAnchored {
                    anchor: c("C2"),
                    orientation: Orientation::Vertical
                }
            )
            .unwrap(),
            vec![c("C2"), c("D2"), c("E2")]
        );
        assert_eq!(
            placement_cells(&board, 2, &Intent::PlaceDragged { start: c("F5"), end: c("F1") }).unwrap(),
            vec![c("F4"), c("F5")]
        );
        assert_eq!(
            placement_cells(&board, 2, &Intent::PlaceCells(vec![c("B2"), c("B1")])).unwrap(),
            vec![c("B1"), c("B2")]
        );
        assert_eq!(
            placement_cells(&board, 2, &Intent::PlaceCells(vec![c("A2"), c("B2")])).unwrap_err(),
            GameError::InvalidPlacement(PlacementIssue::Overlap(c("A2")))
        );
        assert!(matches!(
            placement_cells(&board, 2, &Intent::Show),
            Err(GameError::UnknownIntent(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_session() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let session = GameSession::start_game("Ada", &mut rng).unwrap();
        let (mut driver, mut events) = GameDriver::new(session, rng, Duration::from_millis(600));
        let mut script = ScriptedIntents::new([
            Intent::PlaceAnchored {
                anchor: c("A1"),
                orientation: Orientation::Horizontal,
            },
            Intent::Attack(c("A1")),
            Intent::AutoPlace,
            Intent::Attack(c("E5")),
            Intent::Show,
            Intent::Quit,
            Intent::Attack(c("F6")),
        ]);
        let view = run_session(&mut driver, &mut events, &mut script).await.unwrap();
        assert_eq!(view.phase, Phase::Battle);
        assert_eq!(view.human_board.ship_count, 5);
        assert_eq!(view.human_board.ships[0].coords[0], c("A1"));
        let e5 = c("E5").index();
        assert_ne!(view.computer_board.cells[e5], CellView::Water);
        assert_eq!(view.computer_board.cells[c("F6").index()], CellView::Water);
        assert_eq!(view.computer_board.cells[c("A1").index()], CellView::Water);

        let session = driver.session();
        let session = session.lock().await;
        assert_eq!(session.shots_fired(Side::Human), 1);
    }
}
