use sapper_core::*;

fn seeded(width: Coord, height: Coord, mines: &[Coord2]) -> Game {
    Game::with_board(Board::from_mine_coords(width, height, mines).unwrap())
}

fn revealed(game: &Game) -> Vec<Coord2> {
    game.board()
        .cells()
        .indexed_iter()
        .filter(|(_, cell)| cell.is_revealed())
        .map(|((row, col), _)| (row as Coord, col as Coord))
        .collect()
}

#[test]
fn center_mine_corner_reveal_opens_one_cell() {
    let mut game = seeded(3, 3, &[(1, 1)]);

    let report = game.reveal(0, 0).unwrap();

    assert_eq!(report.outcome, RevealOutcome::Revealed);
    assert_eq!(revealed(&game), vec![(0, 0)]);
    assert_eq!(game.cell_at((0, 0)).adjacent_count, 1);
}

#[test]
fn mine_free_corner_reveal_opens_everything() {
    let mut game = seeded(3, 3, &[]);

    let report = game.reveal(2, 2).unwrap();

    assert_eq!(report.outcome, RevealOutcome::Won);
    assert_eq!(revealed(&game).len(), 9);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.progress(), 1.0);
}

#[test]
fn clearing_board_by_hand_wins() {
    let mut game = seeded(3, 3, &[(1, 1)]);
    let safe: Vec<Coord2> = (0..3)
        .flat_map(|row| (0..3).map(move |col| (row, col)))
        .filter(|&coords| coords != (1, 1))
        .collect();

    let (last, rest) = safe.split_last().unwrap();
    for &(row, col) in rest {
        let report = game.reveal(row, col).unwrap();
        assert_eq!(report.outcome, RevealOutcome::Revealed);
        assert_eq!(game.state(), GameState::InProgress);
    }

    let report = game.reveal(last.0, last.1).unwrap();
    assert_eq!(report.outcome, RevealOutcome::Won);
    assert!(game.ended_at() >= game.started_at());
    assert_eq!(game.cell_at((1, 1)).visibility, Visibility::Hidden);
}

#[test]
fn cascade_never_reveals_mines_or_flags_on_random_boards() {
    for seed in 0..20 {
        let board = RandomBoardGenerator::new(seed)
            .generate(GameConfig::intermediate())
            .unwrap();
        let zero = board
            .cells()
            .indexed_iter()
            .find(|(_, cell)| !cell.has_mine && cell.adjacent_count == 0)
            .map(|((row, col), _)| (row as Coord, col as Coord));
        let Some((row, col)) = zero else {
            continue;
        };
        let flagged = board
            .cells()
            .indexed_iter()
            .find(|(_, cell)| !cell.has_mine && cell.adjacent_count > 0)
            .map(|((r, c), _)| (r as Coord, c as Coord));

        let mut game = Game::with_board(board);
        if let Some((fr, fc)) = flagged {
            game.flag(fr, fc, Some(true)).unwrap();
        }
        let report = game.reveal(row, col).unwrap();

        for &pos in &report.changed {
            assert!(!game.cell_at(pos).has_mine, "seed {seed} revealed mine at {pos:?}");
        }
        if let Some(pos) = flagged {
            assert_eq!(game.cell_at(pos).visibility, Visibility::Flagged);
        }
        // every revealed zero has all of its safe neighbors revealed
        for &pos in &report.changed {
            if game.cell_at(pos).adjacent_count == 0 {
                for neighbor in game.board().iter_neighbors(pos) {
                    let cell = game.cell_at(neighbor);
                    assert!(cell.is_revealed() || cell.is_flagged(), "seed {seed}");
                }
            }
        }
    }
}

#[test]
fn losing_keeps_misplaced_flags() {
    let mut game = seeded(3, 3, &[(0, 0), (2, 2)]);
    game.flag(0, 2, Some(true)).unwrap();
    game.flag(2, 2, Some(true)).unwrap();

    let report = game.reveal(0, 0).unwrap();

    assert_eq!(report.outcome, RevealOutcome::HitMine);
    assert_eq!(game.state(), GameState::Lost);
    assert!(game.cell_at((0, 0)).is_revealed());
    assert!(game.cell_at((2, 2)).is_revealed());
    assert_eq!(game.cell_at((0, 2)).visibility, Visibility::Flagged);
    assert_eq!(game.reveal(1, 1), Err(GameError::GameAlreadyOver));
    assert_eq!(game.flag(1, 1, None), Err(GameError::GameAlreadyOver));
}

#[test]
fn codec_survives_a_game_in_progress() {
    let mut game = seeded(4, 3, &[(0, 3), (2, 0)]);
    game.reveal(0, 0).unwrap();
    game.flag(2, 0, None).unwrap();

    let rows: Vec<Vec<i64>> = encode_board(game.board())
        .into_iter()
        .map(|row| row.into_iter().map(i64::from).collect())
        .collect();
    let board = decode_board(4, 3, 2, &rows).unwrap();

    assert_eq!(&board, game.board());
    let restored =
        Game::from_parts(board, game.state(), game.started_at(), game.ended_at()).unwrap();
    assert_eq!(restored.progress(), game.progress());
}
