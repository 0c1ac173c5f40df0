use sweeper_core::*;

fn brute_force_neighbors(index: CellIndex, (width, height): Coord2) -> Vec<CellIndex> {
    let (width, height) = (width as isize, height as isize);
    let (x, y) = (index as isize % width, index as isize / width);
    let mut out = Vec::new();
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && ny >= 0 && nx < width && ny < height {
                out.push((ny * width + nx) as CellIndex);
            }
        }
    }
    out
}

#[test]
fn neighbor_iterator_matches_coordinate_scan() {
    for size in [(10, 10), (4, 4), (7, 3), (3, 7), (1, 5), (5, 1), (2, 9)] {
        for index in 0..usize::from(mult(size.0, size.1)) {
            let neighbors: Vec<_> = NeighborIter::new(index, size).collect();
            assert_eq!(neighbors, brute_force_neighbors(index, size), "{index} in {size:?}");
        }
    }
}

#[test]
fn generated_boards_are_consistent_on_any_shape() {
    for (size, mines) in [((10, 10), 15), ((12, 5), 20), ((5, 12), 20), ((9, 2), 17)] {
        for seed in 0..8 {
            let config = GameConfig::new(size, mines).unwrap();
            let board = RandomMinefieldGenerator::new(seed).generate(config).unwrap();

            assert_eq!(board.cells().filter(|cell| cell.is_mine()).count(), usize::from(mines));
            for cell in board.cells().filter(|cell| !cell.is_mine()) {
                let expected = brute_force_neighbors(cell.index(), size)
                    .into_iter()
                    .filter(|&neighbor| board[neighbor].is_mine())
                    .count();
                assert_eq!(usize::from(cell.adjacent_mine_count()), expected);
            }
        }
    }
}

#[test]
fn flood_fill_reaches_exactly_the_zero_region_and_its_border() {
    let board = Board::from_mine_indices((6, 5), &[14]).unwrap();

    for start in (0..30).filter(|&i| board[i].adjacent_mine_count() == 0 && !board[i].is_mine()) {
        let mut board = board.clone();
        let uncovered = board.reveal(start);

        // a single mine can't disconnect the blank region, so everything safe opens
        assert_eq!(uncovered, 29);
        assert!(!board.has_uncovered_mine());
        assert_eq!(board.covered_safe_cells(), 0);
    }
}

#[test]
fn winning_by_play_on_a_generated_board() {
    let mut game = GameState::new_game_with(GameConfig::new((8, 6), 7).unwrap(), 1234).unwrap();
    let safe: Vec<_> = game
        .board()
        .cells()
        .filter(|cell| !cell.is_mine())
        .map(Cell::index)
        .collect();

    let mut last = ActionOutcome::NoChange;
    for index in safe {
        let outcome = game.apply_action(index, false).unwrap();
        if outcome.has_update() {
            last = outcome;
        }
    }

    assert_eq!(last, ActionOutcome::Won);
    assert_eq!(game.remaining_safe_cells(), 0);
    assert!(game.is_finished());
    assert!(
        game.board()
            .cells()
            .filter(|cell| !cell.is_mine())
            .all(|cell| cell.covering() == Covering::Uncovered)
    );
}

#[test]
fn remaining_reaches_zero_only_when_every_safe_cell_is_open() {
    let mut game = GameState::new_game_with(GameConfig::new((5, 5), 4).unwrap(), 77).unwrap();

    for index in 0..25 {
        if game.board()[index].is_mine() {
            continue;
        }
        game.apply_action(index, false).unwrap();
        let open = game.board().covered_safe_cells() == 0;
        assert_eq!(game.remaining_safe_cells() == 0, open);
        assert_eq!(game.remaining_safe_cells(), i32::from(game.board().covered_safe_cells()));
    }
}

#[test]
fn render_views_hide_unrevealed_information() {
    let mut game = GameState::new(Board::from_mine_indices((4, 4), &[5]).unwrap());
    game.apply_action(0, false).unwrap();
    game.apply_action(3, true).unwrap();

    assert_eq!(game.cell_view(0).unwrap(), CellView::Clear(1));
    assert_eq!(game.cell_view(3).unwrap(), CellView::Flagged);
    assert_eq!(game.cell_view(5).unwrap(), CellView::Covered);
    assert!(game.cell_view(5).unwrap().is_covered());

    game.apply_action(5, false).unwrap();
    assert_eq!(game.cell_view(5).unwrap(), CellView::Mine);
}

#[test]
fn persisted_game_survives_a_restart() {
    let mut game = GameState::new_game_with(GameConfig::STANDARD, 2024).unwrap();
    let first_safe = game
        .board()
        .cells()
        .find(|cell| !cell.is_mine())
        .map(Cell::index)
        .unwrap();
    game.apply_action(first_safe, false).unwrap();
    game.set_flag_mode(true);

    let saved = game.snapshot().to_json().unwrap();
    let restored = GameState::restore(&Snapshot::from_json(&saved).unwrap()).unwrap();

    assert_eq!(restored, game);
    assert!(restored.flag_mode());
}

#[test]
fn corrupt_snapshot_for_small_board() {
    let game = GameState::new(Board::from_mine_indices((4, 4), &[5]).unwrap());
    let mut snapshot = game.snapshot();
    snapshot.cells.as_mut().unwrap().truncate(15);

    let err = snapshot.restore((4, 4)).unwrap_err();
    assert!(matches!(err, GameError::CorruptSnapshot(_)));
}
