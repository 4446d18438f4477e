#[cfg(test)]
mod tests {
    use crate::{
        Board, BoardBuilder, BuildError, Location, PathError, PieceId, SolveError, Step,
    };

    const LONE_PIECE: &str = "
    ...1.
    ...1.
    ..11.
    .....
    .....";

    const CROWD: &str = "
    .....
    .2213
    ..11.
    .....
    ..44.";

    fn lone_piece_board(goal: &str) -> Board {
        BoardBuilder::new(LONE_PIECE, goal).assign_type(1, 1).build().unwrap()
    }

    fn crowd_board(goal: &str) -> Board {
        BoardBuilder::new(CROWD, goal)
            .assign_type(1, 1)
            .assign_type(2, 2)
            .assign_type(3, 3)
            .assign_type(4, 4)
            .build()
            .unwrap()
    }

    #[test]
    fn build_and_render() {
        let board = crowd_board(CROWD);
        assert_eq!(format!("{}", board), ".....
.2213
..11.
.....
..44.
");

        let p1 = board.piece(PieceId(1)).unwrap();
        assert_eq!(p1.size(), 3);
        assert_eq!(p1.cost(), 2);
        assert_eq!(p1.start(), Location(2, 1));
        assert_eq!(board.piece(PieceId(3)).unwrap().cost(), 4);
        assert_eq!(board.piece(PieceId(4)).unwrap().cost(), 3);

        // same shapes labelled by type instead of id
        let by_type = board.render(&board.start_positions(), true);
        assert_eq!(by_type, format!("{}", board));
    }

    #[test]
    fn move_off_board() {
        let board = lone_piece_board(LONE_PIECE);
        let err = board.validate("1U").unwrap_err();
        assert_eq!(
            err,
            PathError::OffBoard { move_num: 1, code: "1U".into(), piece: PieceId(1) }
        );
        assert_eq!(
            err.to_string(),
            "move 1 (1U) takes piece 1 off of the board"
        );
    }

    #[test]
    fn shortest_path_down() {
        let board = lone_piece_board(
            "
    .....
    .....
    ...1.
    ...1.
    ..11.",
        );
        let solution = board.solve(2).unwrap();
        assert_eq!(solution.path(), "1D1D");
        assert_eq!(solution.cost(), 2);
        assert_eq!(solution.moves(), 2);
        assert_eq!(board.validate(solution.path()), Ok(2));
        assert_eq!(board.check(&solution), Ok(2));
    }

    #[test]
    fn shortest_path_around() {
        let board = lone_piece_board(
            "
    .....
    .....
    .1...
    .1...
    11...",
        );
        let solution = board.solve(4).unwrap();
        assert_eq!(solution.cost(), 4);
        assert_eq!(board.check(&solution), Ok(4));
    }

    #[test]
    fn budget_monotonicity() {
        let goal = "
    .....
    .....
    ...1.
    ...1.
    ..11.";
        let board = lone_piece_board(goal);
        assert_eq!(
            board.solve(1).unwrap_err(),
            SolveError::NoSolution { budget: 1 }
        );
        // a looser budget keeps the solution found at the tight one: any
        // detour would add at least two more unit-cost moves
        let solution = board.solve(3).unwrap();
        assert_eq!(solution.path(), "1D1D");
        assert_eq!(solution.cost(), 2);
    }

    #[test]
    fn collision_reporting() {
        let board = crowd_board(CROWD);
        assert_eq!(
            board.validate("1U").unwrap_err(),
            PathError::Collision {
                move_num: 1,
                code: "1U".into(),
                piece: PieceId(1),
                other: PieceId(2),
            }
        );
        assert_eq!(
            board.validate("1L").unwrap_err(),
            PathError::Collision {
                move_num: 1,
                code: "1L".into(),
                piece: PieceId(1),
                other: PieceId(2),
            }
        );
        // moving right collides with piece 3, not 2
        let err = board.validate("1R").unwrap_err();
        assert_eq!(
            err,
            PathError::Collision {
                move_num: 1,
                code: "1R".into(),
                piece: PieceId(1),
                other: PieceId(3),
            }
        );
        assert_eq!(
            err.to_string(),
            "move 1 (1R) has a collision between pieces 1 and 3"
        );
    }

    #[test]
    fn replay_reaches_goal() {
        let board = crowd_board(
            "
    .....
    .22.3
    ..1..
    .11..
    ..44.",
        );
        // piece 1 has three cells, so each of its moves costs 2
        assert_eq!(board.validate("1D1L"), Ok(4));
        assert_eq!(board.validate("1D").unwrap_err(), PathError::GoalMismatch);
    }

    #[test]
    fn path_format_errors() {
        let board = crowd_board(CROWD);
        assert_eq!(
            board.validate("1D1").unwrap_err(),
            PathError::OddLength(3)
        );
        assert_eq!(
            board.validate("xD").unwrap_err(),
            PathError::BadPieceChar { ch: 'x', pos: 0 }
        );
        assert_eq!(
            board.validate("1D9U").unwrap_err(),
            PathError::UnknownPiece { id: 9, pos: 2, count: 4 }
        );
        assert_eq!(
            board.validate("1Z").unwrap_err(),
            PathError::BadDirection { ch: 'Z', pos: 1 }
        );
    }

    #[test]
    fn can_move_agrees_with_validate() {
        let board = crowd_board(CROWD);
        let positions = board.start_positions();
        // rejected moves collide, matching the validator's error category
        assert!(!board.can_move(PieceId(1), Step::Up, &positions));
        assert!(!board.can_move(PieceId(1), Step::Left, &positions));
        assert!(!board.can_move(PieceId(1), Step::Right, &positions));
        assert!(board.can_move(PieceId(1), Step::Down, &positions));
        // piece 4 is against the bottom edge
        assert!(!board.can_move(PieceId(4), Step::Down, &positions));
    }

    #[test]
    fn state_key_canonicalizes_same_type_pieces() {
        let start = "
    1.2..
    .....
    .....
    .....
    .....";
        let goal = "
    1.1..
    .....
    .....
    .....
    .....";
        let board = BoardBuilder::new(start, goal)
            .assign_type(1, 1)
            .assign_type(2, 1)
            .build()
            .unwrap();

        let key = board.state_key(&[Location(0, 0), Location(2, 0)]);
        let swapped = board.state_key(&[Location(2, 0), Location(0, 0)]);
        assert_eq!(key, swapped);
        assert_eq!(key, board.goal_key());
        assert_eq!(key.len(), 25);
        assert!(key.starts_with("10100"));
    }

    // The seven-piece sample board from the puzzle statement, with a
    // minimum achievable cost of 11. Pieces 3 and 7 share a type, so the
    // goal is reachable whichever of the two ends up in each position and
    // the search deduplicates those arrangements through the canonical key.
    #[test]
    fn seven_piece_sample_board() {
        let start = "
    .112.
    .122.
    34556
    74666
    .....";
        let goal = "
    11..2
    14.22
    34556
    .3666
    .....";
        let board = BoardBuilder::new(start, goal)
            .assign_type(1, 1)
            .assign_type(2, 2)
            .assign_type(3, 3)
            .assign_type(4, 4)
            .assign_type(5, 5)
            .assign_type(6, 6)
            .assign_type(7, 3)
            .build()
            .unwrap();

        let solution = board.solve(12).unwrap();
        assert_eq!(solution.cost(), 11);
        assert_eq!(board.check(&solution), Ok(11));
    }

    #[test]
    fn builder_rejects_bad_layouts() {
        let short = "
    11...
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(short, short).assign_type(1, 1).build().unwrap_err(),
            BuildError::WrongRowCount { found: 3, expected: 5 }
        );

        let stray = "
    11...
    ..x..
    .....
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(stray, stray).assign_type(1, 1).build().unwrap_err(),
            BuildError::BadCharacter { ch: 'x', row: 2, col: 3 }
        );

        let ragged = "
    11....
    ......
    ......
    ......
    ......";
        assert!(matches!(
            BoardBuilder::new(ragged, ragged).assign_type(1, 1).build().unwrap_err(),
            BuildError::WrongRowLength { row: 1, .. }
        ));
    }

    #[test]
    fn builder_rejects_bad_pieces() {
        let untyped = "
    11...
    .....
    .....
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(untyped, untyped).build().unwrap_err(),
            BuildError::MissingType { piece: PieceId(1) }
        );

        let oversized = "
    11111
    .....
    .....
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(oversized, oversized).assign_type(1, 1).build().unwrap_err(),
            BuildError::PieceTooLarge { piece: PieceId(1), cells: 5, max: 4 }
        );

        // ids 1 and 3 declared, 2 absent
        let gap = "
    1.3..
    .....
    .....
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(gap, gap)
                .assign_type(1, 1)
                .assign_type(2, 2)
                .assign_type(3, 3)
                .build()
                .unwrap_err(),
            BuildError::MissingPiece { piece: PieceId(2) }
        );

        let empty = "
    .....
    .....
    .....
    .....
    .....";
        assert_eq!(
            BoardBuilder::new(empty, empty).build().unwrap_err(),
            BuildError::NoPieces
        );
    }
}
