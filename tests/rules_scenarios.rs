use plakychess::utils::long_algebraic::long_algebraic_to_move;
use plakychess::{CastleSide, ChessError, Color, GameState, GameStatus, Move, PieceKind, Position};

fn sq(name: &str) -> Position {
    name.parse().expect("test square should parse")
}

fn play(game: &GameState, line: &[&str]) -> GameState {
    line.iter().fold(game.clone(), |game, text| {
        let mv = long_algebraic_to_move(text, &game).expect("scripted move should be legal");
        game.apply(mv).expect("legal move should apply")
    })
}

#[test]
fn double_step_sets_target_only_adjacent_pawns_may_use() {
    let after_e4 = play(&GameState::new_game(), &["e2e4"]);
    assert_eq!(after_e4.en_passant_target(), Some(sq("e3")));
    assert!(!after_e4.legal_moves().iter().any(|mv| mv.is_en_passant));

    let ready = play(&GameState::new_game(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(ready.en_passant_target(), Some(sq("d6")));
    let en_passant: Vec<Move> = ready
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.is_en_passant)
        .collect();
    assert_eq!(en_passant, vec![Move::en_passant(sq("e5"), sq("d6"))]);

    let captured = ready.apply(en_passant[0]).expect("en passant should apply");
    assert!(captured.board().is_empty_at(sq("d5")));
    assert_eq!(
        captured.board().piece_at(sq("d6")).map(|piece| (piece.kind, piece.color)),
        Some((PieceKind::Pawn, Color::White))
    );
    assert_eq!(captured.en_passant_target(), None);
}

#[test]
fn en_passant_expires_after_one_move() {
    let missed = play(&GameState::new_game(), &["e2e4", "a7a6", "e4e5", "d7d5", "g1f3", "a6a5"]);
    assert_eq!(missed.en_passant_target(), None);
    assert!(!missed.legal_moves().iter().any(|mv| mv.is_en_passant));
}

#[test]
fn blocked_pawns_have_no_forward_moves() {
    let blocked = play(&GameState::new_game(), &["e2e4", "e7e5"]);
    assert!(!blocked.legal_moves().iter().any(|mv| mv.from == sq("e4")));

    let black_turn = play(&blocked, &["g1f3"]);
    assert!(!black_turn.legal_moves().iter().any(|mv| mv.from == sq("e5")));
}

#[test]
fn rook_move_revokes_castling_right_even_after_returning() {
    let start = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("test FEN should parse");
    let back_home = play(&start, &["h1h2", "a8b8", "h2h1", "b8a8"]);

    assert!(!back_home.castling_rights().has(Color::White, CastleSide::Kingside));
    assert!(back_home.castling_rights().has(Color::White, CastleSide::Queenside));
    assert!(!back_home.castling_rights().has(Color::Black, CastleSide::Queenside));
    assert!(back_home
        .board()
        .piece_at(sq("h1"))
        .is_some_and(|rook| rook.has_moved));

    let castles: Vec<CastleSide> = back_home.legal_moves().iter().filter_map(|mv| mv.castle).collect();
    assert_eq!(castles, vec![CastleSide::Queenside]);
}

#[test]
fn castling_moves_king_and_rook_together() {
    let start = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("test FEN should parse");
    let castled = play(&start, &["e1g1"]);

    let board = castled.board();
    assert_eq!(board.piece_at(sq("g1")).map(|piece| piece.kind), Some(PieceKind::King));
    assert_eq!(board.piece_at(sq("f1")).map(|piece| piece.kind), Some(PieceKind::Rook));
    assert!(board.is_empty_at(sq("e1")));
    assert!(board.is_empty_at(sq("h1")));
    assert!(!castled.castling_rights().has(Color::White, CastleSide::Queenside));
    assert!(castled.castling_rights().has(Color::Black, CastleSide::Kingside));
}

#[test]
fn promotion_offers_every_piece_and_requires_a_choice() {
    let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("test FEN should parse");
    let promotions: Vec<PieceKind> = game
        .legal_moves()
        .iter()
        .filter(|mv| mv.from == sq("a7"))
        .filter_map(|mv| mv.promotion)
        .collect();
    assert_eq!(promotions.len(), 4);

    assert!(matches!(
        game.apply(Move::new(sq("a7"), sq("a8"))),
        Err(ChessError::PromotionRequired(_))
    ));

    let promoted = game
        .apply(Move::promoting(sq("a7"), sq("a8"), PieceKind::Queen))
        .expect("promotion should apply");
    assert_eq!(promoted.board().piece_at(sq("a8")).map(|piece| piece.kind), Some(PieceKind::Queen));
    assert!(promoted.is_in_check());
}

#[test]
fn capturing_onto_the_last_rank_also_requires_a_promotion_piece() {
    let game = GameState::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("test FEN should parse");

    assert!(matches!(
        game.apply(Move::new(sq("b7"), sq("a8"))),
        Err(ChessError::PromotionRequired(_))
    ));
    assert!(matches!(
        long_algebraic_to_move("b7a8", &game),
        Err(ChessError::PromotionRequired(_))
    ));

    let promoted = game
        .apply(Move::promoting(sq("b7"), sq("a8"), PieceKind::Rook))
        .expect("capture with promotion should apply");
    assert_eq!(
        promoted.board().piece_at(sq("a8")).map(|piece| (piece.kind, piece.color)),
        Some((PieceKind::Rook, Color::White))
    );
    assert_eq!(promoted.halfmove_clock(), 0);
}

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mated = play(&GameState::new_game(), &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(mated.is_in_check());
    assert!(mated.legal_moves().is_empty());
    assert_eq!(mated.status(), GameStatus::Checkmate { winner: Color::Black });
    assert_eq!(mated.fullmove_number(), 3);
}

#[test]
fn stalemate_is_not_check() {
    let game = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").expect("test FEN should parse");
    assert!(!game.is_in_check());
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn illegal_requests_leave_the_game_untouched() {
    let game = GameState::new_game();
    let snapshot = game.clone();

    assert!(matches!(game.apply(Move::new(sq("e2"), sq("e5"))), Err(ChessError::IllegalMove(_))));
    assert!(matches!(game.apply(Move::new(sq("e7"), sq("e5"))), Err(ChessError::IllegalMove(_))));
    assert!(matches!(game.apply(Move::new(sq("a1"), sq("a2"))), Err(ChessError::IllegalMove(_))));
    assert_eq!(game, snapshot);
}

#[test]
fn undo_restores_every_field() {
    let game = play(&GameState::new_game(), &["e2e4", "d7d5", "e4d5", "g8f6"]);
    let mut rewound = game.clone();
    for _ in 0..4 {
        rewound = rewound.undo_last_move().expect("history should not be empty yet");
    }
    assert_eq!(rewound, GameState::new_game());
    assert!(matches!(rewound.undo_last_move(), Err(ChessError::InvalidGameState(_))));
}
