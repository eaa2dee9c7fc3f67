//! Game sessions driven through the public API

use noughts::{
    AlphaBeta, AppConfig, Board, BoardGeometry, EngineKind, Error, Game, Minimax, Move, Outcome,
    Player,
};

#[test]
fn engine_self_play_on_3x3_is_a_draw() {
    let mut game = Game::new(3).unwrap();
    let mut engine = AlphaBeta::new();
    while !game.is_over() {
        assert!(game.play_engine_move(&mut engine).unwrap().is_some());
    }
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.moves().len(), 9);
    assert_eq!(game.moves()[0], Move::new(0, 0));
}

#[test]
fn engine_punishes_a_blunder() {
    // O ignores the corner threat and X converts
    let mut game = Game::from_board(Board::from_string("X../.../...").unwrap());
    game.play(Move::new(0, 1)).unwrap();
    let mut engine = Minimax::new();
    while !game.is_over() {
        if game.current_player() == Player::X {
            game.play_engine_move(&mut engine).unwrap();
        } else {
            let mv = game.board().legal_moves()[0];
            game.play(mv).unwrap();
        }
    }
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
}

#[test]
fn turn_is_recomputed_after_undo() {
    let mut game = Game::new(4).unwrap();
    for mv in [Move::new(0, 0), Move::new(3, 3), Move::new(1, 1)] {
        game.play(mv).unwrap();
    }
    assert_eq!(game.current_player(), Player::O);

    game.undo().unwrap();
    assert_eq!(game.current_player(), Player::X);
    game.undo().unwrap();
    assert_eq!(game.current_player(), Player::O);

    game.redo().unwrap();
    game.redo().unwrap();
    assert_eq!(game.moves().len(), 3);
    assert!(matches!(game.redo(), Err(Error::NothingToRedo)));
}

#[test]
fn states_replay_to_current_board() {
    let mut game = Game::new(3).unwrap();
    for mv in [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2)] {
        game.play(mv).unwrap();
    }
    let states = game.state_sequence().unwrap();
    assert_eq!(states.len(), 4);
    for pair in states.windows(2) {
        assert_eq!(pair[1].occupied_count(), pair[0].occupied_count() + 1);
    }
    assert_eq!(states.last(), Some(game.board()));
}

#[test]
fn pointer_input_drives_a_game() {
    let config = AppConfig::default().with_board_size(4).with_board_width(400);
    let geometry = config.geometry().unwrap();
    let mut game = Game::new(config.board_size).unwrap();

    // Four clicks down the left edge for X, O answering in column 3
    let clicks = [(10, 10), (390, 10), (10, 110), (390, 110), (10, 210), (390, 210), (10, 310)];
    for (x, y) in clicks {
        let mv = geometry.cell_at(x, y).unwrap();
        game.play(mv).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
    assert_eq!(
        game.board().winning_line(),
        Some((
            Player::X,
            vec![Move::new(0, 0), Move::new(1, 0), Move::new(2, 0), Move::new(3, 0)]
        ))
    );
}

#[test]
fn clicks_past_the_board_are_out_of_range() {
    let geometry = BoardGeometry::new(3, 400).unwrap();
    // 400 / 3 leaves a one-pixel strip past the last cell
    assert_eq!(geometry.board_height(), 399);
    assert!(matches!(
        geometry.cell_at(399, 0),
        Err(Error::OutOfRange { row: 0, col: 3, size: 3 })
    ));
    assert_eq!(geometry.cell_at(398, 398).unwrap(), Move::new(2, 2));
}

#[test]
fn config_engine_plays_for_its_side() {
    let config = AppConfig::default()
        .with_engine(EngineKind::Minimax)
        .with_computer(Player::O);
    let mut engine = config.engine.into_engine();
    let mut game = Game::new(config.board_size).unwrap();

    game.play(Move::new(1, 1)).unwrap();
    assert_eq!(Some(game.current_player()), config.computer);
    let reply = game.play_engine_move(engine.as_mut()).unwrap().unwrap();
    // Every edge reply to a centre opening loses; the first corner holds
    assert_eq!(reply, Move::new(0, 0));
    assert_eq!(engine.name(), "minimax");
}
