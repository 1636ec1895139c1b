//! 全局性质测试：遍历所有可达局面

use std::collections::HashSet;

use protocol::{new_game, play, Board, GameSession, GameStatus, Notation, Player};
use tictactoe_ai::{best_move, SearchConfig, SearchEngine};

/// 从空棋盘按合法交替落子可达的全部局面（含终局）及其走子方
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    let mut stack = vec![(new_game(), Player::X)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        result.push((board, to_move));

        if board.status().is_terminal() {
            continue;
        }
        for index in board.empty_cells() {
            let mut next = board;
            play(&mut next, index, to_move).unwrap();
            stack.push((next, to_move.opponent()));
        }
    }

    result
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_at_most_one_winner() {
    for (board, _) in reachable_positions() {
        assert!(
            !(board.check_win(Player::X) && board.check_win(Player::O)),
            "双方同时连线: {}",
            Notation::board_to_string(&board)
        );
    }
}

#[test]
fn test_best_move_is_always_empty_cell() {
    let mut engine = SearchEngine::default();

    for (board, to_move) in reachable_positions() {
        if board.status().is_terminal() {
            assert!(engine.best_move(&board, to_move).is_err());
            continue;
        }

        let before = board;
        let index = engine.best_move(&board, to_move).unwrap();
        assert_eq!(board, before);
        assert!(
            board.get(index).is_some_and(|cell| cell.is_empty()),
            "局面 {} 选了非空格 {}",
            Notation::board_to_string(&board),
            index
        );
    }
}

#[test]
fn test_table_matches_plain_search_everywhere() {
    let mut with_table = SearchEngine::default();
    let mut plain = SearchEngine::new(SearchConfig {
        use_transposition_table: false,
        ..SearchConfig::default()
    });

    for (board, to_move) in reachable_positions() {
        if board.status().is_terminal() {
            continue;
        }
        assert_eq!(
            with_table.best_move(&board, to_move),
            plain.best_move(&board, to_move),
            "局面 {}",
            Notation::board_to_string(&board)
        );
    }
}

fn self_play(mut engine: SearchEngine) -> GameSession {
    let mut session = GameSession::new();
    while !session.is_over() {
        let index = engine
            .best_move(session.board(), session.current_turn())
            .unwrap();
        session.play(index).unwrap();
    }
    session
}

#[test]
fn test_engine_vs_engine_is_draw() {
    let session = self_play(SearchEngine::default());
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.history().len(), 9);

    let session = self_play(SearchEngine::new(SearchConfig {
        use_transposition_table: false,
        ..SearchConfig::default()
    }));
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_engine_never_loses_from_any_reply() {
    // 人类 X 任意开局后，O 由引擎接手，双方都用引擎走完也不会分出胜负
    for opening in 0..9 {
        let mut session = GameSession::new();
        session.play(opening).unwrap();
        let mut engine = SearchEngine::default();
        while !session.is_over() {
            let index = engine
                .best_move(session.board(), session.current_turn())
                .unwrap();
            session.play(index).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Draw, "开局 {}", opening);
    }
}

#[test]
fn test_completes_own_row() {
    // [X,X,_, O,O,_, _,_,_]，O 走
    let board = Notation::parse_board("XX./OO./...").unwrap();
    assert_eq!(best_move(&board, Player::O), Ok(5));
}

#[test]
fn test_diagonal_corners_position() {
    // [X,_,_, _,O,_, _,_,X]，O 走：下角必输，下边和棋
    let session = Notation::parse("X../.O./..X o").unwrap();
    let index = best_move(session.board(), Player::O).unwrap();
    assert_eq!(index, 1);

    let mut engine = SearchEngine::default();
    let mut session = session;
    while !session.is_over() {
        let index = engine
            .best_move(session.board(), session.current_turn())
            .unwrap();
        session.play(index).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_winning_move_reports_line() {
    let mut session = Notation::parse("X../XO./.O. x").unwrap();
    // X 下 6 连成第一列
    let index = best_move(session.board(), Player::X).unwrap();
    assert_eq!(index, 6);
    assert_eq!(
        session.play(index),
        Ok(GameStatus::Win {
            player: Player::X,
            line: [0, 3, 6]
        })
    );
}
