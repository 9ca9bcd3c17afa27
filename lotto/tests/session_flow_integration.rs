/// Integration tests for full game-session flows
///
/// These tests drive a session the way a presentation layer would: toggle
/// numbers, submit rounds, finish, and reset, using scripted draws so every
/// outcome is known in advance.
use lotto::{
    GameConfig, GameError, GameSession, PolicyOutcome, PoolKind, PrizeRule, PrizeTable,
    ScriptedDraw, SessionState,
};

const PICK_REGULAR: [u8; 6] = [1, 2, 3, 4, 5, 6];

fn pick_all(session: &mut GameSession, regular: &[u8], strong: &[u8]) {
    for &n in regular {
        session.toggle_selection(PoolKind::Regular, n).unwrap();
    }
    for &n in strong {
        session.toggle_selection(PoolKind::Strong, n).unwrap();
    }
}

#[test]
fn test_jackpot_end_to_end() {
    let mut session = GameSession::with_drawer(
        GameConfig::default(),
        ScriptedDraw::new().round([1, 2, 3, 4, 5, 6], [1]),
    )
    .unwrap();

    pick_all(&mut session, &PICK_REGULAR, &[1]);
    assert!(session.is_selection_complete());

    let result = session.submit_round().unwrap();
    assert_eq!(result.matching_regular, 6);
    assert_eq!(result.matching_strong, 1);
    assert_eq!(result.prize, Some(1000));
    assert_eq!(session.current_balance(), 1000 - 300 + 1000);
    assert_eq!(result.round, 1);
}

#[test]
fn test_second_prize_without_strong_match() {
    let mut session = GameSession::with_drawer(
        GameConfig::default(),
        ScriptedDraw::new().round(PICK_REGULAR, [2]),
    )
    .unwrap();

    let result = session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    assert_eq!(result.matching_strong, 0);
    assert_eq!(result.prize, Some(600));
    assert_eq!(result.new_balance, 1300);
}

#[test]
fn test_five_regular_matches_pay_nothing() {
    let mut session = GameSession::with_drawer(
        GameConfig::default(),
        ScriptedDraw::new().round([1, 2, 3, 4, 5, 37], [1]),
    )
    .unwrap();

    let result = session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    assert_eq!((result.matching_regular, result.matching_strong), (5, 1));
    assert_eq!(result.prize, None);
    assert_eq!(result.new_balance, 700);
    assert!(result.to_string().ends_with("Sorry, no prize this time."));
}

#[test]
fn test_limit_never_exceeded_while_picking() {
    let mut session = GameSession::configure(GameConfig::default()).unwrap();

    for n in 1..=37 {
        let _ = session.toggle_selection(PoolKind::Regular, n);
        assert!(session.current_selection(PoolKind::Regular).len() <= 6);
    }
    assert!(session.is_pool_exhausted(PoolKind::Regular));

    let selectable: Vec<u8> = (1..=37)
        .filter(|&n| session.is_selectable(PoolKind::Regular, n))
        .collect();
    assert_eq!(selectable, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_wrong_selection_size_leaves_wallet_alone() {
    let mut session = GameSession::configure(GameConfig::default()).unwrap();
    pick_all(&mut session, &[1, 2, 3, 4, 5], &[1]);

    let err = session.submit_round().unwrap_err();
    assert!(matches!(err, GameError::SelectionSize { .. }));
    assert_eq!(session.current_balance(), 1000);
    assert_eq!(session.rounds_played(), 0);
    assert!(session.wallet().history().is_empty());
}

#[test]
fn test_missing_strong_pick_rejected() {
    let mut session = GameSession::configure(GameConfig::default()).unwrap();
    pick_all(&mut session, &PICK_REGULAR, &[]);

    let err = session.submit_round().unwrap_err();
    assert_eq!(
        err,
        GameError::SelectionSize {
            kind: PoolKind::Strong,
            expected: 1,
            actual: 0
        }
    );
}

#[test]
fn test_size_error_reported_before_disabled() {
    let mut session = GameSession::configure(GameConfig::default()).unwrap();
    session.finish().unwrap();

    let err = session.submit_selection(&[1, 2], &[1]).unwrap_err();
    assert!(matches!(err, GameError::SelectionSize { .. }));

    let err = session.submit_selection(&PICK_REGULAR, &[1]).unwrap_err();
    assert_eq!(err, GameError::GameDisabled);
}

#[test]
fn test_reset_restores_everything() {
    let mut session = GameSession::with_drawer(
        GameConfig::default(),
        ScriptedDraw::new().round([30, 31, 32, 33, 34, 35], [7]),
    )
    .unwrap();

    session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    pick_all(&mut session, &[10, 11], &[2]);
    assert_eq!(session.current_balance(), 400);

    assert_eq!(session.reset_session(), 1000);
    assert_eq!(session.current_balance(), 1000);
    assert!(session.current_selection(PoolKind::Regular).is_empty());
    assert!(session.current_selection(PoolKind::Strong).is_empty());
    assert_eq!(session.session_state(), SessionState::Idle);
}

#[test]
fn test_finish_reports_final_balance_once() {
    let mut session = GameSession::with_drawer(
        GameConfig::default(),
        ScriptedDraw::new().round([1, 2, 3, 4, 10, 11], [1]),
    )
    .unwrap();
    let result = session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    assert_eq!(result.prize, Some(400));

    assert_eq!(session.finish(), Ok(1100));
    assert_eq!(session.finish(), Err(GameError::AlreadyEnded));
    assert_eq!(session.current_balance(), 1100);
}

#[test]
fn test_custom_prize_table_is_pure_data() {
    let config = GameConfig {
        prize_table: PrizeTable::new(vec![PrizeRule::new(0, 0, 50)]),
        ..GameConfig::default()
    };
    let mut session = GameSession::with_drawer(
        config,
        ScriptedDraw::new().round([30, 31, 32, 33, 34, 35], [7]),
    )
    .unwrap();

    let result = session.submit_selection(&PICK_REGULAR, &[1]).unwrap();
    assert_eq!(result.prize, Some(50));
    assert_eq!(result.new_balance, 750);
    assert_eq!(result.outcome, PolicyOutcome::Continue);
}

#[test]
fn test_seeded_sessions_draw_identically() {
    use lotto::RandomDraw;

    let mut a = GameSession::with_drawer(GameConfig::default(), RandomDraw::seeded(42)).unwrap();
    let mut b = GameSession::with_drawer(GameConfig::default(), RandomDraw::seeded(42)).unwrap();

    for _ in 0..3 {
        let ra = a.submit_selection(&PICK_REGULAR, &[1]).unwrap();
        let rb = b.submit_selection(&PICK_REGULAR, &[1]).unwrap();
        assert_eq!(ra.drawn_regular, rb.drawn_regular);
        assert_eq!(ra.drawn_strong, rb.drawn_strong);
        a.reset_session();
        b.reset_session();
    }
}
