//! State file integration tests.
//!
//! Round-trips through the text format and the filesystem, and the
//! silent fallback for corrupt files.

use std::fs;

use proptest::prelude::*;

use grid_battle::store::{self, ParseError};
use grid_battle::core::grid::row_with_boundary;
use grid_battle::{
    run_with_rng, step, BattleConfig, BattleState, Counters, Faction, GameRng, Grid, Row,
    LAST_COLUMN, NO_A_CELLS, ROWS,
};

fn any_row() -> impl Strategy<Value = Row> {
    (NO_A_CELLS..=LAST_COLUMN).prop_map(row_with_boundary)
}

fn any_state() -> impl Strategy<Value = BattleState> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        prop::array::uniform6(any_row()),
    )
        .prop_map(|(a, b, days, record, rows)| {
            BattleState::new(Counters::new(a, b, days, record), Grid::from_rows(rows))
        })
}

proptest! {
    #[test]
    fn prop_format_parse_round_trip(state in any_state()) {
        prop_assert_eq!(store::parse(&store::format(&state)), Ok(state));
    }

    #[test]
    fn prop_format_is_seven_lines(state in any_state()) {
        let text = store::format(&state);
        prop_assert_eq!(text.lines().count(), 1 + ROWS);
        prop_assert!(text.ends_with('\n'));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_save_load_round_trip(state in any_state()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle_state.txt");

        store::save(&path, &state).unwrap();
        prop_assert_eq!(store::load(&path), state);
    }
}

#[test]
fn test_save_overwrites_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battle_state.txt");

    fs::write(&path, "some much longer previous content\n".repeat(20)).unwrap();
    store::save(&path, &BattleState::initial()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), store::format(&BattleState::initial()));
}

#[test]
fn test_load_falls_back_for_each_kind_of_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battle_state.txt");

    let corrupt = [
        "",
        "WINS A:1 B:1 DAYS:1 RECORD:1\nAAABB\n",
        "WINS A:one B:1\nAAABB\nAAABB\nAAABB\nAABBB\nAABBB\nAABBB\n",
        "WINS A:1 B:1\nAAABB\nAAABBB\nAAABB\nAABBB\nAABBB\nAABBB\n",
        "WINS A:1 B:1\nAAABB\nAAABB\nAAABB\nAABBB\nAA BB\nAABBB\n",
        "WINS A:1 B:1\nAAABB\nAAABB\nAAABB\nBBBBA\nAABBB\nAABBB\n",
    ];

    for text in corrupt {
        fs::write(&path, text).unwrap();
        assert_eq!(store::load(&path), BattleState::initial(), "input {text:?}");
    }
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battle_state.txt");
    fs::write(&path, [0xffu8, 0xfe, 0x00, 0x41]).unwrap();

    assert_eq!(store::load(&path), BattleState::initial());
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        ParseError::BadRowWidth { row: 2, width: 7 }.to_string(),
        "row 2 is 7 cells wide, expected 5"
    );
    assert_eq!(ParseError::MissingWinsTag.to_string(), "counter line must start with WINS");
    assert_eq!(
        ParseError::NotPrefix { row: 3 }.to_string(),
        "row 3 has B-cells before its last A-cell"
    );
}

/// A corrupt file is replaced on the next invocation, not propagated.
#[test]
fn test_run_recovers_from_corrupt_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = BattleConfig::in_dir(dir.path());
    fs::write(&config.state_path, "not a battle").unwrap();

    let mut rng = GameRng::new(5);
    let report = run_with_rng(&config, &mut rng).unwrap();

    assert_eq!(report.state.counters.days, 1);
    assert_eq!(store::parse(&fs::read_to_string(&config.state_path).unwrap()), Ok(report.state));
}

/// Successive invocations through the file match stepping in memory.
#[test]
fn test_runs_match_in_memory_steps() {
    let dir = tempfile::tempdir().unwrap();
    let config = BattleConfig::in_dir(dir.path());
    let mut file_rng = GameRng::new(2024);
    let mut memory_rng = GameRng::new(2024);

    let mut expected = BattleState::initial();
    for _ in 0..300 {
        let report = run_with_rng(&config, &mut file_rng).unwrap();
        let (next, outcome) = step(expected, &mut memory_rng);

        assert_eq!(report.outcome, outcome);
        assert_eq!(report.state, next);
        expected = next;
    }

    assert_eq!(store::load(&config.state_path), expected);
    let wins = expected.counters.wins[Faction::A] + expected.counters.wins[Faction::B];
    assert!(wins > 0);
}
