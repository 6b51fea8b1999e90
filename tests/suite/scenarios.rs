//! End-to-end games driven through `play` with scripted judge transcripts.

use knight_engine::{AxisPolicy, ErrorKind, GameError, SessionOutcome, SessionStatus};
use knight_types::{Bounds, Coordinate, Interval, Rectangle};

use crate::common::{bootstrap, bootstrap_with_turns, cells, hunt, play_transcript};

#[test]
fn bomb_in_lower_right_quadrant_is_found_in_three_jumps() {
    let input = "10 5\n20\n0 0\nDR\nDR\nL\nFOUND\n";
    let (result, written) = play_transcript(input, AxisPolicy::Simultaneous);

    assert_eq!(written, "5 2\n7 3\n6 3\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::Found {
            bomb: Coordinate::new(6, 3),
            turns_used: 3,
        }
    );
}

#[test]
fn sequential_policy_moves_one_axis_per_jump() {
    let input = "10 5\n20\n0 0\nDR\nDR\nFOUND\n";
    let (result, written) = play_transcript(input, AxisPolicy::Sequential);

    assert_eq!(written, "5 1\n6 3\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::Found {
            bomb: Coordinate::new(6, 3),
            turns_used: 2,
        }
    );
}

#[test]
fn same_bomb_is_found_under_both_policies() {
    let bomb = Coordinate::new(6, 3);
    for policy in [AxisPolicy::Simultaneous, AxisPolicy::Sequential] {
        let run = hunt(bootstrap(10, 5, (0, 0)), bomb, policy);
        assert_eq!(run.found, Some(bomb), "{policy:?}");
        assert_eq!(run.session.status(), SessionStatus::Found(bomb));
    }
}

#[test]
fn hints_are_case_insensitive() {
    let (result, written) = play_transcript("10 5\n20\n0 0\ndr\nfound\n", AxisPolicy::default());
    assert_eq!(written, "5 2\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::Found {
            bomb: Coordinate::new(5, 2),
            turns_used: 1,
        }
    );
}

#[test]
fn repeated_down_right_pins_the_bottom_right_corner() {
    let (result, written) =
        play_transcript("10 5\n20\n0 0\nDR\nDR\nDR\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "5 2\n7 3\n8 4\n");

    let SessionOutcome::InputClosed { last_probe, turns_used } = result.unwrap() else {
        panic!("stream ended without a verdict");
    };
    assert_eq!(last_probe, Coordinate::new(8, 4));
    assert_eq!(turns_used, 3);

    // Nothing lies below the bottom row any more.
    let (result, written) =
        play_transcript("10 5\n20\n0 0\nDR\nDR\nDR\nDR\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "5 2\n7 3\n8 4\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::DataIntegrity);
}

#[test]
fn running_out_of_turns_reports_the_remaining_window() {
    let (result, written) = play_transcript("10 5\n2\n0 0\nDR\nDR\nL\n", AxisPolicy::Simultaneous);

    // The third hint is never read.
    assert_eq!(written, "5 2\n7 3\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::Exhausted {
            window: Rectangle::new(Interval::new(6, 9).unwrap(), Interval::new(3, 4).unwrap()),
            last_probe: Coordinate::new(7, 3),
            turns_used: 2,
        }
    );
}

#[test]
fn landing_on_the_last_candidate_with_the_last_turn_is_a_win() {
    let (result, written) =
        play_transcript("1 5\n3\n0 0\nD\nD\nD\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "0 2\n0 3\n0 4\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::Found {
            bomb: Coordinate::new(0, 4),
            turns_used: 3,
        }
    );
}

#[test]
fn budget_equal_to_the_worst_case_never_runs_out() {
    let bounds = Bounds::new(10, 5).unwrap();
    for policy in [AxisPolicy::Simultaneous, AxisPolicy::Sequential] {
        let turns = i64::from(policy.turn_limit(&bounds).max(2));
        for bomb in cells(&bounds) {
            let run = hunt(bootstrap_with_turns(10, 5, turns, (0, 0)), bomb, policy);
            assert_eq!(
                run.session.status(),
                SessionStatus::Found(run.session.state().last_probe()),
                "{policy:?} bomb {bomb}: jumps {:?}",
                run.jumps
            );
            assert_eq!(run.session.state().last_probe(), bomb);
        }
    }
}

#[test]
fn closed_input_ends_the_game_quietly() {
    let (result, written) = play_transcript("10 5\n20\n0 0\nDR\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "5 2\n");
    assert_eq!(
        result.unwrap(),
        SessionOutcome::InputClosed {
            last_probe: Coordinate::new(5, 2),
            turns_used: 1,
        }
    );
}

#[test]
fn zero_width_building_is_rejected_before_any_jump() {
    let (result, written) = play_transcript("0 5\n20\n0 0\nU\n", AxisPolicy::Simultaneous);
    assert!(written.is_empty());
    assert!(matches!(result, Err(GameError::InvalidArgument(_))));
}

#[test]
fn malformed_headers_are_invalid_arguments() {
    let cases = [
        ("10 4\n20\n0 0\n", "building too short"),
        ("10001 5\n20\n0 0\n", "building too wide"),
        ("10 5\n1\n0 0\n", "too few turns"),
        ("10 5\n101\n0 0\n", "too many turns"),
        ("10 5\n20\n10 0\n", "start outside the building"),
        ("10 5\n20\n0 -1\n", "negative start"),
        ("10 five\n20\n0 0\n", "non-numeric height"),
        ("10 5\n20\n0\n", "truncated header"),
    ];

    for (input, label) in cases {
        let (result, written) = play_transcript(input, AxisPolicy::default());
        assert!(written.is_empty(), "{label}: wrote {written:?}");
        let err = result.expect_err(label);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{label}: {err}");
    }
}

#[test]
fn up_hint_on_the_top_row_is_a_protocol_violation() {
    let (result, written) = play_transcript("10 5\n20\n3 0\nU\n", AxisPolicy::Simultaneous);
    assert!(written.is_empty());
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    assert!(err.to_string().contains("3 0"), "{err}");
}

#[test]
fn unknown_hint_token_is_a_protocol_violation() {
    let (result, written) = play_transcript("10 5\n20\n0 0\nDR\nNE\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "5 2\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::DataIntegrity);
}

#[test]
fn direction_after_convergence_is_an_invalid_state() {
    // 1x5 from the top: D narrows to [1, 4], then D, then D pins row 4.
    let (result, written) =
        play_transcript("1 5\n20\n0 0\nD\nD\nD\nD\n", AxisPolicy::Simultaneous);
    assert_eq!(written, "0 2\n0 3\n0 4\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidState);
}
