fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = pokerhands_cli::run(args.to_vec(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn duel_reports_player_one_win() {
    let (code, out, _) = run_cli(&["pokerhands", "duel", "5C AD 5D AC 9C 7C 5H 8D TD KS"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand 1: 5C AD 5D AC 9C (Two Pair)"));
    assert!(out.contains("Hand 2: 7C 5H 8D TD KS (High Card)"));
    assert!(out.contains("Winner: Player 1"));
}

#[test]
fn duel_reports_player_two_win() {
    let (code, out, _) = run_cli(&["pokerhands", "duel", "8C TS KC 9H 4S 7D 2S 5D 3S AC"]);
    assert_eq!(code, 0);
    assert!(out.contains("Winner: Player 2"));
}

#[test]
fn duel_reports_tie_for_equal_keys() {
    // Same ranks on both sides, different suits
    let (code, out, _) = run_cli(&["pokerhands", "duel", "3H 7H 6S KC JS 3S 7D 6C KD JC"]);
    assert_eq!(code, 0);
    assert!(out.contains("Winner: Tie"));
}

#[test]
fn duel_json_output() {
    let (code, out, _) = run_cli(&[
        "pokerhands",
        "duel",
        "--json",
        "5C AD 5D AC 9C 7C 5H 8D TD KS",
    ]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["hand1"]["category"], "TwoPair");
    assert_eq!(value["hand2"]["category"], "HighCard");
    assert_eq!(value["winner"], 1);
}

#[test]
fn duel_json_tie_is_null_winner() {
    let (code, out, _) = run_cli(&[
        "pokerhands",
        "duel",
        "--json",
        "3H 7H 6S KC JS 3S 7D 6C KD JC",
    ]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert!(value["winner"].is_null());
}

#[test]
fn duel_rejects_wrong_token_count() {
    let (code, _, err) = run_cli(&["pokerhands", "duel", "AS KS QS JS TS"]);
    assert_eq!(code, 2);
    assert!(err.contains("expected 10 cards, got 5"));
}
