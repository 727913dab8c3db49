use std::process::Command;

fn sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_reports_scripted_game() {
    let output = sim(&["3", "3", "3", "1a,2b,3c", "2a,2c"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["outcome"], "WinnerA");
    assert_eq!(v["moves"], 5);
    assert_eq!(v["config"]["win_length"], 3);
    assert_eq!(v["board"], serde_json::json!(["X..", "OXO", "..X"]));
    assert!(v["last_message"]["a"]
        .as_str()
        .unwrap()
        .ends_with("Congratulations Player A. You won!\n"));
}

#[test]
fn sim_binary_rejects_bad_usage() {
    assert!(!sim(&["3", "3"]).status.success());
    assert!(!sim(&["0", "3", "3", "1a", "2a"]).status.success());
}
