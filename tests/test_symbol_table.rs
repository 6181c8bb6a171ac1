use assert_cmd::Command;

fn input(name: &str) -> String {
    format!("{}/tests/files/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_symbol_table() {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.arg(input("declarations.c")).env("NO_COLOR", "1");

    let output = command.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines[0].starts_with("Lexeme"));
    assert!(lines[1].chars().all(|c| c == '-'));

    // first-seen order
    let lexemes: Vec<_> = lines[2..]
        .iter()
        .filter_map(|l| l.split_whitespace().next())
        .take(6)
        .collect();
    assert_eq!(lexemes, vec!["int", "main", "(", ")", "{", "x"]);

    let rate = lines.iter().find(|l| l.starts_with("rate ")).unwrap();
    assert!(rate.contains("Identifier"));
    assert!(rate.contains("float"));

    let char_lit = lines.iter().find(|l| l.starts_with("'a'")).unwrap();
    assert!(char_lit.contains("CharLiteral"));
    assert!(char_lit.contains("Global"));
}

#[test]
fn test_token_listing() {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command
        .arg(input("declarations.c"))
        .args(["--tokens", "--no-table"])
        .env("NO_COLOR", "1");

    let output = command.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Identifier(\"x\", type=int)"));
    assert!(stdout.contains("FloatLiteral(\"2.5\", type=float, value=2.5)"));
    assert!(!stdout.contains("Lexeme"));
}

#[test]
fn test_missing_file() {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.arg(input("does_not_exist.c"));
    command.assert().failure();
}
