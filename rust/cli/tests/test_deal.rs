use sniper_cli::run;

fn deal(args: &[&str]) -> String {
    let mut argv = vec!["sniper", "deal"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    String::from_utf8(out).unwrap()
}

#[test]
fn deal_shows_community_and_every_seat() {
    let text = deal(&["--seed", "42"]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Seed: 42");
    assert!(lines[1].starts_with("Community: ["));
    assert_eq!(lines.len(), 2 + 4);
    for (i, line) in lines[2..].iter().enumerate() {
        assert!(line.starts_with(&format!("P{}: [", i + 1)), "{}", line);
        assert!(line.contains('('), "score missing: {}", line);
    }
}

#[test]
fn same_seed_same_deal() {
    assert_eq!(deal(&["--seed", "12345"]), deal(&["--seed", "12345"]));
}

#[test]
fn unseeded_deal_prints_its_seed() {
    let text = deal(&[]);
    let seed_line = text.lines().next().unwrap();
    let seed: u64 = seed_line.trim_start_matches("Seed: ").parse().unwrap();
    assert_eq!(deal(&["--seed", &seed.to_string()]), text);
}
