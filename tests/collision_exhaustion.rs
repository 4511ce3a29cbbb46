use std::fs;
use tempfile::tempdir;

use dirculese::organize::{collision, Resolution, SkipReason, MAX_COLLISION_ATTEMPTS};
use dirculese::{apply_rule, Location, Outcome, Rule, RuleKind};

#[test]
fn resolving_again_yields_next_free_number() {
    let td = tempdir().unwrap();
    for n in ["f", "f0", "f1"] {
        fs::write(td.path().join(n), b"").unwrap();
    }
    assert_eq!(
        collision::resolve(&td.path().join("f")),
        Resolution::Renamed(td.path().join("f2"))
    );
}

#[test]
fn exhausted_destination_skips_file_and_continues() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(dst.path().join("x.png"), b"").unwrap();
    for i in 0..MAX_COLLISION_ATTEMPTS {
        fs::write(dst.path().join(format!("x{i}.png")), b"").unwrap();
    }
    fs::write(src.path().join("x.png"), b"keep me").unwrap();
    fs::write(src.path().join("y.png"), b"move me").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Extension,
        vec!["png".into()],
    );
    let outcomes = apply_rule(&rule).unwrap();

    assert_eq!(outcomes.len(), 2);
    let skipped = outcomes
        .iter()
        .find(|o| matches!(o, Outcome::Skipped { .. }))
        .expect("one file should be skipped");
    assert!(matches!(
        skipped,
        Outcome::Skipped { reason: SkipReason::TooManyCollisions { .. }, .. }
    ));
    assert!(skipped.to_string().starts_with("Didn't move the file x.png"));
    assert_eq!(fs::read(src.path().join("x.png")).unwrap(), b"keep me");
    assert_eq!(fs::read(dst.path().join("y.png")).unwrap(), b"move me");
}
