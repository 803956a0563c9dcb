use assert_cmd::Command;
use predicates::prelude::*;

fn run_in(dir: &std::path::Path) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("fixturegen").unwrap();
    cmd.current_dir(dir).assert()
}

#[test]
fn full_run_materializes_the_library() {
    let tmp = tempfile::tempdir().unwrap();

    run_in(tmp.path())
        .success()
        .stdout(predicate::str::contains(
            "Created fixture for 'Doki Doki Literature Club!' (AppID: 698780) by 'Team Salvato'",
        ))
        .stdout(predicate::str::contains(
            "Finished creating fixtures for 96 games.",
        ));

    let marker = tmp
        .path()
        .join("games")
        .join("Team Salvato")
        .join("Doki Doki Literature Club!")
        .join("698780")
        .join("dummy.swf");
    assert!(marker.exists());
    assert_eq!(std::fs::metadata(&marker).unwrap().len(), 0);

    // The colon in the title must not survive into the path.
    assert!(
        tmp.path()
            .join("games")
            .join("ALICE IN DISSONANCE")
            .join("fault - milestone two side_above")
            .join("344770")
            .is_dir()
    );
}

#[test]
fn rerunning_over_an_existing_library_succeeds_with_the_same_count() {
    let tmp = tempfile::tempdir().unwrap();

    run_in(tmp.path()).success();
    run_in(tmp.path()).success().stdout(predicate::str::contains(
        "Finished creating fixtures for 96 games.",
    ));
}
