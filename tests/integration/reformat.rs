#[test]
fn test_reformat() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("single", "42;", "42");
    fixture.add_case("vars", "a=3;\nb=4;\na+b;", "7");

    fixture
        .cmd()
        .arg("reformat")
        .assert()
        .success()
        .stdout_eq(
            "return 42;
a=3;
b=4;
return a+b;
",
        );

    assert_eq!(fixture.read("single/in"), "return 42;");
    assert_eq!(fixture.read("vars/in"), "a=3;\nb=4;\nreturn a+b;");
    assert_eq!(fixture.read("vars/out"), "7");

    fixture.close();
}

#[test]
fn test_reformat_dry_run() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("vars", "a=3;a;", "3");

    fixture
        .cmd()
        .args(["reformat", "--dry-run"])
        .assert()
        .success()
        .stdout_eq(
            "a=3;
return a;
",
        );

    assert_eq!(fixture.read("vars/in"), "a=3;a;");

    fixture.close();
}

#[test]
fn test_reformat_config_separator() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("pipe", "x|y|", "1");
    fixture.write_file("fixturegen.toml", "separator = \"|\"\n");

    fixture.cmd().arg("reformat").assert().success();

    assert_eq!(fixture.read("pipe/in"), "x|\nreturn y|");

    fixture.close();
}

#[test]
fn test_reformat_without_separator() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("bare", "42", "42");

    fixture
        .cmd()
        .arg("reformat")
        .assert()
        .failure()
        .stderr_matches(
            "error: failed to reformat [..]: no `;` in snippet \"42\"
",
        );

    assert_eq!(fixture.read("bare/in"), "42");

    fixture.close();
}
