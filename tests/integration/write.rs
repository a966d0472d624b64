#[test]
fn test_write_prompts_for_each_case() {
    let fixture = crate::util::Fixture::new();
    fixture.write_file(
        "table.txt",
        table!["", r#"assert 21 "5+20-4""#, "", "assert 0 '0==1'"],
    );

    fixture
        .cmd()
        .args(["write", "table.txt"])
        .stdin("add_sub\neq_false\n")
        .assert()
        .success()
        .stdout_eq(
            "5+20-4 => 21
Input test name
> 0==1 => 0
Input test name
> created testcases/add_sub
created testcases/eq_false
",
        );

    assert_eq!(fixture.read("add_sub/in"), "5+20-4");
    assert_eq!(fixture.read("add_sub/out"), "21");
    assert_eq!(fixture.read("eq_false/in"), "0==1");
    assert_eq!(fixture.read("eq_false/out"), "0");

    fixture.close();
}

#[test]
fn test_write_never_overwrites() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("eq", "1==1\n", "1\n");
    fixture.write_file("table.txt", table!["assert 0 '0==1'"]);

    fixture
        .cmd()
        .args(["write", "table.txt"])
        .stdin("eq\n\neq2\n")
        .assert()
        .success()
        .stdout_eq(
            "0==1 => 0
Input test name
> Input another test name
> Input another test name
> created testcases/eq2
",
        );

    assert_eq!(fixture.read("eq/in"), "1==1\n");
    assert_eq!(fixture.read("eq/out"), "1\n");
    assert_eq!(fixture.read("eq2/in"), "0==1");

    fixture.close();
}

#[test]
fn test_write_auto_name() {
    let fixture = crate::util::Fixture::new();
    fixture.add_case("cmp1", "1<2", "1");
    fixture.write_file("table.txt", table!["assert 1 '0<1'", "assert 0 '1<1'"]);

    fixture
        .cmd()
        .args(["write", "table.txt", "--auto-name", "cmp"])
        .assert()
        .success()
        .stdout_eq(
            "created testcases/cmp2
created testcases/cmp3
",
        );

    assert_eq!(fixture.read("cmp1/in"), "1<2");
    assert_eq!(fixture.read("cmp2/in"), "0<1");
    assert_eq!(fixture.read("cmp3/in"), "1<1");

    fixture.close();
}

#[test]
fn test_write_greedy_quotes() {
    let fixture = crate::util::Fixture::new();
    fixture.write_file("table.txt", table![r#"assert "'7'" "'a=7; a;'""#]);

    fixture
        .cmd()
        .args(["write", "table.txt", "--quotes", "greedy", "--auto-name", "t"])
        .assert()
        .success();

    assert_eq!(fixture.read("t1/in"), "a=7; a;");
    assert_eq!(fixture.read("t1/out"), "7");

    fixture.close();
}

#[test]
fn test_write_malformed_line() {
    let fixture = crate::util::Fixture::new();
    fixture.write_file("table.txt", table!["assert 1 '1'", "assert 42"]);

    fixture
        .cmd()
        .args(["write", "table.txt", "--auto-name", "t"])
        .assert()
        .failure()
        .stderr_matches(
            "error: invalid case table table.txt: line 2: missing whitespace [..]
",
        );

    assert!(!fixture.root().join("t1").exists());

    fixture.close();
}

#[test]
fn test_write_input_closed() {
    let fixture = crate::util::Fixture::new();
    fixture.write_file("table.txt", table!["assert 1 '1'"]);

    fixture
        .cmd()
        .args(["write", "table.txt"])
        .stdin("")
        .assert()
        .failure()
        .stderr_matches(
            "error: input ended before a name was given for line 1 (`1`)
",
        );

    fixture.close();
}

#[test]
fn test_missing_root() {
    let fixture = crate::util::Fixture::new();
    fixture.write_file("table.txt", table!["assert 1 '1'"]);

    fixture
        .cmd()
        .args(["write", "table.txt", "--root", "nowhere"])
        .assert()
        .failure()
        .stderr_matches(
            "error: failed to open fixtures root nowhere: [..]
",
        );

    fixture.close();
}
