use super::*;

#[test]
fn test_list_preserves_file_order() {
    let ctx = TestContext::new();
    ctx.create_requirements(
        "A==1.0\n    # via demo (pyproject.toml)\nB==2.0\n    # via A\nC==3.0\n    # via demo (pyproject.toml)\n",
    );

    ctx.req2uv()
        .arg("list")
        .assert()
        .success()
        .stdout("A\nC\n");
}

#[test]
fn test_list_keeps_duplicates() {
    let ctx = TestContext::new();
    ctx.create_requirements(
        "requests==2.31.0\n    # via demo (pyproject.toml)\nrequests==2.31.0\n    # via demo (pyproject.toml)\n",
    );

    ctx.req2uv()
        .arg("list")
        .assert()
        .success()
        .stdout("requests\nrequests\n");
}

#[test]
fn test_list_json_direct_only() {
    let ctx = TestContext::new();
    ctx.create_requirements(UV_COMPILED);

    ctx.req2uv()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"fastapi\""))
        .stdout(predicate::str::contains("\"kind\": \"transitive\"").not());
}
