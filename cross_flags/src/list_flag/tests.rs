//! Unit tests for list flag parsing, validation and assignment rules.

use anyhow::{Result, ensure};
use rstest::rstest;

use super::{ArchFlag, EnvAssignment, EnvFlag, ListFlag, TagsFlag};
use crate::error::ListFlagError;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[rstest]
#[case("a=1,b=2", &["a=1", "b=2"])]
#[case("FOO=", &["FOO="])]
#[case("=", &["="])]
#[case(" CC=clang", &[" CC=clang"])]
fn env_set_accepts_single_separator_entries(
    #[case] raw: &str,
    #[case] expected: &[&str],
) -> Result<()> {
    let mut env = EnvFlag::default();
    env.set(raw)?;
    ensure!(
        env.as_slice() == owned(expected).as_slice(),
        "expected {expected:?}, got {env:?}"
    );
    Ok(())
}

#[rstest]
#[case("a=1,b")]
#[case("FOO=BAR=BAZ")]
#[case("")]
#[case("a=1,")]
#[case(" foo , bar ")]
fn env_set_rejects_malformed_entries(#[case] raw: &str) {
    let mut env = EnvFlag::default();
    let err = env.set(raw).expect_err("malformed env entry");
    assert!(
        matches!(err, ListFlagError::MalformedEnvEntry { .. }),
        "unexpected error for {raw:?}: {err:?}"
    );
    assert_eq!(
        err.to_string(),
        "env var must be defined as KEY=VALUE or KEY="
    );
}

#[test]
fn env_error_names_the_offending_entry() {
    let mut env = EnvFlag::default();
    let err = env.set("a=1,b,c=3").expect_err("malformed env entry");
    assert_eq!(
        err,
        ListFlagError::MalformedEnvEntry {
            entry: String::from("b")
        }
    );
}

#[test]
fn failed_env_set_keeps_previous_value() -> Result<()> {
    let mut env = EnvFlag::default();
    env.set("GOARM=7")?;
    ensure!(env.set("a=1,b").is_err(), "expected malformed entry");
    ensure!(
        env.as_slice() == owned(&["GOARM=7"]).as_slice(),
        "failed set must not modify the list, got {env:?}"
    );
    Ok(())
}

#[test]
fn failed_env_set_on_empty_flag_leaves_it_empty() {
    let mut env = EnvFlag::default();
    assert!(env.set("a=1,b").is_err());
    assert!(env.is_empty());
}

#[rstest]
#[case("", &[""])]
#[case("netgo", &["netgo"])]
#[case(" foo , bar ", &["foo", "bar"])]
#[case("release,", &["release", ""])]
#[case(",release", &["", "release"])]
#[case("a,a", &["a", "a"])]
fn tags_set_splits_and_trims(#[case] raw: &str, #[case] expected: &[&str]) -> Result<()> {
    let mut tags = TagsFlag::default();
    tags.set(raw)?;
    ensure!(
        tags.as_slice() == owned(expected).as_slice(),
        "expected {expected:?}, got {tags:?}"
    );
    Ok(())
}

#[rstest]
#[case(" amd64 ,arm64", &["amd64", "arm64"])]
#[case("arm64,amd64,386", &["arm64", "amd64", "386"])]
#[case("\tarm\n", &["arm"])]
#[case("", &[""])]
#[case("amd64,", &["amd64", ""])]
#[case(" , arm64", &["", "arm64"])]
fn arch_set_preserves_declaration_order(
    #[case] raw: &str,
    #[case] expected: &[&str],
) -> Result<()> {
    let mut arch = ArchFlag::default();
    arch.set(raw)?;
    ensure!(
        arch.as_slice() == owned(expected).as_slice(),
        "expected {expected:?}, got {arch:?}"
    );
    Ok(())
}

#[test]
fn single_element_values_can_be_replaced() -> Result<()> {
    let mut tags = TagsFlag::default();
    tags.set("first")?;
    tags.set("second")?;
    ensure!(tags.as_slice() == owned(&["second"]).as_slice());
    tags.set("third,fourth")?;
    ensure!(tags.len() == 2, "expected two tags, got {tags:?}");
    Ok(())
}

#[test]
fn multi_element_value_blocks_further_sets() -> Result<()> {
    let mut arch = ArchFlag::default();
    arch.set("amd64,arm64")?;
    let err = arch.set("386").expect_err("second set must fail");
    ensure!(err == ListFlagError::AlreadySet, "unexpected error {err:?}");
    ensure!(err.to_string() == "flag already set");
    ensure!(arch.as_slice() == owned(&["amd64", "arm64"]).as_slice());
    Ok(())
}

#[test]
fn empty_argument_counts_as_single_element() -> Result<()> {
    let mut tags = TagsFlag::default();
    tags.set("")?;
    ensure!(tags.len() == 1);
    tags.set("a,b")?;
    ensure!(tags.len() == 2);
    Ok(())
}

#[test]
fn env_display_contains_every_entry_in_order() -> Result<()> {
    let mut env = EnvFlag::default();
    env.set("GOOS=linux,GOARCH=arm64,CGO_ENABLED=")?;
    let rendered = env.to_string();
    ensure!(rendered == "[GOOS=linux GOARCH=arm64 CGO_ENABLED=]");
    let positions: Vec<usize> = env
        .iter()
        .filter_map(|entry| rendered.find(entry.as_str()))
        .collect();
    ensure!(positions.len() == 3, "missing entries in {rendered}");
    ensure!(
        positions.windows(2).all(|pair| pair.first() < pair.last()),
        "entries out of order in {rendered}"
    );
    Ok(())
}

#[test]
fn empty_flag_displays_empty_brackets() {
    assert_eq!(TagsFlag::default().to_string(), "[]");
}

#[test]
fn assignments_split_key_and_value() -> Result<()> {
    let mut env = EnvFlag::default();
    env.set("GOARM=7,CGO_CFLAGS=")?;
    let pairs: Vec<(&str, &str)> = env
        .assignments()
        .map(|assignment| (assignment.key(), assignment.value()))
        .collect();
    ensure!(pairs == [("GOARM", "7"), ("CGO_CFLAGS", "")], "got {pairs:?}");
    Ok(())
}

#[rstest]
#[case("KEY=VALUE", Some(("KEY", "VALUE")))]
#[case("KEY=", Some(("KEY", "")))]
#[case("=VALUE", Some(("", "VALUE")))]
#[case("KEY", None)]
#[case("A=B=C", None)]
fn env_assignment_parse(#[case] entry: &str, #[case] expected: Option<(&str, &str)>) {
    let parsed = EnvAssignment::parse(entry)
        .ok()
        .map(|assignment| (assignment.key(), assignment.value()));
    assert_eq!(parsed, expected);
}

#[test]
fn serializes_as_plain_sequence() -> Result<()> {
    let mut tags: ListFlag<super::BuildTags> = ListFlag::new();
    tags.set("osusergo,netgo")?;
    let json = serde_json::to_string(&tags)?;
    ensure!(json == r#"["osusergo","netgo"]"#, "got {json}");
    Ok(())
}
