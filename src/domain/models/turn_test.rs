use anyhow::Result;

use super::Role;
use super::Turn;

#[test]
fn it_executes_new() -> Result<()> {
    let turn = Turn::new(Role::User, "Hi there!")?;
    assert_eq!(turn.role(), Role::User);
    assert_eq!(turn.content(), "Hi there!");

    return Ok(());
}

#[test]
fn it_rejects_empty_content() {
    assert!(Turn::user("").is_err());
    assert!(Turn::agent("  \n\t ").is_err());
}

#[test]
fn it_keeps_content_untouched() -> Result<()> {
    let turn = Turn::agent("  **bold** reply\n")?;
    assert_eq!(turn.content(), "  **bold** reply\n");

    return Ok(());
}

#[test]
fn it_serializes_with_wire_role_names() -> Result<()> {
    let turns = vec![Turn::user("hi")?, Turn::agent("hello")?];
    let res = serde_json::to_string(&turns)?;

    insta::assert_snapshot!(res, @r###"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"###);

    return Ok(());
}

#[test]
fn it_deserializes_agent_alias() -> Result<()> {
    let turn: Turn = serde_json::from_str(r#"{"role":"agent","content":"hello"}"#)?;
    assert_eq!(turn.role(), Role::Agent);

    return Ok(());
}

#[test]
fn it_fails_to_deserialize_invalid_records() {
    let records = vec![
        r#"{"role":"user"}"#,
        r#"{"role":"system","content":"hi"}"#,
        r#"{"role":"user","content":""}"#,
        r#"{"role":"user","content":42}"#,
        r#"{"content":"hi"}"#,
    ];

    for record in records {
        let res = serde_json::from_str::<Turn>(record);
        assert!(res.is_err(), "{record} should not deserialize");
    }
}

#[test]
fn it_displays_role_wire_names() {
    assert_eq!(Role::User.to_string(), "user");
    assert_eq!(Role::Agent.to_string(), "assistant");
}
