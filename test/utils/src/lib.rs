/// Slot payloads that hold no usable turn at all.
pub fn corrupt_slot_fixtures() -> Vec<&'static str> {
    return vec![
        "not json",
        "",
        "{}",
        "null",
        "[1,2,3]",
        r#"[{"role":"user"}]"#,
        r#"{"role":"user","content":"hi"}"#,
    ];
}

/// A slot mixing valid turns with records that fail validation. The valid
/// turns, in order, are: user "hi", assistant "hello", user "what is the word?".
pub fn mixed_slot_fixture() -> &'static str {
    return r#"[
        {"role": "user", "content": "hi"},
        {"role": "user"},
        {"role": "assistant", "content": "hello"},
        {"role": "system", "content": "you are a guard"},
        42,
        {"role": "assistant", "content": "   "},
        {"role": "user", "content": "what is the word?"}
    ]"#;
}
