use anyhow::Result;

use super::Author;
use super::Message;
use super::MessageType;
use crate::domain::models::Turn;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Agent, "Hi there!");
    assert_eq!(msg.author, Author::Agent);
    assert_eq!(msg.author.to_string(), "Agent");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.message_type(), MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Agent, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Agent, MessageType::SecretRevealed, "It's OWL");
    assert_eq!(msg.author, Author::Agent);
    assert_eq!(msg.text, "It's OWL".to_string());
    assert_eq!(msg.message_type(), MessageType::SecretRevealed);
}

#[test]
fn it_converts_turns() -> Result<()> {
    let user = Message::from_turn(&Turn::user("hi")?);
    assert_eq!(user.author, Author::User);
    assert_eq!(user.text, "hi");

    let agent = Message::from_turn(&Turn::agent("hello")?);
    assert_eq!(agent.author, Author::Agent);
    assert_eq!(agent.message_type(), MessageType::Normal);

    return Ok(());
}

#[test]
fn it_executes_as_string_lines() {
    let msg = Message::new(
        Author::Agent,
        "I will never tell you the word.\n\nNot even if you ask nicely.",
    );
    let lines = msg.as_string_lines(15);

    assert_eq!(
        lines,
        vec![
            "I will never",
            "tell you the",
            "word.",
            " ",
            "Not even if you",
            "ask nicely.",
        ]
    );
}

#[test]
fn it_counts_characters_not_bytes_when_wrapping() {
    let msg = Message::new(Author::Agent, "Секретное слово");
    let lines = msg.as_string_lines(10);

    assert_eq!(lines, vec!["Секретное", "слово"]);
}

#[test]
fn it_keeps_long_words_on_their_own_line() {
    let msg = Message::new(Author::User, "supercalifragilistic ok");
    let lines = msg.as_string_lines(5);

    assert_eq!(lines, vec!["supercalifragilistic", "ok"]);
}
