use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

fn messages() -> Vec<Message> {
    return vec![
        Message::new(Author::Agent, "Hi there!"),
        Message::new(
            Author::Agent,
            "I will never tell you the word.\n\nNot even if you ask nicely.",
        ),
    ];
}

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::default();

    assert_eq!(bubble_list.cache.len(), 0);
    assert!(bubble_list.is_empty());
}

#[test]
fn it_caches_lines() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 50);

    assert_eq!(bubble_list.cache.len(), 2);
}

#[test]
fn it_returns_correct_length() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 50);

    // 3 lines for the first bubble, 5 for the second.
    assert_eq!(bubble_list.len(), 8);
}

#[test]
fn it_drops_lines_of_removed_messages() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 50);
    bubble_list.set_messages(&messages()[..1], 50);

    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
}

#[test]
fn it_rebuilds_changed_messages() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 50);

    let replaced = vec![
        messages()[0].clone(),
        Message::new_with_type(Author::Agent, MessageType::SecretRevealed, "It's OWL."),
    ];
    bubble_list.set_messages(&replaced, 50);

    assert_eq!(bubble_list.len(), 6);
    let entry = bubble_list.cache.get(&1).map(|entry| {
        return entry.mtype;
    });
    assert_eq!(entry, Some(MessageType::SecretRevealed));
}
