use tui_textarea::Input;
use tui_textarea::Key;

use super::ConfirmDialog;
use super::DialogOutcome;

fn key(key: Key) -> Input {
    return Input {
        key,
        ctrl: false,
        alt: false,
    };
}

#[test]
fn it_starts_closed() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    assert!(!dialog.is_open());
    assert_eq!(dialog.handle_input(&key(Key::Char('y'))), None);
}

#[test]
fn it_confirms() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    dialog.open();
    assert!(dialog.is_open());

    assert_eq!(
        dialog.handle_input(&key(Key::Char('y'))),
        Some(DialogOutcome::Confirm)
    );
    assert!(!dialog.is_open());
}

#[test]
fn it_confirms_on_enter() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    dialog.open();

    assert_eq!(
        dialog.handle_input(&key(Key::Enter)),
        Some(DialogOutcome::Confirm)
    );
}

#[test]
fn it_dismisses() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    dialog.open();
    assert_eq!(
        dialog.handle_input(&key(Key::Char('n'))),
        Some(DialogOutcome::Dismiss)
    );

    dialog.open();
    assert_eq!(
        dialog.handle_input(&key(Key::Esc)),
        Some(DialogOutcome::Dismiss)
    );
    assert!(!dialog.is_open());
}

#[test]
fn it_ignores_other_keys() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    dialog.open();

    assert_eq!(dialog.handle_input(&key(Key::Char('x'))), None);
    assert!(dialog.is_open());
}

#[test]
fn it_resolves_only_once() {
    let mut dialog = ConfirmDialog::new("Clear the conversation?");
    dialog.open();

    assert_eq!(
        dialog.resolve(DialogOutcome::Confirm),
        Some(DialogOutcome::Confirm)
    );
    assert_eq!(dialog.resolve(DialogOutcome::Dismiss), None);
}
