//! Shortcut handler tests

use sprite_edit::{Color, Frame, ReplayEntry, Selection, SelectionShortcut, ShortcutResult, Tool};

use super::helpers::{create_manager, entries, frame, TestRegistrar};

#[test]
fn test_init_registers_delete_and_commit() {
    let manager = create_manager();
    let mut registrar = TestRegistrar::default();
    manager.init(&mut registrar);
    assert_eq!(registrar.registered, vec![SelectionShortcut::Delete, SelectionShortcut::Commit]);
}

#[test]
fn test_default_keys() {
    assert_eq!(SelectionShortcut::Delete.default_key(), "Delete");
    assert_eq!(SelectionShortcut::Commit.default_key(), "Enter");
    assert_eq!(SelectionShortcut::Commit.name(), "Commit selection");
}

#[test]
fn test_delete_without_selection_bubbles() {
    let mut manager = create_manager();
    let before = frame(&manager).clone();

    assert_eq!(manager.on_delete_shortcut(), ShortcutResult::Bubble);
    assert!(!manager.handle_shortcut(SelectionShortcut::Delete).is_handled());

    assert_eq!(frame(&manager), &before);
    assert!(entries(&manager).is_empty());
}

#[test]
fn test_delete_with_selection_erases() {
    let mut manager = create_manager();
    let selection = Selection::from_rectangle((0, 0), (0, 1));
    manager.on_selection_created(Some(selection.clone()));

    assert_eq!(manager.handle_shortcut(SelectionShortcut::Delete), ShortcutResult::Handled);

    assert_eq!(frame(&manager).get_pixel(0, 0), Some(Color::TRANSPARENT));
    assert_eq!(frame(&manager).get_pixel(0, 1), Some(Color::TRANSPARENT));
    assert_eq!(entries(&manager), vec![ReplayEntry::erase(selection.pixels())]);
}

#[test]
fn test_commit_with_selection_tool() {
    let mut manager = create_manager();
    assert_eq!(manager.handle_shortcut(SelectionShortcut::Commit), ShortcutResult::Handled);
    assert_eq!(manager.host().tools.commits, 1);
}

#[test]
fn test_commit_with_paint_tool_is_noop() {
    let mut manager = create_manager();
    manager.host_mut().tools.active = Tool::Pen;
    assert_eq!(manager.commit(), ShortcutResult::Bubble);
    assert_eq!(manager.host().tools.commits, 0);
    assert!(entries(&manager).is_empty());
}
