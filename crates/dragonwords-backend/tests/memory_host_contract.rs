//! Behaviour the panel controller relies on, checked against `MemoryHost`.
//!
//! The checks are written against the `EditorHost` trait so another host
//! implementation can reuse them.

use dragonwords_backend::{EditorHost, InjectionTarget, MemoryHost, ViewId, WindowId};
use dragonwords_layout::{EDITOR_GROUP, PANEL_GROUP, WindowLayout};

/// Opening a view in the panel group and returning focus leaves the editing
/// view in front and the new view in front of its own group.
fn check_panel_group_focus<H: EditorHost>(host: &mut H, window: WindowId, editor: ViewId) {
    host.set_layout(window, &WindowLayout::with_bottom_panel(0.8))
        .unwrap();
    host.focus_group(window, PANEL_GROUP).unwrap();
    let panel = host.new_view(window).unwrap();
    host.focus_group(window, EDITOR_GROUP).unwrap();

    assert_eq!(host.active_view(window), Some(editor));
    assert_eq!(host.active_view_in_group(window, PANEL_GROUP), Some(panel));
    assert_eq!(host.views_in_group(window, PANEL_GROUP), vec![panel]);
    assert_eq!(host.views(window), vec![editor, panel]);

    host.close_view(panel).unwrap();
    assert!(host.views_in_group(window, PANEL_GROUP).is_empty());
    host.set_layout(window, &WindowLayout::single()).unwrap();
    assert_eq!(host.layout(window).map(|l| l.group_count()), Some(1));
}

/// A read-only view can still be rewritten by unlocking it first.
fn check_locked_rewrite<H: EditorHost>(host: &mut H, view: ViewId) {
    host.set_read_only(view, true).unwrap();
    assert!(host.replace_text(view, "nope").is_err());
    host.set_read_only(view, false).unwrap();
    host.replace_text(view, "la foo\n").unwrap();
    host.set_read_only(view, true).unwrap();
}

#[test]
fn memory_host_honours_panel_group_focus() {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let editor = host.open_view(window).unwrap();
    check_panel_group_focus(&mut host, window, editor);
}

#[test]
fn memory_host_honours_locked_rewrite() {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let view = host.open_view(window).unwrap();
    check_locked_rewrite(&mut host, view);
    assert_eq!(host.text(view), Some("la foo\n"));
    assert_eq!(host.is_read_only(view), Some(true));
}

#[test]
fn injection_follows_the_terminal_flag() {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let doc = host.open_view(window).unwrap();
    let shell = host.open_view(window).unwrap();
    host.set_terminal(shell, true);

    for (view, word) in [(doc, "alpha"), (shell, "beta")] {
        InjectionTarget::resolve(&host, view, window)
            .unwrap()
            .inject(&mut host, word)
            .unwrap();
    }

    assert_eq!(host.snippets(doc), ["alpha"]);
    assert!(host.snippets(shell).is_empty());
    assert_eq!(host.terminal_output(window), ["beta"]);
}

#[test]
fn unknown_ids_are_errors_not_panics() {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let ghost = ViewId::new(999);

    assert_eq!(host.window_of(ghost), None);
    assert!(host.view_name(ghost).is_err());
    assert!(host.insert_snippet(ghost, "x").is_err());
    assert!(host.focus_view(window, ghost).is_err());
    assert!(host.show_prompt(WindowId::new(999), "Letters:").is_err());
    assert!(host.views(WindowId::new(999)).is_empty());
}
