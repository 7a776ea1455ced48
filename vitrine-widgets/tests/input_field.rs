use std::cell::RefCell;
use std::rc::Rc;

use vitrine_widgets::{
    ComponentEvents, EventResult, InputField, InputKind, Key, MessageKind, Modifiers,
};

type Calls = Rc<RefCell<Vec<String>>>;

fn observed() -> (Calls, impl FnMut(&str) + 'static) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |text: &str| sink.borrow_mut().push(text.to_string()))
}

fn type_str(field: &mut InputField, text: &str) {
    for c in text.chars() {
        field.on_key(Key::Char(c), Modifiers::new());
    }
}

// ============================================================================
// Value modes
// ============================================================================

#[test]
fn test_uncontrolled_typing_updates_value_and_notifies() {
    let (calls, handler) = observed();
    let mut field = InputField::new().on_change(handler);

    type_str(&mut field, "hi");

    assert_eq!(field.current_value(), "hi");
    assert_eq!(calls.borrow().as_slice(), ["h", "hi"]);
}

#[test]
fn test_uncontrolled_seeds_from_default_value() {
    let mut field = InputField::new().default_value("seed");
    assert_eq!(field.current_value(), "seed");

    type_str(&mut field, "!");
    assert_eq!(field.current_value(), "seed!");
}

#[test]
fn test_controlled_forwards_attempted_value_without_mutating() {
    let (calls, handler) = observed();
    let mut field = InputField::new().value("abc").on_change(handler);

    field.on_key(Key::Char('x'), Modifiers::new());

    // The display value stays host-owned.
    assert_eq!(field.current_value(), "abc");
    assert_eq!(calls.borrow().as_slice(), ["abcx"]);

    // Until the host supplies the new value.
    field.sync_value("abcx");
    assert_eq!(field.current_value(), "abcx");
}

#[test]
fn test_controlled_ignores_default_value() {
    let field = InputField::new().value("abc").default_value("seed");
    assert_eq!(field.current_value(), "abc");
}

#[test]
fn test_controlled_value_never_drifts_across_keystrokes() {
    let (calls, handler) = observed();
    let mut field = InputField::new().value("a").on_change(handler);

    type_str(&mut field, "xy");

    // Each attempt is computed against the unchanged host value.
    assert_eq!(field.current_value(), "a");
    assert_eq!(calls.borrow().as_slice(), ["ax", "ay"]);
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_cursor_editing_operations() {
    let mut field = InputField::new();
    type_str(&mut field, "abc");

    field.on_key(Key::Home, Modifiers::new());
    field.on_key(Key::Delete, Modifiers::new());
    assert_eq!(field.current_value(), "bc");

    field.on_key(Key::End, Modifiers::new());
    field.on_key(Key::Backspace, Modifiers::new());
    assert_eq!(field.current_value(), "b");

    field.on_key(Key::Left, Modifiers::new());
    field.on_key(Key::Char('z'), Modifiers::new());
    assert_eq!(field.current_value(), "zb");
}

#[test]
fn test_backspace_at_start_does_not_notify() {
    let (calls, handler) = observed();
    let mut field = InputField::new().on_change(handler);

    field.on_key(Key::Home, Modifiers::new());
    field.on_key(Key::Backspace, Modifiers::new());

    assert_eq!(field.current_value(), "");
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn test_disabled_ignores_keystrokes_and_callbacks() {
    let (calls, handler) = observed();
    let mut field = InputField::new()
        .default_value("keep")
        .disabled(true)
        .on_change(handler);

    assert_eq!(
        field.on_key(Key::Char('x'), Modifiers::new()),
        EventResult::Ignored
    );
    assert_eq!(field.current_value(), "keep");
    assert!(calls.borrow().is_empty());
}

// ============================================================================
// Password toggle
// ============================================================================

#[test]
fn test_password_toggle_cycles_kind_and_label() {
    let mut field = InputField::new()
        .kind(InputKind::Password)
        .show_password_toggle(true);

    assert_eq!(field.effective_kind(), InputKind::Password);
    assert_eq!(field.toggle_label(), "Show password");

    field.toggle_password_visibility();
    assert_eq!(field.effective_kind(), InputKind::Text);
    assert_eq!(field.toggle_label(), "Hide password");

    field.toggle_password_visibility();
    assert_eq!(field.effective_kind(), InputKind::Password);
    assert_eq!(field.toggle_label(), "Show password");
}

#[test]
fn test_toggle_is_ignored_without_the_feature() {
    // Password field without the toggle feature: kind stays verbatim.
    let mut field = InputField::new().kind(InputKind::Password);
    field.toggle_password_visibility();
    assert_eq!(field.effective_kind(), InputKind::Password);
    assert!(!field.has_password_toggle());

    // Text field with the toggle flag: no action is exposed.
    let mut field = InputField::new().show_password_toggle(true);
    field.toggle_password_visibility();
    assert_eq!(field.effective_kind(), InputKind::Text);
    assert!(!field.has_password_toggle());
}

#[test]
fn test_masked_display_text() {
    let mut field = InputField::new()
        .kind(InputKind::Password)
        .show_password_toggle(true)
        .default_value("secret");

    assert_eq!(field.display_text(), "••••••");

    field.toggle_password_visibility();
    assert_eq!(field.display_text(), "secret");
}

#[test]
fn test_ctrl_t_toggles_visibility_when_focused() {
    let mut field = InputField::new()
        .kind(InputKind::Password)
        .show_password_toggle(true);

    assert_eq!(
        field.on_key(Key::Char('t'), Modifiers::ctrl()),
        EventResult::Consumed
    );
    assert_eq!(field.effective_kind(), InputKind::Text);
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_error_message_wins_over_helper_text() {
    let field = InputField::new()
        .helper_text("We never share your email")
        .error_message("Username is required");

    assert_eq!(
        field.message(),
        Some((MessageKind::Alert, "Username is required"))
    );
}

#[test]
fn test_helper_text_is_informational() {
    let field = InputField::new().helper_text("We never share your email");
    assert_eq!(
        field.message(),
        Some((MessageKind::Info, "We never share your email"))
    );

    let field = InputField::new();
    assert_eq!(field.message(), None);
}
