//! InputField state: value modes, cursor editing, password visibility.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Horizontal padding inside the field, in columns.
    pub(super) fn padding(self) -> u16 {
        match self {
            InputSize::Sm => 1,
            InputSize::Md => 2,
            InputSize::Lg => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
}

/// How a message below the field should be announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Passive helper text.
    Info,
    /// Assertive error text.
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueMode {
    Controlled,
    Uncontrolled,
}

enum Edit {
    Insert(char),
    DeleteBack,
    DeleteForward,
}

type ChangeHandler = Box<dyn FnMut(&str)>;

/// A single-line text input.
///
/// The value mode is decided by the builder: calling
/// [`InputField::value`] makes the field controlled for its whole
/// lifetime; otherwise it is uncontrolled and seeded from
/// [`InputField::default_value`]. Switching modes later is unsupported.
pub struct InputField {
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    mode: ValueMode,
    value: String,
    /// Cursor as a character index into the display value.
    cursor: usize,
    disabled: bool,
    invalid: bool,
    required: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    show_password_toggle: bool,
    password_visible: bool,
    on_change: Option<ChangeHandler>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    /// An uncontrolled field with an empty value.
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            mode: ValueMode::Uncontrolled,
            value: String::new(),
            cursor: 0,
            disabled: false,
            invalid: false,
            required: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            show_password_toggle: false,
            password_visible: false,
            on_change: None,
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Supply the current value, making the field controlled.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.mode = ValueMode::Controlled;
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self
    }

    /// Seed for an uncontrolled field. Ignored when a value was supplied.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        if self.mode == ValueMode::Uncontrolled {
            self.value = value.into();
            self.cursor = self.value.chars().count();
        }
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current display value.
    pub fn current_value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn variant_tag(&self) -> InputVariant {
        self.variant
    }

    pub fn size_tag(&self) -> InputSize {
        self.size
    }

    pub fn declared_kind(&self) -> InputKind {
        self.kind
    }

    pub(super) fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(super) fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The presentation kind: password fields with the toggle enabled
    /// flip to plain text while the value is revealed; without the
    /// toggle feature the declared kind is used verbatim.
    pub fn effective_kind(&self) -> InputKind {
        if self.kind == InputKind::Password && self.show_password_toggle {
            if self.password_visible {
                InputKind::Text
            } else {
                InputKind::Password
            }
        } else {
            self.kind
        }
    }

    /// Whether the visibility toggle action is present.
    pub fn has_password_toggle(&self) -> bool {
        self.show_password_toggle && self.kind == InputKind::Password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Accessible name of the visibility toggle action.
    pub fn toggle_label(&self) -> &'static str {
        if self.password_visible {
            "Hide password"
        } else {
            "Show password"
        }
    }

    /// The message shown below the field: the error (assertive) wins
    /// over the helper text (passive).
    pub fn message(&self) -> Option<(MessageKind, &str)> {
        if let Some(error) = self.error_message.as_deref() {
            Some((MessageKind::Alert, error))
        } else {
            self.helper_text
                .as_deref()
                .map(|text| (MessageKind::Info, text))
        }
    }

    /// The text as displayed: masked with bullets while the effective
    /// kind is password.
    pub fn display_text(&self) -> String {
        match self.effective_kind() {
            InputKind::Password => "•".repeat(self.value.chars().count()),
            InputKind::Text => self.value.clone(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Host-supplied value for a controlled field. Calling this on an
    /// uncontrolled field is a mode violation and is ignored.
    pub fn sync_value(&mut self, value: impl Into<String>) {
        debug_assert!(
            self.mode == ValueMode::Controlled,
            "sync_value on an uncontrolled field"
        );
        if self.mode != ValueMode::Controlled {
            return;
        }
        self.value = value.into();
        self.cursor = self.cursor.min(self.value.chars().count());
    }

    /// Flip password visibility. Ignored unless the field is a password
    /// field with the toggle feature enabled.
    pub fn toggle_password_visibility(&mut self) {
        if !self.has_password_toggle() {
            return;
        }
        self.password_visible = !self.password_visible;
        debug!("password visibility now {}", self.password_visible);
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.apply_edit(Edit::Insert(c));
    }

    pub(super) fn delete_back(&mut self) {
        self.apply_edit(Edit::DeleteBack);
    }

    pub(super) fn delete_forward(&mut self) {
        self.apply_edit(Edit::DeleteForward);
    }

    pub(super) fn move_cursor(&mut self, delta: i32) {
        let char_count = self.value.chars().count();
        self.cursor = (self.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
    }

    pub(super) fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_to_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Position the cursor at a character index, clamped to the value.
    pub(super) fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.value.chars().count());
    }

    /// Compute the edit against the display value, then either commit it
    /// (uncontrolled) or leave the value for the host (controlled). The
    /// change callback sees the attempted new text in both modes.
    fn apply_edit(&mut self, edit: Edit) {
        if self.disabled {
            return;
        }

        let Some((candidate, new_cursor)) = self.edited(edit) else {
            return;
        };

        if self.mode == ValueMode::Uncontrolled {
            self.value = candidate.clone();
        }
        self.cursor = new_cursor;

        if let Some(handler) = self.on_change.as_mut() {
            handler(&candidate);
        }
    }

    /// The new text and cursor an edit would produce, or None when the
    /// edit does not change the text.
    fn edited(&self, edit: Edit) -> Option<(String, usize)> {
        match edit {
            Edit::Insert(c) => {
                let mut text = self.value.clone();
                let byte_pos = char_to_byte_index(&text, self.cursor);
                text.insert(byte_pos, c);
                Some((text, self.cursor + 1))
            }
            Edit::DeleteBack => {
                if self.cursor == 0 {
                    return None;
                }
                let mut text = self.value.clone();
                let byte_pos = char_to_byte_index(&text, self.cursor - 1);
                text.remove(byte_pos);
                Some((text, self.cursor - 1))
            }
            Edit::DeleteForward => {
                if self.cursor >= self.value.chars().count() {
                    return None;
                }
                let mut text = self.value.clone();
                let byte_pos = char_to_byte_index(&text, self.cursor);
                text.remove(byte_pos);
                Some((text, self.cursor))
            }
        }
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
