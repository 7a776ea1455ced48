//! InputField widget - a single-line text input with label, helper and
//! error messages, visual variants, and an optional password toggle.
//!
//! The field runs in one of two value modes, fixed at construction:
//!
//! - **Controlled**: the host supplied a value, stays the source of
//!   truth, and must push new values with [`InputField::sync_value`].
//!   Keystrokes never mutate the displayed value directly; the attempted
//!   new text is forwarded to the change callback.
//! - **Uncontrolled**: the field owns its value, seeded once from the
//!   default value, and the change callback is a notification only.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_widgets::{InputField, InputKind, InputVariant};
//!
//! let field = InputField::new()
//!     .label("Password")
//!     .placeholder("Enter your password")
//!     .kind(InputKind::Password)
//!     .show_password_toggle(true)
//!     .on_change(|text| log::debug!("typed: {text}"));
//! ```

mod events;
mod render;
mod state;

pub use state::{InputField, InputKind, InputSize, InputVariant, MessageKind};
