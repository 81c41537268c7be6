//! Type-safe key bindings with help metadata.
//!
//! Bindings pair one or more key presses with the help text shown by a
//! host application. Components match incoming [`bubbletea_rs::KeyMsg`]
//! values against their bindings instead of hard-coding key codes.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_autocomplete::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let accept = Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
//!     .with_help("enter/tab", "accept suggestion");
//!
//! let paste = Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+v", "paste");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code to match.
    pub code: KeyCode,
    /// Modifier keys that must be active.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and a short action description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. `"↑/↓"`.
    pub key: String,
    /// Short description of the action, e.g. `"navigate"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
///
/// Disabled bindings never match; use [`Binding::set_enabled`] to toggle
/// an action without rebuilding the key map.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from any mix of `KeyCode`s and
    /// `(KeyCode, KeyModifiers)` pairs.
    pub fn new<P: Into<KeyPress>>(keys: Vec<P>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text shown by help views.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding matches.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns whether the binding is active.
    ///
    /// A binding with no keys is treated as disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether a key message matches this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// Free-function form of [`Binding::matches`], matching the call style
/// used in component update loops.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Trait implemented by component key maps so help views can enumerate
/// their bindings.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Enter, KeyCode::Tab]);
        assert!(b.matches(&key(KeyCode::Enter)));
        assert!(b.matches(&key(KeyCode::Tab)));
        assert!(!b.matches(&key(KeyCode::Esc)));
    }

    #[test]
    fn test_matches_requires_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('w'), KeyModifiers::CONTROL)]);
        assert!(!b.matches(&key(KeyCode::Char('w'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('w'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
        assert!(!b.enabled());
    }

    #[test]
    fn test_empty_binding_is_disabled() {
        let b = Binding::new(Vec::<KeyPress>::new());
        assert!(!b.enabled());
    }

    #[test]
    fn test_help_text() {
        let b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel");
        assert_eq!(b.help().key, "esc");
        assert_eq!(b.help().desc, "cancel");
    }
}
