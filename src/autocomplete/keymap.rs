//! Key bindings for the autocomplete component.

use crate::key;
use crate::key::KeyPress;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for navigating suggestions and editing the query.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the highlight down one suggestion.
    pub next_suggestion: key::Binding,
    /// Move the highlight up one suggestion.
    pub prev_suggestion: key::Binding,
    /// Commit the highlighted suggestion.
    pub accept: key::Binding,
    /// Clear the query and close the suggestion list.
    pub cancel: key::Binding,
    /// Move cursor one character right.
    pub character_forward: key::Binding,
    /// Move cursor one character left.
    pub character_backward: key::Binding,
    /// Move to start of line.
    pub line_start: key::Binding,
    /// Move to end of line.
    pub line_end: key::Binding,
    /// Delete one character backward.
    pub delete_character_backward: key::Binding,
    /// Delete one character forward.
    pub delete_character_forward: key::Binding,
    /// Delete the previous word.
    pub delete_word_backward: key::Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: key::Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: key::Binding,
    /// Paste from clipboard.
    pub paste: key::Binding,
}

fn ctrl(c: char) -> KeyPress {
    (KeyCode::Char(c), KeyModifiers::CONTROL).into()
}

/// The default set of key bindings for the autocomplete input.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next_suggestion: key::Binding::new(vec![KeyCode::Down.into(), ctrl('n')])
            .with_help("↓/ctrl+n", "next suggestion"),
        prev_suggestion: key::Binding::new(vec![KeyCode::Up.into(), ctrl('p')])
            .with_help("↑/ctrl+p", "previous suggestion"),
        accept: key::Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
            .with_help("enter/tab", "accept suggestion"),
        cancel: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear"),
        character_forward: key::Binding::new(vec![KeyCode::Right.into(), ctrl('f')])
            .with_help("→", "forward"),
        character_backward: key::Binding::new(vec![KeyCode::Left.into(), ctrl('b')])
            .with_help("←", "backward"),
        line_start: key::Binding::new(vec![KeyCode::Home.into(), ctrl('a')])
            .with_help("home", "line start"),
        line_end: key::Binding::new(vec![KeyCode::End.into(), ctrl('e')])
            .with_help("end", "line end"),
        delete_character_backward: key::Binding::new(vec![KeyCode::Backspace.into(), ctrl('h')])
            .with_help("backspace", "delete char"),
        delete_character_forward: key::Binding::new(vec![KeyCode::Delete.into(), ctrl('d')])
            .with_help("delete", "delete char forward"),
        delete_word_backward: key::Binding::new(vec![ctrl('w')])
            .with_help("ctrl+w", "delete word"),
        delete_before_cursor: key::Binding::new(vec![ctrl('u')])
            .with_help("ctrl+u", "delete to start"),
        delete_after_cursor: key::Binding::new(vec![ctrl('k')])
            .with_help("ctrl+k", "delete to end"),
        paste: key::Binding::new(vec![ctrl('v')]).with_help("ctrl+v", "paste"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.next_suggestion,
            &self.prev_suggestion,
            &self.accept,
            &self.cancel,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.next_suggestion,
                &self.prev_suggestion,
                &self.accept,
                &self.cancel,
            ],
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
                &self.paste,
            ],
        ]
    }
}
