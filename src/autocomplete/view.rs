//! Rendering for the autocomplete component.

use super::model::Model;
use super::types::Item;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `s` to at most `width` display columns, then pads it with
/// spaces to exactly that width.
fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

impl<I: Item> Model<I> {
    /// Renders the input line plus, when open, the suggestion dropdown.
    pub fn view(&self) -> String {
        let mut out = self.input_line();
        if self.hidden {
            return out;
        }
        if self.loading() {
            out.push('\n');
            out.push_str(&self.hint_style.render("loading…"));
        } else if self.suggestions.is_empty() {
            out.push('\n');
            let msg = self.not_found_message.replace("{}", &self.settled_query);
            out.push_str(&self.hint_style.render(&msg));
        } else {
            out.push_str(&self.suggestion_rows());
        }
        out
    }

    fn input_line(&self) -> String {
        let mut line = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            line.push_str(&self.placeholder_style.render(&self.placeholder));
        } else if self.disabled {
            let text: String = self.value.iter().collect();
            line.push_str(&self.hint_style.render(&text));
        } else {
            let text: String = self.value.iter().collect();
            if self.focus {
                // Block cursor drawn over the character at the edit
                // position, or a trailing cell at the end of the line.
                let before: String = self.value[..self.pos].iter().collect();
                line.push_str(&self.text_style.render(&before));
                let cursor_style = self.text_style.clone().reverse(true);
                if self.pos < self.value.len() {
                    let at: String = self.value[self.pos..self.pos + 1].iter().collect();
                    line.push_str(&cursor_style.render(&at));
                    let after: String = self.value[self.pos + 1..].iter().collect();
                    line.push_str(&self.text_style.render(&after));
                } else {
                    line.push_str(&cursor_style.render(" "));
                }
            } else {
                line.push_str(&self.text_style.render(&text));
            }
        }
        line
    }

    /// Renders a window of suggestion rows that keeps the highlighted
    /// row visible.
    fn suggestion_rows(&self) -> String {
        let total = self.suggestions.len();
        let visible = self.max_visible.max(1).min(total);
        let start = if self.selected_index < 0 {
            0
        } else {
            let idx = self.selected_index as usize;
            idx.saturating_sub(visible - 1).min(total - visible)
        };

        let row_width = if self.width > 0 {
            self.width as usize
        } else {
            self.suggestions
                .iter()
                .map(|item| item.label().width())
                .max()
                .unwrap_or(0)
        };

        let mut out = String::new();
        for (offset, item) in self.suggestions[start..start + visible].iter().enumerate() {
            let idx = (start + offset) as isize;
            let row = fit_to_width(&item.label(), row_width);
            out.push('\n');
            if idx == self.selected_index {
                out.push_str(&self.selected_style.render(&format!("▸ {row}")));
            } else {
                out.push_str(&self.suggestion_style.render(&format!("  {row}")));
            }
        }
        out
    }
}
