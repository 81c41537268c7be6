//! Update logic, editing operations, and the debounce pipeline.

use super::model::Model;
use super::types::{
    CacheHitMsg, CacheMissMsg, DebounceMsg, Item, QueryChangedMsg, QuerySettledMsg, Selection,
    SourceResolvedMsg,
};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::PasteErrMsg;
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

/// Wraps a message in a command that delivers it on the next scheduler
/// turn, so one update can fan out into follow-up messages.
fn emit<M: Clone + Send + 'static>(msg: M) -> Cmd {
    bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(msg.clone()) as Msg)
}

/// Reads the system clipboard and reports the result as a message.
#[cfg(feature = "clipboard-support")]
pub fn paste() -> Cmd {
    Box::pin(async move {
        use clipboard::{ClipboardContext, ClipboardProvider};
        let result: Result<String, _> =
            ClipboardProvider::new().and_then(|mut ctx: ClipboardContext| ctx.get_contents());
        match result {
            Ok(contents) => Some(Box::new(PasteMsg(contents)) as Msg),
            Err(err) => Some(Box::new(PasteErrMsg(err.to_string())) as Msg),
        }
    })
}

impl<I: Item> Model<I> {
    /// The current query text.
    pub fn query(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the query text and runs the change pipeline, as if the
    /// new text had been typed.
    ///
    /// Returns the command driving the debounce; hand it to the runtime.
    pub fn set_query(&mut self, text: &str) -> Option<Cmd> {
        self.value = text.chars().filter(|c| !c.is_control()).collect();
        self.pos = self.value.len();
        self.apply_query_change()
    }

    /// The committed value.
    pub fn selection(&self) -> &Selection<I> {
        &self.selection
    }

    /// Commits an item, mirrors its label into the query text, and
    /// closes the suggestion list.
    pub fn set_selection(&mut self, item: I) {
        let label = item.label();
        self.value = label.chars().collect();
        self.pos = self.value.len();
        // The mirrored label must not re-enter the change pipeline.
        self.last_query = label;
        self.selection = Selection::Item(item);
        self.hidden = true;
    }

    /// The current suggestion list.
    pub fn suggestions(&self) -> &[I] {
        &self.suggestions
    }

    /// The highlighted suggestion index, or -1 when nothing is
    /// highlighted.
    pub fn selected_index(&self) -> isize {
        self.selected_index
    }

    /// Whether the suggestion list is visible.
    pub fn is_open(&self) -> bool {
        !self.hidden
    }

    /// Whether a trailing-edge debounce window is currently open.
    pub fn debouncing(&self) -> bool {
        self.debouncing
    }

    /// Whether the query meets the minimum length to be filtered.
    pub fn is_min_length_met(&self) -> bool {
        self.value.len() >= self.min_length
    }

    /// Whether the host should surface its indeterminate progress slot.
    pub fn show_loading_bar(&self) -> bool {
        !self.loading() && !self.allow_non_existing && !self.debouncing
    }

    /// Whether the input satisfies its `required` constraint.
    pub fn is_valid(&self) -> bool {
        !self.required || !self.selection.is_empty()
    }

    /// Clears the query, the committed value, and the highlight.
    pub fn clear(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.last_query.clear();
        self.selection = Selection::Empty;
        self.selected_index = -1;
        self.hidden = !self.is_min_length_met();
    }

    /// Marks the pointer as hovering the suggestion list.
    ///
    /// While hovering, losing input focus does not close the list, so a
    /// click on a suggestion is not raced by the blur it causes.
    pub fn hover_suggestions(&mut self, hovering: bool) {
        self.no_blur = hovering;
        if !hovering && !self.focus {
            self.hidden = true;
        }
    }

    /// Commits the suggestion at `index` in response to a pointer click.
    ///
    /// The click also returns input focus to the component, mirroring a
    /// pointer release on the list. Ignored while loading or closed.
    pub fn click_suggestion(&mut self, index: usize) {
        if self.hidden || self.loading() || index >= self.suggestions.len() {
            return;
        }
        self.focus = true;
        let item = self.suggestions[index].clone();
        self.set_selection(item);
    }

    /// Escape semantics: drop the query and the committed value and
    /// return the highlight to its default.
    fn reset_query(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.last_query.clear();
        self.selection = Selection::Empty;
        self.selected_index = self.default_index();
        self.hidden = !self.is_min_length_met();
    }

    /// Commits the highlighted suggestion, if there is one to commit.
    fn pick_selected(&mut self) {
        if self.hidden || self.loading() || self.selected_index < 0 || self.suggestions.is_empty()
        {
            return;
        }
        let item = self.suggestions[self.selected_index as usize].clone();
        self.set_selection(item);
    }

    /// Moves the highlight. Moving up from no highlight wraps to the
    /// last suggestion; moving down stops at the last one.
    fn move_selection(&mut self, delta: isize) {
        if self.hidden || self.loading() || self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() as isize - 1;
        self.selected_index = if delta > 0 {
            (self.selected_index + 1).min(last)
        } else if self.selected_index < 0 {
            last
        } else {
            (self.selected_index - 1).max(0)
        };
    }

    /// Runs the change pipeline for the current query text.
    ///
    /// Equality against the last accepted query is the re-entrancy
    /// guard; without it, mirroring a picked label into the input would
    /// reopen the list it just closed. Each accepted change bumps the
    /// debounce tag so earlier pending windows are superseded.
    pub(super) fn apply_query_change(&mut self) -> Option<Cmd> {
        let text = self.query();
        if text == self.last_query {
            return None;
        }
        self.last_query = text.clone();
        self.selection = if self.allow_non_existing {
            Selection::Custom(text.clone())
        } else {
            Selection::Empty
        };
        self.debouncing = true;
        self.tag += 1;

        let (id, tag) = (self.id, self.tag);
        Some(emit(QueryChangedMsg {
            id,
            query: text,
            tag,
        }))
    }

    /// Schedules the trailing edge of the debounce window for one
    /// accepted change.
    fn schedule_debounce(&self, tag: i64) -> Cmd {
        let id = self.id;
        let delay = self.delay.max(Duration::from_nanos(1));
        bubbletea_tick(delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Settles the debounce window: applies the min-length gate, records
    /// the settled query, opens the list if the component holds focus,
    /// and recomputes suggestions.
    ///
    /// Returns the settled query and whether the cache already held it,
    /// or `None` when the gate kept the query from filtering. The
    /// debouncing flag is cleared on every path.
    pub(super) fn settle(&mut self) -> Option<(String, bool)> {
        if !self.is_min_length_met() {
            self.hidden = true;
            self.debouncing = false;
            return None;
        }
        let query = self.query();
        let cached = self.cache_holds(&query);
        self.settled_query = query.clone();
        if self.focus || self.no_blur {
            self.hidden = false;
        }
        self.compute_suggestions();
        self.debouncing = false;
        Some((query, cached))
    }

    fn insert_characters(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.value.insert(self.pos, c);
            self.pos += 1;
        }
    }

    fn delete_character_backward(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.value.remove(self.pos);
        }
    }

    fn delete_character_forward(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    fn delete_word_backward(&mut self) {
        let start = self.pos;
        while self.pos > 0 && self.value[self.pos - 1] == ' ' {
            self.pos -= 1;
        }
        while self.pos > 0 && self.value[self.pos - 1] != ' ' {
            self.pos -= 1;
        }
        self.value.drain(self.pos..start);
    }

    fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.pos = 0;
    }

    fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
    }

    fn handle_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(msg, &self.key_map.cancel) {
            self.reset_query();
            return None;
        }
        if matches_binding(msg, &self.key_map.accept) {
            self.pick_selected();
            return None;
        }
        if matches_binding(msg, &self.key_map.next_suggestion) {
            self.move_selection(1);
            return None;
        }
        if matches_binding(msg, &self.key_map.prev_suggestion) {
            self.move_selection(-1);
            return None;
        }
        #[cfg(feature = "clipboard-support")]
        if matches_binding(msg, &self.key_map.paste) {
            return Some(paste());
        }
        if matches_binding(msg, &self.key_map.character_backward) {
            self.pos = self.pos.saturating_sub(1);
            return None;
        }
        if matches_binding(msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
            return None;
        }
        if matches_binding(msg, &self.key_map.line_start) {
            self.pos = 0;
            return None;
        }
        if matches_binding(msg, &self.key_map.line_end) {
            self.pos = self.value.len();
            return None;
        }
        if matches_binding(msg, &self.key_map.delete_character_backward) {
            self.delete_character_backward();
            return self.apply_query_change();
        }
        if matches_binding(msg, &self.key_map.delete_character_forward) {
            self.delete_character_forward();
            return self.apply_query_change();
        }
        if matches_binding(msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
            return self.apply_query_change();
        }
        if matches_binding(msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
            return self.apply_query_change();
        }
        if matches_binding(msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
            return self.apply_query_change();
        }
        if let KeyCode::Char(c) = msg.key {
            if msg.modifiers.is_empty() || msg.modifiers == KeyModifiers::SHIFT {
                self.insert_characters(&c.to_string());
                return self.apply_query_change();
            }
        }
        None
    }
}

impl<I: Item + 'static> Model<I> {
    /// Handles a runtime message.
    ///
    /// Key input is processed only while the component is focused and
    /// not disabled; the component's own pipeline messages and source
    /// resolutions are processed regardless, since a pending source may
    /// resolve while the user is elsewhere.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(resolved) = msg.downcast_ref::<SourceResolvedMsg<I>>() {
            if resolved.id == self.id && resolved.generation == self.source.generation {
                self.source.items = resolved.items.clone();
                self.source.pending = false;
                self.compute_suggestions();
            }
            return None;
        }
        if let Some(changed) = msg.downcast_ref::<QueryChangedMsg>() {
            if changed.id == self.id {
                return Some(self.schedule_debounce(changed.tag));
            }
            return None;
        }
        if let Some(tick_msg) = msg.downcast_ref::<DebounceMsg>() {
            if tick_msg.id != self.id || tick_msg.tag != self.tag {
                return None;
            }
            return self.settle().map(|(query, cached)| {
                emit(QuerySettledMsg {
                    id: self.id,
                    query,
                    cached,
                })
            });
        }
        if let Some(settled) = msg.downcast_ref::<QuerySettledMsg>() {
            if settled.id == self.id {
                let report = (self.id, settled.query.clone());
                return Some(if settled.cached {
                    emit(CacheHitMsg {
                        id: report.0,
                        query: report.1,
                    })
                } else {
                    emit(CacheMissMsg {
                        id: report.0,
                        query: report.1,
                    })
                });
            }
            return None;
        }
        if let Some(err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(err.0.clone());
            return None;
        }

        if self.disabled || !self.focus {
            return None;
        }
        #[cfg(feature = "clipboard-support")]
        if let Some(pasted) = msg.downcast_ref::<PasteMsg>() {
            self.insert_characters(&pasted.0);
            return self.apply_query_change();
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }
}

impl<I: Item> Component for Model<I> {
    /// Focuses the input and opens the list when the query is long
    /// enough to have been filtered.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.hidden = !self.is_min_length_met();
        None
    }

    /// Removes focus. The list closes unless the pointer is hovering it.
    fn blur(&mut self) {
        self.focus = false;
        if !self.no_blur {
            self.hidden = true;
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
