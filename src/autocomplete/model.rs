//! Core model for the autocomplete component.

use super::keymap::{default_key_map, KeyMap};
use super::source::SourceView;
use super::types::{Item, Selection};
use lipgloss_extras::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Internal ID management for autocomplete instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers so several instances can coexist in one
/// program without their messages interfering.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A debounced autocomplete text input.
///
/// The component tracks a single line of query text, filters a
/// caller-supplied source of items by case-insensitive prefix match once
/// typing pauses, and lets the user pick a suggestion with the keyboard.
/// The source is either a resolved `Vec` or a future that the bubbletea
/// runtime drives to completion; while the future is outstanding the
/// component reports `loading()` and vetoes suggestion navigation.
///
/// It follows the Elm Architecture: feed every runtime message to
/// [`update`](Model::update) and render with [`view`](Model::view).
/// Messages the component emits for its host are documented in the
/// module overview.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete;
/// use bubbletea_autocomplete::Component;
///
/// let mut input: autocomplete::Model<String> = autocomplete::new();
/// input.set_source(vec!["Apple".to_string(), "Banana".to_string()]);
/// input.placeholder = "Fruit...".to_string();
/// let _cmd = input.focus();
/// ```
pub struct Model<I: Item> {
    /// Prompt rendered before the query text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the query text as it is typed.
    pub text_style: Style,
    /// Placeholder shown while the query is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for suggestion rows.
    pub suggestion_style: Style,
    /// Style for the highlighted suggestion row.
    pub selected_style: Style,
    /// Style for the loading and no-results lines.
    pub hint_style: Style,

    /// Maximum display width in characters. 0 means no limit.
    pub width: i32,
    /// Maximum number of suggestion rows rendered at once.
    pub max_visible: usize,
    /// Message shown when no suggestion matches; `{}` is replaced with
    /// the settled query.
    pub not_found_message: String,
    /// Key bindings.
    pub key_map: KeyMap,

    /// Minimum query length before filtering runs.
    pub min_length: usize,
    /// Quiet period after the last keystroke before filtering runs.
    /// Zero settles on the next scheduler turn.
    pub delay: Duration,
    /// Accept free text that matches no suggestion.
    pub allow_non_existing: bool,
    /// Disable the per-instance suggestion cache.
    pub no_cache: bool,
    /// Highlight the first suggestion automatically.
    pub autoselect: bool,
    /// Ignore all input while set.
    pub disabled: bool,
    /// Report the input as invalid while nothing is committed.
    pub required: bool,

    /// Last error surfaced by an auxiliary operation such as paste.
    pub err: Option<String>,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    /// Last query the change pipeline ran for; equality against this is
    /// the re-entrancy guard.
    pub(super) last_query: String,
    /// Query captured at the last debounce settlement; drives filtering.
    pub(super) settled_query: String,
    pub(super) selection: Selection<I>,
    pub(super) source: SourceView<I>,
    pub(super) suggestions: Arc<Vec<I>>,
    pub(super) selected_index: isize,
    pub(super) hidden: bool,
    pub(super) focus: bool,
    pub(super) no_blur: bool,
    pub(super) debouncing: bool,
    pub(super) cache: HashMap<String, Arc<Vec<I>>>,
    pub(super) id: i64,
    pub(super) tag: i64,
}

/// Creates a new autocomplete model with default settings.
///
/// The returned model has an empty, unfocused input with a hidden
/// suggestion list and no source; call
/// [`set_source`](Model::set_source) or
/// [`load_source`](Model::load_source) to supply items and
/// [`focus`](Model::focus) to enable keyboard input.
pub fn new<I: Item>() -> Model<I> {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        suggestion_style: Style::new().foreground(Color::from("245")),
        selected_style: Style::new().foreground(Color::from("212")).bold(true),
        hint_style: Style::new().foreground(Color::from("240")),
        width: 0,
        max_visible: 8,
        not_found_message: "No results matching \"{}\"".to_string(),
        key_map: default_key_map(),
        min_length: 1,
        delay: Duration::ZERO,
        allow_non_existing: false,
        no_cache: false,
        autoselect: false,
        disabled: false,
        required: false,
        err: None,
        value: Vec::new(),
        pos: 0,
        last_query: String::new(),
        settled_query: String::new(),
        selection: Selection::Empty,
        source: SourceView::default(),
        suggestions: Arc::new(Vec::new()),
        selected_index: -1,
        hidden: true,
        focus: false,
        no_blur: false,
        debouncing: false,
        cache: HashMap::new(),
        id: next_id(),
        tag: 0,
    }
}

impl<I: Item> Model<I> {
    /// Creates a model seeded with a committed selection.
    ///
    /// The query is derived from the item's label directly and the
    /// settlement step is evaluated once, so the seeded text is filtered
    /// immediately without running the keystroke pipeline.
    pub fn with_selection(item: I, source: Vec<I>) -> Self {
        let mut m: Model<I> = new();
        m.source.items = source;
        let label = item.label();
        m.value = label.chars().collect();
        m.pos = m.value.len();
        m.last_query = label;
        m.selection = Selection::Item(item);
        m.settle();
        m
    }

    /// Returns the unique identifier of this instance.
    ///
    /// Messages emitted by the component carry this id so hosts running
    /// several instances can tell them apart.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Index a fresh suggestion list is highlighted at: the first row
    /// when autoselect is on, otherwise none.
    pub(super) fn default_index(&self) -> isize {
        if self.autoselect {
            0
        } else {
            -1
        }
    }
}

impl<I: Item> Default for Model<I> {
    fn default() -> Self {
        new()
    }
}
