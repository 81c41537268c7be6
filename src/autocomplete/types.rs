//! Core types and messages for the autocomplete component.

use bubbletea_rs::Msg;

/// Trait for values that can be suggested and picked.
///
/// The label is used both as the display string and as the comparison
/// string for prefix matching, and it becomes the input text when the
/// item is picked.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::Item;
///
/// #[derive(Clone)]
/// struct Contact {
///     name: String,
///     email: String,
/// }
///
/// impl Item for Contact {
///     fn label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait Item: Clone + Send {
    /// Returns the display and comparison string for this item.
    fn label(&self) -> String;
}

impl Item for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl Item for &'static str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

/// The committed value of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<I> {
    /// Nothing committed.
    Empty,
    /// A suggestion picked from the source.
    Item(I),
    /// Free text, accepted because non-existing entries are allowed.
    Custom(String),
}

impl<I: Item> Selection<I> {
    /// Returns whether nothing is committed.
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Returns the picked item, if any.
    pub fn as_item(&self) -> Option<&I> {
        match self {
            Selection::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Returns the display label of the committed value, if any.
    pub fn label(&self) -> Option<String> {
        match self {
            Selection::Empty => None,
            Selection::Item(item) => Some(item.label()),
            Selection::Custom(text) => Some(text.clone()),
        }
    }
}

/// Sent once per accepted raw text change, before debouncing.
///
/// Hosts can observe this for live feedback on every keystroke that
/// actually changed the query.
#[derive(Debug, Clone)]
pub struct QueryChangedMsg {
    /// The component instance that emitted this message.
    pub id: i64,
    /// The raw query text after the change.
    pub query: String,
    /// Debounce generation this change belongs to.
    pub(crate) tag: i64,
}

/// Internal trailing-edge debounce tick.
///
/// Only the tick carrying the component's current generation tag
/// settles; ticks from superseded changes are dropped on arrival.
#[derive(Debug, Clone)]
pub struct DebounceMsg {
    pub(crate) id: i64,
    pub(crate) tag: i64,
}

/// Sent once per settled debounce window with the query that drove
/// filtering.
#[derive(Debug, Clone)]
pub struct QuerySettledMsg {
    /// The component instance that emitted this message.
    pub id: i64,
    /// The settled query text.
    pub query: String,
    /// Whether the suggestion cache already held this query.
    pub(crate) cached: bool,
}

/// Reports that a settled query was served from the suggestion cache.
/// Purely observational; carries no behavioral effect.
#[derive(Debug, Clone)]
pub struct CacheHitMsg {
    /// The component instance that emitted this message.
    pub id: i64,
    /// The settled query text.
    pub query: String,
}

/// Reports that a settled query had to be computed from the source.
/// Purely observational; carries no behavioral effect.
#[derive(Debug, Clone)]
pub struct CacheMissMsg {
    /// The component instance that emitted this message.
    pub id: i64,
    /// The settled query text.
    pub query: String,
}

/// Delivers the items of a future-backed source once it resolves.
#[derive(Debug, Clone)]
pub struct SourceResolvedMsg<I> {
    /// The component instance this source belongs to.
    pub id: i64,
    /// The materialized items.
    pub items: Vec<I>,
    /// Source generation, used to drop resolutions of replaced sources.
    pub(crate) generation: u64,
}

/// Clipboard paste message carrying raw text.
#[cfg(feature = "clipboard-support")]
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<QueryChangedMsg> for Msg {
    fn from(msg: QueryChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<QuerySettledMsg> for Msg {
    fn from(msg: QuerySettledMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl<I: Item + 'static> From<SourceResolvedMsg<I>> for Msg {
    fn from(msg: SourceResolvedMsg<I>) -> Self {
        Box::new(msg) as Msg
    }
}
