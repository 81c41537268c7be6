//! Debounced autocomplete input component for Bubble Tea applications.
//!
//! The component pairs a single-line text input with a suggestion
//! dropdown. Typing runs a change pipeline: each accepted edit opens a
//! trailing-edge debounce window, and once typing pauses for the
//! configured delay the query settles and the source is filtered by
//! case-insensitive prefix match. Settled results are cached per query,
//! so retyping a previous query reuses the stored list instead of
//! filtering again.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete;
//! use bubbletea_autocomplete::Component;
//! use std::time::Duration;
//!
//! let mut input: autocomplete::Model<String> = autocomplete::new();
//! input.set_source(vec![
//!     "Apple".to_string(),
//!     "Banana".to_string(),
//!     "Cherry".to_string(),
//! ]);
//! input.placeholder = "Fruit...".to_string();
//! input.delay = Duration::from_millis(250);
//! let _cmd = input.focus();
//! ```
//!
//! # Asynchronous Sources
//!
//! A source may be a future instead of a resolved `Vec`. The component
//! stays in a loading state until the future's command resolves, and
//! suggestion navigation is vetoed in the meantime:
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete;
//!
//! let mut input: autocomplete::Model<String> = autocomplete::new();
//! let _cmd = input.load_source(async {
//!     vec!["alpha".to_string(), "beta".to_string()]
//! });
//! assert!(input.loading());
//! ```
//!
//! # Messages
//!
//! The component reports its pipeline stages to the host through
//! messages delivered by the commands it returns: [`QueryChangedMsg`]
//! once per accepted edit, [`QuerySettledMsg`] once per settled
//! debounce window, and [`CacheHitMsg`] or [`CacheMissMsg`] for how the
//! settled query was served. Forward every message to
//! [`Model::update`]; each carries the instance id so several
//! autocompletes can share one program.

pub mod filter;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod source;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
pub use methods::paste;
pub use model::{new, Model};
pub use source::SourceView;
#[cfg(feature = "clipboard-support")]
pub use types::PasteMsg;
pub use types::{
    CacheHitMsg, CacheMissMsg, Item, PasteErrMsg, QueryChangedMsg, QuerySettledMsg, Selection,
    SourceResolvedMsg,
};
