#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! A debounced autocomplete input for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The component combines a single-line text input with a suggestion
//! dropdown filtered from a caller-supplied source. It follows the Elm
//! Architecture: the host forwards runtime messages to `update()` and
//! renders with `view()`, and the component hands back commands that
//! drive its debounce timer, async sources, and host notifications.
//!
//! ## Features
//!
//! - **Trailing-edge debouncing** with a configurable quiet period;
//!   superseded windows are dropped, only the last keystroke settles
//! - **Case-insensitive prefix filtering** that preserves source order
//! - **Per-query result caching** so a retyped query reuses the stored
//!   suggestion list
//! - **Async sources**: a source may be a future, with a loading state
//!   until it resolves
//! - **Free-text mode** that accepts entries matching no suggestion
//! - **Type-safe key bindings** with help metadata
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//!
//! let mut input: Autocomplete<String> = autocomplete_new();
//! input.set_source(vec!["red".to_string(), "green".to_string()]);
//! input.placeholder = "Color...".to_string();
//! let _cmd = input.focus();
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     color: Autocomplete<String>,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(settled) = msg.downcast_ref::<QuerySettledMsg>() {
//!             // React to the settled query here.
//!             let _ = &settled.query;
//!         }
//!         self.color.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.color.view()
//!     }
//! }
//! ```

pub mod autocomplete;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// `focus()` puts the component in a state where it receives keyboard
/// input and may return a command for initialization work; `blur()`
/// removes that state. Hosts that juggle several components use this
/// trait to route key input to exactly one of them.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    default_key_map as autocomplete_default_key_map, new as autocomplete_new, CacheHitMsg,
    CacheMissMsg, Item, KeyMap as AutocompleteKeyMap, Model as Autocomplete, PasteErrMsg,
    QueryChangedMsg, QuerySettledMsg, Selection, SourceResolvedMsg, SourceView,
};
#[cfg(feature = "clipboard-support")]
pub use autocomplete::{paste, PasteMsg};
pub use key::{matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};

/// Prelude module for convenient imports.
///
/// Re-exports the component, its messages, and the key binding types
/// under their host-facing names.
pub mod prelude {
    pub use crate::autocomplete::{
        default_key_map as autocomplete_default_key_map, new as autocomplete_new, CacheHitMsg,
        CacheMissMsg, Item, KeyMap as AutocompleteKeyMap, Model as Autocomplete, PasteErrMsg,
        QueryChangedMsg, QuerySettledMsg, Selection, SourceResolvedMsg, SourceView,
    };
    #[cfg(feature = "clipboard-support")]
    pub use crate::autocomplete::{paste, PasteMsg};
    pub use crate::key::{matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::Component;
}
