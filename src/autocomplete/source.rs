//! Source normalization for the autocomplete component.
//!
//! A source is either a resolved collection of items or a future that
//! yields one. Both are normalized into a [`SourceView`]: the
//! materialized items plus a pending flag. A pending view keeps
//! [`Model::loading`](super::Model::loading) true until the future's
//! command delivers a [`SourceResolvedMsg`](super::SourceResolvedMsg);
//! a future that never completes simply stays pending, which is a
//! normal state rather than an error.

use super::model::Model;
use super::types::{Item, SourceResolvedMsg};
use bubbletea_rs::{Cmd, Msg};
use std::future::Future;

/// Uniform view over a resolved or pending source collection.
#[derive(Debug, Clone)]
pub struct SourceView<I> {
    pub(super) items: Vec<I>,
    pub(super) pending: bool,
    /// Bumped on every source replacement so resolutions of a superseded
    /// source are dropped on arrival.
    pub(super) generation: u64,
}

impl<I> Default for SourceView<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: false,
            generation: 0,
        }
    }
}

impl<I: Item> SourceView<I> {
    /// The materialized items; empty while pending.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Whether the source future is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl<I: Item> Model<I> {
    /// Installs a resolved source collection.
    ///
    /// Replacing the source clears the suggestion cache: cached results
    /// were computed from the previous collection and would otherwise be
    /// served for queries against the new one.
    pub fn set_source(&mut self, items: Vec<I>) {
        self.source.generation += 1;
        self.source.items = items;
        self.source.pending = false;
        self.cache.clear();
        self.compute_suggestions();
    }

    /// The normalized view over the current source.
    pub fn source(&self) -> &SourceView<I> {
        &self.source
    }

    /// Whether a pending source is still being resolved.
    pub fn loading(&self) -> bool {
        self.source.pending
    }
}

impl<I: Item + 'static> Model<I> {
    /// Installs a pending source backed by a future.
    ///
    /// Returns the command that drives the future; hand it to the
    /// bubbletea runtime and forward the resulting message back into
    /// [`update`](Model::update). Until then the component reports
    /// [`loading`](Model::loading) and suggestion navigation is vetoed.
    /// Resolution is one-shot: there are no retries and no timeout.
    pub fn load_source<F>(&mut self, fut: F) -> Cmd
    where
        F: Future<Output = Vec<I>> + Send + 'static,
    {
        self.source.generation += 1;
        self.source.items.clear();
        self.source.pending = true;
        self.cache.clear();
        self.compute_suggestions();

        let id = self.id;
        let generation = self.source.generation;
        Box::pin(async move {
            let items = fut.await;
            Some(Box::new(SourceResolvedMsg {
                id,
                items,
                generation,
            }) as Msg)
        })
    }
}
