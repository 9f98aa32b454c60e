//! Fetched entity collections held by the data hooks.
//!
//! A [`Collection`] tracks one domain's list, its load state, the last error
//! and a local selection. Fetches are fenced by a generation counter: each
//! [`Collection::begin_fetch`] hands out a ticket, and a completion carrying
//! an older ticket is dropped.

use crate::api::{ApiError, Entity, Id};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    status: LoadStatus,
    generation: u64,
    error: Option<String>,
    selected: Option<usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
            generation: 0,
            error: None,
            selected: None,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// True until the first fetch settles.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    /// Message of the last failed call, fetch or mutation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns false if the ticket is stale and the
    /// result was dropped.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                "Dropping stale fetch (generation {} < {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Loaded;
                self.error = None;
                if self.selected.is_some_and(|i| i >= self.items.len()) {
                    self.selected = None;
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.status = LoadStatus::Failed(message.clone());
                self.error = Some(message);
            }
        }
        true
    }

    /// Record a failed mutation. The list is left as it was.
    pub fn record_failure(&mut self, error: &ApiError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Add an entity the server just created.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.error = None;
    }

    /// Insert, or replace when the id is already listed.
    pub fn upsert(&mut self, item: T) {
        let id = item.id();
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        self.error = None;
    }

    /// Swap in the server's updated copy. Returns false if the id is unknown.
    pub fn replace(&mut self, item: T) -> bool {
        let id = item.id();
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Drop an entity the server just deleted, keeping the selection on the
    /// same entity when it survives.
    pub fn remove(&mut self, id: &Id) -> Option<T> {
        let index = self.items.iter().position(|item| &item.id() == id)?;
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.error = None;
        Some(removed)
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.display_name() == name)
    }

    /// Select by display name; returns the index, or `None` if nothing matched
    /// (the previous selection is kept).
    pub fn select_by_name(&mut self, name: &str) -> Option<usize> {
        let index = self.position_by_name(name)?;
        self.selected = Some(index);
        Some(index)
    }

    /// Select by index; out-of-range indices clear the selection.
    pub fn select_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.items.len());
    }

    /// Take a selection remembered elsewhere, unless one is already set.
    pub fn adopt_selection(&mut self, index: Option<usize>) {
        if self.selected.is_none() {
            self.select_index(index);
        }
    }
}
