//! Session state: the in-memory record collection and its mutations.

use std::sync::Arc;

use uuid::Uuid;

use crate::query;
use crate::store::{RecipeStore, StringStore};
use crate::types::{Criteria, Recipe, RecipeDraft};
use crate::validate::ValidationReport;

/// Application state for one notebook session.
///
/// The collection is copy-on-write: every mutation builds a fresh vector
/// and swaps it in, so a snapshot taken earlier is never invalidated.
/// Every mutation also triggers a full-collection save.
pub struct Notebook<S: StringStore> {
    store: RecipeStore<S>,
    records: Arc<Vec<Recipe>>,
}

impl<S: StringStore> Notebook<S> {
    /// Open a notebook, loading whatever the store currently holds.
    pub fn open(store: S) -> Self {
        let store = RecipeStore::new(store);
        let records = Arc::new(store.load());
        Self { store, records }
    }

    /// All records, newest-added first.
    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    /// A snapshot of the current revision.
    pub fn snapshot(&self) -> Arc<Vec<Recipe>> {
        Arc::clone(&self.records)
    }

    /// Validate a draft and, when it passes, prepend the new record and
    /// save. A failing draft mutates nothing.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<Recipe, ValidationReport> {
        let recipe = draft.build()?;

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(recipe.clone());
        next.extend(self.records.iter().cloned());
        self.replace(next);

        tracing::debug!(id = %recipe.id, title = %recipe.title, "recipe added");
        Ok(recipe)
    }

    /// Remove a record by id. Returns false when no record matched.
    /// Asking the user for confirmation is the view layer's duty.
    pub fn delete(&mut self, id: Uuid) -> bool {
        if !self.records.iter().any(|r| r.id == id) {
            return false;
        }

        let next: Vec<Recipe> = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.replace(next);

        tracing::debug!(%id, "recipe deleted");
        true
    }

    /// Detail lookup by id. Absence is a display state, not an error.
    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The visible list for the given criteria: filter, then sort.
    pub fn visible(&self, criteria: &Criteria) -> Vec<Recipe> {
        query::apply(&self.records, criteria)
    }

    fn replace(&mut self, next: Vec<Recipe>) {
        self.records = Arc::new(next);
        self.store.save(&self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn test_add_prepends_new_records() {
        let mut notebook = Notebook::open(MemoryStore::new());
        notebook.add(draft("Stew")).unwrap();
        notebook.add(draft("Pasta")).unwrap();

        let titles: Vec<_> = notebook.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pasta", "Stew"]);
    }

    #[test]
    fn test_invalid_draft_mutates_nothing() {
        let mut notebook = Notebook::open(MemoryStore::new());
        notebook.add(draft("Stew")).unwrap();

        let report = notebook.add(draft("")).unwrap_err();
        assert!(!report.is_valid());
        assert_eq!(notebook.records().len(), 1);
    }

    #[test]
    fn test_delete_by_id() {
        let mut notebook = Notebook::open(MemoryStore::new());
        let stew = notebook.add(draft("Stew")).unwrap();

        assert!(notebook.delete(stew.id));
        assert!(notebook.records().is_empty());
        // Ids are never reused; a second delete finds nothing
        assert!(!notebook.delete(stew.id));
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let notebook = Notebook::open(MemoryStore::new());
        assert!(notebook.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_snapshot_survives_later_mutations() {
        let mut notebook = Notebook::open(MemoryStore::new());
        let stew = notebook.add(draft("Stew")).unwrap();

        let before = notebook.snapshot();
        notebook.delete(stew.id);

        assert_eq!(before.len(), 1);
        assert!(notebook.records().is_empty());
    }

    #[test]
    fn test_failing_store_does_not_block_mutations() {
        // Worst case is silent data loss on save, not a failed add
        let mut notebook = Notebook::open(MemoryStore::failing());
        notebook.add(draft("Stew")).unwrap();
        assert_eq!(notebook.records().len(), 1);
    }

    #[test]
    fn test_corrupt_store_opens_empty() {
        let store = MemoryStore::new().with_value(crate::store::RECIPES_KEY, "][");
        let notebook = Notebook::open(store);
        assert!(notebook.records().is_empty());
    }
}
