//! Two-phase batch inserts: stage records in memory, then flush them

use super::BatchStore;
use crate::error::AppResult;

/// Records waiting to be written in one transaction
#[derive(Debug, Clone)]
pub struct Batch<T> {
    staged: Vec<T>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self { staged: Vec::new() }
    }
}

impl<T> Batch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the batch. Nothing touches the database yet.
    pub fn stage(&mut self, record: T) {
        self.staged.push(record);
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

impl<T: Sync> Batch<T> {
    /// Insert all staged records, commit, then re-fetch them by generated id.
    ///
    /// Returned records keep staging order. If any insert fails the
    /// transaction is rolled back and nothing from this batch persists.
    pub async fn flush<S>(self, store: &S) -> AppResult<Vec<S::Record>>
    where
        S: BatchStore<T>,
    {
        if self.staged.is_empty() {
            return Ok(Vec::new());
        }

        let ids = store.insert_batch(&self.staged).await?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            records.push(store.fetch(id).await?);
        }
        Ok(records)
    }
}

impl<T> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            staged: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Batch<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.staged.extend(iter);
    }
}
