//! Bounded comparison selection.
//!
//! Uniqueness is keyed on the display `name`, not `uid`: two catalog entries
//! that share a name cannot be compared side by side. This mirrors the
//! upstream dashboard and is kept on purpose.

use serde::Serialize;

use crate::entities::StarshipDetails;
use crate::errors::CompareError;

/// Maximum number of records in a comparison.
pub const MAX_COMPARE: usize = 3;

/// Ordered, name-unique selection of at most [`MAX_COMPARE`] detail records.
///
/// Records are copied in. The set is only mutated through [`add`](Self::add),
/// [`remove`](Self::remove) and [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSet {
    items: Vec<StarshipDetails>,
}

impl ComparisonSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a record, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Capacity`] when the set is full, or
    /// [`CompareError::Duplicate`] when a record with the same name is
    /// already present. Capacity is checked first.
    pub fn add(&mut self, record: StarshipDetails) -> Result<(), CompareError> {
        if !self.can_add_more() {
            tracing::debug!(name = %record.name, "comparison set is full");
            return Err(CompareError::Capacity { max: MAX_COMPARE });
        }
        if self.contains(&record.name) {
            tracing::debug!(name = %record.name, "starship already in comparison set");
            return Err(CompareError::Duplicate { name: record.name });
        }
        self.items.push(record);
        Ok(())
    }

    /// Remove the first record with this name. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<StarshipDetails> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    #[must_use]
    pub const fn can_add_more(&self) -> bool {
        self.items.len() < MAX_COMPARE
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[StarshipDetails] {
        &self.items
    }

    /// Uids of the selected records, in insertion order.
    #[must_use]
    pub fn uids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.uid.clone()).collect()
    }
}
