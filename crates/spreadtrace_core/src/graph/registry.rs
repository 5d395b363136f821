//! Insertion-ordered person registry with O(1) id lookup.
//!
//! # Invariants
//! - Iteration follows registration order; the report surface depends on it.
//! - The id index and the backing vector never disagree.
//! - Write-once-then-read-many: there is no removal.

use crate::graph::{GraphError, GraphResult};
use crate::model::person::{Person, PersonId};
use std::collections::HashMap;

/// Store for every known person in one run.
#[derive(Debug, Default)]
pub struct PersonRegistry {
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one person.
    ///
    /// # Errors
    /// Returns `GraphError::DuplicateIdentity` when the id is already taken;
    /// the registry is left unchanged.
    pub fn register(&mut self, person: Person) -> GraphResult<()> {
        if self.index.contains_key(&person.id) {
            return Err(GraphError::DuplicateIdentity(person.id));
        }
        self.index.insert(person.id, self.people.len());
        self.people.push(person);
        Ok(())
    }

    /// Returns one person by id.
    pub fn lookup(&self, id: PersonId) -> Option<&Person> {
        match self.index.get(&id) {
            Some(&slot) => self.people.get(slot),
            None => None,
        }
    }

    pub(crate) fn lookup_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        match self.index.get(&id) {
            Some(&slot) => self.people.get_mut(slot),
            None => None,
        }
    }

    /// Number of registered people.
    pub fn count(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterates people in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}
