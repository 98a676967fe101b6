use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::CspError;

/// Values a CSP can be built over. Any hashable, comparable, cloneable type qualifies;
/// plain `usize`/`i32`/`String` domains all work without extra glue.
pub trait CspValue: Clone + PartialEq + Eq + Hash + Debug {}

impl<T: Clone + PartialEq + Eq + Hash + Debug> CspValue for T {}

/// A dense index into a `Problem`'s variable list. Variables are interned at `Problem`
/// construction rather than kept as reference-identity objects, per the flat, contiguous
/// representation the pheromone matrix needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarId(pub usize);

/// An immutable named entity with a non-empty, finite domain.
///
/// `domain` never changes after construction; two variables sharing a name are treated as
/// the same entity by `Problem::new`, which rejects duplicate names.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<V: CspValue> {
    name: String,
    domain: Vec<V>,
}

impl<V: CspValue> Variable<V> {
    pub fn new(name: impl Into<String>, domain: Vec<V>) -> Result<Self, CspError> {
        let name = name.into();
        if domain.is_empty() {
            return Err(CspError::EmptyDomain(name));
        }

        Ok(Self { name, domain })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &[V] {
        &self.domain
    }
}
