use super::{PackageKey, PackageRecord};
use std::collections::HashMap;

/// PackageIndex aggregate: installed packages keyed by normalized key
///
/// Iteration follows insertion order. When two records share a key the later
/// one wins and takes the earlier one's slot, so output order stays stable.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    records: Vec<PackageRecord>,
    positions: HashMap<PackageKey, usize>,
}

impl PackageIndex {
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        let mut index = Self::default();
        for record in records {
            index.insert(record);
        }
        index
    }

    fn insert(&mut self, record: PackageRecord) {
        match self.positions.get(record.key()) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.positions.insert(record.key().clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PackageRecord> {
        self.positions.get(key).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PackageKey> {
        self.records.iter().map(|record| record.key())
    }

    /// Number of declared dependency keys with no installed record
    pub fn unresolved_dependency_count(&self) -> usize {
        self.records
            .iter()
            .flat_map(|record| record.dependency_keys())
            .filter(|key| !self.contains(key.as_str()))
            .count()
    }
}
