//! Fixed registry of known person ids

/// Immutable, ordered set of person ids used as a membership oracle
#[derive(Debug, Clone, Copy)]
pub struct PersonRegistry {
    ids: &'static [u64],
}

/// The known persons
pub const PERSONS: PersonRegistry = PersonRegistry::new(&[1, 2, 3, 4, 5]);

impl PersonRegistry {
    pub const fn new(ids: &'static [u64]) -> Self {
        Self { ids }
    }

    pub fn contains(&self, person_id: u64) -> bool {
        self.ids.contains(&person_id)
    }

    pub fn ids(&self) -> &'static [u64] {
        self.ids
    }
}
