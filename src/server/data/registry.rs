//! Registration number allow-list.

use std::{collections::HashSet, sync::Arc};

use crate::server::{config::RegistrationRange, model::student::RegistrationNumber};

/// Fixed set of registration numbers allowed to sign in as students.
///
/// Built once at startup and never mutated, so no lock is needed.
#[derive(Clone)]
pub struct RegistrationRegistry {
    ids: Arc<HashSet<String>>,
}

impl RegistrationRegistry {
    /// Builds the allow-list `prefix + n` for every `n` in `first..=last`.
    ///
    /// The prefix is stored uppercased so that lookups, which normalize their
    /// input, can match it.
    pub fn from_range(range: &RegistrationRange) -> Self {
        let prefix = range.prefix.trim().to_uppercase();
        let ids = (range.first..=range.last)
            .map(|n| format!("{prefix}{n}"))
            .collect();

        Self { ids: Arc::new(ids) }
    }

    /// Whether `input` names a registered student after normalization.
    pub fn validate(&self, input: &str) -> bool {
        self.ids.contains(&normalize(input))
    }

    /// Normalizes `input` and returns it if it is on the allow-list.
    pub fn lookup(&self, input: &str) -> Option<RegistrationNumber> {
        let normalized = normalize(input);

        self.ids
            .contains(&normalized)
            .then(|| RegistrationNumber::new_unchecked(normalized))
    }

    /// Number of registered students.
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
