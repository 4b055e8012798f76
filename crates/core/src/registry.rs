//! The in-memory patient registry.
//!
//! The registry owns the ordered sequence of patient records for one process.
//! There is exactly one logical owner: callers receive a handle to a
//! constructor-initialised instance rather than reaching into shared global
//! state. Records are appended by admission and never mutated or deleted, so
//! reads always observe insertion order.
//!
//! Nothing here is durable. A restarted process starts again from the seed
//! records.

use crate::error::{PatientError, PatientResult};
use crate::patient::{NewPatient, PatientRecord};
use hygia_id::PatientId;

/// Ordered, append-only collection of patient records.
pub struct PatientRegistry {
    patients: Vec<PatientRecord>,
}

impl PatientRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
        }
    }

    /// Creates a registry pre-seeded with the two demo records the dashboard
    /// ships with (`P001` and `P002`).
    ///
    /// This is the constructor the surfaces use; [`PatientRegistry::new`]
    /// exists for callers that want to start from nothing.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.register(NewPatient {
            name: "Ana María Soto".into(),
            national_id: "101567890".into(),
            phone: Some("+57 310 123 4567".into()),
            birthdate: "1990-05-15".into(),
            gender: "F".into(),
        });
        registry.register(NewPatient {
            name: "Carlos Javier López".into(),
            national_id: "101567891".into(),
            phone: Some("+57 320 987 6543".into()),
            birthdate: "1985-11-20".into(),
            gender: "M".into(),
        });
        registry
    }

    /// Returns the full ordered collection.
    ///
    /// No side effects; always succeeds.
    pub fn list_all(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Looks a patient up by exact identifier match.
    ///
    /// The comparison is case-sensitive on the raw string, so `p001` does not
    /// find `P001`. Absence is a `None`, never an error.
    pub fn find_by_id(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.iter().find(|p| p.id.as_str() == id)
    }

    /// Like [`PatientRegistry::find_by_id`], but turns a miss into
    /// [`PatientError::NotFound`] for callers that surface structured errors
    /// instead of view states.
    pub fn get_by_id(&self, id: &str) -> PatientResult<&PatientRecord> {
        self.find_by_id(id)
            .ok_or_else(|| PatientError::NotFound(id.to_owned()))
    }

    /// Returns all records matching a free-text query, in insertion order.
    ///
    /// A query that trims to empty behaves exactly like
    /// [`PatientRegistry::list_all`]. Otherwise a record matches when its
    /// lower-cased name contains the lower-cased trimmed query, or when its
    /// national id contains the trimmed query as-is.
    ///
    /// Name matching is case-insensitive while national-id matching is
    /// case-sensitive. The asymmetry is part of the observed contract and
    /// callers rely on it; do not normalise the national-id side.
    pub fn search(&self, query: &str) -> Vec<&PatientRecord> {
        let query = query.trim();
        if query.is_empty() {
            return self.patients.iter().collect();
        }

        let name_query = query.to_lowercase();
        self.patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&name_query) || p.national_id.contains(query)
            })
            .collect()
    }

    /// Admits a new patient and returns the stored record.
    ///
    /// The identifier is the zero-padded successor of the current record
    /// count (`P003` on a registry of two). Because records are never removed,
    /// this numbering cannot collide within one process lifetime; anything
    /// sharing a registry across threads must serialise calls to this method
    /// so the count cannot race.
    ///
    /// Input strings are stored verbatim; no validation is performed.
    pub fn register(&mut self, input: NewPatient) -> PatientRecord {
        let id = PatientId::from_sequence(self.patients.len() as u32 + 1);
        let record = PatientRecord {
            id,
            name: input.name,
            national_id: input.national_id,
            phone: input.phone,
            birthdate: input.birthdate,
            gender: input.gender,
        };
        self.patients.push(record.clone());
        record
    }

    /// Number of records in the registry.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// True when the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admission(name: &str, national_id: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            national_id: national_id.into(),
            phone: None,
            birthdate: "1970-01-01".into(),
            gender: "F".into(),
        }
    }

    #[test]
    fn seeded_registry_holds_the_two_demo_records_in_order() {
        let registry = PatientRegistry::seeded();
        let all = registry.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.as_str(), "P001");
        assert_eq!(all[0].name, "Ana María Soto");
        assert_eq!(all[1].id.as_str(), "P002");
        assert_eq!(all[1].name, "Carlos Javier López");
    }

    #[test]
    fn register_assigns_sequential_ids() {
        let mut registry = PatientRegistry::seeded();
        let third = registry.register(admission("Third", "300"));
        assert_eq!(third.id.as_str(), "P003");
        let fourth = registry.register(admission("Fourth", "400"));
        assert_eq!(fourth.id.as_str(), "P004");
    }

    #[test]
    fn register_never_repeats_an_id() {
        let mut registry = PatientRegistry::new();
        let mut seen = std::collections::HashSet::new();
        for n in 0..50 {
            let record = registry.register(admission(&format!("Patient {n}"), &n.to_string()));
            assert!(seen.insert(record.id.clone()), "duplicate id {}", record.id);
        }
    }

    #[test]
    fn find_by_id_is_case_sensitive_exact_match() {
        let registry = PatientRegistry::seeded();
        assert!(registry.find_by_id("P001").is_some());
        assert!(registry.find_by_id("p001").is_none());
        assert!(registry.find_by_id("P999").is_none());
    }

    #[test]
    fn get_by_id_reports_misses_as_not_found() {
        let registry = PatientRegistry::seeded();
        assert!(registry.get_by_id("P002").is_ok());

        let err = registry.get_by_id("P999").expect_err("expected a miss");
        assert!(matches!(err, PatientError::NotFound(ref id) if id == "P999"));
    }

    #[test]
    fn search_with_empty_or_whitespace_query_lists_everything() {
        let registry = PatientRegistry::seeded();
        let all: Vec<_> = registry.list_all().iter().collect();
        assert_eq!(registry.search(""), all);
        assert_eq!(registry.search("   "), all);
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let registry = PatientRegistry::seeded();
        let hits = registry.search("ANA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana María Soto");
    }

    #[test]
    fn search_matches_national_ids_case_sensitively() {
        let mut registry = PatientRegistry::seeded();
        registry.register(admission("Case Check", "cedula-upper"));

        // Both directions of the asymmetry must hold at once.
        assert!(registry.search("CEDULA-UPPER").is_empty());
        assert_eq!(registry.search("cedula-upper").len(), 1);
    }

    #[test]
    fn search_preserves_insertion_order() {
        let mut registry = PatientRegistry::seeded();
        registry.register(admission("Ana Torres", "900"));

        let hits = registry.search("ana");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id.as_str(), "P001");
        assert_eq!(hits[1].id.as_str(), "P003");
    }

    #[test]
    fn register_trusts_input_strings_verbatim() {
        let mut registry = PatientRegistry::new();
        let record = registry.register(NewPatient::default());
        assert_eq!(record.name, "");
        assert_eq!(record.national_id, "");
        assert_eq!(record.id.as_str(), "P001");
    }

    #[test]
    fn admission_scenario_end_to_end() {
        let mut registry = PatientRegistry::seeded();

        let record = registry.register(NewPatient {
            name: "Luis Pérez".into(),
            national_id: "555".into(),
            phone: None,
            birthdate: "2000-01-01".into(),
            gender: "M".into(),
        });
        assert_eq!(record.id.as_str(), "P003");

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.list_all().last(), Some(&record));

        let hits = registry.search("luis");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], &record);
    }
}
