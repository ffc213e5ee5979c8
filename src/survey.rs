//! First-Visit Survey Gate
//!
//! The survey auto-opens at most once per device. Whether it has already
//! been scheduled is a two-state gate kept in a [`KeyValueStore`].

use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreResult};

/// Value written when the survey is marked as shown
pub const SHOWN_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyGate {
    NeverShown,
    Shown,
}

impl SurveyGate {
    /// Interpret a raw stored value.
    ///
    /// Absent, empty and `"false"` all mean the survey may still auto-open.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("false") => SurveyGate::NeverShown,
            Some(_) => SurveyGate::Shown,
        }
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StoreResult<Self> {
        let value = store.get(key)?;
        Ok(Self::from_stored(value.as_deref()))
    }

    pub fn mark_shown<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> StoreResult<()> {
        store.set(key, SHOWN_VALUE)
    }

    /// Forget the flag so the next load behaves like a first visit.
    pub fn reset<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> StoreResult<()> {
        store.remove(key)
    }

    pub fn is_eligible(self) -> bool {
        self == SurveyGate::NeverShown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const KEY: &str = "surveyShown";

    #[test]
    fn test_absent_flag_is_eligible() {
        let store = MemoryStore::new();
        let gate = SurveyGate::load(&store, KEY).unwrap();
        assert_eq!(gate, SurveyGate::NeverShown);
        assert!(gate.is_eligible());
    }

    #[test]
    fn test_false_and_empty_values_are_eligible() {
        assert_eq!(SurveyGate::from_stored(Some("false")), SurveyGate::NeverShown);
        assert_eq!(SurveyGate::from_stored(Some("")), SurveyGate::NeverShown);
        assert_eq!(SurveyGate::from_stored(Some("  ")), SurveyGate::NeverShown);
    }

    #[test]
    fn test_any_other_value_is_shown() {
        assert_eq!(SurveyGate::from_stored(Some("true")), SurveyGate::Shown);
        assert_eq!(SurveyGate::from_stored(Some("1")), SurveyGate::Shown);
    }

    #[test]
    fn test_mark_then_reset() {
        let mut store = MemoryStore::new();

        SurveyGate::mark_shown(&mut store, KEY).unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(SHOWN_VALUE));
        assert_eq!(SurveyGate::load(&store, KEY).unwrap(), SurveyGate::Shown);

        SurveyGate::reset(&mut store, KEY).unwrap();
        assert_eq!(SurveyGate::load(&store, KEY).unwrap(), SurveyGate::NeverShown);
    }
}
