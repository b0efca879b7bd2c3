//! Expand/collapse bookkeeping for accordion-style widgets.
//!
//! A [`ToggleGroup`] owns the open state of a fixed set of items and reports,
//! for every mutation, exactly which items changed. The presentation layer
//! animates from that list and never reads state back out of the DOM.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("toggle item already registered: {0}")]
    DuplicateId(String),

    #[error("unknown toggle item: {0}")]
    UnknownId(String),
}

/// How opening one item affects the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    /// At most one item open at a time.
    #[default]
    Exclusive,
    /// Items toggle without affecting each other.
    Independent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleItem {
    pub id: String,
    pub is_open: bool,
    /// Natural extent of the item's content, supplied before it opens.
    pub measured_size: f64,
}

/// One state change produced by [`ToggleGroup::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub id: String,
    pub previous_open: bool,
    pub new_open: bool,
    /// Size to animate towards: the measured size when opening, 0 when closing.
    pub target_size: f64,
}

#[derive(Debug, Clone)]
pub struct ToggleGroup {
    mode: ToggleMode,
    items: Vec<ToggleItem>,
}

impl ToggleGroup {
    pub fn new(mode: ToggleMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
        }
    }

    /// Builds a group with every id registered closed, in the given order.
    pub fn with_items<I, S>(mode: ToggleMode, ids: I) -> Result<Self, ToggleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(mode);
        for id in ids {
            group.register(id, false)?;
        }
        Ok(group)
    }

    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds an item to the end of the group.
    ///
    /// In exclusive mode an item registered open while another item is
    /// already open is registered closed instead; the first open item wins.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        initial_open: bool,
    ) -> Result<(), ToggleError> {
        let id = id.into();
        if self.position(&id).is_some() {
            return Err(ToggleError::DuplicateId(id));
        }

        let mut is_open = initial_open;
        let any_open = self.items.iter().any(|item| item.is_open);
        if is_open && self.mode == ToggleMode::Exclusive && any_open {
            warn!(
                "'{}' registered open while another item is open, registering it closed",
                id
            );
            is_open = false;
        }

        self.items.push(ToggleItem {
            id,
            is_open,
            measured_size: 0.0,
        });
        Ok(())
    }

    /// Records the natural size of an item's content.
    pub fn measure(&mut self, id: &str, size: f64) -> Result<(), ToggleError> {
        let index = self.index_of(id)?;
        self.items[index].measured_size = size.max(0.0);
        Ok(())
    }

    /// Flips an item and applies the group's mode.
    ///
    /// The toggled item's transition comes first, followed by any items
    /// closed as a side effect, in registration order.
    pub fn toggle(&mut self, id: &str) -> Result<Vec<Transition>, ToggleError> {
        let target = self.index_of(id)?;
        let opening = !self.items[target].is_open;

        let mut transitions = vec![self.set_open(target, opening)];

        if opening && self.mode == ToggleMode::Exclusive {
            for index in 0..self.items.len() {
                if index != target && self.items[index].is_open {
                    transitions.push(self.set_open(index, false));
                }
            }
        }

        Ok(transitions)
    }

    pub fn is_open(&self, id: &str) -> Result<bool, ToggleError> {
        let index = self.index_of(id)?;
        Ok(self.items[index].is_open)
    }

    /// Currently open ids in registration order.
    pub fn open_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.is_open)
            .map(|item| item.id.as_str())
            .collect()
    }

    fn set_open(&mut self, index: usize, open: bool) -> Transition {
        let item = &mut self.items[index];
        let previous_open = item.is_open;
        item.is_open = open;
        Transition {
            id: item.id.clone(),
            previous_open,
            new_open: open,
            target_size: if open { item.measured_size } else { 0.0 },
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn index_of(&self, id: &str) -> Result<usize, ToggleError> {
        self.position(id)
            .ok_or_else(|| ToggleError::UnknownId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn faq(mode: ToggleMode) -> ToggleGroup {
        ToggleGroup::with_items(mode, ["q1", "q2", "q3"]).unwrap()
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut group = faq(ToggleMode::Exclusive);
        let err = group.register("q2", false).unwrap_err();
        assert_eq!(err, ToggleError::DuplicateId("q2".to_string()));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_with_items_propagates_duplicate() {
        let result = ToggleGroup::with_items(ToggleMode::Independent, ["a", "b", "a"]);
        assert!(matches!(result, Err(ToggleError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_exclusive_open_closes_previous() {
        let mut group = faq(ToggleMode::Exclusive);
        group.toggle("q1").unwrap();
        group.measure("q3", 120.0).unwrap();

        let transitions = group.toggle("q3").unwrap();
        assert_eq!(
            transitions,
            vec![
                Transition {
                    id: "q3".to_string(),
                    previous_open: false,
                    new_open: true,
                    target_size: 120.0,
                },
                Transition {
                    id: "q1".to_string(),
                    previous_open: true,
                    new_open: false,
                    target_size: 0.0,
                },
            ]
        );
        assert_eq!(group.open_ids(), vec!["q3"]);
    }

    #[test]
    fn test_exclusive_toggle_open_item_collapses_group() {
        let mut group = faq(ToggleMode::Exclusive);
        group.toggle("q2").unwrap();

        let transitions = group.toggle("q2").unwrap();
        assert_eq!(transitions.len(), 1);
        assert!(!transitions[0].new_open);
        assert!(transitions.iter().all(|t| !t.new_open));
        assert!(group.open_ids().is_empty());
    }

    #[test]
    fn test_independent_toggle_leaves_others_alone() {
        let mut group = faq(ToggleMode::Independent);
        group.toggle("q1").unwrap();
        let transitions = group.toggle("q2").unwrap();

        assert_eq!(transitions.len(), 1);
        assert!(group.is_open("q1").unwrap());
        assert!(group.is_open("q2").unwrap());
        assert_eq!(group.open_ids(), vec!["q1", "q2"]);
    }

    #[test]
    fn test_unknown_id_leaves_state_unchanged() {
        let mut group = faq(ToggleMode::Exclusive);
        group.toggle("q1").unwrap();

        let err = group.toggle("nope").unwrap_err();
        assert_eq!(err, ToggleError::UnknownId("nope".to_string()));
        assert_eq!(group.open_ids(), vec!["q1"]);
        assert!(group.is_open("nope").is_err());
        assert!(group.measure("nope", 10.0).is_err());
    }

    #[test]
    fn test_exclusive_registration_keeps_first_open_item() {
        let mut group = ToggleGroup::new(ToggleMode::Exclusive);
        group.register("a", true).unwrap();
        group.register("b", true).unwrap();
        assert_eq!(group.open_ids(), vec!["a"]);

        let mut group = ToggleGroup::new(ToggleMode::Independent);
        group.register("a", true).unwrap();
        group.register("b", true).unwrap();
        assert_eq!(group.open_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_measure_clamps_negative_size() {
        let mut group = faq(ToggleMode::Exclusive);
        group.measure("q1", -5.0).unwrap();
        let transitions = group.toggle("q1").unwrap();
        assert_eq!(transitions[0].target_size, 0.0);
    }

    proptest! {
        #[test]
        fn exclusive_mode_never_has_two_open(
            count in 2usize..8,
            presses in proptest::collection::vec(0usize..8, 0..64),
        ) {
            let ids: Vec<String> = (0..count).map(|i| format!("faq-{}", i)).collect();
            let mut group = ToggleGroup::with_items(ToggleMode::Exclusive, ids.clone()).unwrap();
            for press in presses {
                group.toggle(&ids[press % count]).unwrap();
                prop_assert!(group.open_ids().len() <= 1);
            }
        }

        #[test]
        fn independent_mode_only_touches_target(
            count in 2usize..8,
            presses in proptest::collection::vec(0usize..8, 0..64),
        ) {
            let ids: Vec<String> = (0..count).map(|i| format!("faq-{}", i)).collect();
            let mut group = ToggleGroup::with_items(ToggleMode::Independent, ids.clone()).unwrap();
            for press in presses {
                let target = &ids[press % count];
                let before: Vec<bool> = ids.iter().map(|id| group.is_open(id).unwrap()).collect();
                let transitions = group.toggle(target).unwrap();
                prop_assert_eq!(transitions.len(), 1);
                for (index, id) in ids.iter().enumerate() {
                    let now = group.is_open(id).unwrap();
                    if id == target {
                        prop_assert_eq!(now, !before[index]);
                    } else {
                        prop_assert_eq!(now, before[index]);
                    }
                }
            }
        }
    }
}
