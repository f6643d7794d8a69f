//! Switch storage
//!
//! The host owns its switches and persists them; the evaluator only reads and
//! writes through `FlagStore`.

use std::collections::HashMap;

use crate::triggers::FlagId;

/// Boolean switches keyed by positive id
pub trait FlagStore {
    /// Read a switch. Unknown ids read as OFF.
    fn get(&self, id: FlagId) -> bool;

    /// Write a switch. Ids the store can't hold are ignored.
    fn set(&mut self, id: FlagId, value: bool);
}

/// Fixed-size switch bank with ids `1..=capacity`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwitchBank {
    values: Vec<bool>,
}

impl SwitchBank {
    /// Create a bank with every switch OFF
    pub fn new(capacity: usize) -> Self {
        Self {
            values: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Turn every switch OFF
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|v| *v = false);
    }

    fn slot(&self, id: FlagId) -> Option<usize> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        (index < self.values.len()).then_some(index)
    }
}

impl FlagStore for SwitchBank {
    fn get(&self, id: FlagId) -> bool {
        self.slot(id).map(|i| self.values[i]).unwrap_or(false)
    }

    fn set(&mut self, id: FlagId, value: bool) {
        match self.slot(id) {
            Some(i) => self.values[i] = value,
            None => log::warn!(
                "Ignoring write to switch {} (valid ids 1..={})",
                id,
                self.values.len()
            ),
        }
    }
}

impl FlagStore for HashMap<FlagId, bool> {
    fn get(&self, id: FlagId) -> bool {
        *HashMap::get(self, &id).unwrap_or(&false)
    }

    fn set(&mut self, id: FlagId, value: bool) {
        if id == 0 {
            log::warn!("Ignoring write to switch 0");
            return;
        }
        self.insert(id, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_bank_roundtrip() {
        let mut bank = SwitchBank::new(20);
        assert!(!bank.get(12));
        bank.set(12, true);
        assert!(bank.get(12));
        bank.set(12, false);
        assert!(!bank.get(12));
    }

    #[test]
    fn test_switch_bank_out_of_range() {
        let mut bank = SwitchBank::new(5);
        bank.set(0, true);
        bank.set(6, true);
        assert!(!bank.get(0));
        assert!(!bank.get(6));
        assert_eq!(bank, SwitchBank::new(5));

        bank.set(5, true);
        assert!(bank.get(5));
    }

    #[test]
    fn test_switch_bank_clear() {
        let mut bank = SwitchBank::new(3);
        bank.set(1, true);
        bank.set(3, true);
        bank.clear();
        assert!(!bank.get(1) && !bank.get(3));
        assert_eq!(bank.capacity(), 3);
    }

    #[test]
    fn test_hashmap_store() {
        let mut flags: HashMap<FlagId, bool> = HashMap::new();
        assert!(!FlagStore::get(&flags, 1000));
        FlagStore::set(&mut flags, 1000, true);
        assert!(FlagStore::get(&flags, 1000));

        FlagStore::set(&mut flags, 0, true);
        assert!(!flags.contains_key(&0));
    }
}
