//! Critical-hit keys and the ordered record of committed hits.

use core::fmt;
use core::str::FromStr;

use crate::reference::{FiringArc, WeaponColumn};

/// Location of a critical hit.
///
/// The set is closed; which keys a unit may take is decided by its
/// [`UnitCategory`](crate::reference::UnitCategory).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum CritKey {
    Engine,
    FireControl,
    Crew,
    Mp,
    Weapons,
    Motive1,
    Motive2,
    Motive3,
    /// Weapon column of a large-vessel arc, e.g. `nose-cap`.
    ArcWeapon(FiringArc, WeaponColumn),
}

impl CritKey {
    /// Returns true for the vehicle motive keys, which replay in order.
    pub const fn is_motive(&self) -> bool {
        matches!(self, Self::Motive1 | Self::Motive2 | Self::Motive3)
    }
}

impl fmt::Display for CritKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine => f.write_str("engine"),
            Self::FireControl => f.write_str("fire-control"),
            Self::Crew => f.write_str("crew"),
            Self::Mp => f.write_str("mp"),
            Self::Weapons => f.write_str("weapons"),
            Self::Motive1 => f.write_str("motive1"),
            Self::Motive2 => f.write_str("motive2"),
            Self::Motive3 => f.write_str("motive3"),
            Self::ArcWeapon(arc, column) => write!(f, "{arc}-{column}"),
        }
    }
}

/// Error returned when a critical-hit key cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown critical hit key '{0}'")]
pub struct ParseCritKeyError(pub String);

impl FromStr for CritKey {
    type Err = ParseCritKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "engine" => Self::Engine,
            "fire-control" => Self::FireControl,
            "crew" => Self::Crew,
            "mp" => Self::Mp,
            "weapons" => Self::Weapons,
            "motive1" => Self::Motive1,
            "motive2" => Self::Motive2,
            "motive3" => Self::Motive3,
            other => {
                // arc names contain dashes themselves ("left-side-cap")
                let (arc, column) = other
                    .rsplit_once('-')
                    .ok_or_else(|| ParseCritKeyError(s.to_owned()))?;
                let arc = arc
                    .parse::<FiringArc>()
                    .map_err(|_| ParseCritKeyError(s.to_owned()))?;
                let column = column
                    .parse::<WeaponColumn>()
                    .map_err(|_| ParseCritKeyError(s.to_owned()))?;
                Self::ArcWeapon(arc, column)
            }
        };
        Ok(key)
    }
}

impl TryFrom<String> for CritKey {
    type Error = ParseCritKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CritKey> for String {
    fn from(value: CritKey) -> Self {
        value.to_string()
    }
}

/// One committed critical hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CritEntry {
    pub key: CritKey,
    /// Monotonic commit order; never reused within one record.
    pub order: u64,
}

/// Committed critical hits in the order they were applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalHitRecord {
    entries: Vec<CritEntry>,
    next_order: u64,
}

impl CriticalHitRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed hits on `key`.
    pub fn count(&self, key: CritKey) -> u32 {
        self.entries.iter().filter(|e| e.key == key).count() as u32
    }

    pub fn entries(&self) -> &[CritEntry] {
        &self.entries
    }

    /// Keys in commit order.
    pub fn keys(&self) -> impl Iterator<Item = CritKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn push(&mut self, key: CritKey) {
        self.entries.push(CritEntry {
            key,
            order: self.next_order,
        });
        self.next_order += 1;
    }

    /// Removes the most recent hit on `key`. Returns false if there is none.
    pub(crate) fn remove_latest(&mut self, key: CritKey) -> bool {
        match self.entries.iter().rposition(|e| e.key == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Pending critical hits and repairs.
///
/// New hits are kept one entry per hit in call order, so commit appends them
/// exactly as they were played. Repairs of committed hits are counted per key.
/// For any key at most one of the two is non-zero: a repair first cancels the
/// latest pending hit on that key, and a hit first cancels a pending repair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingCrits {
    hits: Vec<CritKey>,
    repairs: Vec<(CritKey, u32)>,
}

impl PendingCrits {
    /// Accumulates `delta` onto `key`, one hit or repair at a time.
    pub(crate) fn add(&mut self, key: CritKey, delta: i32) {
        for _ in 0..delta.unsigned_abs() {
            if delta > 0 {
                self.hit(key);
            } else {
                self.repair(key);
            }
        }
    }

    /// Overwrites the net delta for `key`. Its hits move to the end of the order.
    pub(crate) fn set(&mut self, key: CritKey, delta: i32) {
        self.hits.retain(|k| *k != key);
        self.repairs.retain(|(k, _)| *k != key);
        self.add(key, delta);
    }

    fn hit(&mut self, key: CritKey) {
        match self.repairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.repairs[index].1 -= 1;
                if self.repairs[index].1 == 0 {
                    self.repairs.remove(index);
                }
            }
            None => self.hits.push(key),
        }
    }

    fn repair(&mut self, key: CritKey) {
        if let Some(index) = self.hits.iter().rposition(|k| *k == key) {
            self.hits.remove(index);
            return;
        }
        match self.repairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.repairs.push((key, 1)),
        }
    }

    /// Net delta on `key`.
    pub fn get(&self, key: CritKey) -> i32 {
        let hits = self.hits.iter().filter(|k| **k == key).count() as i32;
        let repairs = self
            .repairs
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0, |(_, count)| *count as i32);
        hits - repairs
    }

    /// Pending hits in call order.
    pub fn hits(&self) -> &[CritKey] {
        &self.hits
    }

    /// Pending repairs of committed hits, per key.
    pub fn repairs(&self) -> impl Iterator<Item = (CritKey, u32)> + '_ {
        self.repairs.iter().copied()
    }

    /// Every key with a non-zero net delta, each once.
    pub fn keys(&self) -> Vec<CritKey> {
        let mut keys: Vec<CritKey> = self.repairs.iter().map(|(k, _)| *k).collect();
        for key in &self.hits {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.repairs.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.hits.clear();
        self.repairs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_strings() {
        let keys = [
            CritKey::Engine,
            CritKey::FireControl,
            CritKey::Motive2,
            CritKey::ArcWeapon(FiringArc::LeftSide, WeaponColumn::SubCapital),
        ];
        for key in keys {
            assert_eq!(key.to_string().parse::<CritKey>(), Ok(key));
        }
        assert_eq!(
            "left-side-scap".parse::<CritKey>(),
            Ok(CritKey::ArcWeapon(FiringArc::LeftSide, WeaponColumn::SubCapital))
        );
        assert!("sensors".parse::<CritKey>().is_err());
    }

    #[test]
    fn record_keeps_commit_order() {
        let mut record = CriticalHitRecord::new();
        record.push(CritKey::Motive1);
        record.push(CritKey::Motive2);
        record.push(CritKey::Motive1);

        assert_eq!(record.count(CritKey::Motive1), 2);
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec![CritKey::Motive1, CritKey::Motive2, CritKey::Motive1]
        );

        assert!(record.remove_latest(CritKey::Motive1));
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec![CritKey::Motive1, CritKey::Motive2]
        );
        assert!(!record.remove_latest(CritKey::Engine));

        // orders are never reused
        record.push(CritKey::Engine);
        assert_eq!(record.entries().last().map(|e| e.order), Some(3));
    }

    #[test]
    fn pending_hits_keep_call_order() {
        let mut pending = PendingCrits::default();
        pending.add(CritKey::Motive1, 1);
        pending.add(CritKey::Motive2, 1);
        pending.add(CritKey::Motive1, 1);

        assert_eq!(
            pending.hits(),
            &[CritKey::Motive1, CritKey::Motive2, CritKey::Motive1]
        );
        assert_eq!(pending.get(CritKey::Motive1), 2);

        // a repair cancels the latest pending hit first
        pending.add(CritKey::Motive1, -1);
        assert_eq!(pending.hits(), &[CritKey::Motive1, CritKey::Motive2]);

        pending.add(CritKey::Motive2, -2);
        assert_eq!(pending.hits(), &[CritKey::Motive1]);
        assert_eq!(pending.repairs().collect::<Vec<_>>(), vec![(CritKey::Motive2, 1)]);
        assert_eq!(pending.get(CritKey::Motive2), -1);

        // and a hit cancels a pending repair
        pending.add(CritKey::Motive2, 1);
        assert_eq!(pending.get(CritKey::Motive2), 0);
        assert_eq!(pending.keys(), vec![CritKey::Motive1]);

        pending.set(CritKey::Motive1, 0);
        assert!(pending.is_empty());
    }
}
