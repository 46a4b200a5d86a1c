//! Weapon damage reduction.

use strum::IntoEnumIterator;

use crate::reference::{ArcDamage, DamageByRange, DamageValue, WeaponColumn};

/// Hits at which an arc weapon column stops dealing damage.
pub const ARC_COLUMN_HITS: u32 = 4;

/// Steps `value` down the damage sequence once per weapon hit.
///
/// The sequence is `9 8 7 6 5 4 3 2 1 0* 0`; a value never falls below
/// `0`. `—` has no position and is returned unchanged.
pub const fn reduce_damage(value: DamageValue, hits: u32) -> DamageValue {
    match value.position() {
        Some(position) => DamageValue::from_position(position.saturating_sub(hits)),
        None => value,
    }
}

/// Reduces every band of a damage line by the same hit count.
pub fn reduce_damage_line(line: &DamageByRange, hits: u32) -> DamageByRange {
    line.map(|_, value| reduce_damage(value, hits))
}

/// Arc column damage after `hits`: 25% per hit (floor), nothing at four.
///
/// A non-zero column knocked down to zero before the fourth hit keeps a
/// nominal `0*`.
pub const fn reduce_arc_damage(value: DamageValue, hits: u32) -> DamageValue {
    if hits == 0 {
        return value;
    }
    match value {
        DamageValue::NoCapability => value,
        _ if hits >= ARC_COLUMN_HITS => DamageValue::Value(0),
        DamageValue::Minimal => DamageValue::Minimal,
        DamageValue::Value(0) => value,
        DamageValue::Value(v) => {
            let reduced = v * (ARC_COLUMN_HITS - hits) / ARC_COLUMN_HITS;
            if reduced == 0 {
                DamageValue::Minimal
            } else {
                DamageValue::Value(reduced)
            }
        }
    }
}

/// Applies per-column hit counts to one arc; `hits` yields the count per column.
pub fn reduce_arc(arc: &ArcDamage, mut hits: impl FnMut(WeaponColumn) -> u32) -> ArcDamage {
    let mut reduced = arc.clone();
    for column in WeaponColumn::iter() {
        let count = hits(column);
        let line = reduced.column_mut(column);
        *line = line.map(|_, value| reduce_arc_damage(value, count));
    }
    reduced
}
