//! Movement and target movement modifier after critical hits and heat.

use crate::state::CritKey;

/// TMM reported by an immobilized unit.
pub const IMMOBILE_TMM: i32 = -4;

/// Inches of ground movement lost per heat level.
pub const HEAT_MOVEMENT_PENALTY: u32 = 2;

/// Halves `current`, removing at least `min_step`. Floors at 0.
const fn halve_at_least(current: u32, min_step: u32) -> u32 {
    let step = current - current / 2;
    let step = if step < min_step { min_step } else { step };
    current.saturating_sub(step)
}

/// Movement after `hits` MP critical hits on a non-vehicle unit.
pub const fn reduce_mp(inches: u32, hits: u32) -> u32 {
    let mut current = inches;
    let mut i = 0;
    while i < hits && current > 0 {
        current = halve_at_least(current, 2);
        i += 1;
    }
    current
}

/// TMM after `hits` MP critical hits on a non-vehicle unit.
pub const fn reduce_mp_tmm(tmm: u32, hits: u32) -> u32 {
    let mut current = tmm;
    let mut i = 0;
    while i < hits && current > 0 {
        current = halve_at_least(current, 1);
        i += 1;
    }
    current
}

/// Ground movement after heat; jump movement ignores heat.
pub const fn apply_heat(inches: u32, heat: u32, jump: bool) -> u32 {
    if jump {
        inches
    } else {
        inches.saturating_sub(HEAT_MOVEMENT_PENALTY * heat)
    }
}

/// Running result of replaying vehicle motive hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotiveReplay {
    pub inches: u32,
    pub tmm: u32,
    /// Set once a `motive3` hit has been replayed.
    pub immobilized: bool,
}

impl MotiveReplay {
    pub const fn new(inches: u32, tmm: u32) -> Self {
        Self {
            inches,
            tmm,
            immobilized: false,
        }
    }

    /// Applies one hit. Non-motive keys and hits after immobilization are ignored.
    pub const fn apply(self, key: CritKey) -> Self {
        if self.immobilized {
            return self;
        }
        match key {
            CritKey::Motive1 => Self {
                inches: self.inches.saturating_sub(2),
                tmm: self.tmm.saturating_sub(1),
                immobilized: false,
            },
            CritKey::Motive2 => Self {
                inches: halve_at_least(self.inches, 2),
                tmm: halve_at_least(self.tmm, 1),
                immobilized: false,
            },
            CritKey::Motive3 => Self {
                inches: 0,
                tmm: 0,
                immobilized: true,
            },
            _ => self,
        }
    }

    /// Replays `hits` in commit order.
    pub fn replay(inches: u32, tmm: u32, hits: impl IntoIterator<Item = CritKey>) -> Self {
        hits.into_iter()
            .fold(Self::new(inches, tmm), |replay, key| replay.apply(key))
    }
}
