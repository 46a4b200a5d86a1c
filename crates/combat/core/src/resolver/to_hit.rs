use crate::reference::RangeBand;

/// Inputs that raise a unit's to-hit number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToHitModifiers {
    pub skill: u32,
    pub heat: u32,
    pub heat_tolerant: bool,
    pub crew_hits: u32,
    pub fire_control_hits: u32,
}

impl ToHitModifiers {
    /// Heat penalty; heat tolerance ignores the first level.
    pub const fn heat_penalty(&self) -> u32 {
        if self.heat_tolerant {
            self.heat.saturating_sub(1)
        } else {
            self.heat
        }
    }

    /// Target number for an attack at `band`.
    pub const fn target(&self, band: RangeBand) -> u32 {
        self.skill
            + band.to_hit_offset()
            + self.heat_penalty()
            + 2 * self.crew_hits
            + 2 * self.fire_control_hits
    }
}
