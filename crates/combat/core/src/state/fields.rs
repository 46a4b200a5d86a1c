use bitflags::bitflags;

bitflags! {
    /// Tracks which pending fields of a [`CombatState`](super::CombatState) are non-zero.
    ///
    /// Each bit represents one part of the pending layer. An empty set means
    /// the record is clean.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PendingFields: u8 {
        const ARMOR     = 1 << 0;
        const STRUCTURE = 1 << 1;
        const HEAT      = 1 << 2;
        const CRITS     = 1 << 3;
        const ABILITIES = 1 << 4;
    }
}
