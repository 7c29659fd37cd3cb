use thiserror::Error;

/// Errors raised by the neutral structure model when its invariants are violated.
///
/// These errors describe data problems in a molecule value itself, independent
/// of any serialization format or chemistry backend. They are surfaced by the
/// validation and resolution helpers on [`super::molecule::Molecule`] and by
/// the element vocabulary lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An element symbol does not resolve to an entry in the element vocabulary.
    #[error("Unknown element symbol: '{symbol}'")]
    UnknownElement { symbol: String },

    /// An atomic number has no corresponding symbol in the element vocabulary.
    #[error("Atomic number {number} is outside the element vocabulary")]
    UnknownAtomicNumber { number: u8 },

    /// A bond references an atom index beyond the molecule's atom sequence.
    #[error("Bond references atom index {index}, but the molecule has {atom_count} atom(s)")]
    AtomIndexOutOfRange { index: usize, atom_count: usize },

    /// A bond references the same atom twice.
    #[error("Bond connects atom index {index} to itself")]
    SelfBond { index: usize },
}
