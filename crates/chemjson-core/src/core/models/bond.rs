/// The conventional range of chemically meaningful integer bond orders.
///
/// Values outside this range are a recoverable data-quality issue: the
/// conversion workflow clamps them rather than aborting (see
/// [`Bond::clamped_order`]).
pub const BOND_ORDER_RANGE: std::ops::RangeInclusive<u8> = 1..=3;

/// Represents a bond between two atoms in the neutral structure model.
///
/// Endpoints are 0-based indices into the owning molecule's atom sequence.
/// The order of the pair carries no chemical meaning but is preserved on
/// round-trip through the neutral JSON encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Indices of the two endpoint atoms.
    pub atoms: [usize; 2],
    /// Integer bond order (1 = single, 2 = double, 3 = triple).
    pub order: u8,
}

impl Bond {
    /// Creates a new bond between two atom indices.
    pub fn new(begin: usize, end: usize, order: u8) -> Self {
        Self {
            atoms: [begin, end],
            order,
        }
    }

    /// Reports whether the bond touches the given atom index.
    pub fn contains(&self, index: usize) -> bool {
        self.atoms[0] == index || self.atoms[1] == index
    }

    /// Reports whether both endpoints are the same atom.
    pub fn is_self_bond(&self) -> bool {
        self.atoms[0] == self.atoms[1]
    }

    /// Returns the bond order clamped to the conventional 1..=3 range.
    ///
    /// Out-of-range orders fall back to a single bond; callers that care about
    /// the data-quality issue should compare against [`Bond::order`] and warn.
    pub fn clamped_order(&self) -> u8 {
        if BOND_ORDER_RANGE.contains(&self.order) {
            self.order
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_new_initializes_fields_correctly() {
        let bond = Bond::new(0, 3, 2);
        assert_eq!(bond.atoms, [0, 3]);
        assert_eq!(bond.order, 2);
    }

    #[test]
    fn bond_contains_checks_both_endpoints() {
        let bond = Bond::new(1, 4, 1);
        assert!(bond.contains(1));
        assert!(bond.contains(4));
        assert!(!bond.contains(2));
    }

    #[test]
    fn self_bond_is_detected() {
        assert!(Bond::new(2, 2, 1).is_self_bond());
        assert!(!Bond::new(2, 3, 1).is_self_bond());
    }

    #[test]
    fn in_range_orders_are_kept_verbatim() {
        assert_eq!(Bond::new(0, 1, 1).clamped_order(), 1);
        assert_eq!(Bond::new(0, 1, 2).clamped_order(), 2);
        assert_eq!(Bond::new(0, 1, 3).clamped_order(), 3);
    }

    #[test]
    fn out_of_range_orders_clamp_to_single() {
        assert_eq!(Bond::new(0, 1, 0).clamped_order(), 1);
        assert_eq!(Bond::new(0, 1, 7).clamped_order(), 1);
        assert_eq!(Bond::new(0, 1, 255).clamped_order(), 1);
    }
}
