use nalgebra::Point3;

/// Represents a single atom in the neutral structure model.
///
/// An atom carries only what the neutral representation needs: an element
/// symbol drawn from the configured vocabulary and a 3D location in
/// Angstroms. Atoms have no identity of their own; they exist solely inside
/// the atom sequence of a [`super::molecule::Molecule`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g., "C", "O", "Fe").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    ///
    /// An all-zero location is the conventional encoding for "coordinates not
    /// yet inferred"; the conversion workflow treats a structure whose atoms
    /// are all at the origin as needing 3D embedding.
    pub location: Point3<f64>,
}

impl Atom {
    /// Creates a new atom with the given element symbol and location.
    pub fn new(element: &str, location: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            location,
        }
    }

    /// Creates an atom at the origin, marking its coordinates as uninferred.
    pub fn unplaced(element: &str) -> Self {
        Self::new(element, Point3::origin())
    }
}
