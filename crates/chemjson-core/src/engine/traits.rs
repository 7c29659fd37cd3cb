use super::error::EngineError;
use nalgebra::{Point3, Vector3};

/// The capability set the conversion workflow consumes from a
/// cheminformatics toolkit.
///
/// Implementors wrap an external engine and expose its structure handle as
/// the associated [`Structure`](ChemistryEngine::Structure) type. The
/// workflow only ever assembles structures atom-by-atom, asks for
/// normalization steps, and enumerates the result; all chemical knowledge
/// (format grammars, perception heuristics, embedding algorithms) stays on
/// the backend side of this trait.
///
/// Each call to the workflow constructs its own structure value, so
/// concurrent conversions need no locking here. A backend whose underlying
/// toolkit handle is a shared global must serialize access internally, since
/// structure construction in this domain is commonly not reentrant.
pub trait ChemistryEngine {
    /// The backend-native molecular structure handle.
    type Structure;

    /// Creates an empty structure ready for atom-by-atom assembly.
    fn new_structure(&self) -> Self::Structure;

    /// Parses text in a native chemical format.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] for unknown format names
    /// and [`EngineError::Backend`] when parsing fails.
    fn parse(&self, data: &str, format: &str) -> Result<Self::Structure, EngineError>;

    /// Writes a structure in a native chemical format.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] for unknown format names
    /// and [`EngineError::Backend`] when writing fails.
    fn write(&self, structure: &Self::Structure, format: &str) -> Result<String, EngineError>;

    /// Appends an atom with the given atomic number and position.
    fn add_atom(&self, structure: &mut Self::Structure, atomic_number: u8, position: Point3<f64>);

    /// Adds a bond between two 0-based atom indices.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStructure`] if either index does not
    /// refer to an atom already in the structure.
    fn add_bond(
        &self,
        structure: &mut Self::Structure,
        begin: usize,
        end: usize,
        order: u8,
    ) -> Result<(), EngineError>;

    /// Perceives connectivity from geometry and estimates bond orders.
    fn perceive_bonds(&self, structure: &mut Self::Structure) -> Result<(), EngineError>;

    /// Generates 3D coordinates, refining for at most `max_steps` iterations.
    fn embed_3d(&self, structure: &mut Self::Structure, max_steps: usize)
    -> Result<(), EngineError>;

    /// Saturates open valences with explicit hydrogens.
    fn add_hydrogens(&self, structure: &mut Self::Structure) -> Result<(), EngineError>;

    /// Strips explicit hydrogens.
    fn remove_hydrogens(&self, structure: &mut Self::Structure) -> Result<(), EngineError>;

    /// Translates the structure so its centroid sits at the origin.
    fn center(&self, structure: &mut Self::Structure);

    /// Enumerates every atom as `(atomic number, position)`.
    fn atoms(&self, structure: &Self::Structure) -> Vec<(u8, Point3<f64>)>;

    /// Enumerates every bond as `(begin index, end index, order)`.
    fn bonds(&self, structure: &Self::Structure) -> Vec<(usize, usize, u8)>;

    /// Reports whether any atom sits away from the origin.
    fn has_nonzero_coords(&self, structure: &Self::Structure) -> bool {
        self.atoms(structure)
            .iter()
            .any(|(_, position)| position.coords != Vector3::zeros())
    }
}
