use super::atom::Atom;
use super::bond::Bond;
use super::element::ElementTable;
use super::error::ModelError;
use nalgebra::{Point3, Vector3};

/// The neutral in-memory molecular structure: an atom sequence plus a bond
/// sequence referencing it by index.
///
/// A molecule is a pure value with no identity beyond its contents; it can be
/// freely copied, compared, and serialized. It exclusively owns its atoms and
/// bonds, which have no lifecycle outside of it. Atom order is significant —
/// it is the indexing space the bonds reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// Ordered atom sequence.
    pub atoms: Vec<Atom>,
    /// Bonds referencing the atom sequence by 0-based index. May be empty,
    /// in which case connectivity is either absent from the source or must
    /// be inferred by a chemistry engine.
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a molecule from an atom and bond sequence.
    pub fn from_parts(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self { atoms, bonds }
    }

    /// Checks the structural invariants of the molecule.
    ///
    /// A molecule is valid when every element symbol resolves in the given
    /// vocabulary, every bond endpoint indexes an existing atom, and no bond
    /// connects an atom to itself.
    pub fn is_valid(&self, elements: &ElementTable) -> bool {
        self.validate(elements).is_ok()
    }

    /// Checks the structural invariants, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the specific [`ModelError`] describing the violated invariant.
    pub fn validate(&self, elements: &ElementTable) -> Result<(), ModelError> {
        for atom in &self.atoms {
            if !elements.contains(&atom.element) {
                return Err(ModelError::UnknownElement {
                    symbol: atom.element.clone(),
                });
            }
        }
        for bond in &self.bonds {
            self.bond_endpoints(bond)?;
            if bond.is_self_bond() {
                return Err(ModelError::SelfBond {
                    index: bond.atoms[0],
                });
            }
        }
        Ok(())
    }

    /// Resolves a bond to the two atom values it references.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AtomIndexOutOfRange`] if either endpoint is no
    /// longer a valid offset into the atom sequence — for example after atoms
    /// have been removed from the molecule.
    pub fn bond_endpoints(&self, bond: &Bond) -> Result<(&Atom, &Atom), ModelError> {
        let resolve = |index: usize| {
            self.atoms
                .get(index)
                .ok_or(ModelError::AtomIndexOutOfRange {
                    index,
                    atom_count: self.atoms.len(),
                })
        };
        Ok((resolve(bond.atoms[0])?, resolve(bond.atoms[1])?))
    }

    /// Reports whether any atom sits away from the origin.
    ///
    /// A molecule where this is false carries no usable geometry and needs
    /// 3D coordinate inference before rendering or native-format output.
    pub fn has_nonzero_coords(&self) -> bool {
        self.atoms
            .iter()
            .any(|atom| atom.location.coords != Vector3::zeros())
    }

    /// Computes the centroid of the atom locations.
    ///
    /// Returns `None` for an empty molecule.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum: Vector3<f64> = self.atoms.iter().map(|atom| atom.location.coords).sum();
        Some(Point3::from(sum / self.atoms.len() as f64))
    }

    /// Translates the molecule so its centroid sits at the origin.
    pub fn center(&mut self) {
        if let Some(centroid) = self.centroid() {
            for atom in &mut self.atoms {
                atom.location -= centroid.coords;
            }
        }
    }
}
