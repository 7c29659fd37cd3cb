use super::error::EngineError;
use super::traits::ChemistryEngine;
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// A plain atom/bond table used as the structure handle of
/// [`GeometryOnlyEngine`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryStructure {
    atoms: Vec<(u8, Point3<f64>)>,
    bonds: Vec<(usize, usize, u8)>,
}

impl GeometryStructure {
    /// Returns the number of atoms in the structure.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// The built-in backend for pipelines that stay within the neutral
/// representation.
///
/// It implements the purely geometric capabilities — structure assembly,
/// enumeration, centroid centering, and hydrogen stripping (index
/// filtering) — in-process, and reports every capability that would require
/// an actual cheminformatics toolkit as unsupported rather than guessing.
/// Coordinate embedding passes through untouched when the structure already
/// carries real geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryOnlyEngine;

impl GeometryOnlyEngine {
    pub fn new() -> Self {
        Self
    }
}

const HYDROGEN_ATOMIC_NUMBER: u8 = 1;

impl ChemistryEngine for GeometryOnlyEngine {
    type Structure = GeometryStructure;

    fn new_structure(&self) -> GeometryStructure {
        GeometryStructure::default()
    }

    fn parse(&self, _data: &str, format: &str) -> Result<GeometryStructure, EngineError> {
        Err(EngineError::UnsupportedFormat {
            format: format.to_string(),
        })
    }

    fn write(&self, _structure: &GeometryStructure, format: &str) -> Result<String, EngineError> {
        Err(EngineError::UnsupportedFormat {
            format: format.to_string(),
        })
    }

    fn add_atom(&self, structure: &mut GeometryStructure, atomic_number: u8, position: Point3<f64>) {
        structure.atoms.push((atomic_number, position));
    }

    fn add_bond(
        &self,
        structure: &mut GeometryStructure,
        begin: usize,
        end: usize,
        order: u8,
    ) -> Result<(), EngineError> {
        let atom_count = structure.atoms.len();
        if begin >= atom_count || end >= atom_count {
            return Err(EngineError::InvalidStructure(format!(
                "bond ({begin}, {end}) references an atom beyond the {atom_count} assembled"
            )));
        }
        structure.bonds.push((begin, end, order));
        Ok(())
    }

    fn perceive_bonds(&self, _structure: &mut GeometryStructure) -> Result<(), EngineError> {
        Err(EngineError::UnsupportedOperation {
            operation: "bond perception",
        })
    }

    fn embed_3d(
        &self,
        structure: &mut GeometryStructure,
        _max_steps: usize,
    ) -> Result<(), EngineError> {
        if self.has_nonzero_coords(structure) {
            debug!("structure already carries geometry; embedding passes through");
            Ok(())
        } else {
            Err(EngineError::UnsupportedOperation {
                operation: "3D embedding",
            })
        }
    }

    fn add_hydrogens(&self, _structure: &mut GeometryStructure) -> Result<(), EngineError> {
        Err(EngineError::UnsupportedOperation {
            operation: "hydrogen saturation",
        })
    }

    fn remove_hydrogens(&self, structure: &mut GeometryStructure) -> Result<(), EngineError> {
        // Surviving atoms keep their relative order; bonds are remapped to
        // the new indices and bonds touching a removed atom are dropped.
        let mut remap = vec![None; structure.atoms.len()];
        let mut kept = Vec::with_capacity(structure.atoms.len());
        for (index, &(atomic_number, position)) in structure.atoms.iter().enumerate() {
            if atomic_number != HYDROGEN_ATOMIC_NUMBER {
                remap[index] = Some(kept.len());
                kept.push((atomic_number, position));
            }
        }
        structure.bonds = structure
            .bonds
            .iter()
            .filter_map(|&(begin, end, order)| match (remap[begin], remap[end]) {
                (Some(new_begin), Some(new_end)) => Some((new_begin, new_end, order)),
                _ => None,
            })
            .collect();
        structure.atoms = kept;
        Ok(())
    }

    fn center(&self, structure: &mut GeometryStructure) {
        if structure.atoms.is_empty() {
            return;
        }
        let sum: Vector3<f64> = structure
            .atoms
            .iter()
            .map(|(_, position)| position.coords)
            .sum();
        let centroid = sum / structure.atoms.len() as f64;
        for (_, position) in &mut structure.atoms {
            *position -= centroid;
        }
    }

    fn atoms(&self, structure: &GeometryStructure) -> Vec<(u8, Point3<f64>)> {
        structure.atoms.clone()
    }

    fn bonds(&self, structure: &GeometryStructure) -> Vec<(usize, usize, u8)> {
        structure.bonds.clone()
    }
}
