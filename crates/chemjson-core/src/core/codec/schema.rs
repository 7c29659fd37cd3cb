use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use serde::Deserialize;

/// Raw wire form of the neutral molecule document.
///
/// Deserialization is deliberately permissive about data quality: bond
/// indices are not range-checked (resolution raises the error) and bond
/// orders outside 1..=3 are kept verbatim (the conversion workflow clamps
/// them). Schema shape, however, is strict — `atoms` is required, and every
/// atom needs an `element` and a 3-number `location`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMolecule {
    pub atoms: Vec<RawAtom>,
    #[serde(default)]
    pub bonds: Vec<RawBond>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAtom {
    pub element: String,
    pub location: [f64; 3],
}

/// The two sibling bond encodings found in this format family.
///
/// The index-pair form is canonical on encode; both are accepted on decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawBond {
    Pair { atoms: [usize; 2], order: u8 },
    Endpoints { source: usize, target: usize, order: u8 },
}

impl From<RawMolecule> for Molecule {
    fn from(raw: RawMolecule) -> Self {
        let atoms = raw
            .atoms
            .into_iter()
            .map(|atom| Atom {
                element: atom.element,
                location: Point3::new(atom.location[0], atom.location[1], atom.location[2]),
            })
            .collect();
        let bonds = raw
            .bonds
            .into_iter()
            .map(|bond| match bond {
                RawBond::Pair { atoms, order } => Bond { atoms, order },
                RawBond::Endpoints {
                    source,
                    target,
                    order,
                } => Bond::new(source, target, order),
            })
            .collect();
        Molecule::from_parts(atoms, bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Molecule {
        let raw: RawMolecule = serde_json::from_str(text).unwrap();
        raw.into()
    }

    #[test]
    fn pair_and_endpoint_bond_encodings_decode_identically() {
        let pair = decode(
            r#"{"atoms": [{"element": "C", "location": [0, 0, 0]},
                          {"element": "O", "location": [1.2, 0, 0]}],
                "bonds": [{"atoms": [0, 1], "order": 2}]}"#,
        );
        let endpoints = decode(
            r#"{"atoms": [{"element": "C", "location": [0, 0, 0]},
                          {"element": "O", "location": [1.2, 0, 0]}],
                "bonds": [{"source": 0, "target": 1, "order": 2}]}"#,
        );
        assert_eq!(pair, endpoints);
        assert_eq!(pair.bonds[0], Bond::new(0, 1, 2));
    }

    #[test]
    fn bond_pair_order_is_preserved_verbatim() {
        let molecule = decode(
            r#"{"atoms": [{"element": "C", "location": [0, 0, 0]},
                          {"element": "O", "location": [1.2, 0, 0]}],
                "bonds": [{"atoms": [1, 0], "order": 1}]}"#,
        );
        assert_eq!(molecule.bonds[0].atoms, [1, 0]);
    }

    #[test]
    fn missing_bonds_key_means_no_bonds() {
        let molecule = decode(r#"{"atoms": [{"element": "He", "location": [0, 0, 0]}]}"#);
        assert!(molecule.bonds.is_empty());
    }

    #[test]
    fn missing_atoms_key_is_a_schema_violation() {
        let result = serde_json::from_str::<RawMolecule>(r#"{"bonds": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn atom_without_location_is_a_schema_violation() {
        let result = serde_json::from_str::<RawMolecule>(r#"{"atoms": [{"element": "C"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn two_component_location_is_a_schema_violation() {
        let result = serde_json::from_str::<RawMolecule>(
            r#"{"atoms": [{"element": "C", "location": [1.0, 2.0]}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bond_without_order_is_a_schema_violation() {
        let result = serde_json::from_str::<RawMolecule>(
            r#"{"atoms": [{"element": "C", "location": [0, 0, 0]}],
                "bonds": [{"atoms": [0, 0]}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_bond_indices_are_accepted_at_decode_time() {
        let molecule = decode(
            r#"{"atoms": [{"element": "C", "location": [0, 0, 0]}],
                "bonds": [{"atoms": [0, 99], "order": 1}]}"#,
        );
        assert_eq!(molecule.bonds[0].atoms, [0, 99]);
        assert!(molecule.bond_endpoints(&molecule.bonds[0]).is_err());
    }
}
