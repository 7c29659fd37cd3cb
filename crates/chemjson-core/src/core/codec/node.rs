use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::collections::BTreeMap;

/// The closed set of values the neutral JSON encoding can represent.
///
/// The encoder lowers the structure model into this tagged union before
/// printing; anything that cannot be expressed through these variants is a
/// hard encode error at the point of lowering, never a silent substitution.
/// Keys live in a `BTreeMap` so that object keys are always emitted sorted,
/// which keeps the output deterministic.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Node>),
    Object(BTreeMap<String, Node>),
}

impl Node {
    /// Reports whether the node is a bare number.
    ///
    /// Arrays whose elements all satisfy this predicate are printed on a
    /// single line by the pretty layout (the 3-vector rule).
    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Node::Int(_) | Node::Float(_))
    }

    /// Lowers a 3D point into a numeric array node.
    pub(crate) fn from_point(point: &Point3<f64>) -> Node {
        Node::Array(point.coords.iter().map(|&c| Node::Float(c)).collect())
    }

    /// Lowers a molecule into its neutral JSON object form.
    ///
    /// The canonical bond encoding is the index-pair form
    /// (`{"atoms": [i, j], "order": n}`); the sibling `source`/`target`
    /// encoding is accepted on decode only.
    pub(crate) fn from_molecule(molecule: &Molecule) -> Node {
        let atoms = molecule
            .atoms
            .iter()
            .map(|atom| {
                let mut fields = BTreeMap::new();
                fields.insert("element".to_string(), Node::Str(atom.element.clone()));
                fields.insert("location".to_string(), Node::from_point(&atom.location));
                Node::Object(fields)
            })
            .collect();

        let bonds = molecule
            .bonds
            .iter()
            .map(|bond| {
                let mut fields = BTreeMap::new();
                fields.insert(
                    "atoms".to_string(),
                    Node::Array(vec![
                        Node::Int(bond.atoms[0] as i64),
                        Node::Int(bond.atoms[1] as i64),
                    ]),
                );
                fields.insert("order".to_string(), Node::Int(bond.order as i64));
                Node::Object(fields)
            })
            .collect();

        let mut root = BTreeMap::new();
        root.insert("atoms".to_string(), Node::Array(atoms));
        root.insert("bonds".to_string(), Node::Array(bonds));
        Node::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;

    #[test]
    fn points_lower_to_numeric_arrays() {
        let node = Node::from_point(&Point3::new(1.5, 0.0, -2.25));
        let Node::Array(items) = &node else {
            panic!("expected array node");
        };
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(Node::is_numeric));
        assert_eq!(items[2], Node::Float(-2.25));
    }

    #[test]
    fn numeric_detection_rejects_containers_and_strings() {
        assert!(Node::Int(3).is_numeric());
        assert!(Node::Float(0.5).is_numeric());
        assert!(!Node::Str("3".to_string()).is_numeric());
        assert!(!Node::Array(vec![Node::Int(1)]).is_numeric());
    }

    #[test]
    fn molecule_lowers_to_sorted_atoms_and_bonds_objects() {
        let molecule = Molecule::from_parts(
            vec![Atom::new("C", Point3::origin())],
            vec![Bond::new(0, 0, 1)],
        );
        let Node::Object(root) = Node::from_molecule(&molecule) else {
            panic!("expected object root");
        };
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, ["atoms", "bonds"]);

        let Some(Node::Array(atoms)) = root.get("atoms") else {
            panic!("expected atoms array");
        };
        let Node::Object(atom) = &atoms[0] else {
            panic!("expected atom object");
        };
        assert_eq!(atom.get("element"), Some(&Node::Str("C".to_string())));
    }

    #[test]
    fn empty_molecule_lowers_to_empty_arrays() {
        let Node::Object(root) = Node::from_molecule(&Molecule::new()) else {
            panic!("expected object root");
        };
        assert_eq!(root.get("atoms"), Some(&Node::Array(Vec::new())));
        assert_eq!(root.get("bonds"), Some(&Node::Array(Vec::new())));
    }
}
