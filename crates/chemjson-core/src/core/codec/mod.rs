//! Implements the neutral JSON codec.
//!
//! This module owns the bit-for-bit-reproducible translation between a
//! [`Molecule`] and the neutral JSON textual encoding, in both the compact
//! machine-to-machine layout and the indented human-readable layout with its
//! domain-specific compaction rules (one-line 3-vectors, one-line atom and
//! bond records, truncated float precision).

mod node;
mod printer;
mod schema;

use crate::core::models::element::ElementTable;
use crate::core::models::error::ModelError;
use crate::core::models::molecule::Molecule;
use node::Node;
use printer::JsonPrinter;
use schema::RawMolecule;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the neutral JSON codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input text is not well-formed JSON.
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input is well-formed JSON but does not describe a molecule:
    /// `atoms` is missing, or an atom lacks `element`/`location`, or a
    /// record has the wrong shape.
    #[error("Invalid molecule document: {0}")]
    Schema(String),

    /// A value with no JSON representation reached the encoder.
    #[error("Unencodable value: {0}")]
    Encode(String),

    /// The decoded data violates a structure-model invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// The number of decimal digits kept for floats on encode.
///
/// Both widths appear in this format family; the width is a codec
/// configuration choice, not a universal constant. Truncation is intentional
/// lossy rounding for readability — the neutral form is a diffable
/// interchange format, not a computation medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatPrecision {
    /// Three decimal digits.
    #[default]
    Three,
    /// Six decimal digits.
    Six,
}

impl FloatPrecision {
    /// Returns the decimal digit count.
    pub fn decimals(self) -> usize {
        match self {
            FloatPrecision::Three => 3,
            FloatPrecision::Six => 6,
        }
    }
}

#[derive(Debug, Error)]
#[error("Float precision must be '3' or '6'")]
pub struct ParseFloatPrecisionError;

impl FromStr for FloatPrecision {
    type Err = ParseFloatPrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3" => Ok(FloatPrecision::Three),
            "6" => Ok(FloatPrecision::Six),
            _ => Err(ParseFloatPrecisionError),
        }
    }
}

impl fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decimals())
    }
}

/// Selects between the two neutral text layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Indented, sorted-key, line-oriented layout for humans and diffs.
    #[default]
    Pretty,
    /// Whitespace-free sorted-key layout for machine interchange.
    Compact,
}

/// Encodes and decodes molecules to and from the neutral JSON form.
///
/// The codec is a stateless pure function of its configuration: the element
/// vocabulary used to validate decoded symbols and the float precision used
/// on encode. Concurrent use requires no locking.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    elements: Arc<ElementTable>,
    precision: FloatPrecision,
}

impl JsonCodec {
    /// Creates a codec over the given element vocabulary and float precision.
    pub fn new(elements: Arc<ElementTable>, precision: FloatPrecision) -> Self {
        Self {
            elements,
            precision,
        }
    }

    /// Creates a codec over the standard periodic table with the default
    /// precision.
    pub fn with_standard_elements() -> Self {
        Self::new(
            Arc::new(ElementTable::standard()),
            FloatPrecision::default(),
        )
    }

    /// Returns the element vocabulary the codec validates against.
    pub fn elements(&self) -> &Arc<ElementTable> {
        &self.elements
    }

    /// Returns the configured float precision.
    pub fn precision(&self) -> FloatPrecision {
        self.precision
    }

    /// Encodes a molecule as neutral JSON text in the requested layout.
    ///
    /// Object keys are always emitted sorted, and bonds always use the
    /// canonical index-pair encoding, so encoding the same molecule twice
    /// produces byte-identical text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if the molecule contains a value with
    /// no JSON representation (e.g., a non-finite coordinate).
    pub fn encode(&self, molecule: &Molecule, layout: OutputLayout) -> Result<String, CodecError> {
        let node = Node::from_molecule(molecule);
        let printer = JsonPrinter::new(self.precision.decimals());
        match layout {
            OutputLayout::Pretty => printer.pretty(&node),
            OutputLayout::Compact => printer.compact(&node),
        }
    }

    /// Decodes neutral JSON text into a molecule.
    ///
    /// Both bond encodings (`atoms` pair and `source`/`target`) are accepted;
    /// top-level key order is insignificant. Out-of-range bond indices and
    /// orders are accepted here — index problems surface on resolution, and
    /// order problems are clamped by the conversion workflow.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] for malformed JSON,
    /// [`CodecError::Schema`] for a well-formed document that is not a
    /// molecule, and [`CodecError::Model`] when an element symbol is not in
    /// the codec's vocabulary.
    pub fn decode(&self, text: &str) -> Result<Molecule, CodecError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let raw: RawMolecule =
            serde_json::from_value(value).map_err(|e| CodecError::Schema(e.to_string()))?;
        let molecule: Molecule = raw.into();
        for atom in &molecule.atoms {
            if !self.elements.contains(&atom.element) {
                return Err(ModelError::UnknownElement {
                    symbol: atom.element.clone(),
                }
                .into());
            }
        }
        Ok(molecule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use nalgebra::Point3;

    fn carbon_monoxide() -> Molecule {
        Molecule::from_parts(
            vec![
                Atom::new("C", Point3::new(0.0, 0.0, 0.0)),
                Atom::new("O", Point3::new(1.2, 0.0, 0.0)),
            ],
            vec![Bond::new(0, 1, 2)],
        )
    }

    mod round_trip {
        use super::*;

        #[test]
        fn compact_round_trip_is_exact_for_truncation_stable_values() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = carbon_monoxide();
            let text = codec.encode(&molecule, OutputLayout::Compact).unwrap();
            assert_eq!(codec.decode(&text).unwrap(), molecule);
        }

        #[test]
        fn pretty_round_trip_is_exact_for_truncation_stable_values() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = carbon_monoxide();
            let text = codec.encode(&molecule, OutputLayout::Pretty).unwrap();
            assert_eq!(codec.decode(&text).unwrap(), molecule);
        }

        #[test]
        fn round_trip_loses_precision_beyond_the_configured_width() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = Molecule::from_parts(
                vec![Atom::new("C", Point3::new(0.123456789, 0.0, 0.0))],
                Vec::new(),
            );
            let text = codec.encode(&molecule, OutputLayout::Compact).unwrap();
            let decoded = codec.decode(&text).unwrap();
            assert_eq!(decoded.atoms[0].location.x, 0.123);
        }

        #[test]
        fn six_digit_precision_keeps_more_of_the_coordinate() {
            let codec = JsonCodec::new(
                Arc::new(ElementTable::standard()),
                FloatPrecision::Six,
            );
            let molecule = Molecule::from_parts(
                vec![Atom::new("C", Point3::new(0.123456789, 0.0, 0.0))],
                Vec::new(),
            );
            let text = codec.encode(&molecule, OutputLayout::Compact).unwrap();
            let decoded = codec.decode(&text).unwrap();
            assert_eq!(decoded.atoms[0].location.x, 0.123457);
        }

        #[test]
        fn re_encoding_a_decoded_molecule_is_byte_identical() {
            let codec = JsonCodec::with_standard_elements();
            for layout in [OutputLayout::Pretty, OutputLayout::Compact] {
                let first = codec.encode(&carbon_monoxide(), layout).unwrap();
                let second = codec.encode(&codec.decode(&first).unwrap(), layout).unwrap();
                assert_eq!(first, second);
            }
        }

        #[test]
        fn bond_pair_order_survives_the_round_trip() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = Molecule::from_parts(
                vec![Atom::unplaced("C"), Atom::unplaced("O")],
                vec![Bond::new(1, 0, 1)],
            );
            let text = codec.encode(&molecule, OutputLayout::Compact).unwrap();
            assert_eq!(codec.decode(&text).unwrap().bonds[0].atoms, [1, 0]);
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn pretty_output_keeps_every_atom_bond_and_vector_on_one_line() {
            let codec = JsonCodec::with_standard_elements();
            let text = codec
                .encode(&carbon_monoxide(), OutputLayout::Pretty)
                .unwrap();
            let atom_lines: Vec<&str> = text
                .lines()
                .filter(|l| l.contains("\"element\""))
                .collect();
            assert_eq!(atom_lines.len(), 2);
            for line in &atom_lines {
                assert!(line.contains("\"location\": ["));
                assert!(line.trim_end().ends_with('}') || line.trim_end().ends_with("},"));
            }
            let bond_lines: Vec<&str> =
                text.lines().filter(|l| l.contains("\"order\"")).collect();
            assert_eq!(bond_lines.len(), 1);
            assert!(bond_lines[0].contains("\"atoms\": [0, 1]"));
        }

        #[test]
        fn empty_bond_list_is_the_literal_empty_array() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = Molecule::from_parts(vec![Atom::unplaced("He")], Vec::new());
            let text = codec.encode(&molecule, OutputLayout::Pretty).unwrap();
            assert!(text.contains("\"bonds\": []"));
        }

        #[test]
        fn compact_output_is_a_single_line() {
            let codec = JsonCodec::with_standard_elements();
            let text = codec
                .encode(&carbon_monoxide(), OutputLayout::Compact)
                .unwrap();
            assert_eq!(text.lines().count(), 1);
            assert!(!text.contains(' '));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn malformed_json_is_a_parse_error() {
            let codec = JsonCodec::with_standard_elements();
            assert!(matches!(
                codec.decode("{\"atoms\": ["),
                Err(CodecError::Parse(_))
            ));
        }

        #[test]
        fn missing_atoms_is_a_schema_error() {
            let codec = JsonCodec::with_standard_elements();
            assert!(matches!(
                codec.decode("{\"bonds\": []}"),
                Err(CodecError::Schema(_))
            ));
        }

        #[test]
        fn atom_missing_element_is_a_schema_error() {
            let codec = JsonCodec::with_standard_elements();
            assert!(matches!(
                codec.decode("{\"atoms\": [{\"location\": [0, 0, 0]}]}"),
                Err(CodecError::Schema(_))
            ));
        }

        #[test]
        fn unknown_element_is_a_model_error() {
            let codec = JsonCodec::with_standard_elements();
            let result = codec.decode("{\"atoms\": [{\"element\": \"Zz\", \"location\": [0, 0, 0]}]}");
            assert!(matches!(
                result,
                Err(CodecError::Model(ModelError::UnknownElement { .. }))
            ));
        }

        #[test]
        fn non_finite_coordinates_fail_to_encode() {
            let codec = JsonCodec::with_standard_elements();
            let molecule = Molecule::from_parts(
                vec![Atom::new("C", Point3::new(f64::NAN, 0.0, 0.0))],
                Vec::new(),
            );
            assert!(matches!(
                codec.encode(&molecule, OutputLayout::Compact),
                Err(CodecError::Encode(_))
            ));
        }

        #[test]
        fn restricted_vocabulary_rejects_elements_outside_it() {
            let codec = JsonCodec::new(
                Arc::new(ElementTable::from_symbols(["C", "H"])),
                FloatPrecision::default(),
            );
            let result = codec.decode("{\"atoms\": [{\"element\": \"O\", \"location\": [0, 0, 0]}]}");
            assert!(matches!(result, Err(CodecError::Model(_))));
        }
    }
}
