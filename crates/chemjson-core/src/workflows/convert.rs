use crate::core::codec::{CodecError, JsonCodec, OutputLayout};
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::error::ModelError;
use crate::core::models::molecule::Molecule;
use crate::engine::error::EngineError;
use crate::engine::traits::ChemistryEngine;
use std::borrow::Cow;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// The name of the neutral JSON form in format arguments.
pub const NEUTRAL_FORMAT: &str = "json";

/// Structures below this atom count are re-embedded even when they carry
/// coordinates. Small structures parsed from connectivity-only formats
/// (line notations such as SMILES) typically lack reliable 3D geometry,
/// while large crystallographic or protein structures already carry
/// trustworthy coordinates that must not be overwritten.
pub const SMALL_MOLECULE_THRESHOLD: usize = 50;

/// Default refinement-iteration budget handed to the engine's 3D embedding.
pub const DEFAULT_EMBED_STEPS: usize = 500;

/// The requested hydrogen handling for a conversion.
///
/// Addition and removal are mutually exclusive per invocation; the enum
/// makes a request for both unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrogenMode {
    /// Leave explicit hydrogens as the source provides them.
    #[default]
    Keep,
    /// Saturate open valences with explicit hydrogens.
    Add,
    /// Strip explicit hydrogens.
    Remove,
}

/// Per-conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub hydrogens: HydrogenMode,
    /// Layout used when the output format is the neutral JSON form.
    pub layout: OutputLayout,
}

/// Errors raised by the conversion workflow.
///
/// Codec and engine errors propagate unchanged; there is no silent partial
/// output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Non-ASCII text reached a boundary that cannot tolerate it.
    #[error("Non-ASCII text cannot cross the chemistry-engine boundary: {what}")]
    Encoding { what: String },
}

/// Orchestrates end-to-end conversions between the neutral JSON form and
/// native chemical formats.
///
/// The converter is stateless across invocations: each call constructs its
/// own engine-native structure, applies the normalization policy, and
/// produces the output text. There is no caching and no shared mutable
/// state, so concurrent calls are independent.
pub struct Converter<E: ChemistryEngine> {
    engine: E,
    codec: JsonCodec,
}

impl<E: ChemistryEngine> Converter<E> {
    /// Creates a converter over the given engine backend and codec.
    pub fn new(engine: E, codec: JsonCodec) -> Self {
        Self { engine, codec }
    }

    /// Converts chemical data between two formats.
    ///
    /// `in_format` and `out_format` are either [`NEUTRAL_FORMAT`] or a
    /// native format name understood by the engine backend (e.g. "smi",
    /// "mol", "cif").
    ///
    /// The loaded structure is normalized before output: 3D coordinates are
    /// inferred when the source carries none (or the structure is small
    /// enough that its geometry is untrustworthy), the structure is always
    /// re-centered at the origin, and the requested hydrogen policy is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Encoding`] for non-ASCII format names,
    /// [`ConvertError::Codec`] for malformed or non-conforming neutral JSON,
    /// and [`ConvertError::Engine`] when the backend rejects a format or
    /// operation. Engine failures are never masked.
    #[instrument(
        skip_all,
        name = "convert_workflow",
        fields(in_format = %in_format, out_format = %out_format)
    )]
    pub fn convert(
        &self,
        data: &str,
        in_format: &str,
        out_format: &str,
        options: &ConvertOptions,
    ) -> Result<String, ConvertError> {
        ensure_ascii(in_format, "input format name")?;
        ensure_ascii(out_format, "output format name")?;
        let data = to_ascii_lossy(data);

        let mut structure = if in_format == NEUTRAL_FORMAT {
            let molecule = self.codec.decode(&data)?;
            self.load_molecule(&molecule)?
        } else {
            self.engine.parse(&data, in_format)?
        };

        let atom_count = self.engine.atoms(&structure).len();
        if needs_embedding(atom_count, self.engine.has_nonzero_coords(&structure)) {
            info!(atom_count, "inferring 3D coordinates");
            self.engine.embed_3d(&mut structure, DEFAULT_EMBED_STEPS)?;
        }
        self.engine.center(&mut structure);

        match options.hydrogens {
            HydrogenMode::Add => self.engine.add_hydrogens(&mut structure)?,
            HydrogenMode::Remove => self.engine.remove_hydrogens(&mut structure)?,
            HydrogenMode::Keep => {}
        }

        if out_format == NEUTRAL_FORMAT {
            let molecule = self.extract_molecule(&structure)?;
            Ok(self.codec.encode(&molecule, options.layout)?)
        } else {
            Ok(self.engine.write(&structure, out_format)?)
        }
    }

    /// Replays a neutral molecule into a fresh engine-native structure.
    ///
    /// When the source supplies no bond list, connectivity is delegated to
    /// the engine's perception; otherwise the explicit bonds are replayed
    /// with their orders clamped to the conventional range.
    fn load_molecule(&self, molecule: &Molecule) -> Result<E::Structure, ConvertError> {
        let mut structure = self.engine.new_structure();
        for atom in &molecule.atoms {
            let atomic_number = self.codec.elements().atomic_number(&atom.element)?;
            self.engine
                .add_atom(&mut structure, atomic_number, atom.location);
        }
        if molecule.bonds.is_empty() {
            debug!("source carries no bond list; delegating to bond perception");
            self.engine.perceive_bonds(&mut structure)?;
        } else {
            for bond in &molecule.bonds {
                self.engine.add_bond(
                    &mut structure,
                    bond.atoms[0],
                    bond.atoms[1],
                    clamp_order(bond),
                )?;
            }
        }
        Ok(structure)
    }

    /// Maps an engine-native structure back into a neutral molecule.
    fn extract_molecule(&self, structure: &E::Structure) -> Result<Molecule, ConvertError> {
        let atoms = self
            .engine
            .atoms(structure)
            .into_iter()
            .map(|(atomic_number, position)| {
                let symbol = self.codec.elements().symbol(atomic_number)?;
                Ok(Atom::new(symbol, position))
            })
            .collect::<Result<Vec<_>, ModelError>>()?;
        let bonds = self
            .engine
            .bonds(structure)
            .into_iter()
            .map(|(begin, end, order)| {
                let bond = Bond::new(begin, end, order);
                Bond::new(begin, end, clamp_order(&bond))
            })
            .collect();
        Ok(Molecule::from_parts(atoms, bonds))
    }
}

/// Decides whether a loaded structure needs 3D coordinate inference.
///
/// Triggered when the structure carries no geometry at all, or when it is
/// below the small-molecule threshold — size alone never suppresses
/// inference when coordinates are entirely absent.
pub(crate) fn needs_embedding(atom_count: usize, has_geometry: bool) -> bool {
    !has_geometry || atom_count < SMALL_MOLECULE_THRESHOLD
}

fn clamp_order(bond: &Bond) -> u8 {
    let clamped = bond.clamped_order();
    if clamped != bond.order {
        warn!(
            order = bond.order,
            "bond order outside 1..=3; clamping to single"
        );
    }
    clamped
}

fn ensure_ascii(text: &str, what: &str) -> Result<(), ConvertError> {
    if text.is_ascii() {
        Ok(())
    } else {
        Err(ConvertError::Encoding {
            what: format!("{what} '{text}'"),
        })
    }
}

/// Reduces input data to ASCII before it crosses the engine boundary,
/// replacing anything else. Legacy toolkit bindings in this domain are known
/// to fail on non-ASCII input rather than reject it cleanly.
fn to_ascii_lossy(data: &str) -> Cow<'_, str> {
    if data.is_ascii() {
        Cow::Borrowed(data)
    } else {
        Cow::Owned(
            data.chars()
                .map(|c| if c.is_ascii() { c } else { '?' })
                .collect(),
        )
    }
}
