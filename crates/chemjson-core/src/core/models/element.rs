use super::error::ModelError;
use phf::phf_map;

/// The standard periodic-table vocabulary, ordered by atomic number.
///
/// The position of a symbol in this list determines its round-trip encoding
/// when interfacing with a chemistry engine's atomic-number representation:
/// `atomic number = index + 1`.
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

static STANDARD_ATOMIC_NUMBERS: phf::Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8,
    "F" => 9, "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15,
    "S" => 16, "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22,
    "V" => 23, "Cr" => 24, "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29,
    "Zn" => 30, "Ga" => 31, "Ge" => 32, "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
    "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42, "Tc" => 43,
    "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48, "In" => 49, "Sn" => 50,
    "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56, "La" => 57,
    "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64,
    "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71,
    "Hf" => 72, "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78,
    "Au" => 79, "Hg" => 80, "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85,
    "Rn" => 86, "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92,
    "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96, "Bk" => 97, "Cf" => 98, "Es" => 99,
    "Fm" => 100, "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104, "Db" => 105,
    "Sg" => 106, "Bh" => 107, "Hs" => 108, "Mt" => 109, "Ds" => 110, "Rg" => 111,
    "Cn" => 112, "Nh" => 113, "Fl" => 114, "Mc" => 115, "Lv" => 116, "Ts" => 117,
    "Og" => 118,
};

/// An immutable, ordered element vocabulary.
///
/// The table maps neutral-model element symbols to and from the atomic-number
/// representation used at the chemistry-engine boundary. It is an explicit
/// configuration value handed to the codec and the converter at construction
/// time; the process-wide lifetime is managed by whatever composes them.
///
/// [`ElementTable::standard`] covers the full periodic table; custom tables
/// can restrict or reorder the vocabulary for specialized data sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ElementTable {
    /// The built-in periodic table ([`ELEMENT_SYMBOLS`]).
    #[default]
    Standard,
    /// A caller-supplied ordered symbol list; `atomic number = index + 1`.
    Custom(Vec<String>),
}

impl ElementTable {
    /// Returns the built-in periodic-table vocabulary.
    pub fn standard() -> Self {
        ElementTable::Standard
    }

    /// Creates a vocabulary from an ordered list of symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ElementTable::Custom(symbols.into_iter().map(Into::into).collect())
    }

    /// Resolves an element symbol to its atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if the symbol is not part of
    /// the vocabulary. Unknown elements are a data error at this layer, never
    /// silently substituted.
    pub fn atomic_number(&self, symbol: &str) -> Result<u8, ModelError> {
        let number = match self {
            ElementTable::Standard => STANDARD_ATOMIC_NUMBERS.get(symbol).copied(),
            ElementTable::Custom(symbols) => symbols
                .iter()
                .position(|s| s == symbol)
                .map(|index| (index + 1) as u8),
        };
        number.ok_or_else(|| ModelError::UnknownElement {
            symbol: symbol.to_string(),
        })
    }

    /// Resolves an atomic number back to its element symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAtomicNumber`] if the number falls outside
    /// the vocabulary.
    pub fn symbol(&self, atomic_number: u8) -> Result<&str, ModelError> {
        let index = (atomic_number as usize).checked_sub(1);
        let symbol = match self {
            ElementTable::Standard => index.and_then(|i| ELEMENT_SYMBOLS.get(i).copied()),
            ElementTable::Custom(symbols) => index.and_then(|i| symbols.get(i).map(String::as_str)),
        };
        symbol.ok_or(ModelError::UnknownAtomicNumber {
            number: atomic_number,
        })
    }

    /// Reports whether a symbol is part of the vocabulary.
    pub fn contains(&self, symbol: &str) -> bool {
        match self {
            ElementTable::Standard => STANDARD_ATOMIC_NUMBERS.contains_key(symbol),
            ElementTable::Custom(symbols) => symbols.iter().any(|s| s == symbol),
        }
    }

    /// Returns the number of symbols in the vocabulary.
    pub fn len(&self) -> usize {
        match self {
            ElementTable::Standard => ELEMENT_SYMBOLS.len(),
            ElementTable::Custom(symbols) => symbols.len(),
        }
    }

    /// Reports whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
