//! The Elbonian symbol table
//!
//! Ten one-character symbols, each bound to a fixed magnitude. The table is a
//! closed enum, so lookups are plain `match` expressions with no global state.

use std::fmt;

/// One of the ten Elbonian symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// 1
    I,
    /// 3
    J,
    /// 5
    K,
    /// 10
    X,
    /// 30
    Y,
    /// 50
    Z,
    /// 100
    C,
    /// 300
    D,
    /// 500
    E,
    /// 1000
    M,
}

/// Every symbol, largest magnitude first
pub const DESCENDING: [Symbol; 10] = [
    Symbol::M,
    Symbol::E,
    Symbol::D,
    Symbol::C,
    Symbol::Z,
    Symbol::Y,
    Symbol::X,
    Symbol::K,
    Symbol::J,
    Symbol::I,
];

impl Symbol {
    /// Magnitude of the symbol
    pub const fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::J => 3,
            Symbol::K => 5,
            Symbol::X => 10,
            Symbol::Y => 30,
            Symbol::Z => 50,
            Symbol::C => 100,
            Symbol::D => 300,
            Symbol::E => 500,
            Symbol::M => 1000,
        }
    }

    /// The character this symbol is written as
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::J => 'J',
            Symbol::K => 'K',
            Symbol::X => 'X',
            Symbol::Y => 'Y',
            Symbol::Z => 'Z',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::E => 'E',
            Symbol::M => 'M',
        }
    }

    /// Look up a symbol by its character. Lowercase is not accepted.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'I' => Some(Symbol::I),
            'J' => Some(Symbol::J),
            'K' => Some(Symbol::K),
            'X' => Some(Symbol::X),
            'Y' => Some(Symbol::Y),
            'Z' => Some(Symbol::Z),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'E' => Some(Symbol::E),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Maximum number of times the symbol may appear in one numeral
    pub const fn cap(self) -> usize {
        match self {
            Symbol::I | Symbol::X | Symbol::C | Symbol::M => 2,
            Symbol::J | Symbol::K | Symbol::Y | Symbol::Z | Symbol::D | Symbol::E => 1,
        }
    }

    /// For D, Y and J: the symbol whose cap drops to 1 once this one is present
    pub const fn coupled_minor(self) -> Option<Symbol> {
        match self {
            Symbol::D => Some(Symbol::C),
            Symbol::Y => Some(Symbol::X),
            Symbol::J => Some(Symbol::I),
            _ => None,
        }
    }

    /// Position in [`DESCENDING`], used for per-symbol counters
    pub(crate) const fn index(self) -> usize {
        match self {
            Symbol::M => 0,
            Symbol::E => 1,
            Symbol::D => 2,
            Symbol::C => 3,
            Symbol::Z => 4,
            Symbol::Y => 5,
            Symbol::X => 6,
            Symbol::K => 7,
            Symbol::J => 8,
            Symbol::I => 9,
        }
    }
}

/// Symbols ordered from the largest magnitude to the smallest
pub fn symbols_by_descending_magnitude() -> &'static [Symbol; 10] {
    &DESCENDING
}

/// Magnitude of a symbol
pub fn value_of(symbol: Symbol) -> u32 {
    symbol.value()
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
