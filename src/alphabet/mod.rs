//! Symbol sets used for password generation
use crate::error::PasswordError;

/// Symbols appended to letters and digits in the default alphabet
pub const DEFAULT_SPECIALS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~\\";

/// Ordered set of unique, printable ASCII symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols`, keeping the first occurrence of every
    /// character. Anything outside printable ASCII is refused.
    pub fn new(symbols: &str) -> Result<Self, PasswordError> {
        let mut unique: Vec<char> = Vec::with_capacity(symbols.len());

        for c in symbols.chars() {
            if !(c == ' ' || c.is_ascii_graphic()) {
                return Err(PasswordError::InvalidRequest(format!(
                    "Symbol {:?} is not printable ASCII",
                    c
                )));
            }

            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        Ok(Alphabet { symbols: unique })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

/// Upper and lower case letters, digits and [`DEFAULT_SPECIALS`]
impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain(DEFAULT_SPECIALS.chars())
            .collect();

        Alphabet { symbols }
    }
}
