// mailgen/src/password.rs
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseClassesError;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character-class selection for password generation.
///
/// The default selection matches the generator form defaults: upper and
/// lower case letters plus digits, symbols off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn all() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            upper: false,
            lower: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.symbols)
    }

    /// Candidate alphabet, concatenated in the fixed order
    /// upper, lower, digits, symbols.
    ///
    /// An empty selection falls back to lower case letters plus digits
    /// rather than producing an empty alphabet.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.upper {
            alphabet.push_str(UPPERCASE_CHARS);
        }
        if self.lower {
            alphabet.push_str(LOWERCASE_CHARS);
        }
        if self.digits {
            alphabet.push_str(DIGIT_CHARS);
        }
        if self.symbols {
            alphabet.push_str(SYMBOL_CHARS);
        }

        if alphabet.is_empty() {
            alphabet.push_str(LOWERCASE_CHARS);
            alphabet.push_str(DIGIT_CHARS);
        }

        alphabet
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
        }
    }
}

impl fmt::Display for CharacterClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.upper {
            names.push("upper");
        }
        if self.lower {
            names.push("lower");
        }
        if self.digits {
            names.push("digits");
        }
        if self.symbols {
            names.push("symbols");
        }
        write!(f, "{}", names.join(","))
    }
}

impl FromStr for CharacterClasses {
    type Err = ParseClassesError;

    /// Parses a comma-separated selection such as `"upper,lower,digits"`.
    /// An empty string parses to the empty selection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut classes = Self::empty();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "upper" => classes.upper = true,
                "lower" => classes.lower = true,
                "digits" => classes.digits = true,
                "symbols" => classes.symbols = true,
                other => return Err(ParseClassesError::UnknownClass(other.to_string())),
            }
        }
        Ok(classes)
    }
}

/// Generate a password of exactly `length` characters, each drawn
/// independently and uniformly (with replacement) from the selected
/// classes. A `length` of zero yields the empty string.
///
/// There is no guarantee that every selected class appears in the output;
/// a short password may well miss a class entirely.
pub fn generate_password(length: usize, classes: CharacterClasses) -> String {
    generate_password_with_rng(&mut rand::thread_rng(), length, classes)
}

/// Like [`generate_password`], drawing from the supplied random source.
pub fn generate_password_with_rng<R: Rng>(
    rng: &mut R,
    length: usize,
    classes: CharacterClasses,
) -> String {
    let alphabet: Vec<char> = classes.alphabet().chars().collect();
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_is_respected() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [0, 1, 6, 12, 32, 100] {
            let password =
                generate_password_with_rng(&mut rng, length, CharacterClasses::default());
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_empty_selection_falls_back_to_lower_and_digits() {
        let mut rng = StdRng::seed_from_u64(2);
        let password = generate_password_with_rng(&mut rng, 200, CharacterClasses::empty());
        assert!(password
            .chars()
            .all(|c| LOWERCASE_CHARS.contains(c) || DIGIT_CHARS.contains(c)));
    }

    #[test]
    fn test_single_class_is_exclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let classes = CharacterClasses {
            upper: true,
            ..CharacterClasses::empty()
        };
        let password = generate_password_with_rng(&mut rng, 200, classes);
        assert!(password.chars().all(|c| UPPERCASE_CHARS.contains(c)));
    }

    #[test]
    fn test_unselected_symbols_never_appear() {
        let mut rng = StdRng::seed_from_u64(4);
        let classes = CharacterClasses {
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
        };
        for _ in 0..1000 {
            let password = generate_password_with_rng(&mut rng, 8, classes);
            assert!(!password.chars().any(|c| SYMBOL_CHARS.contains(c)));
        }
    }

    #[test]
    fn test_classes_parse_round_trip() {
        let classes: CharacterClasses = "upper,digits".parse().unwrap();
        assert!(classes.upper && classes.digits);
        assert!(!classes.lower && !classes.symbols);
        assert_eq!(classes.to_string(), "upper,digits");

        let all: CharacterClasses = "upper, lower, digits, symbols".parse().unwrap();
        assert_eq!(all, CharacterClasses::all());
    }

    #[test]
    fn test_classes_parse_empty_string() {
        let classes: CharacterClasses = "".parse().unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn test_classes_parse_rejects_unknown_name() {
        let err = "upper,emoji".parse::<CharacterClasses>().unwrap_err();
        assert_eq!(err, ParseClassesError::UnknownClass("emoji".to_string()));
    }

    #[test]
    fn test_alphabet_preserves_class_order() {
        let alphabet = CharacterClasses::all().alphabet();
        let expected = format!(
            "{}{}{}{}",
            UPPERCASE_CHARS, LOWERCASE_CHARS, DIGIT_CHARS, SYMBOL_CHARS
        );
        assert_eq!(alphabet, expected);
    }
}
