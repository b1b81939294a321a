#![forbid(unsafe_code)]

//! Two-letter mnemonic codes.
//!
//! A [`Code`] is one first letter from [`FIRST_LETTERS`] followed by one
//! lowercase ASCII letter. Codes are ordered first-letter-major: all 26 codes
//! starting with `l` come before any code starting with `p`, and so on. The
//! order is a pure function of the index, so [`Code::at`] and [`codes`]
//! always agree and every call to [`codes`] starts over from `la`.
//!
//! ```
//! use dragonwords_core::{Code, codes, CODE_SPACE};
//!
//! let first: Vec<String> = codes().take(3).map(|c| c.to_string()).collect();
//! assert_eq!(first, ["la", "lb", "lc"]);
//! assert_eq!(codes().count(), CODE_SPACE);
//! assert_eq!(Code::at(26).map(|c| c.to_string()).as_deref(), Some("pa"));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// First letters, in generation order.
pub const FIRST_LETTERS: [u8; 9] = *b"lpmrtsgyf";

/// Second letters, in generation order.
pub const SECOND_LETTERS: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Length of every code in characters.
pub const CODE_LEN: usize = 2;

/// Number of distinct codes.
pub const CODE_SPACE: usize = FIRST_LETTERS.len() * SECOND_LETTERS.len();

/// A two-letter mnemonic code such as `la` or `fz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LEN]);

impl Code {
    /// The first code in generation order (`la`).
    pub const FIRST: Self = Self([FIRST_LETTERS[0], SECOND_LETTERS[0]]);

    /// Code at position `index` of the generation order.
    ///
    /// Returns `None` once the code space is exhausted.
    #[must_use]
    pub const fn at(index: usize) -> Option<Self> {
        if index >= CODE_SPACE {
            return None;
        }
        let first = FIRST_LETTERS[index / SECOND_LETTERS.len()];
        let second = SECOND_LETTERS[index % SECOND_LETTERS.len()];
        Some(Self([first, second]))
    }

    /// Position of this code in the generation order (inverse of [`Code::at`]).
    #[must_use]
    pub fn index(self) -> usize {
        let major = FIRST_LETTERS
            .iter()
            .position(|&letter| letter == self.0[0])
            .unwrap_or_default();
        let minor = usize::from(self.0[1] - b'a');
        major * SECOND_LETTERS.len() + minor
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Why typed text is not a valid [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeParseError {
    /// Input did not contain exactly [`CODE_LEN`] characters.
    Length { found: usize },
    /// First character is not one of [`FIRST_LETTERS`].
    FirstLetter(char),
    /// Second character is not a lowercase ASCII letter.
    SecondLetter(char),
}

impl fmt::Display for CodeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { found } => {
                write!(f, "code must be {CODE_LEN} characters, got {found}")
            }
            Self::FirstLetter(c) => write!(f, "{c:?} is not a valid first letter"),
            Self::SecondLetter(c) => write!(f, "{c:?} is not a valid second letter"),
        }
    }
}

impl std::error::Error for CodeParseError {}

impl FromStr for Code {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CodeParseError::Length {
                found: s.chars().count(),
            });
        };

        let first_byte = u8::try_from(first)
            .ok()
            .filter(|b| FIRST_LETTERS.contains(b))
            .ok_or(CodeParseError::FirstLetter(first))?;
        let second_byte = u8::try_from(second)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .ok_or(CodeParseError::SecondLetter(second))?;

        Ok(Self([first_byte, second_byte]))
    }
}

/// Iterator over the code space in generation order.
///
/// Created by [`codes`]. Finite ([`CODE_SPACE`] items) and fused.
#[derive(Debug, Clone)]
pub struct Codes {
    next: usize,
}

impl Iterator for Codes {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        let code = Code::at(self.next)?;
        self.next += 1;
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CODE_SPACE.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Codes {}

impl FusedIterator for Codes {}

/// A fresh sequence of every code, starting from `la`.
#[must_use]
pub fn codes() -> Codes {
    Codes { next: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_space_is_234() {
        assert_eq!(CODE_SPACE, 234);
        assert_eq!(codes().len(), 234);
        assert_eq!(codes().count(), 234);
    }

    #[test]
    fn first_letter_major_order() {
        let all: Vec<String> = codes().map(|c| c.to_string()).collect();
        assert_eq!(all[0], "la");
        assert_eq!(all[25], "lz");
        assert_eq!(all[26], "pa");
        assert_eq!(all[52], "ma");
        assert_eq!(all[233], "fz");
    }

    #[test]
    fn at_out_of_range_is_none() {
        assert!(Code::at(CODE_SPACE - 1).is_some());
        assert!(Code::at(CODE_SPACE).is_none());
        assert!(Code::at(usize::MAX).is_none());
    }

    #[test]
    fn index_inverts_at() {
        for (i, code) in codes().enumerate() {
            assert_eq!(code.index(), i, "code {code}");
            assert_eq!(Code::at(i), Some(code));
        }
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = codes();
        for _ in 0..CODE_SPACE {
            assert!(it.next().is_some());
        }
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn first_constant_matches_generation() {
        assert_eq!(Code::FIRST, Code::at(0).unwrap());
        assert_eq!(Code::FIRST.as_str(), "la");
    }

    #[test]
    fn parse_accepts_every_generated_code() {
        for code in codes() {
            assert_eq!(code.as_str().parse::<Code>(), Ok(code));
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "".parse::<Code>(),
            Err(CodeParseError::Length { found: 0 })
        );
        assert_eq!(
            "l".parse::<Code>(),
            Err(CodeParseError::Length { found: 1 })
        );
        assert_eq!(
            "lab".parse::<Code>(),
            Err(CodeParseError::Length { found: 3 })
        );
    }

    #[test]
    fn parse_rejects_bad_letters() {
        assert_eq!("aa".parse::<Code>(), Err(CodeParseError::FirstLetter('a')));
        assert_eq!("La".parse::<Code>(), Err(CodeParseError::FirstLetter('L')));
        assert_eq!("lA".parse::<Code>(), Err(CodeParseError::SecondLetter('A')));
        assert_eq!("l1".parse::<Code>(), Err(CodeParseError::SecondLetter('1')));
        assert_eq!("lé".parse::<Code>(), Err(CodeParseError::SecondLetter('é')));
    }

    #[test]
    fn parse_error_messages() {
        let err = "xyz".parse::<Code>().unwrap_err();
        assert_eq!(err.to_string(), "code must be 2 characters, got 3");
        let err = "qa".parse::<Code>().unwrap_err();
        assert_eq!(err.to_string(), "'q' is not a valid first letter");
    }
}
