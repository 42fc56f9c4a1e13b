pub mod circuits;
pub mod disjoint_set;
pub mod manifold;
mod solutions;

use std::fmt;

use anyhow::{Context, Result};

pub use solutions::*;

pub type Solution = fn(&str) -> Result<(Answer, Answer)>;

/// The answer to one part of a day. Wide enough for any product of two `i64` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Number(i128),
    /// The input has no answer for this part, e.g. nothing to connect.
    Missing,
}

impl From<u64> for Answer {
    fn from(n: u64) -> Self {
        Answer::Number(n.into())
    }
}

impl From<i128> for Answer {
    fn from(n: i128) -> Self {
        Answer::Number(n)
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(answer: Option<T>) -> Self {
        answer.map_or(Answer::Missing, Into::into)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Missing => write!(f, "none"),
        }
    }
}

/// Every implemented day, in the order the runner executes them.
pub const ALL_SOLUTIONS: [(usize, Solution); 2] = [(7, day7), (8, day8)];

/// Which input file a run reads for each day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Real,
    Example,
}

impl InputKind {
    pub fn file_name(self, day: usize) -> String {
        match self {
            InputKind::Real => format!("{}.txt", day),
            InputKind::Example => format!("{}_example.txt", day),
        }
    }

    pub fn load(self, day: usize) -> Result<String> {
        let path = format!("inputs/{}", self.file_name(day));
        std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))
    }
}

/// Parses an optionally negative decimal number. Returns `None` on an empty slice or any
/// character that isn't a digit (after the sign).
pub fn parse_i64_from_bytes(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }
    let mut ret: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        ret = ret.checked_mul(10)?.checked_add((b - b'0') as i64)?;
    }
    Some(if negative { -ret } else { ret })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_i64_from_bytes(b"162"), Some(162));
        assert_eq!(parse_i64_from_bytes(b"-7"), Some(-7));
        assert_eq!(parse_i64_from_bytes(b"0"), Some(0));
        assert_eq!(parse_i64_from_bytes(b""), None);
        assert_eq!(parse_i64_from_bytes(b"-"), None);
        assert_eq!(parse_i64_from_bytes(b"12a"), None);
        assert_eq!(parse_i64_from_bytes(b" 1"), None);
        assert_eq!(parse_i64_from_bytes(b"99999999999999999999"), None);
    }

    #[test]
    fn input_file_names() {
        assert_eq!(InputKind::Real.file_name(8), "8.txt");
        assert_eq!(InputKind::Example.file_name(7), "7_example.txt");
        assert_eq!(InputKind::default(), InputKind::Real);
    }

    #[test]
    fn answers() {
        assert_eq!(Answer::from(40u64), Answer::Number(40));
        assert_eq!(Answer::from(Some(-3i128)), Answer::Number(-3));
        assert_eq!(Answer::from(None::<u64>), Answer::Missing);
        assert_eq!(Answer::Number(25272).to_string(), "25272");
        assert_eq!(Answer::Missing.to_string(), "none");
    }
}
