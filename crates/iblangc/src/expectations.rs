//! Expected output written into a source file.
//!
//! Every line of a source file that starts with `//` is one line of the output the compiler is
//! expected to report for that file:
//!
//! ```text
//! // FunctionDecl main
//! //   Block
//! //     Return
//! //       Literal Int 1
//! func main() { return 1 }
//! ```

use std::fmt::{Display, Formatter};

/// Marks a line of expected output
pub const COMMENT_MARKER: &str = "//";

/// The expected output lines of a source file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expectations {
    lines: Vec<String>,
}

impl Expectations {
    /// Collects the expected output from a source file.
    ///
    /// The marker and a single space after it are stripped, any further indentation is kept.
    pub fn from_source(src: &str) -> Self {
        let lines = src
            .lines()
            .filter_map(|line| line.strip_prefix(COMMENT_MARKER))
            .map(|line| line.strip_prefix(' ').unwrap_or(line).trim_end().to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compares the expected lines with `actual`, ignoring trailing whitespace
    pub fn check(&self, actual: &str) -> TestOutcome {
        let actual = actual.lines().map(str::trim_end).collect::<Vec<_>>();
        let len = self.lines.len().max(actual.len());
        let mismatches = (0..len)
            .filter_map(|idx| {
                let expected = self.lines.get(idx).map(String::as_str);
                let actual = actual.get(idx).copied();
                (expected != actual).then(|| LineMismatch {
                    line: idx + 1,
                    expected: expected.map(str::to_string),
                    actual: actual.map(str::to_string),
                })
            })
            .collect();
        TestOutcome { mismatches }
    }
}

/// The result of checking output against [Expectations]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub mismatches: Vec<LineMismatch>,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl Display for TestOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for mismatch in &self.mismatches {
            writeln!(f, "{mismatch}")?;
        }
        Ok(())
    }
}

/// One output line that differs from what was expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMismatch {
    /// 1-based line of output
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Display for LineMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: expected ", self.line)?;
        match &self.expected {
            Some(expected) => write!(f, "{expected:?}")?,
            None => write!(f, "nothing")?,
        }
        write!(f, ", got ")?;
        match &self.actual {
            Some(actual) => write!(f, "{actual:?}"),
            None => write!(f, "nothing"),
        }
    }
}
