// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    implicant::{Implicant, MatrixDisplayFormat},
};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    format: MatrixDisplayFormat,
    show_covered: bool,
    implicant_separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            format: MatrixDisplayFormat::default(),
            show_covered: false,
            implicant_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Also print the values each implicant covers, as `m(0, 1) = 00-`.
    pub fn with_covered(mut self, show_covered: bool) -> Self {
        self.show_covered = show_covered;
        self
    }

    pub fn with_implicant_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.implicant_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count = self.cover.len();
        for (ix, implicant) in self.cover.implicants().iter().enumerate() {
            let pattern_display = implicant.pattern().matrix_display().with_format(self.format);
            if self.show_covered {
                write!(
                    f,
                    "m({}) = {}",
                    implicant.covered().iter().format(", "),
                    pattern_display
                )?;
            } else {
                write!(f, "{}", pattern_display)?;
            }

            let (separator, print_last) = &self.implicant_separator;
            if *print_last || ix < count - 1 {
                write!(f, "{}", separator)?;
            }
        }

        Ok(())
    }
}

/// Renders a cover as a sum-of-products expression over its variable names, e.g.
/// `(NOT A AND B) OR (A AND NOT B)`.
///
/// * An empty cover is constant false.
/// * A single implicant with no literals is constant true.
/// * Otherwise every implicant becomes a term of its literals, joined by the AND connective. A
///   term is parenthesized when it has more than one literal or the cover has more than one
///   term. Terms are joined by the OR connective, in cover order.
#[derive(Clone, Debug)]
pub struct ExpressionDisplay<'a> {
    cover: &'a Cover,
    and: Cow<'a, str>,
    or: Cow<'a, str>,
    not: Cow<'a, str>,
    constant_true: Cow<'a, str>,
    constant_false: Cow<'a, str>,
}

impl<'a> ExpressionDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            and: Cow::Borrowed(" AND "),
            or: Cow::Borrowed(" OR "),
            not: Cow::Borrowed("NOT "),
            constant_true: Cow::Borrowed("1"),
            constant_false: Cow::Borrowed("0"),
        }
    }

    pub fn with_and(mut self, and: impl Into<Cow<'a, str>>) -> Self {
        self.and = and.into();
        self
    }

    pub fn with_or(mut self, or: impl Into<Cow<'a, str>>) -> Self {
        self.or = or.into();
        self
    }

    /// Sets the prefix written before a negated variable.
    pub fn with_not(mut self, not: impl Into<Cow<'a, str>>) -> Self {
        self.not = not.into();
        self
    }

    pub fn with_constants(
        mut self,
        constant_true: impl Into<Cow<'a, str>>,
        constant_false: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.constant_true = constant_true.into();
        self.constant_false = constant_false.into();
        self
    }

    fn write_term(&self, f: &mut fmt::Formatter, implicant: &Implicant) -> fmt::Result {
        let pattern = implicant.pattern();
        if pattern.is_universe() {
            return write!(f, "{}", self.constant_true);
        }

        let parenthesize = pattern.literal_count() > 1 || self.cover.len() > 1;
        if parenthesize {
            write!(f, "(")?;
        }

        let literals = self
            .cover
            .variables()
            .iter()
            .zip(pattern.input())
            .filter_map(|(variable, input)| input.map(|bit| (variable, bit)));
        for literal in literals.with_position() {
            let ((variable, bit), last) = match literal {
                Position::First(literal) | Position::Middle(literal) => (literal, false),
                Position::Last(literal) | Position::Only(literal) => (literal, true),
            };
            if !bit {
                write!(f, "{}", self.not)?;
            }
            write!(f, "{}", variable)?;
            if !last {
                write!(f, "{}", self.and)?;
            }
        }

        if parenthesize {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ExpressionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "{}", self.constant_false);
        }
        if self.cover.is_tautology() {
            return write!(f, "{}", self.constant_true);
        }

        for elem in self.cover.implicants().iter().with_position() {
            match elem {
                Position::First(implicant) | Position::Middle(implicant) => {
                    self.write_term(f, implicant)?;
                    write!(f, "{}", self.or)?;
                }
                Position::Last(implicant) | Position::Only(implicant) => {
                    self.write_term(f, implicant)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{cover::Cover, implicant::MatrixDisplayFormat, logic_function::LogicFunction};

    fn cover(variables: &[&str], on_set: &[u32]) -> Cover {
        let function =
            LogicFunction::new(variables.iter().copied(), on_set.iter().copied()).unwrap();
        Cover::minimize(&function).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            cover(&["A", "B"], &[0, 1, 2, 3])
                .expression_display()
                .to_string(),
            "1"
        );
        assert_eq!(cover(&["A", "B"], &[]).expression_display().to_string(), "0");
        assert_eq!(
            cover(&["A", "B"], &[])
                .expression_display()
                .with_constants("true", "false")
                .to_string(),
            "false"
        );
    }

    #[test]
    fn test_single_term() {
        assert_eq!(
            cover(&["A", "B"], &[2, 3]).expression_display().to_string(),
            "A"
        );
        assert_eq!(
            cover(&["A", "B"], &[0, 2]).expression_display().to_string(),
            "NOT B"
        );
        assert_eq!(
            cover(&["A", "B"], &[1]).expression_display().to_string(),
            "(NOT A AND B)"
        );
    }

    #[test]
    fn test_multiple_terms() {
        let cover = cover(&["A", "B"], &[0, 3]);
        assert_eq!(
            cover.expression_display().to_string(),
            "(NOT A AND NOT B) OR (A AND B)"
        );
        assert_eq!(
            cover
                .expression_display()
                .with_and("")
                .with_or(" + ")
                .with_not("~")
                .to_string(),
            "(~A~B) + (AB)"
        );
    }

    #[test]
    fn test_single_literal_terms() {
        // A OR B: each term is one literal, but there is more than one term.
        let cover = cover(&["A", "B"], &[1, 2, 3]);
        assert_eq!(cover.expression_display().to_string(), "(B) OR (A)");
    }

    #[test]
    fn test_matrix() {
        let cover = cover(&["A", "B", "C"], &[0, 1, 7]);
        assert_eq!(cover.matrix_display().to_string(), "00-\n111\n");
        assert_eq!(
            cover
                .matrix_display()
                .with_format(MatrixDisplayFormat::Numeric)
                .with_covered(true)
                .with_implicant_separator("; ", false)
                .to_string(),
            "m(0, 1) = 002; m(7) = 111"
        );
    }
}
