//! Tokens produced by the argument lexer.

use core::fmt;

/// One unit of the broken-down argument vector.
///
/// Option tokens are normalized: a cluster such as `-abc` yields three
/// separate `Short` tokens, and an inline parameter (`--output=FILE`) is
/// stripped from its option token before being handed out by
/// [`Lexer::expect_parameter`](crate::Lexer::expect_parameter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// A positional argument, returned verbatim.
    Positional(&'a str),

    /// A single-character option (e.g. `-v`).
    Short(char),

    /// A long option (e.g. `--verbose`), stored without the leading hyphens.
    Long(&'a str),
}

impl Token<'_> {
    /// Evaluate if the token is an option rather than a positional argument.
    #[inline(always)]
    pub fn is_option(&self) -> bool {
        !matches!(self, Token::Positional(_))
    }
}

/// Renders the spelling the user typed, with any inline parameter stripped.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Positional(value) => f.write_str(value),
            Token::Short(name) => write!(f, "-{name}"),
            Token::Long(name) => write!(f, "--{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_display_the_spelling_of_options() {
        assert_that!(Token::Short('x'), displays_as(eq("-x")));
        assert_that!(Token::Long("output"), displays_as(eq("--output")));
    }

    #[test]
    fn it_should_display_positionals_verbatim() {
        assert_that!(Token::Positional("-x"), displays_as(eq("-x")));
    }

    #[test]
    fn it_should_distinguish_options_from_positionals() {
        assert_that!(Token::Short('x').is_option(), eq(true));
        assert_that!(Token::Long("output").is_option(), eq(true));
        assert_that!(Token::Positional("-x").is_option(), eq(false));
    }
}
