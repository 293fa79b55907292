//! A lexer for generating tokens from an argument vector.

use core::fmt;

use crate::token::Token;

/// Defines the possible errors that may occur while lexing arguments.
///
/// Both variants describe malformed command-line input, never internal
/// faults. They borrow from the argument vector so that callers can report
/// the offending text verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// The argument does not match any recognized option shape.
    #[error("invalid option '{0}'")]
    InvalidOption(&'a str),

    /// A parameter was requested but none was available. Carries the token
    /// that was expecting the parameter, if one was ever returned.
    #[error("missing parameter{}", FlagSuffix(.0))]
    MissingParameter(Option<Token<'a>>),
}

struct FlagSuffix<'a>(&'a Option<Token<'a>>);

impl fmt::Display for FlagSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(flag) => write!(f, " to '{flag}'"),
            None => Ok(()),
        }
    }
}

/// Classification of a fresh argument, evaluated in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    /// A positional argument, or anything once `--` has been seen.
    Positional,

    /// An option with an inline parameter; holds the byte position of the
    /// `=` separator.
    Inline(usize),

    /// A long option without a parameter.
    Long,

    /// One or more clustered short options.
    Cluster,
}

/// Defines a `Lexer` that streams tokens from an argument vector.
///
/// The lexer carries no table of which options exist or which take
/// parameters. After receiving an option token, the caller decides whether
/// to request a following parameter with
/// [`expect_parameter`](Lexer::expect_parameter).
///
/// ```
/// use optargs_lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new(&["-ab", "--output=out.txt", "input.txt"]);
///
/// assert_eq!(lexer.next(), Ok(Some(Token::Short('a'))));
/// assert_eq!(lexer.next(), Ok(Some(Token::Short('b'))));
/// assert_eq!(lexer.next(), Ok(Some(Token::Long("output"))));
/// assert_eq!(lexer.expect_parameter(), Ok("out.txt"));
/// assert_eq!(lexer.next(), Ok(Some(Token::Positional("input.txt"))));
/// assert_eq!(lexer.next(), Ok(None));
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    argv: &'a [&'a str],
    index: usize,
    offset: usize,
    no_more_options: bool,
    previous: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the raw argument vector, exactly as supplied
    /// to the process invocation.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Lexer {
            argv,
            index: 0,
            offset: 0,
            no_more_options: false,
            previous: None,
        }
    }

    /// Returns whether another token remains.
    ///
    /// An end-of-options argument (`--`) is consumed here and never returned
    /// as a token; every argument after it lexes as positional.
    pub fn has_next(&mut self) -> bool {
        if self.index == self.argv.len() {
            return false;
        }

        if self.argv[self.index] == "--" {
            self.no_more_options = true;
            self.index += 1;
        }

        self.index != self.argv.len()
    }

    /// Returns the next token of the broken-down arguments, or `None` once
    /// the argument vector is exhausted.
    ///
    /// Fails with [`Error::InvalidOption`] if the current argument is an
    /// option in a form the lexer does not accept.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token<'a>>, Error<'a>> {
        let token = match self.next_internal()? {
            Some(token) => token,
            None => return Ok(None),
        };

        self.previous = Some(token);
        Ok(Some(token))
    }

    fn next_internal(&mut self) -> Result<Option<Token<'a>>, Error<'a>> {
        if !self.has_next() {
            return Ok(None);
        }

        let arg = self.argv[self.index];

        if self.offset > 0 {
            // Mid-argument: only a short-option cluster may be resumed. An
            // inline parameter left unconsumed lands here as well, since
            // its argument contains an `=`.
            if is_cluster(arg) {
                return Ok(Some(self.take_short(arg)));
            }

            return Err(Error::InvalidOption(arg));
        }

        match self.classify(arg) {
            Some(Shape::Positional) => {
                self.index += 1;
                Ok(Some(Token::Positional(arg)))
            }

            Some(Shape::Inline(eq)) => {
                let token = match arg.strip_prefix("--") {
                    Some(name) => Token::Long(&name[..eq - 2]),
                    // `classify` admits exactly one letter before the `=`.
                    None => Token::Short(arg.as_bytes()[1] as char),
                };

                self.offset = eq + 1;
                Ok(Some(token))
            }

            Some(Shape::Long) => {
                self.index += 1;
                Ok(Some(Token::Long(&arg[2..])))
            }

            Some(Shape::Cluster) => Ok(Some(self.take_short(arg))),

            None => Err(Error::InvalidOption(arg)),
        }
    }

    /// Processes the next token from the arguments as a parameter to the
    /// previous one.
    ///
    /// A parameter is taken either from the remainder of an inline form
    /// (`--output=FILE`) or from the next whole argument; anything that
    /// lexes as an option cannot serve as a parameter. Must be called
    /// directly after the token that takes the parameter.
    pub fn expect_parameter(&mut self) -> Result<&'a str, Error<'a>> {
        if self.index == self.argv.len() {
            return Err(Error::MissingParameter(self.previous));
        }

        let arg = self.argv[self.index];

        // A plain argument as the parameter.
        if self.offset == 0 && !self.is_option_arg(arg) {
            self.index += 1;
            return Ok(arg);
        }

        // The remainder after the `=` of an inline form.
        if self.offset > 0 && arg[..self.offset].ends_with('=') {
            let value = &arg[self.offset..];
            self.index += 1;
            self.offset = 0;
            return Ok(value);
        }

        Err(Error::MissingParameter(self.previous))
    }

    /// Classify a fresh argument into one of the recognized shapes. `None`
    /// means the argument is an option in a form the lexer does not accept.
    fn classify(&self, arg: &str) -> Option<Shape> {
        // Case A: positional argument.
        if !self.is_option_arg(arg) {
            return Some(Shape::Positional);
        }

        // Case B: option with an inline parameter (`--opt=value`, `-o=value`).
        if let Some(eq) = find_inline_separator(arg) {
            return Some(Shape::Inline(eq));
        }

        // Case C: long option without a parameter.
        if is_long(arg) {
            return Some(Shape::Long);
        }

        // Case D: one or more clustered short options.
        if is_cluster(arg) {
            return Some(Shape::Cluster);
        }

        None
    }

    /// Whether an argument lexes as an option. Once `--` has been seen,
    /// nothing does.
    #[inline(always)]
    fn is_option_arg(&self, arg: &str) -> bool {
        !self.no_more_options && arg.starts_with('-') && arg.len() > 1
    }

    /// Take one short option out of a cluster, advancing to the next
    /// argument once the cluster is spent.
    fn take_short(&mut self, arg: &'a str) -> Token<'a> {
        if self.offset == 0 {
            self.offset = 1;
        }

        // Cluster letters are ASCII, one byte per character.
        let c = arg.as_bytes()[self.offset] as char;
        self.offset += 1;

        if self.offset == arg.len() {
            self.offset = 0;
            self.index += 1;
        }

        Token::Short(c)
    }
}

#[inline(always)]
fn is_long_name_char(c: char) -> bool {
    c == '-' || c.is_ascii_alphanumeric()
}

#[inline(always)]
fn is_short_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Matches `--<name>` exactly, with no `=`.
#[inline(always)]
fn is_long(arg: &str) -> bool {
    match arg.strip_prefix("--") {
        Some(name) => !name.is_empty() && name.chars().all(is_long_name_char),
        None => false,
    }
}

/// Matches `-<letters>` exactly, with no `=`.
#[inline(always)]
fn is_cluster(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(name) => !name.is_empty() && name.chars().all(is_short_name_char),
        None => false,
    }
}

/// Byte position of the `=` in an option carrying an inline parameter.
///
/// Only a single short option may take an inline parameter; a cluster
/// cannot, consistent with the dropped concatenated short-value form.
fn find_inline_separator(arg: &str) -> Option<usize> {
    let eq = arg.find('=')?;

    if let Some(name) = arg.strip_prefix("--") {
        let name = &name[..eq - 2];
        if !name.is_empty() && name.chars().all(is_long_name_char) {
            return Some(eq);
        }
    } else if let Some(name) = arg.strip_prefix('-') {
        let name = &name[..eq - 1];
        if name.len() == 1 && name.chars().all(is_short_name_char) {
            return Some(eq);
        }
    }

    None
}
