//! optargs, a `no_std` command-line argument lexer and help text builder.
#![no_std]
#![deny(missing_docs)]

pub use optargs_help as help;
pub use optargs_lexer as lexer;

pub use help::Help;
pub use lexer::{Lexer, Token};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// An error comes from the lexing of arguments.
    #[error("{0}")]
    Lexer(lexer::Error<'a>),
}

// Written by hand rather than with `#[from]`: a source error must be
// `'static`, which a borrowed lexer error is not.
impl<'a> From<lexer::Error<'a>> for Error<'a> {
    fn from(error: lexer::Error<'a>) -> Self {
        Error::Lexer(error)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::{assert_that, eq};

    use crate as optargs;
    use optargs::{Help, Lexer, Token};

    #[test]
    fn it_should_drive_a_front_end_over_a_full_command_line() {
        let argv = &[
            "-h",
            "--version",
            "--output=file",
            "-i=input",
            "positional1",
            "--config",
            "settings.cfg",
            "-d",
            "output-directory",
            "--",
            "positional2",
            "positional3",
        ];

        let mut lexer = Lexer::new(argv);

        let mut help = false;
        let mut version = false;
        let mut output = None;
        let mut input = None;
        let mut config = None;
        let mut directory = None;
        let mut positionals = [""; 3];
        let mut found = 0;

        while let Some(token) = lexer.next().unwrap() {
            match token {
                Token::Short('h') | Token::Long("help") => help = true,
                Token::Long("version") => version = true,
                Token::Short('o') | Token::Long("output") => {
                    output = Some(lexer.expect_parameter().unwrap());
                }
                Token::Short('i') | Token::Long("input") => {
                    input = Some(lexer.expect_parameter().unwrap());
                }
                Token::Short('c') | Token::Long("config") => {
                    config = Some(lexer.expect_parameter().unwrap());
                }
                Token::Short('d') | Token::Long("output-directory") => {
                    directory = Some(lexer.expect_parameter().unwrap());
                }
                Token::Positional(value) => {
                    positionals[found] = value;
                    found += 1;
                }
                other => panic!("unexpected option {other}"),
            }
        }

        assert_that!(help, eq(true));
        assert_that!(version, eq(true));
        assert_that!(output, eq(Some("file")));
        assert_that!(input, eq(Some("input")));
        assert_that!(config, eq(Some("settings.cfg")));
        assert_that!(directory, eq(Some("output-directory")));
        assert_that!(found, eq(3));
        assert_that!(positionals, eq(["positional1", "positional2", "positional3"]));
    }

    #[test]
    fn it_should_wrap_lexer_errors() {
        let mut lexer = Lexer::new(&["-a!"]);

        let error: optargs::Error = lexer.next().unwrap_err().into();

        assert_that!(
            error,
            eq(optargs::Error::Lexer(optargs::lexer::Error::InvalidOption(
                "-a!"
            )))
        );
    }

    #[test]
    fn it_should_render_help_for_the_same_front_end() {
        let help = Help::new()
            .usage("frob [OPTION]... [INPUT]...")
            .header("OPTIONS")
            .option("-h, --help", "Print this help message.")
            .option("-o, --output=FILE", "Write output to FILE.");

        let rendered = help.render();

        assert_that!(
            rendered.starts_with("Usage: frob [OPTION]... [INPUT]...\n\nOPTIONS\n"),
            eq(true)
        );
        assert_that!(
            rendered.contains("  -h, --help        Print this help message.\n"),
            eq(true)
        );
        assert_that!(
            rendered.contains("  -o, --output=FILE Write output to FILE.\n"),
            eq(true)
        );
    }
}
