//! A builder that accumulates help message elements and renders them on
//! demand.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::wrap::wrap_text;

/// Maximum width of the shared option description column.
const MAX_INDENTATION: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Usage,
    Header,
    Paragraph,
    OptionEntry,
}

#[derive(Clone, Debug)]
enum Element<'a> {
    Usage(&'a str),
    Header(&'a str),
    Paragraph { indentation: &'a str, text: &'a str },
    OptionEntry { label: &'a str, description: &'a str },
}

impl Element<'_> {
    fn kind(&self) -> Kind {
        match self {
            Element::Usage(_) => Kind::Usage,
            Element::Header(_) => Kind::Header,
            Element::Paragraph { .. } => Kind::Paragraph,
            Element::OptionEntry { .. } => Kind::OptionEntry,
        }
    }
}

/// Accumulates help message elements for a conventional `--help` display.
///
/// Elements render in insertion order. Option descriptions align to a
/// common column computed over the whole message at render time, so the
/// alignment is consistent no matter the order entries were added in.
///
/// ```
/// use optargs_help::Help;
///
/// let help = Help::new()
///     .usage("frob [OPTION]... FILE")
///     .header("OPTIONS")
///     .option("-h, --help", "Print this help message.")
///     .option("-o, --output=FILE", "Write the result to FILE.");
///
/// print!("{help}");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Help<'a> {
    elements: Vec<Element<'a>>,
}

impl<'a> Help<'a> {
    /// Create an empty help message.
    pub fn new() -> Self {
        Help {
            elements: Vec::new(),
        }
    }

    /// Adds a usage line.
    ///
    /// Consecutive calls render the subsequent lines in an alternate form:
    ///
    /// ```text
    /// Usage: frob INPUT
    ///    or: frob INPUT OUTPUT
    /// ```
    pub fn usage(mut self, usage: &'a str) -> Self {
        self.elements.push(Element::Usage(usage));
        self
    }

    /// Adds a header.
    ///
    /// Following typographical convention, a header is separated from the
    /// element after it by only a single line break.
    pub fn header(mut self, header: &'a str) -> Self {
        self.elements.push(Element::Header(header));
        self
    }

    /// Adds a paragraph, wrapped so that lines do not exceed 80 characters.
    pub fn wrap(self, text: &'a str) -> Self {
        self.wrap_indented("", text)
    }

    /// Adds a paragraph with the given indentation, wrapped so that lines
    /// do not exceed 80 characters.
    pub fn wrap_indented(mut self, indentation: &'a str, text: &'a str) -> Self {
        self.elements.push(Element::Paragraph { indentation, text });
        self
    }

    /// Like [`wrap_indented`](Help::wrap_indented), with the indentation
    /// taken from the spaces at the start of `text`.
    pub fn paragraph(self, text: &'a str) -> Self {
        let body = text.trim_start_matches(' ');
        let (indentation, text) = text.split_at(text.len() - body.len());
        self.wrap_indented(indentation, text)
    }

    /// Adds documentation for one option.
    ///
    /// The label is typically in the form `-o, --output=FILE`. Its width
    /// widens the shared description column up to a fixed cap; labels wider
    /// than the cap start their description on the following line instead.
    pub fn option(mut self, label: &'a str, description: &'a str) -> Self {
        self.elements.push(Element::OptionEntry { label, description });
        self
    }

    /// Render the help message into any [`fmt::Write`] sink.
    pub fn render_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let indent = self.option_indent();
        let mut previous: Option<Kind> = None;

        for element in &self.elements {
            let kind = element.kind();

            if let Some(previous) = previous {
                // Paragraphs are always separated from what follows; a
                // change of kind is separated unless a header precedes it,
                // so headers hug the block after them.
                if previous == Kind::Paragraph || (kind != previous && previous != Kind::Header) {
                    out.write_char('\n')?;
                }
            }

            match element {
                Element::Usage(usage) => {
                    let prefix = if previous == Some(Kind::Usage) {
                        "   or: "
                    } else {
                        "Usage: "
                    };
                    writeln!(out, "{prefix}{usage}")?;
                }

                Element::Header(header) => writeln!(out, "{header}")?,

                Element::Paragraph { indentation, text } => {
                    wrap_text(out, 0, indentation, text)?;
                }

                Element::OptionEntry { label, description } => {
                    write!(out, "  {label} ")?;
                    wrap_text(out, label.len() + 3, &indent, description)?;
                }
            }

            previous = Some(kind);
        }

        out.write_char('\n')
    }

    /// Render the help message to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.render_into(&mut out);
        out
    }

    /// The shared left margin aligning all option descriptions: the widest
    /// option column in the message, capped at [`MAX_INDENTATION`].
    fn option_indent(&self) -> String {
        let mut width = 0;

        for element in &self.elements {
            if let Element::OptionEntry { label, .. } = element {
                let column = label.len() + 3;
                if column > width && column <= MAX_INDENTATION {
                    width = column;
                }
            }
        }

        " ".repeat(width)
    }
}

impl fmt::Display for Help<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f)
    }
}
