//! Text wrapping for help message rendering.

use core::fmt;

/// Maximum line length of wrapped text.
pub const MAX_LINE_LENGTH: usize = 80;

/// Wraps `text` into `out` so that lines do not exceed [`MAX_LINE_LENGTH`]
/// characters, prefixing every line with `indentation` (typically a run of
/// spaces).
///
/// `offset` is the column already occupied on the current output line; the
/// first line is prefixed with only the remainder of the indentation. When
/// the offset already exceeds the indentation width, the text starts on a
/// fresh line instead, so nothing lands left of the intended column.
///
/// Paragraphs separated by literal newlines are wrapped independently.
/// Within a paragraph, words are joined by single spaces. Widths are plain
/// character counts.
pub fn wrap_text<W: fmt::Write>(
    out: &mut W,
    offset: usize,
    indentation: &str,
    text: &str,
) -> fmt::Result {
    let mut offset = offset;

    if offset > indentation.len() {
        out.write_char('\n')?;
        offset = 0;
    }

    for line in text.split('\n') {
        out.write_str(&indentation[offset..])?;
        offset = indentation.len();

        let mut first = true;
        for word in line.split_whitespace() {
            let width = word.len() + usize::from(!first);

            if offset + width > MAX_LINE_LENGTH {
                out.write_char('\n')?;
                out.write_str(indentation)?;
                offset = indentation.len() + word.len();
            } else {
                if !first {
                    out.write_char(' ')?;
                }
                offset += width;
            }

            out.write_str(word)?;
            first = false;
        }

        out.write_char('\n')?;
        offset = 0;
    }

    Ok(())
}
