use std::fmt;

use encoding_rs::{DecoderResult, Encoding, UTF_8};

use crate::error::{ChartError, ChartResult};

/// JavaScript source emitted verbatim into generated scripts.
///
/// Used for callbacks, formatters and references to page variables that must
/// not be quoted as strings. The text is never checked for JavaScript syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpression {
    expression: String,
}

impl RawExpression {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        let mut expression = expression.into();
        if expression.starts_with('\u{feff}') {
            expression.replace_range(..'\u{feff}'.len_utf8(), "");
        }
        Self { expression }
    }

    /// Decodes bytes of unknown origin into an expression.
    ///
    /// A byte-order mark selects UTF-8 or UTF-16; without one the input must
    /// be valid UTF-8. Malformed input is rejected, never replaced.
    pub fn from_bytes(bytes: &[u8]) -> ChartResult<Self> {
        let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
        decode_strict(encoding, &bytes[bom_len..], bom_len).map(Self::new)
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.expression
    }
}

impl fmt::Display for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl From<&str> for RawExpression {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawExpression {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

fn decode_strict(
    encoding: &'static Encoding,
    body: &[u8],
    base_offset: usize,
) -> ChartResult<String> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(body.len())
        .ok_or_else(|| ChartError::InvalidData("raw expression is too large".to_owned()))?;
    let mut decoded = String::with_capacity(capacity);

    let (result, read) = decoder.decode_to_string_without_replacement(body, &mut decoded, true);
    match result {
        DecoderResult::InputEmpty => Ok(decoded),
        // `read` already covers the malformed sequence and any bytes after it.
        DecoderResult::Malformed(bad_len, extra_len) => Err(ChartError::InvalidEncoding {
            offset: base_offset + read - usize::from(bad_len) - usize::from(extra_len),
        }),
        DecoderResult::OutputFull => Err(ChartError::InvalidData(format!(
            "{} decoder ran out of buffer space",
            encoding.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_kept_unchanged() {
        let expr = RawExpression::new("function () { return this.y; }");
        assert_eq!(expr.expression(), "function () { return this.y; }");
    }

    #[test]
    fn leading_bom_is_stripped() {
        let expr = RawExpression::new("\u{feff}Highcharts.getOptions().colors[0]");
        assert_eq!(expr.expression(), "Highcharts.getOptions().colors[0]");

        let expr = RawExpression::from_bytes(b"\xEF\xBB\xBFwindow.data").expect("utf-8 bom");
        assert_eq!(expr.expression(), "window.data");
    }

    #[test]
    fn utf16_with_bom_is_decoded() {
        let mut le = vec![0xFF, 0xFE];
        le.extend("x => 'é'".encode_utf16().flat_map(u16::to_le_bytes));
        assert_eq!(
            RawExpression::from_bytes(&le).expect("utf-16le").expression(),
            "x => 'é'"
        );

        let mut be = vec![0xFE, 0xFF];
        be.extend("null".encode_utf16().flat_map(u16::to_be_bytes));
        assert_eq!(
            RawExpression::from_bytes(&be).expect("utf-16be").expression(),
            "null"
        );
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let err = RawExpression::from_bytes(b"'caf\xE9'").expect_err("latin-1 input");
        assert_eq!(err, ChartError::InvalidEncoding { offset: 4 });
    }

    #[test]
    fn invalid_utf8_after_bom_is_offset_past_the_bom() {
        let err = RawExpression::from_bytes(b"\xEF\xBB\xBFab\xFF").expect_err("stray 0xff");
        assert_eq!(err, ChartError::InvalidEncoding { offset: 5 });
    }

    #[test]
    fn truncated_utf16_is_rejected() {
        let err = RawExpression::from_bytes(&[0xFF, 0xFE, b'a', 0x00, b'b'])
            .expect_err("odd length");
        assert_eq!(err, ChartError::InvalidEncoding { offset: 4 });
    }

    #[test]
    fn lone_surrogate_is_rejected() {
        let err = RawExpression::from_bytes(&[0xFE, 0xFF, 0x00, b'a', 0xDC, 0x00, 0x00, b'b'])
            .expect_err("lone low surrogate");
        assert_eq!(err, ChartError::InvalidEncoding { offset: 4 });
    }
}
