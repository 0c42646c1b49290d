//! JSON output format.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

use crate::FormatError;

/// Indentation used by pretty output.
pub const INDENT: &[u8] = b"    ";

/// JSON formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Whether to indent the output.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Creates a formatter indenting with four spaces.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns true if the output is indented.
    #[must_use]
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Writes `data` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write<T, W>(&self, data: &T, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if self.pretty {
            let mut ser =
                Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
            data.serialize(&mut ser)?;
        } else {
            serde_json::to_writer(&mut writer, data)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Renders `data` as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T: Serialize + ?Sized>(&self, data: &T) -> Result<String, FormatError> {
        let mut buf = Vec::new();
        self.write(data, &mut buf)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
