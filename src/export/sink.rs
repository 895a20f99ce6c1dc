//! Tabular output sinks.
//!
//! The exporter only talks to the [`TabularSink`] trait: it announces the
//! sheet title and headers once, hands over each row in traversal order, and
//! finally asks the sink to serialize itself into a byte stream. Buffered
//! state lives inside the sink value and is dropped with it on error paths,
//! so nothing leaks when an export aborts mid-traversal.

use std::io::Write;

use crate::common::Result;

/// Destination for exported rows.
pub trait TabularSink {
    /// Announce the sheet title and the full header list. Called exactly
    /// once, before any row.
    fn begin(&mut self, title: &str, headers: &[String]) -> Result<()>;

    /// Accept one row. Cells arrive left-to-right, aligned with the headers.
    fn append_row(&mut self, cells: &[String]) -> Result<()>;

    /// Serialize the accumulated table into `out` and flush it. Called at
    /// most once, after the last row.
    fn finish(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// Configuration for [`DelimitedSink`].
#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for fields containing the delimiter, quotes, or
    /// line breaks
    pub quote: u8,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl DelimitedConfig {
    /// Create a new default (CSV) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Create a TSV (tab-separated) configuration.
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }
}

/// Delimited-text sink (CSV by default).
///
/// Rows are encoded into an in-memory buffer as they arrive; `finish`
/// writes the buffer to the output stream and flushes. The sheet title has
/// no representation in delimited text and is ignored.
#[derive(Debug, Default)]
pub struct DelimitedSink {
    config: DelimitedConfig,
    buffer: Vec<u8>,
}

impl DelimitedSink {
    /// Create a sink with the given configuration.
    pub fn new(config: DelimitedConfig) -> Self {
        DelimitedSink {
            config,
            buffer: Vec::new(),
        }
    }

    fn encode_line(&mut self, cells: &[String]) {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                self.buffer.push(self.config.delimiter);
            }
            self.encode_field(cell);
        }
        self.buffer.push(b'\n');
    }

    fn encode_field(&mut self, field: &str) {
        let needs_quoting = field.bytes().any(|b| {
            b == self.config.delimiter || b == self.config.quote || b == b'\n' || b == b'\r'
        });
        if !needs_quoting {
            self.buffer.extend_from_slice(field.as_bytes());
            return;
        }
        self.buffer.push(self.config.quote);
        for b in field.bytes() {
            if b == self.config.quote {
                self.buffer.push(self.config.quote);
            }
            self.buffer.push(b);
        }
        self.buffer.push(self.config.quote);
    }
}

impl TabularSink for DelimitedSink {
    fn begin(&mut self, _title: &str, headers: &[String]) -> Result<()> {
        self.encode_line(headers);
        Ok(())
    }

    fn append_row(&mut self, cells: &[String]) -> Result<()> {
        self.encode_line(cells);
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(&self.buffer)?;
        out.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests and programmatic consumers.
///
/// `finish` is a no-op; read the table back through the accessors.
#[derive(Debug, Default)]
pub struct MemorySink {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// The announced sheet title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The announced headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All accepted rows, in arrival order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl TabularSink for MemorySink {
    fn begin(&mut self, title: &str, headers: &[String]) -> Result<()> {
        self.title = title.to_string();
        self.headers = headers.to_vec();
        Ok(())
    }

    fn append_row(&mut self, cells: &[String]) -> Result<()> {
        self.rows.push(cells.to_vec());
        Ok(())
    }

    fn finish(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_csv_encoding() {
        let mut sink = DelimitedSink::new(DelimitedConfig::default());
        sink.begin("Sheet", &row(&["a", "b"])).unwrap();
        sink.append_row(&row(&["plain", "with, comma"])).unwrap();
        sink.append_row(&row(&["say \"hi\"", "line\nbreak"])).unwrap();

        let mut out = Vec::new();
        sink.finish(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,b\nplain,\"with, comma\"\n\"say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn test_tsv_preset() {
        let mut sink = DelimitedSink::new(DelimitedConfig::tsv());
        sink.begin("Sheet", &row(&["a", "b"])).unwrap();
        sink.append_row(&row(&["1", "2"])).unwrap();

        let mut out = Vec::new();
        sink.finish(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\tb\n1\t2\n");
    }

    #[test]
    fn test_memory_sink_accumulates() {
        let mut sink = MemorySink::new();
        sink.begin("Spaces", &row(&["h1"])).unwrap();
        sink.append_row(&row(&["v1"])).unwrap();
        sink.append_row(&row(&["v2"])).unwrap();

        assert_eq!(sink.title(), "Spaces");
        assert_eq!(sink.headers(), &["h1"]);
        assert_eq!(sink.rows().len(), 2);
        assert_eq!(sink.rows()[1], &["v2"]);
    }
}
