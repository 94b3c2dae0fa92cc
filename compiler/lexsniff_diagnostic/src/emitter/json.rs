//! Machine-readable diagnostic output.
//!
//! ```text
//! {
//!   "file": "main.cpp",
//!   "language": "C++",
//!   "diagnostics": [ { "code": ..., "severity": ..., ... } ],
//!   "summary": { "errors": 1, "warnings": 0, "suppressed": 0 }
//! }
//! ```

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter, EmitSummary};

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the summary.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    path: Option<String>,
    /// Extra top-level fields as encoded JSON values, written after `file`.
    fields: Vec<(String, String)>,
    summary: EmitSummary,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            path: None,
            fields: Vec::new(),
            summary: EmitSummary::default(),
        }
    }

    /// Record the analyzed file in the output object.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a top-level string field such as the detected language.
    #[must_use]
    pub fn with_field(self, key: impl Into<String>, value: &str) -> Self {
        let quoted = format!("\"{}\"", escape_json(value));
        self.with_raw_field(key, quoted)
    }

    /// Add a top-level field whose value is already encoded JSON.
    ///
    /// Written verbatim; the caller is responsible for its validity.
    #[must_use]
    pub fn with_raw_field(mut self, key: impl Into<String>, json: impl Into<String>) -> Self {
        self.fields.push((key.into(), json.into()));
        self
    }

    /// Open the output object and its diagnostics array.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "{{");
        if let Some(path) = &self.path {
            let _ = writeln!(self.writer, "  \"file\": \"{}\",", escape_json(path));
        }
        for (key, value) in &self.fields {
            let _ = writeln!(self.writer, "  \"{}\": {value},", escape_json(key));
        }
        let _ = write!(self.writer, "  \"diagnostics\": [");
    }

    /// Close the diagnostics array and write the summary.
    pub fn end(&mut self) {
        if !self.first {
            let _ = writeln!(self.writer);
            let _ = write!(self.writer, "  ");
        }
        let _ = writeln!(self.writer, "],");
        let EmitSummary {
            errors,
            warnings,
            suppressed,
        } = self.summary;
        let _ = writeln!(
            self.writer,
            "  \"summary\": {{ \"errors\": {errors}, \"warnings\": {warnings}, \"suppressed\": {suppressed} }}"
        );
        let _ = writeln!(self.writer, "}}");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if self.first {
            let _ = writeln!(self.writer);
        } else {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        // Built by hand; the shape is small and fixed.
        let _ = writeln!(self.writer, "    {{");
        let _ = writeln!(
            self.writer,
            "      \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(
            self.writer,
            "      \"severity\": \"{}\",",
            diagnostic.severity
        );
        let _ = writeln!(
            self.writer,
            "      \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );
        match diagnostic.primary_pos() {
            Some(pos) => {
                let _ = writeln!(self.writer, "      \"line\": {},", pos.line);
                let _ = writeln!(self.writer, "      \"column\": {},", pos.column);
            }
            None => {
                let _ = writeln!(self.writer, "      \"line\": null,");
                let _ = writeln!(self.writer, "      \"column\": null,");
            }
        }

        let _ = writeln!(self.writer, "      \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(
                self.writer,
                "        {{ \"line\": {}, \"column\": {}, \"message\": \"{}\", \"primary\": {} }}{comma}",
                label.pos.line,
                label.pos.column,
                escape_json(&label.message),
                label.is_primary,
            );
        }
        let _ = writeln!(self.writer, "      ],");

        let _ = writeln!(self.writer, "      \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "        \"{}\"{comma}", escape_json(note));
        }
        let _ = writeln!(self.writer, "      ],");

        let _ = writeln!(self.writer, "      \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(self.writer, "        \"{}\"{comma}", escape_json(suggestion));
        }
        let _ = writeln!(self.writer, "      ]");

        let _ = write!(self.writer, "    }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Stored and written by [`JsonEmitter::end`].
    fn emit_summary(&mut self, summary: &EmitSummary) {
        self.summary = *summary;
    }
}
