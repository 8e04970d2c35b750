use colored::Colorize;
use rustc_hash::FxHashMap;
use sharpen_common::{Diagnostic, LineMap, Severity};

/// Renders diagnostics against the rendered text of their documents.
pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, (String, LineMap)>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
        }
    }

    /// Register the text of document `name`, used for locations and snippets.
    pub fn add_source(&mut self, name: impl Into<String>, text: String) {
        let map = LineMap::build(&text);
        self.sources.insert(name.into(), (text, map));
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// `Page.cs:3:9 - warning IR001: message`, followed by the source line
    /// with the span underlined.
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let file = &diagnostic.location.file;
        let mut output = match self.position_for(file, diagnostic.span().start) {
            Some((line, column)) => format!("{file}:{line}:{column}"),
            None if !file.is_empty() => file.clone(),
            None => "<unknown>".to_string(),
        };

        output.push_str(" - ");
        output.push_str(&self.format_severity(diagnostic.severity));
        output.push(' ');
        output.push_str(&self.format_code(&diagnostic.id));
        output.push_str(": ");
        output.push_str(&diagnostic.message);

        if let Some(snippet) = self.format_snippet(diagnostic) {
            output.push_str(&snippet);
        }
        output
    }

    /// One-line count of diagnostics by severity.
    pub fn summary(&self, diagnostics: &[Diagnostic]) -> String {
        let count = |severity: Severity| diagnostics.iter().filter(|d| d.severity == severity).count();
        let (errors, warnings, infos) = (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        );
        let text = format!("{errors} error(s), {warnings} warning(s), {infos} info");
        if self.color && errors > 0 {
            text.red().bold().to_string()
        } else {
            text
        }
    }

    /// Source line of the span start with `~` under the span, cut at the
    /// line end.
    fn format_snippet(&self, diagnostic: &Diagnostic) -> Option<String> {
        let span = diagnostic.span();
        if span.is_empty() {
            return None;
        }

        let (text, map) = self.sources.get(&diagnostic.location.file)?;
        let (line, column) = self.position_for(&diagnostic.location.file, span.start)?;
        let line_text = text.lines().nth((line - 1) as usize)?;

        let line_start = map.line_start((line - 1) as usize)?;
        let line_end = line_start + line_text.len() as u32;
        let underline_start = (column - 1) as usize;
        let underline_len = (span.end().min(line_end) - span.start).max(1) as usize;

        let prefix: String = line_text
            .chars()
            .take(underline_start)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        let underline = "~".repeat(underline_len);
        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };

        Some(format!("\n  {line:>3}   {line_text}\n        {prefix}{underline}"))
    }

    fn position_for(&self, file: &str, offset: u32) -> Option<(u32, u32)> {
        let (text, map) = self.sources.get(file)?;
        let position = map.offset_to_position(offset, text);
        Some((position.line + 1, position.character + 1))
    }

    fn format_severity(&self, severity: Severity) -> String {
        let label = severity.as_str();
        if !self.color {
            return label.to_string();
        }

        match severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Info => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, id: &str) -> String {
        if self.color {
            id.bright_blue().to_string()
        } else {
            id.to_string()
        }
    }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
