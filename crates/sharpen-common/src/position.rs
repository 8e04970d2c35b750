//! Line/column positions and offset conversion.
//!
//! Syntax trees address text through byte offsets; hosts and the CLI reporter
//! talk in lines and columns. `LineMap` converts between the two.

use crate::Span;
use serde::{Deserialize, Serialize};

/// A position in a document (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    /// Column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// A range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }
}

/// Starting offset of each line of a text, for offset <-> position lookups.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        let bytes = source.as_bytes();

        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push((i + 1) as u32),
                // A lone \r ends a line; \r\n is handled by the \n.
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push((i + 1) as u32),
                _ => {}
            }
        }

        LineMap { line_starts }
    }

    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let character = source
            .get(start..clamped_end)
            .unwrap_or("")
            .chars()
            .map(|ch| ch.len_utf16() as u32)
            .sum();

        Position {
            line: line as u32,
            character,
        }
    }

    /// Convert a position back to a byte offset.
    ///
    /// Returns `None` when the line does not exist. Columns past the end of
    /// the line clamp to the line end.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<u32> {
        let line_idx = position.line as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_limit = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(source.len() as u32);
        let slice = source
            .get(line_start as usize..line_limit as usize)
            .unwrap_or("");

        let mut utf16_count = 0u32;
        let mut byte_count = 0u32;
        for ch in slice.chars() {
            if ch == '\n' || ch == '\r' || utf16_count >= position.character {
                break;
            }
            let width = ch.len_utf16() as u32;
            if utf16_count + width > position.character {
                break;
            }
            utf16_count += width;
            byte_count += ch.len_utf8() as u32;
        }

        Some(line_start + byte_count)
    }

    pub fn span_to_range(&self, span: Span, source: &str) -> Range {
        Range::new(
            self.offset_to_position(span.start, source),
            self.offset_to_position(span.end(), source),
        )
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
