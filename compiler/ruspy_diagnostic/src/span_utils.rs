//! Byte offset to line/column conversion.

/// Start offsets of every line in a source, for `O(log L)` lookups.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `starts[i]` is the byte offset where line `i + 1` begins.
    starts: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert.max(1),
        }
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    pub fn line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        let start = self.starts.get(line - 1).copied().unwrap_or(0);
        let end = offset.min(source.len());
        let col = source
            .get(start..end)
            .map_or(end.saturating_sub(start), |s| s.chars().count());
        (line, col + 1)
    }

    /// Text of the 1-based `line`, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = self.starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .starts
            .get(line)
            .map_or(source.len(), |next| next.saturating_sub(1));
        source
            .get(start..end.max(start))
            .unwrap_or("")
            .trim_end_matches('\r')
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
