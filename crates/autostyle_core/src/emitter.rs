//! Line accumulator that indents CSS by brace depth.

const INDENT: &str = "\t";

/// Append-only CSS text with a nesting depth that follows `{` / `}` line endings.
#[derive(Debug, Default)]
pub struct CssWriter {
    out: String,
    depth: usize,
}

impl CssWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line. An empty line is written as a blank line and leaves
    /// the depth alone. A line ending in `}` is written one level out; a line
    /// ending in `{` indents everything after it.
    ///
    /// # Panics
    ///
    /// On a `}` at depth 0. Unbalanced braces are a bug in the caller.
    pub fn emit(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.blank();
            return;
        }
        let trimmed = line.trim();
        if trimmed.ends_with('}') {
            assert!(self.depth > 0, "unbalanced closing brace: {line:?}");
            self.depth -= 1;
        }
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(line);
        self.out.push('\n');
        if trimmed.ends_with('{') {
            self.depth += 1;
        }
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_lines_are_not_indented() {
        let mut w = CssWriter::new();
        w.emit("/* header */");
        w.emit("@import url(base.css);");
        assert_eq!(w.finish(), "/* header */\n@import url(base.css);\n");
    }

    #[test]
    fn nested_block_indents_one_tab() {
        let mut w = CssWriter::new();
        w.emit(":root {");
        w.emit("--x: 1rem;");
        w.emit("}");
        assert_eq!(w.depth(), 0);
        assert_eq!(w.finish(), ":root {\n\t--x: 1rem;\n}\n");
    }

    #[test]
    fn empty_block_closes_at_opening_indent() {
        let mut w = CssWriter::new();
        w.emit("@media print {");
        w.emit("p {");
        w.emit("}");
        w.emit("}");
        assert_eq!(w.finish(), "@media print {\n\tp {\n\t}\n}\n");
    }

    #[test]
    fn blank_line_keeps_depth() {
        let mut w = CssWriter::new();
        w.emit("a {");
        w.emit("");
        assert_eq!(w.depth(), 1);
        w.emit("color: red;");
        w.emit("}");
        assert_eq!(w.as_str(), "a {\n\n\tcolor: red;\n}\n");
    }

    #[test]
    fn trailing_whitespace_still_counts() {
        let mut w = CssWriter::new();
        w.emit("a {  ");
        assert_eq!(w.depth(), 1);
        w.emit("}\t");
        assert_eq!(w.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "unbalanced closing brace")]
    fn unmatched_close_panics() {
        let mut w = CssWriter::new();
        w.emit("}");
    }
}
