//! Minimal indented XML writer
//!
//! Output is built into a `String` in one pass. Attribute order is the order
//! given by the caller, so the output is deterministic.

/// Indented XML builder.
pub struct XmlWriter {
    output: String,
    depth: usize,
}

impl XmlWriter {
    /// Starts a document with the XML declaration.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        Self { output, depth: 0 }
    }

    /// `<tag attrs...>` and descend.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.start_tag(tag, attrs);
        self.output.push_str(">\n");
        self.depth += 1;
    }

    /// `</tag>` and ascend.
    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
    }

    /// `<tag attrs...>text</tag>` on one line.
    pub fn leaf(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.indent();
        self.start_tag(tag, attrs);
        self.output.push('>');
        escape_into(&mut self.output, text);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.output.push('<');
        self.output.push_str(tag);
        for (key, value) in attrs {
            self.output.push(' ');
            self.output.push_str(key);
            self.output.push_str("=\"");
            escape_into(&mut self.output, value);
            self.output.push('"');
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for use in both element content and attribute values.
pub fn escape_into(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            '\n' | '\r' | '\t' => output.push_str(&format!("&#{};", c as u32)),
            // Not representable in XML 1.0
            c if c.is_control() => {}
            c => output.push(c),
        }
    }
}
