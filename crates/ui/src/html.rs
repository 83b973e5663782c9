//! Minimal escaping HTML writer.

/// Escape text content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Join the present, non-empty class names with spaces.
pub fn classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let joined = parts
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Append-only markup buffer. Attributes with a `None` value are skipped.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buf: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, Option<&str>)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            if let Some(value) = value {
                self.buf.push(' ');
                self.buf.push_str(name);
                self.buf.push_str("=\"");
                self.buf.push_str(&escape(value));
                self.buf.push('"');
            }
        }
        self.buf.push('>');
    }

    pub fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &str, attrs: &[(&str, Option<&str>)], text: &str) {
        self.open(tag, attrs);
        self.text(text);
        self.close(tag);
    }

    pub fn text(&mut self, text: &str) {
        self.buf.push_str(&escape(text));
    }

    /// Append already-rendered markup.
    pub fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
