//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use spgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::kotlin()
///     .line("class Foo {")
///     .indent()
///     .line("val x = 1")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Foo {\n    val x = 1\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// ```
    /// use spgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::kotlin()
    ///     .block_with_close("get() {", "}", |b| b.line("return 1"))
    ///     .build();
    ///
    /// assert_eq!(code, "get() {\n    return 1\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a multi-line block comment (`/** ... */`), one ` * ` line per entry.
    pub fn block_doc<'a, I>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let builder = self.line("/**");
        lines
            .into_iter()
            .fold(builder, |b, text| {
                if text.is_empty() {
                    b.line(" *")
                } else {
                    b.line(&format!(" * {}", text))
                }
            })
            .line(" */")
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
