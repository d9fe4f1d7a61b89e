use crate::html;
use crate::Options;

use std::cell::Cell;
use std::io;
use std::io::Write;

/// Output state for one page render.
pub struct Context<'o> {
    output: &'o mut dyn Write,
    last_was_lf: Cell<bool>,

    /// The options the page is rendered with.
    pub options: &'o Options,
}

impl<'o> Context<'o> {
    /// Wraps `output` for rendering with `options`.
    pub fn new(output: &'o mut dyn Write, options: &'o Options) -> Self {
        Context {
            output,
            last_was_lf: Cell::new(true),
            options,
        }
    }

    /// Writes a newline unless the last byte written was one.
    pub fn cr(&mut self) -> io::Result<()> {
        if !self.last_was_lf.get() {
            self.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes `text` with HTML special characters escaped.
    pub fn escape(&mut self, text: &str) -> io::Result<()> {
        html::escape(self, text)
    }
}

impl<'o> Write for Context<'o> {
    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let l = buf.len();
        if l > 0 {
            self.last_was_lf.set(buf[l - 1] == 10);
        }
        self.output.write(buf)
    }
}

impl<'o> std::fmt::Debug for Context<'o> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        formatter.write_str("<taoquiz::html::Context>")
    }
}
