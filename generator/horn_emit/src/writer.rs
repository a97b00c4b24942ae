//! Column-tracking output writer.

use std::io::{self, Write};

/// An output stream that tracks the current horizontal column.
///
/// Every write that crosses a newline resets the tracked column to zero, so
/// [`ColumnWriter::indent_to`] can pad (or wrap, when the line is already
/// past the target) to an exact column. One writer instance owns one output;
/// writes are strictly sequential.
pub struct ColumnWriter<W: Write> {
    out: W,
    column: usize,
}

impl<W: Write> ColumnWriter<W> {
    pub fn new(out: W) -> Self {
        ColumnWriter { out, column: 0 }
    }

    /// Current column, i.e. the number of characters on the open line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Write text; embedded newlines reset the column.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        let mut first = true;
        for segment in text.split('\n') {
            if !first {
                self.newline()?;
            }
            first = false;
            self.out.write_all(segment.as_bytes())?;
            self.column += segment.chars().count();
        }
        Ok(())
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.column = 0;
        Ok(())
    }

    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.newline()
    }

    /// Pad with spaces until the column reaches `target`; if the line is
    /// already past it, break the line first.
    pub fn indent_to(&mut self, target: usize) -> io::Result<()> {
        if target < self.column {
            self.newline()?;
        }
        while self.column < target {
            self.out.write_all(b" ")?;
            self.column += 1;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
