//! Output sinks for commands.
//!
//! Regular output goes to one writer, warnings to another, so that the
//! binary can keep them on stdout and stderr while tests capture both.

use comfy_table::{presets::NOTHING, Cell, ContentArrangement, Table};
use std::io::{self, Stderr, Stdout, Write};

pub trait Ui {
    fn display_text(&mut self, text: &str) -> io::Result<()>;

    fn display_newline(&mut self) -> io::Result<()>;

    /// Write each warning on its own line to the error sink.
    fn display_warnings(&mut self, warnings: &[String]) -> io::Result<()>;

    /// Render `(key, value)` rows as two aligned columns, `padding` spaces
    /// after the widest key, every line starting with `prefix`.
    fn display_key_value_table(
        &mut self,
        prefix: &str,
        rows: &[(String, String)],
        padding: u16,
    ) -> io::Result<()>;
}

pub struct TerminalUi<O: Write, E: Write> {
    out: O,
    err: E,
}

impl TerminalUi<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalUi<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }
}

impl<O: Write, E: Write> Ui for TerminalUi<O, E> {
    fn display_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn display_newline(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn display_warnings(&mut self, warnings: &[String]) -> io::Result<()> {
        for warning in warnings {
            writeln!(self.err, "{}", warning)?;
        }
        self.err.flush()
    }

    fn display_key_value_table(
        &mut self,
        prefix: &str,
        rows: &[(String, String)],
        padding: u16,
    ) -> io::Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled);

        for (key, value) in rows {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }

        if let Some(column) = table.column_mut(0) {
            column.set_padding((0, padding));
        }
        if let Some(column) = table.column_mut(1) {
            column.set_padding((0, 0));
        }

        for line in table.to_string().lines() {
            let line = line.trim_end();
            // The borderless preset still emits blank separator lines
            if line.trim().is_empty() {
                continue;
            }
            writeln!(self.out, "{}{}", prefix, line)?;
        }

        Ok(())
    }
}
