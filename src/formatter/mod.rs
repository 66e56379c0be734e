//! # Formatters
//!
//! Render parsed tables as text. Every formatter shares the same layout for a
//! table set: the header hook, then each table wrapped in the table header and
//! table footer hooks (tables separated by a blank line), then the footer hook.
use crate::database::Table;
use crate::database::TableSet;
use crate::error::TdconvError;
use std::io;
use std::io::Write;

pub mod go;
pub mod sql;

pub use go::GoFormatter;
pub use sql::SqlFormatter;

/// Writes text around a whole table set.
pub type TableSetHook = Box<dyn Fn(&mut dyn Write, &TableSet) -> io::Result<()> + Send + Sync>;
/// Writes text around a single table.
pub type TableHook = Box<dyn Fn(&mut dyn Write, &Table) -> io::Result<()> + Send + Sync>;

/// Pluggable text producers wrapped around the rendered tables.
#[derive(Default)]
pub struct Hooks {
    pub header: Option<TableSetHook>,
    pub table_header: Option<TableHook>,
    pub table_footer: Option<TableHook>,
    pub footer: Option<TableSetHook>,
}

/// Replaces one hook of a formatter.
pub enum FormatOption {
    Header(TableSetHook),
    TableHeader(TableHook),
    TableFooter(TableHook),
    Footer(TableSetHook),
}

impl FormatOption {
    pub fn header<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write, &TableSet) -> io::Result<()> + Send + Sync + 'static,
    {
        FormatOption::Header(Box::new(f))
    }

    pub fn table_header<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write, &Table) -> io::Result<()> + Send + Sync + 'static,
    {
        FormatOption::TableHeader(Box::new(f))
    }

    pub fn table_footer<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write, &Table) -> io::Result<()> + Send + Sync + 'static,
    {
        FormatOption::TableFooter(Box::new(f))
    }

    pub fn footer<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write, &TableSet) -> io::Result<()> + Send + Sync + 'static,
    {
        FormatOption::Footer(Box::new(f))
    }
}

impl Hooks {
    /// Starts from the given header and applies the options in order.
    pub(crate) fn new(header: TableSetHook, options: impl IntoIterator<Item = FormatOption>) -> Self {
        let mut hooks = Hooks {
            header: Some(header),
            ..Default::default()
        };
        for option in options {
            match option {
                FormatOption::Header(hook) => hooks.header = Some(hook),
                FormatOption::TableHeader(hook) => hooks.table_header = Some(hook),
                FormatOption::TableFooter(hook) => hooks.table_footer = Some(hook),
                FormatOption::Footer(hook) => hooks.footer = Some(hook),
            }
        }
        hooks
    }
}

fn call_set_hook(hook: &Option<TableSetHook>, w: &mut dyn Write, set: &TableSet) -> io::Result<()> {
    match hook {
        Some(hook) => hook(w, set),
        None => Ok(()),
    }
}

fn call_table_hook(hook: &Option<TableHook>, w: &mut dyn Write, table: &Table) -> io::Result<()> {
    match hook {
        Some(hook) => hook(w, table),
        None => Ok(()),
    }
}

/// Renders tables into one target language.
pub trait Formatter {
    /// File extension of the rendered output, without the dot.
    fn extension(&self) -> &'static str;

    fn hooks(&self) -> &Hooks;

    /// Writes the body of one table, without table hooks.
    fn write_table(&self, w: &mut dyn Write, table: &Table) -> io::Result<()>;
}

/// Writes one table wrapped in the table hooks. Absent input writes nothing.
pub fn write_table<F: Formatter + ?Sized>(formatter: Option<&F>, w: &mut dyn Write, table: Option<&Table>) -> io::Result<()> {
    let (Some(formatter), Some(table)) = (formatter, table) else {
        return Ok(());
    };
    let hooks = formatter.hooks();
    call_table_hook(&hooks.table_header, w, table)?;
    formatter.write_table(w, table)?;
    call_table_hook(&hooks.table_footer, w, table)
}

/// Writes a whole table set: header, every table, footer.
pub fn write_table_set<F: Formatter + ?Sized>(formatter: &F, w: &mut dyn Write, set: &TableSet) -> io::Result<()> {
    call_set_hook(&formatter.hooks().header, w, set)?;
    for (index, table) in set.tables.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        write_table(Some(formatter), w, Some(table))?;
    }
    call_set_hook(&formatter.hooks().footer, w, set)
}

/// Renders a table set into a string.
pub fn render<F: Formatter + ?Sized>(formatter: &F, set: &TableSet) -> Result<String, TdconvError> {
    let mut buffer = Vec::new();
    write_table_set(formatter, &mut buffer, set)?;
    Ok(String::from_utf8(buffer)?)
}
