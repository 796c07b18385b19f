//! Aligned markdown tables.
//!
//! Every column is padded to its widest cell so the pipes line up in the
//! raw file, and the delimiter row carries the column alignment.

use std::fmt;

use tfreadme_core::application::ApplicationError;

/// Column alignment, encoded in the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    None,
    Left,
    Right,
    Center,
}

impl Align {
    fn delimiter(self, width: usize) -> String {
        let width = width.max(MIN_WIDTH);
        match self {
            Self::None => "-".repeat(width),
            Self::Left => format!(":{}", "-".repeat(width - 1)),
            Self::Right => format!("{}:", "-".repeat(width - 1)),
            Self::Center => format!(":{}:", "-".repeat(width - 2)),
        }
    }
}

/// Delimiter cells need room for two colons and a dash.
const MIN_WIDTH: usize = 3;

/// A table cell before column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Flag(bool),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Renders flags as `yes` / `no`.
pub fn yes_no(cell: &Cell) -> String {
    match cell {
        Cell::Flag(true) => "yes".into(),
        Cell::Flag(false) => "no".into(),
        Cell::Text(s) => s.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub align: Align,
    pub mapping: Option<fn(&Cell) -> String>,
}

impl Column {
    pub fn new(name: impl Into<String>, align: Align) -> Self {
        Self {
            name: name.into(),
            align,
            mapping: None,
        }
    }

    pub fn with_mapping(mut self, mapping: fn(&Cell) -> String) -> Self {
        self.mapping = Some(mapping);
        self
    }

    fn format(&self, cell: &Cell) -> String {
        match self.mapping {
            Some(map) => map(cell),
            None => cell.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl MarkdownTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Render header, delimiter and rows, one line each, newline-terminated.
    pub fn render(&self) -> Result<String, ApplicationError> {
        if self.columns.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: "no columns to render".into(),
            });
        }

        let header: Vec<String> = self.columns.iter().map(|c| escape(&c.name)).collect();
        let body = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != self.columns.len() {
                    return Err(ApplicationError::RenderingFailed {
                        reason: format!(
                            "row {} has {} cells, expected {}",
                            i + 1,
                            row.len(),
                            self.columns.len()
                        ),
                    });
                }
                Ok(self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| escape(&column.format(cell)))
                    .collect::<Vec<_>>())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| {
                std::iter::once(&header)
                    .chain(&body)
                    .map(|line| line[i].chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(MIN_WIDTH)
            })
            .collect();

        let delimiter: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| column.align.delimiter(width))
            .collect();

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        push_line(&mut out, &delimiter, &widths);
        for line in &body {
            push_line(&mut out, line, &widths);
        }
        Ok(out)
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, &width) in cells.iter().zip(widths) {
        out.push_str(&format!(" {cell:<width$} |"));
    }
    out.push('\n');
}

/// Make arbitrary text safe for a single table cell.
fn escape(text: &str) -> String {
    text.trim()
        .replace("\r\n", "\n")
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}
