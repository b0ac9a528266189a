//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header and rows. The last column may span several lines
    /// when its cell contains newlines; continuation lines are indented
    /// under it.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let indent: usize = self
            .columns
            .iter()
            .take(self.columns.len().saturating_sub(1))
            .map(|c| c.width + 1)
            .sum();

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let mut lines = cell.lines();
                let first = lines.next().unwrap_or("");
                let rendered = match col.align {
                    Align::Left => pad_right(first, col.width),
                    Align::Right => pad_left(first, col.width),
                };
                out.push_str(&rendered);
                out.push(' ');

                for more in lines {
                    out.push('\n');
                    out.push_str(&" ".repeat(indent));
                    out.push_str(more);
                }
            }
            out.push('\n');
        }

        out
    }
}
