//! Displayed record collections and plain-text table layout

use chrono::{DateTime, Utc};

use crate::utils::helpers::{normalize_whitespace, truncate_text};

/// Widest a single cell may grow before it is truncated
pub const MAX_CELL_WIDTH: usize = 40;

/// Records currently on display, in server order
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            refreshed_at: None,
        }
    }
}

impl<T> Table<T> {
    /// Replace every row with a fresh load
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.refreshed_at = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.refreshed_at = None;
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `None` until the first successful load
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.rows.iter().find(predicate)
    }
}

/// Column-aligned text table
#[derive(Debug, Clone)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        let cells = cells
            .into_iter()
            .map(|cell| truncate_text(&normalize_whitespace(&cell), MAX_CELL_WIDTH))
            .collect();
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&format_line(&self.headers, &widths));
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_line(row, &widths));
            out.push('\n');
        }
        out
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
