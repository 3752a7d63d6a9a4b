//! Plain-text table rendering for `dpr list`.

/// Column widths grow to the widest cell, capped so one long
/// description cannot blow up the whole layout.
const MAX_COL_WIDTH: usize = 42;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count()).min(MAX_COL_WIDTH);
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (header, w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("{:<w$}  ", header, w = w));
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&format!("{:<w$}  ", cell, w = w));
            }
            out.push('\n');
        }

        out
    }
}
