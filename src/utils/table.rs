//! Table rendering for CLI outputs.
//!
//! Widths are measured with unicode-width since roster data contains
//! non-ASCII role names ("Dueño").

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut w: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                w[i] = w[i].max(cell.width());
            }
        }
        w
    }

    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(cell.width());
        format!("{}{}", cell, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&Self::pad(h, *w));
            out.push_str("  ");
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&Self::pad(cell, *w));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_with_wide_content() {
        let mut t = Table::new(vec!["Name", "Role"]);
        t.add_row(vec!["Ana".into(), "Dueño".into()]);
        t.add_row(vec!["Bartolomé".into(), "DJ".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].contains("Dueño"));
        // all rows render to the same visible width
        assert_eq!(lines[2].width(), lines[3].width());
    }
}
