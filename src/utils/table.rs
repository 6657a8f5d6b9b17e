//! Table rendering utilities for CLI outputs.

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<(String, String)>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Label right-aligned across all but the last column, value in the last one.
    pub fn set_footer(&mut self, label: &str, value: &str) {
        self.footer = Some((label.to_string(), value.to_string()));
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn cell(value: &str, width: usize, align: &Align) -> String {
        match align {
            Align::Left => format!("{:<width$}", value, width = width),
            Align::Right => format!("{:>width$}", value, width = width),
        }
    }

    pub fn render(&self) -> String {
        let mut widths = self.widths();
        if let (Some((_, value)), Some(last)) = (&self.footer, widths.last_mut()) {
            *last = (*last).max(value.chars().count());
        }
        let total_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| Self::cell(&col.header, *w, &col.align))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');
        out.push_str(&self.separator.to_string().repeat(total_width));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    Self::cell(row.get(i).map(String::as_str).unwrap_or(""), *w, &col.align)
                })
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        if let Some((label, value)) = &self.footer {
            let last_w = widths.last().copied().unwrap_or(0);
            let label_w = total_width.saturating_sub(last_w + 3);
            out.push_str(&self.separator.to_string().repeat(total_width));
            out.push('\n');
            out.push_str(&format!(
                "{:>label_w$} | {:>last_w$}\n",
                label,
                value,
                label_w = label_w,
                last_w = last_w
            ));
        }

        out
    }
}
