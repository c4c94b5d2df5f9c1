use indexmap::IndexMap;

/// A worksheet snapshot: one header row plus data rows, all strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Table { headers, rows }
    }

    /// Build a table from raw sheet values (first row is the header).
    /// Headers are trimmed; duplicates get `_2`, `_3`... suffixes so
    /// every column stays addressable by name.
    pub fn from_values(values: &[Vec<String>]) -> Self {
        let Some((header_row, data)) = values.split_first() else {
            return Table::default();
        };
        Table {
            headers: clean_headers(header_row),
            rows: data.to_vec(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Project onto the given columns, in the given order. Columns the
    /// table does not have are skipped.
    pub fn select(&self, columns: &[&str]) -> Table {
        let picked: Vec<usize> = columns
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        let headers = picked.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                picked
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Table { headers, rows }
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        let row = self.rows.get(row)?;
        Some(row.get(col).map(String::as_str).unwrap_or(""))
    }

    /// One data row as an ordered name -> value map.
    pub fn row_map(&self, row: usize) -> Option<IndexMap<String, String>> {
        let row = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect(),
        )
    }
}

fn clean_headers(raw: &[String]) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    raw.iter()
        .map(|h| {
            let trimmed = h.trim().to_string();
            let n = counts.entry(trimmed.clone()).or_insert(0);
            *n += 1;
            if *n > 1 {
                format!("{}_{}", trimmed, n)
            } else {
                trimmed
            }
        })
        .collect()
}
