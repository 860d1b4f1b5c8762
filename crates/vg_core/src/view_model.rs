use crate::model::Row;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

pub fn derive_view(rows: &[Row], filter: &str, direction: SortDirection) -> Vec<usize> {
    // A blank filter keeps everything; otherwise the text is matched verbatim.
    let mut indices: Vec<usize> = if filter.trim().is_empty() {
        (0..rows.len()).collect()
    } else {
        let needle = filter.to_lowercase();
        rows.iter()
            .enumerate()
            .filter(|(_, row)| row.id.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    };

    indices.sort_by(|&a, &b| match direction {
        SortDirection::Ascending => rows[a].id.cmp(&rows[b].id),
        SortDirection::Descending => rows[b].id.cmp(&rows[a].id),
    });
    indices
}
