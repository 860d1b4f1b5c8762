use vg_core::model::Row;
use vg_core::view_model::{derive_view, SortDirection};
use vg_core::virtual_list::{virtual_window, VirtualWindow};

pub const ROW_HEIGHT: f32 = 50.0;
pub const VIEWPORT_HEIGHT: f32 = 600.0;
pub const BUFFER_ROWS: usize = 5;

pub struct AppState {
    rows: Vec<Row>,
    filter: String,
    sort_direction: SortDirection,
    scroll_offset: f32,

    pub file_status: String,

    derived_cache: Vec<usize>,
    derived_cache_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            filter: String::new(),
            sort_direction: SortDirection::default(),
            scroll_offset: 0.0,
            file_status: String::new(),
            derived_cache: Vec::new(),
            derived_cache_dirty: true,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.invalidate_derived_cache();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter.clear();
        self.filter.push_str(filter);
        self.invalidate_derived_cache();
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
        self.invalidate_derived_cache();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    // Scroll never touches the derived cache.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn derived_len(&mut self) -> usize {
        self.ensure_derived_cache();
        self.derived_cache.len()
    }

    pub fn derived_row(&mut self, idx: usize) -> Option<&Row> {
        self.ensure_derived_cache();
        let row_idx = *self.derived_cache.get(idx)?;
        self.rows.get(row_idx)
    }

    pub fn visible_window(&mut self) -> VirtualWindow {
        let total = self.derived_len();
        virtual_window(
            total,
            ROW_HEIGHT,
            VIEWPORT_HEIGHT,
            self.scroll_offset,
            BUFFER_ROWS,
        )
    }

    fn invalidate_derived_cache(&mut self) {
        self.derived_cache_dirty = true;
    }

    fn ensure_derived_cache(&mut self) {
        if !self.derived_cache_dirty {
            return;
        }
        self.derived_cache = derive_view(&self.rows, &self.filter, self.sort_direction);
        self.derived_cache_dirty = false;
    }
}

pub fn validated_label(row: &Row) -> &'static str {
    if row.validated {
        "✅"
    } else {
        "❌"
    }
}

pub fn instances_label(row: &Row) -> String {
    row.instances
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn timestamp_label(row: &Row) -> &str {
    match row.metadata.inspect_timestamp.as_deref() {
        Some(ts) if !ts.is_empty() => ts,
        _ => "—",
    }
}
