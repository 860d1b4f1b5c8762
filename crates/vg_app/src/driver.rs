use crate::actions::{dispatch, AppAction};
use crate::state::AppState;

pub struct AppDriver {
    state: AppState,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppSnapshot {
    pub total_rows: usize,
    pub derived_rows: usize,
    pub filter: String,
    pub sort_ascending: bool,
    pub scroll_offset: f32,
    pub window_start: usize,
    pub window_end: usize,
    pub file_status: String,
}

impl Default for AppDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDriver {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), String> {
        dispatch(&mut self.state, action)
    }

    pub fn derived_ids(&mut self) -> Vec<String> {
        (0..self.state.derived_len())
            .map(|idx| {
                self.state
                    .derived_row(idx)
                    .map(|row| row.id.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    pub fn snapshot(&mut self) -> AppSnapshot {
        let window = self.state.visible_window();
        AppSnapshot {
            total_rows: self.state.row_count(),
            derived_rows: self.state.derived_len(),
            filter: self.state.filter().to_string(),
            sort_ascending: self.state.sort_direction().is_ascending(),
            scroll_offset: self.state.scroll_offset(),
            window_start: window.start,
            window_end: window.end,
            file_status: self.state.file_status.clone(),
        }
    }
}
