use std::path::PathBuf;

use vg_core::dataset::parse_rows;
use vg_core::model::Row;

use crate::state::AppState;

const BUNDLED_DATASET: &str = include_str!("../data/assessment_data.json");

pub enum AppAction {
    SetFilter(String),
    ToggleSortDirection,
    SetScrollOffset(f32),
    LoadBundled,
    LoadDataset(PathBuf),
}

pub fn dispatch(state: &mut AppState, action: AppAction) -> Result<(), String> {
    match action {
        AppAction::SetFilter(filter) => {
            state.set_filter(&filter);
        }
        AppAction::ToggleSortDirection => {
            state.toggle_sort_direction();
        }
        AppAction::SetScrollOffset(offset) => {
            state.set_scroll_offset(offset);
        }
        AppAction::LoadBundled => {
            let rows = bundled_rows()?;
            let count = rows.len();
            state.set_rows(rows);
            state.file_status = format!("Loaded bundled dataset ({count} rows)");
        }
        AppAction::LoadDataset(path) => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|err| format!("read {}: {err}", path.display()))?;
            let rows = parse_rows(&contents)?;
            let count = rows.len();
            state.set_rows(rows);
            state.file_status = format!("Loaded {} ({count} rows)", path.display());
        }
    }
    Ok(())
}

pub fn bundled_rows() -> Result<Vec<Row>, String> {
    parse_rows(BUNDLED_DATASET)
}
