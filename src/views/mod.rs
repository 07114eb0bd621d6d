//! View Renderers
//!
//! Plain-text renderings of the dashboard state. Each renderer reads a
//! `DashboardState` (or one of its parts) and returns a `String`; none of them
//! mutate state.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Summary                                  │
//! ├──────────────────────────────────────────┤
//! │ Charts (distribution, averages, trend)   │
//! ├──────────────────────────────────────────┤
//! │ Table (10 rows per page) + page numbers  │
//! ├──────────────────────────────────────────┤
//! │ Notices                                  │
//! └──────────────────────────────────────────┘
//! ```

mod charts;
mod history;
mod notices;
mod summary;
mod table;

pub use charts::*;
pub use history::*;
pub use notices::*;
pub use summary::*;
pub use table::*;

use crate::state::{DashboardState, View};

/// Render the active view of a state snapshot
pub fn render(state: &DashboardState) -> String {
    match state.view() {
        View::Overview => render_overview(state),
        View::History => render_history(state.history()),
        View::Upload => format!(
            "{}\nSelect a CSV file (max 5MB) to upload.\n",
            View::Upload.title()
        ),
    }
}

/// Summary, charts and the current table page
pub fn render_overview(state: &DashboardState) -> String {
    let dataset = state.dataset().map(|d| d.as_ref());
    let mut out = String::new();
    out.push_str(&render_summary(dataset));
    out.push('\n');
    out.push_str(&render_charts(&state.charts()));
    out.push('\n');
    out.push_str(&render_table(state.table()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    #[test]
    fn renders_active_view() {
        let state = DashboardState::new();
        let overview = render(&state);
        assert!(overview.contains(NO_SUMMARY));
        assert!(overview.contains(NO_CHART_DATA));
        assert!(overview.contains(NO_TABLE_DATA));

        let history = render(&state.reduce(Action::ShowView(View::History)));
        assert_eq!(history.trim_end(), NO_HISTORY);
    }
}
