//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod chip;
pub mod edit_dialog;
pub mod entity_table;
pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod toast;
pub mod topbar;

pub use chart::{AreaChart, BarChart, LineChart, PieChart};
pub use chip::Chip;
pub use edit_dialog::EditDialog;
pub use entity_table::{EntityTable, Pager};
pub use loading::{CardSkeleton, PageSkeleton};
pub use sidebar::Sidebar;
pub use stat_card::StatCardView;
pub use toast::Toast;
pub use topbar::TopBar;
