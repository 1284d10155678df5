pub mod chart;
pub mod header;
pub mod login_button;
pub mod logout_button;
pub mod page_meta;
pub mod pager;
pub mod progress;
pub mod query_form;
pub mod require_auth;
pub mod theme_toggle;

pub use chart::MonthlyChart;
pub use header::Header;
pub use page_meta::PageMeta;
pub use pager::Pager;
pub use progress::CircularProgress;
pub use query_form::QueryForm;
pub use require_auth::RequireAuth;
