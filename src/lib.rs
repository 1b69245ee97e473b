pub mod app;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod report;
pub mod state;
pub mod ui;

pub use app::router;
pub use report::build_report;
pub use state::AppState;
