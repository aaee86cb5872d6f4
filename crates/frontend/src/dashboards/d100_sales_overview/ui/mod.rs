pub mod dashboard;
pub mod filters;
pub mod metrics;
pub mod table;

pub use dashboard::SalesOverviewDashboard;
