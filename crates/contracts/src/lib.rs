pub mod dashboards;
pub mod sales;
