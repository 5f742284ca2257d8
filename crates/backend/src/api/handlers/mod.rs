// Dashboard handlers (d500-d503)
pub mod dashboards;
