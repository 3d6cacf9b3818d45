pub mod charts;
pub mod dashboard;
pub mod filters;
pub mod logs_table;
pub mod state;
pub mod stats_cards;
pub mod suspicious_ips;
