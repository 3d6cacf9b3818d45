pub mod api;
pub mod csv;
pub mod pipeline;
pub mod stats;
pub mod ui;
