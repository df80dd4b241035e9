pub mod charts;
pub mod manager;
