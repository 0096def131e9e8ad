pub mod chart;
pub mod money;
pub mod table;
pub mod views;

pub use chart::BarChart;
pub use money::{format_money, format_signed_money};
pub use table::{Table, TableColumn, TableRenderer};
