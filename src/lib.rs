pub mod cells;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod sample;
pub mod table;

pub use config::ReportConfig;
pub use error::ReportError;
pub use report::{update_report, update_spreadsheet};
pub use sample::{generate_sample, write_sample};
pub use table::Table;
