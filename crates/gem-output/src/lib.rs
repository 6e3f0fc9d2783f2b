#![deny(unsafe_code)]

//! Output writers for crosswalk results.

mod csv_table;
mod error;
mod naming;

pub use csv_table::{OUTPUT_COLUMNS, render_csv, write_csv, write_rows};
pub use error::{OutputError, Result};
pub use naming::{TIMESTAMP_FORMAT, format_timestamp, output_file_name, timestamped_output_path};
