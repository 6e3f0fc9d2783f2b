//! GEM table sources, parsing and indexing.
//!
//! # Example
//!
//! ```ignore
//! use gem_standards::{DirectionalIndex, GemSources, KeyColumn, load_table};
//! use gem_model::{CodeFamily, Direction};
//!
//! let sources = GemSources::from_dir(&gem_standards::tables_root("2018"), "2018");
//! let table = load_table(sources.path(CodeFamily::Cm, Direction::Forward))?;
//! let index = DirectionalIndex::build(&table, KeyColumn::Source);
//! let pairs = index.lookup("0010");
//! ```

#![deny(unsafe_code)]

mod error;
mod index;
mod loader;
mod paths;
mod sources;

pub use error::{Result, TableError};
pub use index::{DirectionalIndex, KeyColumn};
pub use loader::{load_table, parse_record, parse_table};
pub use paths::{DEFAULT_RELEASE, TABLES_ENV_VAR, tables_root};
pub use sources::{FamilySources, GemSources, table_file_name};
