//! Code list ingestion utilities.
//!
//! Finds code list files under a batch root and reads them into
//! deduplicated code lists ready for the crosswalk engine.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gem_ingest::{discover_code_files, read_code_list};
//!
//! for path in discover_code_files(Path::new("ICD-9-cm_source"))? {
//!     let codes = read_code_list(&path)?;
//! }
//! ```

mod codes;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Code Lists ===
pub use codes::{parse_code_list, read_code_list};

// === File Discovery ===
pub use discovery::discover_code_files;
