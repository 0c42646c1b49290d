//! JSON persistence for the exr exchange-rate client.
//!
//! - [`JsonFormatter`] - Compact or four-space indented JSON
//! - [`to_json_file`] / [`from_json_file`] - Save and load JSON documents
//!
//! # Example
//!
//! ```no_run
//! use exr_format::{from_json_file, to_json_file};
//! use std::collections::BTreeMap;
//!
//! let names = BTreeMap::from([("EUR", "Euro"), ("USD", "US Dollar")]);
//! to_json_file("currencies.json", &names, true)?;
//!
//! let loaded: BTreeMap<String, String> = from_json_file("currencies.json")?;
//! # Ok::<(), exr_format::FormatError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
mod json;

pub use error::FormatError;
pub use file::{from_json_file, to_json_file};
pub use json::{INDENT, JsonFormatter};
