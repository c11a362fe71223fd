//! Template catalog and project materialization
//!
//! This module provides:
//! - The fixed catalog of project files (`CATALOG`) and their render functions
//! - Writing the rendered catalog into a fresh project directory

pub mod catalog;
pub mod materializer;

pub use catalog::{Content, Template, CATALOG, DIRECTORIES};
pub use materializer::{materialize, MaterializeError};
