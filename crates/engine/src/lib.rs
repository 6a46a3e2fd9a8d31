//! # GoDoc Engine
//!
//! Documentation queries over a loaded Go package graph.
//!
//! The engine reconciles the two views the loader builds of every package:
//! the symbol scope (objects, signatures, no comments) and the declaration
//! forest (doc comments, example bodies). Queries are pure reads over the
//! immutable [`DocEngine`], so they can run concurrently without locking.
//!
//! ## Queries
//!
//! - [`DocEngine::list_packages`] - packages with their package comments
//! - [`DocEngine::inspect_package`] - exported structs, functions, methods
//! - [`DocEngine::struct_doc`] - one struct with fields and methods
//! - [`DocEngine::func_doc`] - one function with usage examples
//! - [`DocEngine::method_doc`] - one method, receiver looked up first
//! - [`DocEngine::const_and_var_doc`] - package constants and variables

mod comment;
mod doc;
mod error;
mod example;
mod index;
pub mod render;

pub use comment::comment_for;
pub use doc::{
    ConstDoc, FieldDoc, FuncDoc, FuncSummary, MethodDoc, MethodDocDetail, MethodSummary,
    PackageInfo, PackageInspection, StructDoc, StructSummary, VarDoc,
};
pub use error::{QueryError, Result};
pub use example::{examples_for, ExampleDoc, EXAMPLE_PREFIX, OUTPUT_MARKER};
pub use index::DocEngine;
