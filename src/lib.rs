//! # matrix-preview
//!
//! Resolves the provider and environment selections of a deployment
//! workflow and previews the resulting build matrix.
//!
//! ```
//! use matrix_preview::{Matrix, MatrixDefaults};
//!
//! let matrix = Matrix::resolve("aws, gcp", "", &MatrixDefaults::default());
//! assert_eq!(matrix.len(), 4);
//! ```

pub use crate::config::MatrixDefaults;
pub use crate::errors::MatrixError;
pub use crate::matrix::{combinations, Combination, Matrix};
pub use crate::selection::selected_list;

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod matrix;
pub mod pack;
pub mod selection;
