//! DOGS implementation of the (weighted) Set Cover problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// set cover instance, solutions and checker
pub mod cover;

/// random instance generator
pub mod generator;

/// read/write OR-Library instances and solutions
pub mod orlib;

/// error type of the crate
pub mod errors;

/// tracing initialization
pub mod logger;

/// stopping criteria for the search procedures
pub mod stopping;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the set cover problem
pub mod search;
