//! # Integration tests that require a look inside the crate.
//!
//! Each problem is followed through the whole pipeline. Convention for function names:
//!
//! * `const PROBLEM_STRING`
//! * `fn program()`
//! * `fn eliminated_<n>()`: the program after eliminating `n` variables, with its records
//! * `fn certificate()`
