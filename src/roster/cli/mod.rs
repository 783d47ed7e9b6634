//! Terminal output for the roster binary. Not part of the library API.

pub mod print;
