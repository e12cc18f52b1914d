//! Verification Module
//! Author: kartik4091

pub mod validator;

pub use validator::{is_valid, validate};
