pub mod common;
pub mod diet;
pub mod validation;
pub mod workout;
