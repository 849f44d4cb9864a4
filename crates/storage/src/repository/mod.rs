pub mod diet;
pub mod workout;
