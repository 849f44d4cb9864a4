pub mod diet;
pub mod workout;

pub use diet::Diet;
pub use workout::{Workout, WorkoutTotals};
