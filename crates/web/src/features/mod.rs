pub mod diets;
pub mod home;
pub mod workouts;
