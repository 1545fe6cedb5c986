pub mod nutrition;
pub mod profile;
pub mod workout;
