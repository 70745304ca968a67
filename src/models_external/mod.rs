pub mod members;
pub mod clubs;
