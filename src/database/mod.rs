pub mod medium;
pub mod seed;
