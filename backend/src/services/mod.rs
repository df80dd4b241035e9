pub mod recipes;
pub mod sync;
