pub mod generate;
pub mod recipes;
