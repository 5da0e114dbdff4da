pub mod load_fruits;
pub mod serve;
