mod types;

pub use types::{Fruit, NewFruit};
