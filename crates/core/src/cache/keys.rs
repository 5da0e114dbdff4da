/// Cache key holding the JSON-encoded list of fruit names.
pub const FRUITS_KEY: &str = "fruits";
