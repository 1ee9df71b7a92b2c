pub mod encode;

pub const SEPARATOR: &str = "--------------------------------------------------";
