mod validation;

pub use validation::parse_source;
