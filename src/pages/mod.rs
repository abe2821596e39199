mod technologies;

pub use technologies::Technologies;
