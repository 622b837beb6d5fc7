pub mod executor;
pub mod harvest;
pub mod model;
pub mod traits;

// Re-export common types for convenience
pub use executor::*;
pub use model::*;
pub use traits::*;
