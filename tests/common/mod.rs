// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: Not every test binary uses every helper
#[allow(unused_imports)]
pub use fixtures::{ANIMALS, FRUIT, NUMBERS_ONLY};
#[allow(unused_imports)]
pub use helpers::{create_test_services, score_of, write_corpus};
