// Test fixtures: small corpora with hand-checked rankings

/// Three lines; only the first contains the whole word "cat"
#[allow(dead_code)]
pub const ANIMALS: &str = "the cat sat\nthe dog ran\ncats and dogs";

/// Two lines without any words
#[allow(dead_code)]
pub const NUMBERS_ONLY: &str = "123\n456";

/// "apple" occurs in every line, "banana" only in the first
#[allow(dead_code)]
pub const FRUIT: &str = "apple banana\napple apple";
