//! Pattern services that need the user store.
//!
//! - `CounterResolver` - next counter of a signature's sequence
//! - `PatternGenerator` - split + counter, producing a record to insert

mod counter_resolver;
mod pattern_generator;

pub use counter_resolver::CounterResolver;
pub use pattern_generator::PatternGenerator;
