pub mod accumulator;
pub mod range;
pub mod station;
pub mod summary;

pub use accumulator::{new_table, Accumulator, AccumulatorTable};
pub use range::WorkerRange;
pub use station::{hash_name, StationId, StationRegistry};
pub use summary::StationSummary;
