pub mod aggregator;
pub mod discovery;
pub mod parallel_processor;
pub mod partitioner;
pub mod worker_scanner;

pub use aggregator::{Aggregator, ScanTotals};
pub use discovery::{discover, StationDiscovery};
pub use parallel_processor::{Aggregation, ParallelProcessor};
pub use partitioner::partition;
pub use worker_scanner::{UnknownStationPolicy, WorkerOutput, WorkerScanner};
