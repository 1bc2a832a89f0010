mod report;
mod throughput;

pub use report::*;
pub use throughput::*;
