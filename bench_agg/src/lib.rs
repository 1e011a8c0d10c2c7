// Trial aggregation across benchmark log files
// 跨基准日志文件的试验聚合

#![cfg_attr(docsrs, feature(doc_cfg))]

mod agg;
mod combine;
mod error;
mod group;

pub use agg::{Aggregator, GroupRun};
pub use combine::{Combine, Combined, Trial, combine};
pub use error::{Error, Result};
pub use group::{Group, discover, group_paths};
