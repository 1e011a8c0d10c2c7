// Benchmark log line classifier
// 基准测试日志行分类器

#![cfg_attr(docsrs, feature(doc_cfg))]

mod classify;
mod error;
mod quantity;
mod rule;

pub use classify::{Classifier, Extracted};
pub use error::{Error, Reason, Result};
pub use quantity::{Quantity, Sample, Series};
pub use rule::{Field, Rule};
