// Cuckoo benchmark log statistics
// Cuckoo 基准测试日志统计

#![cfg_attr(docsrs, feature(doc_cfg))]

mod conf;
mod dup;
mod error;
mod mark;
mod path;
mod report;
mod stats;
mod tput;

pub use conf::{Conf, Kind, LoadAxis, Split, TPUT_SAMPLES, TagConf};
pub use dup::{DupReport, dup_file, dup_lines};
pub use error::{Error, Result};
pub use mark::Mark;
pub use path::{PathReport, SegStats, path_file, path_files, path_lines};
pub use report::{Batch, Skip, Table, fmt_num, fmt_stats, pct_label};
pub use stats::{RANKS, Stats, percentile, rate};
pub use tput::{Curve, Sweep, sweep};

pub use bench_agg::Combine;
pub use bench_seg::Small;
