// Error types for bench_stat
// bench_stat 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// Statistics over zero samples / 对零个样本求统计
  #[error("no data")]
  EmptySegment,

  /// Rate denominator sums to zero / 比率分母之和为零
  #[error("undefined: denominator sums to zero")]
  DivisionByZero,

  #[error("percentile rank {0} not in [0, 100]")]
  BadRank(f64),

  #[error("{0}")]
  Log(#[from] bench_log::Error),

  #[error("{0}")]
  Seg(#[from] bench_seg::Error),

  #[error("{0}")]
  Agg(#[from] bench_agg::Error),

  #[error("JSON error: {0}")]
  Json(#[from] sonic_rs::Error),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
