// Error types for bench_seg
// bench_seg 错误类型

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// Fewer samples than segments / 样本数少于分段数
  #[error("insufficient data: {n} samples for {k} segments")]
  Insufficient { n: usize, k: usize },

  #[error("segment count must be > 0")]
  ZeroSegments,

  #[error("bad breakpoints: {0}")]
  BadBreakpoints(String),

  /// Band names key report rows / 区间名作为报表行键
  #[error("duplicate band name: {0}")]
  DupBand(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
