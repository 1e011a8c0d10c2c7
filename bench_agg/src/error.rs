// Error types for bench_agg
// bench_agg 错误类型

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// A trial has fewer samples than the group needs
  /// 某次试验的样本数少于组所需
  #[error("group {tag}: {} has {found} samples, expected {expected}", .path.display())]
  SampleCountMismatch {
    tag: String,
    path: PathBuf,
    expected: usize,
    found: usize,
  },

  #[error("group {0}: no usable trial files")]
  EmptyGroup(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
