// Error types for bench_log
// bench_log 错误类型

use thiserror::Error;

/// Why a matched line failed to parse
/// 匹配行解析失败的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
  #[error("missing delimiter {0:?}")]
  NoDelim(&'static str),

  #[error("missing key {0:?}")]
  MissingKey(String),

  #[error("not a number: {0:?}")]
  BadNum(String),
}

#[derive(Error, Debug)]
pub enum Error {
  /// Line matched a prefix but its fields did not parse
  /// 行匹配了前缀但字段解析失败
  #[error("malformed record at line {no}: {reason} ({line:?})")]
  Malformed {
    no: usize,
    line: String,
    #[source]
    reason: Reason,
  },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
