// Explicit markers for statistics that have no value
// 无值统计的显式标记

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A statistic, or why it has none
/// 统计值，或其无值的原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark<T> {
  Val(T),
  /// Segment was empty / 分段为空
  NoData,
  /// Denominator was zero / 分母为零
  Undefined,
}

impl<T> Mark<T> {
  /// Fold the recoverable statistical errors into markers, pass the rest on
  /// 将可恢复的统计错误折叠为标记，其余错误继续传递
  pub fn from_result(r: Result<T>) -> Result<Self> {
    match r {
      Ok(v) => Ok(Self::Val(v)),
      Err(Error::EmptySegment) => Ok(Self::NoData),
      Err(Error::DivisionByZero) => Ok(Self::Undefined),
      Err(e) => Err(e),
    }
  }

  #[inline]
  pub fn val(&self) -> Option<&T> {
    match self {
      Self::Val(v) => Some(v),
      _ => None,
    }
  }

  pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Mark<U> {
    match self {
      Self::Val(v) => Mark::Val(f(v)),
      Self::NoData => Mark::NoData,
      Self::Undefined => Mark::Undefined,
    }
  }
}

impl<T: fmt::Display> fmt::Display for Mark<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Val(v) => v.fmt(f),
      Self::NoData => f.write_str("no data"),
      Self::Undefined => f.write_str("undefined"),
    }
  }
}
