// Sample and series types
// 样本与序列类型

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical quantity a sample represents
/// 样本代表的逻辑量
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
  /// Relocation steps of one insert / 单次插入的搬迁步数
  PathLen,
  /// Duplicated buckets on one path / 单条路径上重复的桶数
  Dup,
  /// Buckets on one path / 单条路径上的桶数
  Bucket,
  /// Throughput sample, MOPS / 吞吐量样本（MOPS）
  Tput,
}

impl Quantity {
  /// Integer-valued quantities parse as i64
  /// 整数量按 i64 解析
  #[inline]
  pub const fn is_int(self) -> bool {
    !matches!(self, Self::Tput)
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::PathLen => "path_len",
      Self::Dup => "dup",
      Self::Bucket => "bucket",
      Self::Tput => "tput",
    }
  }
}

impl fmt::Display for Quantity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// One value extracted from one recognized line
/// 从一条已识别行中提取的一个值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
  pub q: Quantity,
  pub v: f64,
}

/// Ordered samples of one quantity from one source, in line order
/// 同一来源、同一物理量的有序样本，按行序排列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
  q: Quantity,
  vals: Vec<f64>,
}

impl Series {
  #[inline]
  pub fn new(q: Quantity, vals: Vec<f64>) -> Self {
    Self { q, vals }
  }

  #[inline]
  pub fn empty(q: Quantity) -> Self {
    Self::new(q, Vec::new())
  }

  #[inline]
  pub fn q(&self) -> Quantity {
    self.q
  }

  #[inline]
  pub fn vals(&self) -> &[f64] {
    &self.vals
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.vals.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.vals.is_empty()
  }

  #[inline]
  pub fn into_vals(self) -> Vec<f64> {
    self.vals
  }
}
