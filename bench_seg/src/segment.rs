// Segment key, segment view and the segmenter trait
// 分段键、分段视图与分段器 trait

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Segment key: position in the partition, plus optional band name
/// 分段键：在划分中的位置，以及可选的区间名
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegKey {
  pub idx: usize,
  pub name: Option<String>,
}

impl SegKey {
  #[inline]
  pub fn idx(idx: usize) -> Self {
    Self { idx, name: None }
  }

  #[inline]
  pub fn named(idx: usize, name: impl Into<String>) -> Self {
    Self {
      idx,
      name: Some(name.into()),
    }
  }
}

impl fmt::Display for SegKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => f.write_str(name),
      None => write!(f, "{}", self.idx),
    }
  }
}

/// Contiguous slice of a series
/// 序列的连续切片
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
  pub key: SegKey,
  pub vals: &'a [f64],
}

impl Segment<'_> {
  #[inline]
  pub fn len(&self) -> usize {
    self.vals.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.vals.is_empty()
  }
}

/// Partition policy over an ordered series
/// 有序序列的划分策略
pub trait Segmenter {
  /// Keys in partition order / 按划分顺序的键
  fn keys(&self) -> Vec<SegKey>;

  /// Exclusive end offset of each segment for a series of length `n`.
  /// Must be non-decreasing, one per key, last one equal to `n`.
  /// 长度为 `n` 的序列中每段的结束偏移（不含）。
  /// 必须单调不减，每个键一个，最后一个等于 `n`。
  fn ends(&self, n: usize) -> Result<Vec<usize>>;

  /// Split into contiguous segments in key order
  /// 按键顺序切分为连续分段
  fn split<'a>(&self, vals: &'a [f64]) -> Result<Vec<Segment<'a>>> {
    let ends = self.ends(vals.len())?;
    let mut begin = 0;
    Ok(
      self
        .keys()
        .into_iter()
        .zip(ends)
        .map(|(key, end)| {
          let seg = Segment {
            key,
            vals: &vals[begin..end],
          };
          begin = end;
          seg
        })
        .collect(),
    )
  }
}
