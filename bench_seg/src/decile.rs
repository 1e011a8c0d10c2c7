// Fixed-count equal segmentation by sample index
// 按样本下标的等长定数分段

use serde::{Deserialize, Serialize};

use crate::{Error, Result, SegKey, Segmenter};

/// Default segment count / 默认分段数
pub const DECILES: usize = 10;

/// What to do when there are fewer samples than segments
/// 样本少于分段数时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Small {
  /// Fail with `Error::Insufficient` / 返回 `Error::Insufficient`
  #[default]
  Reject,
  /// All samples go to segment 0, the rest are empty / 全部样本归入第 0 段，其余为空
  Collapse,
}

/// `K` equal segments; the remainder joins the last one
/// `K` 个等长分段，余数并入最后一段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decile {
  k: usize,
  small: Small,
}

impl Default for Decile {
  fn default() -> Self {
    Self {
      k: DECILES,
      small: Small::Reject,
    }
  }
}

impl Decile {
  pub fn new(k: usize) -> Result<Self> {
    if k == 0 {
      return Err(Error::ZeroSegments);
    }
    Ok(Self {
      k,
      small: Small::Reject,
    })
  }

  pub fn small(mut self, small: Small) -> Self {
    self.small = small;
    self
  }

  #[inline]
  pub fn k(&self) -> usize {
    self.k
  }

  /// Segment of sample `i` in a series of length `n`, `None` when `n < k`
  /// 长度为 `n` 的序列中样本 `i` 所在的段，`n < k` 时为 `None`
  #[inline]
  pub fn seg_of(&self, i: usize, n: usize) -> Option<usize> {
    let seg = n / self.k;
    (seg > 0).then(|| (i / seg).min(self.k - 1))
  }
}

impl Segmenter for Decile {
  fn keys(&self) -> Vec<SegKey> {
    (0..self.k).map(SegKey::idx).collect()
  }

  fn ends(&self, n: usize) -> Result<Vec<usize>> {
    let seg = n / self.k;
    if seg == 0 {
      return match self.small {
        Small::Reject => Err(Error::Insufficient { n, k: self.k }),
        Small::Collapse => Ok(vec![n; self.k]),
      };
    }
    Ok((1..self.k).map(|j| j * seg).chain([n]).collect())
  }
}
