// Named bands by cumulative fraction of the sample count
// 按样本数累计比例划分的命名区间

use crate::{Error, Result, SegKey, Segmenter};

/// Load-factor phases of an insert run
/// 插入过程的负载因子阶段
pub const LOAD_PHASES: [(&str, f64); 5] = [
  ("0-50%", 0.5),
  ("50-80%", 0.8),
  ("80-90%", 0.9),
  ("90-94%", 0.94),
  ("94-100%", 1.0),
];

/// Sample `i` belongs to the first band with `breakpoint * total > i`.
/// 样本 `i` 属于第一个满足 `breakpoint * total > i` 的区间。
#[derive(Debug, Clone, PartialEq)]
pub struct Bands {
  names: Vec<String>,
  bps: Vec<f64>,
  /// Nominal sample count; defaults to the series length
  /// 名义样本数；默认取序列长度
  total: Option<usize>,
}

impl Default for Bands {
  fn default() -> Self {
    Self {
      names: LOAD_PHASES.iter().map(|(n, _)| (*n).to_owned()).collect(),
      bps: LOAD_PHASES.iter().map(|(_, b)| *b).collect(),
      total: None,
    }
  }
}

impl Bands {
  /// Breakpoints must be positive, strictly increasing and end at 1.0.
  /// Names must be unique.
  /// 断点必须为正、严格递增且以 1.0 结尾；名称不可重复。
  pub fn new<N: Into<String>>(bands: impl IntoIterator<Item = (N, f64)>) -> Result<Self> {
    let (names, bps): (Vec<String>, Vec<f64>) =
      bands.into_iter().map(|(n, b)| (n.into(), b)).unzip();

    let Some(&last) = bps.last() else {
      return Err(Error::BadBreakpoints("empty".into()));
    };
    if last != 1.0 {
      return Err(Error::BadBreakpoints(format!("last is {last}, want 1.0")));
    }
    let mut prev = 0.0;
    for &b in &bps {
      // NaN fails this too / NaN 也会失败
      if !(b > prev) {
        return Err(Error::BadBreakpoints(format!(
          "{b} not greater than {prev}"
        )));
      }
      prev = b;
    }
    for (i, n) in names.iter().enumerate() {
      if names[..i].contains(n) {
        return Err(Error::DupBand(n.clone()));
      }
    }

    Ok(Self {
      names,
      bps,
      total: None,
    })
  }

  /// Use a fixed nominal count instead of the series length;
  /// samples past it land in the last band.
  /// 使用固定名义数代替序列长度；超出部分落入最后区间。
  pub fn total(mut self, total: usize) -> Self {
    self.total = Some(total);
    self
  }

  #[inline]
  pub fn breakpoints(&self) -> &[f64] {
    &self.bps
  }

  #[inline]
  pub fn names(&self) -> &[String] {
    &self.names
  }
}

impl Segmenter for Bands {
  fn keys(&self) -> Vec<SegKey> {
    self
      .names
      .iter()
      .enumerate()
      .map(|(i, n)| SegKey::named(i, n.as_str()))
      .collect()
  }

  fn ends(&self, n: usize) -> Result<Vec<usize>> {
    let total = self.total.unwrap_or(n) as f64;
    let last = self.bps.len() - 1;
    Ok(
      self
        .bps
        .iter()
        .enumerate()
        .map(|(i, &b)| {
          if i == last {
            n
          } else {
            // count of i with i < b * total
            ((b * total).ceil() as usize).min(n)
          }
        })
        .collect(),
    )
  }
}
