// Descriptive statistics over one segment
// 单个分段的描述性统计

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default percentile ranks / 默认百分位
pub const RANKS: [f64; 5] = [50.0, 75.0, 90.0, 95.0, 99.0];

/// Summary of a non-empty segment
/// 非空分段的摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
  pub count: usize,
  pub min: f64,
  pub max: f64,
  pub mean: f64,
  pub sum: f64,
  /// (rank, value) in the order ranks were asked for
  /// (百分位, 值)，按请求顺序
  pub pcts: Vec<(f64, f64)>,
}

impl Stats {
  /// Fails with `EmptySegment` on no samples, `BadRank` on a rank outside [0, 100]
  /// 无样本时返回 `EmptySegment`，百分位不在 [0, 100] 时返回 `BadRank`
  pub fn new(vals: &[f64], ranks: &[f64]) -> Result<Self> {
    check_ranks(ranks)?;
    if vals.is_empty() {
      return Err(Error::EmptySegment);
    }

    let mut sorted = vals.to_vec();
    sorted.sort_by(f64::total_cmp);

    let sum: f64 = vals.iter().sum();
    let count = vals.len();
    let pcts = ranks
      .iter()
      .map(|&r| (r, interpolate(&sorted, r)))
      .collect();

    Ok(Self {
      count,
      min: sorted[0],
      max: sorted[count - 1],
      mean: sum / count as f64,
      sum,
      pcts,
    })
  }

  /// Value at a rank that was asked for
  /// 已请求百分位的值
  pub fn pct(&self, rank: f64) -> Option<f64> {
    self
      .pcts
      .iter()
      .find(|(r, _)| *r == rank)
      .map(|(_, v)| *v)
  }
}

pub fn check_ranks(ranks: &[f64]) -> Result<()> {
  match ranks.iter().find(|r| !(0.0..=100.0).contains(*r)) {
    Some(&r) => Err(Error::BadRank(r)),
    None => Ok(()),
  }
}

/// Percentile by linear interpolation between order statistics:
/// `h = (n-1)·r/100`, `x[⌊h⌋] + (h-⌊h⌋)·(x[⌊h⌋+1] - x[⌊h⌋])`.
/// `sorted` must be ascending.
///
/// 顺序统计量之间线性插值的百分位。`sorted` 须为升序。
pub fn percentile(sorted: &[f64], rank: f64) -> Result<f64> {
  check_ranks(&[rank])?;
  if sorted.is_empty() {
    return Err(Error::EmptySegment);
  }
  Ok(interpolate(sorted, rank))
}

fn interpolate(sorted: &[f64], rank: f64) -> f64 {
  let h = (sorted.len() - 1) as f64 * rank / 100.0;
  let lo = h.floor() as usize;
  let hi = (lo + 1).min(sorted.len() - 1);
  let frac = h - lo as f64;
  // rounding must not step past the next order statistic
  (sorted[lo] + frac * (sorted[hi] - sorted[lo])).min(sorted[hi])
}

/// `sum(num) / sum(den)`, `DivisionByZero` when the denominator sums to 0
/// `sum(num) / sum(den)`，分母之和为 0 时返回 `DivisionByZero`
pub fn rate(num: &[f64], den: &[f64]) -> Result<f64> {
  let d: f64 = den.iter().sum();
  if d == 0.0 {
    return Err(Error::DivisionByZero);
  }
  Ok(num.iter().sum::<f64>() / d)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_interpolate() {
    let s = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(percentile(&s, 0.0).unwrap(), 1.0);
    assert_eq!(percentile(&s, 100.0).unwrap(), 4.0);
    assert_eq!(percentile(&s, 50.0).unwrap(), 2.5);
    // h = 3 * 0.9 = 2.7
    assert!((percentile(&s, 90.0).unwrap() - 3.7).abs() < 1e-12);
    assert_eq!(percentile(&[5.0], 99.0).unwrap(), 5.0);
  }

  #[test]
  fn test_rank_and_empty() {
    assert!(matches!(percentile(&[], 50.0), Err(Error::EmptySegment)));
    assert!(matches!(percentile(&[1.0], 101.0), Err(Error::BadRank(_))));
    assert!(matches!(Stats::new(&[1.0], &[f64::NAN]), Err(Error::BadRank(_))));
    assert!(matches!(Stats::new(&[], &RANKS), Err(Error::EmptySegment)));
  }

  #[test]
  fn test_rate() {
    assert!((rate(&[2.0, 0.0], &[10.0, 8.0]).unwrap() - 2.0 / 18.0).abs() < 1e-12);
    assert!(matches!(rate(&[1.0], &[0.0]), Err(Error::DivisionByZero)));
    assert!(matches!(rate(&[], &[]), Err(Error::DivisionByZero)));
  }
}
