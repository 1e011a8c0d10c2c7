// Index-aligned element-wise combination of trial series
// 按下标对齐的试验序列逐元素合并

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How aligned samples are combined / 对齐样本的合并方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
  Sum,
  #[default]
  Mean,
}

/// One trial's series, the i-th sample lines up with the i-th of every other trial
/// 单次试验的序列，第 i 个样本与其他试验的第 i 个对齐
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
  pub path: PathBuf,
  pub vals: Vec<f64>,
}

/// Combined series of one group
/// 一个组的合并序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combined {
  pub tag: String,
  pub how: Combine,
  pub vals: Vec<f64>,
  /// Contributing trials per index / 每个下标参与的试验数
  pub contrib: Vec<usize>,
  pub files: Vec<PathBuf>,
}

/// Combine trials by sample index.
///
/// With `expected = Some(n)` every trial must have at least `n` samples and
/// only the first `n` are used. With `None` all trials must have the same
/// length. Short trials fail the whole group; nothing is padded or truncated
/// to fit them.
///
/// 按样本下标合并试验。
/// `expected = Some(n)` 时每次试验至少要有 `n` 个样本，只取前 `n` 个；
/// 为 `None` 时所有试验长度必须相同。样本不足的试验使整个组失败，
/// 不做补零或截断。
pub fn combine(tag: &str, trials: &[Trial], expected: Option<usize>, how: Combine) -> Result<Combined> {
  let Some(first) = trials.first() else {
    return Err(Error::EmptyGroup(tag.to_owned()));
  };
  let len = expected.unwrap_or(first.vals.len());

  for t in trials {
    let found = t.vals.len();
    let short = match expected {
      Some(_) => found < len,
      None => found != len,
    };
    if short {
      return Err(Error::SampleCountMismatch {
        tag: tag.to_owned(),
        path: t.path.clone(),
        expected: len,
        found,
      });
    }
  }

  let mut sum = vec![0.0; len];
  let mut contrib = vec![0usize; len];
  for t in trials {
    for ((s, c), v) in sum.iter_mut().zip(contrib.iter_mut()).zip(&t.vals[..len]) {
      *s += v;
      *c += 1;
    }
  }

  let vals = match how {
    Combine::Sum => sum,
    Combine::Mean => sum
      .into_iter()
      .zip(&contrib)
      .map(|(s, &c)| s / c as f64)
      .collect(),
  };

  Ok(Combined {
    tag: tag.to_owned(),
    how,
    vals,
    contrib,
    files: trials.iter().map(|t| t.path.clone()).collect(),
  })
}
