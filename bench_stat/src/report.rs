// Report building blocks: skipped inputs, numeric table, text rendering
// 报告组件：跳过的输入、数值表、文本渲染

use std::{collections::BTreeMap, path::PathBuf};

use bench_log::Quantity;
use serde::Serialize;

use crate::{Mark, Result, Stats};

/// An input file or group left out of a run, and why
/// 被排除在运行之外的输入文件或分组及原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
  pub what: String,
  pub reason: String,
}

impl Skip {
  pub fn new(what: impl Into<String>, reason: impl ToString) -> Self {
    Self {
      what: what.into(),
      reason: reason.to_string(),
    }
  }

  pub fn file(path: &std::path::Path, reason: impl ToString) -> Self {
    Self::new(path.display().to_string(), reason)
  }
}

/// Per-file results of a batch plus the files that failed
/// 批处理的逐文件结果以及失败的文件
#[derive(Debug, Clone, Serialize)]
pub struct Batch<T> {
  pub ok: Vec<(PathBuf, T)>,
  pub skipped: Vec<Skip>,
}

/// Plotting-ready table: row key -> column -> value, `None` for no value
/// 可直接绘图的表：行键 -> 列 -> 值，无值为 `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table(pub BTreeMap<String, BTreeMap<String, Option<f64>>>);

impl Table {
  pub fn get(&self, row: &str, col: &str) -> Option<f64> {
    self.0.get(row)?.get(col).copied().flatten()
  }

  /// One row of summary columns for a segment
  /// 分段的一行摘要列
  pub fn push_stats(&mut self, row: impl Into<String>, stats: &Mark<Stats>, ranks: &[f64]) {
    let mut cols = BTreeMap::new();
    let s = stats.val();
    cols.insert("count".to_owned(), Some(s.map_or(0.0, |s| s.count as f64)));
    cols.insert("min".to_owned(), s.map(|s| s.min));
    cols.insert("max".to_owned(), s.map(|s| s.max));
    cols.insert("mean".to_owned(), s.map(|s| s.mean));
    cols.insert("sum".to_owned(), s.map(|s| s.sum));
    for &r in ranks {
      cols.insert(pct_label(r), s.and_then(|s| s.pct(r)));
    }
    self.0.insert(row.into(), cols);
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(sonic_rs::to_string(self)?)
  }
}

/// `p50`, `p99.9`
pub fn pct_label(rank: f64) -> String {
  format!("p{rank}")
}

/// Integer quantities print truncated toward zero, floats with 3 decimals
/// 整数量向零截断打印，浮点量保留 3 位小数
pub fn fmt_num(q: Quantity, v: f64) -> String {
  if q.is_int() {
    format!("{}", v.trunc() as i64)
  } else {
    format!("{v:.3}")
  }
}

/// `num=3, min=3, max=7, mean=5.000 p50=5 p75=6 ...`, or `num=0, no data`
pub fn fmt_stats(q: Quantity, stats: &Mark<Stats>) -> String {
  let s = match stats {
    Mark::Val(s) => s,
    Mark::NoData => return "num=0, no data".to_owned(),
    Mark::Undefined => return "num=0, undefined".to_owned(),
  };
  let mut line = format!(
    "num={}, min={}, max={}, mean={:.3}",
    s.count,
    fmt_num(q, s.min),
    fmt_num(q, s.max),
    s.mean
  );
  for &(r, v) in &s.pcts {
    line.push_str(&format!(" {}={}", pct_label(r), fmt_num(q, v)));
  }
  line
}
