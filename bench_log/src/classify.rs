// Line classifier: prefix table -> typed samples
// 行分类器：前缀表 -> 带类型样本

use std::{collections::BTreeMap, path::Path};

use crate::{Error, Quantity, Result, Rule, Sample, Series};

/// Prefix table over log lines
/// 日志行前缀表
#[derive(Debug, Clone)]
pub struct Classifier {
  /// Sorted by prefix length, longest first / 按前缀长度降序
  rules: Vec<Rule>,
}

impl Classifier {
  pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
    let mut rules: Vec<Rule> = rules.into_iter().collect();
    rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    Self { rules }
  }

  #[inline]
  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  /// Longest registered prefix matching the line
  /// 匹配该行的最长已注册前缀
  #[inline]
  pub fn rule(&self, line: &str) -> Option<&Rule> {
    self.rules.iter().find(|r| r.is_match(line))
  }

  /// Samples in line order; unmatched lines are skipped
  /// 按行序返回样本；未匹配的行被跳过
  pub fn samples<I, S>(&self, lines: I) -> Result<Vec<Sample>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut out = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
      let line = line.as_ref();
      let Some(rule) = self.rule(line) else {
        continue;
      };
      rule
        .extract(line, &mut out)
        .map_err(|reason| Error::Malformed {
          no: i + 1,
          line: line.to_owned(),
          reason,
        })?;
    }
    Ok(out)
  }

  /// Classify lines into one series per quantity
  /// 将行分类为每个物理量一条序列
  pub fn classify<I, S>(&self, lines: I) -> Result<Extracted>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Ok(Extracted::from_samples(self.samples(lines)?))
  }

  /// Read the whole file once, then classify.
  /// Invalid UTF-8 is replaced, so binary noise lines are still skipped.
  /// 一次读入整个文件后分类。
  /// 非法 UTF-8 会被替换，二进制噪声行仍被跳过。
  pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Extracted> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let r = self.classify(text.lines());
    if let Ok(ext) = &r {
      log::debug!("{}: {} samples", path.display(), ext.sample_count());
    }
    r
  }
}

/// Per-quantity series extracted from one source
/// 从单一来源提取的各物理量序列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
  map: BTreeMap<Quantity, Series>,
}

impl Extracted {
  pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
    let mut map: BTreeMap<Quantity, Vec<f64>> = BTreeMap::new();
    for s in samples {
      map.entry(s.q).or_default().push(s.v);
    }
    Self {
      map: map
        .into_iter()
        .map(|(q, vals)| (q, Series::new(q, vals)))
        .collect(),
    }
  }

  #[inline]
  pub fn get(&self, q: Quantity) -> Option<&Series> {
    self.map.get(&q)
  }

  /// Values of one quantity, empty if never seen
  /// 某物理量的值，未出现则为空
  #[inline]
  pub fn vals(&self, q: Quantity) -> &[f64] {
    self.map.get(&q).map_or(&[][..], Series::vals)
  }

  pub fn into_series(mut self, q: Quantity) -> Series {
    self.map.remove(&q).unwrap_or_else(|| Series::empty(q))
  }

  pub fn sample_count(&self) -> usize {
    self.map.values().map(Series::len).sum()
  }
}
