// Bucket duplication along cuckoo paths
// Cuckoo 路径上的桶重复

use std::path::Path;

use bench_log::{Extracted, Quantity};
use serde::Serialize;

use crate::{Conf, Kind, Mark, Result, Stats, rate};

/// Paired duplicate/bucket summary and the duplication rate
/// 成对的重复数/桶数摘要及重复率
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DupReport {
  /// Recognized path records / 已识别的路径记录数
  pub paths: usize,
  pub dup: Mark<Stats>,
  pub bucket: Mark<Stats>,
  /// sum(dup) / sum(bucket)
  pub rate: Mark<f64>,
}

impl DupReport {
  pub fn new(ext: &Extracted, ranks: &[f64]) -> Result<Self> {
    let dup = ext.vals(Quantity::Dup);
    let bucket = ext.vals(Quantity::Bucket);
    Ok(Self {
      paths: dup.len(),
      dup: Mark::from_result(Stats::new(dup, ranks))?,
      bucket: Mark::from_result(Stats::new(bucket, ranks))?,
      rate: Mark::from_result(rate(dup, bucket))?,
    })
  }

  pub fn lines(&self) -> Vec<String> {
    let sum_max = |m: &Mark<Stats>| match m.val() {
      Some(s) => format!("{} {}", s.sum as i64, s.max as i64),
      None => "no data".to_owned(),
    };
    vec![
      format!("number of paths:            {}", self.paths),
      format!("number of duplications:     {}", sum_max(&self.dup)),
      format!("number of buckets:          {}", sum_max(&self.bucket)),
      format!("duplication rate:           {:.6}", self.rate),
    ]
  }
}

pub fn dup_lines<I, S>(lines: I, conf: &Conf) -> Result<DupReport>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  DupReport::new(&conf.classifier(Kind::Dup).classify(lines)?, &conf.ranks)
}

pub fn dup_file(path: impl AsRef<Path>, conf: &Conf) -> Result<DupReport> {
  DupReport::new(&conf.classifier(Kind::Dup).read_file(path)?, &conf.ranks)
}
