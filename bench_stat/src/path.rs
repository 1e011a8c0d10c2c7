// Cuckoo path length statistics, overall and per segment
// Cuckoo 路径长度统计：总体与分段

use std::path::{Path, PathBuf};

use bench_log::{Quantity, Series};
use bench_seg::{SegKey, Segmenter};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
  Batch, Conf, Kind, Mark, Result, Skip, Stats, Table,
  report::fmt_stats,
  stats::check_ranks,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegStats {
  pub key: SegKey,
  pub stats: Mark<Stats>,
}

/// `all` summary plus one summary per segment, in key order
/// `all` 摘要以及按键顺序的逐段摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
  pub q: Quantity,
  pub ranks: Vec<f64>,
  pub all: Mark<Stats>,
  pub segs: Vec<SegStats>,
}

impl PathReport {
  pub fn new<S: Segmenter + ?Sized>(series: &Series, seg: &S, ranks: &[f64]) -> Result<Self> {
    let all = Mark::from_result(Stats::new(series.vals(), ranks))?;
    let segs = seg
      .split(series.vals())?
      .into_iter()
      .map(|s| -> Result<SegStats> {
        Ok(SegStats {
          stats: Mark::from_result(Stats::new(s.vals, ranks))?,
          key: s.key,
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(Self {
      q: series.q(),
      ranks: ranks.to_vec(),
      all,
      segs,
    })
  }

  /// `all: num=...` then `seg 0: num=...`
  pub fn lines(&self) -> Vec<String> {
    let mut out = Vec::with_capacity(self.segs.len() + 1);
    out.push(format!("all: {}", fmt_stats(self.q, &self.all)));
    for s in &self.segs {
      out.push(format!("seg {}: {}", s.key.idx, fmt_stats(self.q, &s.stats)));
    }
    out
  }

  /// Rows `all` and one per segment key / 行为 `all` 以及每个分段键
  pub fn table(&self) -> Table {
    let mut t = Table::default();
    t.push_stats("all", &self.all, &self.ranks);
    for s in &self.segs {
      t.push_stats(s.key.to_string(), &s.stats, &self.ranks);
    }
    t
  }
}

/// Path report over in-memory lines / 基于内存行的路径报告
pub fn path_lines<I, S>(lines: I, conf: &Conf) -> Result<PathReport>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let series = conf
    .classifier(Kind::Path)
    .classify(lines)?
    .into_series(Quantity::PathLen);
  PathReport::new(&series, &*conf.segmenter()?, &conf.ranks)
}

pub fn path_file(path: impl AsRef<Path>, conf: &Conf) -> Result<PathReport> {
  let series = conf
    .classifier(Kind::Path)
    .read_file(path)?
    .into_series(Quantity::PathLen);
  PathReport::new(&series, &*conf.segmenter()?, &conf.ranks)
}

/// Files are analysed in parallel; a failing file is skipped and reported.
/// Configuration errors fail the whole batch.
/// 文件并行分析；失败文件被跳过并报告。配置错误使整个批处理失败。
pub fn path_files(paths: &[PathBuf], conf: &Conf) -> Result<Batch<PathReport>> {
  check_ranks(&conf.ranks)?;
  let seg = conf.segmenter()?;
  let classifier = conf.classifier(Kind::Path);

  let done: Vec<_> = paths
    .par_iter()
    .map(|path| {
      let r = classifier
        .read_file(path)
        .map_err(Into::into)
        .and_then(|ext| {
          PathReport::new(&ext.into_series(Quantity::PathLen), &*seg, &conf.ranks)
        });
      (path, r)
    })
    .collect();

  let mut ok = Vec::with_capacity(done.len());
  let mut skipped = Vec::new();
  for (path, r) in done {
    match r {
      Ok(report) => ok.push((path.clone(), report)),
      Err(e) => {
        log::warn!("skip {}: {e}", path.display());
        skipped.push(Skip::file(path, e));
      }
    }
  }
  Ok(Batch { ok, skipped })
}
