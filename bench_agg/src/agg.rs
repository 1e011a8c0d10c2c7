// Per-group aggregation driver
// 分组聚合驱动

use std::path::{Path, PathBuf};

use bench_log::{Classifier, Quantity};
use rayon::prelude::*;

use crate::{Combine, Combined, Group, Result, Trial, combine, discover};

/// Outcome of one trial group: the combined series or why it failed,
/// plus files excluded along the way
/// 单个试验组的结果：合并序列或失败原因，以及途中被排除的文件
#[derive(Debug)]
pub struct GroupRun {
  pub tag: String,
  pub combined: Result<Combined>,
  pub skipped: Vec<(PathBuf, bench_log::Error)>,
}

/// Classify every trial file of a group and combine one quantity
/// 对组内每个试验文件分类并合并一个物理量
#[derive(Debug, Clone)]
pub struct Aggregator {
  classifier: Classifier,
  q: Quantity,
  expected: Option<usize>,
  how: Combine,
}

impl Aggregator {
  pub fn new(classifier: Classifier, q: Quantity) -> Self {
    Self {
      classifier,
      q,
      expected: None,
      how: Combine::default(),
    }
  }

  /// Samples every trial must report / 每次试验必须报告的样本数
  pub fn expected(mut self, expected: Option<usize>) -> Self {
    self.expected = expected;
    self
  }

  pub fn how(mut self, how: Combine) -> Self {
    self.how = how;
    self
  }

  /// Files are classified in parallel; a file that fails is excluded and
  /// reported, the rest of the group is still combined.
  /// 文件并行分类；失败的文件被排除并报告，组内其余文件仍会合并。
  pub fn run(&self, group: &Group) -> GroupRun {
    let read: Vec<_> = group
      .files
      .par_iter()
      .map(|path| (path, self.classifier.read_file(path)))
      .collect();

    let mut trials = Vec::with_capacity(read.len());
    let mut skipped = Vec::new();
    for (path, r) in read {
      match r {
        Ok(ext) => trials.push(Trial {
          path: path.clone(),
          vals: ext.into_series(self.q).into_vals(),
        }),
        Err(e) => {
          log::warn!("group {}: skip {}: {e}", group.tag, path.display());
          skipped.push((path.clone(), e));
        }
      }
    }

    let combined = combine(&group.tag, &trials, self.expected, self.how);
    match &combined {
      Ok(c) => log::debug!("group {}: {} trials, {} samples", c.tag, c.files.len(), c.vals.len()),
      Err(e) => log::warn!("{e}"),
    }

    GroupRun {
      tag: group.tag.clone(),
      combined,
      skipped,
    }
  }

  /// Discover groups under `dir` and run each of them
  /// 发现 `dir` 下的分组并逐个运行
  pub fn run_dir(&self, dir: &Path, tags: &[String]) -> Result<Vec<GroupRun>> {
    Ok(discover(dir, tags)?.iter().map(|g| self.run(g)).collect())
  }
}
