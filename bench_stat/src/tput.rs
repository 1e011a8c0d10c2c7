// Throughput sweep: trial groups combined into load-factor curves
// 吞吐量扫描：试验组合并为负载因子曲线

use std::path::{Path, PathBuf};

use bench_agg::{Combine, GroupRun};
use bench_log::Quantity;
use serde::Serialize;

use crate::{Conf, Mark, Result, Skip, Stats, report::fmt_num, stats::check_ranks};

/// One combined curve, ready for plotting
/// 一条合并后的曲线，可直接绘图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
  pub tag: String,
  pub label: String,
  pub how: Combine,
  /// x axis / 横轴
  pub load: Vec<f64>,
  /// y axis / 纵轴
  pub tput: Vec<f64>,
  pub contrib: Vec<usize>,
  pub files: Vec<PathBuf>,
  pub stats: Mark<Stats>,
}

impl Curve {
  /// Load factor at peak throughput / 峰值吞吐量对应的负载因子
  pub fn peak(&self) -> Option<(f64, f64)> {
    self
      .load
      .iter()
      .zip(&self.tput)
      .max_by(|a, b| a.1.total_cmp(b.1))
      .map(|(l, t)| (*l, *t))
  }
}

/// All curves of a sweep plus the files and groups left out
/// 扫描的全部曲线以及被排除的文件和分组
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sweep {
  pub curves: Vec<Curve>,
  pub skipped: Vec<Skip>,
}

impl Sweep {
  pub fn from_runs(runs: Vec<GroupRun>, conf: &Conf) -> Result<Self> {
    check_ranks(&conf.ranks)?;
    let mut curves = Vec::with_capacity(runs.len());
    let mut skipped = Vec::new();

    for run in runs {
      skipped.extend(run.skipped.iter().map(|(p, e)| Skip::file(p, e)));
      match run.combined {
        Ok(c) => {
          let stats = Mark::from_result(Stats::new(&c.vals, &conf.ranks))?;
          curves.push(Curve {
            label: conf.label(&c.tag).to_owned(),
            load: (0..c.vals.len()).map(|i| conf.load.at(i)).collect(),
            tag: c.tag,
            how: c.how,
            tput: c.vals,
            contrib: c.contrib,
            files: c.files,
            stats,
          });
        }
        Err(e) => skipped.push(Skip::new(run.tag, e)),
      }
    }
    Ok(Self { curves, skipped })
  }

  pub fn curve(&self, tag: &str) -> Option<&Curve> {
    self.curves.iter().find(|c| c.tag == tag)
  }

  /// One line per curve, then one per skipped input
  /// 每条曲线一行，然后每个被跳过的输入一行
  pub fn lines(&self) -> Vec<String> {
    let mut out = Vec::with_capacity(self.curves.len() + self.skipped.len());
    for c in &self.curves {
      let mut line = format!("{}: trials={}, points={}", c.label, c.files.len(), c.tput.len());
      if let Mark::Val(s) = &c.stats {
        line.push_str(&format!(", mean={}", fmt_num(Quantity::Tput, s.mean)));
      }
      if let Some((load, tput)) = c.peak() {
        line.push_str(&format!(
          ", peak={} @ {load:.2}",
          fmt_num(Quantity::Tput, tput)
        ));
      }
      out.push(line);
    }
    for s in &self.skipped {
      out.push(format!("skipped {}: {}", s.what, s.reason));
    }
    out
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(sonic_rs::to_string(self)?)
  }
}

/// Discover, classify and combine every trial group under `dir`
/// 发现、分类并合并 `dir` 下的每个试验组
pub fn sweep(dir: impl AsRef<Path>, conf: &Conf) -> Result<Sweep> {
  check_ranks(&conf.ranks)?;
  let runs = conf.aggregator().run_dir(dir.as_ref(), &conf.tag_names())?;
  Sweep::from_runs(runs, conf)
}
