// Analysis configuration
// 分析配置

use std::path::Path;

use bench_agg::{Aggregator, Combine};
use bench_log::{Classifier, Quantity, Rule};
use bench_seg::{Bands, DECILES, Decile, LOAD_PHASES, Segmenter, Small};
use serde::{Deserialize, Serialize};

use crate::{RANKS, Result, stats::check_ranks};

/// Throughput samples per insert sweep (load factor 0.11 to 0.96)
/// 每轮插入扫描的吞吐量样本数（负载因子 0.11 到 0.96）
pub const TPUT_SAMPLES: usize = 86;

/// Which log records a pipeline reads / 流水线读取的日志记录类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
  Path,
  Dup,
  Tput,
}

/// How path lengths are segmented / 路径长度的分段方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
  #[default]
  Decile,
  Bands,
}

/// Filename tag of a trial group and its legend label
/// 试验组的文件名标签及其图例标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConf {
  pub tag: String,
  pub label: String,
}

impl TagConf {
  pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      tag: tag.into(),
      label: label.into(),
    }
  }
}

/// Load factor of the i-th throughput sample: `start + i * step`
/// 第 i 个吞吐量样本的负载因子：`start + i * step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAxis {
  pub start: f64,
  pub step: f64,
}

impl Default for LoadAxis {
  fn default() -> Self {
    Self {
      start: 0.11,
      step: 0.01,
    }
  }
}

impl LoadAxis {
  #[inline]
  pub fn at(&self, i: usize) -> f64 {
    self.start + i as f64 * self.step
  }
}

/// Analysis configuration / 分析配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
  /// Equal segments for path lengths / 路径长度等分段数
  pub deciles: usize,
  pub small: Small,
  pub split: Split,
  /// Named cumulative breakpoints / 命名累计断点
  pub bands: Vec<(String, f64)>,
  /// Nominal key count for bands / 区间的名义键数
  pub band_total: Option<usize>,
  /// Percentile ranks / 百分位
  pub ranks: Vec<f64>,
  pub dup_key: String,
  pub bucket_key: String,
  pub tags: Vec<TagConf>,
  /// Samples every throughput trial must report / 每次吞吐量试验必须报告的样本数
  pub expected: Option<usize>,
  pub combine: Combine,
  pub load: LoadAxis,
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      deciles: DECILES,
      small: Small::Reject,
      split: Split::Decile,
      bands: LOAD_PHASES
        .iter()
        .map(|(n, b)| ((*n).to_owned(), *b))
        .collect(),
      band_total: None,
      ranks: RANKS.to_vec(),
      dup_key: "duplicated".into(),
      bucket_key: "num".into(),
      tags: vec![
        TagConf::new("tput_04", "4-way"),
        TagConf::new("tput_08", "8-way"),
        TagConf::new("tput_16", "16-way"),
      ],
      expected: Some(TPUT_SAMPLES),
      combine: Combine::Mean,
      load: LoadAxis::default(),
    }
  }
}

impl Conf {
  /// Parse JSON; missing fields take defaults
  /// 解析 JSON；缺失字段取默认值
  pub fn from_json(json: &str) -> Result<Self> {
    let conf: Self = sonic_rs::from_str(json)?;
    check_ranks(&conf.ranks)?;
    Ok(conf)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_json(&std::fs::read_to_string(path)?)
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(sonic_rs::to_string_pretty(self)?)
  }

  pub fn ranks(mut self, ranks: Vec<f64>) -> Self {
    self.ranks = ranks;
    self
  }

  pub fn split(mut self, split: Split) -> Self {
    self.split = split;
    self
  }

  pub fn deciles(mut self, k: usize, small: Small) -> Self {
    self.deciles = k;
    self.small = small;
    self
  }

  pub fn band_total(mut self, total: Option<usize>) -> Self {
    self.band_total = total;
    self
  }

  pub fn expected(mut self, expected: Option<usize>) -> Self {
    self.expected = expected;
    self
  }

  pub fn combine(mut self, combine: Combine) -> Self {
    self.combine = combine;
    self
  }

  pub fn tags(mut self, tags: Vec<TagConf>) -> Self {
    self.tags = tags;
    self
  }

  /// Prefix table for one pipeline / 单条流水线的前缀表
  pub fn classifier(&self, kind: Kind) -> Classifier {
    let rule = match kind {
      Kind::Path => Rule::path_len(),
      Kind::Dup => Rule::dup(&self.dup_key, &self.bucket_key),
      Kind::Tput => Rule::tput(),
    };
    Classifier::new([rule])
  }

  /// Segmenter for path lengths, configuration errors surface here
  /// 路径长度分段器，配置错误在此处暴露
  pub fn segmenter(&self) -> Result<Box<dyn Segmenter + Send + Sync>> {
    Ok(match self.split {
      Split::Decile => Box::new(Decile::new(self.deciles)?.small(self.small)),
      Split::Bands => {
        let bands = Bands::new(self.bands.iter().map(|(n, b)| (n.as_str(), *b)))?;
        match self.band_total {
          Some(total) => Box::new(bands.total(total)),
          None => Box::new(bands),
        }
      }
    })
  }

  pub fn aggregator(&self) -> Aggregator {
    Aggregator::new(self.classifier(Kind::Tput), Quantity::Tput)
      .expected(self.expected)
      .how(self.combine)
  }

  pub fn tag_names(&self) -> Vec<String> {
    self.tags.iter().map(|t| t.tag.clone()).collect()
  }

  pub fn label<'a>(&'a self, tag: &'a str) -> &'a str {
    self
      .tags
      .iter()
      .find(|t| t.tag == tag)
      .map_or(tag, |t| t.label.as_str())
  }
}
