// Prefix rules and field extractors
// 前缀规则与字段提取器

use serde::{Deserialize, Serialize};

use crate::{Quantity, Reason, Sample};

/// Path length record prefix / 路径长度记录前缀
pub const PATH_LEN_PREFIX: &str = "cuckoo path length";

/// Throughput record prefix / 吞吐量记录前缀
pub const TPUT_PREFIX: &str = "[bench] operations_tput";

/// How fields are pulled out of a matched line
/// 如何从匹配行中取出字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
  /// `<prefix>: <num>`
  Colon(Quantity),
  /// `k1=<num>, k2=<num>, ...`, one sample per listed key in list order
  /// 每个列出的键产生一个样本，按列出顺序
  KeyVal(Vec<(String, Quantity)>),
  /// `<prefix> = <num> <units...>`
  Assign(Quantity),
}

/// A registered prefix with its extractor
/// 已注册的前缀及其提取器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
  pub prefix: String,
  pub field: Field,
}

impl Rule {
  pub fn new(prefix: impl Into<String>, field: Field) -> Self {
    Self {
      prefix: prefix.into(),
      field,
    }
  }

  /// `cuckoo path length: <int>`
  pub fn path_len() -> Self {
    Self::new(PATH_LEN_PREFIX, Field::Colon(Quantity::PathLen))
  }

  /// `duplicated=<int>, ..., num=<int>`; the line prefix is the duplicate key
  /// 行前缀即重复计数的键名
  pub fn dup(dup_key: &str, bucket_key: &str) -> Self {
    Self::new(
      dup_key,
      Field::KeyVal(vec![
        (dup_key.to_owned(), Quantity::Dup),
        (bucket_key.to_owned(), Quantity::Bucket),
      ]),
    )
  }

  /// `[bench] operations_tput = <float> <units...>`
  pub fn tput() -> Self {
    Self::new(TPUT_PREFIX, Field::Assign(Quantity::Tput))
  }

  #[inline]
  pub fn is_match(&self, line: &str) -> bool {
    line.starts_with(self.prefix.as_str())
  }

  /// Extract samples from a line that matched this rule
  /// 从匹配本规则的行中提取样本
  pub fn extract(&self, line: &str, out: &mut Vec<Sample>) -> Result<(), Reason> {
    match &self.field {
      Field::Colon(q) => {
        let raw = line
          .split(": ")
          .nth(1)
          .ok_or(Reason::NoDelim(": "))?;
        out.push(Sample {
          q: *q,
          v: parse_num(*q, raw)?,
        });
      }
      Field::KeyVal(keys) => {
        for (key, q) in keys {
          let raw = line
            .split(',')
            .find_map(|kv| {
              let (k, v) = kv.split_once('=')?;
              (k.trim() == key).then_some(v)
            })
            .ok_or_else(|| Reason::MissingKey(key.clone()))?;
          out.push(Sample {
            q: *q,
            v: parse_num(*q, raw)?,
          });
        }
      }
      Field::Assign(q) => {
        let (_, rest) = line.split_once(" = ").ok_or(Reason::NoDelim(" = "))?;
        let raw = rest.split_whitespace().next().unwrap_or_default();
        out.push(Sample {
          q: *q,
          v: parse_num(*q, raw)?,
        });
      }
    }
    Ok(())
  }
}

fn parse_num(q: Quantity, raw: &str) -> Result<f64, Reason> {
  let raw = raw.trim();
  let v = if q.is_int() {
    raw.parse::<i64>().ok().map(|v| v as f64)
  } else {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
  };
  v.ok_or_else(|| Reason::BadNum(raw.to_owned()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn one(rule: &Rule, line: &str) -> Result<Vec<Sample>, Reason> {
    let mut out = Vec::new();
    rule.extract(line, &mut out)?;
    Ok(out)
  }

  #[test]
  fn test_colon() {
    let s = one(&Rule::path_len(), "cuckoo path length: 12\n").unwrap();
    assert_eq!(s, vec![Sample { q: Quantity::PathLen, v: 12.0 }]);
    assert_eq!(
      one(&Rule::path_len(), "cuckoo path length 12"),
      Err(Reason::NoDelim(": "))
    );
    assert_eq!(
      one(&Rule::path_len(), "cuckoo path length: 1.5"),
      Err(Reason::BadNum("1.5".into()))
    );
  }

  #[test]
  fn test_keyval() {
    let rule = Rule::dup("duplicated", "num");
    let s = one(&rule, "duplicated=2, depth=4, num=10").unwrap();
    assert_eq!(s[0], Sample { q: Quantity::Dup, v: 2.0 });
    assert_eq!(s[1], Sample { q: Quantity::Bucket, v: 10.0 });
    assert_eq!(
      one(&rule, "duplicated=2, depth=4"),
      Err(Reason::MissingKey("num".into()))
    );
  }

  #[test]
  fn test_assign() {
    let s = one(&Rule::tput(), "[bench] operations_tput = 23.75 MOPS").unwrap();
    assert_eq!(s, vec![Sample { q: Quantity::Tput, v: 23.75 }]);
    assert_eq!(
      one(&Rule::tput(), "[bench] operations_tput = abc MOPS"),
      Err(Reason::BadNum("abc".into()))
    );
    assert_eq!(
      one(&Rule::tput(), "[bench] operations_tput = inf MOPS"),
      Err(Reason::BadNum("inf".into()))
    );
    assert_eq!(
      one(&Rule::tput(), "[bench] operations_tput ="),
      Err(Reason::NoDelim(" = "))
    );
  }
}
