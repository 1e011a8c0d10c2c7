use std::io::Write;

use aok::{OK, Void};
use bench_log::{Classifier, Error, Field, Quantity, Reason, Rule};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn all_rules() -> Classifier {
  Classifier::new([
    Rule::path_len(),
    Rule::dup("duplicated", "num"),
    Rule::tput(),
  ])
}

/// Noise lines are skipped, order is line order
/// 噪声行被跳过，顺序即行序
#[test]
fn test_path_len_with_noise() -> Void {
  let lines = [
    "cuckoo path length: 3",
    "noise line",
    "cuckoo path length: 7",
    "cuckoo path length: 5",
  ];
  let ext = all_rules().classify(lines)?;
  assert_eq!(ext.vals(Quantity::PathLen), &[3.0, 7.0, 5.0]);
  assert!(ext.vals(Quantity::Tput).is_empty());
  assert_eq!(ext.sample_count(), 3);
  OK
}

#[test]
fn test_paired_dup_bucket() -> Void {
  let ext = all_rules().classify(["duplicated=2,num=10", "duplicated=0,num=8"])?;
  assert_eq!(ext.vals(Quantity::Dup), &[2.0, 0.0]);
  assert_eq!(ext.vals(Quantity::Bucket), &[10.0, 8.0]);
  OK
}

#[test]
fn test_tput_units() -> Void {
  let ext = all_rules().classify([
    "[bench] power = 22",
    "[bench] operations_tput = 31.5 MOPS",
    "[bench] insert_tput  = 12.00 M items / sec",
    "[bench] operations_tput = 29.25 MOPS",
  ])?;
  let s = ext.into_series(Quantity::Tput);
  assert_eq!(s.q(), Quantity::Tput);
  assert_eq!(s.vals(), &[31.5, 29.25]);
  OK
}

/// Malformed matched line is fatal, with its line number
/// 匹配但格式错误的行是致命错误，并带行号
#[test]
fn test_malformed_is_fatal() {
  let r = all_rules().classify([
    "noise",
    "[bench] operations_tput = 1.0 MOPS",
    "[bench] operations_tput = abc MOPS",
  ]);
  match r {
    Err(Error::Malformed { no, reason, .. }) => {
      assert_eq!(no, 3);
      assert_eq!(reason, Reason::BadNum("abc".into()));
    }
    other => panic!("expected malformed, got {other:?}"),
  }
}

#[test]
fn test_longest_prefix_wins() -> Void {
  let c = Classifier::new([
    Rule::new("[bench]", Field::Assign(Quantity::Bucket)),
    Rule::tput(),
  ]);
  let ext = c.classify(["[bench] operations_tput = 2.5 MOPS", "[bench] n = 4"])?;
  assert_eq!(ext.vals(Quantity::Tput), &[2.5]);
  assert_eq!(ext.vals(Quantity::Bucket), &[4.0]);
  OK
}

/// Random noise interleaved with records keeps record order
/// 随机噪声与记录交错时保持记录顺序
#[test]
fn test_random_noise() -> Void {
  let mut rng = fastrand::Rng::with_seed(7);
  let mut lines = Vec::new();
  let mut want = Vec::new();
  for _ in 0..2000 {
    if rng.bool() {
      let v = rng.u32(0..64);
      want.push(v as f64);
      lines.push(format!("cuckoo path length: {v}"));
    } else {
      lines.push(format!("[thread{}] tput {:.2} MOPS", rng.u8(..), rng.f64()));
    }
  }
  let ext = all_rules().classify(&lines)?;
  assert_eq!(ext.vals(Quantity::PathLen), want.as_slice());
  info!("random noise: {} of {} lines matched", want.len(), lines.len());
  OK
}

#[test]
fn test_read_file() -> Void {
  let mut f = tempfile::NamedTempFile::new()?;
  writeln!(f, "cuckoo path length: 1\r\ncuckoo path length: 4")?;
  let ext = all_rules().read_file(f.path())?;
  assert_eq!(ext.vals(Quantity::PathLen), &[1.0, 4.0]);

  let missing = all_rules().read_file(f.path().with_extension("missing"));
  assert!(matches!(missing, Err(Error::Io(_))));
  OK
}

/// Binary bytes in a noise line do not reject the file
/// 噪声行中的二进制字节不会导致整个文件被拒绝
#[test]
fn test_read_file_binary_noise() -> Void {
  let mut f = tempfile::NamedTempFile::new()?;
  for i in 0..20 {
    writeln!(f, "cuckoo path length: {i}")?;
    if i == 10 {
      f.write_all(b"[thread3] debug \xff\xfe garbage\n")?;
    }
  }
  let ext = all_rules().read_file(f.path())?;
  let want: Vec<f64> = (0..20).map(f64::from).collect();
  assert_eq!(ext.vals(Quantity::PathLen), want.as_slice());
  OK
}

/// Line numbers stay 1-based after binary noise
/// 二进制噪声之后行号仍从 1 开始计数
#[test]
fn test_read_file_binary_then_malformed() -> Void {
  let mut f = tempfile::NamedTempFile::new()?;
  f.write_all(b"\xff\xfe\n")?;
  writeln!(f, "cuckoo path length: x")?;
  match all_rules().read_file(f.path()) {
    Err(Error::Malformed { no, .. }) => assert_eq!(no, 2),
    other => panic!("expected malformed, got {other:?}"),
  }
  OK
}
