use std::{fs, path::Path};

use aok::{OK, Void};
use bench_agg::{Aggregator, Combine, Combined, Error, GroupRun, discover};
use bench_log::{Classifier, Quantity, Rule};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn tags() -> Vec<String> {
  ["tput_04", "tput_08", "tput_16"]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}

fn write_trial(dir: &Path, name: &str, tput: &[&str]) -> std::io::Result<()> {
  let mut text = String::from("[bench] power = 22\n");
  for t in tput {
    text.push_str(&format!("[bench] operations_tput = {t} MOPS\n"));
    text.push_str("[bench] ignore this line 0\n");
  }
  fs::write(dir.join(name), text)
}

fn combined(run: &GroupRun) -> &Combined {
  match &run.combined {
    Ok(c) => c,
    Err(e) => panic!("group {} failed: {e}", run.tag),
  }
}

fn tput_agg() -> Aggregator {
  Aggregator::new(Classifier::new([Rule::tput()]), Quantity::Tput)
}

#[test]
fn test_mean_of_two_trials() -> Void {
  let dir = tempfile::tempdir()?;
  write_trial(dir.path(), "tput_04_1", &["10.0", "20.0"])?;
  write_trial(dir.path(), "tput_04_2", &["30.0", "40.0"])?;
  fs::write(dir.path().join("README"), "not a trial")?;

  let runs = tput_agg().expected(Some(2)).run_dir(dir.path(), &tags())?;
  assert_eq!(runs.len(), 3);
  let c = combined(&runs[0]);
  assert_eq!(c.vals, vec![20.0, 30.0]);
  assert_eq!(c.contrib, vec![2, 2]);
  assert!(runs[0].skipped.is_empty());

  // no files for 8-way and 16-way / 8 路和 16 路没有文件
  assert!(matches!(runs[1].combined, Err(Error::EmptyGroup(_))));
  assert!(matches!(runs[2].combined, Err(Error::EmptyGroup(_))));
  OK
}

/// A malformed file is dropped, its siblings still aggregate
/// 格式错误的文件被丢弃，同组其余文件仍然聚合
#[test]
fn test_malformed_file_excluded() -> Void {
  let dir = tempfile::tempdir()?;
  write_trial(dir.path(), "tput_08_1", &["10.0", "20.0"])?;
  write_trial(dir.path(), "tput_08_2", &["abc", "20.0"])?;
  write_trial(dir.path(), "tput_08_3", &["30.0", "40.0"])?;

  let runs = tput_agg()
    .expected(Some(2))
    .how(Combine::Sum)
    .run_dir(dir.path(), &tags())?;
  let run = &runs[1];
  assert_eq!(run.tag, "tput_08");
  assert_eq!(run.skipped.len(), 1);
  assert!(run.skipped[0].0.ends_with("tput_08_2"));
  assert!(matches!(
    run.skipped[0].1,
    bench_log::Error::Malformed { no: 2, .. }
  ));

  let c = combined(run);
  assert_eq!(c.vals, vec![40.0, 60.0]);
  assert_eq!(c.files.len(), 2);
  OK
}

/// A short trial fails its own group only
/// 样本不足的试验只导致其所在组失败
#[test]
fn test_short_trial_fails_group() -> Void {
  let dir = tempfile::tempdir()?;
  write_trial(dir.path(), "tput_04_1", &["1.0", "2.0", "3.0"])?;
  write_trial(dir.path(), "tput_04_2", &["1.0", "2.0"])?;
  write_trial(dir.path(), "tput_16_1", &["5.0", "6.0", "7.0"])?;

  let runs = tput_agg().expected(Some(3)).run_dir(dir.path(), &tags())?;
  match &runs[0].combined {
    Err(Error::SampleCountMismatch {
      path,
      expected,
      found,
      ..
    }) => {
      assert!(path.ends_with("tput_04_2"));
      assert_eq!((*expected, *found), (3, 2));
    }
    other => panic!("expected mismatch, got {other:?}"),
  }
  let c = combined(&runs[2]);
  assert_eq!(c.vals, vec![5.0, 6.0, 7.0]);
  info!("16-way survived: {:?}", c.vals);
  OK
}

#[test]
fn test_discover_sorted() -> Void {
  let dir = tempfile::tempdir()?;
  for name in ["tput_16_b", "tput_16_a", "tput_16_c"] {
    write_trial(dir.path(), name, &["1.0"])?;
  }
  fs::create_dir(dir.path().join("tput_16_dir"))?;
  let groups = discover(dir.path(), &tags())?;
  let names: Vec<_> = groups[2]
    .files
    .iter()
    .filter_map(|p| p.file_name()?.to_str().map(str::to_owned))
    .collect();
  assert_eq!(names, vec!["tput_16_a", "tput_16_b", "tput_16_c"]);
  OK
}

/// Symlinked trial files are discovered and read
/// 符号链接的试验文件同样被发现并读取
#[cfg(unix)]
#[test]
fn test_discover_symlink() -> Void {
  let src = tempfile::tempdir()?;
  let dir = tempfile::tempdir()?;
  write_trial(src.path(), "trial", &["4.0", "6.0"])?;
  write_trial(dir.path(), "tput_08_1", &["2.0", "2.0"])?;
  std::os::unix::fs::symlink(src.path().join("trial"), dir.path().join("tput_08_2"))?;
  // dangling link is not a file / 悬空链接不是文件
  std::os::unix::fs::symlink(src.path().join("gone"), dir.path().join("tput_08_3"))?;

  let groups = discover(dir.path(), &tags())?;
  assert_eq!(groups[1].files.len(), 2);

  let runs = tput_agg().expected(Some(2)).run_dir(dir.path(), &tags())?;
  let c = combined(&runs[1]);
  assert_eq!(c.vals, vec![3.0, 4.0]);
  OK
}

mod prop {
  use std::path::PathBuf;

  use bench_agg::{Combine, Trial, combine};
  use proptest::prelude::*;

  proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// k identical trials: sum is k times the series, mean is the series
    /// k 个相同试验：求和为序列的 k 倍，均值即原序列
    #[test]
    fn prop_identical_trials(
      vals in prop::collection::vec(-1_000_000i32..1_000_000, 1..200),
      k in 1usize..8,
    ) {
      let vals: Vec<f64> = vals.into_iter().map(f64::from).collect();
      let trials: Vec<Trial> = (0..k)
        .map(|i| Trial { path: PathBuf::from(format!("t{i}")), vals: vals.clone() })
        .collect();

      let sum = combine("t", &trials, Some(vals.len()), Combine::Sum).expect("sum");
      let want: Vec<f64> = vals.iter().map(|v| v * k as f64).collect();
      prop_assert_eq!(sum.vals, want);

      let mean = combine("t", &trials, None, Combine::Mean).expect("mean");
      prop_assert_eq!(mean.vals, vals);
      prop_assert!(mean.contrib.iter().all(|&c| c == k));
    }
  }
}
