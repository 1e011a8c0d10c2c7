// Trial file discovery and grouping by filename tag
// 试验文件发现与按文件名标签分组

use std::path::{Path, PathBuf};

use crate::Result;

/// Files sharing one configuration tag, sorted by file name
/// 共享同一配置标签的文件，按文件名排序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
  pub tag: String,
  pub files: Vec<PathBuf>,
}

/// Longest tag that prefixes the file name
/// 作为文件名前缀的最长标签
fn tag_of<'a>(path: &Path, tags: &'a [String]) -> Option<&'a str> {
  let name = path.file_name()?.to_str()?;
  tags
    .iter()
    .filter(|t| name.starts_with(t.as_str()))
    .max_by_key(|t| t.len())
    .map(String::as_str)
}

/// One group per tag, in tag order; untagged paths are ignored
/// 每个标签一组，按标签顺序；无标签路径被忽略
pub fn group_paths(paths: impl IntoIterator<Item = PathBuf>, tags: &[String]) -> Vec<Group> {
  let mut groups: Vec<Group> = tags
    .iter()
    .map(|tag| Group {
      tag: tag.clone(),
      files: Vec::new(),
    })
    .collect();

  for path in paths {
    let Some(tag) = tag_of(&path, tags) else {
      continue;
    };
    if let Some(g) = groups.iter_mut().find(|g| g.tag == tag) {
      g.files.push(path);
    }
  }

  for g in &mut groups {
    g.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  }
  groups
}

/// List regular files in `dir` (symlinks followed) and group them
/// 列出 `dir` 中的普通文件（跟随符号链接）并分组
pub fn discover(dir: &Path, tags: &[String]) -> Result<Vec<Group>> {
  let mut paths = Vec::new();
  for entry in std::fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_file() {
      paths.push(path);
    }
  }
  Ok(group_paths(paths, tags))
}
