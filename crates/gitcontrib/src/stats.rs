// File: crates/gitcontrib/src/stats.rs
// Summary: Parses `git log --shortstat` output into per-author totals.

use std::collections::BTreeMap;
use std::io::BufRead;

use clap::ValueEnum;
use thiserror::Error;

/// Pretty format passed to `git log`; one header line per commit.
pub const LOG_FORMAT: &str = "--format=name:<%an>,email:<%ae>";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("line {line}: malformed shortstat `{text}`")]
    Shortstat { line: usize, text: String },
    #[error("line {line}: shortstat before any commit header")]
    Orphan { line: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which total to plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Stat {
    #[default]
    Commits,
    #[value(name = "fileschanged")]
    FilesChanged,
    Insertions,
    Deletions,
}

impl Stat {
    pub fn name(self) -> &'static str {
        match self {
            Stat::Commits => "commits",
            Stat::FilesChanged => "files changed",
            Stat::Insertions => "insertions",
            Stat::Deletions => "deletions",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorStats {
    pub name: String,
    pub email: String,
    pub commits: u64,
    pub files_changed: u64,
    pub insertions: u64,
    pub deletions: u64,
}

impl AuthorStats {
    pub fn get(&self, stat: Stat) -> u64 {
        match stat {
            Stat::Commits => self.commits,
            Stat::FilesChanged => self.files_changed,
            Stat::Insertions => self.insertions,
            Stat::Deletions => self.deletions,
        }
    }

    pub fn delta(&self) -> i64 {
        self.insertions as i64 - self.deletions as i64
    }

    /// Add one shortstat line, e.g. `3 files changed, 10 insertions(+), 2 deletions(-)`.
    fn add_shortstat(&mut self, text: &str) -> Option<()> {
        for part in text.split(',') {
            let (count, kind) = part.trim().split_once(' ')?;
            let n: u64 = count.parse().ok()?;
            let kind = kind.trim();
            if kind.starts_with("file") {
                self.files_changed += n;
            } else if kind.starts_with("insertion") {
                self.insertions += n;
            } else if kind.starts_with("deletion") {
                self.deletions += n;
            } else {
                return None;
            }
        }
        Some(())
    }
}

/// Totals keyed by author email.
#[derive(Debug, Default)]
pub struct Contributions {
    authors: BTreeMap<String, AuthorStats>,
}

impl Contributions {
    /// Author names are not always UTF-8 in old histories, so lines are
    /// decoded lossily instead of rejected.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, StatsError> {
        let mut authors: BTreeMap<String, AuthorStats> = BTreeMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            let lineno = idx + 1;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if let Some((name, email)) = parse_header(text) {
                let entry = authors.entry(email.to_string()).or_insert_with(|| AuthorStats {
                    name: name.to_string(),
                    email: email.to_string(),
                    ..AuthorStats::default()
                });
                entry.commits += 1;
                current = Some(email.to_string());
            } else if is_shortstat(text) {
                let author = current
                    .as_ref()
                    .and_then(|email| authors.get_mut(email))
                    .ok_or(StatsError::Orphan { line: lineno })?;
                author
                    .add_shortstat(text)
                    .ok_or_else(|| StatsError::Shortstat { line: lineno, text: text.to_string() })?;
            } else {
                log::debug!("line {lineno}: ignored `{text}`");
            }
        }
        log::debug!("parsed {} author(s)", authors.len());
        Ok(Self { authors })
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn by_email(&self, email: &str) -> Option<&AuthorStats> {
        self.authors.get(email)
    }

    /// Authors ordered by `stat` descending, then by name.
    pub fn ranked(&self, stat: Stat) -> Vec<&AuthorStats> {
        let mut out: Vec<&AuthorStats> = self.authors.values().collect();
        out.sort_by(|a, b| b.get(stat).cmp(&a.get(stat)).then_with(|| a.name.cmp(&b.name)));
        out
    }
}

fn parse_header(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("name:<")?;
    let (name, rest) = rest.split_once(">,email:<")?;
    let email = rest.strip_suffix('>')?;
    Some((name, email))
}

fn is_shortstat(text: &str) -> bool {
    text.contains("files changed") || text.contains("file changed")
}
