//! src/git.rs

use crate::error::{AppError, AppResult};
use crate::text::HASH_LEN;
use chrono::Utc;
use git2::{BranchType, Oid, Repository, Sort};
use std::path::{Path, PathBuf};

/// A single commit on the current branch, as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full hex object id. Always at least [`HASH_LEN`] characters.
    pub id: String,
    /// First line of the commit message. May be empty.
    pub summary: String,
    /// Author display name.
    pub author: String,
    /// Humanized age, e.g. "2 hours ago".
    pub relative_time: String,
}

impl CommitRecord {
    /// Short id plus subject, the label a list row starts from.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.short_id(), self.summary)
    }

    /// The abbreviated hash shown in the list gutter.
    pub fn short_id(&self) -> &str {
        &self.id[..HASH_LEN]
    }
}

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    pub fn new<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let repo = Repository::discover(path.as_ref())?;
        let path = repo
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repo.path().to_path_buf());
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Commits unique to the current branch, most recent first.
    ///
    /// Walks from HEAD down to the merge base with the default branch,
    /// skipping merge commits and commits already marked as fixup or
    /// squash material.
    pub fn list_branch_commits(&self) -> AppResult<Vec<CommitRecord>> {
        let head = self.repo.head()?.peel_to_commit()?;
        let base = self.merge_base_with_default(head.id())?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head.id())?;
        revwalk.hide(base)?;
        revwalk.set_sorting(Sort::TIME)?;

        let now = Utc::now().timestamp();
        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                continue;
            }
            let summary = commit.summary().unwrap_or("").to_string();
            if summary.starts_with("fixup!") || summary.starts_with("squash!") {
                continue;
            }
            let author = commit.author();
            commits.push(CommitRecord {
                id: commit.id().to_string(),
                summary,
                author: author.name().unwrap_or("Unknown").to_string(),
                relative_time: relative_time(now - author.when().seconds()),
            });
        }
        Ok(commits)
    }

    /// Commits the staged index as `fixup! <subject>` of the given commit,
    /// the same commit `git commit --fixup <id>` would create.
    pub fn create_fixup(&self, id: &str) -> AppResult<()> {
        let target = self.repo.find_commit(Oid::from_str(id)?)?;
        let subject = target.summary().unwrap_or("").to_string();

        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let parent = self.repo.head()?.peel_to_commit()?;
        if tree_id == parent.tree_id() {
            return Err(AppError::FixupFailed(
                "no staged changes to commit".to_string(),
            ));
        }

        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let message = format!("fixup! {}", subject);
        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            &message,
            &tree,
            &[&parent],
        )?;
        Ok(())
    }

    fn merge_base_with_default(&self, head: Oid) -> AppResult<Oid> {
        for name in ["main", "master"] {
            if let Ok(branch) = self.repo.find_branch(name, BranchType::Local) {
                if let Some(target) = branch.get().target() {
                    return Ok(self.repo.merge_base(head, target)?);
                }
            }
        }
        Err(AppError::NoUpstream)
    }
}

/// Humanizes an age in seconds, e.g. "2 hours ago".
fn relative_time(seconds: i64) -> String {
    let diff = seconds.max(0) as u64;
    if diff < 60 {
        "just now".to_string()
    } else if diff < 3_600 {
        count_ago(diff / 60, "minute")
    } else if diff < 86_400 {
        count_ago(diff / 3_600, "hour")
    } else if diff < 604_800 {
        count_ago(diff / 86_400, "day")
    } else if diff < 2_592_000 {
        count_ago(diff / 604_800, "week")
    } else if diff < 31_536_000 {
        count_ago(diff / 2_592_000, "month")
    } else {
        count_ago(diff / 31_536_000, "year")
    }
}

fn count_ago(count: u64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}
