use super::purl::Qualifier;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Legacy master spec repository URL
pub const LEGACY_REPOSITORY: &str = "https://github.com/CocoaPods/Specs.git";

/// Name used by Podfile.lock for the CDN-backed trunk repository
pub const CDN_REPOSITORY: &str = "trunk";

/// Kind of git reference a checkout is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitRefType {
    Branch,
    Tag,
    Commit,
}

impl std::str::FromStr for GitRefType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start_matches(':') {
            "branch" => Ok(GitRefType::Branch),
            "tag" => Ok(GitRefType::Tag),
            "commit" => Ok(GitRefType::Commit),
            other => Err(SbomError::invalid_argument(
                "checkout information",
                other,
                "git reference type must be one of branch|tag|commit",
            )
            .into()),
        }
    }
}

/// A pinned git reference (e.g. tag `0.7.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCheckout {
    pub ref_type: GitRefType,
    pub label: String,
}

/// Where a pod was obtained from.
///
/// Each variant contributes at most one purl qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodSource {
    /// A spec repository (trunk, the legacy master repo, or a private repo)
    Repository { url: String },
    /// A git checkout, optionally pinned to a branch, tag or commit
    Git {
        url: String,
        checkout: Option<GitCheckout>,
    },
    /// A pod living on the local filesystem (`:path`)
    LocalPath { path: String },
    /// A pod described by a remote podspec (`:podspec`)
    Podspec { url: String },
}

impl PodSource {
    pub fn repository(url: impl Into<String>) -> Self {
        PodSource::Repository { url: url.into() }
    }

    pub fn git(url: impl Into<String>, checkout: Option<GitCheckout>) -> Self {
        PodSource::Git {
            url: url.into(),
            checkout,
        }
    }

    pub fn local_path(path: impl Into<String>) -> Self {
        PodSource::LocalPath { path: path.into() }
    }

    pub fn podspec(url: impl Into<String>) -> Self {
        PodSource::Podspec { url: url.into() }
    }

    /// The qualifier this source contributes to a pod's purl, if any.
    ///
    /// The public spec repositories are the default and contribute nothing.
    pub fn source_qualifier(&self) -> Option<Qualifier> {
        match self {
            PodSource::Repository { url } => {
                if url == LEGACY_REPOSITORY || url == CDN_REPOSITORY {
                    None
                } else {
                    Some(Qualifier::new("repository_url", url.clone()))
                }
            }
            PodSource::Git { url, checkout } => {
                let value = match checkout {
                    Some(checkout) => format!("{}@{}", url, checkout.label),
                    None => url.clone(),
                };
                Some(Qualifier::new("vcs_url", value))
            }
            PodSource::LocalPath { path } => Some(Qualifier::new("file_name", path.clone())),
            PodSource::Podspec { url } => Some(Qualifier::new("download_url", url.clone())),
        }
    }
}
