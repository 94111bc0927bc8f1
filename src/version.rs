//! `--version` output.

/// Git metadata captured at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub commit: &'static str,
    pub branch: &'static str,
    pub dirty: bool,
    /// Commit time as unix seconds
    pub build_time: &'static str,
    /// Most recent tag reachable from the commit
    pub tag: &'static str,
}

const fn or_empty(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => "",
    }
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            commit: or_empty(option_env!("TTYHOP_GIT_COMMIT")),
            branch: or_empty(option_env!("TTYHOP_GIT_BRANCH")),
            dirty: or_empty(option_env!("TTYHOP_GIT_DIRTY")) == "true",
            build_time: or_empty(option_env!("TTYHOP_GIT_TIME")),
            tag: or_empty(option_env!("TTYHOP_GIT_TAG")),
        }
    }

    /// `ttyhop version <version>[.<build time>]` plus commit, tag and
    /// branch details.
    ///
    /// Commit and tag are omitted for dirty builds. The tag is also omitted
    /// when the version already names it. The branch is omitted on `main`
    /// (and for a detached `HEAD`).
    pub fn version_line(&self, version: &str) -> String {
        let version = version.trim();
        let build_time = self.build_time.trim();
        let base = if build_time.is_empty() {
            version.to_string()
        } else {
            format!("{version}.{build_time}")
        };

        let mut details = Vec::new();
        if !self.dirty {
            if self.commit.len() >= 7 {
                details.push(format!("Commit: {}", &self.commit[..7]));
            }
            if self.shows_tag(version) {
                details.push(format!("Tag: {}", self.tag));
            }
        }
        if !self.branch.is_empty() && self.branch != "main" && self.branch != "HEAD" {
            details.push(format!("Branch: `{}`", self.branch));
        }

        if details.is_empty() {
            format!("ttyhop version {base}")
        } else {
            format!("ttyhop version {base} ({})", details.join(", "))
        }
    }

    fn shows_tag(&self, version: &str) -> bool {
        let tag = self.tag.trim();
        if tag.is_empty() || tag == "(none)" {
            return false;
        }
        let bare = tag.strip_prefix('v').unwrap_or(tag);
        !(version.starts_with(tag) || version.starts_with(bare))
    }
}
