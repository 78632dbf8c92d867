//! SDK Model
//!
//! Filesystem lookups within a resolved Android SDK root: latest
//! `build-tools` directory, named build tools, and the command-line tools
//! `bin` directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::environment::Environment;
use crate::version::Version;

/// SDK locator errors.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Neither `ANDROID_HOME` nor `ANDROID_SDK_ROOT` held a usable value.
    #[error("no SDK location configured ({} / {} unset)", crate::ANDROID_HOME_ENV, crate::ANDROID_SDK_ROOT_ENV)]
    NoSdkRoot,

    /// The `build-tools` directory is missing or holds no version directories.
    #[error("failed to find latest build-tools dir")]
    NoBuildTools,

    /// A named tool is absent from the latest build-tools directory.
    #[error("tool ({tool}) not found at: {}", path.display())]
    ToolNotFound {
        /// The requested tool name.
        tool: String,
        /// The path that was checked.
        path: PathBuf,
    },

    /// No known command-line tools layout exists under the SDK root.
    #[error("command-line tools not found in {}", .0.display())]
    NoCmdlineTools(PathBuf),

    /// Underlying filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for SDK lookups.
pub type Result<T> = std::result::Result<T, SdkError>;

/// A located Android SDK installation.
///
/// Holds only the resolved root; every lookup reads the filesystem fresh.
#[derive(Debug, Clone)]
pub struct AndroidSdk {
    root: PathBuf,
}

impl AndroidSdk {
    /// Create a model rooted at an explicit SDK directory.
    ///
    /// The path is not checked for existence; individual lookups fail later
    /// if the layout they need is missing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the SDK root from captured environment configuration.
    pub fn from_env(env: &Environment) -> Result<Self> {
        let root = env.sdk_root().ok_or(SdkError::NoSdkRoot)?;
        debug!(root, "resolved SDK root");
        Ok(Self::new(root))
    }

    /// The resolved SDK root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the highest-versioned entry under `<root>/build-tools`.
    pub fn latest_build_tools_dir(&self) -> Result<PathBuf> {
        let build_tools = self.root.join("build-tools");
        latest_version_dir(&build_tools)?.ok_or(SdkError::NoBuildTools)
    }

    /// Full path of `tool` inside the latest build-tools directory.
    ///
    /// Verifies the file exists; it is not checked for executability.
    pub fn latest_build_tool_path(&self, tool: &str) -> Result<PathBuf> {
        let path = self.latest_build_tools_dir()?.join(tool);
        if !path.exists() {
            return Err(SdkError::ToolNotFound {
                tool: tool.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// `bin` directory of the command-line tools.
    ///
    /// Probes, in order: the legacy flat `tools/bin` layout, the
    /// `cmdline-tools/latest` alias, then the highest numbered
    /// `cmdline-tools` version.
    pub fn cmdline_tools_path(&self) -> Result<PathBuf> {
        let legacy = self.root.join("tools").join("bin");
        if legacy.is_dir() {
            return Ok(legacy);
        }

        let cmdline_tools = self.root.join("cmdline-tools");
        let latest = cmdline_tools.join("latest").join("bin");
        if latest.is_dir() {
            return Ok(latest);
        }

        if let Some(versioned) = latest_version_dir(&cmdline_tools)? {
            let bin = versioned.join("bin");
            if bin.is_dir() {
                return Ok(bin);
            }
        }

        Err(SdkError::NoCmdlineTools(self.root.clone()))
    }
}

/// Subdirectory of `parent` whose name parses as the greatest dotted version.
///
/// A missing parent yields `Ok(None)`; non-version names are skipped.
fn latest_version_dir(parent: &Path) -> Result<Option<PathBuf>> {
    let entries = match fs::read_dir(parent) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut latest: Option<(Version, PathBuf)> = None;
    for entry in entries {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let version = match name.parse::<Version>() {
            Ok(version) => version,
            Err(_) => {
                debug!(name, parent = %parent.display(), "skipping non-version directory");
                continue;
            }
        };
        match &latest {
            Some((best, _)) if *best >= version => {}
            _ => latest = Some((version, path)),
        }
    }

    Ok(latest.map(|(_, path)| path))
}
