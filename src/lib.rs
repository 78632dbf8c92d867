//! Android SDK Locator
//!
//! Resolves the location of an installed Android SDK and locates
//! version-specific tool directories within it:
//!
//! - **Root resolution**: picks the active SDK root from `ANDROID_HOME`
//!   (preferred) or `ANDROID_SDK_ROOT` (fallback).
//! - **Build tools**: finds the highest-versioned `build-tools` subdirectory
//!   and resolves named executables inside it.
//! - **Command-line tools**: finds the `cmdline-tools` layout in use,
//!   preferring the legacy flat `tools/bin`, then the `latest` alias, then
//!   the highest numbered version.
//!
//! Every lookup runs fresh against the filesystem; nothing is cached across
//! calls.
//!
//! ```no_run
//! use android_sdk_locator::{AndroidSdk, Environment};
//!
//! # fn main() -> android_sdk_locator::Result<()> {
//! let sdk = AndroidSdk::from_env(&Environment::from_env())?;
//! let zipalign = sdk.latest_build_tool_path("zipalign")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod environment;
pub mod sdk;
pub mod version;

pub use environment::Environment;
pub use sdk::{AndroidSdk, Result, SdkError};
pub use version::Version;

/// Preferred SDK root environment variable.
pub const ANDROID_HOME_ENV: &str = "ANDROID_HOME";

/// Fallback SDK root environment variable.
pub const ANDROID_SDK_ROOT_ENV: &str = "ANDROID_SDK_ROOT";
