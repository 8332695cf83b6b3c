//! Version and build information.
//!
//! Provides the package version, git commit and build metadata embedded
//! by `build.rs`.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl BuildInfo {
    /// One-line form used in the help header, e.g. `quadsolve 0.1.0 (a1b2c3d)`.
    pub fn short(&self) -> String {
        match self.commit {
            Some(commit) => format!("quadsolve {} ({})", self.version, commit),
            None => format!("quadsolve {}", self.version),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quadsolve {}", self.version)?;

        if let Some(commit) = self.commit {
            write!(f, "\nCommit: {}", commit)?;
        }

        if let Some(date) = self.build_date {
            write!(f, "\nBuilt: {}", date)?;
        }

        write!(f, "\nTarget: {}", self.target)?;

        if let Some(rustc) = self.rustc_version {
            write!(f, "\nRustc: {}", rustc)?;
        }

        Ok(())
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("QUADSOLVE_GIT_HASH"),
        build_date: option_env!("QUADSOLVE_BUILD_DATE"),
        target: std::env::consts::ARCH,
        rustc_version: option_env!("QUADSOLVE_RUSTC_VERSION"),
    }
}
