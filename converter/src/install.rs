//! Self-install: copy the running executable onto the PATH

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use converter_core::ConverterError;
use crate::config::Config;

const BINARY_NAME: &str = "converter";

/// Where the binary goes and what to tell the user afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub dir: PathBuf,
    pub path: PathBuf,
    /// Create `dir` if it does not exist yet
    pub create_dir: bool,
    /// Remind the user to put `dir` on their PATH
    pub path_hint: bool,
}

/// Resolve the install target for `os` (as in `std::env::consts::OS`)
pub fn target_for(os: &str, home: Option<&Path>, override_dir: Option<&Path>) -> InstallTarget {
    let file_name = if os == "windows" {
        format!("{}.exe", BINARY_NAME)
    } else {
        BINARY_NAME.to_string()
    };

    if let Some(dir) = override_dir {
        return InstallTarget {
            dir: dir.to_path_buf(),
            path: dir.join(&file_name),
            create_dir: true,
            path_hint: true,
        };
    }

    if os == "windows" {
        let home = home.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
        let apps = home.join("AppData").join("Local").join("Microsoft").join("WindowsApps");
        let (dir, create_dir) = if apps.exists() {
            (apps, false)
        } else {
            (home.join("bin"), true)
        };
        return InstallTarget {
            path: dir.join(&file_name),
            dir,
            create_dir,
            path_hint: true,
        };
    }

    let dir = PathBuf::from("/usr/local/bin");
    InstallTarget {
        path: dir.join(&file_name),
        dir,
        create_dir: false,
        path_hint: false,
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Copy the current executable to the platform target.
///
/// Returns the lines to print on success.
pub fn install(config: &Config) -> Result<Vec<String>, ConverterError> {
    let source = env::current_exe()
        .map_err(|e| ConverterError::install_failed(format!("cannot locate running executable: {}", e)))?;
    let target = target_for(env::consts::OS, home_dir().as_deref(), config.install_dir.as_deref());
    debug!(source = %source.display(), target = %target.path.display(), "installing");

    copy_executable(&source, &target).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => {
            ConverterError::permission_denied(format!("sudo {} --install", source.display()))
        }
        _ => ConverterError::install_failed(e.to_string()),
    })?;

    info!(path = %target.path.display(), "installed");
    let mut lines = vec![format!("✓ Installed to {}", target.path.display())];
    if target.path_hint {
        lines.push("Add the directory to your PATH if not already done.".to_string());
    }
    lines.push(format!(
        "Installation complete! You can now use '{}' from anywhere.",
        BINARY_NAME
    ));
    Ok(lines)
}

fn copy_executable(source: &Path, target: &InstallTarget) -> io::Result<()> {
    if target.create_dir {
        fs::create_dir_all(&target.dir)?;
    }
    fs::copy(source, &target.path)?;
    set_executable(&target.path)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
