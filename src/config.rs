use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the database location when set to a non-empty path.
pub(crate) const DB_ENV_VAR: &str = "SPENDLOG_DB";

pub(crate) fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();
}

pub(crate) fn get_db_path() -> Result<PathBuf> {
    if let Some(path) = db_path_override(std::env::var_os(DB_ENV_VAR)) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        return Ok(path);
    }

    let proj_dirs = directories::ProjectDirs::from("com", "spendlog", "Spendlog")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("spendlog.db"))
}

fn db_path_override(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_used_when_set() {
        assert_eq!(
            db_path_override(Some("/tmp/x.db".into())),
            Some(PathBuf::from("/tmp/x.db"))
        );
    }

    #[test]
    fn test_empty_override_ignored() {
        assert_eq!(db_path_override(Some(OsString::new())), None);
        assert_eq!(db_path_override(None), None);
    }
}
