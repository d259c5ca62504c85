use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use crate::errors::{Error, Result};
use crate::io;

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::ConfigExists(config_path));
    }

    io::write_file(&config_path, DEFAULT_CONFIG)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();

        let config = load_config_from(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.examples(), vec!["12-345.6789"]);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init_config_in(temp.path(), false).unwrap_err();
        assert!(matches!(err, Error::ConfigExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config_in(temp.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
