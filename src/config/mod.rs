use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration.
///
/// The bootstrap email lists are deploy-time configuration, not code:
/// identities listed here are granted their tier regardless of anything
/// in the mutable roster, so the venue can never lock itself out by
/// editing staff data.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_venue_name")]
    pub venue_name: String,
    /// Emails always resolved as owners.
    #[serde(default = "default_bootstrap_owners")]
    pub bootstrap_owners: Vec<String>,
    /// Emails always resolved as managers.
    #[serde(default = "default_bootstrap_managers")]
    pub bootstrap_managers: Vec<String>,
}

fn default_venue_name() -> String {
    "Mr. Smith Bar & Pool".to_string()
}

fn default_bootstrap_owners() -> Vec<String> {
    vec!["dueno@mrsmithbarpool.com".to_string()]
}

fn default_bootstrap_managers() -> Vec<String> {
    vec!["staff@mrsmithbarpool.com".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            venue_name: default_venue_name(),
            bootstrap_owners: default_bootstrap_owners(),
            bootstrap_managers: default_bootstrap_managers(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("barshift")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".barshift")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("barshift.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("barshift.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        let db_path = if let Some(name) = custom_db {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() {
                p
            } else {
                fs::create_dir_all(&dir)?;
                dir.join(p)
            }
        } else {
            fs::create_dir_all(&dir)?;
            dir.join("barshift.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Test mode never touches the real config file.
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
