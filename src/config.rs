use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub log_file_path: PathBuf,
}

impl Config {
    /// Location of the TOML config file, preferring the platform config
    /// directory and falling back to the working directory.
    pub fn default_file() -> PathBuf {
        let mut path = ProjectDirs::from("dev", "ProjectMgmt", "ProjectMgmt Server")
            .map(|dirs| PathBuf::from(dirs.config_dir()))
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("projectmgmt.toml");
        path
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut log_file_path = [".", "logs"].iter().collect();

        if let Some(proj_dirs) = ProjectDirs::from("dev", "ProjectMgmt", "ProjectMgmt Server") {
            log_file_path = PathBuf::from(proj_dirs.data_dir());
            log_file_path.push("logs");
        }

        Self {
            port: 4000,
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "projectmgmt".to_string(),
            log_file_path,
        }
    }
}
