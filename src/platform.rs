// linemarks platform paths
// Linux:   $XDG_CONFIG_HOME/linemarks, $XDG_DATA_HOME/linemarks
// macOS:   ~/Library/Application Support/linemarks
// Windows: %APPDATA%/linemarks

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "linemarks";

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join(".config"))
            .join(APP_DIR)
    }
    #[cfg(not(target_os = "linux"))]
    {
        get_data_dir()
    }
}

/// Directory holding the state database.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join(".local").join("share"))
            .join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".linemarks")
    }
}
