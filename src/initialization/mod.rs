//! Application initialization.
//!
//! This module provides the one-time setup the binary performs before
//! running a comparison:
//! - `.env` loading (so `RUST_LOG` can live there)
//! - Logger initialization

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Loads environment variables from a `.env` file, if one exists.
///
/// Tries the current directory first, then the directory of the executable.
/// A missing file is not an error.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}
