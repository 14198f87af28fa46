use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HTTP_PORT: u16 = 8000;
const DEFAULT_ARTICLES_PATH: &str = "db/articles.json";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_DOCS_DIR: &str = "docs";

#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port (articles API + health)
    pub http_port: u16,
    /// JSON file holding the article collection
    pub articles_path: PathBuf,
    /// Write an empty collection at startup when the file is missing
    pub init_store: bool,
    /// Serialize load/mutate/save of mutating operations
    pub serialize_writes: bool,
    /// Static files served for unmatched paths
    pub public_dir: PathBuf,
    /// Static files served under /importantDocuments
    pub docs_dir: PathBuf,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_port(self.http_port)?;
        validate_path("ARTICLES_DB_PATH", &self.articles_path)?;
        validate_path("ARTICLES_PUBLIC_DIR", &self.public_dir)?;
        validate_path("ARTICLES_DOCS_DIR", &self.docs_dir)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), AppError> {
    if port == 0 {
        return Err(AppError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Validates that a configured path is not empty or whitespace-only.
fn validate_path(name: &str, path: &std::path::Path) -> Result<(), AppError> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(AppError::Config(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Parse a boolean flag: true/false/1/0, case-insensitive.
fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::Config(format!(
            "Invalid boolean for {name}: {other}"
        ))),
    }
}

fn env_flag(name: &str) -> Result<bool, AppError> {
    match env::var(name) {
        Ok(raw) => parse_bool(name, &raw),
        Err(_) => Ok(false),
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let http_port = match env::var("HTTP_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid HTTP_PORT: {e}")))?,
        Err(_) => DEFAULT_HTTP_PORT,
    };

    let settings = Settings {
        http_port,
        articles_path: env_path("ARTICLES_DB_PATH", DEFAULT_ARTICLES_PATH),
        init_store: env_flag("ARTICLES_DB_INIT")?,
        serialize_writes: env_flag("ARTICLES_SERIALIZE_WRITES")?,
        public_dir: env_path("ARTICLES_PUBLIC_DIR", DEFAULT_PUBLIC_DIR),
        docs_dir: env_path("ARTICLES_DOCS_DIR", DEFAULT_DOCS_DIR),
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}

/// Port used by the `healthcheck` subcommand, falling back to the default.
#[must_use]
pub fn http_port_or_default() -> u16 {
    env::var("HTTP_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_HTTP_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            http_port: 8000,
            articles_path: PathBuf::from("db/articles.json"),
            init_store: false,
            serialize_writes: false,
            public_dir: PathBuf::from("public"),
            docs_dir: PathBuf::from("docs"),
        }
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(8000).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let err = validate_port(0).unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_validate_path_whitespace_fails() {
        let err = validate_path("ARTICLES_DB_PATH", std::path::Path::new("   ")).unwrap_err();
        assert!(err.to_string().contains("ARTICLES_DB_PATH cannot be empty"));
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "false").unwrap());
        assert!(!parse_bool("X", " 0 ").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("ARTICLES_DB_INIT", "yes please").unwrap_err();
        assert!(err.to_string().contains("ARTICLES_DB_INIT"));
    }

    #[test]
    fn test_settings_validate_success() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn test_settings_validate_zero_port_fails() {
        let settings = Settings {
            http_port: 0,
            ..settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_empty_articles_path_fails() {
        let settings = Settings {
            articles_path: PathBuf::new(),
            ..settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_empty_docs_dir_fails() {
        let settings = Settings {
            docs_dir: PathBuf::from(""),
            ..settings()
        };
        assert!(settings.validate().is_err());
    }
}
