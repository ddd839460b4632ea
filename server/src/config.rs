use anyhow::Result;
use platform_db::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins = parse_origins(
            &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
        );
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(10);

        Ok(Self {
            cors_allowed_origins,
            database: DatabaseSettings::from_env().with_max_connections(max_connections),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "*" {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://localhost:5173 , ,https://hr.example.com"),
            ["http://localhost:5173", "https://hr.example.com"]
        );
    }

    #[test]
    fn wildcard_means_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("").is_empty());
    }
}
