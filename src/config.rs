use dotenvy::dotenv;
use std::env;

/// Runtime configuration, read once at process start. No hot reload.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    /// Private-network address of the database instance, used when
    /// `use_private_ip` is set. Falls back to `db_host` when absent.
    pub db_private_host: Option<String>,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub use_private_ip: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_private_host: env::var("DB_PRIVATE_HOST").ok(),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .expect("DB_PORT must be a number"),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_pass: env::var("DB_PASS").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "fichajes_db".to_string()),
            use_private_ip: parse_flag(&env::var("USE_PRIVATE_IP").unwrap_or_default()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_true_case_insensitive() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("True"));
    }

    #[test]
    fn parse_flag_rejects_everything_else() {
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("yes"));
    }
}
