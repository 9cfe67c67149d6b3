/// Production deployment on Render; sleeps when idle, so the first
/// request after a quiet period may stall or fail.
const PRODUCTION_URL: &str = "https://rocket-engine-backend.onrender.com";

/// Local development backend.
const LOCAL_URL: &str = "http://localhost:8080";

/// Which backend deployment an invocation is aimed at.
///
/// Resolved once from the `--local` flag at startup; there is no other
/// way to select a backend (no env vars, no config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Local,
    Production,
}

impl Target {
    /// Resolve the target from the `--local` flag.
    pub fn from_flag(local: bool) -> Self {
        if local {
            Target::Local
        } else {
            Target::Production
        }
    }

    /// Base URL of the selected deployment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Target::Local => LOCAL_URL,
            Target::Production => PRODUCTION_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_flag_selects_local_backend() {
        assert_eq!(Target::from_flag(true), Target::Local);
        assert_eq!(Target::from_flag(true).base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(Target::from_flag(false), Target::Production);
        assert_eq!(
            Target::from_flag(false).base_url(),
            "https://rocket-engine-backend.onrender.com"
        );
    }
}
