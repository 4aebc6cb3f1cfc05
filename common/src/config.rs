//! Global seeder configuration.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton holding the
//! values read from `.env` and the process environment. Tests can override single
//! fields through the per-field setters and restore the environment with [`AppConfig::reset`].

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Complete configuration of the seeding tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// SQLite file path, or a full `sqlite:` DSN.
    pub database_path: String,
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default so a fresh checkout can seed a local database
    /// without any environment at all.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "course-seeder".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "seeder=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "seeder.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/dev.db".into()),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into()),
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrador".into()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".into()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered rather than propagated; the config holds plain data.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reloads the configuration from the environment, discarding overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_admin_email(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.admin_email = value.into());
    }

    pub fn set_admin_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.admin_name = value.into());
    }

    pub fn set_admin_password(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.admin_password = value.into());
    }
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn admin_email() -> String {
    AppConfig::global().admin_email.clone()
}

pub fn admin_name() -> String {
    AppConfig::global().admin_name.clone()
}

pub fn admin_password() -> String {
    AppConfig::global().admin_password.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        AppConfig::set_database_path("tmp/override.db");
        AppConfig::set_admin_email("root@example.com");
        assert_eq!(database_path(), "tmp/override.db");
        assert_eq!(admin_email(), "root@example.com");

        AppConfig::reset();
        assert_ne!(admin_email(), "root@example.com");
    }

    #[test]
    #[serial]
    fn project_name_override() {
        AppConfig::set_project_name("cursos-demo");
        assert_eq!(project_name(), "cursos-demo");

        AppConfig::reset();
        assert_ne!(project_name(), "cursos-demo");
    }

    #[test]
    #[serial]
    fn log_to_stdout_override() {
        AppConfig::set_log_to_stdout(true);
        assert!(log_to_stdout());
        AppConfig::set_log_to_stdout(false);
        assert!(!log_to_stdout());
        AppConfig::reset();
    }
}
