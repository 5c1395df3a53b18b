use config::{Config, Environment, File};
use failure;
use num_cpus;

use std::env;
use std::sync::{RwLock, RwLockReadGuard};

lazy_static! {
    #[allow(missing_debug_implementations)]
    pub static ref SETTINGS: RwLock<Settings> = RwLock::new(Settings::default());
}

#[macro_export]
macro_rules! get_settings {
    () => {
        $crate::settings::read()
    };
}

/// Reads `Settings.toml` when present, then `LEDGER_*` variables. Only
/// top-level keys are taken from the environment.
pub fn init() -> Result<(), failure::Error> {
    debug!("Initializing settings");

    let mut c = Config::new();
    c.merge(File::with_name("Settings").required(false))?;
    c.merge(Environment::with_prefix("LEDGER"))?;
    let loaded = c.try_into::<Settings>()?;

    let mut settings = SETTINGS
        .write()
        .map_err(|_| format_err!("Settings lock is poisoned"))?;
    *settings = loaded;

    Ok(())
}

pub fn read() -> RwLockReadGuard<'static, Settings> {
    SETTINGS.read().unwrap_or_else(|e| e.into_inner())
}

pub fn database_url() -> Result<String, failure::Error> {
    let settings = get_settings!();
    match settings.database_url {
        Some(ref url) => Ok(url.clone()),
        None => env::var("DATABASE_URL")
            .map_err(|_| format_err!("Neither database_url nor DATABASE_URL is set")),
    }
}

pub fn delete_policy() -> DeletePolicy {
    let settings = get_settings!();
    settings.soft_delete.policy
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database_url: Option<String>,
    pub pool_size: u32,
    pub executor_threads: usize,
    pub pagination: Pagination,
    pub soft_delete: SoftDelete,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: None,
            pool_size: 10,
            executor_threads: num_cpus::get(),
            pagination: Pagination::default(),
            soft_delete: SoftDelete::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub limit: u32,
    pub limit_max: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: 5,
            limit_max: 100,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SoftDelete {
    pub policy: DeletePolicy,
}

/// What Delete does with a row that is already soft-deleted.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Report `NotFound` and leave `deleted_at` alone.
    Reject,
    /// Stamp `deleted_at` again.
    Overwrite,
}

impl Default for DeletePolicy {
    fn default() -> Self {
        DeletePolicy::Reject
    }
}
