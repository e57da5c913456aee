use std::env;

use strum::{Display, EnumString};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "NOTES_HOST";
    /// "length" (default) or "monotonic". See [`super::IdPolicy`].
    pub const ID_POLICY: &str = "NOTES_ID_POLICY";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const HOST: &str = "127.0.0.1";
}

/// How the store picks the id of a newly created note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdPolicy {
    /// `id = number of stored notes + 1`. Collides with a surviving note
    /// once anything but the newest note has been deleted.
    #[default]
    Length,
    /// Ever-increasing counter; ids are never handed out twice.
    Monotonic,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub id_policy: IdPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid {} '{}', using {}", env_vars::PORT, raw, defaults::PORT);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        let id_policy = match env::var(env_vars::ID_POLICY) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unknown {} '{}', falling back to '{}'",
                    env_vars::ID_POLICY,
                    raw,
                    IdPolicy::default()
                );
                IdPolicy::default()
            }),
            Err(_) => IdPolicy::default(),
        };

        Self {
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string()),
            port,
            id_policy,
        }
    }

    /// Base URL the server is reachable at, for the startup log line.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            id_policy: IdPolicy::default(),
        }
    }
}
