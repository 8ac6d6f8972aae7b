// Configuration definitions, functions and tests
//

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string as de_num;
use std::sync::Arc;

static ENV_PREFIX: &str = "HB";

/// Cookie signing needs at least this much key material.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

fn prefixed_env(suffix: &str) -> String {
    format!("{}__{}", ENV_PREFIX, suffix)
}

#[derive(Clone, derived_deref::Deref)]
pub struct Conf {
    #[target]
    pub env_conf: Arc<EnvConf>,
    pub env: Env,
}

impl Conf {
    pub fn new(env: Env, env_conf: EnvConf) -> Self {
        Self {
            env_conf: Arc::new(env_conf),
            env,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    #[error("Unsupported environment: {0}")]
    Env(String),

    #[error("Failed to load configuration")]
    Load(#[from] config::ConfigError),

    #[error("Session secret must be at least {MIN_SESSION_SECRET_LEN} bytes long")]
    ShortSessionSecret,

    #[error("Admin password must not be empty")]
    EmptyAdminPassword,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvConf {
    pub session_secret: SecretString,
    pub admin_password: SecretString,
    #[serde(deserialize_with = "de_num")]
    pub port: u16,
    pub host: String,
    pub db: DbConf,
    pub log: Log,
}

#[derive(Deserialize, Clone, Debug)]
pub enum DbStorageEngine {
    Memory,
    SQLite,
    Sled,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DbConf {
    pub storage_engine: DbStorageEngine,
    pub path: String,
}

impl DbConf {
    pub fn db_instance(&self) -> Result<cozo::DbInstance, miette::Report> {
        cozo::DbInstance::new(
            match self.storage_engine {
                DbStorageEngine::Memory => "mem",
                DbStorageEngine::SQLite => "sqlite",
                DbStorageEngine::Sled => "sled",
            },
            &self.path,
            Default::default(),
        )
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum LogFormat {
    Plain,
    Pretty,
    Bunyan,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub format: LogFormat,
}

impl EnvConf {
    pub fn derive(env: Env) -> Result<Self, ConfError> {
        let conf_dir = std::env::var(prefixed_env("CONF_DIR"))
            .map(std::path::PathBuf::from)
            .or_else(|_| std::env::current_dir().map(|base_path| base_path.join("conf")))
            .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

        let conf = config::Config::builder()
            .add_source(config::File::from(conf_dir.join("default")).required(true))
            .add_source(config::File::from(conf_dir.join(env.as_ref())).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let conf: Self = conf.try_deserialize()?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), ConfError> {
        if self.session_secret.expose_secret().len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfError::ShortSessionSecret);
        }
        if self.admin_password.expose_secret().is_empty() {
            return Err(ConfError::EmptyAdminPassword);
        }
        Ok(())
    }

    pub fn test_default() -> Self {
        Self {
            port: 0,
            session_secret: SecretString::new("d51563a0e65c0645e59cb5fe2fd1970cddae21cee6e916912ee4c766928a5032c582e433195809f6adc6b1ce9dd5d21136dc6fa51a4ac099ad883118c6185109".into()),
            admin_password: SecretString::new("adminpass".into()),
            host: "127.0.0.1".into(),
            db: DbConf {
                storage_engine: DbStorageEngine::Memory,
                path: String::new(),
            },
            log: Log {
                format: LogFormat::Plain,
            },
        }
    }
}

use derive_more::Display;

#[derive(Debug, PartialEq, Display, Clone, Copy)]
pub enum Env {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "prod")]
    Prod,
}

impl Env {
    pub fn derive() -> Result<Self, ConfError> {
        std::env::var(prefixed_env("ENV"))
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfError::Env)
    }

    pub fn local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `prod`.",
                other
            )),
        }
    }
}
