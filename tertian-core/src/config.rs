use std::path::{Path, PathBuf};

use serde::Deserialize;
use tertian_types::ScaleFormula;

use crate::catalog::FormulaCatalog;
use crate::error::CoreResult;
use crate::harmony::MAX_DEPTH;
use crate::pool::{PitchPool, Spelling};
use crate::theory::Theory;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

pub const DEFAULT_DEPTH: i64 = 3;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    catalog: CatalogConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    spelling: Option<String>,
    depth: Option<i64>,
    scale: Option<String>,
    tonic: Option<String>,
}

#[derive(Deserialize, Default)]
struct CatalogConfig {
    extra: Option<PathBuf>,
}

pub struct Config {
    defaults: DefaultsConfig,
    catalog: CatalogConfig,
    /// Directory relative catalog paths are resolved against.
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Embedded defaults merged with the user config file, if there is one.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::embedded(),
        }
    }

    /// Embedded defaults merged with the file at `path`. A missing file is not
    /// an error; an unreadable or malformed one is logged and skipped.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        config.base_dir = path.parent().map(Path::to_path_buf);
        if !path.exists() {
            return config;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    /// Embedded defaults merged with `s`. Unlike `load`, malformed TOML is an error.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let user: ConfigFile = toml::from_str(s)?;
        let mut config = Self::embedded();
        config.merge(user);
        Ok(config)
    }

    fn embedded() -> Self {
        let base: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!(target: "config", "embedded config.toml is invalid: {}", e);
            ConfigFile::default()
        });
        Config {
            defaults: base.defaults,
            catalog: base.catalog,
            base_dir: None,
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        merge_defaults(&mut self.defaults, user.defaults);
        merge_catalog(&mut self.catalog, user.catalog);
    }

    pub fn spelling(&self) -> Spelling {
        self.defaults
            .spelling
            .as_deref()
            .and_then(Spelling::parse)
            .unwrap_or_default()
    }

    /// Harmonization depth; values outside 1..=MAX_DEPTH fall back to the default.
    pub fn depth(&self) -> i64 {
        self.defaults
            .depth
            .filter(|d| (1..=MAX_DEPTH as i64).contains(d))
            .unwrap_or(DEFAULT_DEPTH)
    }

    pub fn scale(&self) -> ScaleFormula {
        self.defaults
            .scale
            .as_deref()
            .and_then(ScaleFormula::parse)
            .unwrap_or_default()
    }

    pub fn tonic(&self) -> &str {
        self.defaults.tonic.as_deref().unwrap_or("C")
    }

    /// Resolved path of the extra user catalog, if configured.
    pub fn extra_catalog(&self) -> Option<PathBuf> {
        let path = self.catalog.extra.as_ref()?;
        if let Ok(rest) = path.strip_prefix("~") {
            return dirs::home_dir().map(|home| home.join(rest));
        }
        match &self.base_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// Build the pool and catalog these settings describe.
    pub fn theory(&self) -> CoreResult<Theory> {
        let mut catalog = FormulaCatalog::standard();
        if let Some(path) = self.extra_catalog() {
            catalog.extend(FormulaCatalog::load(&path)?);
        }
        Ok(Theory::new(PitchPool::with_spelling(self.spelling()), catalog))
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tertian").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.spelling.is_some() {
        base.spelling = user.spelling;
    }
    if user.depth.is_some() {
        base.depth = user.depth;
    }
    if user.scale.is_some() {
        base.scale = user.scale;
    }
    if user.tonic.is_some() {
        base.tonic = user.tonic;
    }
}

fn merge_catalog(base: &mut CatalogConfig, user: CatalogConfig) {
    if user.extra.is_some() {
        base.extra = user.extra;
    }
}
