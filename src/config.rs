pub mod log;

use serde::Deserialize;
use std::env;

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    path: String,
}

impl Catalog {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    catalog: Catalog,
    logger: Option<log::Config>,
}

impl AppConfig {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/{RUN_MODE}.json` 파일과 `LIBRARY__` 로 시작하는 환경 변수를 읽어 설정을 만든다.
/// 환경 변수가 파일보다 우선하며, 예를 들어 `LIBRARY__CATALOG__PATH`는 `catalog.path`를 덮어쓴다.
pub fn load_config() -> Result<AppConfig, ::config::ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = ::config::Config::builder()
        .set_default("catalog.path", DEFAULT_CATALOG_PATH)?
        .add_source(::config::File::with_name(&format!("config/{}.json", env)).required(false))
        .add_source(::config::Environment::with_prefix("LIBRARY").prefix_separator("__").separator("__"))
        .build()?;

    config.try_deserialize()
}
