use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::schedule::PricingAssumptions;

/// CLI 입력 프롬프트의 기본값을 담는다. 엔터만 치면 이 값이 쓰인다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultInputs {
    /// 기본 선택 연료 코드
    pub fuel: String,
    /// 연간 연료 소비량 [t/y]
    pub tonnes_per_year: f64,
    /// SU 거래 가격 가정 [$/t CO₂eq]
    pub surplus_price: f64,
    /// Tier 1 RU 가격 (2031+) [$/t CO₂eq]
    pub tier1_price: f64,
    /// Tier 2 RU 가격 (2031+) [$/t CO₂eq]
    pub tier2_price: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            fuel: "bio-Methanol".to_string(),
            tonnes_per_year: 5000.0,
            surplus_price: 380.0,
            tier1_price: 100.0,
            tier2_price: 360.0,
        }
    }
}

impl DefaultInputs {
    pub fn pricing(&self) -> PricingAssumptions {
        PricingAssumptions {
            surplus_price: self.surplus_price,
            tier1_price: self.tier1_price,
            tier2_price: self.tier2_price,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (ko/en/auto)
    pub language: String,
    pub defaults: DefaultInputs,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: DefaultInputs::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 주어진 경로(기본 config.toml)에서 설정을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.toml"));
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = Some(path.to_path_buf());
        Ok(cfg)
    } else {
        let mut cfg = Config::default();
        cfg.path = Some(path.to_path_buf());
        cfg.save()?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 로드했던 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        fs::write(path, content)?;
        Ok(())
    }
}
