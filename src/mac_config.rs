use std::fmt;

use config::{builder::DefaultState, Config, ConfigBuilder};
use crypto_mac::{AES, CMAC};
use serde::{Deserialize, Serialize};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

use crate::{BlockCipherType, MacBuilder, MacError};

/// CMAC配置, 依次从默认值, 环境变量(`CMAC__CIPHER`, `CMAC__KEY`)和配置文件中读取.
#[derive(Deserialize, Serialize, PartialEq, Eq)]
pub struct MacConfig {
    pub cipher: BlockCipherType,

    // 十六进制编码的密钥
    pub key: String,
}

impl Default for MacConfig {
    fn default() -> Self {
        Self {
            cipher: BlockCipherType::default(),
            key: String::new(),
        }
    }
}

// 不输出密钥
impl fmt::Debug for MacConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacConfig")
            .field("cipher", &self.cipher)
            .field("key", &format_args!("<{} hex chars>", self.key.len()))
            .finish()
    }
}

impl MacConfig {
    fn builder() -> Result<ConfigBuilder<DefaultState>, MacError> {
        let default_config = Config::try_from(&MacConfig::default())?;

        Ok(Config::builder()
            .add_source(default_config)
            .add_source(config::Environment::with_prefix("CMAC").separator("__")))
    }

    pub fn load(f: Option<&str>) -> Result<Self, MacError> {
        let mut config = Self::builder()?;

        if let Some(f) = f {
            config = config.add_source(config::File::with_name(f).required(false));
        }

        let config: MacConfig = config.build()?.try_deserialize()?;
        log::trace!("{:?}", config);

        Ok(config)
    }

    pub fn from_json(s: &str) -> Result<Self, MacError> {
        let config = Self::builder()?
            .add_source(config::File::from_str(s, config::FileFormat::Json))
            .build()?;

        let config: MacConfig = config.try_deserialize()?;
        log::trace!("{:?}", config);

        Ok(config)
    }

    pub fn build(&self) -> Result<CMAC<AES>, MacError> {
        let mut key = hex::decode(self.key.trim())?;
        let cmac = MacBuilder::new(self.cipher).build(&key);

        #[cfg(feature = "sec-zeroize")]
        key.zeroize();

        Ok(cmac?)
    }
}
