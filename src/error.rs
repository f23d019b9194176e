use crypto_mac::CipherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("Invalid hex key: {0}")]
    InvalidKeyHex(#[from] hex::FromHexError),

    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid block cipher type: {0:#x}")]
    InvalidCipherType(u16),
}
