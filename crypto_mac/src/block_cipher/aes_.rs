//! AES分组密码<br>
//! FIPS 197 <br>
//! 算法由RustCrypto的`aes`实现, 这里按密钥长度选择AES-128/192/256.<br>

use super::BlockEncryptX;
use aes::cipher::{InvalidLength, KeyInit};
use aes::{Aes128, Aes192, Aes256};

#[derive(Clone)]
pub enum AES {
    AES128(Aes128),
    AES192(Aes192),
    AES256(Aes256),
}

impl AES {
    pub const BLOCK_SIZE: usize = 16;

    /// 根据`key`的字节长度(16/24/32)选择AES-128/AES-192/AES-256
    pub fn new(key: &[u8]) -> Result<AES, InvalidLength> {
        match key.len() {
            16 => Self::aes128(key),
            24 => Self::aes192(key),
            32 => Self::aes256(key),
            _ => Err(InvalidLength),
        }
    }

    pub fn aes128(key: &[u8]) -> Result<AES, InvalidLength> {
        Aes128::new_from_slice(key).map(AES::AES128)
    }

    pub fn aes192(key: &[u8]) -> Result<AES, InvalidLength> {
        Aes192::new_from_slice(key).map(AES::AES192)
    }

    pub fn aes256(key: &[u8]) -> Result<AES, InvalidLength> {
        Aes256::new_from_slice(key).map(AES::AES256)
    }
}

impl BlockEncryptX for AES {
    fn block_size_x(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn encrypt_block_x(&self, block: &mut [u8]) {
        match self {
            AES::AES128(aes) => aes.encrypt_block_x(block),
            AES::AES192(aes) => aes.encrypt_block_x(block),
            AES::AES256(aes) => aes.encrypt_block_x(block),
        }
    }
}
