use crate::MacError;
use crypto_mac::{CipherError, AES, CMAC};
use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlockCipherType {
    #[default]
    AES128 = 0x1,
    AES192,
    AES256,
}

impl BlockCipherType {
    pub const fn key_size(&self) -> usize {
        match self {
            BlockCipherType::AES128 => 128 / 8,
            BlockCipherType::AES192 => 192 / 8,
            BlockCipherType::AES256 => 256 / 8,
        }
    }
}

impl TryFrom<u16> for BlockCipherType {
    type Error = MacError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        [Self::AES128, Self::AES192, Self::AES256]
            .into_iter()
            .find(|x| *x as u16 == value)
            .ok_or(MacError::InvalidCipherType(value))
    }
}

/// 以指定的分组密码构造CMAC. <br>
///
/// 与`CMAC::with_key`按密钥长度选择AES不同, 这里密钥长度必须与`BlockCipherType`一致.
#[derive(Clone)]
pub struct MacBuilder {
    block_cipher_type: BlockCipherType,
}

impl MacBuilder {
    pub fn new(block_cipher_type: BlockCipherType) -> Self {
        Self { block_cipher_type }
    }

    pub fn key_size(&self) -> usize {
        self.block_cipher_type.key_size()
    }

    pub fn block_cipher_type(&self) -> BlockCipherType {
        self.block_cipher_type
    }

    pub fn build(&self, key: &[u8]) -> Result<CMAC<AES>, CipherError> {
        let aes = match self.block_cipher_type {
            BlockCipherType::AES128 => AES::aes128(key),
            BlockCipherType::AES192 => AES::aes192(key),
            BlockCipherType::AES256 => AES::aes256(key),
        }?;

        CMAC::new(aes)
    }
}
