//! Cipher-based Message Authentication Code (CMAC), [RFC 4493](https://www.rfc-editor.org/rfc/rfc4493) /
//! [NIST SP 800-38B](https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-38b.pdf). <br>
//!
//! 分组密码通过`BlockEncryptX`注入, 支持分组大小为8字节或16字节的分组密码; 默认使用AES.
//!
//! ```
//! use cmac::MAC;
//! use std::io::Write;
//!
//! let mut cmac = cmac::new(&[0u8; 16]).unwrap();
//! cmac.write_all(b"message").unwrap();
//! let tag = cmac.mac();
//! assert_eq!(tag.len(), 16);
//! assert!(cmac.verify(&tag[..8]).is_ok());
//! ```

mod error;
pub use error::MacError;

pub mod builder;
pub use builder::{BlockCipherType, MacBuilder};

mod mac_config;
pub use mac_config::MacConfig;

pub use crypto_mac::{aes, BlockEncryptX, CipherError, AES, CMAC, MAC};

/// 以`key`构造AES, 密钥长度(16/24/32字节)决定AES-128/192/256
pub fn new(key: &[u8]) -> Result<CMAC<AES>, CipherError> {
    CMAC::with_key(key)
}

/// 以给定的分组密码构造CMAC, 分组大小必须为8或16字节
pub fn with_cipher<E: BlockEncryptX>(cipher: E) -> Result<CMAC<E>, CipherError> {
    CMAC::new(cipher)
}

/// 计算`msg`的AES-CMAC
pub fn mac(key: &[u8], msg: &[u8]) -> Result<Vec<u8>, CipherError> {
    let mut cmac = new(key)?;
    cmac.update(msg);
    Ok(cmac.mac())
}
