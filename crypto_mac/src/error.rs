use aes::cipher::InvalidLength;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CipherError {
    /// 不合法分组大小, CMAC只定义了8字节和16字节的分组
    #[error("CMAC not support the block size `{0}` bytes, expect 8 or 16 bytes")]
    InvalidBlockSize(usize),

    /// 分组密码构造失败, 原样携带底层密码算法的错误
    #[error("{0}")]
    InvalidKeySize(InvalidLength),

    /// 不合法的MAC长度
    #[error("Invalid MAC tag size `{real}`, expect 1..={max} bytes")]
    InvalidTagSize { real: usize, max: usize },

    #[error("MAC verification failed")]
    MacMismatch,
}

impl From<InvalidLength> for CipherError {
    fn from(value: InvalidLength) -> Self {
        Self::InvalidKeySize(value)
    }
}
