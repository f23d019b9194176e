use aes::cipher::{generic_array::GenericArray, BlockEncrypt, BlockSizeUser};

/// 分组密码的加密能力: 固定的分组字节大小, 以及单个分组的加密. <br>
///
/// 所有RustCrypto的分组密码(如`aes::Aes128`)都自动实现了该trait.
pub trait BlockEncryptX {
    /// 分组的字节大小
    fn block_size_x(&self) -> usize;

    /// 原地加密一个分组, 调用者保证`block.len() == self.block_size_x()`.
    fn encrypt_block_x(&self, block: &mut [u8]);
}

impl<C> BlockEncryptX for C
where
    C: BlockEncrypt,
{
    fn block_size_x(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    fn encrypt_block_x(&self, block: &mut [u8]) {
        self.encrypt_block(GenericArray::from_mut_slice(block))
    }
}

mod aes_;
pub use aes_::AES;
