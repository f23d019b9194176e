use std::io::Write;

mod cmac;
pub use cmac::CMAC;

/// Message Authentication Code <br>
///
/// 以某个密钥生成指定长度的消息摘要, 用于验证消息的完整性和身份验证(拥有该密钥的身份者才能够生成该摘要).
/// 通过`Write` trait将消息更新到`self`中, 之后使用`self.mac()`生成MAC.
pub trait MAC: Write {
    fn block_size_x(&self) -> usize;

    /// MAC的字节长度
    fn digest_size_x(&self) -> usize;

    /// 将MAC追加到`out`尾部, 不改变`self`的状态
    fn mac_to(&self, out: &mut Vec<u8>);

    fn mac(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digest_size_x());
        self.mac_to(&mut out);
        out
    }

    /// 重置到初始化状态
    fn reset(&mut self);
}
