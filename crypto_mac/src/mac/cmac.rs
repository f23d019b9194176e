//! Block Cipher-based Message Authentication Code (CMAC) <br>
//!
//! - [Recommendation for Block Cipher Modes of Operation: The CMAC Mode for Authentication](https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-38b.pdf) <br>
//! - [RFC 4493, The AES-CMAC Algorithm](https://www.rfc-editor.org/rfc/rfc4493) <br>
//!
//! - 流程:
//!   - subkey: 子密钥派生, $L = CIPH_K(0^b)$, $K1 = dbl(L)$, $K2 = dbl(K1)$;
//!   - MAC生成: $C_i = CIPH_K(C_{i-1} \xor M_i)$, 最后一个分组异或`K1`(完整分组)或填充后异或`K2`;
//!   - MAC验证
//!

use crate::{BlockEncryptX, CipherError, AES, MAC};
use std::io::Write;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

pub struct CMAC<E> {
    k1: Vec<u8>,
    k2: Vec<u8>,
    // 最后一个完整分组保留到生成MAC时再处理
    buf: Vec<u8>,
    // C_i
    ci: Vec<u8>,
    // 下一个可以存放数据的索引
    buf_idx: usize,
    cipher: E,
}

// 不可约多项式常数, 只支持64位和128位分组.
// Block size 	Calculation 	Polynomal (hex)
// 64 	2^4+2^3+2^1+1 	0x1B
// 128 	2^7+2^2+2^1+1 	0x87
const fn rb(n: usize) -> Option<u8> {
    match n {
        8 => Some(0x1b),
        16 => Some(0x87),
        _ => None,
    }
}

fn shl_one(mut arr: Vec<u8>) -> Vec<u8> {
    let mut lsb = 0;
    arr.iter_mut().rev().for_each(|x| {
        let tmp = lsb;
        lsb = *x >> 7;
        *x = (*x << 1) | tmp;
    });
    arr
}

/// GF(2^b)上乘以`x`: 左移一位, 若最高位为1则最后一个字节异或`rb`. <br>
/// `rb`和`0`之间以常数时间选择, 不依赖最高位分支.
fn dbl(v: &[u8], rb: u8) -> Vec<u8> {
    let msb = Choice::from(v.first().map_or(0, |&x| x >> 7));
    let mut d = shl_one(v.to_vec());
    if let Some(x) = d.last_mut() {
        *x ^= u8::conditional_select(&0, &rb, msb);
    }
    d
}

impl<E> CMAC<E>
where
    E: BlockEncryptX,
{
    /// 分组大小必须是8或16字节, 否则返回`InvalidBlockSize`且不会调用`cipher`加密.
    pub fn new(cipher: E) -> Result<Self, CipherError> {
        let (k1, k2) = Self::subkey(&cipher)?;

        let n = cipher.block_size_x();
        log::trace!("CMAC subkeys derived for the {n} bytes block cipher");

        Ok(Self {
            k1,
            k2,
            buf: vec![0u8; n],
            ci: vec![0u8; n],
            buf_idx: 0,
            cipher,
        })
    }

    // (k1, k2)
    fn subkey(cipher: &E) -> Result<(Vec<u8>, Vec<u8>), CipherError> {
        let n = cipher.block_size_x();
        let rb = rb(n).ok_or(CipherError::InvalidBlockSize(n))?;

        let mut l = vec![0u8; n];
        cipher.encrypt_block_x(&mut l);

        let k1 = dbl(&l, rb);
        let k2 = dbl(&k1, rb);

        #[cfg(feature = "sec-zeroize")]
        l.zeroize();

        Ok((k1, k2))
    }

    // C_i = CIPH_k(C_{i-1} ^ M_i)
    fn chain(cipher: &E, ci: &mut [u8], block: &[u8]) {
        ci.iter_mut().zip(block.iter()).for_each(|(a, &b)| {
            *a ^= b;
        });
        cipher.encrypt_block_x(ci);
    }

    /// 更新消息数据, 返回`data`的字节长度. <br>
    ///
    /// 只有在后面还有数据时才处理缓存中的完整分组, 因为最后一个分组需要在生成MAC时根据是否完整选择`K1`或`K2`.
    pub fn update(&mut self, mut data: &[u8]) -> usize {
        let (data_len, n) = (data.len(), self.block_size_x());

        while !data.is_empty() {
            if self.buf_idx == n {
                Self::chain(&self.cipher, &mut self.ci, &self.buf);
                self.buf_idx = 0;
            }

            if self.buf_idx == 0 {
                while data.len() > n {
                    let (block, remain) = data.split_at(n);
                    Self::chain(&self.cipher, &mut self.ci, block);
                    data = remain;
                }
            }

            let l = (n - self.buf_idx).min(data.len());
            let bound = self.buf_idx + l;
            self.buf[self.buf_idx..bound].copy_from_slice(&data[..l]);
            self.buf_idx = bound;
            data = &data[l..];
        }

        data_len
    }

    /// 验证MAC, `tag`可以是截断后的MAC(取MAC的高`tag.len()`字节比较). <br>
    ///
    /// 比较以常数时间进行.
    pub fn verify(&self, tag: &[u8]) -> Result<(), CipherError> {
        let n = self.digest_size_x();
        if tag.is_empty() || tag.len() > n {
            return Err(CipherError::InvalidTagSize {
                real: tag.len(),
                max: n,
            });
        }

        let mac = self.mac();
        if bool::from(mac[..tag.len()].ct_eq(tag)) {
            Ok(())
        } else {
            Err(CipherError::MacMismatch)
        }
    }
}

impl CMAC<AES> {
    /// 以`key`构造AES(按密钥长度选择AES-128/192/256)后计算CMAC
    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let aes = AES::new(key)?;
        Self::new(aes)
    }
}

impl<E: Clone> Clone for CMAC<E> {
    fn clone(&self) -> Self {
        Self {
            k1: self.k1.clone(),
            k2: self.k2.clone(),
            buf: self.buf.clone(),
            ci: self.ci.clone(),
            buf_idx: self.buf_idx,
            cipher: self.cipher.clone(),
        }
    }
}

#[cfg(feature = "sec-zeroize")]
impl<E> Drop for CMAC<E> {
    fn drop(&mut self) {
        self.k1.zeroize();
        self.k2.zeroize();
        self.ci.zeroize();
        self.buf.zeroize();
    }
}

impl<E> Write for CMAC<E>
where
    E: BlockEncryptX,
{
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        Ok(self.update(data))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<E> MAC for CMAC<E>
where
    E: BlockEncryptX,
{
    fn block_size_x(&self) -> usize {
        self.cipher.block_size_x()
    }

    fn digest_size_x(&self) -> usize {
        self.block_size_x()
    }

    fn mac_to(&self, out: &mut Vec<u8>) {
        let (n, idx) = (self.block_size_x(), self.buf_idx);
        let mut last = self.ci.clone();

        if idx == n {
            last.iter_mut()
                .zip(self.buf.iter().zip(self.k1.iter()))
                .for_each(|(a, (&b, &c))| {
                    *a ^= b ^ c;
                });
        } else {
            // M_n || 10^j
            last.iter_mut().zip(self.buf[..idx].iter()).for_each(|(a, &b)| {
                *a ^= b;
            });
            last[idx] ^= 0x80;
            last.iter_mut().zip(self.k2.iter()).for_each(|(a, &b)| {
                *a ^= b;
            });
        }

        self.cipher.encrypt_block_x(&mut last);
        out.extend_from_slice(&last);
    }

    fn reset(&mut self) {
        self.ci.fill(0);
        self.buf.fill(0);
        self.buf_idx = 0;
    }
}
