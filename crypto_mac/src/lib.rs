mod error;
pub use error::CipherError;

pub mod block_cipher;
pub use block_cipher::{BlockEncryptX, AES};

pub mod mac;
pub use mac::{CMAC, MAC};

pub use aes;
