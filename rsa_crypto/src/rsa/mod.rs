pub mod keygen;
pub mod service;

pub use keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};
pub use service::RsaService;
