pub mod attacks;
pub mod errors;
pub mod number_theory;
pub mod primality;
pub mod rsa;

pub use crate::rsa::keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};
pub use crate::rsa::service::RsaService;
