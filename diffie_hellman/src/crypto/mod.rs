pub mod diffie_hellman_algorithm;
pub mod key_exchange_traits;
