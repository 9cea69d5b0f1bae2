pub mod cipher_context;
mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod deal;
pub mod deal_key_expansion;
pub mod des;
mod des_adapter;
pub mod des_key_expansion;
pub mod des_round_function;
pub mod des_tables;
pub mod errors;
pub mod feistel_network;
pub mod frog;
pub mod key_expansion;
pub mod padding;
pub mod rc4;
pub mod round_function;
pub mod triple_des;
pub mod utils;
