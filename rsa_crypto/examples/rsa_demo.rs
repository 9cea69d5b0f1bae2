use num_bigint::BigUint;
use rsa_crypto::attacks::WienerAttack;
use rsa_crypto::{PrimalityType, RsaService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let service = RsaService::new(PrimalityType::MillerRabin, 0.99, 256)?;
    let (n, e) = service.public_key();
    println!("modulus: {} bits", n.bits());

    let message = b"rsa demo payload";
    let ciphertext = service.encrypt_bytes(message)?;
    let recovered = service.decrypt_bytes(&ciphertext)?;
    assert_eq!(recovered, message);
    println!(
        "byte API: {} bytes -> {} bytes and back",
        message.len(),
        ciphertext.len()
    );

    // The generated key resists the low-exponent attack.
    assert!(WienerAttack::attack(&n, &e).is_none());

    // A deliberately weak key does not.
    let weak = WienerAttack::attack(
        &BigUint::from(90_581u32),
        &BigUint::from(17_993u32),
    )
    .expect("textbook key falls");
    println!("wiener on the textbook key: d = {}", weak.d);

    Ok(())
}
