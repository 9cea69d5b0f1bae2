//! GF(2) polynomial arithmetic and the byte-level GF(2^8) operations built
//! on top of it. A polynomial is a coefficient vector, `poly[i]` holding the
//! coefficient of x^i.

pub type Poly = Vec<bool>;

pub fn trim(p: &mut Poly) {
    while p.last().map_or(false, |b| !*b) {
        p.pop();
    }
}

pub fn deg(p: &Poly) -> isize {
    for i in (0..p.len()).rev() {
        if p[i] {
            return i as isize;
        }
    }
    -1
}

pub fn is_monic(p: &Poly) -> bool {
    p.last().copied().unwrap_or(false)
}

/// Builds the degree-8 reduction polynomial from its low byte; the x^8 term
/// is implicit (0x1B stands for x^8 + x^4 + x^3 + x + 1).
pub fn modulus_from_byte(low: u8) -> Poly {
    let mut p: Poly = (0..8).map(|i| (low >> i) & 1 != 0).collect();
    p.push(true);
    p
}

pub fn byte_to_poly(x: u8) -> Poly {
    let mut p: Poly = (0..8).map(|i| (x >> i) & 1 != 0).collect();
    p.push(false);
    p
}

pub fn poly_to_byte(p: &Poly) -> u8 {
    p.iter()
        .take(8)
        .enumerate()
        .fold(0u8, |acc, (i, &b)| if b { acc | (1 << i) } else { acc })
}

/// Addition in GF(2): coefficient-wise XOR.
pub fn poly_add(a: &Poly, b: &Poly) -> Poly {
    let n = a.len().max(b.len());
    let mut r = vec![false; n];
    for i in 0..n {
        let ai = a.get(i).copied().unwrap_or(false);
        let bi = b.get(i).copied().unwrap_or(false);
        r[i] = ai ^ bi;
    }
    trim(&mut r);
    r
}

pub fn poly_mul(a: &Poly, b: &Poly) -> Poly {
    if deg(a) < 0 || deg(b) < 0 {
        return Vec::new();
    }
    let mut r = vec![false; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai {
            for (j, &bj) in b.iter().enumerate() {
                if bj {
                    r[i + j] ^= true;
                }
            }
        }
    }
    trim(&mut r);
    r
}

/// Division with remainder: (quotient, remainder).
pub fn poly_divmod(dividend: &Poly, divisor: &Poly) -> (Poly, Poly) {
    let mut r = dividend.clone();
    trim(&mut r);
    let mut d = divisor.clone();
    trim(&mut d);
    let deg_d = deg(&d);
    assert!(deg_d >= 0, "division by the zero polynomial");

    let mut q = vec![false; r.len().max(d.len()) + 1];
    while deg(&r) >= deg_d {
        let shift = (deg(&r) - deg_d) as usize;
        q[shift] = true;
        for i in 0..=deg_d as usize {
            if d[i] {
                r[shift + i] ^= true;
            }
        }
        trim(&mut r);
    }
    trim(&mut q);
    (q, r)
}

pub fn poly_mod(a: &Poly, modulus: &Poly) -> Poly {
    let (_, rem) = poly_divmod(a, modulus);
    rem
}

pub fn poly_mulmod(a: &Poly, b: &Poly, modulus: &Poly) -> Poly {
    poly_mod(&poly_mul(a, b), modulus)
}

pub fn poly_powmod(base: &Poly, exp: usize, modulus: &Poly) -> Poly {
    let mut result: Poly = vec![true];
    let mut power = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = poly_mulmod(&result, &power, modulus);
        }
        power = poly_mulmod(&power, &power, modulus);
        e >>= 1;
    }
    trim(&mut result);
    result
}

pub fn poly_gcd(mut a: Poly, mut b: Poly) -> Poly {
    trim(&mut a);
    trim(&mut b);
    while deg(&b) >= 0 {
        let (_, r) = poly_divmod(&a, &b);
        a = b;
        b = r;
    }
    trim(&mut a);
    a
}

/// Inverse element modulo `modulus` via the extended Euclid walk. Panics if
/// the element is not invertible, which cannot happen for nonzero bytes
/// under an irreducible modulus.
pub fn poly_inv(a: &Poly, modulus: &Poly) -> Poly {
    let mut r0 = a.clone();
    trim(&mut r0);
    let mut r1 = modulus.clone();
    trim(&mut r1);
    let mut s0: Poly = vec![true];
    let mut s1: Poly = vec![false];

    while deg(&r1) >= 0 {
        let (q, r2) = poly_divmod(&r0, &r1);
        let s2 = poly_add(&s0, &poly_mul(&q, &s1));
        r0 = r1;
        r1 = r2;
        s0 = s1;
        s1 = s2;
    }

    assert!(
        deg(&r0) == 0 && r0[0],
        "element has no inverse under this modulus"
    );

    let mut inv = poly_mod(&s0, modulus);
    trim(&mut inv);
    inv
}

/// Field addition of bytes: XOR.
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication of bytes under the given reduction polynomial.
pub fn gf_mul(a: u8, b: u8, modulus: &Poly) -> u8 {
    poly_to_byte(&poly_mulmod(&byte_to_poly(a), &byte_to_poly(b), modulus))
}

/// Field inverse of a byte; zero maps to zero.
pub fn gf_inv(a: u8, modulus: &Poly) -> u8 {
    if a == 0 {
        return 0;
    }
    poly_to_byte(&poly_inv(&byte_to_poly(a), modulus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_polynomial_products() {
        let m = modulus_from_byte(0x1B);
        assert_eq!(gf_mul(0x57, 0x83, &m), 0xC1);
        assert_eq!(gf_mul(0x57, 0x13, &m), 0xFE);
    }

    #[test]
    fn inverse_roundtrip() {
        let m = modulus_from_byte(0x1B);
        for x in 1..=255u8 {
            assert_eq!(gf_mul(x, gf_inv(x, &m), &m), 1);
        }
        assert_eq!(gf_inv(0, &m), 0);
    }
}
