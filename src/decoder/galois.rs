//! Table-driven GF(2^8) arithmetic
//!
//! Tables are built once from the generator polynomial and never mutated, so a
//! single instance can be shared by every decode on every thread.

use std::sync::OnceLock;

/// Low byte of `x^8 + x^4 + x^3 + x^2 + 1`, the QR field polynomial
pub const QR_POLYNOMIAL: u16 = 0x1D;

/// GF(2^8) exponent and logarithm tables
#[derive(Debug, Clone)]
pub struct Galois {
    exp: [u8; 512],
    log: [u8; 256],
}

impl Galois {
    /// Build the tables for the field generated by `polynomial` (low byte, `x^8` implied)
    pub fn new(polynomial: u16) -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut d: u16 = 1;
        for i in 0..255 {
            exp[i] = d as u8;
            exp[i + 255] = d as u8;
            log[d as usize] = i as u8;
            d <<= 1;
            if d & 0x100 != 0 {
                d = (d ^ polynomial) & 0xFF;
            }
        }
        // Two spare slots so exp[log a + log b + 2] stays in range
        exp[510] = exp[0];
        exp[511] = exp[1];
        Self { exp, log }
    }

    /// Shared QR field instance
    pub fn qr() -> &'static Galois {
        static QR: OnceLock<Galois> = OnceLock::new();
        QR.get_or_init(|| Galois::new(QR_POLYNOMIAL))
    }

    /// `α^e`, `e` in 0..512
    #[inline]
    pub fn exp(&self, e: usize) -> u8 {
        self.exp[e]
    }

    /// Discrete log of a nonzero element; `log(0)` is 0 and meaningless
    #[inline]
    pub fn log(&self, a: u8) -> u8 {
        self.log[a as usize]
    }

    /// `a · b`
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// `a · α^b`
    #[inline]
    pub fn mul_exp(&self, a: u8, b: usize) -> u8 {
        if a == 0 {
            return 0;
        }
        self.exp[(self.log[a as usize] as usize + b) % 255]
    }

    /// `a / b`, `b` nonzero
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + 255 - self.log[b as usize] as usize]
    }

    /// `a / α^b`
    #[inline]
    pub fn div_exp(&self, a: u8, b: usize) -> u8 {
        if a == 0 {
            return 0;
        }
        self.exp[(self.log[a as usize] as usize + 255 - b % 255) % 255]
    }

    /// Multiplicative inverse of a nonzero element
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        self.exp[255 - self.log[a as usize] as usize]
    }

    /// Product of two polynomials, truncated to `len` coefficients.
    ///
    /// Coefficient `i` of each input multiplies `x^i`.
    pub fn mul_poly(&self, len: usize, a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; len];
        for (ia, &ca) in a.iter().enumerate().take(len) {
            if ca == 0 {
                continue;
            }
            let la = self.log[ca as usize] as usize;
            for (ib, &cb) in b.iter().enumerate().take(len - ia) {
                if cb != 0 {
                    out[ia + ib] ^= self.exp[la + self.log[cb as usize] as usize];
                }
            }
        }
        out
    }

    /// Syndromes `S_i = R(α^i)` for `i` in `0..npar`, `data[0]` being the
    /// highest-degree coefficient.
    ///
    /// Returns the syndromes and whether all of them are zero.
    pub fn syndrome(&self, data: &[u8], npar: usize) -> (Vec<u8>, bool) {
        let mut syn = vec![0u8; npar];
        let mut clean = true;
        for (i, slot) in syn.iter_mut().enumerate() {
            let mut wk = 0u8;
            for &x in data {
                wk = x ^ self.mul_exp(wk, i);
            }
            *slot = wk;
            clean &= wk == 0;
        }
        (syn, clean)
    }
}
