//! Reed-Solomon error correction over GF(2^8)
//!
//! - Berlekamp-Massey builds the error locator `sigma` and evaluator `omega`
//! - Chien search finds the error positions
//! - Forney computes and applies the error magnitudes
//!
//! Blocks are stored highest-degree coefficient first, as read from the symbol.

use log::trace;
use thiserror::Error;

use crate::decoder::galois::Galois;

/// Reed-Solomon failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsError {
    /// Block length outside `npar..=255`
    #[error("block length {len} invalid for {npar} parity symbols")]
    InvalidLength {
        /// Received block length
        len: usize,
        /// Parity symbols of the decoder
        npar: usize,
    },
    /// Fewer than two parity symbols
    #[error("{0} parity symbols cannot correct anything")]
    InvalidParity(usize),
    /// More errors than the parity can locate
    #[error("too many errors to correct")]
    Uncorrectable,
}

/// Decoder for blocks carrying `npar` parity symbols
#[derive(Debug, Clone, Copy)]
pub struct RsDecoder<'g> {
    gf: &'g Galois,
    npar: usize,
}

/// Output of the locator recursion
struct Locator {
    errors: usize,
    sigma: Vec<u8>,
    omega: Vec<u8>,
}

impl<'g> RsDecoder<'g> {
    /// Decoder over `gf` for `npar` parity symbols
    pub fn new(gf: &'g Galois, npar: usize) -> Result<Self, RsError> {
        if npar < 2 {
            return Err(RsError::InvalidParity(npar));
        }
        Ok(Self { gf, npar })
    }

    /// Parity symbol count
    pub fn npar(&self) -> usize {
        self.npar
    }

    /// Correct `data` in place and return the number of symbols fixed.
    ///
    /// With `no_correct` the errors are located and counted but `data` is
    /// left untouched.
    pub fn decode(&self, data: &mut [u8], no_correct: bool) -> Result<usize, RsError> {
        if data.len() < self.npar || data.len() > 255 {
            return Err(RsError::InvalidLength {
                len: data.len(),
                npar: self.npar,
            });
        }

        let (syn, clean) = self.gf.syndrome(data, self.npar);
        if clean {
            return Ok(0);
        }

        let locator = self.calc_sigma_mbm(&syn)?;
        let positions = self.chien_search(data.len(), &locator)?;
        trace!(
            "rs: {} errors located in {}-symbol block",
            locator.errors,
            data.len()
        );
        if no_correct {
            return Ok(locator.errors);
        }

        self.forney(data, &locator, &positions)?;
        let (_, clean) = self.gf.syndrome(data, self.npar);
        if !clean {
            return Err(RsError::Uncorrectable);
        }
        Ok(locator.errors)
    }

    fn calc_sigma_mbm(&self, syn: &[u8]) -> Result<Locator, RsError> {
        let gf = self.gf;
        let npar = self.npar;
        let mut sg0 = vec![0u8; npar];
        let mut sg1 = vec![0u8; npar];
        sg0[1] = 1;
        sg1[0] = 1;
        let mut jisu0 = 1usize;
        let mut jisu1 = 0usize;
        let mut m: isize = -1;

        for n in 0..npar {
            let mut d = syn[n];
            for i in 1..=jisu1 {
                d ^= gf.mul(sg1[i], syn[n - i]);
            }
            if d != 0 {
                let logd = gf.log(d) as usize;
                let mut wk = vec![0u8; npar];
                for i in 0..=n {
                    wk[i] = sg1[i] ^ gf.mul_exp(sg0[i], logd);
                }
                let js = (n as isize - m) as usize;
                if js > jisu1 {
                    m = n as isize - jisu1 as isize;
                    jisu1 = js;
                    if jisu1 > npar / 2 {
                        return Err(RsError::Uncorrectable);
                    }
                    for i in 0..=jisu0.min(npar - 1) {
                        sg0[i] = gf.div_exp(sg1[i], logd);
                    }
                    jisu0 = jisu1;
                }
                sg1 = wk;
            }
            // sg0 *= x
            let k = (npar - 1).min(jisu0);
            sg0.copy_within(0..k, 1);
            sg0[0] = 0;
            jisu0 += 1;
        }

        if jisu1 == 0 {
            return Err(RsError::Uncorrectable);
        }
        let omega = gf.mul_poly(npar / 2 + 1, &sg1, syn);
        sg1.resize(npar / 2 + 2, 0);
        Ok(Locator {
            errors: jisu1,
            sigma: sg1,
            omega,
        })
    }

    /// Roots of sigma as field elements `α^pos`
    fn chien_search(&self, n: usize, locator: &Locator) -> Result<Vec<u8>, RsError> {
        let gf = self.gf;
        let jisu = locator.errors;
        let sigma = &locator.sigma;
        let mut last = sigma[1];
        let mut pos = vec![0u8; jisu];

        let check_last = |last: u8| last != 0 && (gf.log(last) as usize) < n;

        if jisu == 1 {
            if !check_last(last) {
                return Err(RsError::Uncorrectable);
            }
            pos[0] = last;
            return Ok(pos);
        }

        let mut pi = jisu - 1;
        for i in 0..n {
            let z = 255 - i;
            let mut wk = 1u8;
            for j in 1..=jisu {
                wk ^= gf.mul_exp(sigma[j], (z * j) % 255);
            }
            if wk == 0 {
                let pv = gf.exp(i);
                last ^= pv;
                pos[pi] = pv;
                pi -= 1;
                if pi == 0 {
                    // The sum of all roots is sigma[1], the last one falls out
                    if !check_last(last) {
                        return Err(RsError::Uncorrectable);
                    }
                    pos[0] = last;
                    return Ok(pos);
                }
            }
        }
        Err(RsError::Uncorrectable)
    }

    fn forney(&self, data: &mut [u8], locator: &Locator, positions: &[u8]) -> Result<(), RsError> {
        let gf = self.gf;
        let jisu = locator.errors;
        let (sigma, omega) = (&locator.sigma, &locator.omega);
        let len = data.len();

        for &ps in positions {
            let zlog = 255 - gf.log(ps) as usize;

            let mut ov = omega[0];
            for j in 1..jisu {
                ov ^= gf.mul_exp(omega[j], (zlog * j) % 255);
            }

            // Formal derivative: odd powers vanish in characteristic 2
            let mut dv = sigma[1];
            for j in (2..jisu).step_by(2) {
                dv ^= gf.mul_exp(sigma[j + 1], (zlog * j) % 255);
            }
            if dv == 0 {
                return Err(RsError::Uncorrectable);
            }

            data[len - 1 - gf.log(ps) as usize] ^= gf.mul(ps, gf.div(ov, dv));
        }
        Ok(())
    }
}
