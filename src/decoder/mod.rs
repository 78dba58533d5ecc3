//! QR code decoding modules
//!
//! This module contains all the logic for decoding a sampled symbol:
//! - Header recovery (BCH-protected format and version strings)
//! - Grid walking, unmasking and codeword deinterleaving
//! - Error correction (GF(2^8), Reed-Solomon)
//! - Data mode decoding (numeric, alphanumeric, byte, kanji, ECI, FNC1, structured append)

/// Nearest-codeword lookup for format and version strings
pub mod bch;
/// Mode-indicator loop producing data segments
pub mod bit_decoder;
/// Sequential bit readers, low-bit-first and high-bit-first
pub mod bitstream;
/// Block deinterleaving and per-block Reed-Solomon correction
pub mod codewords;
/// Decoder tunables, env-backed
pub mod config;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// GF(2^8) arithmetic tables
pub mod galois;
/// Data mode decoders
pub mod modes;
/// Main QR decoder that orchestrates the decoding pipeline
pub mod qr_decoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Configurable grid walker
pub mod sampler;
/// QR specification tables (block layouts)
pub mod tables;
/// QR code unmasking (removes mask patterns)
pub mod unmask;
/// Version information extraction (versions 7-40)
pub mod version;
