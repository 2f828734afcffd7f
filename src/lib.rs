//! Reversible obfuscation of byte sequences with randomized output.
//!
//! Encoding the same input twice produces two different strings, yet either
//! one decodes back to the original bytes. Output stays within `[a-z2-7]`,
//! so it drops cleanly into URLs, hostnames, and file names.
//!
//! Each call to [`encode`] draws a random 32-bit seed, derives a scrambled
//! base32 alphabet from it, and encodes the payload under the scrambled
//! alphabet. The seed rides along as a seven-symbol prefix coded under the
//! fixed alphabet, which is everything [`decode`] needs to rebuild the same
//! scrambled alphabet and reverse the payload. Trailing padding is stripped
//! and later reconstructed from length alone.
//!
//! This is obfuscation, not encryption. Anyone holding this crate can
//! decode any of its output; do not reach for it when confidentiality
//! matters.
//!
//! ```
//! let text = garble::encode("a thing worth hiding from casual eyes");
//! let bytes = garble::decode(&text).unwrap();
//! assert_eq!(bytes, b"a thing worth hiding from casual eyes");
//! ```

use rand::RngCore;

mod base32;
mod error;
mod seed;

pub use error::*;

use base32::{Encoding, InvalidSymbol, BASE, PAD};

/// Bytes of seed carried in front of every payload.
const SEED_BYTES: usize = 4;

/// Data symbols in the seed's encoded block: 32 bits fill six whole 5-bit
/// groups and spill 2 bits into a seventh symbol. The block's eighth symbol
/// is always padding, so the wire omits it.
const SEED_SYMBOLS: usize = (SEED_BYTES * 8 + 4) / 5;

/// Length of the seed's full encoded block, padding included.
const SEED_BLOCK: usize = Encoding::encoded_len(SEED_BYTES);

/// Obfuscates `src`, drawing the seed from the thread-local generator.
///
/// Never fails, for input of any length including empty. Calling this twice
/// on the same input yields different strings except on a 32-bit seed
/// collision.
pub fn encode<B: AsRef<[u8]>>(src: B) -> String {
    encode_with(&mut rand::thread_rng(), src)
}

/// Obfuscates `src` with a caller-supplied random source.
///
/// The source is consulted once per call, for the 32-bit seed. Handing in
/// a fixed source makes the output exactly reproducible, which is the
/// intended hook for tests.
pub fn encode_with<R, B>(rng: &mut R, src: B) -> String
where
    R: RngCore + ?Sized,
    B: AsRef<[u8]>,
{
    let src = src.as_ref();
    let seed = rng.next_u32();

    let mut block = [0u8; SEED_BLOCK];
    BASE.encode(&mut block, &seed.to_be_bytes());

    let mut out = vec![0u8; SEED_SYMBOLS + Encoding::encoded_len(src.len())];
    out[..SEED_SYMBOLS].copy_from_slice(&block[..SEED_SYMBOLS]);
    seed::derived(seed).encode(&mut out[SEED_SYMBOLS..], src);

    while out.last() == Some(&PAD) {
        out.pop();
    }

    String::from_utf8(out).expect("Symbols are always ASCII")
}

/// Recovers the bytes behind an obfuscated string.
///
/// Accepts anything byte-shaped; `&str` and `&[u8]` both work since the
/// wire form is ASCII. Fails if the input is shorter than the seed prefix
/// or if any symbol cannot have come out of [`encode`].
pub fn decode<S: AsRef<[u8]>>(input: S) -> Result<Vec<u8>> {
    let src = input.as_ref();
    if src.len() < SEED_SYMBOLS {
        return Err(Error::new(Kind::InvalidInputSize, "invalid input size"));
    }

    // Restore the structurally-implied padding symbol before decoding the
    // seed block under the fixed alphabet.
    let mut block = [PAD; SEED_BLOCK];
    block[..SEED_SYMBOLS].copy_from_slice(&src[..SEED_SYMBOLS]);
    let mut seed_bytes = [0u8; Encoding::decoded_len(SEED_BLOCK)];
    BASE.decode(&mut seed_bytes, &block)
        .map_err(|InvalidSymbol(idx, u)| Error::new(Kind::SeedDecode(idx, u), "seed decode error"))?;
    let seed = u32::from_be_bytes([seed_bytes[0], seed_bytes[1], seed_bytes[2], seed_bytes[3]]);

    // Encoding stripped the payload's trailing padding; its length is
    // implied by the distance to the next block boundary.
    let payload = &src[SEED_SYMBOLS..];
    let mut padded = payload.to_vec();
    let partial = padded.len() % 8;
    if partial != 0 {
        padded.resize(padded.len() + (8 - partial), PAD);
    }

    let mut dst = vec![0u8; Encoding::decoded_len(padded.len())];
    let n = seed::derived(seed)
        .decode(&mut dst, &padded)
        .map_err(|InvalidSymbol(idx, u)| {
            Error::new(
                Kind::PayloadDecode(SEED_SYMBOLS + idx, u),
                "payload decode error",
            )
        })?;
    dst.truncate(n);
    Ok(dst)
}
