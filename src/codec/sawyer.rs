//! Sawyer encoding: the container around legacy parks
//!
//! A file is a run-length encoded image followed by a 4-byte checksum.
//! The checksum doubles as a version marker: subtracting the computed
//! checksum from the stored one yields the game version, negated for
//! scenarios. Scenarios from the expansion packs additionally pass the
//! decoded image through a byte cipher.

use tracing::debug;

use super::types::{classify_version, Edition, FileKind};
use crate::error::{Error, Result};

const CIPHER_START: usize = 0x60018;
const CIPHER_XOR_END: usize = 0x1F8353;
const CIPHER_ROTATE_END: usize = 0x1F8350;
const CIPHER_XOR: u8 = 0x9C;

/// Result of unwrapping a legacy file
#[derive(Debug)]
pub struct DecodedPark {
    pub data: Vec<u8>,
    pub edition: Edition,
    pub kind: FileKind,
}

pub fn checksum(data: &[u8]) -> u32 {
    let mut c: u32 = 0;
    for &b in data {
        let low = (c as u8).wrapping_add(b);
        c = (c & 0xFFFF_FF00) | low as u32;
        c = c.rotate_left(3);
    }
    c
}

/// Version value hidden in the trailing checksum
pub fn read_version(file: &[u8]) -> Result<i32> {
    if file.len() < 4 {
        return Err(Error::DecodeFailed { reason: "file too short for checksum".into() });
    }
    let (body, tail) = file.split_at(file.len() - 4);
    let stored = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
    Ok(stored.wrapping_sub(checksum(body)) as i32)
}

/// Expand a run-length encoded stream. Output longer than `limit` is an error.
pub fn decode_rle(src: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(limit);
    let mut i = 0;
    while i < src.len() {
        let code = src[i];
        i += 1;
        if code & 0x80 != 0 {
            let value = *src.get(i).ok_or_else(|| truncated_run(i))?;
            i += 1;
            let count = 257 - code as usize;
            out.resize(out.len() + count, value);
        } else {
            let count = code as usize + 1;
            let bytes = src.get(i..i + count).ok_or_else(|| truncated_run(i))?;
            out.extend_from_slice(bytes);
            i += count;
        }
        if out.len() > limit {
            return Err(Error::DecodeFailed {
                reason: format!("run-length data expands past {limit} bytes"),
            });
        }
    }
    Ok(out)
}

fn truncated_run(offset: usize) -> Error {
    Error::DecodeFailed { reason: format!("truncated run at offset {offset}") }
}

pub fn encode_rle(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / 2);
    let mut literal_start = 0;
    let mut i = 0;
    while i < src.len() {
        let value = src[i];
        let mut run = 1;
        while run < 128 && i + run < src.len() && src[i + run] == value {
            run += 1;
        }
        if run >= 3 {
            flush_literals(&mut out, &src[literal_start..i]);
            out.push((257 - run) as u8);
            out.push(value);
            i += run;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    flush_literals(&mut out, &src[literal_start..]);
    out
}

fn flush_literals(out: &mut Vec<u8>, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        let n = bytes.len().min(128);
        out.push((n - 1) as u8);
        out.extend_from_slice(&bytes[..n]);
        bytes = &bytes[n..];
    }
}

pub fn decipher_sc4(data: &mut [u8]) {
    if data.len() <= CIPHER_START {
        return;
    }
    let xor_end = (data.len() - 1).min(CIPHER_XOR_END);
    for b in &mut data[CIPHER_START..=xor_end] {
        *b ^= CIPHER_XOR;
    }
    let mut i = CIPHER_START;
    while i <= CIPHER_ROTATE_END && i + 3 < data.len() {
        data[i + 1] = data[i + 1].rotate_right(3);
        let word = u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        data[i..i + 4].copy_from_slice(&word.rotate_left(9).to_le_bytes());
        i += 4;
    }
}

pub fn encipher_sc4(data: &mut [u8]) {
    if data.len() <= CIPHER_START {
        return;
    }
    let mut i = CIPHER_START;
    while i <= CIPHER_ROTATE_END && i + 3 < data.len() {
        let word = u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        data[i..i + 4].copy_from_slice(&word.rotate_right(9).to_le_bytes());
        data[i + 1] = data[i + 1].rotate_left(3);
        i += 4;
    }
    let xor_end = (data.len() - 1).min(CIPHER_XOR_END);
    for b in &mut data[CIPHER_START..=xor_end] {
        *b ^= CIPHER_XOR;
    }
}

/// Unwrap a legacy file into its fixed-size image. All-or-nothing: any
/// irregularity fails the whole decode.
pub fn decode_park(file: &[u8], expected_size: usize) -> Result<DecodedPark> {
    let version = read_version(file)?;
    let (edition, kind) = classify_version(version)?;
    debug!(version, ?edition, ?kind, "detected legacy file");

    let body = &file[..file.len() - 4];
    let mut data = decode_rle(body, expected_size)?;
    if kind == FileKind::Scenario && edition != Edition::Classic {
        decipher_sc4(&mut data);
    }
    if data.len() != expected_size {
        return Err(Error::SizeMismatch { expected: expected_size, actual: data.len() });
    }
    Ok(DecodedPark { data, edition, kind })
}

fn wrap(body: Vec<u8>, version: i32) -> Vec<u8> {
    let stored = checksum(&body).wrapping_add(version as u32);
    let mut file = body;
    file.extend_from_slice(&stored.to_le_bytes());
    file
}

/// Wrap an image as a saved game
pub fn encode_sv4(image: &[u8], edition: Edition) -> Vec<u8> {
    wrap(encode_rle(image), edition.version())
}

/// Wrap an image as a scenario
pub fn encode_sc4(image: &[u8], edition: Edition) -> Vec<u8> {
    let mut data = image.to_vec();
    if edition != Edition::Classic {
        encipher_sc4(&mut data);
    }
    wrap(encode_rle(&data), -edition.version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_matches_reference() {
        assert_eq!(checksum(&[]), 0);
        // 1 -> rotl 3 = 8; low byte 8 + 2 = 10 -> rotl 3 = 80
        assert_eq!(checksum(&[1, 2]), 80);
    }

    #[test]
    fn test_rle_decode() {
        let encoded = [0xFD, 0x07, 0x01, 0xAA, 0xBB];
        assert_eq!(decode_rle(&encoded, 16).unwrap(), vec![7, 7, 7, 7, 0xAA, 0xBB]);
    }

    #[test]
    fn test_rle_limits() {
        let encoded = [0x81, 0x00];
        assert!(decode_rle(&encoded, 127).is_err());
        assert_eq!(decode_rle(&encoded, 128).unwrap().len(), 128);
        assert!(decode_rle(&[0x05, 1, 2], 64).is_err());
        assert!(decode_rle(&[0x90], 64).is_err());
    }

    #[test]
    fn test_rle_encoder_output_is_decodable() {
        let mut image = vec![0u8; 1000];
        image[10] = 5;
        image[11] = 6;
        image.extend((0..=255u8).cycle().take(300));
        let encoded = encode_rle(&image);
        assert!(encoded.len() < image.len());
        assert_eq!(decode_rle(&encoded, image.len()).unwrap(), image);
    }

    #[test]
    fn test_cipher_inverts() {
        let mut data: Vec<u8> = (0..CIPHER_START + 64).map(|i| (i * 7) as u8).collect();
        let original = data.clone();
        encipher_sc4(&mut data);
        assert_ne!(data, original);
        assert_eq!(data[..CIPHER_START], original[..CIPHER_START]);
        decipher_sc4(&mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_decode_park_detects_kind() {
        let image = vec![0x42u8; CIPHER_START + 100];
        let sv4 = encode_sv4(&image, Edition::AddedAttractions);
        let decoded = decode_park(&sv4, image.len()).unwrap();
        assert_eq!(decoded.kind, FileKind::SavedGame);
        assert_eq!(decoded.edition, Edition::AddedAttractions);
        assert_eq!(decoded.data, image);

        let sc4 = encode_sc4(&image, Edition::LoopyLandscapes);
        let decoded = decode_park(&sc4, image.len()).unwrap();
        assert_eq!(decoded.kind, FileKind::Scenario);
        assert_eq!(decoded.data, image);
    }

    #[test]
    fn test_decode_park_rejects_wrong_size() {
        let image = vec![1u8; 64];
        let sv4 = encode_sv4(&image, Edition::Classic);
        assert!(matches!(
            decode_park(&sv4, 65),
            Err(Error::SizeMismatch { expected: 65, actual: 64 })
        ));
        assert!(decode_park(&sv4, 63).is_err());
    }

    #[test]
    fn test_decode_park_rejects_bad_checksum() {
        let image = vec![1u8; 64];
        let mut sv4 = encode_sv4(&image, Edition::Classic);
        let n = sv4.len();
        sv4[n - 1] ^= 0x40;
        assert!(matches!(decode_park(&sv4, 64), Err(Error::UnknownVersion(_))));
        assert!(decode_park(&[1, 2], 64).is_err());
    }
}
