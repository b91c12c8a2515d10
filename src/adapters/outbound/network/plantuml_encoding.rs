use crate::shared::Result;
use anyhow::Context;
use base64::alphabet::Alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

/// PlantUML's 64-character alphabet, in value order
const PLANTUML_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Encodes diagram text into the compact token the rendering service expects
///
/// The text is compressed with raw DEFLATE (no zlib header), zero-padded to a
/// whole number of 3-byte groups and written with the PlantUML alphabet.
pub fn encode(source: &str) -> Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(source.as_bytes())
        .context("Failed to compress diagram text")?;
    let compressed = encoder.finish().context("Failed to compress diagram text")?;
    encode_bytes(&compressed)
}

fn encode_bytes(bytes: &[u8]) -> Result<String> {
    let alphabet = Alphabet::new(PLANTUML_ALPHABET)
        .map_err(|e| anyhow::anyhow!("Invalid PlantUML alphabet: {}", e))?;
    let engine = GeneralPurpose::new(
        &alphabet,
        GeneralPurposeConfig::new().with_encode_padding(false),
    );

    let mut padded = bytes.to_vec();
    while padded.len() % 3 != 0 {
        padded.push(0);
    }
    Ok(engine.encode(padded))
}
