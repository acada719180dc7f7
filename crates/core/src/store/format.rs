use super::encryption::KdfParams;
use crate::errors::CoreError;

/// Magic bytes identifying a Portfolio Tracker store file.
pub const MAGIC: &[u8; 4] = b"PTST";

/// Current container format version.
pub const CURRENT_VERSION: u16 = 1;

/// Minimum header size in bytes:
/// magic(4) + version(2) + kdf_params(12) + salt(16) + nonce(12) + ciphertext_len(8) = 54
pub const MIN_HEADER_SIZE: usize = 54;

/// Container header read from a store file.
#[derive(Debug)]
pub struct ContainerHeader {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
    pub ciphertext_len: u64,
}

/// Assemble a complete store container.
///
/// Layout:
/// ```text
/// [PTST: 4B] [version: 2B LE] [memory_cost: 4B LE] [time_cost: 4B LE]
/// [parallelism: 4B LE] [salt: 16B] [nonce: 12B] [ciphertext_len: 8B LE]
/// [ciphertext: variable]
/// ```
pub fn write_container(
    version: u16,
    kdf_params: &KdfParams,
    salt: &[u8; 16],
    nonce: &[u8; 12],
    ciphertext: &[u8],
) -> Vec<u8> {
    let ciphertext_len = ciphertext.len() as u64;
    let mut buf = Vec::with_capacity(MIN_HEADER_SIZE + ciphertext.len());

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(&ciphertext_len.to_le_bytes());
    buf.extend_from_slice(ciphertext);

    buf
}

/// Parse the header from raw container bytes.
/// Returns the header and the ciphertext slice.
pub fn read_container(data: &[u8]) -> Result<(ContainerHeader, &[u8]), CoreError> {
    if data.len() < MIN_HEADER_SIZE {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a valid store file".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Invalid magic bytes: not a Portfolio Tracker store file".into(),
        ));
    }

    let mut offset = 4;

    let version = u16::from_le_bytes([data[offset], data[offset + 1]]);
    offset += 2;

    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let memory_cost = u32::from_le_bytes(
        data[offset..offset + 4]
            .try_into()
            .map_err(|_| CoreError::InvalidFileFormat("Failed to read KDF memory_cost".into()))?,
    );
    offset += 4;
    let time_cost = u32::from_le_bytes(
        data[offset..offset + 4]
            .try_into()
            .map_err(|_| CoreError::InvalidFileFormat("Failed to read KDF time_cost".into()))?,
    );
    offset += 4;
    let parallelism = u32::from_le_bytes(
        data[offset..offset + 4]
            .try_into()
            .map_err(|_| CoreError::InvalidFileFormat("Failed to read KDF parallelism".into()))?,
    );
    offset += 4;

    // Range-check the KDF params before deriving a key: a crafted file must
    // not be able to demand gigabytes of Argon2 memory or absurd iteration
    // counts.
    if !(8..=1_048_576).contains(&memory_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF memory_cost out of safe range: {memory_cost} KiB (expected 8..1048576)"
        )));
    }
    if !(1..=20).contains(&time_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF time_cost out of safe range: {time_cost} (expected 1..20)"
        )));
    }
    if !(1..=16).contains(&parallelism) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF parallelism out of safe range: {parallelism} (expected 1..16)"
        )));
    }

    let mut salt = [0u8; 16];
    salt.copy_from_slice(&data[offset..offset + 16]);
    offset += 16;

    let mut nonce = [0u8; 12];
    nonce.copy_from_slice(&data[offset..offset + 12]);
    offset += 12;

    let ciphertext_len = u64::from_le_bytes(
        data[offset..offset + 8]
            .try_into()
            .map_err(|_| CoreError::InvalidFileFormat("Failed to read ciphertext length".into()))?,
    );
    offset += 8;

    let expected_end = offset + ciphertext_len as usize;
    if data.len() < expected_end {
        return Err(CoreError::InvalidFileFormat(format!(
            "File truncated: expected {} bytes of ciphertext, got {}",
            ciphertext_len,
            data.len() - offset
        )));
    }

    let ciphertext = &data[offset..expected_end];

    let header = ContainerHeader {
        version,
        kdf_params: KdfParams {
            memory_cost,
            time_cost,
            parallelism,
        },
        salt,
        nonce,
        ciphertext_len,
    };

    Ok((header, ciphertext))
}
