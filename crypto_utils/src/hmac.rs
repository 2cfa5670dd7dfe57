use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 of `data` under `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64], InvalidLength> {
    let mut mac = HmacSha512::new_from_slice(key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}
