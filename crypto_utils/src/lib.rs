pub mod hash;
pub mod hmac;
