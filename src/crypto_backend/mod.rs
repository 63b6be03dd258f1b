// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Cryptographic backend abstraction for signature verification.
//!
//! This module provides a trait-based abstraction so chain validation can
//! run against different crypto implementations. Luna PKC chains are signed
//! with RSA PKCS#1 v1.5 or ECDSA, so only those algorithms are mapped.

use crate::error::{Error, Result};
use const_oid::ObjectIdentifier;

#[cfg(feature = "ring-backend")]
mod ring;
#[cfg(feature = "ring-backend")]
pub use self::ring::*;

/// Signature algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// ECDSA with P-256 curve and SHA-256
    EcdsaP256Sha256,
    /// ECDSA with P-256 curve and SHA-384
    EcdsaP256Sha384,
    /// ECDSA with P-384 curve and SHA-256
    EcdsaP384Sha256,
    /// ECDSA with P-384 curve and SHA-384
    EcdsaP384Sha384,
    /// RSA PKCS#1 v1.5 with SHA-256
    RsaPkcs1Sha256,
    /// RSA PKCS#1 v1.5 with SHA-384
    RsaPkcs1Sha384,
    /// RSA PKCS#1 v1.5 with SHA-512
    RsaPkcs1Sha512,
}

impl SignatureAlgorithm {
    /// Convert a signature OID and optional curve OID to a SignatureAlgorithm.
    ///
    /// For ECDSA, the curve must be provided from the issuer public key
    /// algorithm parameters.
    pub fn from_oid_with_curve(
        sig_oid: &ObjectIdentifier,
        curve_oid: Option<&ObjectIdentifier>,
    ) -> Result<Self> {
        const ECDSA_WITH_SHA256: ObjectIdentifier =
            ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");
        const ECDSA_WITH_SHA384: ObjectIdentifier =
            ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");
        const RSA_WITH_SHA256: ObjectIdentifier =
            ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");
        const RSA_WITH_SHA384: ObjectIdentifier =
            ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");
        const RSA_WITH_SHA512: ObjectIdentifier =
            ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");

        const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
        const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

        match *sig_oid {
            ECDSA_WITH_SHA256 => match curve_oid {
                Some(&SECP256R1) => Ok(SignatureAlgorithm::EcdsaP256Sha256),
                Some(&SECP384R1) => Ok(SignatureAlgorithm::EcdsaP384Sha256),
                Some(oid) => Err(Error::unsupported_algorithm(format!(
                    "ECDSA-SHA256 with unsupported curve OID: {}",
                    oid
                ))),
                None => Err(Error::unsupported_algorithm(
                    "ECDSA-SHA256 requires a curve OID in the public key parameters",
                )),
            },
            ECDSA_WITH_SHA384 => match curve_oid {
                Some(&SECP256R1) => Ok(SignatureAlgorithm::EcdsaP256Sha384),
                Some(&SECP384R1) => Ok(SignatureAlgorithm::EcdsaP384Sha384),
                Some(oid) => Err(Error::unsupported_algorithm(format!(
                    "ECDSA-SHA384 with unsupported curve OID: {}",
                    oid
                ))),
                None => Err(Error::unsupported_algorithm(
                    "ECDSA-SHA384 requires a curve OID in the public key parameters",
                )),
            },
            RSA_WITH_SHA256 => Ok(SignatureAlgorithm::RsaPkcs1Sha256),
            RSA_WITH_SHA384 => Ok(SignatureAlgorithm::RsaPkcs1Sha384),
            RSA_WITH_SHA512 => Ok(SignatureAlgorithm::RsaPkcs1Sha512),
            _ => Err(Error::unsupported_algorithm(format!("OID: {}", sig_oid))),
        }
    }

    /// Convert an OID to a SignatureAlgorithm (without curve information).
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        Self::from_oid_with_curve(oid, None)
    }
}

/// Crypto backend trait for signature verification.
///
/// Implementations of this trait provide the cryptographic operations needed
/// for chain validation, allowing different crypto libraries to be used.
pub trait CryptoBackend {
    /// Verify a signature.
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithm,
        tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()>;
}
