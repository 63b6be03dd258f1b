// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! PKC certificate chain validation.
//!
//! Walks a chain leaf→root: the leaf must verify against the first
//! intermediate's key, each intermediate against its successor, and the
//! root against itself. A root that is not self-signed fails the chain
//! outright; a single-certificate chain is accepted only if self-signed.

use crate::certificate;
use crate::chain::CertificateChain;
use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
use crate::error::{Error, Result};
use der::Encode;
use x509_cert::Certificate;

// ============================================================================
// Validation outcome
// ============================================================================

/// A successfully validated chain: the leaf and root it pinned.
///
/// For a single-certificate chain, `leaf` and `root` are the same
/// certificate.
#[derive(Debug, Clone, Copy)]
pub struct ValidChain<'a> {
    /// The end-entity certificate (index 0)
    pub leaf: &'a Certificate,
    /// The trust anchor (last index)
    pub root: &'a Certificate,
}

/// Why and where a chain failed validation.
#[derive(Debug, Clone)]
pub struct ChainFailure {
    /// Index of the certificate at which validation failed (leaf = 0)
    pub index: usize,
    /// Failure classification
    pub kind: ChainFailureKind,
}

/// Classification of a chain validation failure.
#[derive(Debug, Clone)]
pub enum ChainFailureKind {
    /// The chain contained no certificates
    EmptyChain,

    /// The certificate at `index` did not verify against its issuer's key
    /// (or, for the root, against its own key)
    LinkSignature(Error),

    /// The root certificate is not self-signed
    RootNotSelfSigned,
}

impl core::fmt::Display for ChainFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ChainFailureKind::EmptyChain => write!(f, "certificate chain is empty"),
            ChainFailureKind::LinkSignature(err) => {
                write!(f, "certificate {} failed verification: {}", self.index, err)
            }
            ChainFailureKind::RootNotSelfSigned => {
                write!(f, "root certificate (index {}) is not self-signed", self.index)
            }
        }
    }
}

// ============================================================================
// Chain validator
// ============================================================================

/// Validates PKC certificate chains with a pluggable crypto backend.
pub struct ChainValidator<B: CryptoBackend> {
    backend: B,
}

impl<B: CryptoBackend> ChainValidator<B> {
    /// Create a validator with a specific crypto backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Validate a chain leaf→root.
    ///
    /// On success, returns the leaf and root certificates. On failure,
    /// returns the failing index and a failure classification.
    pub fn validate<'a>(
        &self,
        chain: &'a CertificateChain,
    ) -> core::result::Result<ValidChain<'a>, ChainFailure> {
        if chain.is_empty() {
            log::error!("Rejecting empty certificate chain");
            return Err(ChainFailure {
                index: 0,
                kind: ChainFailureKind::EmptyChain,
            });
        }

        let certs = &chain.certificates;
        let last = certs.len() - 1;

        for (index, cert) in certs.iter().enumerate() {
            if index == last {
                // Root: the self-signed probe first, then the verification
                // proper, mirroring the original walk.
                if !self.is_self_signed(cert) {
                    log::error!("Root certificate at index {} is not self-signed", index);
                    return Err(ChainFailure {
                        index,
                        kind: ChainFailureKind::RootNotSelfSigned,
                    });
                }
                if let Err(err) = self.verify_link(cert, cert) {
                    return Err(ChainFailure {
                        index,
                        kind: ChainFailureKind::LinkSignature(err),
                    });
                }
                log::trace!("Root certificate at index {} verified", index);
            } else {
                // Leaf (index 0) and intermediates verify against the next
                // certificate's key.
                if let Err(err) = self.verify_link(cert, &certs[index + 1]) {
                    log::error!("Certificate {} failed verification: {}", index, err);
                    return Err(ChainFailure {
                        index,
                        kind: ChainFailureKind::LinkSignature(err),
                    });
                }
                log::trace!("Certificate {} verified against certificate {}", index, index + 1);
            }
        }

        Ok(ValidChain {
            leaf: &certs[0],
            root: &certs[last],
        })
    }

    /// Boolean convenience over [`validate`](Self::validate).
    pub fn is_valid(&self, chain: &CertificateChain) -> bool {
        self.validate(chain).is_ok()
    }

    /// Whether a certificate verifies against its own key.
    fn is_self_signed(&self, cert: &Certificate) -> bool {
        self.verify_link(cert, cert).is_ok()
    }

    /// Verify `cert`'s signature against `issuer`'s public key.
    fn verify_link(&self, cert: &Certificate, issuer: &Certificate) -> Result<()> {
        let sig_oid = &cert.signature_algorithm.oid;
        let curve = certificate::public_key_curve(issuer);
        let algorithm = SignatureAlgorithm::from_oid_with_curve(sig_oid, curve.as_ref())?;

        let tbs = cert.tbs_certificate.to_der()?;
        let signature = cert.signature.raw_bytes();
        let public_key = issuer
            .tbs_certificate
            .subject_public_key_info
            .subject_public_key
            .raw_bytes();

        self.backend
            .verify_signature(algorithm, &tbs, signature, public_key)
    }
}

#[cfg(feature = "ring-backend")]
impl ChainValidator<crate::crypto_backend::RingBackend> {
    /// Create a validator using the default ring backend.
    pub fn new() -> Self {
        Self::with_backend(crate::crypto_backend::RingBackend)
    }
}

#[cfg(feature = "ring-backend")]
impl Default for ChainValidator<crate::crypto_backend::RingBackend> {
    fn default() -> Self {
        Self::new()
    }
}
