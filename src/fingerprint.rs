// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Certificate fingerprints.
//!
//! The root of a PKC chain is cross-checked against a caller-supplied
//! Thales CA certificate by comparing SHA-1 fingerprints, the digest Luna
//! tooling has historically published for its roots.

use crate::error::Result;
use der::Encode;
use ring::digest;
use x509_cert::Certificate;

/// SHA-1 digest of a certificate's DER encoding.
pub fn sha1_fingerprint(cert: &Certificate) -> Result<Vec<u8>> {
    let der_bytes = cert.to_der()?;
    let hash = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, &der_bytes);
    Ok(hash.as_ref().to_vec())
}

/// Format a fingerprint as colon-separated lowercase hex
/// (e.g. `ab:cd:ef:...`).
pub fn format_fingerprint(fingerprint: &[u8]) -> String {
    fingerprint
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Whether two certificates have the same SHA-1 fingerprint.
pub fn fingerprints_match(a: &Certificate, b: &Certificate) -> Result<bool> {
    Ok(sha1_fingerprint(a)? == sha1_fingerprint(b)?)
}
