// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! PKCS #10 certification request handling.
//!
//! A PKC chain attests a key the HSM generated; callers can cross-check
//! that the certification request they are about to submit carries the
//! same key the chain's leaf certifies.

use crate::certificate::{looks_like_pem, spki_der};
use crate::error::Result;
use der::{Decode, DecodePem, Encode};
use x509_cert::request::CertReq;
use x509_cert::Certificate;

/// Load a certification request from either PEM or DER bytes.
pub fn from_pem_or_der(input: &[u8]) -> Result<CertReq> {
    if looks_like_pem(input) {
        Ok(CertReq::from_pem(input)?)
    } else {
        Ok(CertReq::from_der(input)?)
    }
}

/// Whether the request's public key equals the certificate's.
///
/// Comparison is over the full DER-encoded SubjectPublicKeyInfo, so the
/// algorithm and parameters must match as well as the key bytes.
pub fn public_key_matches(req: &CertReq, cert: &Certificate) -> Result<bool> {
    let req_spki = req.info.public_key.to_der()?;
    let cert_spki = spki_der(cert)?;
    let matches = req_spki == cert_spki;
    if !matches {
        log::error!("Certification request public key does not match the leaf certificate");
    }
    Ok(matches)
}
