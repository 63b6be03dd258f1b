// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! PKCS #7 bundle handling.
//!
//! A Luna PKC file is a DER-encoded PKCS #7 `SignedData` structure whose
//! certificate set carries the chain. The set has no ordering guarantee,
//! so extraction is followed by [`CertificateChain::from_unordered`].

use crate::chain::CertificateChain;
use crate::error::{ChainError, EncodingError, Error, Result};
use cms::cert::CertificateChoices;
use cms::content_info::ContentInfo;
use cms::signed_data::SignedData;
use const_oid::ObjectIdentifier;
use der::{Decode, Encode};
use x509_cert::Certificate;

/// id-signedData - 1.2.840.113549.1.7.2
const ID_SIGNED_DATA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.2");

/// Extract the certificates from a DER PKCS #7 `SignedData` bundle.
///
/// Non-certificate members of the set (attribute certificates, `other`
/// choices) are skipped. The returned list preserves the set's encoding
/// order.
pub fn certificates_from_pkcs7(der_bytes: &[u8]) -> Result<Vec<Certificate>> {
    let content_info = ContentInfo::from_der(der_bytes)?;
    if content_info.content_type != ID_SIGNED_DATA {
        return Err(Error::Encoding(EncodingError::NotSignedData(
            content_info.content_type.to_string(),
        )));
    }

    let signed_data_bytes = content_info.content.to_der()?;
    let signed_data = SignedData::from_der(&signed_data_bytes)?;

    let mut certs = Vec::new();
    if let Some(set) = &signed_data.certificates {
        for choice in set.0.iter() {
            if let CertificateChoices::Certificate(cert) = choice {
                certs.push(cert.clone());
            }
        }
    }

    if certs.is_empty() {
        return Err(Error::Chain(ChainError::NoCertificates));
    }

    log::trace!("Extracted {} certificates from PKCS #7 bundle", certs.len());
    Ok(certs)
}

/// Extract and order a PKC chain from a DER PKCS #7 bundle.
pub fn chain_from_pkcs7(der_bytes: &[u8]) -> Result<CertificateChain> {
    let certs = certificates_from_pkcs7(der_bytes)?;
    CertificateChain::from_unordered(certs)
}
