// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Certificate helpers.
//!
//! Thin accessors over [`x509_cert::Certificate`]: extension lookup, EKU
//! extraction, loading from DER or PEM, and public key access.

use crate::error::Result;
use crate::oids;
use const_oid::ObjectIdentifier;
use der::{Decode, DecodePem, Encode};
use x509_cert::ext::pkix::ExtendedKeyUsage;
use x509_cert::ext::Extension;
use x509_cert::Certificate;

/// Find an extension by OID.
///
/// Returns the first matching extension, or `None` if the certificate has
/// no extensions or none with the given OID.
pub fn find_extension<'a>(cert: &'a Certificate, oid: &ObjectIdentifier) -> Option<&'a Extension> {
    cert.tbs_certificate
        .extensions
        .as_deref()?
        .iter()
        .find(|ext| &ext.extn_id == oid)
}

/// Extract the Extended Key Usage extension, if present.
///
/// Returns `Ok(None)` when the certificate carries no EKU extension; a
/// present but malformed extension is an error.
pub fn extended_key_usage(cert: &Certificate) -> Result<Option<ExtendedKeyUsage>> {
    match find_extension(cert, &oids::EXTENDED_KEY_USAGE) {
        Some(ext) => {
            let eku = ExtendedKeyUsage::from_der(ext.extn_value.as_bytes())?;
            Ok(Some(eku))
        }
        None => Ok(None),
    }
}

/// Check whether input bytes look like PEM rather than DER.
///
/// PEM input starts with a `-----BEGIN ` encapsulation boundary.
pub fn looks_like_pem(input: &[u8]) -> bool {
    input.starts_with(b"-----BEGIN ")
}

/// Load a certificate from either PEM or DER bytes.
pub fn from_pem_or_der(input: &[u8]) -> Result<Certificate> {
    if looks_like_pem(input) {
        Ok(Certificate::from_pem(input)?)
    } else {
        Ok(Certificate::from_der(input)?)
    }
}

/// DER encoding of the certificate's SubjectPublicKeyInfo.
pub fn spki_der(cert: &Certificate) -> Result<Vec<u8>> {
    Ok(cert.tbs_certificate.subject_public_key_info.to_der()?)
}

/// The curve OID from an EC public key's algorithm parameters, if any.
///
/// RSA keys carry no curve; for EC keys the named curve is encoded as an
/// OID in the SubjectPublicKeyInfo algorithm parameters.
pub fn public_key_curve(cert: &Certificate) -> Option<ObjectIdentifier> {
    cert.tbs_certificate
        .subject_public_key_info
        .algorithm
        .parameters
        .as_ref()
        .and_then(|params| params.decode_as::<ObjectIdentifier>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_find_extension_absent() {
        let cert = testutil::self_signed("CN=Root", b"root-key");
        assert!(find_extension(&cert, &oids::HSM_SERIAL_NUMBER).is_none());
    }

    #[test]
    fn test_find_extension_present() {
        let ext = testutil::luna_extension(oids::HSM_SERIAL_NUMBER, &[1, 0, 0, 0]);
        let cert = testutil::cert_with_extensions(
            "CN=Leaf",
            "CN=Root",
            b"leaf-key",
            b"root-key",
            vec![ext],
        );
        let found = find_extension(&cert, &oids::HSM_SERIAL_NUMBER);
        assert!(found.is_some());
        assert_eq!(found.unwrap().extn_id, oids::HSM_SERIAL_NUMBER);
    }

    #[test]
    fn test_extended_key_usage_absent() {
        let cert = testutil::self_signed("CN=Root", b"root-key");
        assert!(extended_key_usage(&cert).unwrap().is_none());
    }

    #[test]
    fn test_extended_key_usage_present() {
        let ext = testutil::eku_extension(&[oids::EKU_LEAF]);
        let cert = testutil::cert_with_extensions(
            "CN=Leaf",
            "CN=Root",
            b"leaf-key",
            b"root-key",
            vec![ext],
        );
        let eku = extended_key_usage(&cert).unwrap().unwrap();
        assert_eq!(eku.0, vec![oids::EKU_LEAF]);
    }

    #[test]
    fn test_extended_key_usage_malformed() {
        let ext = Extension {
            extn_id: oids::EXTENDED_KEY_USAGE,
            critical: false,
            extn_value: der::asn1::OctetString::new(&[0xff, 0x00][..]).unwrap(),
        };
        let cert = testutil::cert_with_extensions(
            "CN=Leaf",
            "CN=Root",
            b"leaf-key",
            b"root-key",
            vec![ext],
        );
        assert!(extended_key_usage(&cert).is_err());
    }

    #[test]
    fn test_looks_like_pem() {
        assert!(looks_like_pem(b"-----BEGIN CERTIFICATE-----\n"));
        assert!(!looks_like_pem(&[0x30, 0x82, 0x01, 0x00]));
        assert!(!looks_like_pem(b""));
    }

    #[test]
    fn test_from_pem_or_der_roundtrip() {
        let cert = testutil::self_signed("CN=Root", b"root-key");
        let der_bytes = cert.to_der().unwrap();
        let reparsed = from_pem_or_der(&der_bytes).unwrap();
        assert_eq!(reparsed, cert);
    }

    #[test]
    fn test_spki_der_differs_per_key() {
        let a = testutil::self_signed("CN=A", b"key-a");
        let b = testutil::self_signed("CN=B", b"key-b");
        assert_ne!(spki_der(&a).unwrap(), spki_der(&b).unwrap());
    }
}
