// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Test helpers: in-memory certificate construction and a mock crypto
//! backend.
//!
//! The mock backend treats a signature as valid iff the signature bytes
//! equal the signer's public key bytes, so chain tests can model trust
//! relationships without real key material: a certificate "signed by" an
//! issuer simply carries the issuer's key bytes as its signature.

use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
use crate::error::{Error, Result};
use crate::oids;
use const_oid::ObjectIdentifier;
use der::asn1::{Any, BitString, OctetString, SetOfVec, UtcTime};
use der::{Encode, Tag};
use spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use std::time::Duration;
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::certificate::Version;
use x509_cert::ext::pkix::ExtendedKeyUsage;
use x509_cert::ext::Extension;
use x509_cert::name::{Name, RdnSequence, RelativeDistinguishedName};
use x509_cert::serial_number::SerialNumber;
use x509_cert::time::{Time, Validity};
use x509_cert::{Certificate, TbsCertificate};

/// CommonName attribute type - 2.5.4.3
const OID_CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");

/// sha256WithRSAEncryption, used as the signature algorithm of all mock
/// certificates so algorithm resolution succeeds without curve parameters.
const RSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

/// Mock backend: a signature verifies iff its bytes equal the public key.
pub(crate) struct MatchingKeyBackend;

impl CryptoBackend for MatchingKeyBackend {
    fn verify_signature(
        &self,
        _algorithm: SignatureAlgorithm,
        _tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()> {
        if signature == public_key {
            Ok(())
        } else {
            Err(Error::signature_failed())
        }
    }
}

/// Build a single-CN distinguished name from a `CN=...` string.
pub(crate) fn name(cn: &str) -> Name {
    let cn = cn.strip_prefix("CN=").unwrap_or(cn);
    let value = Any::new(Tag::Utf8String, cn.as_bytes()).unwrap();
    let attr = AttributeTypeAndValue {
        oid: OID_CN,
        value,
    };
    let mut rdn_set = SetOfVec::new();
    rdn_set.insert(attr).unwrap();
    RdnSequence(vec![RelativeDistinguishedName::from(rdn_set)])
}

fn algorithm() -> AlgorithmIdentifierOwned {
    AlgorithmIdentifierOwned {
        oid: RSA_WITH_SHA256,
        parameters: None,
    }
}

fn spki(key: &[u8]) -> SubjectPublicKeyInfoOwned {
    SubjectPublicKeyInfoOwned {
        algorithm: algorithm(),
        subject_public_key: BitString::from_bytes(key).unwrap(),
    }
}

fn validity() -> Validity {
    Validity {
        not_before: Time::UtcTime(
            UtcTime::from_unix_duration(Duration::from_secs(1_700_000_000)).unwrap(),
        ),
        not_after: Time::UtcTime(
            UtcTime::from_unix_duration(Duration::from_secs(1_900_000_000)).unwrap(),
        ),
    }
}

/// Build a certificate with the given subject, issuer, key, and extensions,
/// "signed" by `signer_key` (see [`MatchingKeyBackend`]).
pub(crate) fn cert_with_extensions(
    subject: &str,
    issuer: &str,
    key: &[u8],
    signer_key: &[u8],
    extensions: Vec<Extension>,
) -> Certificate {
    let tbs_certificate = TbsCertificate {
        version: Version::V3,
        serial_number: SerialNumber::new(&[0x01]).unwrap(),
        signature: algorithm(),
        issuer: name(issuer),
        validity: validity(),
        subject: name(subject),
        subject_public_key_info: spki(key),
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: if extensions.is_empty() {
            None
        } else {
            Some(extensions)
        },
    };
    Certificate {
        tbs_certificate,
        signature_algorithm: algorithm(),
        signature: BitString::from_bytes(signer_key).unwrap(),
    }
}

/// Build a certificate without extensions.
pub(crate) fn cert(subject: &str, issuer: &str, key: &[u8], signer_key: &[u8]) -> Certificate {
    cert_with_extensions(subject, issuer, key, signer_key, Vec::new())
}

/// Build a self-signed certificate.
pub(crate) fn self_signed(subject: &str, key: &[u8]) -> Certificate {
    cert(subject, subject, key, key)
}

/// Build an Extended Key Usage extension carrying the given OIDs.
pub(crate) fn eku_extension(eku_oids: &[ObjectIdentifier]) -> Extension {
    let eku = ExtendedKeyUsage(eku_oids.to_vec());
    Extension {
        extn_id: oids::EXTENDED_KEY_USAGE,
        critical: false,
        extn_value: OctetString::new(eku.to_der().unwrap()).unwrap(),
    }
}

/// Build a vendor extension whose value is the OCTET STRING envelope the
/// Luna tooling emits: extn_value = DER(OCTET STRING(payload)).
pub(crate) fn luna_extension(oid: ObjectIdentifier, payload: &[u8]) -> Extension {
    let envelope = OctetString::new(payload).unwrap().to_der().unwrap();
    Extension {
        extn_id: oid,
        critical: false,
        extn_value: OctetString::new(envelope).unwrap(),
    }
}
