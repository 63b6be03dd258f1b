// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! EKU policy matching for PKC chains.
//!
//! Each tier of a Luna PKC chain carries a vendor-assigned Extended Key
//! Usage OID. Two fixed profiles exist: RSA-keyed chains (longer than
//! three certificates) and ECC-keyed chains (three or fewer). Profile
//! selection is by chain length only.

use crate::certificate;
use crate::chain::CertificateChain;
use crate::oids;
use const_oid::ObjectIdentifier;

/// An ordered per-tier EKU profile, leaf first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EkuPolicy {
    /// Human-readable profile name
    pub name: &'static str,
    /// Expected EKU OID per chain index
    pub expected: &'static [ObjectIdentifier],
}

/// Profile for RSA-keyed chains.
pub static RSA_PROFILE: EkuPolicy = EkuPolicy {
    name: "rsa",
    expected: &oids::RSA_PROFILE_EKUS,
};

/// Profile for ECC-keyed chains.
pub static ECC_PROFILE: EkuPolicy = EkuPolicy {
    name: "ecc",
    expected: &oids::ECC_PROFILE_EKUS,
};

/// Why EKU policy matching failed.
#[derive(Debug, Clone)]
pub enum PolicyFailure {
    /// The certificate at `index` carried an EKU OID other than the one
    /// the profile assigns to that tier
    Mismatch {
        index: usize,
        found: ObjectIdentifier,
        expected: ObjectIdentifier,
    },

    /// The certificate at `index` carries an EKU extension that does not
    /// decode
    MalformedEku { index: usize, source: der::Error },
}

impl core::fmt::Display for PolicyFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PolicyFailure::Mismatch {
                index,
                found,
                expected,
            } => write!(
                f,
                "certificate {}: EKU {} does not match expected {}",
                index, found, expected
            ),
            PolicyFailure::MalformedEku { index, source } => {
                write!(f, "certificate {}: malformed EKU extension: {}", index, source)
            }
        }
    }
}

impl EkuPolicy {
    /// Select the profile for a chain of the given length.
    ///
    /// Chains longer than three certificates use the RSA profile, all
    /// others the ECC profile.
    pub fn for_len(len: usize) -> &'static EkuPolicy {
        if len > 3 {
            &RSA_PROFILE
        } else {
            &ECC_PROFILE
        }
    }

    /// Select the profile for a chain.
    pub fn for_chain(chain: &CertificateChain) -> &'static EkuPolicy {
        Self::for_len(chain.len())
    }

    /// Check a chain against this profile.
    ///
    /// For each certificate within the profile length, every OID present
    /// in its EKU extension must equal the profile's OID for that tier. A
    /// certificate with no EKU extension passes vacuously. Certificates
    /// beyond the profile length are not checked.
    pub fn check(&self, chain: &CertificateChain) -> Result<(), PolicyFailure> {
        let checked = chain.len().min(self.expected.len());
        for (index, cert) in chain.iter().take(checked).enumerate() {
            let eku = certificate::extended_key_usage(cert).map_err(|err| {
                let source = match err {
                    crate::error::Error::Asn1(e) => e,
                    _ => der::Error::new(der::ErrorKind::Failed, der::Length::ZERO),
                };
                PolicyFailure::MalformedEku { index, source }
            })?;

            let eku = match eku {
                Some(eku) => eku,
                None => {
                    log::trace!("Certificate {} has no EKU extension, skipping", index);
                    continue;
                }
            };

            for usage in &eku.0 {
                if usage != &self.expected[index] {
                    log::error!(
                        "Certificate {}: EKU {} does not match profile '{}'",
                        index,
                        usage,
                        self.name
                    );
                    return Err(PolicyFailure::Mismatch {
                        index,
                        found: *usage,
                        expected: self.expected[index],
                    });
                }
            }
        }
        Ok(())
    }
}

/// Select the profile for a chain by length and check it.
///
/// Returns the matched profile on success.
pub fn match_policy(chain: &CertificateChain) -> Result<&'static EkuPolicy, PolicyFailure> {
    let policy = EkuPolicy::for_chain(chain);
    log::trace!(
        "Selected '{}' EKU profile for chain of length {}",
        policy.name,
        chain.len()
    );
    policy.check(chain)?;
    Ok(policy)
}

/// Boolean convenience over [`match_policy`].
pub fn matches(chain: &CertificateChain) -> bool {
    match_policy(chain).is_ok()
}
