// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Certificate chain types.
//!
//! This module provides the `CertificateChain` type for representing an
//! ordered sequence of X.509 certificates from leaf to root, plus the
//! ordering of an unordered certificate set (as extracted from a PKCS #7
//! bundle) into that form.

use crate::error::{ChainError, Error, Result};
use x509_cert::Certificate;

// ============================================================================
// Certificate Chain
// ============================================================================

/// A certificate chain, ordered from leaf (end-entity) to root (trust anchor).
#[derive(Debug, Clone)]
pub struct CertificateChain {
    /// The certificates in the chain, from leaf to root
    pub certificates: Vec<Certificate>,
}

impl CertificateChain {
    /// Create a new certificate chain
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    /// Create a chain with a single certificate
    pub fn single(cert: Certificate) -> Self {
        Self {
            certificates: vec![cert],
        }
    }

    /// Add a certificate to the chain
    pub fn push(&mut self, cert: Certificate) {
        self.certificates.push(cert);
    }

    /// Get the leaf (end-entity) certificate
    pub fn leaf(&self) -> Option<&Certificate> {
        self.certificates.first()
    }

    /// Get the root (trust anchor) certificate
    pub fn root(&self) -> Option<&Certificate> {
        self.certificates.last()
    }

    /// Get the chain length
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Get an iterator over the certificates
    pub fn iter(&self) -> core::slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    /// Order an arbitrary certificate set into leaf→root form.
    ///
    /// PKCS #7 certificate sets carry no ordering guarantee. The leaf is
    /// the certificate whose subject is not the issuer of any other member;
    /// from there, issuer links are followed upward until the self-signed
    /// root (or the end of the set). Fails if the set does not form one
    /// connected chain.
    pub fn from_unordered(certs: Vec<Certificate>) -> Result<Self> {
        if certs.is_empty() {
            return Err(Error::Chain(ChainError::EmptyChain));
        }

        let is_issuer_of_other = |candidate: usize| {
            certs.iter().enumerate().any(|(j, other)| {
                j != candidate
                    && other.tbs_certificate.issuer == certs[candidate].tbs_certificate.subject
            })
        };
        let leaf = (0..certs.len())
            .find(|&i| !is_issuer_of_other(i))
            .ok_or_else(|| {
                Error::Chain(ChainError::Disconnected(
                    "no leaf candidate (every subject issues another member)".to_string(),
                ))
            })?;

        let mut used = vec![false; certs.len()];
        let mut ordered = Vec::with_capacity(certs.len());
        let mut current = leaf;
        loop {
            used[current] = true;
            ordered.push(certs[current].clone());

            let cert = &certs[current];
            // Self-signed terminates the walk.
            if cert.tbs_certificate.issuer == cert.tbs_certificate.subject {
                break;
            }
            match certs.iter().enumerate().find(|(j, candidate)| {
                !used[*j] && candidate.tbs_certificate.subject == cert.tbs_certificate.issuer
            }) {
                Some((j, _)) => current = j,
                None => break,
            }
        }

        if ordered.len() != certs.len() {
            return Err(Error::Chain(ChainError::Disconnected(format!(
                "{} of {} certificates linked",
                ordered.len(),
                certs.len()
            ))));
        }

        log::trace!("Ordered {} certificates leaf to root", ordered.len());
        Ok(Self::new(ordered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_accessors() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let leaf = testutil::cert("CN=Leaf", "CN=Root", b"leaf-key", b"root-key");
        let chain = CertificateChain::new(vec![leaf.clone(), root.clone()]);

        assert_eq!(chain.len(), 2);
        assert!(!chain.is_empty());
        assert_eq!(chain.leaf().unwrap(), &leaf);
        assert_eq!(chain.root().unwrap(), &root);
        assert_eq!(chain.iter().count(), 2);
    }

    #[test]
    fn test_single_and_push() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let mut chain = CertificateChain::single(testutil::cert(
            "CN=Leaf", "CN=Root", b"leaf-key", b"root-key",
        ));
        chain.push(root);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_empty_chain() {
        let chain = CertificateChain::new(Vec::new());
        assert!(chain.is_empty());
        assert!(chain.leaf().is_none());
        assert!(chain.root().is_none());
    }

    // ── from_unordered ──

    #[test]
    fn test_from_unordered_reorders() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let inter = testutil::cert("CN=Inter", "CN=Root", b"inter-key", b"root-key");
        let leaf = testutil::cert("CN=Leaf", "CN=Inter", b"leaf-key", b"inter-key");

        // Shuffled input: root, leaf, intermediate.
        let chain =
            CertificateChain::from_unordered(vec![root.clone(), leaf.clone(), inter.clone()])
                .unwrap();
        assert_eq!(chain.certificates, vec![leaf, inter, root]);
    }

    #[test]
    fn test_from_unordered_already_ordered() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let leaf = testutil::cert("CN=Leaf", "CN=Root", b"leaf-key", b"root-key");
        let chain = CertificateChain::from_unordered(vec![leaf.clone(), root.clone()]).unwrap();
        assert_eq!(chain.certificates, vec![leaf, root]);
    }

    #[test]
    fn test_from_unordered_single_self_signed() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let chain = CertificateChain::from_unordered(vec![root.clone()]).unwrap();
        assert_eq!(chain.certificates, vec![root]);
    }

    #[test]
    fn test_from_unordered_empty_rejected() {
        let result = CertificateChain::from_unordered(Vec::new());
        assert!(matches!(
            result,
            Err(Error::Chain(ChainError::EmptyChain))
        ));
    }

    #[test]
    fn test_from_unordered_disconnected_rejected() {
        let root = testutil::self_signed("CN=Root", b"root-key");
        let stray = testutil::cert("CN=Stray", "CN=Unrelated", b"stray-key", b"other-key");
        let leaf = testutil::cert("CN=Leaf", "CN=Root", b"leaf-key", b"root-key");
        let result = CertificateChain::from_unordered(vec![root, stray, leaf]);
        assert!(matches!(
            result,
            Err(Error::Chain(ChainError::Disconnected(_)))
        ));
    }
}
