// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Error types for PKC chain validation.
//!
//! This module defines the error types for all validation scenarios:
//! chain walking, EKU policy matching, and vendor extension decoding.

use core::fmt;

/// Result type alias for PKC validation operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for PKC chain validation
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Errors during DER/ASN.1 parsing (from der crate)
    Asn1(der::Error),

    /// Errors related to cryptographic signature verification
    Signature(SignatureError),

    /// Unsupported or invalid cryptographic algorithms
    Algorithm(AlgorithmError),

    /// Vendor extension decoding errors
    Extension(ExtensionError),

    /// Certificate chain structure errors
    Chain(ChainError),

    /// Certificate encoding errors (PEM/DER conversion)
    Encoding(EncodingError),

    /// Generic validation error with custom message
    Validation(String),
}

/// Errors related to cryptographic signature verification
#[derive(Debug, Clone)]
pub enum SignatureError {
    /// Signature verification failed
    VerificationFailed,

    /// Signature algorithm not supported
    UnsupportedSignatureAlgorithm(String),

    /// Error from ring cryptographic library
    RingError(String),
}

/// Errors related to cryptographic algorithms
#[derive(Debug, Clone)]
pub enum AlgorithmError {
    /// Algorithm not supported
    Unsupported(String),

    /// Algorithm parameters invalid
    InvalidParameters(String),

    /// Algorithm parameters missing
    MissingParameters,
}

/// Errors related to vendor certificate extensions
#[derive(Debug, Clone)]
pub enum ExtensionError {
    /// Invalid extension encoding
    InvalidEncoding(String),

    /// Extension payload shorter than the decoded field requires
    TruncatedPayload { expected: usize, found: usize },
}

/// Errors related to certificate chain structure
#[derive(Debug, Clone)]
pub enum ChainError {
    /// Empty certificate chain
    EmptyChain,

    /// Root certificate is not self-signed
    RootNotSelfSigned,

    /// Cannot find issuer certificate
    IssuerNotFound(String),

    /// Certificate set does not form a single chain
    Disconnected(String),

    /// PKCS #7 bundle carried no certificates
    NoCertificates,
}

/// Errors related to certificate encoding
#[derive(Debug, Clone)]
pub enum EncodingError {
    /// Invalid PEM format
    InvalidPem(String),

    /// Invalid DER encoding
    InvalidDer(String),

    /// Content type of a PKCS #7 bundle is not SignedData
    NotSignedData(String),
}

// ============================================================================
// Error Display Implementation
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asn1(e) => write!(f, "ASN.1 error: {}", e),
            Error::Signature(e) => write!(f, "Signature error: {}", e),
            Error::Algorithm(e) => write!(f, "Algorithm error: {}", e),
            Error::Extension(e) => write!(f, "Extension error: {}", e),
            Error::Chain(e) => write!(f, "Chain validation error: {}", e),
            Error::Encoding(e) => write!(f, "Encoding error: {}", e),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::VerificationFailed => write!(f, "Signature verification failed"),
            SignatureError::UnsupportedSignatureAlgorithm(algo) => {
                write!(f, "Unsupported signature algorithm: {}", algo)
            }
            SignatureError::RingError(msg) => write!(f, "Cryptographic error: {}", msg),
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::Unsupported(algo) => write!(f, "Unsupported algorithm: {}", algo),
            AlgorithmError::InvalidParameters(msg) => {
                write!(f, "Invalid algorithm parameters: {}", msg)
            }
            AlgorithmError::MissingParameters => write!(f, "Missing algorithm parameters"),
        }
    }
}

impl fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionError::InvalidEncoding(msg) => {
                write!(f, "Invalid extension encoding: {}", msg)
            }
            ExtensionError::TruncatedPayload { expected, found } => {
                write!(
                    f,
                    "Extension payload too short: expected at least {} bytes, found {}",
                    expected, found
                )
            }
        }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "Certificate chain is empty"),
            ChainError::RootNotSelfSigned => write!(f, "Root certificate is not self-signed"),
            ChainError::IssuerNotFound(name) => write!(f, "Issuer not found: {}", name),
            ChainError::Disconnected(msg) => {
                write!(f, "Certificates do not form a single chain: {}", msg)
            }
            ChainError::NoCertificates => write!(f, "Bundle contains no certificates"),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPem(msg) => write!(f, "Invalid PEM: {}", msg),
            EncodingError::InvalidDer(msg) => write!(f, "Invalid DER: {}", msg),
            EncodingError::NotSignedData(oid) => {
                write!(f, "Not a PKCS #7 SignedData bundle: content type {}", oid)
            }
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from external crate errors
// ============================================================================

/// Convert from der crate errors
impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

/// Convert from PEM decoding errors
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::Encoding(EncodingError::InvalidPem(err.to_string()))
    }
}

/// Convert from ring's Unspecified error
#[cfg(feature = "ring-backend")]
impl From<ring::error::Unspecified> for Error {
    fn from(_: ring::error::Unspecified) -> Self {
        Error::Signature(SignatureError::RingError(
            "Cryptographic operation failed".to_string(),
        ))
    }
}

// ============================================================================
// Helper constructors for common error cases
// ============================================================================

impl Error {
    /// Create a signature verification failure
    pub fn signature_failed() -> Self {
        Error::Signature(SignatureError::VerificationFailed)
    }

    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm<S: Into<String>>(algo: S) -> Self {
        Error::Algorithm(AlgorithmError::Unsupported(algo.into()))
    }

    /// Create an invalid extension encoding error
    pub fn invalid_extension<S: Into<String>>(msg: S) -> Self {
        Error::Extension(ExtensionError::InvalidEncoding(msg.into()))
    }

    /// Create a truncated extension payload error
    pub fn truncated_payload(expected: usize, found: usize) -> Self {
        Error::Extension(ExtensionError::TruncatedPayload { expected, found })
    }

    /// Create an issuer not found error
    pub fn issuer_not_found<S: Into<String>>(name: S) -> Self {
        Error::Chain(ChainError::IssuerNotFound(name.into()))
    }

    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
