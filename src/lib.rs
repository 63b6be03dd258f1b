// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Luna HSM PKC chain validation
//!
//! Validates Public Key Confirmation (PKC) certificate chains emitted by
//! Thales Luna HSMs: the leaf→root signature walk, the vendor EKU policy
//! each chain tier must carry, and the vendor-private extensions holding
//! the HSM serial number and firmware version.
//!
//! # Features
//! - Parse PKC bundles (PKCS #7 SignedData) and order them leaf→root
//! - Verify the chain with a pluggable crypto backend (`ring` by default)
//! - Match the per-tier Extended Key Usage profile (RSA or ECC, by length)
//! - Decode the HSM serial number and firmware version extensions
//! - Cross-check a CA certificate fingerprint and a PKCS #10 public key
//!
//! # Example
//! ```no_run
//! use luna_pkcv::{bundle, policy, vendor, ChainValidator};
//!
//! # fn example(pkc_der: &[u8]) -> luna_pkcv::Result<()> {
//! let chain = bundle::chain_from_pkcs7(pkc_der)?;
//! let validator = ChainValidator::new();
//! if let Ok(valid) = validator.validate(&chain) {
//!     let serial = vendor::hsm_serial_number(valid.leaf)?;
//!     let _ = (serial, policy::matches(&chain));
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod bundle;
pub mod certificate;
pub mod chain;
pub mod crypto_backend;
pub mod csr;
pub mod error;
#[cfg(feature = "ring-backend")]
pub mod fingerprint;
pub mod oids;
pub mod policy;
pub mod validator;
pub mod vendor;

#[cfg(test)]
pub(crate) mod testutil;

pub use chain::CertificateChain;
pub use error::{Error, Result};
pub use policy::{match_policy, EkuPolicy, PolicyFailure};
pub use validator::{ChainFailure, ChainFailureKind, ChainValidator, ValidChain};
pub use vendor::{hsm_firmware_version, hsm_serial_number, FirmwareVersion};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        CertificateChain, ChainFailure, ChainValidator, EkuPolicy, Error, FirmwareVersion, Result,
    };
}
