// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Thales Luna OID constants
//!
//! This module defines Object Identifier (OID) constants for Luna HSM
//! PKC (Public Key Confirmation) chain validation. These OIDs appear in
//! X.509 certificate extensions of the chains Luna HSMs emit.
//!
//! # Luna Base OID
//! All Luna-related OIDs are under the Thales/SafeNet enterprise OID:
//! 1.3.6.1.4.1.12383

use const_oid::ObjectIdentifier;

// =============================================================================
// Thales/SafeNet Base OIDs
// =============================================================================

/// Thales/SafeNet enterprise base OID - 1.3.6.1.4.1.12383
pub const LUNA_BASE: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383");

// =============================================================================
// Vendor extension OIDs (carried on the PKC leaf certificate)
// =============================================================================

/// HSM serial number extension - 1.3.6.1.4.1.12383.2.1
///
/// The extension value is an OCTET STRING envelope whose payload holds the
/// serial number as a little-endian 32-bit integer.
pub const HSM_SERIAL_NUMBER: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.2.1");

/// HSM firmware version extension - 1.3.6.1.4.1.12383.2.3
///
/// The extension value is an OCTET STRING envelope whose payload holds the
/// firmware version fields; see the vendor module for the exact layout.
pub const HSM_FIRMWARE_VERSION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.2.3");

// =============================================================================
// Extended Key Usage profile OIDs (1.3.6.1.4.1.12383.1.*)
// =============================================================================

/// EKU assigned to the tier the chain leaf occupies - 1.3.6.1.4.1.12383.1.13
pub const EKU_LEAF: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.13");

/// EKU for the first RSA intermediate tier - 1.3.6.1.4.1.12383.1.12
pub const EKU_RSA_TIER_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.12");

/// EKU for the second RSA intermediate tier - 1.3.6.1.4.1.12383.1.8
pub const EKU_RSA_TIER_2: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.8");

/// EKU for the third RSA intermediate tier - 1.3.6.1.4.1.12383.1.7
pub const EKU_RSA_TIER_3: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.7");

/// EKU for the RSA root tier - 1.3.6.1.4.1.12383.1.1
pub const EKU_RSA_ROOT: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.1");

/// EKU for the ECC intermediate tier - 1.3.6.1.4.1.12383.1.15
pub const EKU_ECC_TIER_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.15");

/// EKU for the ECC root tier - 1.3.6.1.4.1.12383.1.14
pub const EKU_ECC_ROOT: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.12383.1.14");

/// Ordered per-tier EKU profile for RSA-keyed chains (longer than 3
/// certificates), leaf first.
pub const RSA_PROFILE_EKUS: [ObjectIdentifier; 5] = [
    EKU_LEAF,
    EKU_RSA_TIER_1,
    EKU_RSA_TIER_2,
    EKU_RSA_TIER_3,
    EKU_RSA_ROOT,
];

/// Ordered per-tier EKU profile for ECC-keyed chains (3 certificates or
/// fewer), leaf first.
pub const ECC_PROFILE_EKUS: [ObjectIdentifier; 3] = [EKU_LEAF, EKU_ECC_TIER_1, EKU_ECC_ROOT];

// =============================================================================
// Standard extension OIDs
// =============================================================================

/// Extended Key Usage extension - 2.5.29.37
pub const EXTENDED_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.37");

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if an OID is a Luna vendor OID
///
/// # Returns
/// `true` if the OID starts with the Thales/SafeNet base (1.3.6.1.4.1.12383),
/// `false` otherwise
pub fn is_luna_oid(oid: &ObjectIdentifier) -> bool {
    oid.as_bytes().starts_with(LUNA_BASE.as_bytes())
}
