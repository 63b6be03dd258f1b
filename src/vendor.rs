// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Vendor extension decoding.
//!
//! Luna HSMs stamp the PKC leaf certificate with private extensions under
//! the Thales enterprise arc. Each extension value is a DER OCTET STRING
//! envelope; the payload inside uses the HSM's native little-endian field
//! layout.

use crate::certificate::find_extension;
use crate::error::{Error, Result};
use crate::oids;
use der::asn1::OctetString;
use der::Decode;
use x509_cert::Certificate;

/// HSM firmware version as decoded from the leaf certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// Major version
    pub major: u16,
    /// Minor version
    pub minor: u16,
}

impl core::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Unwrap the OCTET STRING envelope around a vendor extension payload.
fn unwrap_octet_string(extn_value: &[u8]) -> Result<Vec<u8>> {
    let envelope = OctetString::from_der(extn_value)
        .map_err(|e| Error::invalid_extension(format!("not an OCTET STRING envelope: {}", e)))?;
    Ok(envelope.as_bytes().to_vec())
}

/// Decode the HSM serial number from the leaf certificate.
///
/// The payload's first four bytes are a little-endian `u32`. Returns
/// `Ok(None)` when the extension is absent; a payload shorter than four
/// bytes is an error, never zero-filled.
pub fn hsm_serial_number(cert: &Certificate) -> Result<Option<u32>> {
    let ext = match find_extension(cert, &oids::HSM_SERIAL_NUMBER) {
        Some(ext) => ext,
        None => return Ok(None),
    };

    let payload = unwrap_octet_string(ext.extn_value.as_bytes())?;
    if payload.len() < 4 {
        return Err(Error::truncated_payload(4, payload.len()));
    }

    let serial = u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]);
    log::trace!("Decoded HSM serial number {}", serial);
    Ok(Some(serial))
}

/// Decode the HSM firmware version from the leaf certificate.
///
/// The major version is the 16-bit little-endian value built from payload
/// byte 2 and the minor from payload byte 0; the payload stores the fields
/// in reverse of their reading order. Returns `Ok(None)` when the
/// extension is absent; a payload shorter than three bytes is an error.
pub fn hsm_firmware_version(cert: &Certificate) -> Result<Option<FirmwareVersion>> {
    let ext = match find_extension(cert, &oids::HSM_FIRMWARE_VERSION) {
        Some(ext) => ext,
        None => return Ok(None),
    };

    let payload = unwrap_octet_string(ext.extn_value.as_bytes())?;
    if payload.len() < 3 {
        return Err(Error::truncated_payload(3, payload.len()));
    }

    // Single bytes widened to 16-bit little-endian values.
    let version = FirmwareVersion {
        major: u16::from_le_bytes([payload[2], 0]),
        minor: u16::from_le_bytes([payload[0], 0]),
    };
    log::trace!("Decoded HSM firmware version {}", version);
    Ok(Some(version))
}
