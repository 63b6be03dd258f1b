// Copyright (c) 2024 Thales Group
//
// SPDX-License-Identifier: MIT

//! Command-line PKC chain validator.
//!
//! Validates a Luna HSM PKC bundle against a Thales root CA certificate
//! and/or a certification request, prints the HSM details the leaf
//! certificate carries, and exits non-zero if any check fails.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use luna_pkcv::{bundle, certificate, csr, fingerprint, policy, vendor, ChainValidator};

#[derive(Parser)]
#[command(
    name = "luna-pkcv",
    version,
    about = "Validate a Thales Luna HSM PKC certificate chain",
    group(ArgGroup::new("anchor").required(true).multiple(true).args(["ca", "req"]))
)]
struct Cli {
    /// PKC bundle (PKCS #7 SignedData, DER)
    #[arg(long, value_name = "FILE")]
    pkc: PathBuf,

    /// Thales root CA certificate to compare against the chain root (PEM or DER)
    #[arg(long, value_name = "FILE")]
    ca: Option<PathBuf>,

    /// Certification request whose public key must match the chain leaf (PEM or DER)
    #[arg(long, value_name = "FILE")]
    req: Option<PathBuf>,

    /// Do not print the certificates in the chain
    #[arg(long)]
    quiet: bool,
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn run(cli: &Cli) -> Result<bool> {
    let pkc_bytes = read_file(&cli.pkc)?;
    let chain = bundle::chain_from_pkcs7(&pkc_bytes)
        .with_context(|| format!("cannot parse PKC bundle {}", cli.pkc.display()))?;

    if !cli.quiet {
        for (index, cert) in chain.iter().enumerate() {
            println!(
                "Certificate {}: subject={}, issuer={}",
                index, cert.tbs_certificate.subject, cert.tbs_certificate.issuer
            );
        }
    }

    let validator = ChainValidator::new();
    let valid = match validator.validate(&chain) {
        Ok(valid) => valid,
        Err(failure) => {
            eprintln!("PKC chain validation failed: {}", failure);
            return Ok(false);
        }
    };
    println!("PKC chain is valid ({} certificates)", chain.len());

    match policy::match_policy(&chain) {
        Ok(profile) => println!("EKU policy matched: {} profile", profile.name),
        Err(failure) => {
            eprintln!("EKU policy check failed: {}", failure);
            return Ok(false);
        }
    }

    match vendor::hsm_serial_number(valid.leaf)? {
        Some(serial) => println!("HSM serial number: {}", serial),
        None => println!("HSM serial number extension not present"),
    }
    match vendor::hsm_firmware_version(valid.leaf)? {
        Some(version) => println!("HSM firmware version: {}", version),
        None => println!("HSM firmware version extension not present"),
    }

    let mut ok = true;

    if let Some(ca_path) = &cli.ca {
        let ca_bytes = read_file(ca_path)?;
        let ca = certificate::from_pem_or_der(&ca_bytes)
            .with_context(|| format!("cannot parse CA certificate {}", ca_path.display()))?;

        let root_fp = fingerprint::sha1_fingerprint(valid.root)?;
        let ca_fp = fingerprint::sha1_fingerprint(&ca)?;
        println!("Chain root fingerprint: {}", fingerprint::format_fingerprint(&root_fp));
        println!("CA fingerprint:         {}", fingerprint::format_fingerprint(&ca_fp));
        if root_fp == ca_fp {
            println!("Chain root matches the provided CA certificate");
        } else {
            eprintln!("Chain root does not match the provided CA certificate");
            ok = false;
        }
    }

    if let Some(req_path) = &cli.req {
        let req_bytes = read_file(req_path)?;
        let req = csr::from_pem_or_der(&req_bytes)
            .with_context(|| format!("cannot parse certification request {}", req_path.display()))?;

        if csr::public_key_matches(&req, valid.leaf)? {
            println!("Certification request public key matches the chain leaf");
        } else {
            eprintln!("Certification request public key does not match the chain leaf");
            ok = false;
        }
    }

    Ok(ok)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
