// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use automat::application::VendingService;
use automat::cli::Session;
use automat::domain::{Catalog, Kronor, Product};

/// Helper to create a service over the standard three-product catalog
pub fn standard_service() -> VendingService {
    VendingService::new(Catalog::standard())
}

/// Helper to create a service over a custom catalog
pub fn custom_service(products: Vec<Product>) -> Result<VendingService> {
    Ok(VendingService::new(Catalog::new(products)?))
}

/// Drive a full session from scripted input, returning the captured output
/// and the balance left on the machine afterwards
pub fn run_session(service: VendingService, script: &str) -> Result<(String, Kronor)> {
    let mut output = Vec::new();
    let mut session = Session::new(service, Cursor::new(script), &mut output);
    session.run()?;
    let balance = session.service().balance();
    drop(session);
    Ok((String::from_utf8(output)?, balance))
}
