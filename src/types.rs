// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Certificate data model.
//!
//! A [`Cennznut`] grants a holder the right to call methods of runtime
//! modules and to interact with contract addresses, each under an optional
//! block cooldown. Modules, methods and contracts are plain data with
//! chainable constructors; a `Cennznut` is only ever produced by
//! [`Cennznut::new`], [`CennznutBuilder::build`] or by decoding, all of
//! which check every invariant up front. After that it is frozen: there are
//! no mutating methods, amendments build a new certificate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binary::collection::ensure_unique_keys;
use crate::binary::field::check_fixed_text;
use crate::binary::layout::{
    ADDRESS_WIDTH, CONSTRAINTS_LEN, CONTRACT_COUNT, METHOD_COUNT, MODULE_COUNT, NAME_WIDTH, VERSION,
};
use crate::error::CodecError;

/// Name of a runtime module.
pub type ModuleName = String;

/// Name of a method within a module.
pub type MethodName = String;

/// A 32-byte contract address.
pub type ContractAddress = [u8; ADDRESS_WIDTH];

/// Module or method name that matches any name during validation.
pub const WILDCARD: &str = "*";

/// Contract address that matches any address during validation.
pub const WILDCARD_ADDRESS: ContractAddress = [0x00; ADDRESS_WIDTH];

// ============================================================================
// METHOD
// ============================================================================

/// A single permitted call within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: MethodName,
    /// Minimum blocks between invocations; `None` means no cooldown.
    pub block_cooldown: Option<u32>,
    /// Opaque extra restriction payload (1..=256 bytes when present).
    pub constraints: Option<Vec<u8>>,
}

impl Method {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            block_cooldown: None,
            constraints: None,
        }
    }

    pub fn block_cooldown(mut self, block_cooldown: u32) -> Self {
        self.block_cooldown = Some(block_cooldown);
        self
    }

    pub fn constraints(mut self, constraints: Vec<u8>) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Cooldown in blocks, 0 when none is set.
    pub fn cooldown_blocks(&self) -> u32 {
        self.block_cooldown.unwrap_or(0)
    }

    fn validate(&self) -> Result<(), CodecError> {
        check_fixed_text(&self.name, NAME_WIDTH).map_err(|e| e.in_field("method name"))?;
        if let Some(constraints) = &self.constraints {
            CONSTRAINTS_LEN.check(constraints.len())?;
        }
        Ok(())
    }
}

// ============================================================================
// MODULE
// ============================================================================

/// Delegated permission to call a family of methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: ModuleName,
    /// Minimum blocks between invocations of any method; `None` means no cooldown.
    pub block_cooldown: Option<u32>,
    /// Permitted methods in wire order. Must not be empty.
    pub methods: Vec<Method>,
}

impl Module {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            block_cooldown: None,
            methods: Vec::new(),
        }
    }

    pub fn block_cooldown(mut self, block_cooldown: u32) -> Self {
        self.block_cooldown = Some(block_cooldown);
        self
    }

    /// Append one method.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Replace the method list.
    pub fn methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Cooldown in blocks, 0 when none is set.
    pub fn cooldown_blocks(&self) -> u32 {
        self.block_cooldown.unwrap_or(0)
    }

    /// Returns the method with exactly this name, if the module has one.
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    fn validate(&self) -> Result<(), CodecError> {
        check_fixed_text(&self.name, NAME_WIDTH).map_err(|e| e.in_field("module name"))?;
        METHOD_COUNT.check(self.methods.len())?;
        for method in &self.methods {
            method.validate()?;
        }
        ensure_unique_keys(&self.methods, METHOD_COUNT, |m| m.name.as_str())
    }
}

// ============================================================================
// CONTRACT
// ============================================================================

/// Permission to interact with one contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPermission {
    pub address: ContractAddress,
    /// Minimum blocks between interactions; `None` means no cooldown.
    pub block_cooldown: Option<u32>,
}

impl ContractPermission {
    pub fn new(address: &ContractAddress) -> Self {
        Self {
            address: *address,
            block_cooldown: None,
        }
    }

    /// A permission for every contract (the all-zero address).
    pub fn wildcard() -> Self {
        Self::new(&WILDCARD_ADDRESS)
    }

    pub fn block_cooldown(mut self, block_cooldown: u32) -> Self {
        self.block_cooldown = Some(block_cooldown);
        self
    }

    /// Cooldown in blocks, 0 when none is set.
    pub fn cooldown_blocks(&self) -> u32 {
        self.block_cooldown.unwrap_or(0)
    }
}

/// Contract address as a hashable key that prints as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AddressKey(pub(crate) ContractAddress);

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

// ============================================================================
// CERTIFICATE
// ============================================================================

/// A decoded or freshly assembled permission-delegation certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CennznutParts")]
pub struct Cennznut {
    version: u16,
    modules: Vec<Module>,
    contracts: Vec<ContractPermission>,
}

/// Unchecked shape used to deserialize a [`Cennznut`] through validation.
#[derive(Deserialize)]
struct CennznutParts {
    version: u16,
    modules: Vec<Module>,
    contracts: Vec<ContractPermission>,
}

impl TryFrom<CennznutParts> for Cennznut {
    type Error = CodecError;

    fn try_from(parts: CennznutParts) -> Result<Self, Self::Error> {
        if parts.version != VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: parts.version,
                expected: VERSION,
            });
        }
        Self::new(parts.modules, parts.contracts)
    }
}

impl Cennznut {
    /// Assemble a certificate from ordered module and contract lists.
    ///
    /// Everything `encode` would reject except an empty module list is
    /// rejected here: over-long or NUL-containing names, modules without
    /// methods, duplicate keys, oversized collections and constraint payloads.
    /// A certificate without modules is valid to hold and query but cannot be
    /// encoded.
    pub fn new(
        modules: Vec<Module>,
        contracts: Vec<ContractPermission>,
    ) -> Result<Self, CodecError> {
        if modules.len() > MODULE_COUNT.max_entries() {
            return Err(CodecError::TooManyEntries {
                kind: MODULE_COUNT.kind,
                count: modules.len(),
                max: MODULE_COUNT.max_entries(),
            });
        }
        for module in &modules {
            module.validate()?;
        }
        ensure_unique_keys(&modules, MODULE_COUNT, |m| m.name.as_str())?;

        CONTRACT_COUNT.check(contracts.len())?;
        ensure_unique_keys(&contracts, CONTRACT_COUNT, |c| AddressKey(c.address))?;

        Ok(Self {
            version: VERSION,
            modules,
            contracts,
        })
    }

    pub fn builder() -> CennznutBuilder {
        CennznutBuilder::default()
    }

    /// Wrap entries the decoder has already checked.
    pub(crate) fn from_decoded(
        version: u16,
        modules: Vec<Module>,
        contracts: Vec<ContractPermission>,
    ) -> Self {
        Self {
            version,
            modules,
            contracts,
        }
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// Modules in wire order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Contract permissions in wire order.
    pub fn contracts(&self) -> &[ContractPermission] {
        &self.contracts
    }

    /// Take the entries back out, e.g. to assemble an amended certificate.
    pub fn into_parts(self) -> (Vec<Module>, Vec<ContractPermission>) {
        (self.modules, self.contracts)
    }
}

/// Incremental construction of a [`Cennznut`].
#[derive(Debug, Clone, Default)]
pub struct CennznutBuilder {
    modules: Vec<Module>,
    contracts: Vec<ContractPermission>,
}

impl CennznutBuilder {
    pub fn module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    pub fn contract(mut self, contract: ContractPermission) -> Self {
        self.contracts.push(contract);
        self
    }

    pub fn build(self) -> Result<Cennznut, CodecError> {
        Cennznut::new(self.modules, self.contracts)
    }
}
