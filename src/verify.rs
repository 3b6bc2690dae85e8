// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only permission queries against a certificate.
//!
//! Two families of checks:
//!
//! - `get_*` / `verify_*` answer with exact key matches. Absence is a normal
//!   result (`None` / `false`), never an error. `verify_*` optionally takes a
//!   [`BlockUsage`] to also require that the cooldown has elapsed.
//! - `validate_*` treat the wildcard entries (`"*"` names, the all-zero
//!   address) as catch-alls and explain refusals with a [`ValidationErr`].
//!   An exactly named entry always wins over a wildcard.

use crate::error::{Domain, ValidationErr};
use crate::types::{
    Cennznut, ContractAddress, ContractPermission, Method, Module, WILDCARD, WILDCARD_ADDRESS,
};

/// Chain heights needed to judge whether a cooldown has elapsed.
///
/// The certificate does not track usage; whoever enforces cooldowns records
/// when a permission was last used and passes it in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockUsage {
    pub current_height: u64,
    /// Height of the previous use, `None` if the permission was never used.
    pub last_used_height: Option<u64>,
}

impl BlockUsage {
    pub fn never_used(current_height: u64) -> Self {
        Self {
            current_height,
            last_used_height: None,
        }
    }

    pub fn last_used(current_height: u64, last_used_height: u64) -> Self {
        Self {
            current_height,
            last_used_height: Some(last_used_height),
        }
    }

    /// True when at least `cooldown` blocks separate the last use from now.
    pub fn allows(&self, cooldown: u32) -> bool {
        if cooldown == 0 {
            return true;
        }
        match self.last_used_height {
            None => true,
            Some(last) => self
                .current_height
                .checked_sub(last)
                .is_some_and(|elapsed| elapsed >= u64::from(cooldown)),
        }
    }
}

impl Module {
    /// Returns the method, falling back to a wildcard method.
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.get_method(name).or_else(|| self.get_method(WILDCARD))
    }
}

impl Cennznut {
    /// Returns the module with exactly this name.
    pub fn get_module(&self, name: &str) -> Option<&Module> {
        self.modules().iter().find(|m| m.name == name)
    }

    /// Returns the contract permission for exactly this address.
    pub fn get_contract(&self, address: &ContractAddress) -> Option<&ContractPermission> {
        self.contracts().iter().find(|c| &c.address == address)
    }

    /// True iff the certificate lists `address`, and, when `usage` is given,
    /// its cooldown has elapsed.
    pub fn verify_contract(&self, address: &ContractAddress, usage: Option<BlockUsage>) -> bool {
        match self.get_contract(address) {
            Some(contract) => usage.is_none_or(|u| u.allows(contract.cooldown_blocks())),
            None => false,
        }
    }

    /// True iff the certificate lists `method` under `module`, and, when
    /// `usage` is given, both the module and the method cooldown have elapsed.
    pub fn verify_method(&self, module: &str, method: &str, usage: Option<BlockUsage>) -> bool {
        let Some(module) = self.get_module(module) else {
            return false;
        };
        let Some(method) = module.get_method(method) else {
            return false;
        };
        usage.is_none_or(|u| {
            u.allows(module.cooldown_blocks()) && u.allows(method.cooldown_blocks())
        })
    }

    /// Returns the module, falling back to a wildcard module.
    pub fn find_module(&self, name: &str) -> Option<&Module> {
        self.get_module(name).or_else(|| self.get_module(WILDCARD))
    }

    /// Returns the contract, falling back to the wildcard address.
    pub fn find_contract(&self, address: &ContractAddress) -> Option<&ContractPermission> {
        self.get_contract(address)
            .or_else(|| self.get_contract(&WILDCARD_ADDRESS))
    }

    /// Check the certificate grants `module::method`, honouring wildcards.
    pub fn validate_module(&self, module: &str, method: &str) -> Result<(), ValidationErr> {
        let module = self
            .find_module(module)
            .ok_or(ValidationErr::NoPermission(Domain::Module))?;
        module
            .find_method(method)
            .map(|_| ())
            .ok_or(ValidationErr::NoPermission(Domain::Method))
    }

    /// Check the certificate grants access to `address`, honouring the
    /// wildcard address.
    pub fn validate_contract(&self, address: &ContractAddress) -> Result<(), ValidationErr> {
        self.find_contract(address)
            .map(|_| ())
            .ok_or(ValidationErr::NoPermission(Domain::Contract))
    }
}
