pub mod contracts;

use alloy::primitives::{
    utils::{format_units, parse_units, ParseUnits},
    Address, U256,
};
use serde::Serialize;

use crate::{error::Error, interface::Interface};

/// Network the registry is deployed on.
///
/// Usage:
///
/// **Using the default RPC**
/// ```rust
/// use karma_contracts::chains::STATUS_TESTNET;
///
/// assert_eq!(STATUS_TESTNET.chain_id, 1660990954);
/// ```
///
/// **Using a custom RPC url**
/// ```rust
/// use karma_contracts::chains::{Chain, STATUS_TESTNET};
///
/// const LOCAL: Chain = STATUS_TESTNET.with_rpc_url("http://localhost:8545");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

pub const STATUS_TESTNET: Chain = Chain {
    name: "Status Network Testnet",
    chain_id: 1660990954,
    rpc_url: "https://public.sepolia.rpc.status.network",
    explorer_url: "https://sepoliascan.status.network",
};

impl Chain {
    /// Same chain, reached through another RPC endpoint.
    pub const fn with_rpc_url(self, rpc_url: &'static str) -> Chain {
        Chain { rpc_url, ..self }
    }

    /// Block explorer page for an account or contract.
    pub fn address_url(&self, address: Address) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }
}

/// A token contract deployed at a fixed address, with the metadata needed to
/// display balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub address: Address,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Precision used to convert between base units and human units
    pub decimals: u8,
    pub abi: &'static Interface,
}

impl Token {
    /// Converts a human readable amount ("1.5") into base units.
    ///
    /// Empty, negative or over-precise amounts are rejected rather than rounded.
    pub fn parse_units(&self, amount: &str) -> Result<U256, Error> {
        self.checked_units(amount.trim()).map_err(|error| {
            log::error!("Parsing {} amount {:?}: {}", self.symbol, amount, error);
            error
        })
    }

    fn checked_units(&self, amount: &str) -> Result<U256, Error> {
        if amount.is_empty() {
            return Err(Error::EmptyAmount);
        }
        if amount.starts_with('-') {
            return Err(Error::NegativeAmount(amount.to_string()));
        }
        if let Some((_, fraction)) = amount.split_once('.') {
            if fraction.len() > self.decimals as usize {
                return Err(Error::Precision {
                    amount: amount.to_string(),
                    decimals: self.decimals,
                });
            }
        }

        match parse_units(amount, self.decimals)? {
            ParseUnits::U256(value) => Ok(value),
            ParseUnits::I256(value) if value.is_negative() => {
                Err(Error::NegativeAmount(amount.to_string()))
            }
            ParseUnits::I256(value) => Ok(value.into_raw()),
        }
    }

    /// Converts base units into a human readable amount.
    pub fn format_units(&self, amount: U256) -> Result<String, Error> {
        format_units(amount, self.decimals).map_err(|error| {
            log::error!("Formatting {} amount {}: {}", self.symbol, amount, error);
            error.into()
        })
    }
}

/// A single contract deployed at a fixed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub address: Address,
    pub abi: &'static Interface,
}

/// A contract interface whose instances are deployed at runtime, so it has no
/// address of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub abi: &'static Interface,
}

impl Template {
    /// Pairs the template with the address of one of its instances, e.g. a vault
    /// reported by the factory's `VaultCreated` event.
    pub fn at(&self, address: Address) -> Deployment {
        log::debug!("Binding {} instance at {}", self.abi.name, address);
        Deployment {
            address,
            abi: self.abi,
        }
    }
}
