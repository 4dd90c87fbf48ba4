//! Contracts deployed on the Status Network Testnet.

use alloy::primitives::address;

use super::{Deployment, Template, Token};
use crate::interface::{
    KARMA_NFT_INTERFACE, STAKING_MANAGER_INTERFACE, TOKEN_INTERFACE, VAULT_FACTORY_INTERFACE,
    VAULT_INTERFACE,
};

/// Status Test Token, the asset users stake.
pub static SNT_TOKEN: Token = Token {
    address: address!("0x1C3Ac2a186c6149Ae7Cb4D716eBbD0766E4f898a"),
    name: "Status Test Token",
    symbol: "STT",
    decimals: 18,
    abi: &TOKEN_INTERFACE,
};

pub static STAKING_MANAGER: Deployment = Deployment {
    address: address!("0x2C09141e66970A71862beAcCbDb816ec01D6B676"),
    abi: &STAKING_MANAGER_INTERFACE,
};

pub static VAULT_FACTORY: Deployment = Deployment {
    address: address!("0xA6300Bd8aF26530D399a1b24B703EEf2c48a71Be"),
    abi: &VAULT_FACTORY_INTERFACE,
};

/// Karma is a plain ERC-20, so it shares the STT interface.
pub static KARMA: Token = Token {
    address: address!("0x486Ac0F5Eb7079075dE26739E1192D41F278a8db"),
    name: "Karma",
    symbol: "KARMA",
    decimals: 18,
    abi: &TOKEN_INTERFACE,
};

pub static KARMA_NFT: Deployment = Deployment {
    address: address!("0xdE5592e1001f52380f9EDE01aa6725F469A8e46F"),
    abi: &KARMA_NFT_INTERFACE,
};

/// Stake vaults are created per user by [`VAULT_FACTORY`]; use [`Template::at`]
/// with the vault address.
pub static VAULT: Template = Template {
    abi: &VAULT_INTERFACE,
};
