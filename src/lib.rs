//! ## Karma contracts
//!
//! Addresses, token metadata and ABIs of the staking and karma contracts deployed on the
//! Status Network Testnet. Every entry is an immutable static; import the one you need by name:
//!
//! ```rust
//! use karma_contracts::{interface::IToken, SNT_TOKEN};
//!
//! assert_eq!(SNT_TOKEN.symbol, "STT");
//! assert!(SNT_TOKEN.abi.has_function("balanceOf"));
//! // With a provider: IToken::new(SNT_TOKEN.address, provider)
//! ```
pub mod chains;
pub mod error;
pub mod interface;
pub mod wasm;

pub use chains::{
    contracts::{KARMA, KARMA_NFT, SNT_TOKEN, STAKING_MANAGER, VAULT, VAULT_FACTORY},
    Chain, Deployment, Template, Token, STATUS_TESTNET,
};
pub use error::Error;
pub use interface::Interface;
