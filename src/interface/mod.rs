use std::{fmt, sync::OnceLock};

use alloy::{json_abi::JsonAbi, sol};
use serde::{Serialize, Serializer};

use crate::error::Error;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    IToken,
    "src/abi/IToken.json"
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    IStakingManager,
    "src/abi/IStakingManager.json"
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    IVaultFactory,
    "src/abi/IVaultFactory.json"
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    IStakeVault,
    "src/abi/IStakeVault.json"
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    IKarmaNft,
    "src/abi/IKarmaNft.json"
);

/// ERC-20 surface shared by the STT and Karma tokens.
pub static TOKEN_INTERFACE: Interface = Interface::new("IToken", IToken::abi::contract);
pub static STAKING_MANAGER_INTERFACE: Interface =
    Interface::new("IStakingManager", IStakingManager::abi::contract);
pub static VAULT_FACTORY_INTERFACE: Interface =
    Interface::new("IVaultFactory", IVaultFactory::abi::contract);
pub static VAULT_INTERFACE: Interface = Interface::new("IStakeVault", IStakeVault::abi::contract);
pub static KARMA_NFT_INTERFACE: Interface = Interface::new("IKarmaNft", IKarmaNft::abi::contract);

/// ## Interface
///
/// Describes the callable surface of a contract: its functions and the events it emits.
///
/// The typed bindings (`IToken`, `IStakeVault`, ...) are what you use to actually call a
/// contract, e.g. `IToken::new(SNT_TOKEN.address, provider)`. An `Interface` is the dynamic
/// counterpart, for code that needs the ABI as data (encoders, explorers, a JS front end).
///
/// Descriptors are referenced, never copied into entries, so every entry that speaks the
/// same interface points at the same value. The ABI is built on first use and kept.
pub struct Interface {
    /// Name of the generated binding
    pub name: &'static str,
    build: fn() -> JsonAbi,
    abi: OnceLock<JsonAbi>,
}

impl Interface {
    pub const fn new(name: &'static str, build: fn() -> JsonAbi) -> Self {
        Interface {
            name,
            build,
            abi: OnceLock::new(),
        }
    }

    /// The dynamic ABI for this interface.
    pub fn abi(&self) -> &JsonAbi {
        self.abi.get_or_init(self.build)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.abi().functions.contains_key(name)
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.abi().events.contains_key(name)
    }

    /// Renders the interface as a standard ABI JSON array.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self.abi())?)
    }
}

impl fmt::Debug for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface").field("name", &self.name).finish()
    }
}

// Names are unique per generated binding.
impl PartialEq for Interface {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Interface {}

impl Serialize for Interface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.abi().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::interface::{
        IToken, Interface, KARMA_NFT_INTERFACE, STAKING_MANAGER_INTERFACE, TOKEN_INTERFACE,
        VAULT_FACTORY_INTERFACE, VAULT_INTERFACE,
    };

    #[test]
    fn token_interface_is_erc20() {
        for function in [
            "name",
            "symbol",
            "decimals",
            "totalSupply",
            "balanceOf",
            "allowance",
            "approve",
            "transfer",
            "transferFrom",
        ] {
            assert!(TOKEN_INTERFACE.has_function(function), "missing {}", function);
        }
        assert!(TOKEN_INTERFACE.has_event("Transfer"));
        assert!(TOKEN_INTERFACE.has_event("Approval"));
    }

    #[test]
    fn staking_surfaces() {
        assert!(STAKING_MANAGER_INTERFACE.has_function("registerVault"));
        assert!(STAKING_MANAGER_INTERFACE.has_function("getAccountVaults"));
        assert!(STAKING_MANAGER_INTERFACE.has_event("VaultRegistered"));

        assert!(VAULT_FACTORY_INTERFACE.has_function("createVault"));
        assert!(VAULT_FACTORY_INTERFACE.has_event("VaultCreated"));

        for function in ["stake", "lock", "unstake", "emergencyExit", "amountStaked"] {
            assert!(VAULT_INTERFACE.has_function(function), "missing {}", function);
        }
        assert!(!VAULT_INTERFACE.has_function("createVault"));
    }

    #[test]
    fn karma_nft_is_read_only() {
        assert!(KARMA_NFT_INTERFACE.has_function("tokenURI"));
        assert!(KARMA_NFT_INTERFACE.has_function("ownerOf"));
        assert!(!KARMA_NFT_INTERFACE.has_function("transfer"));
        assert!(KARMA_NFT_INTERFACE.has_event("Transfer"));
    }

    #[test]
    fn renders_abi_json() {
        let json = VAULT_FACTORY_INTERFACE.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert!(items
            .iter()
            .any(|item| item["name"] == "createVault" && item["type"] == "function"));
    }

    #[test]
    fn equality_follows_binding_name() {
        let rebuilt = Interface::new("IToken", IToken::abi::contract);
        assert_eq!(TOKEN_INTERFACE, rebuilt);
        assert_ne!(TOKEN_INTERFACE, KARMA_NFT_INTERFACE);
        assert!(format!("{:?}", VAULT_INTERFACE).contains(VAULT_INTERFACE.name));
    }

    #[test]
    fn abi_is_built_once() {
        assert!(std::ptr::eq(TOKEN_INTERFACE.abi(), TOKEN_INTERFACE.abi()));
        assert!(TOKEN_INTERFACE.has_function("transfer"));
        assert!(std::ptr::eq(TOKEN_INTERFACE.abi(), crate::SNT_TOKEN.abi.abi()));
    }
}
