//! JavaScript bindings, so a web front end can import the registry entries it needs.
//!
//! ```javascript
//! import init, { sntToken, vault } from '../web/karma_contracts.js';
//!
//! await init();
//! const stt = sntToken();
//! console.log(stt.symbol, stt.address);
//! ```
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use workflow_rs::core::cfg_if;

use crate::chains::{
    contracts::{KARMA, KARMA_NFT, SNT_TOKEN, STAKING_MANAGER, VAULT, VAULT_FACTORY},
    STATUS_TESTNET,
};

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        #[wasm_bindgen(typescript_custom_section)]
        const TS_ENTRIES: &'static str = r#"
        /** A token contract with display metadata. */
        export type Token = {
            address: string,
            name: string,
            symbol: string,
            decimals: number,
            abi: any[],
        }

        /** A contract deployed at a fixed address. */
        export type Deployment = {
            address: string,
            abi: any[],
        }

        /** A contract interface whose instances are deployed at runtime. */
        export type Template = {
            abi: any[],
        }

        export type Chain = {
            name: string,
            chain_id: number,
            rpc_url: string,
            explorer_url: string,
        }
        "#;
    }
}

fn export<T: Serialize>(entry: &T) -> Result<JsValue, JsValue> {
    to_value(entry).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Status Test Token (`Token`).
#[wasm_bindgen(js_name = sntToken)]
pub fn snt_token() -> Result<JsValue, JsValue> {
    export(&SNT_TOKEN)
}

/// Staking manager (`Deployment`).
#[wasm_bindgen(js_name = stakingManager)]
pub fn staking_manager() -> Result<JsValue, JsValue> {
    export(&STAKING_MANAGER)
}

/// Vault factory (`Deployment`).
#[wasm_bindgen(js_name = vaultFactory)]
pub fn vault_factory() -> Result<JsValue, JsValue> {
    export(&VAULT_FACTORY)
}

/// Karma token (`Token`).
#[wasm_bindgen]
pub fn karma() -> Result<JsValue, JsValue> {
    export(&KARMA)
}

/// Karma NFT (`Deployment`).
#[wasm_bindgen(js_name = karmaNft)]
pub fn karma_nft() -> Result<JsValue, JsValue> {
    export(&KARMA_NFT)
}

/// Stake vault interface (`Template`).
#[wasm_bindgen]
pub fn vault() -> Result<JsValue, JsValue> {
    export(&VAULT)
}

/// Target network (`Chain`).
#[wasm_bindgen(js_name = statusTestnet)]
pub fn status_testnet() -> Result<JsValue, JsValue> {
    export(&STATUS_TESTNET)
}
