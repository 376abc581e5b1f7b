//! Integration tests for transaction-data decoding and pricing.
//!
//! These tests use real Ethereum transaction data to verify correct behavior.

use alloy_consensus::{SignableTransaction, TxEip1559, TxEip2930, TxLegacy};
use alloy_primitives::{Address, Bytes, PrimitiveSignature, B256, U256};
use evolve_tx_eth::{
    tx_type, wei_to_native, TxData, TxDataCodec, TxDataError, TypedTxDecoder,
};
use k256::ecdsa::{signature::hazmat::PrehashSigner, SigningKey};
use rand::rngs::OsRng;

/// Helper to sign a transaction hash and create an alloy signature
fn sign_hash(signing_key: &SigningKey, hash: B256) -> PrimitiveSignature {
    let (sig, recovery_id) = signing_key.sign_prehash(hash.as_ref()).unwrap();
    let r = U256::from_be_slice(&sig.r().to_bytes());
    let s = U256::from_be_slice(&sig.s().to_bytes());
    let v = recovery_id.is_y_odd();
    PrimitiveSignature::new(r, s, v)
}

/// Test vectors from real Ethereum transactions
mod test_vectors {
    /// A real legacy transaction from Ethereum mainnet (20 gwei, 21000 gas)
    pub const LEGACY_TX_RLP: &str = concat!(
        "f86c098504a817c800825208943535353535353535353535353535353535353535880de0",
        "b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590",
        "620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
    );

    /// Expected hash for the legacy transaction (keccak256 of RLP-encoded signed tx)
    pub const LEGACY_TX_HASH: &str =
        "0x33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788";
}

fn signed_eip1559(max_fee: u128, max_priority: u128, gas_limit: u64) -> Vec<u8> {
    let signing_key = SigningKey::random(&mut OsRng);
    let tx = TxEip1559 {
        chain_id: 1,
        nonce: 42,
        gas_limit,
        max_fee_per_gas: max_fee,
        max_priority_fee_per_gas: max_priority,
        to: alloy_primitives::TxKind::Call(Address::repeat_byte(0xAB)),
        value: U256::from(500_000_000_000_000_000u64),
        input: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
        access_list: Default::default(),
    };

    let signature = sign_hash(&signing_key, tx.signature_hash());
    let signed = tx.into_signed(signature);

    let mut encoded = vec![tx_type::EIP1559];
    signed.rlp_encode(&mut encoded);
    encoded
}

// ============================================================================
// Legacy Transaction Tests
// ============================================================================

#[test]
fn test_decode_legacy_transaction() {
    let tx_bytes = hex::decode(test_vectors::LEGACY_TX_RLP).expect("valid hex");

    let tx = TxData::decode(&tx_bytes).expect("should decode");

    assert_eq!(tx.tx_type(), tx_type::LEGACY);
    assert!(!tx.is_dynamic_fee());
    assert_eq!(tx.nonce(), 9);
    assert_eq!(tx.gas_limit(), 21000);
    assert_eq!(tx.gas_price(), Some(20_000_000_000));
    assert_eq!(tx.chain_id(), Some(1));
    assert!(tx.access_list().is_none());

    let expected_hash: B256 = test_vectors::LEGACY_TX_HASH.parse().unwrap();
    assert_eq!(tx.tx_hash(), expected_hash);
}

#[test]
fn test_legacy_fee_ignores_base_fee() {
    let tx_bytes = hex::decode(test_vectors::LEGACY_TX_RLP).expect("valid hex");
    let tx = TxData::decode(&tx_bytes).unwrap();

    // 20 gwei * 21000 gas = 4.2e14 wei = 420 native units
    let expected = U256::from(420_000_000_000_000u64);
    assert_eq!(tx.effective_fee_wei(0), expected);
    assert_eq!(tx.effective_fee_wei(1_000_000_000_000), expected);
    assert_eq!(wei_to_native(expected), U256::from(420));
}

#[test]
fn test_decode_rejects_trailing_bytes() {
    let mut tx_bytes = hex::decode(test_vectors::LEGACY_TX_RLP).expect("valid hex");
    tx_bytes.push(0x00);
    assert_eq!(
        TxData::decode(&tx_bytes).unwrap_err(),
        TxDataError::TrailingBytes(1)
    );
}

#[test]
fn test_decode_from_advances_past_one_transaction() {
    let single = hex::decode(test_vectors::LEGACY_TX_RLP).expect("valid hex");
    let mut stream = single.clone();
    stream.extend_from_slice(&single);

    let mut cursor = stream.as_slice();
    TxData::decode_from(&mut cursor).unwrap();
    assert_eq!(cursor.len(), single.len());
    TxData::decode_from(&mut cursor).unwrap();
    assert!(cursor.is_empty());
}

#[test]
fn test_decode_invalid_rlp_fails() {
    let invalid_bytes = vec![0x01, 0x02, 0x03];
    let result = TxData::decode(&invalid_bytes);
    assert!(matches!(
        result,
        Err(TxDataError::Rlp {
            tx_type: tx_type::EIP2930,
            ..
        })
    ));
}

// ============================================================================
// Typed Transaction Tests
// ============================================================================

#[test]
fn test_sign_and_decode_access_list_transaction() {
    let signing_key = SigningKey::random(&mut OsRng);

    let tx = TxEip2930 {
        chain_id: 1,
        nonce: 3,
        gas_price: 2_000_000_000_000,
        gas_limit: 50_000,
        to: alloy_primitives::TxKind::Call(Address::repeat_byte(0x42)),
        value: U256::ZERO,
        access_list: Default::default(),
        input: Bytes::new(),
    };

    let signature = sign_hash(&signing_key, tx.signature_hash());
    let signed = tx.into_signed(signature);

    let mut encoded = vec![tx_type::EIP2930];
    signed.rlp_encode(&mut encoded);

    let decoded = TxData::decode(&encoded).expect("should decode");
    assert_eq!(decoded.tx_type(), tx_type::EIP2930);
    assert_eq!(decoded.gas_limit(), 50_000);
    assert_eq!(decoded.gas_price(), Some(2_000_000_000_000));
    assert!(decoded.access_list().is_some());

    // 2e12 wei per gas is two native units per gas.
    assert_eq!(
        wei_to_native(decoded.effective_fee_wei(0)),
        U256::from(100_000)
    );
    assert_eq!(decoded.encode(), encoded);
}

#[test]
fn test_sign_and_decode_eip1559_transaction() {
    let encoded = signed_eip1559(30_000_000_000, 1_000_000_000, 100_000);

    let decoded = TxData::decode(&encoded).expect("should decode");

    assert_eq!(decoded.tx_type(), tx_type::EIP1559);
    assert!(decoded.is_dynamic_fee());
    assert_eq!(decoded.nonce(), 42);
    assert_eq!(decoded.gas_limit(), 100_000);
    assert_eq!(decoded.chain_id(), Some(1));
    assert_eq!(decoded.gas_price(), None);
    assert_eq!(decoded.gas_fee_cap(), 30_000_000_000);
    assert_eq!(decoded.gas_tip_cap(), 1_000_000_000);
}

#[test]
fn test_eip1559_effective_price_capped_by_fee_cap() {
    let encoded = signed_eip1559(30_000_000_000, 1_000_000_000, 100_000);
    let decoded = TxData::decode(&encoded).unwrap();

    // base + tip below the cap
    assert_eq!(decoded.effective_gas_price(10_000_000_000), 11_000_000_000);
    // base + tip above the cap
    assert_eq!(decoded.effective_gas_price(40_000_000_000), 30_000_000_000);
    // saturating add never wraps
    assert_eq!(decoded.effective_gas_price(u128::MAX), 30_000_000_000);

    assert_eq!(
        decoded.effective_fee_wei(10_000_000_000),
        U256::from(11_000_000_000u64) * U256::from(100_000u64)
    );
}

#[test]
fn test_tx_hash_matches_keccak_of_typed_bytes() {
    let encoded = signed_eip1559(1_000_000_000_000, 0, 21_000);
    let decoded = TxData::decode(&encoded).unwrap();
    assert_eq!(decoded.tx_hash(), alloy_primitives::keccak256(&encoded));
}

// ============================================================================
// Decoder Filter Tests
// ============================================================================

#[test]
fn test_decoder_rejects_filtered_type() {
    let encoded = signed_eip1559(30_000_000_000, 1_000_000_000, 21_000);

    let mut decoder = TypedTxDecoder::ethereum();
    decoder.deny_type(tx_type::EIP1559);

    assert_eq!(
        decoder.unpack_tx_data(&encoded).unwrap_err(),
        TxDataError::TxTypeNotAllowed(tx_type::EIP1559)
    );
}

#[test]
fn test_decoder_accepts_legacy_by_default() {
    let signing_key = SigningKey::random(&mut OsRng);
    let tx = TxLegacy {
        chain_id: Some(1),
        nonce: 0,
        gas_price: 1,
        gas_limit: 21000,
        to: alloy_primitives::TxKind::Call(Address::ZERO),
        value: U256::ZERO,
        input: Bytes::new(),
    };

    let signature = sign_hash(&signing_key, tx.signature_hash());
    let signed = tx.into_signed(signature);
    let encoded = TxData::Legacy(signed).encode();

    let decoded = TypedTxDecoder::default()
        .unpack_tx_data(&encoded)
        .expect("legacy is allowed");
    assert_eq!(decoded.tx_type(), tx_type::LEGACY);
}
