//! RLP encoding for deposit transactions (type 0x7E).
//!
//! Format: `0x7E || rlp([source_hash, from, to, mint, value, gas_limit, is_system_tx, payload])`

use super::DepositTransaction;

use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_rlp::{BufMut, Encodable, Header};

/// EIP-2718 transaction type of deposits.
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;

impl DepositTransaction {
    /// Encodes the transaction into the provided buffer, type byte included.
    pub fn encode_to(&self, out: &mut dyn BufMut) {
        out.put_u8(DEPOSIT_TX_TYPE);
        self.rlp_header().encode(out);
        self.source_hash.encode(out);
        address_bytes(&self.from).encode(out);
        address_bytes(&self.to).encode(out);
        self.mint.encode(out);
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.system_flag().encode(out);
        self.payload.encode(out);
    }

    /// Encodes the transaction into its canonical wire representation.
    pub fn encode(&self) -> Bytes {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_to(&mut buf);
        buf.into()
    }

    /// Returns the length of the wire representation.
    pub fn encoded_len(&self) -> usize {
        1 + self.rlp_header().length_with_payload()
    }

    /// Returns the transaction hash: the keccak256 of the wire representation.
    pub fn hash(&self) -> B256 {
        let hash = keccak256(self.encode());
        tracing::trace!(target: "l2::codec::deposit", source_hash = ?self.source_hash, ?hash, "hashed deposit");
        hash
    }

    fn rlp_header(&self) -> Header {
        let payload_length = self.source_hash.length() +
            address_bytes(&self.from).length() +
            address_bytes(&self.to).length() +
            self.mint.length() +
            self.value.length() +
            self.gas_limit.length() +
            self.system_flag().length() +
            self.payload.length();
        Header { list: true, payload_length }
    }

    /// The system flag is always a single byte, `0x00` included.
    const fn system_flag(&self) -> [u8; 1] {
        [self.is_system_tx as u8]
    }
}

/// An absent address encodes as the empty byte string.
fn address_bytes(address: &Option<Address>) -> &[u8] {
    address.as_ref().map_or(&[][..], |address| address.as_slice())
}
