//! L1 to L2 address aliasing.
//!
//! A contract on L1 that triggers a deposit is seen on L2 under an aliased address, so that it can
//! never be confused with an externally owned account holding the same address on L2.

use alloy_primitives::{address, aliases::U160, Address};

/// The offset added to an L1 address to obtain its L2 alias.
pub const ALIAS_OFFSET: Address = address!("0x1111000000000000000000000000000000001111");

/// Returns the L2 alias of the provided L1 address.
///
/// The address is treated as a 160-bit unsigned integer, the offset is added and the result wraps
/// modulo 2^160.
pub fn alias(address: Address) -> Address {
    let sum = as_u160(address).wrapping_add(as_u160(ALIAS_OFFSET));
    Address::from(sum.to_be_bytes::<20>())
}

/// Returns the L1 address the provided L2 alias was derived from.
pub fn undo_alias(address: Address) -> Address {
    let diff = as_u160(address).wrapping_sub(as_u160(ALIAS_OFFSET));
    Address::from(diff.to_be_bytes::<20>())
}

fn as_u160(address: Address) -> U160 {
    U160::from_be_bytes(address.0 .0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_alias_zero_address_to_offset() {
        let aliased = alias(Address::ZERO);
        assert_eq!(aliased, ALIAS_OFFSET);
        assert_eq!(format!("{aliased:#x}"), "0x1111000000000000000000000000000000001111");
    }

    #[test]
    fn test_should_alias_known_address() {
        let l1 = address!("0x4200000000000000000000000000000000000007");
        assert_eq!(alias(l1), address!("0x5311000000000000000000000000000000001118"));
    }

    #[test]
    fn test_should_wrap_on_overflow() {
        let l1 = address!("0xffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(alias(l1), address!("0x1111000000000000000000000000000000001110"));
        assert_eq!(undo_alias(alias(l1)), l1);
    }

    #[test]
    fn test_alias_is_not_idempotent() {
        let l1 = address!("0x0000000000000000000000000000000000000001");
        let once = alias(l1);
        let twice = alias(once);
        assert_ne!(once, twice);
        assert_eq!(twice, address!("0x2222000000000000000000000000000000002223"));
    }

    #[test]
    fn test_should_undo_alias() {
        let l1 = address!("0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef");
        assert_eq!(undo_alias(alias(l1)), l1);
        assert_eq!(undo_alias(ALIAS_OFFSET), Address::ZERO);
    }
}
