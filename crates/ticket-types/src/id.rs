use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Caller-supplied identifier of a ticket.
///
/// Zero is reserved as the null id: it marks "not found" in replies and is
/// never a valid stored key.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The null ticket id (zero). Represents "no ticket".
    pub const fn null() -> Self {
        Self(0)
    }

    /// Returns `true` if this is the null ticket id.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Lowercase hex of the two's-complement bit pattern, so `-1` renders as
    /// `ffffffffffffffff`.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }

    /// Parse from either the two's-complement form produced by [`to_hex`]
    /// or a signed form such as `-1a`.
    ///
    /// [`to_hex`]: TicketId::to_hex
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TypeError::InvalidHex(s.to_string()));
        }
        if s.starts_with('-') {
            return i64::from_str_radix(s, 16)
                .map(Self)
                .map_err(|e| TypeError::InvalidHex(format!("{s}: {e}")));
        }
        u64::from_str_radix(s, 16)
            .map(|bits| Self(bits as i64))
            .map_err(|e| TypeError::InvalidHex(format!("{s}: {e}")))
    }
}

impl fmt::Debug for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketId({})", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = TypeError;

    /// Decimal, as carried in `?id=` query strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| TypeError::InvalidId(format!("{s}: {e}")))
    }
}

impl From<i64> for TicketId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TicketId> for i64 {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_zero() {
        assert!(TicketId::null().is_null());
        assert!(TicketId::default().is_null());
        assert!(!TicketId::new(1).is_null());
    }

    #[test]
    fn hex_of_positive_id() {
        assert_eq!(TicketId::new(255).to_hex(), "ff");
        assert_eq!(TicketId::from_hex("ff").unwrap(), TicketId::new(255));
    }

    #[test]
    fn hex_of_negative_id_is_twos_complement() {
        let id = TicketId::new(-1);
        assert_eq!(id.to_hex(), "ffffffffffffffff");
        assert_eq!(TicketId::from_hex(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn signed_hex_is_accepted() {
        assert_eq!(TicketId::from_hex("-1a").unwrap(), TicketId::new(-26));
    }

    #[test]
    fn extreme_ids_survive_hex() {
        for raw in [i64::MIN, i64::MAX, 12345678] {
            let id = TicketId::new(raw);
            assert_eq!(TicketId::from_hex(&id.to_hex()).unwrap(), id);
        }
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(matches!(TicketId::from_hex("xyz"), Err(TypeError::InvalidHex(_))));
        assert!(TicketId::from_hex("").is_err());
        assert!(TicketId::from_hex("1ffffffffffffffff").is_err());
    }

    #[test]
    fn decimal_parse() {
        assert_eq!("42".parse::<TicketId>().unwrap(), TicketId::new(42));
        assert_eq!("-7".parse::<TicketId>().unwrap(), TicketId::new(-7));
        assert!(matches!("abc".parse::<TicketId>(), Err(TypeError::InvalidId(_))));
    }

    #[test]
    fn serde_is_a_bare_integer() {
        let json = serde_json::to_string(&TicketId::new(9)).unwrap();
        assert_eq!(json, "9");
        let parsed: TicketId = serde_json::from_str("-3").unwrap();
        assert_eq!(parsed, TicketId::new(-3));
    }
}
