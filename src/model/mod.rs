//! # Domain Model
//!
//! Plain data types for the four resources and the payloads their actors accept.
//! The [`ActorEntity`](actor_framework::ActorEntity) implementations live next to each
//! actor (`user_actor::entity`, `product_actor::entity`, ...).
//!
//! Identifiers are typed wrappers around the `u32` handed out by the owning actor.
//! Their external form is `<kind>_<n>` (`product_3`); parsing also accepts the bare
//! number.

pub mod customer;
pub mod order;
pub mod product;
pub mod user;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use user::*;

use std::fmt::Display;
use std::str::FromStr;

/// An identifier that is neither `<kind>_<n>` nor a bare number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Malformed {kind} id: {value}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

/// Trims `value`, rejecting it when nothing is left.
pub(crate) fn required(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(value.to_string())
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.trim();
                let digits = raw
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(raw);
                digits.parse::<u32>().map(Self).map_err(|_| ParseIdError {
                    kind: $prefix,
                    value: s.to_string(),
                })
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Users (sellers).
    UserId,
    "user"
);
entity_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "product"
);
entity_id!(
    /// Type-safe identifier for Clients.
    CustomerId,
    "client"
);
entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_their_kind() {
        assert_eq!(ProductId(3).to_string(), "product_3");
        assert_eq!(CustomerId(1).to_string(), "client_1");
        assert_eq!(OrderId(12).to_string(), "order_12");
    }

    #[test]
    fn ids_parse_prefixed_or_bare() {
        assert_eq!("product_3".parse::<ProductId>(), Ok(ProductId(3)));
        assert_eq!(" 7 ".parse::<UserId>(), Ok(UserId(7)));
    }

    #[test]
    fn ids_reject_other_kinds_and_garbage() {
        let err = "order_3".parse::<ProductId>().unwrap_err();
        assert_eq!(err.kind, "product");
        assert!("product_".parse::<ProductId>().is_err());
        assert!("-1".parse::<OrderId>().is_err());
    }
}
