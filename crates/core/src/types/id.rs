//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`uuid::Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_uuid()`
/// - `generate()` for minting a fresh random (v4) ID
/// - `From<Uuid>` and `Into<Uuid>` implementations
///
/// # Example
///
/// ```rust
/// # use jade_shopping_core::define_id;
/// define_id!(AdminUserId);
/// define_id!(CategoryId);
///
/// let admin_id = AdminUserId::generate();
/// let category_id = CategoryId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: AdminUserId = category_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Create an ID from an existing UUID.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Mint a fresh random ID.
            ///
            /// Random UUIDs replace the timestamp-derived string IDs the
            /// legacy admin fabricated, which were not collision-safe under
            /// rapid successive creates.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(AdminUserId);
define_id!(RoleId);
define_id!(CategoryId);
define_id!(ProductId);
define_id!(InventoryItemId);
define_id!(StockAdjustmentId);
define_id!(ShipmentId);
define_id!(OrderId);
define_id!(PaymentChannelId);
define_id!(ContentBlockId);
define_id!(AuditLogId);

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn generated_ids_are_unique() {
        let a = AdminUserId::generate();
        let b = AdminUserId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = InventoryItemId::new(raw);
        assert_eq!(id.as_uuid(), raw);
        assert_eq!(Uuid::from(id), raw);
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = OrderId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
