//! `Serialize` support for [`ConstMap`], behind the `serde` feature.
//!
//! A map serializes as a serde map of its entries, in insertion order.
//! There is no `Deserialize` impl: construction takes exactly `N`
//! statically-known entries, and the fallible runtime boundary already
//! exists as `TryFrom<&[(K, V)]>`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ConstMap;

impl<K, V, const N: usize> Serialize for ConstMap<K, V, N>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(N))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
