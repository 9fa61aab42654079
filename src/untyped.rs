//! The type-erased view of a struct.
//!
//! Reflection-driven marshallers do not know at compile time that struct
//! keys are strings; they hold keys and values as dynamic [`Value`]s and talk
//! to every associative collection through one interface. [`UntypedMap`] is
//! that interface. It checks that each supplied key is a `Value::String`,
//! failing with a `KeyMustBeAString` error otherwise, and then delegates to
//! the typed operations on [`Map`].
//!
//! ```
//! use rpc_struct::untyped::UntypedMap;
//! use rpc_struct::{Map, Value};
//!
//! let mut map: Map = Map::new();
//! let facet: &mut dyn UntypedMap = &mut map;
//!
//! facet.add(Value::from("a"), Value::from(1)).unwrap();
//! assert!(facet.add(Value::from(7), Value::Nil).unwrap_err().is_type());
//! assert_eq!(facet.count(), 1);
//! ```

use crate::error::{Error, Result};
use crate::map::{Enumerator, Map};
use crate::sync::SyncRoot;
use crate::value::Value;
use std::fmt::{self, Debug};
use std::iter::FusedIterator;

/// Associative collection operations with dynamically typed keys and values.
///
/// The trait is object safe; callers typically hold a `&mut dyn UntypedMap`.
pub trait UntypedMap {
    /// Adds a member at the end. Fails if the key is not a string or is
    /// already present.
    fn add(&mut self, key: Value, value: Value) -> Result<()>;

    /// Returns the value of a member. Fails if the key is not a string or is
    /// absent.
    fn get(&self, key: &Value) -> Result<&Value>;

    /// Updates a member in place, or appends it if absent. Returns the
    /// previous value. Fails if the key is not a string.
    fn set(&mut self, key: Value, value: Value) -> Result<Option<Value>>;

    /// Removes a member, keeping the order of the rest. An absent key is not
    /// an error. Fails if the key is not a string.
    fn remove(&mut self, key: &Value) -> Result<Option<Value>>;

    /// Returns true if a member has this key. Fails if the key is not a
    /// string.
    fn contains(&self, key: &Value) -> Result<bool>;

    /// Same as [`contains`](UntypedMap::contains).
    fn contains_key(&self, key: &Value) -> Result<bool> {
        self.contains(key)
    }

    /// Returns true if any member's value equals `value`.
    fn contains_value(&self, value: &Value) -> bool;

    /// Removes every member.
    fn clear(&mut self);

    /// Number of members.
    fn count(&self) -> usize;

    /// Snapshot of the keys, in order, as `Value::String`s.
    fn keys(&self) -> Vec<Value>;

    /// Snapshot of the values, in order.
    fn values(&self) -> Vec<Value>;

    /// A cursor over the members in order.
    fn enumerate(&self) -> UntypedEnumerator<'_>;

    /// Copies `(key, value)` pairs, in order, into `dest` starting at
    /// `offset`. Fails if the destination is too small.
    fn copy_to(&self, dest: &mut [(Value, Value)], offset: usize) -> Result<()>;

    /// An independent copy of the collection.
    fn clone_untyped(&self) -> Box<dyn UntypedMap>;

    /// Always false: members can be added and removed.
    fn is_fixed_size(&self) -> bool {
        false
    }

    /// Always false: members can be modified.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Always false: the collection does no locking of its own.
    fn is_synchronized(&self) -> bool {
        false
    }

    /// The lock token external callers may use to coordinate access.
    fn sync_root(&self) -> SyncRoot;
}

fn string_key(key: &Value) -> Result<&str> {
    match key {
        Value::String(key) => Ok(key),
        other => Err(not_a_string(other)),
    }
}

fn into_string_key(key: Value) -> Result<String> {
    match key {
        Value::String(key) => Ok(key),
        other => Err(not_a_string(&other)),
    }
}

#[cold]
fn not_a_string(key: &Value) -> Error {
    log::trace!("rejecting struct key of type {}", key.type_name());
    Error::key_must_be_a_string(key.type_name())
}

impl UntypedMap for Map<Value> {
    fn add(&mut self, key: Value, value: Value) -> Result<()> {
        Map::add(self, into_string_key(key)?, value)
    }

    fn get(&self, key: &Value) -> Result<&Value> {
        Map::try_get(self, string_key(key)?)
    }

    fn set(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
        Ok(Map::insert(self, into_string_key(key)?, value))
    }

    fn remove(&mut self, key: &Value) -> Result<Option<Value>> {
        let key = string_key(key)?;
        Ok(Map::remove(self, key))
    }

    fn contains(&self, key: &Value) -> Result<bool> {
        let key = string_key(key)?;
        Ok(Map::contains_key(self, key))
    }

    fn contains_value(&self, value: &Value) -> bool {
        Map::contains_value(self, value)
    }

    fn clear(&mut self) {
        Map::clear(self);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn keys(&self) -> Vec<Value> {
        Map::keys(self).map(|key| Value::String(key.clone())).collect()
    }

    fn values(&self) -> Vec<Value> {
        Map::values(self).cloned().collect()
    }

    fn enumerate(&self) -> UntypedEnumerator<'_> {
        UntypedEnumerator {
            inner: Map::enumerate(self),
        }
    }

    fn copy_to(&self, dest: &mut [(Value, Value)], offset: usize) -> Result<()> {
        let window = self.copy_window(dest.len(), offset)?;
        for (slot, (key, value)) in dest[window].iter_mut().zip(self) {
            *slot = (Value::String(key.clone()), value.clone());
        }
        Ok(())
    }

    fn clone_untyped(&self) -> Box<dyn UntypedMap> {
        Box::new(self.clone())
    }

    fn sync_root(&self) -> SyncRoot {
        Map::sync_root(self)
    }
}

/// A cursor over a struct's members that hands out keys as [`Value`]s.
///
/// Reading before the first [`move_next`](UntypedEnumerator::move_next) or
/// after the last member fails with an invalid-state error.
pub struct UntypedEnumerator<'a> {
    inner: Enumerator<'a, Value>,
}

impl<'a> UntypedEnumerator<'a> {
    /// Advances to the next member. Returns false once past the last one.
    pub fn move_next(&mut self) -> bool {
        self.inner.move_next()
    }

    /// The `(key, value)` pair under the cursor.
    pub fn entry(&self) -> Result<(Value, &'a Value)> {
        let (key, value) = self.inner.current()?;
        Ok((Value::from(key), value))
    }

    /// The key under the cursor.
    pub fn key(&self) -> Result<Value> {
        self.inner.key().map(Value::from)
    }

    /// The value under the cursor.
    pub fn value(&self) -> Result<&'a Value> {
        self.inner.value()
    }

    /// Moves the cursor back before the first member.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<'a> Iterator for UntypedEnumerator<'a> {
    type Item = (Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (Value::from(key), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for UntypedEnumerator<'a> {}

impl<'a> FusedIterator for UntypedEnumerator<'a> {}

impl<'a> Debug for UntypedEnumerator<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("UntypedEnumerator").field(&self.inner).finish()
    }
}
