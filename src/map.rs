//! A map of String to rpc_struct::Value that remembers insertion order.
//!
//! The map is backed by an [`IndexMap`], which keeps the hashed lookup index
//! and the ordered entry storage in a single structure. Every view of the map
//! (its length, membership tests, iteration order) is derived from that one
//! store, so they cannot drift apart.
//!
//! [`IndexMap`]: https://docs.rs/indexmap/*/indexmap/map/struct.IndexMap.html

use crate::error::{Error, ErrorCode, Result};
use crate::sync::SyncRoot;
use crate::value::Value;
use indexmap::IndexMap;
use serde_core::{de, ser};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops;
use std::sync::OnceLock;

/// Represents an XML-RPC struct: named members in the order they were first
/// added.
///
/// Updating the value of an existing member keeps its position. Removing a
/// member and adding it again moves it to the end.
///
/// The map performs no internal locking. Callers that share a map between
/// threads must coordinate access themselves, for example with the lock from
/// [`Map::sync_root`].
pub struct Map<V = Value> {
    map: IndexMap<String, V>,
    sync_root: OnceLock<SyncRoot>,
}

impl<V> Map<V> {
    /// Makes a new empty Map.
    #[inline]
    pub fn new() -> Self {
        Map {
            map: IndexMap::new(),
            sync_root: OnceLock::new(),
        }
    }

    /// Makes a new empty Map with the given initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            map: IndexMap::with_capacity(capacity),
            sync_root: OnceLock::new(),
        }
    }

    /// Clears the map, removing all values.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    /// Returns a reference to the value corresponding to the key, or a
    /// `KeyNotFound` error if the map has no such member.
    ///
    /// ```
    /// let mut map = rpc_struct::Map::new();
    /// map.insert("faultCode".to_owned(), rpc_struct::Value::Int(4));
    ///
    /// assert_eq!(*map.try_get("faultCode").unwrap(), 4);
    /// assert!(map.try_get("faultString").unwrap_err().is_not_found());
    /// ```
    pub fn try_get(&self, key: &str) -> Result<&V> {
        match self.map.get(key) {
            Some(value) => Ok(value),
            None => Err(Error::key_not_found(key)),
        }
    }

    /// Returns true if the map contains a value for the specified key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns true if any member's value is equal to `value`.
    ///
    /// The comparison uses the stored value type's own `PartialEq`, so a
    /// [`Value`] map can be queried with strings, numbers or other values
    /// alike.
    ///
    /// ```
    /// let mut map = rpc_struct::Map::new();
    /// map.insert("x".to_owned(), rpc_struct::Value::from("str"));
    ///
    /// assert!(map.contains_value("str"));
    /// assert!(!map.contains_value(&42));
    /// ```
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        self.map.values().any(|v| v == value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    /// Returns the key-value pair matching the given key.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&String, &V)>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_key_value(key)
    }

    /// Returns the member at the given position in insertion order.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        self.map
            .get_index(index)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the position of the key in insertion order.
    #[inline]
    pub fn get_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_index_of(key)
    }

    /// Adds a new member at the end of the map.
    ///
    /// Fails with a `DuplicateKey` error, leaving the map untouched, if the
    /// key is already present. This is the operation a decoder performs for
    /// each member it reads off the wire.
    ///
    /// ```
    /// let mut map: rpc_struct::Map<i32> = rpc_struct::Map::new();
    /// map.add("a".to_owned(), 1).unwrap();
    ///
    /// let err = map.add("a".to_owned(), 2).unwrap_err();
    /// assert!(err.is_duplicate_key());
    /// assert_eq!(map["a"], 1);
    /// ```
    pub fn add(&mut self, k: String, v: V) -> Result<()> {
        match self.map.entry(k) {
            indexmap::map::Entry::Occupied(occupied) => {
                log::trace!("rejecting duplicate struct member `{}`", occupied.key());
                Err(Error::duplicate_key(occupied.key()))
            }
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(v);
                Ok(())
            }
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, the pair is appended at the
    /// end and `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place,
    /// the key keeps its position, and the old value is returned.
    #[inline]
    pub fn insert(&mut self, k: String, v: V) -> Option<V> {
        self.map.insert(k, v)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// The remaining members keep their relative order. Removing an absent
    /// key does nothing.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.shift_remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// The remaining members keep their relative order.
    #[inline]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(String, V)>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.shift_remove_entry(key)
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Gets an iterator over the entries of the map.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            iter: self.map.iter(),
        }
    }

    /// Gets a mutable iterator over the entries of the map.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            iter: self.map.iter_mut(),
        }
    }

    /// Gets an iterator over the keys of the map.
    #[inline]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            iter: self.map.keys(),
        }
    }

    /// Gets an iterator over the values of the map.
    #[inline]
    pub fn values(&self) -> Values<'_, V> {
        Values {
            iter: self.map.values(),
        }
    }

    /// Gets an iterator over mutable values of the map.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            iter: self.map.values_mut(),
        }
    }

    /// Gets an iterator over the values of the map.
    #[inline]
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues {
            iter: self.map.into_values(),
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` such that `f(&k, &mut v)`
    /// returns `false`. The kept members stay in their relative order.
    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String, &mut V) -> bool,
    {
        self.map.retain(f);
    }

    /// Returns a cursor over the members in insertion order.
    ///
    /// The cursor starts before the first member; call
    /// [`move_next`](Enumerator::move_next) before reading it. Each call
    /// returns a fresh, independent cursor.
    #[inline]
    pub fn enumerate(&self) -> Enumerator<'_, V> {
        Enumerator {
            entries: &self.map,
            cursor: Cursor::BeforeFirst,
        }
    }

    /// Returns the lock token callers may hold around a sequence of
    /// operations on this map. The map itself never takes the lock.
    pub fn sync_root(&self) -> SyncRoot {
        self.sync_root.get_or_init(SyncRoot::new).clone()
    }

    /// Copies the members, in order, into `dest` starting at `offset`.
    ///
    /// Fails with an `InsufficientCapacity` error, leaving `dest` untouched,
    /// if fewer than `self.len()` slots follow `offset`.
    ///
    /// ```
    /// let mut map: rpc_struct::Map<i32> = rpc_struct::Map::new();
    /// map.insert("a".to_owned(), 1);
    /// map.insert("b".to_owned(), 2);
    ///
    /// let mut dest = vec![(String::new(), 0); 3];
    /// map.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest[1], ("a".to_owned(), 1));
    /// assert_eq!(dest[2], ("b".to_owned(), 2));
    ///
    /// assert!(map.copy_to(&mut dest, 2).unwrap_err().is_capacity());
    /// ```
    pub fn copy_to(&self, dest: &mut [(String, V)], offset: usize) -> Result<()>
    where
        V: Clone,
    {
        let window = self.copy_window(dest.len(), offset)?;
        for (slot, (key, value)) in dest[window].iter_mut().zip(&self.map) {
            slot.0.clone_from(key);
            slot.1 = value.clone();
        }
        Ok(())
    }

    /// The slots of a destination of `dest_len` slots that receive the
    /// members when copying starts at `offset`.
    pub(crate) fn copy_window(
        &self,
        dest_len: usize,
        offset: usize,
    ) -> Result<ops::Range<usize>> {
        match offset.checked_add(self.len()) {
            Some(end) if end <= dest_len => Ok(offset..end),
            Some(end) => Err(Error::insufficient_capacity(end, dest_len)),
            None => Err(Error::insufficient_capacity(usize::MAX, dest_len)),
        }
    }

    /// Returns the members as an ordered list of pairs, for handing to an
    /// encoder or storing away. [`Map::import`] restores an identical map.
    pub fn export(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Rebuilds a map from an ordered list of pairs, adding each in turn.
    ///
    /// Fails with a `DuplicateKey` error if a key repeats.
    ///
    /// ```
    /// use rpc_struct::Map;
    ///
    /// let map = Map::import(vec![("b".to_owned(), 2), ("a".to_owned(), 1)]).unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
    /// assert_eq!(Map::import(map.export()).unwrap(), map);
    /// ```
    pub fn import<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        let entries = entries.into_iter();
        let mut map = Map::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            map.add(key, value)?;
        }
        log::debug!("imported struct with {} members", map.len());
        Ok(map)
    }
}

impl<V> Default for Map<V> {
    #[inline]
    fn default() -> Self {
        Map::new()
    }
}

/// Cloning copies every member in order. The clone is fully independent of
/// the original and carries its own synchronization root.
impl<V> Clone for Map<V>
where
    V: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Map {
            map: self.map.clone(),
            sync_root: OnceLock::new(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.map.clone_from(&source.map);
    }
}

/// Two maps are equal when they hold equal members in the same order, which
/// is to say when they would encode identically.
impl<V> PartialEq for Map<V>
where
    V: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.map.len() == other.map.len() && self.map.iter().eq(other.map.iter())
    }
}

impl<V> Eq for Map<V> where V: Eq {}

/// Access an element of this map. Panics if the given key is not present in the
/// map.
///
/// ```
/// # use rpc_struct::Value;
/// #
/// # let val = &Value::String("".to_owned());
/// # let _ =
/// match val {
///     Value::String(s) => Some(s.as_str()),
///     Value::Array(arr) => arr[0].as_str(),
///     Value::Struct(map) => map["methodName"].as_str(),
///     _ => None,
/// }
/// # ;
/// ```
impl<V, Q> ops::Index<&Q> for Map<V>
where
    String: Borrow<Q>,
    Q: ?Sized + Hash + Eq,
{
    type Output = V;

    fn index(&self, index: &Q) -> &V {
        self.map.get(index).expect("no entry found for key")
    }
}

/// Mutably access an element of this map. Panics if the given key is not
/// present in the map.
///
/// ```
/// # let mut map: rpc_struct::Map = rpc_struct::Map::new();
/// # map.insert("key".to_owned(), rpc_struct::Value::Nil);
/// #
/// map["key"] = rpc_struct::Value::from("value");
/// ```
impl<V, Q> ops::IndexMut<&Q> for Map<V>
where
    String: Borrow<Q>,
    Q: ?Sized + Hash + Eq,
{
    fn index_mut(&mut self, index: &Q) -> &mut V {
        self.map.get_mut(index).expect("no entry found for key")
    }
}

impl<V> Debug for Map<V>
where
    V: Debug,
{
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_map().entries(self.map.iter()).finish()
    }
}

impl<V> ser::Serialize for Map<V>
where
    V: ser::Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde_core::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Members are added in the order they are read. A member name that appears
/// twice is rejected rather than silently overwriting the first occurrence.
impl<'de, V> de::Deserialize<'de> for Map<V>
where
    V: de::Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor<V>(PhantomData<V>);

        impl<'de, V> de::Visitor<'de> for Visitor<V>
        where
            V: de::Deserialize<'de>,
        {
            type Value = Map<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a struct")
            }

            #[inline]
            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Map::new())
            }

            #[inline]
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::with_capacity(map.size_hint().unwrap_or(0).min(4096));

                while let Some((key, value)) = map.next_entry()? {
                    values.add(key, value).map_err(de::Error::custom)?;
                }

                Ok(values)
            }
        }

        deserializer.deserialize_map(Visitor(PhantomData))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map<V>
where
    K: Into<String>,
{
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Map<V>
where
    K: Into<String>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for Map<V>
where
    K: Into<String>,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (K, V)>,
    {
        self.map
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
    }
}

macro_rules! delegate_iterator {
    (($name:ident $($generics:tt)*) => $item:ty) => {
        impl $($generics)* Iterator for $name $($generics)* {
            type Item = $item;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next()
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl $($generics)* DoubleEndedIterator for $name $($generics)* {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back()
            }
        }

        impl $($generics)* ExactSizeIterator for $name $($generics)* {
            #[inline]
            fn len(&self) -> usize {
                self.iter.len()
            }
        }

        impl $($generics)* FusedIterator for $name $($generics)* {}
    }
}

//////////////////////////////////////////////////////////////////////////////

/// A cursor over a map's members in insertion order.
///
/// This is the explicit, fallible counterpart of [`Iter`]: it starts before
/// the first member and reports reads outside the members as errors instead
/// of returning `None`. It also implements [`Iterator`].
///
/// ```
/// let map: rpc_struct::Map<i32> = [("a", 1), ("b", 2)].into();
///
/// let mut cursor = map.enumerate();
/// assert!(cursor.current().unwrap_err().is_invalid_state());
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current().unwrap(), ("a", &1));
/// assert!(cursor.move_next());
/// assert_eq!(cursor.key().unwrap(), "b");
/// assert!(!cursor.move_next());
/// assert!(cursor.value().unwrap_err().is_invalid_state());
/// ```
pub struct Enumerator<'a, V> {
    entries: &'a IndexMap<String, V>,
    cursor: Cursor,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Cursor {
    BeforeFirst,
    At(usize),
    AfterLast,
}

impl<'a, V> Enumerator<'a, V> {
    /// Advances to the next member. Returns false once every member has been
    /// visited; the cursor then stays past the end.
    pub fn move_next(&mut self) -> bool {
        let next = match self.cursor {
            Cursor::BeforeFirst => 0,
            Cursor::At(index) => index + 1,
            Cursor::AfterLast => return false,
        };
        if next < self.entries.len() {
            self.cursor = Cursor::At(next);
            true
        } else {
            self.cursor = Cursor::AfterLast;
            false
        }
    }

    /// Returns the member under the cursor.
    pub fn current(&self) -> Result<(&'a str, &'a V)> {
        match self.cursor {
            Cursor::BeforeFirst => Err(Error::new(ErrorCode::EnumerationNotStarted)),
            Cursor::AfterLast => Err(Error::new(ErrorCode::EnumerationFinished)),
            Cursor::At(index) => match self.entries.get_index(index) {
                Some((key, value)) => Ok((key.as_str(), value)),
                None => Err(Error::new(ErrorCode::EnumerationFinished)),
            },
        }
    }

    /// Returns the key of the member under the cursor.
    pub fn key(&self) -> Result<&'a str> {
        self.current().map(|(key, _)| key)
    }

    /// Returns the value of the member under the cursor.
    pub fn value(&self) -> Result<&'a V> {
        self.current().map(|(_, value)| value)
    }

    /// Moves the cursor back before the first member.
    pub fn reset(&mut self) {
        self.cursor = Cursor::BeforeFirst;
    }

    fn remaining(&self) -> usize {
        match self.cursor {
            Cursor::BeforeFirst => self.entries.len(),
            Cursor::At(index) => self.entries.len().saturating_sub(index + 1),
            Cursor::AfterLast => 0,
        }
    }
}

impl<'a, V> Iterator for Enumerator<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, V> ExactSizeIterator for Enumerator<'a, V> {}

impl<'a, V> FusedIterator for Enumerator<'a, V> {}

impl<'a, V> Clone for Enumerator<'a, V> {
    fn clone(&self) -> Self {
        Enumerator {
            entries: self.entries,
            cursor: self.cursor,
        }
    }
}

impl<'a, V> Debug for Enumerator<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Enumerator")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a, V> IntoIterator for &'a Map<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = Iter<'a, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter {
            iter: self.map.iter(),
        }
    }
}

/// An iterator over a rpc_struct::Map's entries.
pub struct Iter<'a, V> {
    iter: indexmap::map::Iter<'a, String, V>,
}

delegate_iterator!((Iter<'a, V>) => (&'a String, &'a V));

//////////////////////////////////////////////////////////////////////////////

impl<'a, V> IntoIterator for &'a mut Map<V> {
    type Item = (&'a String, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            iter: self.map.iter_mut(),
        }
    }
}

/// A mutable iterator over a rpc_struct::Map's entries.
pub struct IterMut<'a, V> {
    iter: indexmap::map::IterMut<'a, String, V>,
}

delegate_iterator!((IterMut<'a, V>) => (&'a String, &'a mut V));

//////////////////////////////////////////////////////////////////////////////

impl<V> IntoIterator for Map<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

/// An owning iterator over a rpc_struct::Map's entries.
pub struct IntoIter<V> {
    iter: indexmap::map::IntoIter<String, V>,
}

delegate_iterator!((IntoIter<V>) => (String, V));

//////////////////////////////////////////////////////////////////////////////

/// An iterator over a rpc_struct::Map's keys.
pub struct Keys<'a, V> {
    iter: indexmap::map::Keys<'a, String, V>,
}

delegate_iterator!((Keys<'a, V>) => &'a String);

//////////////////////////////////////////////////////////////////////////////

/// An iterator over a rpc_struct::Map's values.
pub struct Values<'a, V> {
    iter: indexmap::map::Values<'a, String, V>,
}

delegate_iterator!((Values<'a, V>) => &'a V);

//////////////////////////////////////////////////////////////////////////////

/// A mutable iterator over a rpc_struct::Map's values.
pub struct ValuesMut<'a, V> {
    iter: indexmap::map::ValuesMut<'a, String, V>,
}

delegate_iterator!((ValuesMut<'a, V>) => &'a mut V);

//////////////////////////////////////////////////////////////////////////////

/// An owning iterator over a rpc_struct::Map's values.
pub struct IntoValues<V> {
    iter: indexmap::map::IntoValues<String, V>,
}

delegate_iterator!((IntoValues<V>) => V);
