use alloc::vec::Vec;
use core::fmt::Debug;

/// Default lower bound on buckets per element. Growth triggers when the
/// bucket count would fall below `min_ratio * len`.
const DEFAULT_MIN_RATIO: usize = 1;

/// Default upper bound on buckets per element. Shrinking triggers when the
/// bucket count exceeds `max_ratio * len`.
const DEFAULT_MAX_RATIO: usize = 3;

/// Bucket-count floor once the table has rebuilt at least once. A freshly
/// constructed table starts with a single bucket.
const MIN_BUCKETS: usize = 2;

/// A hash table using separate chaining with automatic load-factor
/// rebalancing.
///
/// `HashTable<V>` stores values in a bucket array, where each bucket is a
/// short unordered chain of entries sharing one hash modulus. The table is
/// value-generic: callers supply a 64-bit hash and an equality predicate per
/// operation, and the table never invokes user hashing code itself. Each
/// entry stores its full hash, so rebuilds redistribute entries by
/// `stored_hash % new_bucket_count` without re-entering caller code.
///
/// # Load factor
///
/// The bucket count is kept within `[min_ratio * len, max_ratio * len]`
/// (`1` and `3` buckets per element by default, configurable through
/// [`with_ratios`]). A violated bound rebuilds the table into
/// `max(2, len * (min_ratio + max_ratio) / 2)` buckets, a midpoint target
/// proportional to the element count, which makes every rebuild O(n) and
/// amortized O(1) per mutation. An empty table is exempt: it rests at the
/// floor of 2 buckets (or 1 before the first rebuild).
///
/// # Iteration order
///
/// Iteration is bucket-major: all entries of bucket 0, then bucket 1, and so
/// on. The order is arbitrary and is **not** stable across rebuilds or
/// removals (removal swaps the last entry of a bucket into the vacated
/// slot).
///
/// [`with_ratios`]: HashTable::with_ratios
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Vec<(u64, V)>>,
    len: usize,
    min_ratio: usize,
    max_ratio: usize,
}

impl<V> Debug for HashTable<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with a single bucket and the default
    /// rebalancing ratios of 1 and 3 buckets per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_ratios(DEFAULT_MIN_RATIO, DEFAULT_MAX_RATIO)
    }

    /// Creates an empty table with custom rebalancing ratios.
    ///
    /// The bucket count is kept within `[min_ratio * len, max_ratio * len]`
    /// for a non-empty table. The ratios are fixed for the lifetime of this
    /// instance.
    ///
    /// # Panics
    ///
    /// Panics if `min_ratio` is zero or `max_ratio <= min_ratio`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u32> = HashTable::with_ratios(2, 4);
    /// assert!(table.is_empty());
    /// ```
    pub fn with_ratios(min_ratio: usize, max_ratio: usize) -> Self {
        assert!(min_ratio >= 1, "min_ratio must be at least 1");
        assert!(max_ratio > min_ratio, "max_ratio must exceed min_ratio");

        let mut buckets = Vec::with_capacity(1);
        buckets.push(Vec::new());
        Self {
            buckets,
            len: 0,
            min_ratio,
            max_ratio,
        }
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    ///
    /// For a non-empty table this lies within
    /// `[min_ratio * len, max_ratio * len]`; an empty table rests at 2
    /// buckets (1 before the first rebuild).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Removes all values from the table and shrinks the bucket array to its
    /// floor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(hash_key(1), |v: &u64| *v == 1).or_insert(1);
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 2);
    /// ```
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.shrink_check();
    }

    /// Returns a reference to the value matching `hash` and `eq`, if any.
    ///
    /// Scans the single bucket selected by `hash % bucket_count` linearly,
    /// comparing the stored hash before invoking `eq`. Average O(1) under
    /// the maintained load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(hash_key(7), |v: &u64| *v == 7).or_insert(7);
    ///
    /// assert_eq!(table.find(hash_key(7), |v| *v == 7), Some(&7));
    /// assert_eq!(table.find(hash_key(8), |v| *v == 8), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter()
            .find(|(h, v)| *h == hash && eq(v))
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`,
    /// if any.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter_mut()
            .find(|(h, v)| *h == hash && eq(v))
            .map(|(_, v)| v)
    }

    /// Removes and returns the value matching `hash` and `eq`, if any.
    ///
    /// The entry is removed by swapping it with the last entry of its bucket
    /// and popping, which is O(1) but reorders the bucket's remaining
    /// entries. Removal may shrink the bucket array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(hash_key(7), |v: &u64| *v == 7).or_insert(7);
    ///
    /// assert_eq!(table.remove(hash_key(7), |v| *v == 7), Some(7));
    /// assert_eq!(table.remove(hash_key(7), |v| *v == 7), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.bucket_index(hash);
        let slot = self.buckets[index]
            .iter()
            .position(|(h, v)| *h == hash && eq(v))?;
        let (_, value) = self.buckets[index].swap_remove(slot);
        self.len -= 1;
        self.shrink_check();
        Some(value)
    }

    /// Retains only the values for which `f` returns `true`.
    ///
    /// Visits every bucket with the same swap-remove scheme as [`remove`],
    /// then runs a single rebuild check at the end.
    ///
    /// [`remove`]: HashTable::remove
    pub fn retain(&mut self, mut f: impl FnMut(&mut V) -> bool) {
        for bucket in &mut self.buckets {
            let mut slot = 0;
            while slot < bucket.len() {
                if f(&mut bucket[slot].1) {
                    slot += 1;
                } else {
                    bucket.swap_remove(slot);
                    self.len -= 1;
                }
            }
        }
        self.shrink_check();
    }

    /// Gets an entry for the value matching `hash` and `eq`, for in-place
    /// manipulation or insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(hash_key(1), |v: &u64| *v == 1) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert(1);
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// match table.entry(hash_key(1), |v: &u64| *v == 1) {
    ///     Entry::Occupied(entry) => assert_eq!(entry.get(), &1),
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        let index = self.bucket_index(hash);
        match self.buckets[index]
            .iter()
            .position(|(h, v)| *h == hash && eq(v))
        {
            Some(slot) => Entry::Occupied(OccupiedEntry {
                table: self,
                bucket: index,
                slot,
            }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Returns an iterator over the values of the table, in bucket-major
    /// order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            cursor: self.cursor_begin(),
        }
    }

    /// Removes and returns every value in the table.
    ///
    /// The table is empty and at its bucket-count floor once this method
    /// returns, whether or not the iterator is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(hash_key(1), |v: &u64| *v == 1).or_insert(1);
    /// table.entry(hash_key(2), |v: &u64| *v == 2).or_insert(2);
    ///
    /// let values: Vec<u64> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<V> {
        self.len = 0;
        let mut floor = Vec::with_capacity(MIN_BUCKETS);
        floor.resize_with(MIN_BUCKETS, Vec::new);
        let buckets = core::mem::replace(&mut self.buckets, floor);
        Drain {
            inner: IntoIter {
                buckets: buckets.into_iter(),
                current: Vec::new().into_iter(),
            },
        }
    }

    /// Returns a cursor at the first value of the table, or at the end
    /// position if the table is empty.
    ///
    /// The first value lives in the lowest-indexed non-empty bucket.
    pub fn cursor_begin(&self) -> Cursor<'_, V> {
        let mut bucket = 0;
        while bucket < self.buckets.len() && self.buckets[bucket].is_empty() {
            bucket += 1;
        }
        Cursor {
            table: self,
            bucket,
            slot: 0,
        }
    }

    /// Returns the past-the-end cursor, at position `(bucket_count, 0)`.
    pub fn cursor_end(&self) -> Cursor<'_, V> {
        Cursor {
            table: self,
            bucket: self.buckets.len(),
            slot: 0,
        }
    }

    /// Returns a cursor at the value matching `hash` and `eq`, or the end
    /// cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_key(k: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     k.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(hash_key(1), |v: &u64| *v == 1).or_insert(1);
    ///
    /// let cursor = table.cursor_find(hash_key(1), |v| *v == 1);
    /// assert_eq!(cursor.get(), Some(&1));
    ///
    /// let missing = table.cursor_find(hash_key(9), |v| *v == 9);
    /// assert!(missing.is_end());
    /// assert_eq!(missing, table.cursor_end());
    /// ```
    pub fn cursor_find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Cursor<'_, V> {
        let index = self.bucket_index(hash);
        match self.buckets[index]
            .iter()
            .position(|(h, v)| *h == hash && eq(v))
        {
            Some(slot) => Cursor {
                table: self,
                bucket: index,
                slot,
            },
            None => self.cursor_end(),
        }
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Midpoint target between the two ratio bounds, floored at
    /// [`MIN_BUCKETS`].
    fn target_bucket_count(&self, len: usize) -> usize {
        core::cmp::max(
            MIN_BUCKETS,
            len.saturating_mul(self.min_ratio + self.max_ratio) / 2,
        )
    }

    /// Grows the bucket array if holding one more value would violate the
    /// lower ratio bound. Runs before the value is pushed, so references
    /// into the destination bucket stay valid afterwards.
    fn reserve_for_insert(&mut self) {
        if self.buckets.len() < self.min_ratio.saturating_mul(self.len + 1) {
            self.rebuild(self.target_bucket_count(self.len + 1));
        }
    }

    /// Shrinks the bucket array if the upper ratio bound is violated. The
    /// rebuild is skipped when the target equals the current size, so an
    /// empty table resting at the floor does not churn.
    fn shrink_check(&mut self) {
        if self.buckets.len() > self.max_ratio.saturating_mul(self.len) {
            let target = self.target_bucket_count(self.len);
            if target != self.buckets.len() {
                self.rebuild(target);
            }
        }
    }

    /// Redistributes every entry into a fresh bucket array of
    /// `new_bucket_count` buckets, using the stored hashes.
    fn rebuild(&mut self, new_bucket_count: usize) {
        let mut buckets = Vec::with_capacity(new_bucket_count);
        buckets.resize_with(new_bucket_count, Vec::new);
        let old = core::mem::replace(&mut self.buckets, buckets);
        for (hash, value) in old.into_iter().flatten() {
            let index = (hash % new_bucket_count as u64) as usize;
            self.buckets[index].push((hash, value));
        }
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_iter(),
            current: Vec::new().into_iter(),
        }
    }
}

/// A view into a single slot of a [`HashTable`], which may either be vacant
/// or occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts the given value if the entry is vacant and returns a mutable
    /// reference to the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference to the stored value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Inserts the default value if the entry is vacant and returns a
    /// mutable reference to the stored value.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant slot in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts the value into the table and returns a mutable reference to
    /// it.
    ///
    /// A rebuild needed to keep the load-factor bound runs before the push,
    /// so the returned reference points into the post-rebuild bucket array.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        table.reserve_for_insert();
        table.len += 1;
        let index = table.bucket_index(self.hash);
        let bucket = &mut table.buckets[index];
        bucket.push((self.hash, value));
        let slot = bucket.len() - 1;
        &mut bucket[slot].1
    }
}

/// A view into an occupied slot in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.buckets[self.bucket][self.slot].1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.buckets[self.bucket][self.slot].1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.buckets[self.bucket][self.slot].1
    }

    /// Removes the entry from the table and returns the value.
    ///
    /// Uses the same swap-remove scheme as [`HashTable::remove`] and may
    /// shrink the bucket array.
    pub fn remove(self) -> V {
        let (_, value) = self.table.buckets[self.bucket].swap_remove(self.slot);
        self.table.len -= 1;
        self.table.shrink_check();
        value
    }
}

/// A position in a [`HashTable`]'s two-level (bucket, slot) index space.
///
/// A cursor is a non-owning view: it borrows the table it came from, which
/// statically prevents its use across any mutation, in particular across a
/// rebuild, which moves every entry. The past-the-end position is
/// `(bucket_count, 0)`; see [`HashTable::cursor_end`].
///
/// Two cursors into the same table are equal iff their positions match.
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_key(k: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     k.hash(&mut hasher);
/// #     hasher.finish()
/// # }
/// #
/// let mut table = HashTable::new();
/// table.entry(hash_key(1), |v: &u64| *v == 1).or_insert(1);
///
/// let mut cursor = table.cursor_begin();
/// assert_eq!(cursor.get(), Some(&1));
/// cursor.advance();
/// assert!(cursor.is_end());
/// cursor.advance(); // advancing the end cursor is a no-op
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, V> {
    table: &'a HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<V> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Cursor<'_, V> {}

impl<V> PartialEq for Cursor<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.table, other.table)
            && self.bucket == other.bucket
            && self.slot == other.slot
    }
}

impl<V> Eq for Cursor<'_, V> {}

impl<V> Debug for Cursor<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("bucket", &self.bucket)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a, V> Cursor<'a, V> {
    /// Returns the value at the current position, or `None` at the end
    /// position.
    pub fn get(&self) -> Option<&'a V> {
        self.table
            .buckets
            .get(self.bucket)?
            .get(self.slot)
            .map(|(_, v)| v)
    }

    /// Returns `true` if this cursor is at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.bucket >= self.table.buckets.len()
    }

    /// Returns the current `(bucket, slot)` position. The end position is
    /// `(bucket_count, 0)`.
    pub fn position(&self) -> (usize, usize) {
        (self.bucket, self.slot)
    }

    /// Moves the cursor to the next value in bucket-major order.
    ///
    /// From `(i, j)`, moves to `(i, j + 1)` if bucket `i` has another
    /// entry, otherwise to the first slot of the next non-empty bucket, or
    /// to the end position if there is none. Advancing the end cursor is a
    /// no-op.
    pub fn advance(&mut self) {
        let bucket_count = self.table.buckets.len();
        if self.bucket >= bucket_count {
            return;
        }
        if self.slot + 1 < self.table.buckets[self.bucket].len() {
            self.slot += 1;
            return;
        }
        self.slot = 0;
        self.bucket += 1;
        while self.bucket < bucket_count && self.table.buckets[self.bucket].is_empty() {
            self.bucket += 1;
        }
    }
}

/// An iterator over the values of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    cursor: Cursor<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.get()?;
        self.cursor.advance();
        Some(value)
    }
}

/// An owning iterator over the values of a [`HashTable`].
///
/// This struct is created by the `into_iter` method on [`HashTable`].
pub struct IntoIter<V> {
    buckets: alloc::vec::IntoIter<Vec<(u64, V)>>,
    current: alloc::vec::IntoIter<(u64, V)>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, value)) = self.current.next() {
                return Some(value);
            }
            self.current = self.buckets.next()?.into_iter();
        }
    }
}

/// A draining iterator over the values of a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<V> {
    inner: IntoIter<V>,
}

impl<V> Iterator for Drain<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
