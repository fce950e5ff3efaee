//! A string type with inline storage and a capacity fixed at compile time.

use core::cmp::Ordering;
use core::fmt::{self, Write as _};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::str::{self, Utf8Error};

use crate::algorithms;

/// The error type returned by the `try_` family of mutators when the
/// remaining capacity is insufficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("space remaining in string is insufficient")
    }
}

/// A byte string backed by an inline array of `N` bytes.
///
/// The capacity is part of the type: a `FixedString<8>` and a
/// `FixedString<16>` are distinct types, and converting between them is an
/// explicit, possibly-truncating copy. No operation ever allocates.
///
/// Content is treated as raw bytes. Operations are byte-oriented throughout;
/// there is no Unicode awareness, and truncation may split a multi-byte
/// UTF-8 sequence. Use [`as_str`](FixedString::as_str) to recover `&str`
/// when the content happens to be valid UTF-8.
///
/// # Overflow policy
///
/// Construction and the plain mutators never fail: input that does not fit
/// is silently truncated, keeping the longest fitting prefix. Callers that
/// need to detect truncation use the `try_` variants, which write
/// all-or-nothing and report a [`CapacityError`], or compare
/// [`len`](FixedString::len) before and after.
///
/// # Examples
/// ```
/// use fixstr::FixedString;
///
/// let mut s = FixedString::<10>::from("HelloWorld!");
/// assert_eq!(s, "HelloWorld");
/// assert_eq!(s.len(), 10);
///
/// s.truncate(5);
/// s.append(", fixed!");
/// assert_eq!(s, "Hello, fix");
/// ```
#[derive(Clone, Copy)]
pub struct FixedString<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedString<N> {
    /// Constructs a new, empty `FixedString`.
    #[inline]
    pub const fn new() -> Self {
        FixedString { buf: [0; N], len: 0 }
    }

    /// Constructs a `FixedString` from a byte sequence, keeping the first
    /// `N` bytes and silently discarding the rest.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<10>::from_bytes("HelloWorld!");
    /// assert_eq!(s, "HelloWorld");
    /// ```
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        let mut result = Self::new();
        result.assign(bytes);
        result
    }

    /// Constructs a `FixedString` from a NUL-terminated byte sequence,
    /// taking the content up to (not including) the first NUL, or the whole
    /// slice if it contains none. Truncates like
    /// [`from_bytes`](FixedString::from_bytes).
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<16>::from_nul_terminated(b"hello\0 trailing");
    /// assert_eq!(s, "hello");
    /// ```
    pub fn from_nul_terminated(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        Self::from_bytes(&bytes[..algorithms::nul_terminated_len(bytes)])
    }

    /// Constructs a `FixedString` holding `min(count, N)` copies of `byte`.
    ///
    /// # Examples
    /// ```
    /// let dashes = fixstr::FixedString::<10>::filled(5, b'-');
    /// assert_eq!(dashes, "-----");
    ///
    /// let clamped = fixstr::FixedString::<3>::filled(5, b'-');
    /// assert_eq!(clamped, "---");
    /// ```
    pub fn filled(count: usize, byte: u8) -> Self {
        let mut result = Self::new();
        let count = count.min(N);
        result.buf[..count].fill(byte);
        result.len = count;
        result
    }

    /// Returns the capacity of the string, i.e. `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current length of the string, in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string has a length of zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the string has a length equal to its capacity.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the number of additional bytes the string can hold.
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the content as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the content as a mutable byte slice.
    ///
    /// The length cannot be changed through the returned slice.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    /// Returns the content as a string slice, if it is valid UTF-8.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<8>::from("hello");
    /// assert_eq!(s.as_str(), Ok("hello"));
    ///
    /// let b = fixstr::FixedString::<8>::from_bytes(&[0xff, 0xfe][..]);
    /// assert!(b.as_str().is_err());
    /// ```
    #[inline]
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Returns the byte at `index`, or [`None`] if `index >= len`.
    ///
    /// Indexing with `[]` panics on out-of-range access instead.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        if index < self.len {
            Some(self.buf[index])
        } else {
            None
        }
    }

    /// Returns the first byte, or [`None`] if the string is empty.
    #[inline]
    pub fn front(&self) -> Option<u8> {
        self.get(0)
    }

    /// Returns the last byte, or [`None`] if the string is empty.
    #[inline]
    pub fn back(&self) -> Option<u8> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Replaces the content with `bytes`, truncated to fit.
    ///
    /// Returns the number of bytes kept.
    pub fn assign(&mut self, bytes: impl AsRef<[u8]>) -> usize {
        let bytes = bytes.as_ref();
        let count = bytes.len().min(N);
        self.buf[..count].copy_from_slice(&bytes[..count]);
        self.len = count;
        count
    }

    /// Appends as many bytes of `bytes` as fit in the remaining capacity,
    /// silently discarding the rest.
    ///
    /// Returns the number of bytes actually written, which is
    /// `min(bytes.len(), remaining_capacity())`.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<8>::from("foo");
    ///
    /// assert_eq!(s.append("bar"), 3);
    /// assert_eq!(s.append("bazz"), 2);
    /// assert_eq!(s, "foobarba");
    /// ```
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> usize {
        let bytes = bytes.as_ref();
        let count = bytes.len().min(self.remaining_capacity());
        self.buf[self.len..self.len + count].copy_from_slice(&bytes[..count]);
        self.len += count;
        count
    }

    /// Appends `bytes` in full, or returns [`Err`] and leaves the string
    /// unchanged if the remaining space is insufficient.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<8>::from("foo");
    ///
    /// assert!(s.try_append("bar").is_ok());
    /// assert!(s.try_append("bazz").is_err());
    /// assert_eq!(s, "foobar");
    /// ```
    pub fn try_append(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), CapacityError> {
        let bytes = bytes.as_ref();
        if bytes.len() > self.remaining_capacity() {
            return Err(CapacityError);
        }

        self.append(bytes);
        Ok(())
    }

    /// Appends a single byte, silently dropping it if the string is full.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.len < N {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    /// Appends a single byte, or returns [`Err`] if the string is full.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<2>::new();
    ///
    /// assert!(s.try_push(b'h').is_ok());
    /// assert!(s.try_push(b'i').is_ok());
    /// assert!(s.try_push(b'!').is_err());
    /// assert_eq!(s, "hi");
    /// ```
    #[inline]
    pub fn try_push(&mut self, byte: u8) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError);
        }

        self.push(byte);
        Ok(())
    }

    /// Removes the last byte and returns it, or [`None`] if the string is
    /// empty.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(self.buf[self.len])
    }

    /// Inserts `bytes` at byte position `pos`, shifting the suffix right.
    ///
    /// Inserts as many bytes as fit in the remaining capacity and silently
    /// discards the rest; the shifted suffix is always preserved in full.
    /// A `pos` past the end of the string is a no-op. Returns the number of
    /// bytes actually inserted.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<16>::from("Hello World");
    ///
    /// assert_eq!(s.insert(5, " Beautiful"), 5);
    /// assert_eq!(s, "Hello Beau World");
    ///
    /// assert_eq!(s.insert(99, "x"), 0);
    /// ```
    pub fn insert(&mut self, pos: usize, bytes: impl AsRef<[u8]>) -> usize {
        if pos > self.len {
            return 0;
        }

        let bytes = bytes.as_ref();
        let count = bytes.len().min(self.remaining_capacity());
        if count == 0 {
            return 0;
        }

        self.buf.copy_within(pos..self.len, pos + count);
        self.buf[pos..pos + count].copy_from_slice(&bytes[..count]);
        self.len += count;
        count
    }

    /// Inserts `bytes` at byte position `pos` in full, or returns [`Err`]
    /// and leaves the string unchanged if the remaining space is
    /// insufficient.
    ///
    /// # Panics
    /// Panics if `pos` is larger than the string's length. Unlike the
    /// silently-clamping [`insert`](FixedString::insert), this is the loud
    /// variant on both failure axes.
    pub fn try_insert(&mut self, pos: usize, bytes: impl AsRef<[u8]>) -> Result<(), CapacityError> {
        assert!(
            pos <= self.len,
            "insertion index (is {}) should be <= len (is {})",
            pos,
            self.len
        );

        let bytes = bytes.as_ref();
        if bytes.len() > self.remaining_capacity() {
            return Err(CapacityError);
        }

        self.insert(pos, bytes);
        Ok(())
    }

    /// Removes `min(count, len - pos)` bytes starting at `pos`, shifting
    /// the remaining suffix left. A `pos` at or past the end is a no-op.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<16>::from("Hello World");
    ///
    /// s.erase(5, 6);
    /// assert_eq!(s, "Hello");
    ///
    /// s.erase(3, 99);
    /// assert_eq!(s, "Hel");
    /// ```
    pub fn erase(&mut self, pos: usize, count: usize) {
        if pos >= self.len {
            return;
        }

        let count = count.min(self.len - pos);
        self.buf.copy_within(pos + count..self.len, pos);
        self.len -= count;
    }

    /// Removes `count` bytes at `pos` and inserts `bytes` in their place,
    /// subject to the same clamps as [`erase`](FixedString::erase) and
    /// [`insert`](FixedString::insert). Returns the number of bytes
    /// actually inserted.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<30>::from("Hello World");
    ///
    /// s.replace(6, 5, "Universe");
    /// assert_eq!(s, "Hello Universe");
    /// ```
    pub fn replace(&mut self, pos: usize, count: usize, bytes: impl AsRef<[u8]>) -> usize {
        if pos > self.len {
            return 0;
        }

        self.erase(pos, count);
        self.insert(pos, bytes)
    }

    /// Shortens the string to `new_len` bytes. Has no effect if `new_len`
    /// is not less than the current length.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Truncates the string, removing all content.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Converts the content to ASCII uppercase in place; bytes outside
    /// `a-z` are unchanged.
    #[inline]
    pub fn make_ascii_uppercase(&mut self) {
        self.as_mut_bytes().make_ascii_uppercase();
    }

    /// Converts the content to ASCII lowercase in place; bytes outside
    /// `A-Z` are unchanged.
    #[inline]
    pub fn make_ascii_lowercase(&mut self) {
        self.as_mut_bytes().make_ascii_lowercase();
    }

    /// Returns a copy with the content converted to ASCII uppercase.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<16>::from("HeLLo WoRLd");
    /// assert_eq!(s.to_ascii_uppercase(), "HELLO WORLD");
    /// ```
    pub fn to_ascii_uppercase(&self) -> Self {
        let mut result = *self;
        result.make_ascii_uppercase();
        result
    }

    /// Returns a copy with the content converted to ASCII lowercase.
    pub fn to_ascii_lowercase(&self) -> Self {
        let mut result = *self;
        result.make_ascii_lowercase();
        result
    }

    /// Reverses the content in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.as_mut_bytes().reverse();
    }

    /// Returns a reversed copy.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<8>::from("abc");
    /// assert_eq!(s.reversed(), "cba");
    /// assert_eq!(s.reversed().reversed(), s);
    /// ```
    pub fn reversed(&self) -> Self {
        let mut result = *self;
        result.reverse();
        result
    }

    /// Removes leading ASCII whitespace, as classified by
    /// [`algorithms::is_space`].
    pub fn trim_start(&mut self) {
        let mut start = 0;
        while start < self.len && algorithms::is_space(self.buf[start]) {
            start += 1;
        }
        self.erase(0, start);
    }

    /// Removes trailing ASCII whitespace, as classified by
    /// [`algorithms::is_space`].
    pub fn trim_end(&mut self) {
        while self.len > 0 && algorithms::is_space(self.buf[self.len - 1]) {
            self.len -= 1;
        }
    }

    /// Removes leading and trailing ASCII whitespace.
    ///
    /// # Examples
    /// ```
    /// let mut s = fixstr::FixedString::<30>::from("   Hello World   \n");
    /// s.trim();
    /// assert_eq!(s, "Hello World");
    /// ```
    pub fn trim(&mut self) {
        self.trim_end();
        self.trim_start();
    }

    /// Returns a copy with leading and trailing ASCII whitespace removed.
    pub fn trimmed(&self) -> Self {
        let mut result = *self;
        result.trim();
        result
    }

    /// Extracts `min(count, len - pos)` bytes starting at `pos` into a new
    /// string of the same capacity. A `pos` at or past the end yields an
    /// empty string. Pass `usize::MAX` as `count` to take everything up to
    /// the end.
    ///
    /// See the free function [`substr`] for extraction into a different
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<20>::from("Hello World");
    /// assert_eq!(s.substr(0, 5), "Hello");
    /// assert_eq!(s.substr(6, usize::MAX), "World");
    /// assert_eq!(s.substr(99, 5), "");
    /// ```
    pub fn substr(&self, pos: usize, count: usize) -> Self {
        substr(self, pos, count)
    }

    /// Finds the first occurrence of `needle`.
    ///
    /// See [`algorithms::find`] for a variant with an explicit starting
    /// position.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<20>::from("The quick brown fox");
    /// assert_eq!(s.find("quick"), Some(4));
    /// assert_eq!(s.find("lazy"), None);
    /// ```
    #[inline]
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::find(self.as_bytes(), needle.as_ref(), 0)
    }

    /// Finds the first occurrence of a single byte.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        algorithms::find_byte(self.as_bytes(), byte, 0)
    }

    /// Finds the last occurrence of `needle`.
    #[inline]
    pub fn rfind(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::rfind(self.as_bytes(), needle.as_ref(), self.len)
    }

    /// Finds the last occurrence of a single byte.
    #[inline]
    pub fn rfind_byte(&self, byte: u8) -> Option<usize> {
        algorithms::rfind_byte(self.as_bytes(), byte, self.len)
    }

    /// Finds the first byte contained in `set`.
    #[inline]
    pub fn find_first_of(&self, set: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::find_first_of(self.as_bytes(), set.as_ref(), 0)
    }

    /// Finds the first byte not contained in `set`.
    #[inline]
    pub fn find_first_not_of(&self, set: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::find_first_not_of(self.as_bytes(), set.as_ref(), 0)
    }

    /// Finds the last byte contained in `set`.
    #[inline]
    pub fn find_last_of(&self, set: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::find_last_of(self.as_bytes(), set.as_ref(), self.len)
    }

    /// Finds the last byte not contained in `set`.
    #[inline]
    pub fn find_last_not_of(&self, set: impl AsRef<[u8]>) -> Option<usize> {
        algorithms::find_last_not_of(self.as_bytes(), set.as_ref(), self.len)
    }

    /// Counts non-overlapping occurrences of `needle`.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<8>::from("aaaa");
    /// assert_eq!(s.count("aa"), 2);
    /// ```
    #[inline]
    pub fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        algorithms::count(self.as_bytes(), needle.as_ref())
    }

    /// Counts occurrences of a single byte.
    #[inline]
    pub fn count_byte(&self, byte: u8) -> usize {
        algorithms::count_byte(self.as_bytes(), byte)
    }

    /// Returns `true` if the string begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        algorithms::starts_with(self.as_bytes(), prefix.as_ref())
    }

    /// Returns `true` if the string ends with `suffix`.
    ///
    /// # Examples
    /// ```
    /// let s = fixstr::FixedString::<16>::from("document.txt");
    /// assert!(s.ends_with(".txt"));
    /// assert!(!s.ends_with(".pdf"));
    /// ```
    #[inline]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        algorithms::ends_with(self.as_bytes(), suffix.as_ref())
    }

    /// Returns `true` if the string contains `needle`.
    #[inline]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        algorithms::contains(self.as_bytes(), needle.as_ref())
    }

    /// Compares the content against another byte string, with the ordering
    /// defined by [`algorithms::compare`].
    #[inline]
    pub fn compare(&self, other: impl AsRef<[u8]>) -> Ordering {
        algorithms::compare(self.as_bytes(), other.as_ref())
    }

    /// Computes the 64-bit FNV-1a hash of the content.
    ///
    /// Equal strings hash equal, regardless of their capacities.
    #[inline]
    pub fn fnv1a(&self) -> u64 {
        algorithms::fnv1a(self.as_bytes())
    }
}

/// Concatenates two strings into a new string of capacity `R`.
///
/// The result capacity is chosen by the caller, typically as the sum of the
/// input capacities so the result always fits; a smaller `R` truncates under
/// the usual policy. `R` is usually inferred from the binding type.
///
/// # Examples
/// ```
/// use fixstr::FixedString;
///
/// let hello = FixedString::<5>::from("Hello");
/// let world = FixedString::<7>::from(" World!");
///
/// let greeting: FixedString<12> = fixstr::concat(&hello, &world);
/// assert_eq!(greeting, "Hello World!");
/// assert_eq!(greeting.len(), 12);
/// ```
pub fn concat<const R: usize, const A: usize, const B: usize>(
    a: &FixedString<A>,
    b: &FixedString<B>,
) -> FixedString<R> {
    let mut result = FixedString::new();
    result.append(a.as_bytes());
    result.append(b.as_bytes());
    result
}

/// Extracts `min(count, s.len() - pos)` bytes starting at `pos` into a new
/// string of capacity `R`, truncating if they do not fit.
///
/// A `pos` at or past the end yields an empty string. Pass `usize::MAX` as
/// `count` to take everything up to the end.
///
/// # Examples
/// ```
/// use fixstr::FixedString;
///
/// let s = FixedString::<20>::from("Hello World");
/// let hello: FixedString<5> = fixstr::substr(&s, 0, 5);
/// assert_eq!(hello, "Hello");
/// ```
pub fn substr<const R: usize, const N: usize>(
    s: &FixedString<N>,
    pos: usize,
    count: usize,
) -> FixedString<R> {
    let mut result = FixedString::new();
    if pos < s.len() {
        let count = count.min(s.len() - pos);
        result.append(&s.as_bytes()[pos..pos + count]);
    }
    result
}

impl<const N: usize> Default for FixedString<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl<const N: usize> From<&[u8]> for FixedString<N> {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> Deref for FixedString<N> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> DerefMut for FixedString<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedString<N> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> Index<usize> for FixedString<N> {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedString<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.as_mut_bytes()[index]
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedString<M>> for FixedString<N> {
    #[inline]
    fn eq(&self, other: &FixedString<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize> PartialEq<[u8]> for FixedString<N> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8]> for FixedString<N> {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize, const M: usize> PartialOrd<FixedString<M>> for FixedString<N> {
    #[inline]
    fn partial_cmp(&self, other: &FixedString<M>) -> Option<Ordering> {
        Some(algorithms::compare(self.as_bytes(), other.as_bytes()))
    }
}

impl<const N: usize> Ord for FixedString<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        algorithms::compare(self.as_bytes(), other.as_bytes())
    }
}

impl<const N: usize> Hash for FixedString<N> {
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.as_bytes().hash(hasher)
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    /// Writes the content as UTF-8, substituting U+FFFD for invalid
    /// sequences. No allocation takes place.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.as_bytes();
        loop {
            match str::from_utf8(bytes) {
                Ok(valid) => return f.write_str(valid),
                Err(error) => {
                    let (valid, rest) = bytes.split_at(error.valid_up_to());
                    // SAFETY: `valid_up_to` marks the longest valid prefix.
                    f.write_str(unsafe { str::from_utf8_unchecked(valid) })?;
                    f.write_char('\u{fffd}')?;

                    match error.error_len() {
                        Some(invalid) => bytes = &rest[invalid..],
                        None => return Ok(()),
                    }
                }
            }
        }
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for &byte in self.as_bytes() {
            for escaped in core::ascii::escape_default(byte) {
                f.write_char(escaped as char)?;
            }
        }
        f.write_char('"')
    }
}

impl<const N: usize> fmt::Write for FixedString<N> {
    /// Writes fail with [`fmt::Error`] when the string would overflow,
    /// leaving the content unchanged, so `write!` output is never silently
    /// cut short.
    ///
    /// # Examples
    /// ```
    /// use core::fmt::Write;
    ///
    /// let mut s = fixstr::FixedString::<16>::new();
    /// write!(s, "x = {}", 42).unwrap();
    /// assert_eq!(s, "x = 42");
    /// ```
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_append(s).map_err(|_| fmt::Error)
    }
}
