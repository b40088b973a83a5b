//! Growable message buffer with a hard capacity ceiling.
//!
//! Both codec directions append into a [`MessageBuffer`]. Capacity starts at
//! 100 elements and grows in steps of 100 up to 60000. Running out of room
//! is reported as [`BufferError::CapacityExceeded`] rather than aborting.
//!
//! # Capacity accounting
//!
//! One slot is always held back for a terminator, so a buffer grows as soon
//! as its length reaches `capacity - 1` and the longest storable message is
//! `max_capacity - 1` elements.
//!
//! # Example
//! ```
//! use morse_codec_core::buffer::MessageBuffer;
//!
//! let mut buf = MessageBuffer::new().unwrap();
//! buf.extend_from_slice(b"SOS").unwrap();
//! assert_eq!(buf.as_str(), Some("SOS"));
//! assert_eq!(buf.capacity(), 100);
//! ```

use crate::error::{BufferError, Result};
use std::fmt;

/// Initial capacity of a fresh buffer.
pub const DEFAULT_CAPACITY: usize = 100;

/// Capacity added on each growth step.
pub const GROWTH_INCREMENT: usize = 100;

/// Hard ceiling on capacity.
pub const MAX_CAPACITY: usize = 60_000;

/// Sizing policy for a [`MessageBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    /// Capacity allocated at creation
    pub initial_capacity: usize,
    /// Capacity added when the buffer fills
    pub growth_increment: usize,
    /// Capacity never exceeds this
    pub max_capacity: usize,
}

impl BufferLimits {
    /// Check the limits describe a usable buffer.
    ///
    /// # Errors
    /// Returns `BufferError::InvalidLimits` if either size is zero or the
    /// initial capacity is above the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0
            || self.growth_increment == 0
            || self.initial_capacity > self.max_capacity
        {
            return Err(BufferError::InvalidLimits {
                initial: self.initial_capacity,
                increment: self.growth_increment,
                max: self.max_capacity,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_increment: GROWTH_INCREMENT,
            max_capacity: MAX_CAPACITY,
        }
    }
}

/// Owned, append-only message store.
///
/// # Invariants
/// - `data.len() < capacity <= limits.max_capacity`
/// - `data` holds exactly the elements appended since creation or the last
///   `clear`, in order
#[derive(Debug, Clone)]
pub struct MessageBuffer {
    /// Logical content; its length is the buffer length
    data: Vec<u8>,
    /// Logical capacity, grown in `limits.growth_increment` steps
    capacity: usize,
    limits: BufferLimits,
}

impl MessageBuffer {
    /// Create an empty buffer with the default limits.
    ///
    /// # Errors
    /// Returns `BufferError::AllocationFailed` if storage cannot be reserved.
    pub fn new() -> Result<Self> {
        Self::with_limits(BufferLimits::default())
    }

    /// Create an empty buffer with custom limits.
    ///
    /// # Errors
    /// - `BufferError::InvalidLimits` if `limits` fails validation
    /// - `BufferError::AllocationFailed` if storage cannot be reserved
    pub fn with_limits(limits: BufferLimits) -> Result<Self> {
        limits.validate()?;

        let mut data = Vec::new();
        reserve(&mut data, limits.initial_capacity)?;

        Ok(Self {
            data,
            capacity: limits.initial_capacity,
            limits,
        })
    }

    /// Append one element.
    ///
    /// NUL elements are ignored. When the append leaves no free slot the
    /// buffer grows by one increment first.
    ///
    /// # Errors
    /// - `BufferError::CapacityExceeded` if growing would pass the maximum;
    ///   the buffer is left unchanged
    /// - `BufferError::AllocationFailed` if the larger storage cannot be
    ///   reserved
    pub fn append(&mut self, element: u8) -> Result<()> {
        if element == 0 {
            return Ok(());
        }

        if self.data.len() + 1 >= self.capacity {
            self.grow()?;
        }
        self.data.push(element);

        Ok(())
    }

    /// Append every element of `elements` in order.
    ///
    /// Stops at the first failing append; elements before it stay appended.
    pub fn extend_from_slice(&mut self, elements: &[u8]) -> Result<()> {
        for &element in elements {
            self.append(element)?;
        }
        Ok(())
    }

    /// Discard all content. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Release the storage.
    pub fn destroy(self) {
        drop(self);
    }

    /// Number of elements written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing has been written since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Currently allocated capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The limits this buffer was created with.
    pub fn limits(&self) -> BufferLimits {
        self.limits
    }

    /// Content as raw elements.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Content as text, or `None` if a caller appended non-UTF-8 bytes.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    fn grow(&mut self) -> Result<()> {
        let requested = self.capacity + self.limits.growth_increment;
        if requested > self.limits.max_capacity {
            tracing::warn!(
                capacity = self.capacity,
                max = self.limits.max_capacity,
                "message buffer is full"
            );
            return Err(BufferError::CapacityExceeded {
                requested,
                max: self.limits.max_capacity,
            }
            .into());
        }

        reserve(&mut self.data, requested)?;
        self.capacity = requested;
        tracing::trace!(capacity = requested, "message buffer grew");

        Ok(())
    }
}

impl AsRef<[u8]> for MessageBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

/// Make sure `data` can hold `capacity` elements without reallocating.
fn reserve(data: &mut Vec<u8>, capacity: usize) -> Result<()> {
    let additional = capacity.saturating_sub(data.len());
    data.try_reserve_exact(additional)
        .map_err(|_| BufferError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn small_limits() -> BufferLimits {
        BufferLimits {
            initial_capacity: 4,
            growth_increment: 2,
            max_capacity: 8,
        }
    }

    #[test]
    fn test_new_buffer() {
        let buf = MessageBuffer::new().unwrap();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
        assert_eq!(buf.limits(), BufferLimits::default());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut buf = MessageBuffer::new().unwrap();
        for &b in b"HELLO" {
            buf.append(b).unwrap();
        }
        assert_eq!(buf.as_bytes(), b"HELLO");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "HELLO");
    }

    #[test]
    fn test_nul_is_ignored() {
        let mut buf = MessageBuffer::new().unwrap();
        buf.extend_from_slice(b"A\0B").unwrap();
        assert_eq!(buf.as_str(), Some("AB"));
    }

    #[test]
    fn test_no_growth_below_capacity() {
        let mut buf = MessageBuffer::new().unwrap();
        for _ in 0..98 {
            buf.append(b'.').unwrap();
        }
        assert_eq!(buf.capacity(), 100);
    }

    #[test]
    fn test_single_growth_after_101_appends() {
        let mut buf = MessageBuffer::new().unwrap();
        for _ in 0..101 {
            buf.append(b'-').unwrap();
        }
        assert_eq!(buf.len(), 101);
        assert_eq!(buf.capacity(), 200);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buf = MessageBuffer::new().unwrap();
        buf.extend_from_slice(&[b'x'; 150]).unwrap();
        assert_eq!(buf.capacity(), 200);

        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 200);

        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_clear_then_reuse_matches_fresh() {
        let mut reused = MessageBuffer::new().unwrap();
        reused.extend_from_slice(b"... --- ...").unwrap();
        reused.clear();
        reused.extend_from_slice(b"HI YOU").unwrap();

        let mut fresh = MessageBuffer::new().unwrap();
        fresh.extend_from_slice(b"HI YOU").unwrap();

        assert_eq!(reused.as_bytes(), fresh.as_bytes());
        assert_eq!(reused.capacity(), fresh.capacity());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut buf = MessageBuffer::with_limits(small_limits()).unwrap();
        // Capacity 4 -> 6 -> 8, longest content is 7
        buf.extend_from_slice(b"1234567").unwrap();
        assert_eq!(buf.capacity(), 8);

        let err = buf.append(b'8').unwrap_err();
        assert!(matches!(
            err,
            Error::Buffer(BufferError::CapacityExceeded { requested: 10, max: 8 })
        ));

        // Nothing truncated or half-written
        assert_eq!(buf.as_bytes(), b"1234567");
        assert_eq!(buf.capacity(), 8);
        assert!(buf.append(b'9').is_err());
    }

    #[test]
    fn test_default_ceiling() {
        let mut buf = MessageBuffer::new().unwrap();
        for _ in 0..MAX_CAPACITY - 1 {
            buf.append(b'.').unwrap();
        }
        assert_eq!(buf.capacity(), MAX_CAPACITY);

        let result = buf.append(b'.');
        assert!(matches!(
            result,
            Err(Error::Buffer(BufferError::CapacityExceeded { .. }))
        ));
        assert_eq!(buf.len(), MAX_CAPACITY - 1);
    }

    #[test]
    fn test_invalid_limits() {
        let bad = [
            BufferLimits { initial_capacity: 0, ..BufferLimits::default() },
            BufferLimits { growth_increment: 0, ..BufferLimits::default() },
            BufferLimits { initial_capacity: 200, growth_increment: 100, max_capacity: 100 },
        ];
        for limits in bad {
            assert!(matches!(
                MessageBuffer::with_limits(limits),
                Err(Error::Buffer(BufferError::InvalidLimits { .. }))
            ));
        }
    }

    #[test]
    fn test_as_str_rejects_invalid_utf8() {
        let mut buf = MessageBuffer::new().unwrap();
        buf.append(0xFF).unwrap();
        assert_eq!(buf.as_str(), None);
        assert_eq!(buf.to_string(), "\u{FFFD}");
    }
}
