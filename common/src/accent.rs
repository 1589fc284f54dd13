//! Accent color and the configuration channel that distributes it.
//!
//! The settings surface publishes a new [`AccentColor`] through an
//! [`AccentChannel`]. Publishing notifies every registered listener
//! synchronously, in registration order, and persists the value through an
//! [`AccentStore`] so the next launch starts with the same color.
//!
//! The channel never holds references to listeners. It hands each registered
//! [`ListenerId`] to a `deliver` callback and the host maps ids to live face
//! instances. A face that has been torn down simply unregisters; publishing
//! after that never reaches it.
//!
//! # Usage
//!
//! ```ignore
//! let mut channel: AccentChannel<_, 4> = AccentChannel::new(store);
//! let mut face = WatchFace::new(channel.stored().unwrap_or_default());
//! let id = channel.register()?;
//!
//! channel.publish(AccentColor::from_argb(0xFF21_96F3), |listener, accent| {
//!     if listener == id {
//!         face.apply_accent(accent);
//!     }
//! })?;
//! ```

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::colors::argb_to_rgb565;

// =============================================================================
// Accent Color
// =============================================================================

/// User-selected highlight color, stored as ARGB8888.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AccentColor(u32);

impl AccentColor {
    /// Opaque red, used until the user picks something else.
    pub const RED: Self = Self(0xFFFF_0000);

    #[inline]
    pub const fn from_argb(argb: u32) -> Self { Self(argb) }

    #[inline]
    pub const fn argb(self) -> u32 { self.0 }

    #[inline]
    pub const fn to_rgb565(self) -> Rgb565 { argb_to_rgb565(self.0) }
}

impl Default for AccentColor {
    fn default() -> Self { Self::RED }
}

impl fmt::Display for AccentColor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

// =============================================================================
// Persistence
// =============================================================================

/// Key-value backend holding the single accent entry.
pub trait AccentStore {
    type Error: fmt::Debug;

    /// Read the persisted accent, `Ok(None)` if nothing was stored yet.
    fn load(&mut self) -> Result<Option<AccentColor>, Self::Error>;

    /// Persist `accent`, replacing any previous value.
    fn save(
        &mut self,
        accent: AccentColor,
    ) -> Result<(), Self::Error>;
}

/// Volatile store. Used for tests and for targets without persistent storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    value: Option<AccentColor>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { value: None } }

    pub const fn with_value(accent: AccentColor) -> Self { Self { value: Some(accent) } }
}

impl AccentStore for MemoryStore {
    type Error = core::convert::Infallible;

    fn load(&mut self) -> Result<Option<AccentColor>, Self::Error> { Ok(self.value) }

    fn save(
        &mut self,
        accent: AccentColor,
    ) -> Result<(), Self::Error> {
        self.value = Some(accent);
        Ok(())
    }
}

// =============================================================================
// Channel
// =============================================================================

/// Handle for a registered listener.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u16);

/// Channel failures.
#[derive(Debug, PartialEq, Eq)]
pub enum AccentError<E> {
    /// The backing store failed to read or write.
    Store(E),
    /// No room for another listener.
    RegistryFull,
}

impl<E: fmt::Debug> fmt::Display for AccentError<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "accent store failed: {e:?}"),
            Self::RegistryFull => f.write_str("accent listener registry is full"),
        }
    }
}

/// Publish/subscribe channel for the accent color, with up to `N` listeners.
pub struct AccentChannel<S, const N: usize> {
    store: S,
    listeners: Vec<ListenerId, N>,
    next_id: u16,
    last_published: Option<AccentColor>,
}

impl<S: AccentStore, const N: usize> AccentChannel<S, N> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            listeners: Vec::new(),
            next_id: 0,
            last_published: None,
        }
    }

    /// Accent a renderer should start with: the persisted value, or red.
    pub fn stored(&mut self) -> Result<AccentColor, S::Error> {
        Ok(self.store.load()?.unwrap_or_default())
    }

    /// Add a listener.
    pub fn register(&mut self) -> Result<ListenerId, AccentError<S::Error>> {
        let id = ListenerId(self.next_id);
        self.listeners.push(id).map_err(|_| AccentError::RegistryFull)?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(id)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unregister(
        &mut self,
        id: ListenerId,
    ) -> bool {
        match self.listeners.iter().position(|l| *l == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_registered(
        &self,
        id: ListenerId,
    ) -> bool {
        self.listeners.contains(&id)
    }

    #[inline]
    pub fn listener_count(&self) -> usize { self.listeners.len() }

    /// Publish a new accent.
    ///
    /// Every registered listener is handed to `deliver` before the value is
    /// persisted, so live faces update even if the store fails. Returns the
    /// number of listeners notified.
    pub fn publish<F>(
        &mut self,
        accent: AccentColor,
        mut deliver: F,
    ) -> Result<usize, AccentError<S::Error>>
    where
        F: FnMut(ListenerId, AccentColor),
    {
        for id in &self.listeners {
            deliver(*id, accent);
        }
        self.last_published = Some(accent);
        self.store.save(accent).map_err(AccentError::Store)?;
        Ok(self.listeners.len())
    }

    /// Most recent value passed to [`publish`](Self::publish).
    #[inline]
    pub const fn last_published(&self) -> Option<AccentColor> { self.last_published }

    #[inline]
    pub const fn store(&self) -> &S { &self.store }

    pub fn into_store(self) -> S { self.store }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec as StdVec;

    use super::*;

    const BLUE: AccentColor = AccentColor::from_argb(0xFF21_96F3);
    const LIME: AccentColor = AccentColor::from_argb(0xFFCD_DC39);

    /// Store whose writes always fail.
    struct BrokenStore;

    impl AccentStore for BrokenStore {
        type Error = &'static str;

        fn load(&mut self) -> Result<Option<AccentColor>, Self::Error> { Err("read failed") }

        fn save(
            &mut self,
            _accent: AccentColor,
        ) -> Result<(), Self::Error> {
            Err("disk full")
        }
    }

    #[test]
    fn test_default_accent_is_red() {
        assert_eq!(AccentColor::default(), AccentColor::RED);
        assert_eq!(AccentColor::RED.to_rgb565(), crate::colors::RED);
    }

    #[test]
    fn test_accent_display() {
        let mut s: heapless::String<16> = heapless::String::new();
        core::fmt::write(&mut s, format_args!("{BLUE}")).unwrap();
        assert_eq!(s.as_str(), "#FF2196F3");
    }

    #[test]
    fn test_stored_falls_back_to_red() {
        let mut channel: AccentChannel<_, 2> = AccentChannel::new(MemoryStore::new());
        assert_eq!(channel.stored().unwrap(), AccentColor::RED);
    }

    #[test]
    fn test_publish_persists_for_fresh_load() {
        let mut channel: AccentChannel<_, 2> = AccentChannel::new(MemoryStore::new());
        channel.publish(BLUE, |_, _| {}).unwrap();

        // A fresh channel over the same backing data reads the value back
        let mut reopened: AccentChannel<_, 2> = AccentChannel::new(channel.into_store());
        assert_eq!(reopened.stored().unwrap(), BLUE);
    }

    #[test]
    fn test_publish_notifies_all_listeners_in_order() {
        let mut channel: AccentChannel<_, 4> = AccentChannel::new(MemoryStore::new());
        let a = channel.register().unwrap();
        let b = channel.register().unwrap();

        let mut received = StdVec::new();
        let count = channel.publish(LIME, |id, accent| received.push((id, accent))).unwrap();

        assert_eq!(count, 2);
        assert_eq!(received, [(a, LIME), (b, LIME)]);
        assert_eq!(channel.last_published(), Some(LIME));
    }

    #[test]
    fn test_unregistered_listener_not_notified() {
        let mut channel: AccentChannel<_, 4> = AccentChannel::new(MemoryStore::new());
        let a = channel.register().unwrap();
        let b = channel.register().unwrap();
        assert!(channel.unregister(a));
        assert!(!channel.unregister(a));

        let mut received = StdVec::new();
        channel.publish(BLUE, |id, _| received.push(id)).unwrap();
        assert_eq!(received, [b]);
        assert!(!channel.is_registered(a));
    }

    #[test]
    fn test_last_publish_wins() {
        let mut channel: AccentChannel<_, 2> = AccentChannel::new(MemoryStore::new());
        let _ = channel.register().unwrap();
        let mut current = AccentColor::RED;
        channel.publish(BLUE, |_, accent| current = accent).unwrap();
        channel.publish(LIME, |_, accent| current = accent).unwrap();
        assert_eq!(current, LIME);
        assert_eq!(channel.stored().unwrap(), LIME);
    }

    #[test]
    fn test_registry_full() {
        let mut channel: AccentChannel<_, 1> = AccentChannel::new(MemoryStore::new());
        channel.register().unwrap();
        assert_eq!(channel.register(), Err(AccentError::RegistryFull));
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn test_store_failure_still_delivers() {
        let mut channel: AccentChannel<_, 2> = AccentChannel::new(BrokenStore);
        channel.register().unwrap();

        let mut delivered = None;
        let result = channel.publish(BLUE, |_, accent| delivered = Some(accent));

        assert_eq!(result, Err(AccentError::Store("disk full")));
        assert_eq!(delivered, Some(BLUE));
        assert!(channel.stored().is_err());
    }
}
