//! Data-driven content definitions and loaders.
//!
//! This crate houses the static battler content and provides loaders for
//! RON/TOML data files:
//! - Card catalog (data-driven via RON)
//! - Buff catalog (data-driven via RON)
//! - Enemy roster (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime as a [`game_core::Catalog`] and never
//! appears in game state, which only stores ids.
//!
//! A default content pack is compiled into the crate (see [`builtin`]) so the
//! engine can run without a data directory.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BuffLoader, CardLoader, ConfigLoader, ContentFactory, ContentPack, EffectSpec, EnemyLoader,
    LoadResult, validate_content,
};
