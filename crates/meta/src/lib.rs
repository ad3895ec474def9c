//! Compile-time key/value utilities for Stagger
//!
//! Builds type-level pairs and override tables so that configuration can bind
//! concrete implementations to named aliases without runtime cost.

pub mod alias;
pub mod list;
pub mod pair;

pub use alias::{Alias, AliasName, AliasTarget, Bound, PairOf, TypeToAliasPair, Unbound};
pub use list::{AliasMap, Cons, Nil, PairEntry, PairList, ToAliasMap, TypeList};
pub use pair::{Pair, TypeToPair};
