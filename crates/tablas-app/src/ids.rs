// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(TabId);

/// Monotonic id source for tabs. Ids start at 1 and are never reused, so
/// a tab created after deletions cannot collide with a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabIdSequence {
    next: i64,
}

impl TabIdSequence {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> TabId {
        let id = TabId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for TabIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
