// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tablas_app::{BOUND_MAX, BOUND_MIN, Field, Range, Session, SessionCommand};

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator of valid ranges and pre-populated sessions, shared
/// by tests and the `--demo` startup path.
#[derive(Debug, Clone)]
pub struct RangeFaker {
    rng: DeterministicRng,
}

impl RangeFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(if seed == 0 { 1 } else { seed }),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    fn int_range(&mut self, low: i64, high: i64) -> i64 {
        low + self.rng.int_n((high - low + 1) as usize) as i64
    }

    fn ordered_pair(&mut self, low: i64, high: i64) -> (i64, i64) {
        let a = self.int_range(low, high);
        let b = self.int_range(low, high);
        (a.min(b), a.max(b))
    }

    /// Any valid range inside the shared bounds, degenerate included.
    pub fn range(&mut self) -> Range {
        let (min_col, max_col) = self.ordered_pair(BOUND_MIN, BOUND_MAX);
        let (min_row, max_row) = self.ordered_pair(BOUND_MIN, BOUND_MAX);
        Range {
            min_col,
            max_col,
            min_row,
            max_row,
        }
    }

    /// A small range (axis spans of at most ten) that fits on one
    /// screen, for demos and readable assertions.
    pub fn narrow_range(&mut self) -> Range {
        let min_col = self.int_range(-10, 10);
        let min_row = self.int_range(-10, 10);
        Range {
            min_col,
            max_col: min_col + self.int_range(0, 9),
            min_row,
            max_row: min_row + self.int_range(0, 9),
        }
    }
}

/// Fixed ranges used by `--demo` seeding.
pub fn demo_ranges() -> [Range; 3] {
    [
        Range {
            min_col: 1,
            max_col: 10,
            min_row: 1,
            max_row: 10,
        },
        Range {
            min_col: -5,
            max_col: 5,
            min_row: -5,
            max_row: 5,
        },
        Range {
            min_col: 3,
            max_col: 5,
            min_row: 4,
            max_row: 5,
        },
    ]
}

/// A session holding `tab_count` generated tabs.
pub fn seeded_session(seed: u64, tab_count: usize) -> Session {
    let mut faker = RangeFaker::new(seed);
    let mut session = Session::new();
    for _ in 0..tab_count {
        session.dispatch(SessionCommand::AddTab(faker.narrow_range()));
    }
    session
}

/// Type the four bounds of a range into the session's form.
pub fn fill_form(session: &mut Session, range: Range) {
    for field in Field::ALL {
        session.dispatch(SessionCommand::SetField(
            field,
            range.value_of(field).to_string(),
        ));
    }
}
