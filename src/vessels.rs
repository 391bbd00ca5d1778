//! Weight-bearing vessels and the grounds hopper.
//!
//! The reservoir and the pot share the [`WeightVessel`] interface so the
//! pump can move water between them.  They differ only in how they handle
//! a reduction larger than their contents:
//!
//! - [`Reservoir`] clamps itself to zero and reports the deficit as a
//!   negative return value.  The pump credits the destination with that
//!   returned value, not with what was requested.
//! - [`Pot`] subtracts without clamping.
//!
//! Weights saturate at the `i32` bounds instead of wrapping.

/// A container whose contents are measured by weight.
pub trait WeightVessel {
    /// Add `amount` to the contents.  No upper bound.
    fn increase_weight(&mut self, amount: i32);

    /// Remove `amount` and return the weight actually accounted for.
    fn reduce_weight(&mut self, amount: i32) -> i32;

    /// Weight above the vessel's baseline.
    fn current_weight(&self) -> i32;

    /// Zero-reference weight.
    fn baseline(&self) -> i32;
}

// ---------------------------------------------------------------------------
// Reservoir
// ---------------------------------------------------------------------------

/// Cold-water reservoir.  Never holds a negative weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservoir {
    weight: i32,
    baseline: i32,
}

impl Reservoir {
    pub fn new(baseline: i32) -> Self {
        Self {
            weight: baseline,
            baseline,
        }
    }

    /// Raw weight including the baseline.
    pub fn raw_weight(&self) -> i32 {
        self.weight
    }
}

impl Default for Reservoir {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WeightVessel for Reservoir {
    fn increase_weight(&mut self, amount: i32) {
        self.weight = self.weight.saturating_add(amount);
    }

    /// Subtract `amount` when enough is available and return it.
    ///
    /// Otherwise the reservoir empties to zero and the return value is
    /// `available - amount`, a negative deficit.
    fn reduce_weight(&mut self, amount: i32) -> i32 {
        let available = self.weight;
        let left = available.saturating_sub(amount);
        if left >= 0 {
            self.weight = left;
            amount
        } else {
            self.weight = 0;
            left
        }
    }

    fn current_weight(&self) -> i32 {
        self.weight.saturating_sub(self.baseline)
    }

    fn baseline(&self) -> i32 {
        self.baseline
    }
}

// ---------------------------------------------------------------------------
// Pot
// ---------------------------------------------------------------------------

/// Carafe for brewed coffee.  Owned by the caller, lent to the controller
/// between `put_pot` and `take_pot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    weight: i32,
    baseline: i32,
}

impl Pot {
    /// An empty pot with a zero baseline.
    pub fn new() -> Self {
        Self::with_baseline(0)
    }

    pub fn with_baseline(baseline: i32) -> Self {
        Self {
            weight: baseline,
            baseline,
        }
    }
}

impl Default for Pot {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightVessel for Pot {
    fn increase_weight(&mut self, amount: i32) {
        self.weight = self.weight.saturating_add(amount);
    }

    // Unclamped: pouring out of the pot is the caller's business.
    fn reduce_weight(&mut self, amount: i32) -> i32 {
        self.weight = self.weight.saturating_sub(amount);
        amount
    }

    fn current_weight(&self) -> i32 {
        self.weight
    }

    fn baseline(&self) -> i32 {
        self.baseline
    }
}

// ---------------------------------------------------------------------------
// Grounds hopper
// ---------------------------------------------------------------------------

/// Coffee grounds counter.  Only ever filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundsHopper {
    amount: i32,
    baseline: i32,
}

impl GroundsHopper {
    pub fn new(baseline: i32) -> Self {
        Self {
            amount: baseline,
            baseline,
        }
    }

    pub fn add(&mut self, amount: i32) {
        self.amount = self.amount.saturating_add(amount);
    }

    pub fn current_amount(&self) -> i32 {
        self.amount
    }

    pub fn baseline(&self) -> i32 {
        self.baseline
    }
}

impl Default for GroundsHopper {
    fn default() -> Self {
        Self::new(0)
    }
}
