//! Vertical row assignment.

/// Greedy first-fit row allocator.
///
/// Each allocation starts at the base row and steps down by the spacing
/// until the candidate keeps at least one spacing from every row handed
/// out before. Rows are never released.
#[derive(Debug, Clone)]
pub struct RowAllocator {
    base: f32,
    spacing: f32,
    used: Vec<f32>,
}

impl RowAllocator {
    pub fn new(base: f32, spacing: f32) -> Self {
        Self {
            base,
            spacing,
            used: Vec::new(),
        }
    }

    /// Returns the next free row and marks it as used.
    pub fn allocate(&mut self) -> f32 {
        let mut candidate = self.base;
        while self
            .used
            .iter()
            .any(|row| (candidate - row).abs() < self.spacing)
        {
            candidate += self.spacing;
        }
        self.used.push(candidate);
        candidate
    }

    /// The lowest row handed out so far.
    pub fn max_row(&self) -> Option<f32> {
        self.used.iter().copied().reduce(f32::max)
    }
}
