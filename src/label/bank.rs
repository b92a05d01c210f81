/// Default vertical slot size, one line of label text.
pub const SLOT_SIZE: f32 = 12.0;

/// First-fit vertical slot allocator for one margin column.
///
/// Requests pack forward only: a taken slot pushes the label down to the next
/// free one, never up. When the bottom is reached the last slot is reused and
/// labels overlap. Positions outside the bank are returned unchanged.
#[derive(Clone, Debug)]
pub struct LabelBank {
    start: f32,
    slot_size: f32,
    slots: Vec<bool>,
}

impl LabelBank {
    pub fn new(start: f32, span: f32) -> Self {
        Self::with_slot_size(start, span, SLOT_SIZE)
    }

    pub fn with_slot_size(start: f32, span: f32, slot_size: f32) -> Self {
        let slot_size = if slot_size > 0.0 { slot_size } else { SLOT_SIZE };
        let count = (span.max(0.0) / slot_size) as usize;
        Self {
            start,
            slot_size,
            slots: vec![false; count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|&&s| s).count()
    }

    /// Claim the first free slot at or below `desired` and return its position.
    pub fn allocate(&mut self, desired: f32) -> f32 {
        // Truncation toward zero: a request just above `start` maps to slot 0.
        let raw = ((desired - self.start) / self.slot_size) as i64;
        if raw < 0 || raw as usize >= self.slots.len() {
            return desired;
        }

        let mut slot = raw as usize;
        while self.slots[slot] {
            slot += 1;
            if slot >= self.slots.len() {
                slot = self.slots.len() - 1;
                tracing::trace!(start = self.start, "label bank exhausted, reusing last slot");
                break;
            }
        }

        self.slots[slot] = true;
        self.start + slot as f32 * self.slot_size
    }
}
