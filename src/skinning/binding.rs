/// Maximum number of bone influences one vertex can carry.
pub const MAX_BONES_PER_VERTEX: usize = 4;

/// The bone influences of one vertex: up to [`MAX_BONES_PER_VERTEX`]
/// `(bone id, weight)` pairs.
///
/// A slot with weight 0.0 counts as free. Slots fill in first-free order
/// through [`push`]; raw slot indexing is deliberately not exposed, so the
/// capacity invariant holds at the boundary.
///
/// [`push`]: VertexBoneBinding::push
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VertexBoneBinding {
    bone_ids: [u32; MAX_BONES_PER_VERTEX],
    weights: [f32; MAX_BONES_PER_VERTEX],
}

impl VertexBoneBinding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `(bone_id, weight)` into the first free slot and returns the
    /// slot index, or `None` when all slots already hold a non-zero weight.
    pub fn push(&mut self, bone_id: u32, weight: f32) -> Option<usize> {
        for i in 0..MAX_BONES_PER_VERTEX {
            if self.weights[i] == 0.0 {
                self.bone_ids[i] = bone_id;
                self.weights[i] = weight;
                return Some(i);
            }
        }
        None
    }

    /// Iterates the occupied slots as `(bone id, weight)` pairs.
    pub fn influences(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.bone_ids
            .iter()
            .zip(self.weights.iter())
            .filter(|(_, &w)| w != 0.0)
            .map(|(&id, &w)| (id, w))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_fills_first_free_slot() {
        let mut binding = VertexBoneBinding::new();
        assert_eq!(binding.push(7, 0.5), Some(0));
        assert_eq!(binding.push(3, 0.25), Some(1));
        let influences: Vec<_> = binding.influences().collect();
        assert_eq!(influences, vec![(7, 0.5), (3, 0.25)]);
    }

    #[test]
    fn push_fails_once_full() {
        let mut binding = VertexBoneBinding::new();
        for i in 0..MAX_BONES_PER_VERTEX {
            assert_eq!(binding.push(i as u32, 0.25), Some(i));
        }
        assert_eq!(binding.push(99, 0.1), None);
        // The failed push must not have overwritten anything.
        assert_eq!(binding.len(), MAX_BONES_PER_VERTEX);
        assert!(binding.influences().all(|(id, _)| id != 99));
    }

    #[test]
    fn zero_weight_push_leaves_slot_free() {
        let mut binding = VertexBoneBinding::new();
        assert_eq!(binding.push(1, 0.0), Some(0));
        // The slot still reads as free: a later push lands on it again.
        assert_eq!(binding.push(2, 0.8), Some(0));
        assert_eq!(binding.len(), 1);
    }
}
