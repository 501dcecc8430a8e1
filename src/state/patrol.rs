use super::entity::StaffType;
use super::tile::MAP_SIZE;

const WORDS: usize = MAP_SIZE * MAP_SIZE / 64;

/// Tiles a staff member may patrol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatrolArea {
    bits: Vec<u64>,
}

impl Default for PatrolArea {
    fn default() -> Self {
        Self::new()
    }
}

impl PatrolArea {
    pub fn new() -> Self {
        Self { bits: vec![0; WORDS] }
    }

    fn bit(x: usize, y: usize) -> Option<(usize, u64)> {
        (x < MAP_SIZE && y < MAP_SIZE).then(|| {
            let i = y * MAP_SIZE + x;
            (i / 64, 1u64 << (i % 64))
        })
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some((word, mask)) = Self::bit(x, y) {
            if value {
                self.bits[word] |= mask;
            } else {
                self.bits[word] &= !mask;
            }
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        Self::bit(x, y).is_some_and(|(word, mask)| self.bits[word] & mask != 0)
    }

    /// Mark every tile in the inclusive rectangle
    pub fn mark_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        for y in y0..=y1.min(MAP_SIZE - 1) {
            for x in x0..=x1.min(MAP_SIZE - 1) {
                self.set(x, y, true);
            }
        }
    }

    pub fn union_with(&mut self, other: &PatrolArea) {
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= b;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn tile_count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Union of all patrol areas per staff type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidatedPatrolAreas {
    areas: [PatrolArea; 4],
}

impl ConsolidatedPatrolAreas {
    pub fn rebuild<'a>(&mut self, staff: impl Iterator<Item = (StaffType, Option<&'a PatrolArea>)>) {
        self.areas = Default::default();
        for (staff_type, area) in staff {
            if let Some(area) = area {
                self.areas[staff_type.index()].union_with(area);
            }
        }
    }

    pub fn for_type(&self, staff_type: StaffType) -> &PatrolArea {
        &self.areas[staff_type.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_rect() {
        let mut area = PatrolArea::new();
        area.mark_rect(4, 8, 7, 11);
        assert_eq!(area.tile_count(), 16);
        assert!(area.contains(4, 8));
        assert!(area.contains(7, 11));
        assert!(!area.contains(8, 11));
    }

    #[test]
    fn test_mark_rect_clamps_to_map() {
        let mut area = PatrolArea::new();
        area.mark_rect(126, 126, 129, 129);
        assert_eq!(area.tile_count(), 4);
    }

    #[test]
    fn test_consolidate() {
        let mut a = PatrolArea::new();
        a.set(1, 1, true);
        let mut b = PatrolArea::new();
        b.set(2, 2, true);
        let mut all = ConsolidatedPatrolAreas::default();
        all.rebuild(
            [(StaffType::Handyman, Some(&a)), (StaffType::Handyman, Some(&b)), (StaffType::Mechanic, None)]
                .into_iter(),
        );
        assert_eq!(all.for_type(StaffType::Handyman).tile_count(), 2);
        assert!(all.for_type(StaffType::Mechanic).is_empty());
    }
}
