//! Mine loot: one random material per kill while in the mine.

use rand::Rng;

use crate::data::roster::MINE_MATERIALS;
use crate::shared::*;

/// Uniform pick of coal, iron or gold, quantity 1.
pub fn roll_mine_loot<R: Rng>(rng: &mut R) -> InventoryItem {
    let (id, name, icon) = MINE_MATERIALS[rng.gen_range(0..MINE_MATERIALS.len())];
    InventoryItem::material(id, name, icon, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_loot_is_single_mine_material() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let item = roll_mine_loot(&mut rng);
            assert_eq!(item.count, 1);
            assert_eq!(item.category, ItemCategory::Material);
            assert!(MINE_MATERIALS.iter().any(|(id, _, _)| *id == item.id));
        }
    }

    #[test]
    fn test_every_material_can_drop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(roll_mine_loot(&mut rng).id);
        }
        assert_eq!(seen.len(), MINE_MATERIALS.len());
    }
}
