//! Bounding rectangle calculation
//!
//! Scans every entity across every category and produces the minimal
//! axis-aligned rectangle covering them all.

use crate::types::EntityCollection;

use super::Bounds;

/// Compute the bounding rectangle of all entities in the collection.
///
/// Returns `None` when the collection holds no entities at all; callers
/// must check for this before attempting layout. Single linear scan,
/// no sorting.
pub fn compute_bounds(collection: &EntityCollection) -> Option<Bounds> {
    let mut entities = collection.all_entities();

    let first = entities.next()?;
    let mut bounds = Bounds::new(first.x, first.x, first.y, first.y);

    for entity in entities {
        bounds.min_x = bounds.min_x.min(entity.x);
        bounds.max_x = bounds.max_x.max(entity.x);
        bounds.min_y = bounds.min_y.min(entity.y);
        bounds.max_y = bounds.max_y.max(entity.y);
    }

    Some(bounds)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entity;

    fn entity(x: f64, y: f64) -> Entity {
        Entity {
            name: "transport-belt".to_string(),
            x,
            y,
            direction: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_empty_collection_has_no_bounds() {
        let collection = EntityCollection::default();
        assert_eq!(compute_bounds(&collection), None);
    }

    #[test]
    fn test_single_entity_bounds() {
        let collection = EntityCollection {
            belts: vec![entity(3.5, -2.0)],
            ..Default::default()
        };

        let bounds = compute_bounds(&collection).unwrap();
        assert_eq!(bounds, Bounds::new(3.5, 3.5, -2.0, -2.0));
    }

    #[test]
    fn test_bounds_span_all_categories() {
        let collection = EntityCollection {
            belts: vec![entity(0.0, 0.0), entity(10.0, 4.0)],
            walls: vec![entity(-5.0, 12.0)],
            rails: vec![entity(7.0, -3.0)],
            ..Default::default()
        };

        let bounds = compute_bounds(&collection).unwrap();
        assert_eq!(bounds.min_x, -5.0);
        assert_eq!(bounds.max_x, 10.0);
        assert_eq!(bounds.min_y, -3.0);
        assert_eq!(bounds.max_y, 12.0);
    }
}
