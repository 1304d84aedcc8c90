//! Selection of the orphans this run acts on.

use crate::domain::OrphanEntity;

/// Keep only entities whose type equals `entity_type`, in report order.
#[must_use]
pub fn filter_by_type(entities: &[OrphanEntity], entity_type: &str) -> Vec<OrphanEntity> {
    entities
        .iter()
        .filter(|e| e.entity_type == entity_type)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_helpers::entity;
    use crate::domain::ASSET_ENTITY_TYPE;

    #[test]
    fn test_keeps_only_assets_in_order() {
        let input = vec![
            entity("a", "asset"),
            entity("p", "person"),
            entity("b", "asset"),
            entity("u", "user"),
            entity("c", "asset"),
        ];
        let before = input.clone();

        let assets = filter_by_type(&input, ASSET_ENTITY_TYPE);

        let ids: Vec<_> = assets.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(input, before);
    }

    #[test]
    fn test_type_match_is_exact() {
        let input = vec![entity("a", "Asset"), entity("b", "assets"), entity("c", "")];
        assert!(filter_by_type(&input, ASSET_ENTITY_TYPE).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_type(&[], ASSET_ENTITY_TYPE).is_empty());
    }
}
