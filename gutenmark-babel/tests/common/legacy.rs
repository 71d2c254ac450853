//! Legacy type ↔ decoration id consistency

use gutenmark_babel::common::legacy::{
    decoration_id_for, DECORATION_ID_TO_LEGACY_TYPE, DEFAULT_DECORATION_ID,
    LEGACY_TYPE_TO_DECORATION_ID,
};
use gutenmark_babel::ir::nodes::LegacyType;
use gutenmark_babel::{decoration_id_to_legacy_type, legacy_type_to_decoration_id};
use proptest::prelude::*;

#[test]
fn test_tables_agree() {
    for (legacy_type, id) in LEGACY_TYPE_TO_DECORATION_ID {
        assert_eq!(decoration_id_to_legacy_type(id), *legacy_type);
        assert!(DECORATION_ID_TO_LEGACY_TYPE
            .iter()
            .any(|(reverse_id, _)| reverse_id == id));
    }
}

#[test]
fn test_every_legacy_type_round_trips() {
    for legacy_type in LegacyType::ALL {
        let id = legacy_type_to_decoration_id(legacy_type.as_str());
        assert_eq!(id, decoration_id_for(legacy_type));
        assert_eq!(decoration_id_to_legacy_type(id), legacy_type);
    }
}

proptest! {
    #[test]
    fn any_legacy_value_resolves(value in "\\PC{0,16}") {
        let id = legacy_type_to_decoration_id(&value);
        match value.parse::<LegacyType>() {
            Ok(legacy_type) => prop_assert_eq!(decoration_id_to_legacy_type(id), legacy_type),
            Err(_) => prop_assert_eq!(id, DEFAULT_DECORATION_ID),
        }
    }

    #[test]
    fn unknown_ids_default_to_info(id in "x-[a-z]{1,10}") {
        prop_assert_eq!(decoration_id_to_legacy_type(&id), LegacyType::Info);
    }
}
