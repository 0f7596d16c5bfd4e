#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use univers::sanitize::{
        empty_universe, sanitize, sanitize_with_limits, Limits, EMPTY_UNIVERSE_NAME,
        UNNAMED_UNIVERSE_NAME,
    };

    #[test]
    fn test_non_object_top_level_is_canonical_empty() {
        for raw in [
            Value::Null,
            json!([]),
            json!(42),
            json!("universe"),
            json!(true),
        ] {
            let universe = sanitize(&raw);
            assert_eq!(universe, empty_universe());
            assert_eq!(universe.metadata.name, EMPTY_UNIVERSE_NAME);
        }
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let universe = sanitize(&json!({}));
        assert_eq!(universe.metadata.name, UNNAMED_UNIVERSE_NAME);
        assert!(universe.classes.is_empty());
        assert!(universe.tables.is_empty());
        assert!(universe.joins.is_empty());
    }

    #[test]
    fn test_wrong_typed_collections_default_to_empty() {
        let universe = sanitize(&json!({
            "metadata": "not an object",
            "classes": {"oops": true},
            "tables": 7,
            "joins": "none"
        }));
        assert_eq!(universe.metadata.name, UNNAMED_UNIVERSE_NAME);
        assert!(universe.classes.is_empty());
        assert!(universe.tables.is_empty());
        assert!(universe.joins.is_empty());
    }

    #[test]
    fn test_nameless_entities_are_dropped() {
        let universe = sanitize(&json!({
            "classes": [
                {"description": "no name"},
                {"name": "   "},
                {"name": 42},
                "not an object",
                {"name": "Ventes"}
            ],
            "tables": [{"description": "nameless"}, {"name": "FACT_VENTES"}],
            "joins": [null, {"name": "Ventes_Clients"}]
        }));

        assert_eq!(universe.classes.len(), 1);
        assert_eq!(universe.classes[0].name, "Ventes");
        assert_eq!(universe.tables.len(), 1);
        assert_eq!(universe.joins.len(), 1);
    }

    #[test]
    fn test_nested_objects_follow_the_drop_rule() {
        let universe = sanitize(&json!({
            "classes": [{
                "name": "Ventes",
                "objects": [
                    {"name": "Marge", "type": "measure"},
                    {"type": "measure"},
                    {"name": ""},
                    [1, 2, 3]
                ]
            }]
        }));

        let class = &universe.classes[0];
        assert_eq!(class.objects.len(), 1);
        assert_eq!(class.objects[0].name, "Marge");
        assert_eq!(class.objects[0].kind.as_deref(), Some("measure"));
    }

    #[test]
    fn test_strings_are_trimmed() {
        let universe = sanitize(&json!({
            "metadata": {"name": "  Ventes 2024  ", "description": "   "},
            "tables": [{"name": " FACT_VENTES ", "description": "  faits  "}]
        }));

        assert_eq!(universe.metadata.name, "Ventes 2024");
        assert_eq!(universe.metadata.description, None);
        assert_eq!(universe.tables[0].name, "FACT_VENTES");
        assert_eq!(universe.tables[0].description.as_deref(), Some("faits"));
    }

    #[test]
    fn test_non_string_fields_become_absent_not_stringified() {
        let universe = sanitize(&json!({
            "classes": [{
                "name": "Ventes",
                "description": {"nested": "object"},
                "objects": [{"name": "Marge", "sql": 12.5, "type": ["measure"]}]
            }]
        }));

        let class = &universe.classes[0];
        assert_eq!(class.description, None);
        assert_eq!(class.objects[0].sql, None);
        assert_eq!(class.objects[0].kind, None);
    }

    #[test]
    fn test_join_endpoints_default_and_dangle() {
        let universe = sanitize(&json!({
            "joins": [
                {"name": "J1", "from": "A", "to": "B", "expression": "A.id = B.id"},
                {"name": "J2"}
            ]
        }));

        // No tables declared at all: dangling references are tolerated
        assert!(universe.tables.is_empty());
        assert_eq!(universe.joins[0].from, "A");
        assert_eq!(universe.joins[0].to, "B");
        assert_eq!(universe.joins[1].from, "");
        assert_eq!(universe.joins[1].to, "");
        assert_eq!(universe.joins[1].expression, None);
    }

    #[test]
    fn test_sequence_caps_keep_first_elements() {
        let limits = Limits {
            max_classes: 2,
            max_objects_per_class: 1,
            ..Limits::default()
        };
        let universe = sanitize_with_limits(
            &json!({
                "classes": [
                    {"name": "A", "objects": [{"name": "a1"}, {"name": "a2"}]},
                    {"name": "B"},
                    {"name": "C"}
                ]
            }),
            &limits,
        );

        assert_eq!(universe.classes.len(), 2);
        assert_eq!(universe.classes[0].name, "A");
        assert_eq!(universe.classes[1].name, "B");
        assert_eq!(universe.classes[0].objects.len(), 1);
        assert_eq!(universe.classes[0].objects[0].name, "a1");
    }

    #[test]
    fn test_string_cap_is_char_boundary_safe() {
        let limits = Limits {
            max_string_len: 4,
            ..Limits::default()
        };
        let universe = sanitize_with_limits(
            &json!({"tables": [{"name": "ééééé"}]}),
            &limits,
        );

        assert_eq!(universe.tables[0].name, "éééé");
    }

    #[test]
    fn test_idempotence_on_a_messy_document() {
        let raw = json!({
            "metadata": {"name": "  Univers Ventes "},
            "classes": [
                {"name": "Ventes", "objects": [{"name": " Marge ", "sql": null}]},
                {"description": "dropped"}
            ],
            "tables": [{"name": "FACT_VENTES"}, 17],
            "joins": [{"name": "J1", "from": "FACT_VENTES"}]
        });

        let once = sanitize(&raw);
        let twice = sanitize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_idempotence_of_defaults() {
        for raw in [Value::Null, json!({}), json!({"metadata": []})] {
            let once = sanitize(&raw);
            let twice = sanitize(&serde_json::to_value(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_totality_on_deeply_malformed_input() {
        // None of these may panic
        let cases = [
            json!({"classes": [{"name": "X", "objects": {"a": 1}}]}),
            json!({"metadata": {"name": {"name": "nested"}}}),
            json!({"joins": [[["deep"]]]}),
            json!({"classes": [[], {}, null, 0, ""]}),
        ];
        for raw in cases {
            let _ = sanitize(&raw);
        }
    }

    #[test]
    fn test_serialized_shape_uses_type_and_omits_absent_fields() {
        let universe = sanitize(&json!({
            "classes": [{"name": "Ventes", "objects": [{"name": "Marge", "type": "measure"}]}]
        }));

        let value = serde_json::to_value(&universe).unwrap();
        let object = &value["classes"][0]["objects"][0];
        assert_eq!(object["type"], "measure");
        assert!(object.get("kind").is_none());
        assert!(object.get("description").is_none());
        assert!(value["metadata"].get("description").is_none());
    }
}
