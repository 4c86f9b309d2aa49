//! End-to-end behavior of the public API on realistic nested payloads.

use dictwalk::{
    AllowList, Disallowed, Key, LoggedMap, Map, REDACTED_PLACEHOLDER, TargetKeys, Traversal,
    Value, Whitelist, get_path, get_path_ref, lookup_range, map, mask_values, seq,
    stringify_values, transform_values, whitelist,
};

fn application() -> Value {
    map! {
        "application" => map! {
            "id" => 1001,
            "applicants" => seq![
                map! {
                    "name" => "Meow Mix",
                    "ssn" => "123-45-6789",
                    "dob" => "1990-01-01",
                    "links" => map! { "link_url" => "app/test" },
                },
                map! {
                    "name" => "Tester Emp",
                    "ssn" => "",
                    "dob" => Value::Null,
                    "links" => map! { "link_url" => "app/tester" },
                },
            ],
            "business" => map! { "business_tax_id" => "98-7654321", "name" => "Acme" },
        },
    }
}

fn as_map(value: Value) -> Map {
    value.into_map().expect("fixture is a map")
}

mod path_lookup {
    use super::*;

    #[test]
    fn present_paths_resolve_to_their_value() {
        let data = application();
        assert_eq!(
            get_path(&data, "application.business.name", Value::Null),
            Value::from("Acme")
        );
        assert_eq!(
            get_path(&data, "application.applicants[1].name", Value::Null),
            Value::from("Tester Emp")
        );
    }

    #[test]
    fn absent_paths_resolve_to_default() {
        let data = application();
        let default = Value::from("default");
        for path in [
            "application.missing",
            "application.id.deeper",
            "application.applicants[2].name",
            "nothing",
        ] {
            assert_eq!(get_path(&data, path, default.clone()), default, "{path}");
        }
    }

    #[test]
    fn reference_lookup_avoids_cloning() {
        let data = application();
        let applicants = get_path_ref(&data, ["application", "applicants"]).unwrap();
        assert_eq!(applicants.as_seq().map(<[Value]>::len), Some(2));
    }
}

mod stringify {
    use super::*;

    fn assert_text_leaves(value: &Value) {
        match value {
            Value::Map(map) => map.values().for_each(assert_text_leaves),
            Value::Seq(items) => items.iter().for_each(assert_text_leaves),
            Value::Null | Value::Str(_) => {}
            other => panic!("non-text leaf {other:?}"),
        }
    }

    #[test]
    fn keeps_structure_and_converts_leaves() {
        let data = application();
        let out = stringify_values(&data);
        assert_text_leaves(&out);
        assert_eq!(
            get_path(&out, "application.id", Value::Null),
            Value::from("1001")
        );
        let original_keys: Vec<_> = data.as_map().unwrap().keys().collect();
        let new_keys: Vec<_> = out.as_map().unwrap().keys().collect();
        assert_eq!(original_keys, new_keys);
    }
}

mod whitelisting {
    use super::*;

    fn flat() -> Map {
        as_map(map! { "name" => "Bob", "ssn" => "123", "email" => "bob@example.com", "empty" => "" })
    }

    #[test]
    fn retains_exactly_the_allowed_keys() {
        let out = whitelist(&flat(), ["name", "email"]);
        for (key, value) in &out {
            let allowed = [Key::from("name"), Key::from("email")].contains(key);
            if allowed {
                assert_eq!(value, &flat()[key]);
            } else {
                assert_eq!(value, &Value::from(REDACTED_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn drop_mode_removes_the_rest() {
        let out = Whitelist::new(AllowList::new(["name"]))
            .disallowed(Disallowed::Drop)
            .apply(&flat());
        assert_eq!(out, as_map(map! { "name" => "Bob" }));
    }

    #[test]
    fn nested_allow_list_reaches_into_sequences() {
        let allow = AllowList::default().nested(
            "application",
            AllowList::new(["id"]).nested("applicants", AllowList::new(["name"])),
        );
        let out = Whitelist::new(allow)
            .disallowed(Disallowed::Drop)
            .apply(&as_map(application()));
        assert_eq!(
            Value::Map(out),
            map! {
                "application" => map! {
                    "id" => 1001,
                    "applicants" => seq![
                        map! { "name" => "Meow Mix" },
                        map! { "name" => "Tester Emp" },
                    ],
                },
            }
        );
    }
}

mod range_lookup {
    use super::*;

    #[test]
    fn documented_examples() {
        let bands = as_map(map! { "1-5" => "a", "10-20" => "b" });
        assert_eq!(lookup_range(&bands, 3), Some(&Value::from("a")));
        assert_eq!(lookup_range(&bands, 7), None);
        assert_eq!(lookup_range(&bands, 15), Some(&Value::from("b")));
    }

    #[test]
    fn credit_band_table() {
        let bands = as_map(map! {
            "300-579" => "poor",
            "580-669" => "fair",
            "670-739" => "good",
            "740-850" => "excellent",
        });
        assert_eq!(lookup_range(&bands, 580), Some(&Value::from("fair")));
        assert_eq!(lookup_range(&bands, 850), Some(&Value::from("excellent")));
        assert_eq!(lookup_range(&bands, 299), None);
    }
}

mod key_transform {
    use super::*;

    #[test]
    fn masks_pii_everywhere_and_leaves_input_alone() {
        let data = application();
        let masked = mask_values(&data, &TargetKeys::pii());

        assert_eq!(
            get_path(&masked, "application.applicants[0].ssn", Value::Null),
            Value::from("X")
        );
        assert_eq!(
            get_path(&masked, "application.applicants[1].dob", Value::Null),
            Value::from("X")
        );
        assert_eq!(
            get_path(&masked, "application.business.business_tax_id", Value::Null),
            Value::from("X")
        );
        assert_eq!(
            get_path(&masked, "application.business.name", Value::Null),
            Value::from("Acme")
        );
        assert_eq!(data, application());
    }

    #[test]
    fn keep_empty_only_masks_populated_values() {
        let targets = TargetKeys::pii();
        let masked = Traversal::new(&targets)
            .keep_empty(true)
            .apply(&application(), &dictwalk::Mask::new());
        assert_eq!(
            get_path(&masked, "application.applicants[1].ssn", Value::Null),
            Value::from("")
        );
        assert_eq!(
            get_path(&masked, "application.applicants[1].dob", Value::from(0)),
            Value::Null
        );
        assert_eq!(
            get_path(&masked, "application.applicants[0].ssn", Value::Null),
            Value::from("X")
        );
    }

    #[test]
    fn transforms_link_urls() {
        let out = transform_values(
            &application(),
            &TargetKeys::new(["link_url"]),
            |value| match value {
                Value::Str(url) => Value::Str(format!("https://example.com/{url}")),
                other => other,
            },
        );
        assert_eq!(
            get_path(&out, "application.applicants[1].links.link_url", Value::Null),
            Value::from("https://example.com/app/tester")
        );
    }
}

mod logged_map {
    use super::*;

    #[test]
    fn read_twice_write_once() {
        let mut logged = LoggedMap::new(as_map(map! { "k" => 1 }));
        let _ = logged.get("k");
        let _ = logged.get("k");
        logged.insert("j", 2);

        assert!(logged.accessed_keys().contains(&Key::from("k")));
        assert!(logged.mutated_keys().contains(&Key::from("j")));
        assert_eq!(logged.accesses().len(), 2);
        assert_eq!(logged.inner().len(), 2);
    }
}
