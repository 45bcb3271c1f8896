use ippan_oid_registry::{DataSet, OidRegistry};
use proptest::prelude::*;

// Small key spaces so generated sets collide often.

fn arbitrary_name() -> impl Strategy<Value = String> {
    "[a-d][a-d]?".prop_map(|s| format!("name-{s}"))
}

fn arbitrary_oid() -> impl Strategy<Value = String> {
    (1u8..4, 0u8..4).prop_map(|(a, b)| format!("1.2.{a}.{b}"))
}

fn arbitrary_short() -> impl Strategy<Value = String> {
    "[A-C]{1,2}"
}

fn arbitrary_data_set() -> impl Strategy<Value = DataSet> {
    (
        "[xyz]",
        prop::collection::vec((arbitrary_name(), arbitrary_oid()), 0..6),
        prop::collection::vec((arbitrary_short(), arbitrary_name()), 0..4),
        prop::collection::vec((arbitrary_short(), arbitrary_name()), 0..4),
    )
        .prop_map(|(set_name, oids, shorts, aliases)| {
            let mut set = DataSet::new(set_name);
            for (name, oid) in oids {
                set = set.with_oid(name, oid);
            }
            for (short, name) in shorts {
                set = set.with_short(short, name);
            }
            for (alias, name) in aliases {
                set = set.with_alias(format!("alias-{alias}"), name);
            }
            set
        })
}

/// Every lookup answer for every key the generated sets can mention
fn snapshot(registry: &OidRegistry, sets: &[DataSet]) -> Vec<Option<String>> {
    let mut answers = Vec::new();
    for set in sets {
        for (name, oid) in &set.name_to_oid {
            answers.push(registry.name_to_oid(name));
            answers.push(registry.oid_to_name_strict(oid));
            answers.push(registry.name_to_short_strict(name));
        }
        for (short, _) in &set.short_to_name {
            answers.push(registry.short_to_name_strict(short));
            answers.push(registry.short_to_oid(short));
        }
        for (alias, _) in &set.alias_to_name {
            answers.push(registry.alias_to_name(alias));
            answers.push(registry.name_to_oid(alias));
        }
    }
    answers
}

proptest! {
    #[test]
    fn registering_twice_matches_registering_once(
        sets in prop::collection::vec(arbitrary_data_set(), 1..5),
    ) {
        let once = OidRegistry::new();
        once.register(&sets);

        let twice = OidRegistry::new();
        twice.register(&sets);
        twice.register(&sets);

        prop_assert_eq!(once.stats(), twice.stats());
        prop_assert_eq!(snapshot(&once, &sets), snapshot(&twice, &sets));
    }

    #[test]
    fn first_registered_value_is_never_replaced(
        first in arbitrary_data_set(),
        later in prop::collection::vec(arbitrary_data_set(), 0..4),
    ) {
        let registry = OidRegistry::new();
        registry.register(std::iter::once(&first));

        let mut expected = Vec::new();
        for (name, oid) in &first.name_to_oid {
            expected.push((name.clone(), registry.name_to_oid(name), registry.oid_to_name_strict(oid), oid.clone()));
        }

        registry.register(&later);

        for (name, name_oid, oid_name, oid) in expected {
            prop_assert_eq!(registry.name_to_oid(&name), name_oid);
            prop_assert_eq!(registry.oid_to_name_strict(&oid), oid_name);
        }
    }

    #[test]
    fn lenient_lookups_echo_unknown_input(key in "[0-9]{1,3}(\\.[0-9]{1,3}){1,4}") {
        let registry = OidRegistry::new();

        prop_assert_eq!(registry.oid_to_name(&key), key.clone());
        prop_assert_eq!(registry.oid_to_short(&key), key.clone());
        prop_assert_eq!(registry.short_to_name(&key), key.clone());
        prop_assert_eq!(registry.name_to_short(&key), key.clone());
        prop_assert_eq!(registry.name_to_oid(&key), None);
        prop_assert_eq!(registry.alias_to_name(&key), None);
    }
}
