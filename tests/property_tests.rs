use proptest::prelude::*;
use sovran_setitem::{set_item, Dict, Key, List, SetItem, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|v| Value::from(List::from(v))),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| Value::from(entries.into_iter().collect::<Dict>())),
        ]
    })
}

fn arb_dict() -> impl Strategy<Value = Dict> {
    prop::collection::vec(("[a-z]{1,6}", arb_scalar()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_list() -> impl Strategy<Value = List> {
    prop::collection::vec(arb_scalar(), 0..6).prop_map(List::from)
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Key::from),
        (-3i64..10).prop_map(Key::from),
        any::<i64>().prop_map(Key::from),
    ]
}

proptest! {
    /// A string key always lands in a dictionary and reads back.
    #[test]
    fn prop_dict_string_key_stores(mut dict in arb_dict(), key in "[a-z]{0,6}", value in arb_value()) {
        let had_key = dict.contains_key(&key);
        let len = dict.len();

        prop_assert!(dict.set_item(Key::from(key.as_str()), value.clone()));
        prop_assert_eq!(dict.get(&key), Some(&value));
        prop_assert_eq!(dict.len(), if had_key { len } else { len + 1 });
    }

    #[test]
    fn prop_dict_integer_key_rejected(mut dict in arb_dict(), key in any::<i64>(), value in arb_value()) {
        let before = dict.clone();

        prop_assert!(!dict.set_item(Key::from(key), value));
        prop_assert_eq!(dict, before);
    }

    #[test]
    fn prop_list_in_bounds_stores(list in arb_list(), seed in any::<usize>(), value in arb_value()) {
        prop_assume!(!list.is_empty());
        let mut list = list;
        let index = seed % list.len();
        let len = list.len();

        prop_assert!(list.set_item(Key::from(index), value.clone()));
        prop_assert_eq!(list.get(index), Some(&value));
        prop_assert_eq!(list.len(), len);
    }

    #[test]
    fn prop_list_rejects_bad_keys(mut list in arb_list(), key in arb_key(), value in arb_value()) {
        let valid = matches!(key, Key::Int(i) if i >= 0 && (i as u64) < list.len() as u64);
        prop_assume!(!valid);
        let before = list.clone();

        prop_assert!(!list.set_item(key, value));
        prop_assert_eq!(list, before);
    }

    /// The wrapper agrees with calling the container directly, in result and effect.
    #[test]
    fn prop_wrapper_passes_through(
        dict in arb_dict(),
        list in arb_list(),
        key in arb_key(),
        value in arb_value(),
    ) {
        let mut direct_dict = dict.clone();
        let mut wrapped_dict = Value::from(dict);
        prop_assert_eq!(
            set_item(&mut wrapped_dict, key.clone(), value.clone()),
            direct_dict.set_item(key.clone(), value.clone())
        );
        prop_assert_eq!(wrapped_dict, Value::from(direct_dict));

        let mut direct_list = list.clone();
        let mut wrapped_list = Value::from(list);
        prop_assert_eq!(
            set_item(&mut wrapped_list, key.clone(), value.clone()),
            direct_list.set_item(key, value)
        );
        prop_assert_eq!(wrapped_list, Value::from(direct_list));
    }

    #[test]
    fn prop_scalars_are_not_containers(target in arb_scalar(), key in arb_key(), value in arb_value()) {
        let mut target = target;
        let before = target.clone();

        prop_assert!(!set_item(&mut target, key, value));
        prop_assert_eq!(target, before);
    }
}
