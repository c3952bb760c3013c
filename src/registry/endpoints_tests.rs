//! Tests for `EndpointRegistry`.

use super::{EndpointRegistry, RegistryError};
use toml::Value;

fn table(pairs: &[(&str, &str)]) -> Value {
    let mut map = toml::Table::new();
    for (name, url) in pairs {
        map.insert((*name).to_string(), Value::String((*url).to_string()));
    }
    Value::Table(map)
}

mod set_all {
    use super::*;

    #[test]
    fn registers_every_key() {
        let registry = EndpointRegistry::new();
        registry
            .set_all(&table(&[
                ("orders", "http://orders.example.com/notify"),
                ("billing", "http://billing.example.com/hook"),
            ]))
            .unwrap();

        assert_eq!(
            registry.resolve("orders").as_deref(),
            Some("http://orders.example.com/notify")
        );
        assert_eq!(
            registry.resolve("billing").as_deref(),
            Some("http://billing.example.com/hook")
        );
    }

    #[test]
    fn replaces_previous_content_wholesale() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("old", "http://old.example.com")])).unwrap();
        registry.set_all(&table(&[("new", "http://new.example.com")])).unwrap();

        assert_eq!(registry.resolve("old"), None);
        assert_eq!(registry.resolve("new").as_deref(), Some("http://new.example.com"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn non_table_input_is_rejected() {
        let registry = EndpointRegistry::new();

        let result = registry.set_all(&Value::String("endpoints as string".to_string()));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidEndpoints { kind: "a string" })
        ));

        let result = registry.set_all(&Value::Integer(42));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidEndpoints { kind: "an integer" })
        ));

        let result = registry.set_all(&Value::Array(vec![]));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidEndpoints { kind: "an array" })
        ));
    }

    #[test]
    fn rejected_input_leaves_content_unchanged() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        let before = registry.snapshot();

        registry
            .set_all(&Value::Boolean(true))
            .expect_err("non-table input must fail");

        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn non_string_entry_value_is_rejected_atomically() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        let before = registry.snapshot();

        let mut map = toml::Table::new();
        map.insert("good".to_string(), Value::String("http://good.example.com".to_string()));
        map.insert("bad".to_string(), Value::Integer(7));

        let result = registry.set_all(&Value::Table(map));
        match result {
            Err(RegistryError::InvalidEndpointUrl { name, kind }) => {
                assert_eq!(name, "bad");
                assert_eq!(kind, "an integer");
            }
            other => panic!("expected InvalidEndpointUrl, got {other:?}"),
        }

        // Even the valid "good" entry must not land
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn empty_table_clears_registry() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        registry.set_all(&table(&[])).unwrap();

        assert!(registry.is_empty());
    }
}

mod merge {
    use super::*;

    #[test]
    fn overwrites_matching_keys_and_keeps_the_rest() {
        let registry = EndpointRegistry::new();
        registry
            .set_all(&table(&[
                ("orders", "http://orders.example.com"),
                ("billing", "http://billing.example.com"),
            ]))
            .unwrap();

        registry
            .merge(&table(&[
                ("billing", "http://billing-v2.example.com"),
                ("audit", "http://audit.example.com"),
            ]))
            .unwrap();

        assert_eq!(registry.resolve("orders").as_deref(), Some("http://orders.example.com"));
        assert_eq!(
            registry.resolve("billing").as_deref(),
            Some("http://billing-v2.example.com")
        );
        assert_eq!(registry.resolve("audit").as_deref(), Some("http://audit.example.com"));
        assert_eq!(registry.resolve("unknown"), None);
    }

    #[test]
    fn non_table_input_is_rejected_without_mutation() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        let before = registry.snapshot();

        let result = registry.merge(&Value::String("nope".to_string()));
        assert!(matches!(result, Err(RegistryError::InvalidEndpoints { .. })));
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn invalid_entry_value_aborts_the_whole_merge() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        let before = registry.snapshot();

        let mut map = toml::Table::new();
        map.insert("extra".to_string(), Value::String("http://extra.example.com".to_string()));
        map.insert("orders".to_string(), Value::Boolean(false));

        registry
            .merge(&Value::Table(map))
            .expect_err("non-string entry must fail");

        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn reregistering_the_same_entry_is_idempotent() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("x", "http://e.com")])).unwrap();
        assert_eq!(registry.resolve("x").as_deref(), Some("http://e.com"));

        let before = registry.snapshot();
        registry.merge(&table(&[("x", "http://e.com")])).unwrap();

        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn merge_into_empty_registry_behaves_like_set_all() {
        let registry = EndpointRegistry::new();
        registry.merge(&table(&[("orders", "http://orders.example.com")])).unwrap();

        assert_eq!(registry.resolve("orders").as_deref(), Some("http://orders.example.com"));
    }
}

mod resolve {
    use super::*;

    #[test]
    fn unknown_name_is_absent() {
        let registry = EndpointRegistry::new();
        assert_eq!(registry.resolve("anything"), None);
    }

    #[test]
    fn registered_url_stays_stable_until_replaced() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://v1.example.com")])).unwrap();

        assert_eq!(registry.resolve("orders").as_deref(), Some("http://v1.example.com"));
        assert_eq!(registry.resolve("orders").as_deref(), Some("http://v1.example.com"));

        registry.merge(&table(&[("orders", "http://v2.example.com")])).unwrap();
        assert_eq!(registry.resolve("orders").as_deref(), Some("http://v2.example.com"));
    }

    #[test]
    fn resolve_does_not_mutate() {
        let registry = EndpointRegistry::new();
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();
        let before = registry.snapshot();

        let _ = registry.resolve("orders");
        let _ = registry.resolve("unknown");

        assert_eq!(registry.snapshot(), before);
    }
}

mod sharing {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn global_returns_the_same_instance() {
        let a = EndpointRegistry::global();
        let b = EndpointRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn independent_instances_do_not_share_entries() {
        let a = EndpointRegistry::new();
        let b = EndpointRegistry::new();

        a.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();

        assert_eq!(b.resolve("orders"), None);
    }

    #[test]
    fn registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EndpointRegistry>();
    }

    #[test]
    fn concurrent_reads_see_registered_entries() {
        let registry = Arc::new(EndpointRegistry::new());
        registry.set_all(&table(&[("orders", "http://orders.example.com")])).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.resolve("orders").as_deref() == Some("http://orders.example.com")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
