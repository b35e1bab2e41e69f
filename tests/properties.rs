use route_trie::{Params, Router};

use proptest::prelude::*;

fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}"
}

fn literal_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(literal(), 1..6)
}

proptest! {
    #[test]
    fn literal_patterns_match_themselves(segs in literal_path()) {
        let path = format!("/{}", segs.join("/"));
        let router: Router<u8> = Router::new(0);
        router.add(&path, 1);

        prop_assert_eq!(router.find(&path, &mut ()), (1, segs.len()));
        prop_assert_eq!(router.find(&path.to_uppercase(), &mut ()), (1, segs.len()));
    }

    #[test]
    fn parameters_bind_original_segments(prefix in literal(), value in literal()) {
        let router: Router<u8> = Router::new(0);
        router.add(&format!("/{}/:value", prefix), 1);

        let mut params = Params::new();
        let path = format!("/{}/{}", prefix, value);
        prop_assert_eq!(router.find(&path, &mut params), (1, 2));
        prop_assert_eq!(params.get("value"), Some(value.as_str()));
    }

    #[test]
    fn find_is_idempotent(
        patterns in prop::collection::vec(literal_path(), 1..8),
        probe in literal_path(),
    ) {
        let router: Router<usize> = Router::new(usize::MAX);
        for (i, segs) in patterns.iter().enumerate() {
            let pattern: Vec<String> = segs
                .iter()
                .enumerate()
                .map(|(j, s)| if (i + j) % 3 == 0 { format!(":{}", s) } else { s.clone() })
                .collect();
            router.add(&pattern.join("/"), i);
        }

        let path = probe.join("/");
        let mut first = Params::new();
        let mut second = Params::new();
        let a = router.find(&path, &mut first);
        let b = router.find(&path, &mut second);
        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }
}
