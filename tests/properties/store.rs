//! Property tests for asset store resolution over random dependency graphs.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use proptest::prelude::*;

use terraform_installer::{Asset, AssetKey, InstallDir, Parents, Store};
use tempfile::TempDir;

const NODES: usize = 6;

thread_local! {
    // EDGES[i] lists the nodes node i depends on; always lower indices, so acyclic.
    static EDGES: RefCell<Vec<Vec<usize>>> = const { RefCell::new(Vec::new()) };
    static GENERATED: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

fn key(index: usize) -> AssetKey {
    match index {
        0 => AssetKey::of::<Node0>(),
        1 => AssetKey::of::<Node1>(),
        2 => AssetKey::of::<Node2>(),
        3 => AssetKey::of::<Node3>(),
        4 => AssetKey::of::<Node4>(),
        _ => AssetKey::of::<Node5>(),
    }
}

macro_rules! node {
    ($ty:ident, $index:expr) => {
        #[derive(Default)]
        struct $ty;

        impl Asset for $ty {
            fn name(&self) -> &str {
                stringify!($ty)
            }

            fn dependencies(&self) -> Vec<AssetKey> {
                EDGES.with(|e| e.borrow()[$index].iter().map(|d| key(*d)).collect())
            }

            fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
                assert_eq!(parents.len(), self.dependencies().len());
                GENERATED.with(|g| g.borrow_mut().push($index));
                Ok(())
            }
        }
    };
}

node!(Node0, 0);
node!(Node1, 1);
node!(Node2, 2);
node!(Node3, 3);
node!(Node4, 4);
node!(Node5, 5);

fn dag() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (0..NODES)
        .map(|i| proptest::sample::subsequence((0..i).collect::<Vec<_>>(), 0..=i))
        .collect::<Vec<_>>()
}

fn closure(edges: &[Vec<usize>], target: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut stack = vec![target];
    while let Some(node) = stack.pop() {
        if seen.insert(node) {
            stack.extend(edges[node].iter().copied());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fetching generates exactly the dependency closure, each node once,
    /// and every node after all of its dependencies.
    #[test]
    fn property_fetch_generates_closure_in_dependency_order(
        edges in dag(),
        targets in proptest::collection::vec(0..NODES, 1..=4),
    ) {
        EDGES.with(|e| *e.borrow_mut() = edges.clone());
        GENERATED.with(|g| g.borrow_mut().clear());

        let dir = TempDir::new().unwrap();
        let mut store = Store::new(InstallDir::new(dir.path()));

        let mut first = Vec::new();
        for target in &targets {
            first.push(store.fetch(key(*target)).unwrap());
        }

        let generated = GENERATED.with(|g| g.borrow().clone());
        let expected: BTreeSet<usize> = targets
            .iter()
            .flat_map(|t| closure(&edges, *t))
            .collect();

        let unique: BTreeSet<usize> = generated.iter().copied().collect();
        prop_assert_eq!(unique.len(), generated.len(), "a node was generated twice");
        prop_assert_eq!(&unique, &expected);
        prop_assert_eq!(store.len(), expected.len());

        for (position, node) in generated.iter().enumerate() {
            for dep in &edges[*node] {
                let dep_position = generated.iter().position(|n| n == dep);
                prop_assert!(
                    matches!(dep_position, Some(p) if p < position),
                    "node {} generated before its dependency {}",
                    node,
                    dep
                );
            }
        }

        // Fetching again hits the cache.
        for (target, earlier) in targets.iter().zip(&first) {
            let again = store.fetch(key(*target)).unwrap();
            prop_assert!(Rc::ptr_eq(&again, earlier));
        }
        prop_assert_eq!(GENERATED.with(|g| g.borrow().len()), generated.len());
    }
}
