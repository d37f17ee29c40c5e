use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use storefront_cart::application::catalog::CatalogStore;
use storefront_cart::application::engine::CartEngine;
use storefront_cart::domain::cart::{CART_STORAGE_KEY, CartLine, CartView};
use storefront_cart::domain::money::Price;
use storefront_cart::domain::ports::{KeyValueStore, RenderSink};
use storefront_cart::domain::product::{Category, Product, ProductId};
use storefront_cart::infrastructure::in_memory::InMemoryStore;

#[derive(Clone, Default)]
struct CountingRenderer {
    renders: Arc<Mutex<usize>>,
}

impl CountingRenderer {
    fn count(&self) -> usize {
        *self.renders.lock().unwrap()
    }
}

impl RenderSink for CountingRenderer {
    fn render(&mut self, _view: &CartView) {
        *self.renders.lock().unwrap() += 1;
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add(u32, i64),
    Remove(u32),
    Update(u32, i64),
}

/// Ids 1..=5 exist; 6..=8 do not.
fn catalog() -> CatalogStore {
    let prices = [dec!(35.00), dec!(40.00), dec!(30.00), dec!(0.00), dec!(12.75)];
    let products = prices
        .iter()
        .zip(1u32..)
        .map(|(price, id)| {
            Product::new(
                ProductId(id),
                format!("Product {id}"),
                "",
                Price::new(*price).unwrap(),
                vec![format!("p{id}.jpg")],
                Category::Menu,
            )
            .unwrap()
        })
        .collect();
    CatalogStore::new(products).unwrap()
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..=8, 1i64..5).prop_map(|(id, q)| Op::Add(id, q)),
        (1u32..=8).prop_map(Op::Remove),
        (1u32..=8, -2i64..6).prop_map(|(id, q)| Op::Update(id, q)),
    ]
}

/// Any quantity, biased towards the limits of `i64`.
fn any_quantity() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(i64::MAX),
        Just(i64::MIN),
        Just(i64::MAX - 1),
        Just(i64::MIN + 1),
        any::<i64>(),
        -5i64..10,
    ]
}

fn extreme_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..=8, any_quantity()).prop_map(|(id, q)| Op::Add(id, q)),
        (1u32..=8).prop_map(Op::Remove),
        (1u32..=8, any_quantity()).prop_map(|(id, q)| Op::Update(id, q)),
    ]
}

fn apply(engine: &mut CartEngine<'_>, op: &Op) {
    match *op {
        Op::Add(id, q) => engine.add_item(ProductId(id), q).unwrap(),
        Op::Remove(id) => engine.remove_item(ProductId(id)).unwrap(),
        Op::Update(id, q) => engine.update_quantity(ProductId(id), q).unwrap(),
    }
}

fn new_engine<'a>(
    catalog: &'a CatalogStore,
    store: &InMemoryStore,
) -> (CartEngine<'a>, CountingRenderer) {
    let renderer = CountingRenderer::default();
    let engine = CartEngine::new(catalog, Box::new(store.clone()), Box::new(renderer.clone()));
    (engine, renderer)
}

proptest! {
    #[test]
    fn add_of_unknown_product_changes_nothing(ops in prop::collection::vec(op(), 0..20), id in 6u32..=8, q in 1i64..10) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, renderer) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }

        let lines = engine.lines().to_vec();
        let persisted = store.get(CART_STORAGE_KEY).unwrap();
        let writes = store.write_count();
        let renders = renderer.count();

        engine.add_item(ProductId(id), q).unwrap();

        prop_assert_eq!(engine.lines(), lines.as_slice());
        prop_assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), persisted);
        prop_assert_eq!(store.write_count(), writes);
        prop_assert_eq!(renderer.count(), renders);
    }

    #[test]
    fn repeated_adds_sum_into_one_line(quantities in prop::collection::vec(1i64..10, 1..15)) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, _) = new_engine(&catalog, &store);
        for q in &quantities {
            engine.add_item(ProductId(2), *q).unwrap();
        }

        let expected: i64 = quantities.iter().sum();
        prop_assert_eq!(engine.lines(), &[CartLine::new(ProductId(2), expected)]);
    }

    #[test]
    fn non_positive_update_equals_remove(ops in prop::collection::vec(op(), 0..20), id in 1u32..=8, q in -5i64..=0) {
        let catalog = catalog();
        let store_a = InMemoryStore::new();
        let store_b = InMemoryStore::new();
        let (mut updated, _) = new_engine(&catalog, &store_a);
        let (mut removed, _) = new_engine(&catalog, &store_b);
        for op in &ops {
            apply(&mut updated, op);
            apply(&mut removed, op);
        }

        updated.update_quantity(ProductId(id), q).unwrap();
        removed.remove_item(ProductId(id)).unwrap();

        prop_assert_eq!(updated.lines(), removed.lines());
    }

    #[test]
    fn total_matches_resolvable_lines(ops in prop::collection::vec(op(), 0..30)) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, _) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }

        let expected: Decimal = engine
            .lines()
            .iter()
            .filter_map(|line| {
                catalog
                    .find_by_id(line.product_id)
                    .map(|p| p.price().value() * Decimal::from(line.quantity))
            })
            .sum();
        prop_assert_eq!(engine.calculate_total(), expected);
        prop_assert!(engine.calculate_total() >= Decimal::ZERO);
    }

    #[test]
    fn lines_stay_unique_and_positive(ops in prop::collection::vec(op(), 0..40)) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, _) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }

        let lines = engine.lines();
        for (i, line) in lines.iter().enumerate() {
            prop_assert!(line.quantity >= 1);
            prop_assert!(lines[i + 1..].iter().all(|other| other.product_id != line.product_id));
        }
    }

    #[test]
    fn persist_restore_round_trip(ops in prop::collection::vec(op(), 0..30)) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, _) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }
        let before = engine.lines().to_vec();
        drop(engine);

        let (restored, _) = new_engine(&catalog, &store);
        prop_assert_eq!(restored.lines(), before.as_slice());
    }

    #[test]
    fn remove_is_idempotent(ops in prop::collection::vec(op(), 0..20), id in 1u32..=8) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, _) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }

        engine.remove_item(ProductId(id)).unwrap();
        let once = engine.lines().to_vec();
        engine.remove_item(ProductId(id)).unwrap();

        prop_assert_eq!(engine.lines(), once.as_slice());
    }

    #[test]
    fn extreme_quantities_keep_view_sane(ops in prop::collection::vec(extreme_op(), 0..30)) {
        let catalog = catalog();
        let store = InMemoryStore::new();
        let (mut engine, renderer) = new_engine(&catalog, &store);
        for op in &ops {
            apply(&mut engine, op);
        }

        let view = engine.view();
        prop_assert!(view.count >= 0);
        prop_assert!(view.total >= Decimal::ZERO);
        prop_assert!(engine.lines().iter().all(|line| line.quantity >= 1));
        // Only adds of unknown products skip the render.
        let rendering_ops = ops
            .iter()
            .filter(|op| !matches!(op, Op::Add(id, _) if *id > 5))
            .count();
        prop_assert_eq!(renderer.count(), rendering_ops);
        drop(engine);

        let (restored, _) = new_engine(&catalog, &store);
        let restored_view = restored.view();
        prop_assert_eq!(restored_view.count, view.count);
        prop_assert_eq!(restored_view.total, view.total);
    }
}
