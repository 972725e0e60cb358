//! End-to-end checks of the query service over one realistic seeded dataset.

use std::collections::HashSet;

use chrono::NaiveDate;

use shopfront_catalog::{Product, ProductId};
use shopfront_core::EntityId;
use shopfront_customers::{Customer, CustomerId};
use shopfront_infra::InMemoryRepository;
use shopfront_orders::{Order, OrderId};
use shopfront_queries::{QueryError, QueryService};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn product(name: &str, category: &str, price: f64) -> Product {
    Product::new(ProductId::new(EntityId::new()), name, category, price).unwrap()
}

fn customer(name: &str, tier: u8) -> Customer {
    Customer::new(CustomerId::new(EntityId::new()), name, tier).unwrap()
}

fn order(order_date: NaiveDate, customer: &Customer, products: &[&Product]) -> Order {
    Order::new(
        OrderId::new(EntityId::new()),
        order_date,
        customer.clone(),
        products.iter().map(|p| (*p).clone()).collect(),
    )
}

struct Fixture {
    svc: QueryService<InMemoryRepository<Product>, InMemoryRepository<Order>>,
    products: Vec<Product>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

/// Seven products, four customers, seven orders spanning Jan–May 2021.
fn fixture() -> Fixture {
    let b1 = product("Rust in Action", "Books", 120.0);
    let b2 = product("The Pragmatic Programmer", "Books", 50.0);
    let b3 = product("Domain Modelling", "Books", 150.0);
    let t1 = product("Wooden Train", "Toys", 40.0);
    let t2 = product("Puzzle", "Toys", 10.0);
    let y1 = product("Stroller", "Baby", 300.0);
    let y2 = product("Rattle", "Baby", 15.0);

    let alice = customer("Alice", 1);
    let bob = customer("Bob", 2);
    let carol = customer("Carol", 2);
    let dave = customer("Dave", 3);

    let orders = vec![
        order(date(2021, 2, 10), &bob, &[&b1, &t1]),
        order(date(2021, 2, 20), &alice, &[&y1]),
        order(date(2021, 3, 15), &carol, &[&b2, &t2]),
        order(date(2021, 3, 15), &bob, &[&t2]),
        order(date(2021, 4, 1), &carol, &[&b3]),
        order(date(2021, 5, 1), &dave, &[]),
        order(date(2021, 1, 15), &alice, &[&t1, &y2]),
    ];
    let products = vec![b1, b2, b3, t1, t2, y1, y2];
    let customers = vec![alice, bob, carol, dave];

    Fixture {
        svc: QueryService::new(
            InMemoryRepository::new(products.clone()),
            InMemoryRepository::new(orders.clone()),
        ),
        products,
        customers,
        orders,
    }
}

#[test]
fn premium_books_are_exactly_the_books_above_the_floor() {
    let f = fixture();
    let result = f.svc.products_by_category_above_price();

    let ids: HashSet<_> = result.iter().map(|p| p.id_typed()).collect();
    let expected: HashSet<_> = [&f.products[0], &f.products[2]]
        .iter()
        .map(|p| p.id_typed())
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn baby_orders_are_the_stroller_and_rattle_orders() {
    let f = fixture();
    let result = f.svc.orders_containing_category();

    let ids: HashSet<_> = result.iter().map(|o| o.id_typed()).collect();
    let expected: HashSet<_> = [&f.orders[1], &f.orders[6]]
        .iter()
        .map(|o| o.id_typed())
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn toys_are_discounted_by_ten_percent() {
    let f = fixture();
    let mut prices: Vec<f64> = f
        .svc
        .discounted_by_category()
        .iter()
        .map(Product::price)
        .collect();
    prices.sort_by(f64::total_cmp);
    assert_eq!(prices.len(), 2);
    assert!((prices[0] - 9.0).abs() < 1e-9);
    assert!((prices[1] - 36.0).abs() < 1e-9);
}

#[test]
fn tier_two_window_collects_distinct_products_from_both_customers() {
    let f = fixture();
    let result = f.svc.products_ordered_by_tier_in_range();

    // Orders 0, 2, 3, 4 qualify (Bob and Carol, Feb 1 through Apr 1).
    let ids: HashSet<_> = result.iter().map(|p| p.id_typed()).collect();
    let expected: HashSet<_> = [
        &f.products[0], // Rust in Action
        &f.products[3], // Wooden Train
        &f.products[1], // The Pragmatic Programmer
        &f.products[4], // Puzzle (appears in two orders, counted once)
        &f.products[2], // Domain Modelling
    ]
    .iter()
    .map(|p| p.id_typed())
    .collect();
    assert_eq!(ids, expected);
    assert_eq!(result.len(), 5);
}

#[test]
fn cheapest_book_is_the_pragmatic_programmer() {
    let f = fixture();
    let cheapest = f.svc.cheapest_in_category().unwrap();
    assert_eq!(cheapest.id_typed(), f.products[1].id_typed());
}

#[test]
fn most_recent_orders_are_may_april_then_march() {
    let f = fixture();
    let recent = f.svc.most_recent_orders();

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].order_date(), date(2021, 5, 1));
    assert_eq!(recent[1].order_date(), date(2021, 4, 1));
    assert_eq!(recent[2].order_date(), date(2021, 3, 15));
}

#[test]
fn report_date_products_deduplicate_the_shared_puzzle() {
    let f = fixture();
    let mut inspected = 0usize;
    let result = f
        .svc
        .orders_on_date_with_products_inspected(|_| inspected += 1);

    assert_eq!(inspected, 2);
    let ids: HashSet<_> = result.iter().map(|p| p.id_typed()).collect();
    let expected: HashSet<_> = [&f.products[1], &f.products[4]]
        .iter()
        .map(|p| p.id_typed())
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn default_logging_path_reports_matched_orders() {
    shopfront_observability::init();
    let f = fixture();
    let result = f.svc.orders_on_date_with_products();
    assert_eq!(result.len(), 2);
}

#[test]
fn february_revenue_sums_both_february_orders() {
    let f = fixture();
    // (120 + 40) + 300
    assert!((f.svc.total_revenue_in_month() - 460.0).abs() < 1e-9);
}

#[test]
fn average_on_report_date_covers_all_flattened_prices() {
    let f = fixture();
    // Prices on 2021-03-15: 50, 10, 10.
    let average = f.svc.average_order_value_on_date().unwrap();
    assert!((average - 70.0 / 3.0).abs() < 1e-9);
}

#[test]
fn average_fails_on_a_dataset_without_the_report_date() {
    let c = customer("Nobody", 1);
    let svc = QueryService::new(
        InMemoryRepository::new(vec![]),
        InMemoryRepository::new(vec![order(date(2021, 7, 1), &c, &[])]),
    );
    assert_eq!(svc.average_order_value_on_date(), Err(QueryError::EmptyAggregate));
}

#[test]
fn book_statistics_summarize_all_three_books() {
    let f = fixture();
    let stats = f.svc.category_price_statistics();

    assert_eq!(stats.count(), 3);
    assert!((stats.sum() - 320.0).abs() < 1e-9);
    assert_eq!(stats.min(), Some(50.0));
    assert_eq!(stats.max(), Some(150.0));
    assert!((stats.average().unwrap() - 320.0 / 3.0).abs() < 1e-9);
}

#[test]
fn product_counts_have_one_entry_per_order() {
    let f = fixture();
    let counts = f.svc.order_product_counts();

    assert_eq!(counts.len(), f.orders.len());
    for o in &f.orders {
        assert_eq!(counts[&o.id_typed()], o.product_count());
    }
}

#[test]
fn grouping_by_customer_covers_every_ordering_customer() {
    let f = fixture();
    let grouped = f.svc.orders_grouped_by_customer();

    assert_eq!(grouped.len(), 4);
    assert_eq!(grouped[&f.customers[0]].len(), 2); // Alice
    assert_eq!(grouped[&f.customers[1]].len(), 2); // Bob
    assert_eq!(grouped[&f.customers[2]].len(), 2); // Carol
    assert_eq!(grouped[&f.customers[3]].len(), 1); // Dave (empty order)
}

#[test]
fn order_totals_cover_every_order_including_the_empty_one() {
    let f = fixture();
    let totals = f.svc.order_total_by_order();

    assert_eq!(totals.len(), f.orders.len());
    assert!((totals[&f.orders[0]] - 160.0).abs() < 1e-9);
    assert_eq!(totals[&f.orders[5]], 0.0);
}

#[test]
fn names_by_category_follow_catalog_encounter_order() {
    let f = fixture();
    let names = f.svc.product_names_by_category();

    assert_eq!(
        names["Books"],
        vec!["Rust in Action", "The Pragmatic Programmer", "Domain Modelling"]
    );
    assert_eq!(names["Toys"], vec!["Wooden Train", "Puzzle"]);
    assert_eq!(names["Baby"], vec!["Stroller", "Rattle"]);
}

#[test]
fn most_expensive_per_category_matches_the_catalog() {
    let f = fixture();
    let best = f.svc.most_expensive_by_category();

    assert_eq!(best.len(), 3);
    assert_eq!(best["Books"].id_typed(), f.products[2].id_typed());
    assert_eq!(best["Toys"].id_typed(), f.products[3].id_typed());
    assert_eq!(best["Baby"].id_typed(), f.products[5].id_typed());
}
