use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use shopfront_catalog::Product;
use shopfront_core::Entity;
use shopfront_customers::Customer;
use shopfront_infra::Repository;
use shopfront_orders::{Order, OrderId};

use crate::statistics::PriceStatistics;

const BOOKS: &str = "Books";
const BABY: &str = "Baby";
const TOYS: &str = "Toys";

const PREMIUM_PRICE_FLOOR: f64 = 100.0;
const TOY_DISCOUNT_FACTOR: f64 = 0.9;
const RECENT_ORDER_LIMIT: usize = 3;
const REPORT_TIER: u8 = 2;

const fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date literal"),
    }
}

/// Tier-2 purchase window, inclusive on both ends.
const TIER_WINDOW_START: NaiveDate = fixed_date(2021, 2, 1);
const TIER_WINDOW_END: NaiveDate = fixed_date(2021, 4, 1);

/// Revenue month, half-open: [start, end).
const REVENUE_MONTH_START: NaiveDate = fixed_date(2021, 2, 1);
const REVENUE_MONTH_END: NaiveDate = fixed_date(2021, 3, 1);

/// The day-level report date used by the order-detail and average queries.
const REPORT_DATE: NaiveDate = fixed_date(2021, 3, 15);

/// Query-layer error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An average was requested over an empty product set (no well-defined
    /// mean). Surfaces directly to the caller; never recovered internally.
    #[error("average requested over an empty product set")]
    EmptyAggregate,
}

/// Stateless query service: one operation per business question.
///
/// Each operation obtains a full snapshot from the repositories, applies a
/// fixed in-memory pipeline, and returns a derived value. No operation
/// mutates repository data or depends on another operation's result.
#[derive(Debug)]
pub struct QueryService<P, O> {
    products: P,
    orders: O,
}

impl<P, O> QueryService<P, O>
where
    P: Repository<Product>,
    O: Repository<Order>,
{
    pub fn new(products: P, orders: O) -> Self {
        Self { products, orders }
    }

    /// Products in the "Books" category priced above 100.
    pub fn products_by_category_above_price(&self) -> Vec<Product> {
        self.products
            .find_all()
            .into_iter()
            .filter(|p| p.category_matches(BOOKS))
            .filter(|p| p.price() > PREMIUM_PRICE_FLOOR)
            .collect()
    }

    /// Orders containing at least one "Baby" product.
    pub fn orders_containing_category(&self) -> Vec<Order> {
        self.orders
            .find_all()
            .into_iter()
            .filter(|o| o.contains_category(BABY))
            .collect()
    }

    /// "Toys" products with a 10% discount applied; returns new instances,
    /// the source collection is unaffected.
    pub fn discounted_by_category(&self) -> Vec<Product> {
        self.products
            .find_all()
            .into_iter()
            .filter(|p| p.category_matches(TOYS))
            .map(|p| p.discounted(TOY_DISCOUNT_FACTOR))
            .collect()
    }

    /// Distinct products ordered by tier-2 customers between 2021-02-01 and
    /// 2021-04-01, both ends inclusive. First-encounter order is kept.
    pub fn products_ordered_by_tier_in_range(&self) -> Vec<Product> {
        let flattened = self
            .orders
            .find_all()
            .into_iter()
            .filter(|o| o.customer().tier() == REPORT_TIER)
            .filter(|o| {
                o.order_date() >= TIER_WINDOW_START && o.order_date() <= TIER_WINDOW_END
            })
            .flat_map(|o| o.products().to_vec());

        dedup_by_id(flattened)
    }

    /// The cheapest "Books" product, if any.
    pub fn cheapest_in_category(&self) -> Option<Product> {
        self.products
            .find_all()
            .into_iter()
            .filter(|p| p.category_matches(BOOKS))
            .min_by(|a, b| a.price().total_cmp(&b.price()))
    }

    /// The three most recently placed orders, newest first. Returns fewer
    /// when the repository holds fewer; ordering among equal dates is stable.
    pub fn most_recent_orders(&self) -> Vec<Order> {
        let mut orders = self.orders.find_all();
        orders.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
        orders.truncate(RECENT_ORDER_LIMIT);
        orders
    }

    /// Distinct products from orders placed on 2021-03-15, reporting each
    /// matched order to the default diagnostic stream before returning.
    pub fn orders_on_date_with_products(&self) -> Vec<Product> {
        self.orders_on_date_with_products_inspected(|order| {
            info!(
                order_id = %order.id_typed(),
                order_date = %order.order_date(),
                product_count = order.product_count(),
                "matched order"
            );
        })
    }

    /// Same as [`orders_on_date_with_products`](Self::orders_on_date_with_products),
    /// with the side effect injected: `inspect` runs once per matched order
    /// before the value is returned, keeping the computation itself pure.
    pub fn orders_on_date_with_products_inspected(
        &self,
        mut inspect: impl FnMut(&Order),
    ) -> Vec<Product> {
        let mut matched = Vec::new();
        for order in self.orders.find_all() {
            if order.order_date() == REPORT_DATE {
                inspect(&order);
                matched.extend(order.products().iter().cloned());
            }
        }
        dedup_by_id(matched)
    }

    /// Lump sum of all product prices across orders placed in Feb 2021
    /// (half-open month window). 0.0 when no orders match.
    pub fn total_revenue_in_month(&self) -> f64 {
        self.orders
            .find_all()
            .into_iter()
            .filter(|o| {
                o.order_date() >= REVENUE_MONTH_START && o.order_date() < REVENUE_MONTH_END
            })
            .map(|o| o.product_total())
            .sum()
    }

    /// Average product price across orders placed on 2021-03-15.
    ///
    /// Fails with [`QueryError::EmptyAggregate`] when no qualifying product
    /// exists (no orders on the date, or only orders with empty product
    /// lists).
    pub fn average_order_value_on_date(&self) -> Result<f64, QueryError> {
        let prices: Vec<f64> = self
            .orders
            .find_all()
            .into_iter()
            .filter(|o| o.order_date() == REPORT_DATE)
            .flat_map(|o| o.products().iter().map(Product::price).collect::<Vec<_>>())
            .collect();

        if prices.is_empty() {
            return Err(QueryError::EmptyAggregate);
        }
        Ok(prices.iter().sum::<f64>() / prices.len() as f64)
    }

    /// Sum, average, max, min, and count over "Books" prices.
    pub fn category_price_statistics(&self) -> PriceStatistics {
        self.products
            .find_all()
            .into_iter()
            .filter(|p| p.category_matches(BOOKS))
            .map(|p| p.price())
            .collect()
    }

    /// Product count per order id; orders with no products appear with 0.
    pub fn order_product_counts(&self) -> HashMap<OrderId, usize> {
        self.orders
            .find_all()
            .into_iter()
            .map(|o| (o.id_typed(), o.product_count()))
            .collect()
    }

    /// Orders grouped by customer. Customers with no orders do not appear.
    pub fn orders_grouped_by_customer(&self) -> HashMap<Customer, Vec<Order>> {
        let mut grouped: HashMap<Customer, Vec<Order>> = HashMap::new();
        for order in self.orders.find_all() {
            grouped.entry(order.customer().clone()).or_default().push(order);
        }
        grouped
    }

    /// Product price total per order; every order appears, empty ones with 0.0.
    pub fn order_total_by_order(&self) -> HashMap<Order, f64> {
        self.orders
            .find_all()
            .into_iter()
            .map(|o| {
                let total = o.product_total();
                (o, total)
            })
            .collect()
    }

    /// Product names grouped by (raw) category label, keeping per-category
    /// encounter order; duplicate names are allowed.
    pub fn product_names_by_category(&self) -> HashMap<String, Vec<String>> {
        let mut names: HashMap<String, Vec<String>> = HashMap::new();
        for product in self.products.find_all() {
            names
                .entry(product.category().to_string())
                .or_default()
                .push(product.name().to_string());
        }
        names
    }

    /// Most expensive product per (raw) category label. Every category with
    /// at least one product maps to a value by construction; ties resolve to
    /// a single product of that category.
    pub fn most_expensive_by_category(&self) -> HashMap<String, Product> {
        let mut best: HashMap<String, Product> = HashMap::new();
        for product in self.products.find_all() {
            match best.get(product.category()) {
                Some(current) if current.price() >= product.price() => {}
                _ => {
                    best.insert(product.category().to_string(), product);
                }
            }
        }
        best
    }
}

/// Drop later occurrences of an entity id, keeping first-encounter order.
fn dedup_by_id<E: Entity>(items: impl IntoIterator<Item = E>) -> Vec<E> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id()))
        .collect()
}
