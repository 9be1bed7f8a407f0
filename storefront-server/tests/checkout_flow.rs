//! In-process checkout: builder → persisted cart → order repository

use plate_engine::{Cart, FileStorage, PlateBuilder, PlateUpdate, place_order};
use shared::models::{CustomerDetails, FixingKit, OrderStatus, PlatePosition, PlateStyle};
use storefront_server::OrderRepository;
use storefront_server::orders::compute_stats;

fn customer() -> CustomerDetails {
    CustomerDetails {
        customer_name: "Sam Driver".into(),
        customer_email: "sam@example.com".into(),
        address: "1 High St".into(),
        city: "Leeds".into(),
        postal_code: "LS1 1AA".into(),
        ..Default::default()
    }
}

#[test]
fn builder_to_order_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let repo = OrderRepository::new();

    // Session 1: configure two plate sets and add them to the cart
    {
        let mut cart = Cart::load(FileStorage::new(temp.path()));

        let mut builder = PlateBuilder::new();
        builder.input_reg("ab12 cde");
        builder.apply(PlateUpdate::Style(PlateStyle::ThreeD));
        builder.apply(PlateUpdate::FixingKit(FixingKit::Sticky));
        builder.submit(&mut cart).unwrap();

        let mut builder = PlateBuilder::new();
        builder.input_reg("x1");
        builder.apply(PlateUpdate::Include(PlatePosition::Front, false));
        builder.submit(&mut cart).unwrap();

        assert_eq!(cart.subtotal(), 85.0);
    }

    // Session 2: the cart is rehydrated from disk and checked out
    let mut cart = Cart::load(FileStorage::new(temp.path()));
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.items()[0].config.style, PlateStyle::ThreeD);

    let order = place_order(&mut cart, customer(), &repo).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 85.0);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[1].reg.as_deref(), Some("X1"));
    assert!(cart.is_empty());

    // The emptied cart is what the next session sees
    assert!(Cart::load(FileStorage::new(temp.path())).is_empty());

    let stats = compute_stats(&repo.find_all());
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.total_earnings, 85.0);
}

#[test]
fn rejected_order_keeps_cart() {
    let temp = tempfile::tempdir().unwrap();
    let repo = OrderRepository::new();

    let mut cart = Cart::load(FileStorage::new(temp.path()));
    let mut builder = PlateBuilder::new();
    builder.input_reg("X1");
    builder.submit(&mut cart).unwrap();

    let no_email = CustomerDetails {
        customer_email: String::new(),
        ..customer()
    };
    assert!(place_order(&mut cart, no_email, &repo).is_err());
    assert_eq!(cart.len(), 1);
    assert!(repo.is_empty());

    assert_eq!(Cart::load(FileStorage::new(temp.path())).len(), 1);
}
