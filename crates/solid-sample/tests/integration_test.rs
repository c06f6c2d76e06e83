use demo_framework::{Console, DemoError};
use solid_sample::dont_repeat_yourself::{register_user, validate_user_data, UserData};
use solid_sample::lifecycle::DemoCatalog;
use solid_sample::liskov_substitution::{
    start_all, Bicycle, Car, NonEngineVehicle, Vehicle, VehicleError,
};
use solid_sample::separation_of_concerns::{
    OrderService, PaymentInfo, PaymentService, PaymentStatus, Product, ProductId, ProductService,
};
use solid_sample::single_responsibility::{InvoicePrinter, Order, OrderItem};

/// Full run of every registered demo, checked line by line.
#[test]
fn test_full_demo_run() {
    let catalog = DemoCatalog::new().expect("Failed to build catalog");
    let (console, transcript) = Console::recording();

    let ran = catalog.run_all(&console).expect("Demo run failed");

    assert_eq!(ran, 8);
    assert_eq!(
        transcript.lines(),
        vec![
            "== dependency-injection: Dependencies are supplied from outside, not built inside ==",
            "Sending email: Hello via Email!",
            "Sending SMS: Hello via SMS!",
            "== dependency-inversion: High-level code depends on an abstraction, not on concrete services ==",
            "Sending email: Hello via Email!",
            "Sending SMS: Hello via SMS!",
            "== dont-repeat-yourself: Repeated checks live in one reusable function each ==",
            "Please log in",
            "Accessing dashboard",
            "Admin privileges required",
            "Accessing admin panel",
            "User registered",
            "Invalid user data",
            "== interface-segregation: Devices implement only the small interfaces they need ==",
            "Light turned on",
            "Light brightness set to 75",
            "Thermostat turned on",
            "Temperature set to 22 degrees",
            "== liskov-substitution: Any vehicle can stand in for Vehicle without breaking the caller ==",
            "Car engine started",
            "== open-closed: New payment methods extend the system without modifying it ==",
            "Processing credit card payment of $100",
            "Processing PayPal payment of $150",
            "== separation-of-concerns: Products, orders, payments and users are independent services ==",
            "Processing payment for order: order_1 (2 x Laptop @ $1200, total $2400, status pending)",
            "== single-responsibility: Order data, invoice printing and payment are separate types ==",
            "Invoice:",
            "Laptop: $1200",
            "Mouse: $50",
            "Total: $1250",
            "Processing payment of $1250 with method Credit Card",
        ]
    );
}

#[test]
fn test_catalog_names_and_lookup() {
    let catalog = DemoCatalog::new().unwrap();
    let runner = catalog.runner();

    assert_eq!(runner.len(), 8);
    assert_eq!(runner.names()[0], "dependency-injection");
    assert_eq!(runner.names()[7], "single-responsibility");

    let (console, transcript) = Console::recording();
    let result = runner.run("visitor", &console);
    assert!(matches!(result, Err(DemoError::NotFound(_))));
    assert!(transcript.is_empty());
}

/// Items built from the same JSON literals as the order scenario.
#[test]
fn test_invoice_from_json_items() {
    let items: Vec<OrderItem> = serde_json::from_str(
        r#"[{"name": "Laptop", "price": 1200}, {"name": "Mouse", "price": 50}]"#,
    )
    .unwrap();
    let order = Order::new(items);
    assert_eq!(order.total, 1250.0);

    let (console, transcript) = Console::recording();
    InvoicePrinter::new(console).print_invoice(&order);

    assert_eq!(
        transcript.lines(),
        vec!["Invoice:", "Laptop: $1200", "Mouse: $50", "Total: $1250"]
    );
}

#[test]
fn test_missing_password_takes_invalid_path() {
    let user_data: UserData = serde_json::from_str(r#"{"username": "a"}"#).unwrap();
    assert!(!validate_user_data(&user_data));

    let (console, transcript) = Console::recording();
    register_user(&console, &user_data);

    assert_eq!(transcript.lines(), vec!["Invalid user data"]);
    assert!(!transcript.contains("User registered"));
}

/// A key sent as null still counts as present.
#[test]
fn test_null_password_is_still_present() {
    let user_data: UserData =
        serde_json::from_str(r#"{"username": "a", "password": null}"#).unwrap();
    assert_eq!(user_data.password, Some(None));
    assert!(validate_user_data(&user_data));

    let (console, transcript) = Console::recording();
    register_user(&console, &user_data);

    assert_eq!(transcript.lines(), vec!["User registered"]);
}

/// The violating vehicle stops the sequence; the no-op vehicle does not.
#[test]
fn test_liskov_policies() {
    let (console, transcript) = Console::recording();

    let violating: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new(console.clone())),
        Box::new(Bicycle),
        Box::new(Car::new(console.clone())),
    ];
    assert_eq!(start_all(&violating), Err(VehicleError::NoEngine));
    assert_eq!(transcript.take(), vec!["Car engine started"]);

    let substitutable: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new(console.clone())),
        Box::new(NonEngineVehicle),
        Box::new(Car::new(console.clone())),
    ];
    assert_eq!(start_all(&substitutable), Ok(()));
    assert_eq!(
        transcript.lines(),
        vec!["Car engine started", "Car engine started"]
    );
}

/// Separation of concerns end to end, with the product loaded from JSON.
#[test]
fn test_ecommerce_flow() {
    let product: Product =
        serde_json::from_str(r#"{"id": 1, "name": "Laptop", "price": 1200}"#).unwrap();
    let payment_info: PaymentInfo =
        serde_json::from_str(r#"{"card_number": "1234-5678-9012-3456"}"#).unwrap();

    let (console, transcript) = Console::recording();
    let product_service = ProductService::new();
    let mut order_service = OrderService::new(product_service.clone());
    let payment_service = PaymentService::new(console);

    product_service.add_product(product).unwrap();
    let order = order_service.create_order(ProductId(1), 3).unwrap();
    let status = payment_service.process_payment(&order, &payment_info);

    assert_eq!(order.total, 3600.0);
    assert_eq!(status, PaymentStatus::Successful);
    assert_eq!(status.to_string(), "Payment Successful");
    assert_eq!(
        transcript.lines(),
        vec!["Processing payment for order: order_1 (3 x Laptop @ $1200, total $3600, status pending)"]
    );
}
