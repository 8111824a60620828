//! End-to-end scenarios from commerce API payloads.

use serde_json::json;
use turbo_variants::prelude::*;

fn product(value: serde_json::Value) -> Product {
    Product::from_value(value).unwrap()
}

#[test]
fn test_flat_product_end_to_end() {
    let p = product(json!({"price": 999, "countInStock": 5, "images": ["a.jpg"]}));

    assert_eq!(resolve_thumbnail(&p, None), "a.jpg");
    assert_eq!(resolve_price(&p, Context::default()), 999.0);
    assert_eq!(resolve_stock(&p, Context::default()), 5);
    assert!(resolve_available_colors(&p).is_empty());
}

#[test]
fn test_empty_object_resolves_to_defaults() {
    let p = product(json!({}));
    let values = derive(&p, Context::default());

    assert_eq!(values.thumbnail, PLACEHOLDER_IMAGE);
    assert_eq!(values.price, 0.0);
    assert_eq!(values.stock, 0);
    assert!(values.colors.is_empty());
}

#[test]
fn test_garbage_fields_never_produce_invalid_numbers() {
    let payloads = [
        json!({"price": "NaN", "countInStock": "lots"}),
        json!({"price": -3, "countInStock": -1}),
        json!({"price": null, "variants": [{"sizes": [{"price": "x", "stock": true}]}]}),
        json!({"variants": "none", "colors": 5, "images": [null]}),
        json!({"price": 1e308, "countInStock": 1e300}),
    ];

    for payload in payloads {
        let p = product(payload);
        for ctx in [Context::default(), Context::Detail(&Selection::new())] {
            let price = resolve_price(&p, ctx);
            assert!(price.is_finite() && price >= 0.0);
            let _stock: u64 = resolve_stock(&p, ctx);
            assert!(!resolve_thumbnail(&p, ctx.selection()).is_empty());
        }
    }
}

#[test]
fn test_color_dedup_across_flat_and_variant_colors() {
    let p = product(json!({
        "colors": ["Red", "Blue"],
        "variants": [{"color": "Blue"}, {"color": "Green"}]
    }));
    assert_eq!(resolve_available_colors(&p), vec!["Red", "Blue", "Green"]);
}

#[test]
fn test_no_variants_no_colors_means_no_colors() {
    let p = product(json!({"title": "Mug", "images": ["mug.jpg"]}));
    assert!(resolve_available_colors(&p).is_empty());
    assert!(color_swatches(&p).is_empty());
}

#[test]
fn test_context_free_price_uses_first_variant_with_sizes() {
    let p = product(json!({
        "variants": [{"sizes": []}, {"sizes": [{"size": "M", "price": 500}]}]
    }));
    assert_eq!(resolve_price(&p, Context::default()), 500.0);
}

#[test]
fn test_stock_card_sum_versus_detail_size() {
    let p = product(json!({
        "variants": [{"color": "Red", "sizes": [{"size": "S", "stock": 2}, {"size": "M", "stock": 3}]}]
    }));

    assert_eq!(resolve_stock(&p, Context::default()), 5);

    let selection = Selection::new().with_size("S");
    assert_eq!(resolve_stock(&p, Context::Detail(&selection)), 2);
}

#[test]
fn test_sold_out_color_swatch_is_disabled() {
    let p = product(json!({
        "variants": [
            {"color": "Red", "sizes": [{"size": "S", "stock": 0}, {"size": "M", "stock": 0}]},
            {"color": "Blue", "countInStock": 2}
        ]
    }));

    assert_eq!(resolve_variant_stock(&p, "Red"), 0);
    let swatches = color_swatches(&p);
    assert!(swatches[0].disabled);
    assert!(!swatches[1].disabled);
}

#[test]
fn test_every_surface_agrees_on_listing_values() {
    let p = product(json!({
        "_id": "65a0f",
        "title": "Hoodie",
        "slug": "hoodie",
        "images": ["hoodie.jpg"],
        "variants": [
            {"color": "Black", "images": ["black.jpg"], "sizes": [{"size": "M", "price": 1499, "stock": 8}]},
            {"color": "Grey", "img": "grey.jpg", "countInStock": 4}
        ]
    }));
    let config = DisplayConfig::default();

    let card = ProductCard::build(&p, &CardSelection::new(), &config);
    let row = AdminRow::build(&p, &config);
    let values = derive(&p, Context::default());

    assert_eq!(card.thumbnail, values.thumbnail);
    assert_eq!(row.thumbnail, values.thumbnail);
    assert_eq!(card.price_text, row.price_text);
    assert_eq!(card.stock, 12);
    assert_eq!(row.stock, 12);
    assert_eq!(row.id.as_deref(), Some("65a0f"));
}

#[test]
fn test_page_walkthrough() {
    let p = product(json!({
        "title": "Hoodie",
        "variants": [
            {"color": "Black", "images": ["black.jpg"], "sizes": [
                {"size": "M", "price": 1499, "stock": 8},
                {"size": "L", "price": 1599, "stock": 1}
            ]},
            {"color": "Grey", "img": "grey.jpg", "countInStock": 4}
        ]
    }));
    let config = DisplayConfig::default();
    let mut selection = DetailSelection::new(&p);

    let page = ProductPage::build(&p, &selection, &config);
    assert_eq!(page.thumbnail, "black.jpg");
    assert_eq!(page.price, 1499.0);
    assert_eq!(page.stock, 8);

    selection.select_size("L");
    let page = ProductPage::build(&p, &selection, &config);
    assert_eq!(page.price, 1599.0);
    assert_eq!(page.status, StockStatus::Low);

    selection.toggle_color(&p, "Grey");
    let page = ProductPage::build(&p, &selection, &config);
    assert_eq!(page.variant_index, 1);
    assert_eq!(page.thumbnail, "grey.jpg");
    assert_eq!(page.stock, 4);
    assert!(page.sizes.is_empty());
    assert_eq!(page.price, 0.0);
}

#[test]
fn test_catalog_page_decoding() {
    let page = parse_catalog(
        r#"{"products": [{"title": "A", "price": "10"}, "oops", {"title": "B"}], "page": 1, "pages": 3}"#,
    )
    .unwrap();

    assert_eq!(page.products.len(), 2);
    assert_eq!(page.pages, 3);
    assert_eq!(resolve_price(&page.products[0], Context::default()), 10.0);
}

#[test]
fn test_repeated_resolution_is_stable() {
    let p = product(json!({
        "colors": ["Red"],
        "variants": [{"color": "Red", "images": ["r.jpg"], "sizes": [{"size": "M", "price": 5, "stock": 1}]}]
    }));
    let selection = Selection::new().with_color("Red").with_size("M");

    for ctx in [Context::default(), Context::Listing(Some(&selection)), Context::Detail(&selection)] {
        assert_eq!(derive(&p, ctx), derive(&p, ctx));
    }
}
