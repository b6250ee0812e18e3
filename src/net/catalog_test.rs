use super::*;

#[test]
fn embedded_catalog_has_six_products_in_id_order() {
    let seed = parse_embedded().unwrap();
    let ids = seed.products.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn embedded_catalog_has_three_hero_images() {
    assert_eq!(hero_images(), vec!["sapphire-blue.png", "black-yellow.png", "classic.png"]);
}

#[test]
fn product_urls_are_external() {
    let seed = parse_embedded().unwrap();
    assert!(seed.products.iter().all(|p| p.url.starts_with("https://")));
}

#[test]
fn duplicate_ids_are_rejected() {
    let raw = r#"{
        "products": [
            { "id": 1, "name": "A", "url": "https://a", "image": "a.png", "tag": "x" },
            { "id": 1, "name": "B", "url": "https://b", "image": "b.png", "tag": "y" }
        ],
        "hero_images": ["a.png"]
    }"#;
    assert!(matches!(parse_catalog(raw), Err(CatalogError::DuplicateId(1))));
}

#[test]
fn empty_product_list_is_rejected() {
    let raw = r#"{ "products": [], "hero_images": ["a.png"] }"#;
    assert!(matches!(parse_catalog(raw), Err(CatalogError::Empty)));
}

#[test]
fn missing_hero_images_are_rejected() {
    let raw = r#"{
        "products": [{ "id": 1, "name": "A", "url": "https://a", "image": "a.png", "tag": "x" }],
        "hero_images": []
    }"#;
    assert!(matches!(parse_catalog(raw), Err(CatalogError::NoHeroImages)));
}

#[test]
fn malformed_document_is_rejected() {
    let err = parse_catalog("[]").unwrap_err();
    assert!(err.to_string().starts_with("malformed catalog data"));
}
