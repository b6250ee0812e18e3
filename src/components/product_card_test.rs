use super::*;

#[test]
fn new_card_shows_product_image() {
    assert_eq!(CardImage::default().src("classic.png"), "classic.png");
}

#[test]
fn load_error_swaps_in_placeholder_once() {
    let mut image = CardImage::default();
    assert!(image.on_error());
    assert_eq!(image.src("classic.png"), PLACEHOLDER_IMAGE);
    assert!(!image.on_error());
}

#[test]
fn hover_retries_only_when_placeholder_shown() {
    let mut image = CardImage::default();
    assert!(!image.on_hover());
    image.on_error();
    assert!(image.on_hover());
    assert_eq!(image.src("classic.png"), "classic.png");
}

#[test]
fn placeholder_is_inline_svg() {
    assert!(PLACEHOLDER_IMAGE.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn view_label_names_product() {
    assert_eq!(view_label("5PS Classic"), "View 5PS Classic product page");
}
