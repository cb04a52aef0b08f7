use super::*;

#[test]
fn demo_deck_is_valid() {
    let show = Slideshow::demo();
    show.validate().unwrap();
    assert_eq!(show.len(), 5);
    assert_eq!(show.slides[3].title, "Ferris Wheel");
    assert!(show.slides[1].content.len() > show.slides[0].content.len());
}

#[test]
fn ids_must_match_position() {
    let mut show = Slideshow::demo();
    show.slides.swap(1, 2);
    let err = show.validate().unwrap_err();
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn empty_slideshow_is_rejected() {
    let show = Slideshow {
        config: SlideshowConfig::default(),
        slides: vec![],
    };
    assert!(show.is_empty());
    assert!(show.validate().is_err());
}

#[test]
fn margin_must_stay_below_region_height() {
    let mut show = Slideshow::demo();
    show.config.region_margin_ratio = 0.75;
    let err = show.validate().unwrap_err();
    assert!(matches!(err, ScrollfadeError::Validation(_)));
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn negative_row_gap_is_rejected() {
    let mut show = Slideshow::demo();
    show.config.row_gap_px = -1.0;
    assert!(show.validate().is_err());
}

#[test]
fn image_source_is_opaque() {
    let mut show = Slideshow::demo();
    for source in [
        "/images/flowers.jpg",
        "https://cdn.example.com/flowers.jpg",
        "../shared/flowers.jpg",
    ] {
        show.slides[0].image.source = source.to_string();
        show.validate().unwrap();
    }
}

#[test]
fn blank_image_source_is_rejected() {
    let mut show = Slideshow::demo();
    show.slides[2].image.source = "  ".to_string();
    let err = show.validate().unwrap_err();
    assert!(err.to_string().contains("slide 2 image.source"));
}

#[test]
fn demo_body_ends_with_repeated_opening() {
    let show = Slideshow::demo();
    assert!(
        show.slides[0]
            .content
            .ends_with("sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.")
    );
    assert!(show.slides[0].content.starts_with("Lorem ipsum"));
    assert_eq!(show.slides[1].content, format!("{0} {0}", show.slides[0].content));
}

#[test]
fn config_fields_default_when_missing() {
    let json = r#"{
        "config": { "row_gap_px": 32.0 },
        "slides": [
            { "id": 0, "title": "Only", "content": "", "image": { "source": "a.jpg" } }
        ]
    }"#;
    let show = Slideshow::from_json(json).unwrap();
    assert_eq!(show.config.row_gap_px, 32.0);
    assert_eq!(show.config.region_height_ratio, 0.75);
    assert_eq!(show.config.band, ViewportBand::default());
    assert_eq!(show.slides[0].image.alt, "");
}

#[test]
fn from_json_reports_parse_errors_as_serde() {
    let err = Slideshow::from_json("{").unwrap_err();
    assert!(matches!(err, ScrollfadeError::Serde(_)));
}
