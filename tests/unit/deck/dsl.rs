use super::*;

#[test]
fn builder_assigns_ids_in_order() {
    let show = SlideshowBuilder::new()
        .row_gap(16.0)
        .slide("One", "first", "one.jpg")
        .slide("Two", "second", "two.jpg")
        .build()
        .unwrap();
    assert_eq!(show.slides[0].id, 0);
    assert_eq!(show.slides[1].id, 1);
    assert_eq!(show.slides[1].image.alt, "two");
    assert_eq!(show.config.row_gap_px, 16.0);
}

#[test]
fn builder_validates_region_ratios() {
    let err = SlideshowBuilder::new()
        .regions(0.5, 0.6)
        .slide("One", "first", "one.jpg")
        .build();
    assert!(err.is_err());
}

#[test]
fn builder_without_slides_fails() {
    assert!(SlideshowBuilder::new().build().is_err());
}

#[test]
fn builder_sets_band() {
    let show = SlideshowBuilder::new()
        .band(0.4, 0.6)
        .slide("One", "first", "one.jpg")
        .build()
        .unwrap();
    assert_eq!(show.config.band.start, 0.4);
    assert_eq!(show.config.band.end, 0.6);
}
