use std::fs;

use slideshow_widget::config::PageConfig;
use slideshow_widget::page::render_page;
use slideshow_widget::{Control, Document, ErrorKind, ImageSource, SlideshowRegistry};

#[test]
fn two_widgets_on_one_page_step_independently() {
    let mut doc = Document::new();
    doc.add_container("left");
    doc.add_container("right");

    let mut registry = SlideshowRegistry::new();
    registry.initialize(&mut doc, "left", &ImageSource::new("l_", "jpg"), 1, 3).unwrap();
    registry.initialize(&mut doc, "right", &ImageSource::new("r_", "png"), 0, 9).unwrap();

    for _ in 0..4 {
        let next = doc.click("left", Control::Next).unwrap();
        registry.dispatch(&mut doc, &next).unwrap();
    }
    let previous = doc.click("right", Control::Previous).unwrap();
    registry.dispatch(&mut doc, &previous).unwrap();

    assert_eq!(doc.counter_text("left"), Some("Slide 2 of 1-3"));
    assert_eq!(doc.image_source("left"), Some("l_2.jpg"));
    assert_eq!(doc.counter_text("right"), Some("Slide 9 of 0-9"));
    assert_eq!(doc.image_source("right"), Some("r_9.png"));
}

#[test]
fn every_state_stays_within_range() {
    let mut doc = Document::new();
    doc.add_container("w");
    let source = ImageSource::new("s", "jpg");
    let mut registry = SlideshowRegistry::new();
    registry.initialize(&mut doc, "w", &source, -2, 2).unwrap();

    for i in 0..50 {
        if i % 3 == 0 {
            registry.retreat(&mut doc, "w", &source).unwrap();
        } else {
            registry.advance(&mut doc, "w", &source).unwrap();
        }
        let state = registry.state("w").unwrap();
        assert!(state.first() <= state.current() && state.current() <= state.last());
    }
}

#[test]
fn missing_container_is_reported() {
    let mut doc = Document::new();
    let mut registry = SlideshowRegistry::new();
    let err = registry
        .initialize(&mut doc, "nowhere", &ImageSource::new("s", "jpg"), 1, 2)
        .unwrap_err();
    assert_eq!(err, ErrorKind::MissingContainer("nowhere".to_string()));
    assert_eq!(err.to_string(), "no container element with id `nowhere`");
}

#[test]
fn page_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(
        &path,
        r#"
title = "Cantilever pushover"

[[widget]]
id = "push"
base_uri = "_static/slides/slide_"
ext = "jpg"
start = 1
end = 4
"#,
    )
    .unwrap();

    let config = PageConfig::load(&path).unwrap();
    let html = render_page(&config).unwrap();
    assert!(html.contains(r#"<img id="push_img" src="_static/slides/slide_1.jpg""#));
    assert!(html.contains(r#"<span id="push_ctr" style="margin: 0 20px;">Slide 1 of 1-4</span>"#));
    assert!(html.contains("function prevSlide"));
    assert!(html.contains(r#"currentSlide["push"] = 1; firstSlide["push"] = 1; lastSlide["push"] = 4;"#));
}

#[test]
fn unreadable_config_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = PageConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
