//! End-to-end lookup, geometry, and style behavior through the façade.

use sill::{Rect, Viewport};

const PAGE: &str = r#"
    <html>
        <body>
            <header id="top" class="hero">
                <h1 class="title">Sill</h1>
            </header>
            <section id="features">
                <div class="card">One</div>
                <div class="card featured">Two</div>
                <div class="card">Three</div>
            </section>
            <svg viewBox="0 0 100 100">
                <path id="underline" d="M 10 10 L 40 50"/>
            </svg>
        </body>
    </html>
"#;

/// The fixture page behind a 1280x720 viewport over 1280x3000 content,
/// with layout boxes seeded for the header and the three cards.
fn fixture() -> Viewport {
    let _ = env_logger::builder().is_test(true).try_init();
    let viewport = Viewport::from_html(PAGE);
    viewport.with_document(|document| {
        document.window_mut().set_inner_size(1280.0, 720.0);
        document.window_mut().set_content_size(1280.0, 3000.0);
    });

    let header = viewport.element("#top").expect("fixture has a header");
    viewport.with_document(|document| {
        document.set_layout_box(header, Rect::new(0.0, 100.0, 1280.0, 400.0));
    });
    for (index, card) in viewport.elements(".card").iter().enumerate() {
        let top = 600.0 + 220.0 * index as f32;
        viewport.with_document(|document| {
            document.set_layout_box(card, Rect::new(40.0, top, 420.0, 200.0));
        });
    }
    viewport
}

#[test]
fn test_lookup_by_selector_and_handle() {
    let viewport = fixture();
    let header = viewport.element("#top").expect("header resolves");

    assert_eq!(viewport.element(header), Some(header));
    assert_eq!(viewport.elements("header.hero").first(), Some(header));
    assert_eq!(viewport.elements(".card").len(), 3);
    assert_eq!(viewport.element("nav"), None);
    assert!(viewport.elements("nav").is_empty());
}

#[test]
fn test_readers_default_when_nothing_matches() {
    let viewport = fixture();

    assert_eq!(viewport.client_rect("nav"), Rect::default());
    assert_eq!(viewport.client_top("nav"), 0.0);
    assert_eq!(viewport.client_left("nav"), 0.0);
    assert_eq!(viewport.height("nav"), 0);
    assert_eq!(viewport.width("nav"), 0);
    assert_eq!(viewport.height_center("nav"), 0.0);
    assert_eq!(viewport.path_len("nav"), 0.0);
}

#[test]
fn test_client_rect_follows_scroll() {
    let viewport = fixture();
    assert_eq!(viewport.client_top("#top"), 100.0);
    assert_eq!(viewport.client_left(".card"), 40.0);

    viewport.with_document(|document| document.window_mut().scroll_to(0.0, 250.0));
    assert_eq!(viewport.scroll_top(), 250.0);
    assert_eq!(viewport.client_top("#top"), -150.0);
    assert_eq!(viewport.client_rect("#top").height, 400.0);
}

#[test]
fn test_from_top_is_stable_under_scroll() {
    let viewport = fixture();
    assert_eq!(viewport.window_width(), 1280.0);
    assert_eq!(viewport.window_height(), 720.0);

    // Header top 100: 100 - 720 + 100.
    assert_eq!(viewport.from_top("#top"), -520);
    // Third card top 1040: 1040 - 720 + 100.
    let cards = viewport.elements(".card");
    let third = cards.get(2).expect("three cards seeded");
    assert_eq!(viewport.from_top(third), 420);

    // Scrolling moves the viewport-relative top and the scroll offset in
    // lockstep, so the trigger point stays put.
    viewport.with_document(|document| document.window_mut().scroll_to(0.0, 250.0));
    assert_eq!(viewport.from_top("#top"), -520);
    assert_eq!(viewport.from_top(third), 420);

    // An unresolved selector contributes a zero top, leaving only the
    // scroll and viewport terms.
    assert_eq!(viewport.from_top("nav"), -370);
}

#[test]
fn test_height_and_width_prefer_inline_style() {
    let viewport = fixture();

    // From the seeded 420x200 layout boxes.
    assert_eq!(viewport.width(".card"), 420);
    assert_eq!(viewport.height(".card"), 200);
    assert_eq!(viewport.width_center(".card"), 210.0);
    assert_eq!(viewport.height_center(".card"), 100.0);

    // An inline declaration wins over the layout box.
    viewport.css(".card", "height", "250px");
    assert_eq!(viewport.height(".card"), 250);

    // Values without a leading integer read as zero.
    viewport.css(".card", "width", "auto");
    assert_eq!(viewport.width(".card"), 0);
}

#[test]
fn test_hard_hidden_elements_measure_zero() {
    let viewport = fixture();
    assert_eq!(viewport.width(".card"), 420);

    // display: none removes the box, so the dimension readers fall back
    // to zero along with the client rect.
    viewport.hide(".card", false);
    assert_eq!(viewport.client_rect(".card"), Rect::default());
    assert_eq!(viewport.width(".card"), 0);
    assert_eq!(viewport.height(".card"), 0);
    assert_eq!(viewport.height_center(".card"), 0.0);

    // A soft hide keeps the layout box measurable.
    viewport.show(".card", None);
    viewport.hide(".card", true);
    assert_eq!(viewport.width(".card"), 420);
    assert_eq!(viewport.height(".card"), 200);
}

#[test]
fn test_path_len_measures_line_segments() {
    let viewport = fixture();
    let length = viewport.path_len("#underline");
    assert!((length - 50.0).abs() < 1e-3, "3-4-5 line measured {length}");

    // Resolvable but not a path element.
    assert_eq!(viewport.path_len(".card"), 0.0);
}

#[test]
fn test_css_writes_inline_style_on_the_first_match() {
    let viewport = fixture();
    let header = viewport.element("#top").expect("header resolves");

    assert_eq!(viewport.css("#top", "Background-Color", "tan"), Some(header));
    let stored = viewport.with_document(|document| {
        document
            .element(header)
            .and_then(|element| element.style("background-color"))
            .map(str::to_owned)
    });
    assert_eq!(stored.as_deref(), Some("tan"));

    assert_eq!(viewport.css("nav", "color", "red"), None);
}

#[test]
fn test_hide_show_cycle() {
    let viewport = fixture();
    let header = viewport.element("#top").expect("header resolves");
    let computed = |property: &str| {
        viewport.with_document(|document| document.computed_value(header, property))
    };

    // A hard hide removes the element from geometry entirely.
    assert_eq!(viewport.hide("#top", false), Some(header));
    assert_eq!(computed("display").as_deref(), Some("none"));
    assert_eq!(viewport.client_rect("#top"), Rect::default());

    assert_eq!(viewport.show("#top", None), Some(header));
    assert_eq!(computed("display").as_deref(), Some("block"));
    assert_eq!(computed("visibility").as_deref(), Some("visible"));
    assert_eq!(viewport.client_top("#top"), 100.0);

    // A soft hide keeps the box.
    assert_eq!(viewport.hide("#top", true), Some(header));
    assert_eq!(computed("visibility").as_deref(), Some("hidden"));
    assert_eq!(computed("display").as_deref(), Some("block"));
    assert_eq!(viewport.client_top("#top"), 100.0);

    assert_eq!(viewport.show("#top", Some("flex")), Some(header));
    assert_eq!(computed("display").as_deref(), Some("flex"));
    assert_eq!(computed("visibility").as_deref(), Some("visible"));
}

#[tokio::test]
async fn test_class_batches_touch_every_match() {
    let viewport = fixture();

    let affected = viewport.add_class(".card", "lit").await;
    assert_eq!(affected.len(), 3);
    assert_eq!(viewport.elements(".card.lit").len(), 3);

    let removed = viewport.remove_class(".featured", "lit").await;
    assert_eq!(removed.len(), 1);
    assert_eq!(viewport.elements(".card.lit").len(), 2);

    // Toggling flips per element: two lose the class, one regains it.
    let toggled = viewport.toggle_class(".card", "lit").await;
    assert_eq!(toggled.len(), 3);
    assert_eq!(viewport.elements(".card.lit").len(), 1);
    assert_eq!(viewport.elements(".featured.lit").len(), 1);

    let missed = viewport.add_class("nav", "lit").await;
    assert!(missed.is_empty());
}

#[tokio::test]
async fn test_class_mutation_lands_before_the_future_resolves() {
    let viewport = fixture();

    let pending = viewport.add_class(".card", "lit");
    assert_eq!(viewport.elements(".card.lit").len(), 3);

    let affected = pending.await;
    assert_eq!(affected.len(), 3);
}
