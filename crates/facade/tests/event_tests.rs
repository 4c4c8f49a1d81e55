//! Listener management, dispatch, and vendor-prefixed end events.

use sill::{CssFeature, Event, EventCallback, VendorPrefix, Viewport};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const PAGE: &str = r#"
    <html>
        <body>
            <header id="top">Sill</header>
            <nav>
                <a class="link" href="/one">One</a>
                <a class="link" href="/two">Two</a>
            </nav>
        </body>
    </html>
"#;

fn fixture() -> Viewport {
    let _ = env_logger::builder().is_test(true).try_init();
    Viewport::from_html(PAGE)
}

/// A callback counting its invocations through the shared counter.
fn counting(counter: &Arc<AtomicUsize>) -> EventCallback {
    let counter = Arc::clone(counter);
    Arc::new(move |_event: &Event| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_add_listener_attaches_to_every_match() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));

    let attached = viewport.add_listener(".link", "click", counting(&counter));
    assert_eq!(attached.len(), 2);

    for link in &attached {
        assert_eq!(viewport.dispatch(link, "click"), 1);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    // Selector dispatch targets the first match only.
    assert_eq!(viewport.dispatch(".link", "click"), 1);
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[test]
fn test_remove_listener_needs_the_registered_handle() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));
    let callback = counting(&counter);
    viewport.add_listener(".link", "click", Arc::clone(&callback));

    // A fresh closure with the same shape is a different identity.
    viewport.remove_listener(".link", "click", &counting(&counter));
    assert_eq!(viewport.dispatch(".link", "click"), 1);

    let detached = viewport.remove_listener(".link", "click", &callback);
    assert_eq!(detached.len(), 2);
    assert_eq!(viewport.dispatch(".link", "click"), 0);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_duplicate_registration_runs_once() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));
    let callback = counting(&counter);

    // Re-adding the same handle is dropped, so delivery stays single.
    viewport.add_listener("#top", "click", Arc::clone(&callback));
    viewport.add_listener("#top", "click", Arc::clone(&callback));
    assert_eq!(viewport.dispatch("#top", "click"), 1);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    // One removal with the handle leaves nothing behind.
    viewport.remove_listener("#top", "click", &callback);
    assert_eq!(viewport.dispatch("#top", "click"), 0);
}

#[test]
fn test_dispatch_without_target_or_listeners() {
    let viewport = fixture();
    assert_eq!(viewport.dispatch(".missing", "click"), 0);
    assert_eq!(viewport.dispatch("#top", "click"), 0);
}

#[test]
fn test_callbacks_may_mutate_listeners_during_dispatch() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));

    let inner: EventCallback = {
        let viewport = viewport.clone();
        let counter = Arc::clone(&counter);
        Arc::new(move |event: &Event| {
            counter.fetch_add(1, Ordering::SeqCst);
            // Attaching during delivery must neither deadlock nor join
            // the delivery in flight.
            viewport.add_listener(event.target, "click", Arc::new(|_event: &Event| {}));
        })
    };
    viewport.add_listener("#top", "click", inner);

    assert_eq!(viewport.dispatch("#top", "click"), 1);
    // The listener added mid-dispatch is live for the next one.
    assert_eq!(viewport.dispatch("#top", "click"), 2);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn test_animation_end_follows_the_vendor_prefix() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));

    let header = viewport
        .animation_end("#top", counting(&counter))
        .expect("header resolves");
    assert_eq!(viewport.dispatch(header, "animationend"), 1);

    viewport.with_document(|document| {
        document
            .features_mut()
            .set_prefix(CssFeature::Animation, VendorPrefix::WebKit);
    });
    viewport.animation_end("#top", counting(&counter));
    assert_eq!(viewport.dispatch(header, "webkitAnimationEnd"), 1);
    // The standard name still reaches only the first listener.
    assert_eq!(viewport.dispatch(header, "animationend"), 1);
}

#[test]
fn test_transition_end_uses_the_prefixed_name() {
    let viewport = fixture();
    viewport.with_document(|document| {
        document
            .features_mut()
            .set_prefix(CssFeature::Transition, VendorPrefix::WebKit);
    });
    let counter = Arc::new(AtomicUsize::new(0));

    let header = viewport
        .transition_end("#top", counting(&counter))
        .expect("header resolves");
    assert_eq!(viewport.dispatch(header, "webkitTransitionEnd"), 1);
    assert_eq!(viewport.dispatch(header, "transitionend"), 0);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unmapped_features_resolve_but_attach_nothing() {
    let viewport = fixture();
    viewport.with_document(|document| {
        document.features_mut().set_unsupported(CssFeature::Animation);
        document
            .features_mut()
            .set_prefix(CssFeature::Transition, VendorPrefix::Opera);
    });
    let counter = Arc::new(AtomicUsize::new(0));

    // Both resolve the element even though no listener can be attached:
    // animations are unsupported outright, and Opera has no transition
    // end event.
    let header = viewport
        .animation_end("#top", counting(&counter))
        .expect("header resolves");
    assert_eq!(viewport.transition_end("#top", counting(&counter)), Some(header));

    for event_type in [
        "animationend",
        "webkitAnimationEnd",
        "oAnimationEnd",
        "transitionend",
        "webkitTransitionEnd",
        "oTransitionEnd",
    ] {
        assert_eq!(viewport.dispatch(header, event_type), 0);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_end_events_with_an_unknown_selector() {
    let viewport = fixture();
    let counter = Arc::new(AtomicUsize::new(0));
    assert_eq!(viewport.animation_end(".missing", counting(&counter)), None);
    assert_eq!(viewport.transition_end(".missing", counting(&counter)), None);
}
