//! Page navigation tests
//!
//! Covers the navigator's contract: same-key no-op, successful swaps,
//! failures that keep the current key, and racing navigations.

use std::time::Duration;

use folio_core::{
    Immediate, MemoryClipboard, MemorySurface, NavOutcome, PageKey, Shell, ShellConfig,
    StaticPages, TokioPause, LOAD_FAILURE_HTML,
};

const HOME_HTML: &str = r##"
<section id="hero" class="min-h-screen">
    <nav><a href="#about">About</a><a href="#contact">Contact</a></nav>
</section>
<section id="about" class="animate-on-scroll" data-delay="100">About me</section>
<section id="contact" class="animate-on-scroll">
    <button class="copy-btn" data-copy="user@example.com">Copy</button><span class="tooltip">Copied!</span>
</section>
"##;

const GALLERY_HTML: &str = r#"
<div id="gallery-grid">
    <img src="img/one.jpg"><img src="img/two.jpg">
</div>
"#;

type TestShell<P> = Shell<MemorySurface, StaticPages, P, MemoryClipboard>;

fn site() -> StaticPages {
    StaticPages::new()
        .with_page("pages/home.html", HOME_HTML)
        .with_page("pages/gallery.html", GALLERY_HTML)
        .with_page("pages/engineer.html", "<main>engineer</main>")
}

fn instant_shell(pages: StaticPages) -> TestShell<Immediate> {
    Shell::new(
        ShellConfig::default(),
        MemorySurface::new(1000.0),
        pages,
        Immediate::new(),
        MemoryClipboard::new(),
    )
}

fn timed_shell(pages: StaticPages) -> TestShell<TokioPause> {
    Shell::new(
        ShellConfig::default(),
        MemorySurface::new(1000.0),
        pages,
        TokioPause,
        MemoryClipboard::new(),
    )
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_same_key_is_noop() {
    let shell = instant_shell(site());
    shell.start().await;
    let before = shell.surface().snapshot();

    assert_eq!(shell.navigate_to(PageKey::home()).await, NavOutcome::Unchanged);
    assert_eq!(shell.show_home_page(None).await, NavOutcome::Unchanged);

    assert_eq!(shell.source().fetch_count(&PageKey::home()), 1);
    assert_eq!(shell.surface().snapshot(), before);
    assert_eq!(shell.pause().requested().len(), 1, "no exit wait for a no-op");
}

#[tokio::test]
async fn test_same_key_does_not_mark_exiting() {
    let shell = instant_shell(site());
    shell.start().await;
    shell.navigate_to(PageKey::home()).await;
    assert!(!shell.surface().snapshot().exiting);
}

// ============================================================================
// Successful loads
// ============================================================================

#[tokio::test]
async fn test_gallery_from_empty_key() {
    let shell = instant_shell(site());
    assert!(shell.current_page().is_empty());
    shell.surface().scroll_to(4000.0);

    let outcome = shell.navigate_to(PageKey::new("pages/gallery.html")).await;

    assert_eq!(outcome, NavOutcome::Loaded(PageKey::gallery()));
    assert_eq!(shell.source().fetches(), vec![PageKey::gallery()]);
    assert_eq!(shell.current_page().as_str(), "pages/gallery.html");

    let snap = shell.surface().snapshot();
    assert_eq!(snap.content, GALLERY_HTML);
    assert_eq!(snap.viewport.scroll_offset, 0.0);
    assert!(snap.navbar_hidden);
}

#[tokio::test]
async fn test_content_is_exactly_the_payload() {
    let shell = instant_shell(site());
    for key in [PageKey::home(), PageKey::role("engineer"), PageKey::gallery()] {
        assert!(shell.navigate_to(key.clone()).await.is_loaded());
        assert_eq!(shell.current_page(), key);
    }
    assert_eq!(shell.surface().snapshot().content, GALLERY_HTML);
    assert_eq!(shell.surface().snapshot().replacements, 3);
}

#[tokio::test]
async fn test_load_reinitialises_reveal_watches() {
    let shell = instant_shell(site());
    shell.start().await;
    let doc = shell.document();
    let about = doc.by_id("about").unwrap().position;
    let contact = doc.by_id("contact").unwrap().position;
    assert_eq!(shell.reveal().watched(), vec![about, contact]);
    assert_eq!(
        shell.surface().snapshot().watched.into_iter().collect::<Vec<_>>(),
        vec![about, contact]
    );

    shell.show_gallery_page(None).await;
    assert!(shell.reveal().watched().is_empty());
    assert!(shell.surface().snapshot().watched.is_empty());
}

#[tokio::test]
async fn test_navbar_updated_after_home_load() {
    let shell = instant_shell(site());
    shell.surface().scroll_to(900.0);
    shell.start().await;
    // scroll reset to the top before the navbar is evaluated
    assert!(shell.surface().snapshot().navbar_hidden);

    shell.surface().scroll_to(900.0);
    assert!(shell.on_scroll());
    assert!(!shell.surface().snapshot().navbar_hidden);
}

#[tokio::test]
async fn test_anchor_scroll_follows_home_page() {
    let pages = site().with_status("pages/broken.html", 500);
    let shell = instant_shell(pages);
    assert!(!shell.surface().snapshot().anchor_scroll);

    shell.start().await;
    assert!(shell.surface().snapshot().anchor_scroll);

    // A failed load leaves home current, so in-page anchors keep working
    shell.navigate_to(PageKey::new("pages/broken.html")).await;
    assert!(shell.surface().snapshot().anchor_scroll);

    shell.show_gallery_page(None).await;
    assert!(!shell.surface().snapshot().anchor_scroll);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_failed_load_keeps_key_and_shows_message() {
    let pages = site().with_status("pages/broken.html", 500);
    let shell = instant_shell(pages);
    shell.start().await;

    let outcome = shell.navigate_to(PageKey::new("pages/broken.html")).await;

    assert!(matches!(outcome, NavOutcome::Failed { ref key, .. } if key.as_str() == "pages/broken.html"));
    assert_eq!(shell.current_page(), PageKey::home());
    assert_eq!(shell.surface().snapshot().content, LOAD_FAILURE_HTML);
}

#[tokio::test]
async fn test_transport_error_is_a_failure() {
    let pages = site().with_transport_error("pages/offline.html", "connection refused");
    let shell = instant_shell(pages);

    let outcome = shell.navigate_to(PageKey::new("pages/offline.html")).await;

    assert!(matches!(outcome, NavOutcome::Failed { ref error, .. } if error.contains("connection refused")));
    assert!(shell.current_page().is_empty());
    assert_eq!(shell.surface().snapshot().content, LOAD_FAILURE_HTML);
}

#[tokio::test]
async fn test_failed_key_can_be_retried() {
    let shell = instant_shell(site());
    let key = PageKey::role("designer");

    assert!(matches!(shell.navigate_to(key.clone()).await, NavOutcome::Failed { .. }));

    shell.source().insert_page("pages/designer.html", "<main>designer</main>");
    assert_eq!(shell.navigate_to(key.clone()).await, NavOutcome::Loaded(key.clone()));
    assert_eq!(shell.source().fetch_count(&key), 2);
    assert_eq!(shell.surface().snapshot().content, "<main>designer</main>");
}

#[tokio::test]
async fn test_failure_drops_stale_reveal_watches() {
    let shell = instant_shell(site());
    shell.start().await;
    assert!(!shell.reveal().watched().is_empty());

    shell.show_role_page("missing").await;
    assert!(shell.reveal().watched().is_empty());
    assert!(!shell.on_intersection(5, 1.0, true).await);
}

// ============================================================================
// Timing and races
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_exit_marker_shown_during_transition() {
    let shell = timed_shell(site());
    shell.start().await;

    let navigating = shell.show_gallery_page(None);
    let observe = async {
        tokio::time::sleep(Duration::from_millis(250)).await;
        shell.surface().snapshot()
    };
    let (outcome, midway) = tokio::join!(navigating, observe);

    assert!(midway.exiting);
    assert_eq!(midway.content, HOME_HTML);
    assert!(outcome.is_loaded());
    assert!(!shell.surface().snapshot().exiting);
}

#[tokio::test(start_paused = true)]
async fn test_racing_navigations_last_completion_wins() {
    let pages = site()
        .with_latency("pages/gallery.html", Duration::from_millis(400))
        .with_latency("pages/engineer.html", Duration::from_millis(50));
    let shell = timed_shell(pages);

    // gallery starts first but completes last
    let (gallery, engineer) = tokio::join!(
        shell.show_gallery_page(None),
        shell.show_role_page("engineer"),
    );

    assert!(gallery.is_loaded());
    assert!(engineer.is_loaded());
    assert_eq!(shell.current_page(), PageKey::gallery());
    assert_eq!(shell.surface().snapshot().content, GALLERY_HTML);
    assert_eq!(shell.surface().snapshot().replacements, 2);
}

#[tokio::test(start_paused = true)]
async fn test_full_load_takes_exit_transition() {
    let shell = timed_shell(site());
    let start = tokio::time::Instant::now();
    shell.start().await;
    assert!(start.elapsed() >= Duration::from_millis(500));
}
