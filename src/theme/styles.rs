//! Global CSS for the shell chrome and the classes the shell toggles.
//!
//! Transition lengths here match the shell's default timings: 500ms page
//! exit, 300ms lightbox fade.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --night: #0b0d12;
  --night-raised: #141821;
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);
  --text-primary: #f5f5f5;
  --text-muted: rgba(245, 245, 245, 0.6);
  --danger: #ef4444;

  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --transition-page: 500ms ease;
  --transition-fade: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--night);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

img {
  max-width: 100%;
  display: block;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(11, 13, 18, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--gold-glow);
  transition: transform var(--transition-fade);
}

.-translate-y-full {
  transform: translateY(-100%);
}

.navbar-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--gold);
}

.navbar-links {
  display: flex;
  gap: 1.5rem;
}

.navbar-link {
  background: none;
  border: none;
  color: var(--text-muted);
  font: inherit;
  cursor: pointer;
  transition: color 150ms ease;
}

.navbar-link:hover {
  color: var(--gold);
}

/* === Content container === */
.app-container > * {
  transition: opacity var(--transition-page), transform var(--transition-page);
}

.app-container > .is-exiting {
  opacity: 0;
  transform: translateY(1rem);
}

.text-center { text-align: center; }
.text-red-500 { color: var(--danger); padding: 4rem 1rem; }

/* === Reveal-on-scroll === */
.animate-on-scroll {
  opacity: 0;
  transform: translateY(2rem);
  transition: opacity 800ms ease, transform 800ms ease;
}

.animate-on-scroll.visible {
  opacity: 1;
  transform: none;
}

/* === Copy tooltip === */
.tooltip {
  opacity: 0;
  pointer-events: none;
  transition: opacity 150ms ease;
}

.tooltip.visible {
  opacity: 1;
}

/* === Gallery === */
#gallery-grid img {
  cursor: zoom-in;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.9);
  opacity: 0;
  cursor: zoom-out;
  transition: opacity var(--transition-fade);
}

.lightbox-overlay.visible {
  opacity: 1;
}

.lightbox-overlay.hidden {
  display: none;
}

.lightbox-image {
  max-width: 90vw;
  max-height: 90vh;
  box-shadow: 0 0 40px var(--gold-glow);
}
"#;
