//! Global CSS styles for Folio.
//!
//! The carousel track relies on `scroll-snap-type`; navigation only issues
//! scroll commands and lets the browser settle on a slide. Each slide is
//! exactly one track wide with no gap, so the viewport never exceeds a
//! slide and every slide offset is reachable.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #fbfaf7;
  --bg-raised: #ffffff;
  --border: #e4e1da;
  --text-primary: #1d1c1a;
  --text-secondary: #5c5a55;
  --text-muted: #8d8a83;
  --accent: #2f6f63;
  --accent-soft: rgba(47, 111, 99, 0.12);
  --overlay: rgba(20, 20, 18, 0.72);

  --font-serif: 'Source Serif 4', Georgia, serif;
  --font-sans: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', monospace;

  --radius: 10px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

/* === Navigation === */
.nav-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.25rem 2rem;
  border-bottom: 1px solid var(--border);
}
.nav-title {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  color: var(--text-primary);
  text-decoration: none;
}
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { color: var(--text-secondary); text-decoration: none; }
.nav-link.active { color: var(--accent); font-weight: 600; }

/* === Pages === */
.page { max-width: 960px; margin: 0 auto; padding: 2.5rem 2rem 4rem; }
.page-title { font-family: var(--font-serif); font-size: 2.4rem; margin: 0 0 0.5rem; }
.tagline { color: var(--text-secondary); font-size: 1.1rem; margin: 0 0 1.5rem; }
.section-header { font-family: var(--font-serif); font-size: 1.5rem; margin: 2.5rem 0 1rem; }
.empty-state { color: var(--text-muted); }
.hero { margin-bottom: 1rem; }

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-pill, .icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: var(--radius);
}
.btn-primary { background: var(--accent); color: #fff; border: none; padding: 0.6rem 1.2rem; }
.btn-ghost { background: transparent; color: var(--accent); border: 1px solid var(--border); padding: 0.5rem 1rem; }
.btn-pill { background: var(--accent-soft); color: var(--accent); border: none; border-radius: 999px; padding: 0.35rem 0.9rem; }
.icon-btn { background: transparent; border: none; font-size: 1.5rem; line-height: 1; color: var(--text-secondary); }
button:disabled { opacity: 0.35; cursor: default; }

/* === Carousel === */
.carousel-viewport { display: flex; align-items: center; gap: 0.75rem; }
.carousel-track {
  display: flex;
  flex: 1;
  min-width: 0;
  gap: 0;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
}
.carousel-track::-webkit-scrollbar { display: none; }
.carousel-slide {
  flex: 0 0 100%;
  scroll-snap-align: start;
  margin: 0;
  padding: 1.25rem;
  min-height: 180px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.carousel-slide.active { border-color: var(--accent); }
.carousel-slide.has-certificate { cursor: pointer; }
.slide-title { font-family: var(--font-serif); font-size: 1.15rem; margin: 0 0 0.5rem; }
.slide-provider { color: var(--text-secondary); margin: 0; }
.slide-meta { color: var(--text-muted); font-size: 0.85rem; margin: 0.75rem 0 0; }
.carousel-arrow {
  flex: 0 0 auto;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  font-size: 1.4rem;
  cursor: pointer;
}
.carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
.carousel-dot {
  width: 0.6rem;
  height: 0.6rem;
  padding: 0;
  border-radius: 50%;
  border: none;
  background: var(--border);
  cursor: pointer;
}
.carousel-dot.active { background: var(--accent); }

/* === Certificate modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
  z-index: 100;
}
.certificate-modal {
  max-width: min(90vw, 900px);
  max-height: 90vh;
  padding: 1rem 1.25rem 1.25rem;
  background: var(--bg-raised);
  border-radius: var(--radius);
  overflow: auto;
}
.modal-header { display: flex; justify-content: space-between; align-items: center; }
.modal-title { font-family: var(--font-serif); font-size: 1.2rem; margin: 0; }
.certificate-image { display: block; max-width: 100%; margin-top: 1rem; }

/* === Accordion === */
.accordion { margin-top: 2rem; border-top: 1px solid var(--border); }
.accordion-panel { border-bottom: 1px solid var(--border); }
.accordion-header {
  display: flex;
  justify-content: space-between;
  width: 100%;
  padding: 1rem 0;
  background: none;
  border: none;
  font: inherit;
  font-weight: 600;
  color: var(--text-primary);
  cursor: pointer;
}
.accordion-chevron { color: var(--accent); }
.accordion-body { padding-bottom: 1rem; color: var(--text-secondary); }

/* === Blog === */
.post-card { padding: 1.25rem 0; border-bottom: 1px solid var(--border); }
.post-card__title { font-family: var(--font-serif); font-size: 1.35rem; color: var(--text-primary); text-decoration: none; }
.post-card__meta, .post-date { color: var(--text-muted); font-size: 0.85rem; margin: 0.25rem 0; }
.post-card__summary { color: var(--text-secondary); margin: 0.5rem 0 0; }
.post-actions { display: flex; gap: 1rem; margin-top: 2.5rem; }

/* === Markdown === */
.markdown-body h1, .markdown-body h2 { font-family: var(--font-serif); }
.markdown-body code { font-family: var(--font-mono); font-size: 0.9em; background: var(--accent-soft); padding: 0 0.25rem; border-radius: 4px; }
.markdown-body table { border-collapse: collapse; margin: 1rem 0; }
.markdown-body th, .markdown-body td { border: 1px solid var(--border); padding: 0.35rem 0.75rem; }

@media (max-width: 640px) {
  .carousel-arrow { display: none; }
  .page { padding: 1.5rem 1rem 3rem; }
}
"#;
