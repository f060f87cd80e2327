//! CSS styles for the site.
//!
//! Contains the main STYLE constant used by the default index page and the
//! default details-page template.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --card-bg: #f5ecd5;
    --code-bg: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1.5em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }

section { padding-top: 1rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}

.nav-bar .nav-item { font-size: 0.9rem; color: var(--fg); }
.nav-bar .nav-item.active { color: var(--link); font-weight: 600; }

.pub-card {
    background: var(--card-bg);
    border-radius: 6px;
    padding: 1rem;
    margin-bottom: 1rem;
}

.pub-content h4 { font-size: 1.05rem; margin-bottom: 0.25rem; }
.pub-title-static { color: var(--fg); }
.pub-content .authors { font-size: 0.9rem; }
.pub-content .venue { font-size: 0.85rem; color: var(--base01); }

.pub-actions {
    display: flex;
    gap: 0.5rem;
    margin-top: 0.5rem;
}

.btn-link, .btn-bib, .btn-action {
    font-size: 0.8rem;
    padding: 0.2rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--link);
    cursor: pointer;
    font-family: inherit;
}

.bibtex-hidden {
    margin-top: 0.5rem;
    padding: 0.75rem;
    background: var(--code-bg);
    font-family: "SF Mono", Monaco, monospace;
    font-size: 0.8rem;
    white-space: pre-wrap;
    overflow-x: auto;
}

.pub-detail .meta { color: var(--muted); margin-bottom: 1rem; }
.pub-detail .abstract { margin: 1rem 0; }
.pub-detail pre {
    background: var(--code-bg);
    padding: 0.75rem;
    white-space: pre-wrap;
    font-size: 0.8rem;
}
"#;
