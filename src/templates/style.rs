//! Site stylesheet, written to `css/style.css`

pub const STYLESHEET: &str = r#":root {
  --bg: #FEFDFB;
  --fg: #333531;
  --muted-bg: #f3f4f6;
}

.page.dark {
  --bg: #111827;
  --fg: #FEFDFB;
  --muted-bg: #1f2937;
}

html, body {
  margin: 0;
  padding: 0;
}

.page {
  background: var(--bg);
  color: var(--fg);
  min-height: 100vh;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.site-header {
  position: fixed;
  top: 0;
  z-index: 20;
  width: 100%;
  padding-left: 1rem;
  background: var(--bg);
  color: var(--fg);
  box-sizing: border-box;
}

.header-row {
  display: flex;
  justify-content: space-between;
  padding-bottom: 0.5rem;
}

.header-nav {
  display: flex;
  gap: 1rem;
  align-items: center;
}

.home a {
  font-weight: bold;
  color: inherit;
  text-decoration: none;
}

.header-links {
  display: flex;
  gap: 1rem;
  padding-top: 0.5rem;
  padding-right: 1rem;
  align-items: center;
}

.dark-toggle {
  margin: 0;
}

.toggle {
  width: 2.5rem;
  height: 1.4rem;
  border-radius: 9999px;
  border: 1px solid var(--fg);
  background: var(--muted-bg);
  position: relative;
  cursor: pointer;
}

.toggle .knob {
  position: absolute;
  top: 0.15rem;
  left: 0.2rem;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--fg);
}

.toggle-on .knob {
  left: auto;
  right: 0.2rem;
}

.body {
  padding-top: 3rem;
  margin: 0 9rem;
}

@media (max-width: 1024px) {
  .body {
    margin: 0 0.5rem;
  }
}

.post {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0 1rem;
}

.post-inner {
  width: 100%;
  padding: 0.5rem 0 2rem;
}

.title {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  padding: 1rem 0;
}

.link-card {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  padding: 1rem;
  margin: 1rem 0;
  border-radius: 0.5rem;
  background: var(--bg);
  color: inherit;
  text-decoration: none;
  box-shadow: 0px 1px 10px rgba(0, 0, 0, 0.1);
}

.link-card-row {
  display: flex;
  align-items: center;
}

.link-card-icon {
  padding-right: 0.5rem;
}

.link-card-title {
  font-size: 0.875rem;
}

.block {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  width: 100%;
}

.markdown {
  width: 100%;
}

.code-block pre {
  border-radius: 0.375rem;
  padding: 1.5rem;
  white-space: pre-wrap;
  word-break: break-all;
}

.block-image {
  width: 100%;
  height: auto;
  padding-bottom: 1rem;
}

.code-plain {
  background: var(--muted-bg);
  border-radius: 0.375rem;
  padding: 1rem;
  font-size: 0.875rem;
}

.block-list {
  list-style: disc inside;
  font-size: 0.875rem;
}

.block-link {
  font-size: 0.875rem;
  color: inherit;
}
"#;
