pub const PAGE_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    min-height: 100%;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

/* Page */
.linktree-page {
    position: relative;
    min-height: 100vh;
    width: 100%;
    overflow: hidden;
    transition: background 0.3s ease, color 0.3s ease;
}

.linktree-content {
    position: relative;
    z-index: 10;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 4rem 1rem;
}

.linktree-title {
    font-size: 3rem;
    font-weight: 700;
    margin: 0 0 2rem;
    text-align: center;
    animation: title-enter 0.5s ease-out both;
}

/* Theme toggle */
.theme-toggle {
    position: absolute;
    top: 1rem;
    right: 1rem;
    z-index: 20;
    width: 40px;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    cursor: pointer;
    font-size: 1.25rem;
}

/* Card */
.profile-card {
    width: 100%;
    max-width: 28rem;
    padding: 2rem;
    border-radius: 0.75rem;
    border: 1px solid;
    backdrop-filter: blur(24px);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.profile-header {
    display: flex;
    flex-direction: column;
    align-items: center;
    margin-bottom: 2rem;
}

.profile-avatar {
    width: 7rem;
    height: 7rem;
    border-radius: 9999px;
    margin-bottom: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 3rem;
    font-weight: 700;
    color: #ffffff;
    background: linear-gradient(135deg, #a78bfa 0%, #6366f1 100%);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    object-fit: cover;
}

.profile-name {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 0.5rem;
}

.profile-tagline {
    font-size: 1.125rem;
    margin: 0;
}

/* Links */
.link-grid {
    display: grid;
    gap: 1rem;
}

.link-button {
    position: relative;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: flex-start;
    gap: 1rem;
    padding: 1rem 1.5rem;
    border: 1px solid;
    border-radius: 0.5rem;
    color: inherit;
    text-decoration: none;
    transition: all 0.3s ease;
    animation: link-enter 0.4s ease-out both;
}

.link-button[aria-disabled="true"] {
    cursor: default;
}

.link-glyph {
    width: 2rem;
    height: 2rem;
    font-size: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: transform 0.3s ease;
}

.link-button:hover .link-glyph {
    transform: scale(1.1);
}

.link-label {
    font-size: 1.25rem;
    font-weight: 600;
}

.link-overlay {
    position: absolute;
    inset: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.link-button:hover .link-overlay {
    opacity: var(--overlay-hover-opacity, 0.2);
}

/* Ambient background */
.ambient-canvas {
    position: absolute;
    inset: 0;
    z-index: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    perspective: 1200px;
    pointer-events: none;
}

.ambient-object {
    border-radius: 9999px;
    border-style: solid;
    transform-style: preserve-3d;
    will-change: transform;
}

@keyframes title-enter {
    from { opacity: 0; transform: translateY(-50px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes link-enter {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;
