/// Palette and base styles injected ahead of the stylesheet. Slate base
/// with an indigo accent; components only reference the variables.
pub const APP_THEME: &str = r#"
:root {
    --color-bg-primary: #020617;
    --color-header-bg: rgba(15, 23, 42, 0.75);
    --color-surface: rgba(30, 41, 59, 0.5);
    --color-surface-muted: #1e293b;
    --color-text-primary: #e2e8f0;
    --color-text-muted: #94a3b8;
    --color-text-faint: #475569;
    --color-border: #1e293b;
    --color-card-border: #334155;
    --color-accent: #4f46e5;
    --color-accent-soft: #818cf8;
    --color-flow-bg: rgba(49, 46, 129, 0.2);
    --color-flow-border: rgba(99, 102, 241, 0.3);
    --color-input-bg: #0f172a;
    --color-input-border: #334155;
    --color-ok: #4ade80;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
