use crate::eval::frame_state::FrameState;
use crate::foundation::core::Canvas;
use crate::foundation::error::FlowResult;
use crate::scene::element::{Anchor, ElementKind, IconKind, VisualElement};

/// Icon glyphs are authored on a 24-unit grid and stroked.
const ICON_GRID: f64 = 24.0;
const ICON_STROKE: f64 = 2.0;
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

fn icon_body(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Mail => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="M22 7 13.03 12.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        IconKind::ArrowRight => r#"<path d="M5 12h14"/><path d="M12 5l7 7-7 7"/>"#,
        IconKind::User => {
            r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
        }
        IconKind::AlertTriangle => {
            r#"<path d="M21.73 18l-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
        }
    }
}

/// Serialize a frame state into a standalone SVG document sized to `canvas`.
///
/// Elements with `visible == false` are skipped. Icons scale about their own center, the way a
/// CSS `transform: scale()` on an absolutely positioned box does. Colors are resolved to
/// `#rrggbb`, with any color alpha folded into the element opacity.
pub fn frame_to_svg(canvas: Canvas, state: &FrameState) -> FlowResult<String> {
    let w = canvas.width;
    let h = canvas.height;
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    for e in state.visible() {
        push_element(&mut out, canvas, e)?;
    }
    out.push_str("</svg>");
    Ok(out)
}

fn push_element(out: &mut String, canvas: Canvas, e: &VisualElement) -> FlowResult<()> {
    let w = canvas.width;
    let h = canvas.height;
    let [r, g, b, a] = e.color.to_rgba8()?;
    let color = format!("#{r:02x}{g:02x}{b:02x}");
    let opacity = e.opacity * f64::from(a) / 255.0;
    match e.kind {
        ElementKind::Background => out.push_str(&format!(
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{color}" opacity="{}"/>"#,
            opacity
        )),
        ElementKind::Icon(icon) => {
            let size = e.scaled_size();
            let shift = (e.size - size) / 2.0;
            let x = e.position.x + shift;
            let y = e.position.y + shift;
            let k = size / ICON_GRID;
            out.push_str(&format!(
                r#"<g transform="translate({x} {y}) scale({k})" opacity="{}" fill="none" stroke="{color}" stroke-width="{ICON_STROKE}" stroke-linecap="round" stroke-linejoin="round">{}</g>"#,
                opacity,
                icon_body(icon)
            ));
        }
        ElementKind::Text | ElementKind::Heading => {
            let Some(text) = e.text else {
                return Ok(());
            };
            let size = e.scaled_size();
            // Approximate the top of the em box from the baseline.
            let (x, y, anchor) = match e.anchor {
                Anchor::TopLeft => (e.position.x, e.position.y + size * 0.8, "start"),
                Anchor::TopCenter => (e.position.x, e.position.y + size * 0.8, "middle"),
                Anchor::BottomCenter => (e.position.x, e.position.y - size * 0.2, "middle"),
            };
            let weight = if matches!(e.kind, ElementKind::Heading) {
                "bold"
            } else {
                "normal"
            };
            out.push_str(&format!(
                r#"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{size}" font-weight="{weight}" text-anchor="{anchor}" fill="{color}" opacity="{}">{}</text>"#,
                opacity,
                xml_escape(text)
            ));
        }
        ElementKind::Border => {
            let sw = e.size;
            let half = sw / 2.0;
            let bw = (f64::from(w) - sw).max(0.0);
            let bh = (f64::from(h) - sw).max(0.0);
            out.push_str(&format!(
                r#"<rect x="{half}" y="{half}" width="{bw}" height="{bh}" fill="none" stroke="{color}" stroke-width="{sw}" opacity="{}"/>"#,
                opacity
            ));
        }
    }
    Ok(())
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
