//! Typographic assets for server-rendered dashboard pages.
//!
//! Declares the font families the dashboard loads and turns them into
//! Google Fonts CSS2 stylesheet URLs and the `<link>` tags the page shell
//! embeds in its `<head>`.

/// A font family the dashboard loads from Google Fonts.
///
/// The dashboard only renders latin text, so no subset narrowing is
/// requested; the CSS2 endpoint serves per-subset `unicode-range` blocks
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub family: &'static str,
    /// Specific weights to load; empty loads the family's default weight.
    pub weights: &'static [u16],
}

/// Body text.
pub const INTER: FontFamily = FontFamily {
    family: "Inter",
    weights: &[],
};

/// Headings and figures.
pub const LUSITANA: FontFamily = FontFamily {
    family: "Lusitana",
    weights: &[400, 700],
};

/// Families loaded by every dashboard page, in declaration order.
pub const DASHBOARD_FONTS: &[FontFamily] = &[INTER, LUSITANA];

/// Preconnect hints emitted before the stylesheet links so the font fetch
/// can start its TLS handshake early.
pub const PRECONNECT_TAGS: &str = concat!(
    r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#,
    r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#,
);

impl FontFamily {
    /// Google Fonts CSS2 stylesheet URL for this family.
    pub fn stylesheet_url(&self) -> String {
        let mut spec = self.family.replace(' ', "+");
        if !self.weights.is_empty() {
            let weights: Vec<String> = self.weights.iter().map(u16::to_string).collect();
            spec = format!("{spec}:wght@{}", weights.join(";"));
        }
        format!("https://fonts.googleapis.com/css2?family={spec}&display=swap")
    }

    /// `<link rel="stylesheet">` tag for the page shell.
    pub fn link_tag(&self) -> String {
        format!(r#"<link rel="stylesheet" href="{}">"#, self.stylesheet_url())
    }
}

/// All `<head>` markup for the dashboard's fonts: preconnect hints followed
/// by one stylesheet link per family.
pub fn head_links() -> String {
    let mut out = String::from(PRECONNECT_TAGS);
    for font in DASHBOARD_FONTS {
        out.push_str(&font.link_tag());
    }
    out
}
