// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Popup and tooltip content shared by all layer renderers.
//!
//! Renderers describe a popup as structured content (title, meta lines,
//! detail list, description, links); this module owns the HTML layout and
//! escapes every piece of record text.

use crate::models::{Popup, Tooltip};

pub const GOOGLE_MAPS_LINK_TEXT: &str = "View on Google Maps";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an integer with thousands separators (`6000` → `"6,000"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Sticky hover label: a summary line with an optional small note below it.
pub fn tooltip(summary: &str, note: Option<&str>) -> Tooltip {
    let note = note
        .filter(|n| !n.trim().is_empty())
        .map(|n| format!("<br/><small>{}</small>", escape_html(n)))
        .unwrap_or_default();
    Tooltip {
        html: format!(
            r#"<div class="map-tooltip">{}{}</div>"#,
            escape_html(summary),
            note
        ),
        sticky: true,
    }
}

/// External link opened in a new browsing context.
#[derive(Debug, Clone)]
pub struct PopupLink {
    pub url: String,
    pub text: String,
    pub icon: &'static str,
}

impl PopupLink {
    pub fn google_maps(url: &str) -> Self {
        Self {
            url: url.to_string(),
            text: GOOGLE_MAPS_LINK_TEXT.to_string(),
            icon: "fa-map-marker",
        }
    }

    pub fn website(url: &str) -> Self {
        Self {
            url: url.to_string(),
            text: "Website".to_string(),
            icon: "fa-external-link",
        }
    }

    fn render(&self) -> String {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="popup-link"><i class="fa {}"></i> {}</a>"#,
            escape_html(&self.url),
            self.icon,
            escape_html(&self.text)
        )
    }
}

enum MetaLine {
    Plain(String),
    Labeled { label: String, value: String },
    Colored { text: String, color: String },
}

/// Builder for click popups.
pub struct PopupContent {
    title: String,
    meta: Vec<MetaLine>,
    details: Vec<String>,
    description: Option<String>,
    links: Vec<PopupLink>,
    max_width: u32,
}

impl PopupContent {
    pub fn new(title: &str, max_width: u32) -> Self {
        Self {
            title: title.to_string(),
            meta: Vec::new(),
            details: Vec::new(),
            description: None,
            links: Vec::new(),
            max_width,
        }
    }

    /// Plain meta line under the title.
    pub fn meta(mut self, text: impl Into<String>) -> Self {
        self.meta.push(MetaLine::Plain(text.into()));
        self
    }

    /// Meta line with an emphasized value: `label <strong>value</strong>`.
    pub fn meta_emphasis(mut self, label: &str, value: &str) -> Self {
        self.meta.push(MetaLine::Labeled {
            label: label.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Meta line drawn in a given CSS color.
    pub fn meta_colored(mut self, text: &str, color: &str) -> Self {
        self.meta.push(MetaLine::Colored {
            text: text.to_string(),
            color: color.to_string(),
        });
        self
    }

    /// Entry in the compact detail line; empty values are ignored.
    pub fn detail(mut self, value: Option<impl Into<String>>) -> Self {
        let value: Option<String> = value.map(Into::into);
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.details.push(value);
        }
        self
    }

    pub fn description(mut self, text: Option<&str>) -> Self {
        self.description = text
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        self
    }

    pub fn link(mut self, link: Option<PopupLink>) -> Self {
        self.links.extend(link.filter(|l| !l.url.trim().is_empty()));
        self
    }

    pub fn build(self) -> Popup {
        let mut html = String::from(r#"<div class="map-popup">"#);
        html.push_str(&format!(
            r#"<h3 class="popup-title">{}</h3>"#,
            escape_html(&self.title)
        ));

        for line in &self.meta {
            let body = match line {
                MetaLine::Plain(text) => {
                    format!(r#"<span class="popup-meta">{}</span>"#, escape_html(text))
                }
                MetaLine::Labeled { label, value } => format!(
                    r#"<span class="popup-meta">{} <strong>{}</strong></span>"#,
                    escape_html(label),
                    escape_html(value)
                ),
                MetaLine::Colored { text, color } => format!(
                    r#"<span class="popup-meta" style="color: {};">{}</span>"#,
                    escape_html(color),
                    escape_html(text)
                ),
            };
            html.push_str(&body);
        }

        if !self.details.is_empty() {
            let joined: Vec<String> = self.details.iter().map(|d| escape_html(d)).collect();
            html.push_str(&format!(
                r#"<div class="popup-details-text-small">{}</div>"#,
                joined.join(" • ")
            ));
        }

        if let Some(description) = &self.description {
            html.push_str(&format!(
                r#"<div class="popup-description">{}</div>"#,
                escape_html(description)
            ));
        }

        if !self.links.is_empty() {
            let links: Vec<String> = self.links.iter().map(PopupLink::render).collect();
            html.push_str(&format!(
                r#"<div class="popup-links-container">{}</div>"#,
                links.join(" ")
            ));
        }

        html.push_str("</div>");
        Popup {
            html,
            max_width: self.max_width,
        }
    }
}
