//! HTML rendering for every page of the site.
//!
//! Uses maud for templating: text is escaped, SVG markup is inlined as-is.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use kakapoly_core::{Icon, IconSet};

use crate::bundle::{bundle_href, bundle_name};
use crate::pages::{IconPage, IconSetPage};
use crate::svg::{download_name, strip_root_size};

const CSS: &str = include_str!("../static/style.css");
const SEARCH_JS: &str = include_str!("../static/search.js");

/// Number of icons previewed per set on the listing page.
pub const PREVIEW_ICONS: usize = 12;

pub fn icon_set_href(icon_set: &IconSet) -> String {
    format!("/icon-sets/{}/", icon_set.slug)
}

pub fn icon_href(icon: &Icon) -> String {
    format!("/icons/{}/", icon.id)
}

pub fn download_href(icon: &Icon) -> String {
    format!("/icons/{}/{}", icon.id, download_name(&icon.name))
}

fn base_document(site_title: &str, page_title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title {
                    @if let Some(page_title) = page_title {
                        (page_title) " | "
                    }
                    (site_title)
                }
                style { (PreEscaped(CSS)) }
            }
            body {
                header.site-header {
                    a.home href="/" { (site_title) }
                    nav {
                        a href="/icon-sets/" { "Icon Sets" }
                    }
                }
                main { (content) }
            }
        }
    }
}

fn icon_tile(icon: &Icon) -> Markup {
    html! {
        a.icon-tile href=(icon_href(icon)) title=(icon.name) data-name=(icon.name) {
            (PreEscaped(strip_root_size(&icon.svg)))
            span.icon-name { (icon.name) }
        }
    }
}

/// `/index.html`: sends visitors on to the icon set listing.
pub fn render_home(site_title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content="0; url=/icon-sets/";
                title { (site_title) }
            }
            body {
                a href="/icon-sets/" { "Icon Sets" }
            }
        }
    }
}

/// `/icon-sets/index.html`
pub fn render_icon_sets(site_title: &str, sets: &[IconSetPage]) -> Markup {
    let content = html! {
        h1 { "Icon Sets" }
        ul.set-list {
            @for page in sets {
                li.set-card {
                    h2 {
                        a href=(icon_set_href(&page.icon_set)) { (page.icon_set.name) }
                    }
                    p.set-meta {
                        "v" (page.icon_set.current_version)
                        " · " (page.icons.len()) " icons"
                    }
                    div.icon-grid {
                        @for icon in page.icons.iter().take(PREVIEW_ICONS) {
                            (icon_tile(icon))
                        }
                    }
                }
            }
        }
    };

    base_document(site_title, Some("Icon Sets"), content)
}

/// `/icon-sets/<slug>/index.html`
pub fn render_icon_set(site_title: &str, page: &IconSetPage) -> Markup {
    let set = &page.icon_set;
    let content = html! {
        h1 { (set.name) }
        p.set-meta {
            "v" (set.current_version) " · " (page.icons.len()) " icons"
        }
        p.set-links {
            @if !set.project_url.is_empty() {
                a href=(set.project_url) rel="noopener" { "Project" }
            }
            @if !set.figma_file_url.is_empty() {
                " "
                a href=(set.figma_file_url) rel="noopener" { "Figma" }
            }
        }
        a.download href=(bundle_href(set)) download=(bundle_name(set)) { "Download Icons" }
        input.search id="icon-search" type="search" placeholder="Search icons" aria-label="Search icons" autocomplete="off";
        div.icon-grid {
            @for icon in &page.icons {
                (icon_tile(icon))
            }
        }
        script { (PreEscaped(SEARCH_JS)) }
    };

    base_document(site_title, Some(set.name.as_str()), content)
}

/// `/icons/<id>/index.html`
pub fn render_icon(site_title: &str, page: &IconPage) -> Markup {
    let icon = &page.icon;
    let content = html! {
        section.icon-detail {
            div.preview { (PreEscaped(strip_root_size(&icon.svg))) }
            p.icon-name { (icon.name) }
            p {
                "in "
                a href=(icon_set_href(&page.icon_set)) { (page.icon_set.name) }
            }
            a.download href=(download_href(icon)) download=(download_name(&icon.name)) {
                "Download SVG"
            }
        }
    };

    base_document(site_title, Some(icon.name.as_str()), content)
}
