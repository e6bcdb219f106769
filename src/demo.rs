//! Demo page generation.
//!
//! Renders a single `index.html` that carries every element the page
//! behavior expects (see the DOM contract below), plus the inline config
//! block and a loader for the `wasm-bindgen` package. Useful for trying a
//! build locally:
//!
//! ```text
//! wasm-pack build --target web --out-dir demo/pkg --no-default-features
//! portfolio-behavior demo --output demo
//! ```
//!
//! ## DOM Contract
//!
//! | Selector | Behavior |
//! |----------|----------|
//! | `#year` | footer year stamp |
//! | `.theme-toggle`, `.theme-toggle__icon` | theme toggle and its glyph |
//! | `.nav-toggle`, `#nav-menu` | mobile navigation |
//! | `a[href^="#"]` | smooth scroll |
//! | `.bar[data-level]` | skill-bar reveal |
//! | `#contactForm` with `name`, `email`, `message` | mailto contact form |
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/), so every
//! interpolated value is escaped.

use crate::config::{self, BehaviorConfig};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("config value mixes `\\` and `</` and cannot be embedded in the page")]
    Unembeddable,
}

const CSS: &str = include_str!("../static/demo.css");

/// Module loader for the `wasm-pack --target web` output in `pkg/`.
const LOADER: &str = "import init from './pkg/portfolio_behavior.js';\ninit();";

/// Sample skill bars shown on the demo page. Levels outside `0..=100` are
/// kept on purpose to show clamping.
pub const SAMPLE_SKILLS: &[(&str, &str)] = &[
    ("Rust", "90"),
    ("TypeScript", "75"),
    ("SQL", "60"),
    ("Overflow", "150"),
    ("Underflow", "-5"),
];

/// Write `index.html` into `output_dir`, creating it if needed.
///
/// Returns the path of the written page.
pub fn write_demo(output_dir: &Path, config: &BehaviorConfig) -> Result<PathBuf, DemoError> {
    let page = render_demo_page(config)?;
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, page.into_string())?;
    Ok(path)
}

/// Render the demo page with `config` embedded as the inline config block.
pub fn render_demo_page(config: &BehaviorConfig) -> Result<Markup, DemoError> {
    let config_toml = embedded_config(config)?;

    Ok(html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Portfolio" }
                style { (PreEscaped(CSS)) }
                script type="application/toml" id=(config::CONFIG_ELEMENT_ID) {
                    (PreEscaped(config_toml))
                }
            }
            body {
                (site_header())
                main {
                    (about_section())
                    (skills_section())
                    (contact_section())
                }
                footer.site-footer {
                    "© " span id="year" {} " Portfolio"
                }
                script type="module" { (PreEscaped(LOADER)) }
            }
        }
    })
}

/// Serialize `config` as the body of the inline `<script>` block.
///
/// Script text ends at the first `</script`, so every `</` is written as
/// `<\u002F`, which a TOML basic string reads back as `</`. Values holding a
/// backslash are serialized as literal strings, which have no escapes; such a
/// value cannot also contain `</`.
fn embedded_config(config: &BehaviorConfig) -> Result<String, DemoError> {
    let escaped = toml::to_string(config)?.replace("</", "<\\u002F");
    match config::parse_config(&escaped) {
        Ok(parsed) if parsed == *config => Ok(escaped),
        _ => Err(DemoError::Unembeddable),
    }
}

fn site_header() -> Markup {
    html! {
        header.site-header {
            a.brand href="#top" { "Portfolio" }
            button.theme-toggle type="button" aria-label="Changer de thème" {
                span.theme-toggle__icon { "🌙" }
            }
            button.nav-toggle type="button" aria-controls="nav-menu" aria-expanded="false" {
                "Menu"
            }
            ul.nav-menu id="nav-menu" {
                li { a href="#about" { "À propos" } }
                li { a href="#skills" { "Compétences" } }
                li { a href="#contact" { "Contact" } }
            }
        }
    }
}

fn about_section() -> Markup {
    html! {
        section #about {
            h2 { "À propos" }
            p { "Développeur passionné par les outils rapides et fiables." }
            p { a href="#" { "Lien vide" } " · " a href="#absent" { "Ancre absente" } }
        }
    }
}

fn skills_section() -> Markup {
    html! {
        section #skills {
            h2 { "Compétences" }
            ul.skills {
                @for (name, level) in SAMPLE_SKILLS {
                    li.skill {
                        span.skill__name { (name) }
                        div.bar data-level=(level) {}
                    }
                }
                li.skill {
                    span.skill__name { "Sans niveau" }
                    div.bar {}
                }
            }
        }
    }
}

fn contact_section() -> Markup {
    html! {
        section #contact {
            h2 { "Contact" }
            form #contactForm {
                label { "Nom" input type="text" name="name"; }
                label { "Email" input type="email" name="email"; }
                label { "Message" textarea name="message" rows="5" {} }
                button type="submit" { "Envoyer" }
            }
        }
    }
}
