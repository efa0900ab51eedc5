//! Built-in default content shown whenever the remote source is unavailable
//! or a persisted blob fails its shape-check. Injected into the resolver and
//! reconciler at construction so tests can swap in alternate catalogs.

use crate::types::{FooterContent, HeroContent, Localized};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SiteDefaults {
    pub hero: Localized<HeroContent>,
    pub footer: Localized<FooterContent>,
    /// Registered fallbacks for sheet-driven key-value content,
    /// keyed by (section, key).
    pub content: HashMap<(String, String), String>,
}

pub static BUILTIN_DEFAULTS: Lazy<SiteDefaults> = Lazy::new(builtin);

pub fn builtin() -> SiteDefaults {
    let mut content = HashMap::new();
    for (section, key, value) in [
        ("about", "heading", "About the Band"),
        ("about", "body", "Five musicians, one mission: the songs you grew up with, played live."),
        ("shows", "heading", "Upcoming Shows"),
        ("shows", "empty_state", "No upcoming shows just yet. Check back soon!"),
        ("media", "heading", "Photos & Videos"),
        ("testimonials", "heading", "What the Crowd Says"),
        ("contact", "heading", "Book the Band"),
    ] {
        content.insert((section.to_string(), key.to_string()), value.to_string());
    }

    SiteDefaults {
        hero: Localized {
            en: HeroContent {
                title: "Echoes of the Legends".to_string(),
                subtitle: "The Ultimate Tribute Experience".to_string(),
                description: "A full live production of the anthems you know by heart, faithful to the last note.".to_string(),
                primary_button_text: "Get Tickets".to_string(),
                primary_button_link: "#shows".to_string(),
                secondary_button_text: "Watch Us Live".to_string(),
                secondary_button_link: "#media".to_string(),
                background_image_url: "/images/hero-stage.jpg".to_string(),
            },
            es: HeroContent {
                title: "Echoes of the Legends".to_string(),
                subtitle: "La experiencia tributo definitiva".to_string(),
                description: "Una producción en vivo de los himnos que conoces de memoria, fiel hasta la última nota.".to_string(),
                primary_button_text: "Comprar entradas".to_string(),
                primary_button_link: "#shows".to_string(),
                secondary_button_text: "Míranos en vivo".to_string(),
                secondary_button_link: "#media".to_string(),
                background_image_url: "/images/hero-stage.jpg".to_string(),
            },
        },
        footer: Localized {
            en: FooterContent {
                about_text: "Touring tribute band bringing the classics back to the stage.".to_string(),
                contact_email: "booking@echoesofthelegends.com".to_string(),
                phone: "+1 (555) 010-7788".to_string(),
                address: "Austin, TX".to_string(),
                copyright: "© Echoes of the Legends. All rights reserved.".to_string(),
                facebook_url: "https://facebook.com/echoesofthelegends".to_string(),
                instagram_url: "https://instagram.com/echoesofthelegends".to_string(),
                youtube_url: "https://youtube.com/@echoesofthelegends".to_string(),
            },
            es: FooterContent {
                about_text: "Banda tributo en gira que devuelve los clásicos al escenario.".to_string(),
                contact_email: "booking@echoesofthelegends.com".to_string(),
                phone: "+1 (555) 010-7788".to_string(),
                address: "Austin, TX".to_string(),
                copyright: "© Echoes of the Legends. Todos los derechos reservados.".to_string(),
                facebook_url: "https://facebook.com/echoesofthelegends".to_string(),
                instagram_url: "https://instagram.com/echoesofthelegends".to_string(),
                youtube_url: "https://youtube.com/@echoesofthelegends".to_string(),
            },
        },
        content,
    }
}
