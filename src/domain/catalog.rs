//! Built-in catalog of airline loyalty programs we link out to.
//!
//! Link-outs are intentionally conservative: no scraping and no deep-link
//! prefills. Several programs ignore query parameters or require a login
//! first, so every entry points at the program's own search entry page.

use serde::Serialize;

/// A loyalty program whose award search page we link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Short slug, unique across the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    /// Usage caveat shown next to the link (e.g. login requirements).
    pub note: &'static str,
    /// Entry point for the program's search or booking flow.
    pub url: &'static str,
}

/// Providers in display order.
pub static PROVIDERS: &[Provider] = &[
    Provider {
        id: "united",
        name: "United MileagePlus",
        region: "US",
        note: "Official award search (may require login).",
        url: "https://www.united.com/en/us/book-flight",
    },
    Provider {
        id: "aa",
        name: "American AAdvantage",
        region: "US",
        note: "Official award search (AA.com).",
        url: "https://www.aa.com/booking/find-flights",
    },
    Provider {
        id: "alaska",
        name: "Alaska Mileage Plan",
        region: "US",
        note: "Official award search (AlaskaAir.com).",
        url: "https://www.alaskaair.com/search",
    },
    Provider {
        id: "aeroplan",
        name: "Air Canada Aeroplan",
        region: "Canada",
        note: "Air Canada flight reward search.",
        url: "https://www.aircanada.com/ca/en/aco/home/book/flights.html",
    },
    Provider {
        id: "lifemiles",
        name: "Avianca LifeMiles",
        region: "Latin America",
        note: "LifeMiles award booking portal (often requires login).",
        url: "https://www.lifemiles.com/",
    },
    Provider {
        id: "ana",
        name: "ANA Mileage Club",
        region: "Japan",
        note: "ANA award search (usually requires login).",
        url: "https://www.ana.co.jp/en/us/amc/",
    },
    Provider {
        id: "koreanair",
        name: "Korean Air SKYPASS",
        region: "Korea",
        note: "Korean Air award search (requires login).",
        url: "https://www.koreanair.com/",
    },
];

/// Returns the full catalog in display order.
pub fn list() -> &'static [Provider] {
    PROVIDERS
}
