//! Crisis helpline directory, shown whenever the chat companion is withheld.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub phones: &'static [&'static str],
    pub email: Option<&'static str>,
}

pub const HELPLINES: &[Helpline] = &[
    Helpline {
        name: "Taskeen Helpline",
        phones: &["+92-317-4253441"],
        email: Some("help@taskeen.org"),
    },
    Helpline {
        name: "Willing Ways (Psychiatric Emergency)",
        phones: &["0322-7413639"],
        email: Some("Karachi@willingways.org"),
    },
    Helpline {
        name: "Sindh Mental Health Authority Helpline",
        phones: &["021-111-117-642", "022-111-117-642"],
        email: None,
    },
    Helpline {
        name: "Pakistan Suicide Prevention Helpline",
        phones: &["+92-21-111-111-730"],
        email: None,
    },
    Helpline {
        name: "Project Yaqeen",
        phones: &["92 042-37802445"],
        email: None,
    },
    Helpline {
        name: "Rozan Counseling Helpline",
        phones: &["0304-111-1741"],
        email: None,
    },
    Helpline {
        name: "Ministry of Human Rights Helpline",
        phones: &["1099", "0333-9085709"],
        email: None,
    },
    Helpline {
        name: "House of Pebbles (Therapy Center)",
        phones: &["(021) 37224371"],
        email: None,
    },
    Helpline {
        name: "Trauma Release and Wellness Centre",
        phones: &["0317-1188507"],
        email: Some("info@trwcentre.com"),
    },
    Helpline {
        name: "Karwan e Hayat",
        phones: &["0311-1222398", "(021) 111-534-111", "(021) 32856774-5"],
        email: Some("tamkeen.kashif@keh.org.pk"),
    },
];
