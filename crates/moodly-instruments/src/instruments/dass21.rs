use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::response::ITEM_COUNT;

use crate::Instrument;
use crate::scoring::{Item, ScaleOption};

use DimensionTag::{Anxiety as A, Depression as D, Stress as S};

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// 21 items rated 0–3 over the past week, seven per dimension, shown three
/// pages of seven.
pub struct Dass21;

pub static DASS21: Dass21 = Dass21;

/// Dimension of each item, in administration order.
pub const DIMENSION_MAP: [DimensionTag; ITEM_COUNT] = [
    S, A, D, A, D, S, A, //
    S, A, D, S, S, D, S, //
    A, D, D, S, A, A, D,
];

pub const PAGE_SIZE: usize = 7;

const STATEMENTS: [&str; ITEM_COUNT] = [
    "I found it hard to wind down",
    "I was aware of dryness of my mouth",
    "I couldn't seem to experience any positive feeling at all",
    "I experienced breathing difficulty",
    "I found it difficult to work up the initiative to do things",
    "I tended to over-react to situations",
    "I experienced trembling",
    "I felt that I was using a lot of nervous energy",
    "I was worried about situations in which I might panic and make a fool of myself",
    "I felt that I had nothing to look forward to",
    "I found myself getting agitated",
    "I found it difficult to relax",
    "I felt down-hearted and blue",
    "I was intolerant of anything that kept me from getting on with what I was doing",
    "I felt I was close to panic",
    "I was unable to become enthusiastic about anything",
    "I felt I wasn't worth much as a person",
    "I felt that I was rather touchy",
    "I was aware of the action of my heart in the absence of physical exertion",
    "I felt scared without any good reason",
    "I felt that life was meaningless",
];

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            STATEMENTS
                .iter()
                .zip(DIMENSION_MAP.iter())
                .enumerate()
                .map(|(index, (text, dimension))| Item {
                    index,
                    text: text.to_string(),
                    dimension: *dimension,
                })
                .collect()
        });
        &ITEMS
    }

    fn scale(&self) -> &[ScaleOption] {
        static SCALE: std::sync::LazyLock<Vec<ScaleOption>> = std::sync::LazyLock::new(|| {
            [
                (0, "Did not apply to me at all"),
                (1, "Applied to me to some degree, or some of the time"),
                (2, "Applied to me to a considerable degree, or a good part of the time"),
                (3, "Applied to me very much or most of the time"),
            ]
            .iter()
            .map(|(value, description)| ScaleOption {
                value: *value,
                description: description.to_string(),
            })
            .collect()
        });
        &SCALE
    }

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }
}
