use serde::Serialize;

use super::driver::Driver;

/// A single Likert statement, tagged with the driver it measures.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub driver: Driver,
}

pub const QUESTION_COUNT: usize = 21;

/// The rating scale shown next to every question.
pub const SCALE: [(u8, &str); 5] = [
    (1, "1 — Not at all"),
    (2, "2 — Slightly"),
    (3, "3 — Neutral"),
    (4, "4 — Mostly"),
    (5, "5 — Very much"),
];

/// The fixed, ordered question bank: 3 certainty, 3 variety,
/// 4 significance, 3 connection, 4 growth, 4 contribution.
pub fn question_bank() -> &'static [Question; QUESTION_COUNT] {
    &BANK
}

/// Look up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    BANK.iter().find(|q| q.id == id)
}

static BANK: [Question; QUESTION_COUNT] = [
    Question {
        id: "q1",
        prompt: "I feel best at work when expectations are clear and consistent.",
        driver: Driver::Certainty,
    },
    Question {
        id: "q2",
        prompt: "Stability and predictability matter more to me than constant change.",
        driver: Driver::Certainty,
    },
    Question {
        id: "q3",
        prompt: "I prefer roles with defined responsibilities rather than open-ended ambiguity.",
        driver: Driver::Certainty,
    },
    Question {
        id: "q4",
        prompt: "Too much routine quickly drains my motivation.",
        driver: Driver::Variety,
    },
    Question {
        id: "q5",
        prompt: "I feel energized by new challenges, change, and variety in my work.",
        driver: Driver::Variety,
    },
    Question {
        id: "q6",
        prompt: "I prefer flexibility and freedom over strict structure.",
        driver: Driver::Variety,
    },
    Question {
        id: "q7",
        prompt: "Being recognized for my work strongly affects my job satisfaction.",
        driver: Driver::Significance,
    },
    Question {
        id: "q8",
        prompt: "I want my role to feel important and not easily replaceable.",
        driver: Driver::Significance,
    },
    Question {
        id: "q9",
        prompt: "I’m motivated by achieving visible results or measurable wins.",
        driver: Driver::Significance,
    },
    Question {
        id: "q10",
        prompt: "Responsibility, influence, or status plays a role in what motivates me.",
        driver: Driver::Significance,
    },
    Question {
        id: "q11",
        prompt: "Positive relationships at work are essential for me to feel engaged.",
        driver: Driver::Connection,
    },
    Question {
        id: "q12",
        prompt: "I prefer collaboration and teamwork over working mostly alone.",
        driver: Driver::Connection,
    },
    Question {
        id: "q13",
        prompt: "Feeling like I belong in a team or culture matters a lot to me.",
        driver: Driver::Connection,
    },
    Question {
        id: "q14",
        prompt: "I feel restless if I’m not learning, improving, or being challenged.",
        driver: Driver::Growth,
    },
    Question {
        id: "q15",
        prompt: "Personal development is a key part of what I want from my career.",
        driver: Driver::Growth,
    },
    Question {
        id: "q16",
        prompt: "I’m willing to face discomfort if it helps me grow.",
        driver: Driver::Growth,
    },
    Question {
        id: "q17",
        prompt: "I lose motivation in roles where I’ve already mastered everything.",
        driver: Driver::Growth,
    },
    Question {
        id: "q18",
        prompt: "I want my work to have a positive impact beyond just performance metrics.",
        driver: Driver::Contribution,
    },
    Question {
        id: "q19",
        prompt: "Meaning matters more to me than money alone.",
        driver: Driver::Contribution,
    },
    Question {
        id: "q20",
        prompt: "I feel fulfilled when my work helps others or serves a bigger purpose.",
        driver: Driver::Contribution,
    },
    Question {
        id: "q21",
        prompt: "I want to feel proud of what my work contributes to the world.",
        driver: Driver::Contribution,
    },
];
