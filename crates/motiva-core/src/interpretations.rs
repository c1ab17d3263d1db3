//! Interpretation copy for each driver.
//!
//! Static product content keyed by [`Driver`]. The report expands the
//! entries for the primary and secondary drivers.

use serde::Serialize;

use crate::models::driver::Driver;

/// What a high score on one driver means, and what to do with that.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub driver: Driver,
    pub title: &'static str,
    pub meaning: &'static str,
    /// Conditions to look for in a role or team.
    pub seek: &'static [&'static str],
    /// Conditions that drain this profile.
    pub avoid: &'static [&'static str],
    /// Questions worth asking in an interview or review.
    pub prompts: &'static [&'static str],
}

/// Look up the interpretation for a driver.
pub fn interpretation(driver: Driver) -> &'static Interpretation {
    &INTERPRETATIONS[driver as usize]
}

static INTERPRETATIONS: [Interpretation; 6] = [
    Interpretation {
        driver: Driver::Certainty,
        title: "Certainty: You thrive on stability and clear expectations",
        meaning: "When Certainty is high, you feel safest and most energized in environments \
                  with clarity, predictability, and reliable standards. You don’t need constant \
                  surprises to stay engaged — you need confidence that the ground is solid.",
        seek: &[
            "Clear goals, defined roles, and consistent expectations",
            "Reliable processes and transparent decision-making",
            "Steady pace and realistic planning horizons",
        ],
        avoid: &[
            "Frequent chaos, shifting priorities, and unclear ownership",
            "Constant ‘firefighting’ culture with little structure",
            "Unpredictable income/conditions (unless offset elsewhere)",
        ],
        prompts: &[
            "Where will I get clarity on success and priorities each week?",
            "How are decisions made when things change?",
            "What does stability look like in this role and team?",
        ],
    },
    Interpretation {
        driver: Driver::Variety,
        title: "Variety: You thrive on freedom, change, and momentum",
        meaning: "When Variety is high, you feel alive in roles with flexibility, novelty, and \
                  room to explore. Too much routine can quietly drain you — even if everything \
                  looks ‘fine’ on paper.",
        seek: &[
            "Flexible schedules, dynamic responsibilities, and experimentation",
            "Autonomy and room to change how you work",
            "Projects with variety, learning-by-doing, and movement",
        ],
        avoid: &[
            "Highly repetitive tasks and rigid bureaucracy",
            "Slow environments where change is resisted",
            "Micromanagement that restricts freedom",
        ],
        prompts: &[
            "How much autonomy will I have day-to-day?",
            "How often will work change and evolve here?",
            "Will this role still feel fresh in 6 months?",
        ],
    },
    Interpretation {
        driver: Driver::Significance,
        title: "Significance: You thrive on achievement, recognition, and impact",
        meaning: "When Significance is high, you’re motivated by meaningful wins, being valued, \
                  and knowing your work matters. You don’t need ego-stroking — you need fair \
                  recognition and opportunities to contribute at a high level.",
        seek: &[
            "Clear ownership and visible outcomes",
            "Feedback and recognition tied to real contribution",
            "Roles with responsibility, influence, or high standards",
        ],
        avoid: &[
            "Being underutilized or invisible in a role",
            "Environments where excellence goes unnoticed",
            "Unclear performance signals or politics-only recognition",
        ],
        prompts: &[
            "How is great work recognized here?",
            "What does success look like, and who notices it?",
            "Will I have ownership over meaningful outcomes?",
        ],
    },
    Interpretation {
        driver: Driver::Connection,
        title: "Connection: You thrive on belonging and strong relationships",
        meaning: "When Connection is high, your energy is closely tied to people, culture, and \
                  trust. You’re at your best when you feel included, respected, and part of \
                  something.",
        seek: &[
            "Supportive teams, healthy culture, and psychological safety",
            "Collaboration, mentoring, and clear communication",
            "Values alignment and a sense of belonging",
        ],
        avoid: &[
            "Toxic competition or isolation",
            "Cold or dismissive communication norms",
            "Cultures where relationships are ‘optional’",
        ],
        prompts: &[
            "How do people treat each other under stress?",
            "Who will I collaborate with most, and how?",
            "Do I feel respected and included here?",
        ],
    },
    Interpretation {
        driver: Driver::Growth,
        title: "Growth: You thrive on learning, challenge, and development",
        meaning: "When Growth is high, stagnation is your enemy. You feel fulfilled when you’re \
                  stretching your skills, learning, and becoming more capable over time.",
        seek: &[
            "Clear learning curve, feedback, and skill development",
            "Challenging goals and meaningful stretch projects",
            "Mentorship, training, and room to advance",
        ],
        avoid: &[
            "Static roles with little learning",
            "Comfortable stagnation or ‘same year repeated’",
            "Environments that punish learning mistakes",
        ],
        prompts: &[
            "What will I learn in the first 90 days?",
            "How does this company support development?",
            "Where is the growth path after 6–12 months?",
        ],
    },
    Interpretation {
        driver: Driver::Contribution,
        title: "Contribution: You thrive on meaning and making a positive difference",
        meaning: "When Contribution is high, you need your work to stand for something. Even \
                  high pay or prestige won’t fully satisfy you if you can’t feel the purpose \
                  and impact.",
        seek: &[
            "Mission clarity and real-world impact",
            "Work that helps customers, community, or a bigger purpose",
            "Organizations with values you respect",
        ],
        avoid: &[
            "Work that feels empty or misaligned with your values",
            "Environments focused only on numbers with no meaning",
            "Roles where impact is unclear or purely extractive",
        ],
        prompts: &[
            "Who benefits from my work, and how?",
            "Do I respect what this organization contributes?",
            "Will I feel proud of this work a year from now?",
        ],
    },
];
