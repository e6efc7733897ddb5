//! The fixed question bank

/// Lowest answer on the Likert scale ("rarely true")
pub const MIN_ANSWER: u8 = 0;
/// Highest answer on the Likert scale ("almost always true")
pub const MAX_ANSWER: u8 = 3;

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

pub const QUESTIONS: [Question; 10] = [
    Question {
        id: "q1",
        text: "I make a high number of small decisions every day that don’t feel important individually, but add up.",
    },
    Question {
        id: "q2",
        text: "I’m carrying several unfinished tasks or unresolved decisions that stay in the back of my mind.",
    },
    Question {
        id: "q3",
        text: "My day requires frequent switching between different types of tasks, roles, or responsibilities without much transition time.",
    },
    Question {
        id: "q4",
        text: "Other people regularly rely on me to manage, absorb, or respond to their needs, concerns, or problems.",
    },
    Question {
        id: "q5",
        text: "My time is broken into small blocks, making it hard to focus deeply on one thing.",
    },
    Question {
        id: "q6",
        text: "I’m responsible for outcomes that depend on other people, systems, or decisions I don’t fully control.",
    },
    Question {
        id: "q7",
        text: "I move from one obligation to the next with little uninterrupted downtime in between.",
    },
    Question {
        id: "q8",
        text: "I’m expected to operate in multiple roles within the same day or hour.",
    },
    Question {
        id: "q9",
        text: "I regularly say yes to things that add pressure, even when I know I’m near capacity.",
    },
    Question {
        id: "q10",
        text: "When I struggle to focus or start tasks, I assume it’s a motivation or discipline problem.",
    },
];
