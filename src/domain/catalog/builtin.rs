//! Surveys compiled into the binary.

use once_cell::sync::Lazy;

use super::{Question, Survey, SurveyCatalog};
use crate::domain::foundation::{QuestionId, SurveySlug};

pub(super) static BUILTIN_CATALOG: Lazy<SurveyCatalog> = Lazy::new(|| SurveyCatalog {
    surveys: vec![
        core_personality(),
        work_style(),
        relationships(),
        creativity(),
    ],
});

fn q(id: u32, text: &str, options: [&str; 4]) -> Question {
    Question::new(QuestionId::new(id), text, options)
}

fn slug(s: &'static str) -> SurveySlug {
    SurveySlug::from_static(s)
}

fn core_personality() -> Survey {
    Survey::from_parts(
        slug("core-personality"),
        "Core Personality",
        "Discover the traits that shape how you think, feel and act every day.",
        vec![
            q(
                1,
                "You have a free weekend with no plans. What sounds best?",
                [
                    "A lively gathering with lots of friends",
                    "A quiet day with a good book or film",
                    "Exploring somewhere I've never been",
                    "Catching up on projects and chores",
                ],
            ),
            q(
                2,
                "When facing a tough decision, you usually...",
                [
                    "Trust my gut feeling",
                    "Make a list of pros and cons",
                    "Ask people I trust for advice",
                    "Sleep on it and decide later",
                ],
            ),
            q(
                3,
                "How do you handle unexpected changes to your plans?",
                [
                    "I adapt quickly and enjoy the surprise",
                    "I feel uneasy but manage",
                    "I immediately make a new plan",
                    "I get frustrated at first",
                ],
            ),
            q(
                4,
                "Which compliment would mean the most to you?",
                [
                    "You're so kind",
                    "You're brilliant",
                    "You're so much fun",
                    "You're incredibly reliable",
                ],
            ),
            q(
                5,
                "In a group conversation, you tend to...",
                [
                    "Lead the discussion",
                    "Listen and chime in occasionally",
                    "Crack jokes and lighten the mood",
                    "Ask questions to understand others",
                ],
            ),
        ],
    )
}

fn work_style() -> Survey {
    Survey::from_parts(
        slug("work-style"),
        "Work Style",
        "Learn how you collaborate, focus and thrive in a professional setting.",
        vec![
            q(
                1,
                "Your ideal work environment is...",
                [
                    "A buzzing open office",
                    "A quiet private space",
                    "Anywhere with a laptop and Wi-Fi",
                    "A small, close-knit team room",
                ],
            ),
            q(
                2,
                "A big deadline is two weeks away. You...",
                [
                    "Start immediately and pace myself",
                    "Plan it out, then work in bursts",
                    "Do my best work in the final days",
                    "Split it up and delegate parts",
                ],
            ),
            q(
                3,
                "What motivates you most at work?",
                [
                    "Recognition and praise",
                    "Solving hard problems",
                    "Helping my team succeed",
                    "Financial rewards and growth",
                ],
            ),
            q(
                4,
                "When a colleague disagrees with your idea, you...",
                [
                    "Defend it with evidence",
                    "Look for a compromise",
                    "Ask them to explain their view",
                    "Let it go to keep the peace",
                ],
            ),
            q(
                5,
                "Which role do you naturally take on a project?",
                [
                    "The visionary",
                    "The organizer",
                    "The doer",
                    "The mediator",
                ],
            ),
        ],
    )
}

fn relationships() -> Survey {
    Survey::from_parts(
        slug("relationships"),
        "Relationships",
        "Explore how you connect with friends, family and partners.",
        vec![
            q(
                1,
                "A friend is going through a hard time. You...",
                [
                    "Show up in person right away",
                    "Send a thoughtful message",
                    "Offer practical help",
                    "Give them space until they reach out",
                ],
            ),
            q(
                2,
                "How do you most like to show affection?",
                [
                    "Kind words",
                    "Quality time",
                    "Thoughtful gifts",
                    "Helpful actions",
                ],
            ),
            q(
                3,
                "After a disagreement with someone close, you...",
                [
                    "Talk it through immediately",
                    "Need time to cool off first",
                    "Write down my thoughts",
                    "Wait for them to bring it up",
                ],
            ),
            q(
                4,
                "Your social circle is best described as...",
                [
                    "Large and diverse",
                    "A few very close friends",
                    "Mostly family",
                    "Always changing",
                ],
            ),
            q(
                5,
                "What matters most in a relationship?",
                ["Trust", "Fun", "Growth", "Stability"],
            ),
        ],
    )
}

fn creativity() -> Survey {
    Survey::from_parts(
        slug("creativity"),
        "Creativity",
        "Uncover where your ideas come from and how you bring them to life.",
        vec![
            q(
                1,
                "Where do your best ideas come from?",
                [
                    "Long walks or showers",
                    "Conversations with others",
                    "Reading and research",
                    "Hands-on experimenting",
                ],
            ),
            q(
                2,
                "Faced with a blank page, you...",
                [
                    "Dive in and start anywhere",
                    "Make an outline first",
                    "Look for inspiration",
                    "Procrastinate until it clicks",
                ],
            ),
            q(
                3,
                "Which creative outlet appeals to you most?",
                [
                    "Writing",
                    "Visual art or design",
                    "Music or performance",
                    "Building or tinkering",
                ],
            ),
            q(
                4,
                "How do you feel about sharing unfinished work?",
                [
                    "Love early feedback",
                    "Only with people I trust",
                    "Prefer to polish it first",
                    "I rarely share my work",
                ],
            ),
            q(
                5,
                "A project doesn't turn out as planned. You...",
                [
                    "Start over with a new approach",
                    "Find the beauty in the mistake",
                    "Analyze what went wrong",
                    "Move on to the next idea",
                ],
            ),
        ],
    )
}
