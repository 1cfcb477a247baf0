use crate::Points;
use crate::protocol::CorrectAnswer;
use crate::protocol::PlayerAnswerResult;
use crate::protocol::RoundAnnouncement;
use crate::protocol::TurnAnswer;
use crate::round2;

/// Prompt shown between a reveal and the next announcement.
pub const WAITING: &str = "Waiting for the next turn";

/// Prompt shown while a round accepts answers.
pub fn locate(announcement: &RoundAnnouncement) -> String {
    format!("Locate {} ({})", announcement.city, announcement.country)
}

/// Popup of the closest answer of the round.
pub fn closest(answer: &TurnAnswer) -> String {
    format!(
        "Closest answer ({}: {} km away)",
        answer.name,
        round2(answer.distance)
    )
}

/// Popup of every other revealed answer.
pub fn distant(answer: &TurnAnswer) -> String {
    format!("{}: {} km away", answer.name, round2(answer.distance))
}

pub fn correct(answer: &CorrectAnswer) -> String {
    answer.name.clone()
}

/// Popup of the local player's own answer.
/// `shown` is the score counter's current value.
pub fn result(result: &PlayerAnswerResult, shown: Points) -> String {
    let score = match result.too_far() {
        true => String::from("Too far away!"),
        false => format!("+{} points", shown),
    };
    format!(
        "{} km away: {}\nYou are #{} out of {} player(s) for this turn",
        round2(result.distance),
        score,
        result.rank,
        result.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    fn answer(name: &str, distance: f64) -> TurnAnswer {
        TurnAnswer {
            name: name.to_string(),
            lat: 0.0,
            lng: 0.0,
            distance,
            color: None,
        }
    }
    fn own(score: Points) -> PlayerAnswerResult {
        PlayerAnswerResult {
            lat: 0.0,
            lng: 0.0,
            distance: 321.456,
            score,
            rank: 2,
            total: 5,
        }
    }
    #[test]
    fn locate_prompt() {
        let announcement = RoundAnnouncement {
            city: String::from("Lyon"),
            country: String::from("France"),
            country_code: None,
        };
        assert_eq!(locate(&announcement), "Locate Lyon (France)");
    }
    #[test]
    fn answer_popups() {
        assert_eq!(
            closest(&answer("ada", 1.23456)),
            "Closest answer (ada: 1.23 km away)"
        );
        assert_eq!(distant(&answer("bob", 5.0)), "bob: 5 km away");
    }
    #[test]
    fn result_popup_counts() {
        assert_eq!(
            result(&own(250), 120),
            "321.46 km away: +120 points\nYou are #2 out of 5 player(s) for this turn"
        );
    }
    #[test]
    fn result_popup_too_far() {
        assert!(result(&own(0), 0).starts_with("321.46 km away: Too far away!"));
    }
}
