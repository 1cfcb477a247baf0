use super::*;
use crate::Zoom;
use crate::clock::Countdown;
use crate::clock::ScoreCounter;
use crate::hud::Legend;
use crate::hud::popup;
use crate::map::LatLng;
use crate::map::MapConfig;
use crate::map::MapSurface;
use crate::map::MarkerGroup;
use crate::map::MarkerId;
use crate::protocol::AnswerSubmission;
use crate::protocol::ColorTag;
use crate::protocol::LegendUpdate;
use crate::protocol::Outbound;
use crate::protocol::PlayerAnswerResult;
use crate::protocol::RoundAnnouncement;
use crate::protocol::TurnResults;
use tokio::time::Instant;

/// The local player's result for the running round and its marker.
#[derive(Debug, Clone)]
struct Own {
    result: PlayerAnswerResult,
    marker: Option<MarkerId>,
    counter: Option<ScoreCounter>,
}

/// Round state machine.
///
/// Owns every piece of per-round client state: the phase, the marker group,
/// the prompt and countdown, the legend and the local player's color. Each
/// handler runs to completion and gates itself on the current [`Phase`].
pub struct Round<S> {
    rules: Rules,
    phase: Phase,
    markers: MarkerGroup<S>,
    color: ColorTag,
    accepting: bool,
    prompt: String,
    countdown: Countdown,
    legend: Legend,
    own: Option<Own>,
}

impl<S> Round<S>
where
    S: MapSurface,
{
    pub fn new(surface: S, config: MapConfig, rules: Rules) -> Self {
        Self {
            rules,
            phase: Phase::default(),
            markers: MarkerGroup::new(surface, config),
            color: ColorTag::default(),
            accepting: false,
            prompt: String::from(popup::WAITING),
            countdown: Countdown::new(rules.max_response_time),
            legend: Legend::default(),
            own: None,
        }
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn markers(&self) -> &MarkerGroup<S> {
        &self.markers
    }
    /// Color of the local player's future answer markers.
    pub fn color(&self) -> ColorTag {
        self.color
    }
    /// Whether a click would be taken as an answer.
    pub fn accepting(&self) -> bool {
        self.accepting
    }
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
    pub fn legend(&self) -> &Legend {
        &self.legend
    }
    pub fn own_result(&self) -> Option<&PlayerAnswerResult> {
        self.own.as_ref().map(|own| &own.result)
    }
}

impl<S> Round<S>
where
    S: MapSurface,
{
    /// A new round starts: wipe the map, show the location and open answers.
    pub fn announce(&mut self, announcement: &RoundAnnouncement, now: Instant) {
        if !self.advance(Trigger::Announce) {
            return;
        }
        self.markers.clear();
        self.own = None;
        self.prompt = popup::locate(announcement);
        self.countdown.restart(now);
        self.accepting = true;
        log::info!("[round] {}", self.prompt);
    }
    /// A click on the map. Returns the answer to transmit, if it counts.
    pub fn click(&mut self, at: LatLng) -> Option<Outbound> {
        if !self.advance(Trigger::Click) {
            return None;
        }
        if !self.accepting {
            log::debug!("[round] click at {} after answering", at);
            return None;
        }
        let bounds = self.markers.config().bounds();
        if !bounds.contains(&at) {
            log::debug!("[round] click at {} outside the map", at);
        }
        let at = bounds.clamp(at);
        match self.rules.allow_multiple_answers {
            true => self.markers.clear(),
            false => self.accepting = false,
        }
        self.markers.create_marker(at, self.color);
        log::debug!("[round] answer {} in {}", at, self.color);
        Some(Outbound::Answer(AnswerSubmission::from(at)))
    }
    /// The round is over: show every answer and the correct location.
    pub fn reveal(&mut self, results: &TurnResults, _now: Instant) {
        if !self.advance(Trigger::Reveal) {
            return;
        }
        self.markers.reset_zoom();
        self.accepting = false;
        self.countdown.reset();
        self.markers.clear();
        for (i, answer) in results.answers.iter().enumerate() {
            let marker = self.markers.create_marker(answer.at(), answer.color());
            match i {
                0 => marker.popup(&popup::closest(answer)).open(),
                _ => marker.popup(&popup::distant(answer)),
            };
        }
        self.markers
            .create_marker(results.correct.at(), ColorTag::CORRECT)
            .popup(&popup::correct(&results.correct));
        self.draw_own();
        self.prompt = String::from(popup::WAITING);
        log::info!(
            "[round] revealed {} answers, correct {}",
            results.answers.len(),
            results.correct.name
        );
    }
    /// The local player's own outcome. A repeat updates the marker in place.
    pub fn results(&mut self, result: PlayerAnswerResult, now: Instant) {
        if !self.advance(Trigger::Results) {
            return;
        }
        log::info!(
            "[round] {} km away, +{} points, #{} of {}",
            crate::round2(result.distance),
            result.score,
            result.rank,
            result.total
        );
        let counter = match result.too_far() {
            true => None,
            false => Some(ScoreCounter::start(result.score, now)),
        };
        let existing = self
            .own
            .as_ref()
            .and_then(|own| own.marker)
            .filter(|id| self.markers.contains(*id));
        self.own = Some(Own {
            result,
            marker: existing,
            counter,
        });
        match existing {
            Some(id) => {
                let text = self.own_text();
                self.markers.annotate(id, &text);
            }
            None => self.draw_own(),
        }
    }
    pub fn replace_legend(&mut self, update: LegendUpdate) {
        if self.advance(Trigger::Legend) {
            log::debug!("[round] legend of {} players", update.0.len());
            self.legend.replace(update);
        }
    }
    /// Drawn markers keep their color.
    pub fn recolor(&mut self, color: ColorTag) {
        if self.advance(Trigger::Color) {
            log::debug!("[round] color {} -> {}", self.color, color);
            self.color = color;
        }
    }
    /// Zoom the map, within the configured range.
    /// Returns `false` when the zoom is locked.
    pub fn zoom(&mut self, level: Zoom) -> bool {
        match self.markers.config().zoom_control() {
            true => {
                self.markers.zoom(level);
                true
            }
            false => false,
        }
    }
    /// Advance the score animation. Returns whether a popup changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(own) = self.own.as_mut() else {
            return false;
        };
        let Some(counter) = own.counter.as_mut() else {
            return false;
        };
        match (counter.poll(now), own.marker) {
            (Some(value), Some(id)) => {
                let text = popup::result(&own.result, value);
                self.markers.annotate(id, &text)
            }
            _ => false,
        }
    }
}

impl<S> Round<S>
where
    S: MapSurface,
{
    fn advance(&mut self, trigger: Trigger) -> bool {
        match self.phase.next(trigger) {
            Some(next) => {
                if next != self.phase {
                    log::debug!("[round] {} -> {}", self.phase, next);
                }
                self.phase = next;
                true
            }
            None => {
                log::debug!("[round] {:?} ignored while {}", trigger, self.phase);
                false
            }
        }
    }
    fn own_text(&self) -> String {
        match self.own.as_ref() {
            Some(own) => {
                let shown = own.counter.and_then(|c| c.shown()).unwrap_or(0);
                popup::result(&own.result, shown)
            }
            None => String::new(),
        }
    }
    fn draw_own(&mut self) {
        let text = self.own_text();
        if let Some(own) = self.own.as_mut() {
            let id = self
                .markers
                .create_marker(own.result.at(), ColorTag::OWN)
                .popup(&text)
                .id();
            own.marker = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Canvas;
    use crate::protocol::CorrectAnswer;
    use crate::protocol::TurnAnswer;
    use std::time::Duration;
    fn round(allow_multiple_answers: bool) -> Round<Canvas> {
        let rules = Rules {
            allow_multiple_answers,
            ..Rules::default()
        };
        let config = MapConfig::new("static", rules.zoom_level);
        Round::new(Canvas::new(&config), config, rules)
    }
    fn paris() -> RoundAnnouncement {
        RoundAnnouncement {
            city: String::from("Paris"),
            country: String::from("France"),
            country_code: Some(String::from("FR")),
        }
    }
    fn answer(name: &str, distance: f64, color: Option<ColorTag>) -> TurnAnswer {
        TurnAnswer {
            name: name.to_string(),
            lat: 48.0,
            lng: 2.0 + distance,
            distance,
            color,
        }
    }
    fn turn() -> TurnResults {
        TurnResults {
            answers: vec![
                answer("ada", 1.2, Some(ColorTag::Green)),
                answer("bob", 5.0, None),
            ],
            correct: CorrectAnswer {
                name: String::from("Paris"),
                lat: 48.85,
                lng: 2.35,
            },
        }
    }
    fn own(score: u32) -> PlayerAnswerResult {
        PlayerAnswerResult {
            lat: 48.0,
            lng: 3.0,
            distance: 73.5,
            score,
            rank: 2,
            total: 3,
        }
    }
    fn popups(round: &Round<Canvas>) -> Vec<String> {
        round
            .markers()
            .surface()
            .pins()
            .filter_map(|p| p.popup.clone())
            .collect()
    }
    #[test]
    fn starts_idle() {
        let round = round(true);
        assert_eq!(round.phase(), Phase::Idle);
        assert!(!round.accepting());
        assert!(round.markers().is_empty());
    }
    #[test]
    fn announce_clears_and_opens() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.click(LatLng::new(1.0, 1.0));
        round.reveal(&turn(), now);
        assert!(!round.markers().is_empty());
        round.announce(&paris(), now);
        assert!(round.markers().is_empty());
        assert!(round.markers().surface().is_empty());
        assert_eq!(round.phase(), Phase::Answering);
        assert_eq!(round.prompt(), "Locate Paris (France)");
        assert!(round.accepting());
        assert!(round.countdown().running());
    }
    #[test]
    fn announce_restarts_countdown() {
        let mut round = round(true);
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(5);
        round.announce(&paris(), t0);
        round.announce(&paris(), t1);
        assert_eq!(
            round.countdown().deadline(),
            Some(t1 + round.rules().max_response_time)
        );
    }
    #[test]
    fn no_answer_outside_answering() {
        let mut round = round(true);
        let now = Instant::now();
        assert_eq!(round.click(LatLng::new(1.0, 1.0)), None);
        assert!(round.markers().is_empty());
        round.announce(&paris(), now);
        round.reveal(&turn(), now);
        let before = round.markers().len();
        assert_eq!(round.click(LatLng::new(1.0, 1.0)), None);
        assert_eq!(round.markers().len(), before);
    }
    #[test]
    fn single_answer_per_round() {
        let mut round = round(false);
        let now = Instant::now();
        round.announce(&paris(), now);
        assert_eq!(
            round.click(LatLng::new(10.0, 20.0)),
            Some(Outbound::Answer(AnswerSubmission {
                lat: 10.0,
                lng: 20.0
            }))
        );
        assert!(!round.accepting());
        assert_eq!(round.click(LatLng::new(11.0, 21.0)), None);
        assert_eq!(round.markers().len(), 1);
        round.announce(&paris(), now);
        assert!(round.click(LatLng::new(11.0, 21.0)).is_some());
    }
    #[test]
    fn multiple_answers_replace_marker() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        for i in 0..4 {
            let at = LatLng::new(i as f64, i as f64);
            assert!(round.click(at).is_some());
            assert_eq!(round.markers().len(), 1);
            assert_eq!(round.markers().surface().pins().next().map(|p| p.at), Some(at));
        }
        assert!(round.accepting());
    }
    #[test]
    fn click_clamped_to_bounds() {
        let mut round = round(true);
        round.announce(&paris(), Instant::now());
        assert_eq!(
            round.click(LatLng::new(-89.0, 10.0)),
            Some(Outbound::Answer(AnswerSubmission {
                lat: -70.0,
                lng: 10.0
            }))
        );
    }
    #[test]
    fn recolor_affects_future_markers_only() {
        let mut round = round(true);
        round.announce(&paris(), Instant::now());
        round.click(LatLng::new(1.0, 1.0));
        round.recolor(ColorTag::Orange);
        assert_eq!(round.color(), ColorTag::Orange);
        let pin = round.markers().surface().pins().next().cloned();
        assert_eq!(pin.map(|p| p.color()), Some(ColorTag::Blue));
        round.click(LatLng::new(2.0, 2.0));
        let pin = round.markers().surface().pins().next().cloned();
        assert_eq!(pin.map(|p| p.color()), Some(ColorTag::Orange));
    }
    #[test]
    fn reveal_draws_answers_and_correct() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.click(LatLng::new(1.0, 1.0));
        round.reveal(&turn(), now);
        let canvas = round.markers().surface();
        let pins = canvas.pins().collect::<Vec<_>>();
        assert_eq!(pins.len(), 3);
        assert_eq!(pins[0].color(), ColorTag::Green);
        assert!(pins[0].open);
        assert_eq!(
            pins[0].popup.as_deref(),
            Some("Closest answer (ada: 1.2 km away)")
        );
        assert_eq!(pins[1].color(), ColorTag::Grey);
        assert_eq!(pins[1].popup.as_deref(), Some("bob: 5 km away"));
        assert_eq!(pins[2].color(), ColorTag::Red);
        assert_eq!(pins[2].popup.as_deref(), Some("Paris"));
        assert_eq!(canvas.opened().map(|p| p.color()), Some(ColorTag::Green));
        assert_eq!(round.phase(), Phase::RevealedWaiting);
        assert_eq!(round.prompt(), "Waiting for the next turn");
        assert!(!round.accepting());
        assert!(!round.countdown().running());
    }
    #[test]
    fn reveal_resets_zoom() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.markers.zoom(4);
        assert_eq!(round.markers().surface().zoom_level(), 4);
        round.reveal(&turn(), now);
        assert_eq!(round.markers().surface().zoom_level(), 2);
    }
    #[test]
    fn reveal_ignored_while_idle() {
        let mut round = round(true);
        round.reveal(&turn(), Instant::now());
        assert_eq!(round.phase(), Phase::Idle);
        assert!(round.markers().is_empty());
    }
    #[test]
    fn reveal_twice_redraws() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.reveal(&turn(), now);
        round.reveal(&turn(), now);
        assert_eq!(round.markers().len(), 3);
        assert_eq!(round.markers().surface().len(), 3);
    }
    #[test]
    fn results_after_reveal() {
        let mut round = round(true);
        let t0 = Instant::now();
        round.announce(&paris(), t0);
        round.reveal(&turn(), t0);
        round.results(own(250), t0);
        assert_eq!(round.markers().len(), 4);
        let mut t = t0;
        while t <= t0 + Duration::from_secs(2) {
            round.tick(t);
            t += Duration::from_millis(50);
        }
        assert!(!round.tick(t0 + Duration::from_secs(3)));
        assert!(popups(&round).contains(&String::from(
            "73.5 km away: +250 points\nYou are #2 out of 3 player(s) for this turn"
        )));
    }
    #[test]
    fn results_before_reveal() {
        let mut round = round(true);
        let t0 = Instant::now();
        round.announce(&paris(), t0);
        round.results(own(100), t0);
        round.reveal(&turn(), t0 + Duration::from_millis(10));
        assert_eq!(round.markers().len(), 4);
        let ownpin = round.markers().surface().pins().last().cloned();
        assert_eq!(ownpin.map(|p| p.color()), Some(ColorTag::OWN));
        assert!(round.tick(t0 + Duration::from_secs(1)));
        assert!(popups(&round).iter().any(|p| p.contains("+100 points")));
    }
    #[test]
    fn duplicate_results_update_in_place() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.reveal(&turn(), now);
        round.results(own(80), now);
        round.results(own(80), now);
        assert_eq!(round.markers().len(), 4);
        assert_eq!(round.own_result(), Some(&own(80)));
    }
    #[test]
    fn too_far_result() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.reveal(&turn(), now);
        round.results(own(0), now);
        assert!(!round.tick(now + Duration::from_millis(500)));
        assert!(popups(&round).iter().any(|p| p.contains("Too far away!")));
    }
    #[test]
    fn results_ignored_while_idle() {
        let mut round = round(true);
        round.results(own(10), Instant::now());
        assert!(round.own_result().is_none());
        assert!(round.markers().is_empty());
    }
    #[test]
    fn announce_forgets_result() {
        let mut round = round(true);
        let now = Instant::now();
        round.announce(&paris(), now);
        round.results(own(10), now);
        round.announce(&paris(), now);
        assert!(round.own_result().is_none());
        assert!(!round.tick(now + Duration::from_secs(1)));
    }
    #[test]
    fn results_while_answering_survive_click_and_reveal() {
        let mut round = round(true);
        let t0 = Instant::now();
        round.announce(&paris(), t0);
        round.results(own(100), t0);
        assert_eq!(round.markers().len(), 1);
        assert!(round.click(LatLng::new(5.0, 5.0)).is_some());
        assert_eq!(round.markers().len(), 1);
        assert!(popups(&round).is_empty());
        round.reveal(&turn(), t0);
        assert_eq!(round.markers().len(), 4);
        let pins = round.markers().surface().pins().collect::<Vec<_>>();
        assert_eq!(pins[3].color(), ColorTag::OWN);
        assert_eq!(pins[3].at, LatLng::new(48.0, 3.0));
        assert!(round.tick(t0 + Duration::from_secs(1)));
        assert!(popups(&round).contains(&String::from(
            "73.5 km away: +100 points\nYou are #2 out of 3 player(s) for this turn"
        )));
        assert!(!round.tick(t0 + Duration::from_secs(2)));
        assert_eq!(round.markers().len(), 4);
    }
    #[test]
    fn zoom_within_range() {
        let mut round = round(true);
        assert!(round.zoom(3));
        assert_eq!(round.markers().surface().zoom_level(), 3);
        assert!(round.zoom(9));
        assert_eq!(round.markers().surface().zoom_level(), 4);
    }
    #[test]
    fn zoom_refused_when_locked() {
        let rules = Rules {
            zoom_level: 0,
            ..Rules::default()
        };
        let config = MapConfig::new("static", rules.zoom_level);
        let mut round = Round::new(Canvas::new(&config), config, rules);
        assert!(!round.zoom(3));
        assert_eq!(round.markers().surface().zoom_level(), 2);
    }
    #[test]
    fn legend_any_phase() {
        let mut round = round(true);
        let update = LegendUpdate(vec![crate::protocol::LegendEntry {
            name: String::from("ada"),
            color: ColorTag::Green,
            distance: 3.0,
        }]);
        round.replace_legend(update.clone());
        assert_eq!(round.legend().entries(), update.0.as_slice());
        round.replace_legend(LegendUpdate::default());
        assert!(round.legend().is_empty());
        assert_eq!(round.phase(), Phase::Idle);
    }
}
