use crate::hud::Leaderboard;
use crate::round::Round;
use tokio::time::Instant;

/// Where the session shows its state after every change.
pub trait Screen<S> {
    fn draw(&mut self, round: &Round<S>, leaderboard: &Leaderboard, now: Instant);
}

/// Headless: nothing is shown.
impl<S> Screen<S> for () {
    fn draw(&mut self, _: &Round<S>, _: &Leaderboard, _: Instant) {}
}

/// Colored text HUD on stdout, reprinted only when it changes.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct Terminal {
    last: String,
}

#[cfg(feature = "cli")]
impl Terminal {
    const BAR: usize = 20;

    fn paint(color: crate::protocol::ColorTag) -> colored::Color {
        use crate::protocol::ColorTag;
        use colored::Color;
        match color {
            ColorTag::Blue => Color::Blue,
            ColorTag::Red => Color::Red,
            ColorTag::Green => Color::Green,
            ColorTag::Orange => Color::TrueColor { r: 255, g: 165, b: 0 },
            ColorTag::Yellow => Color::Yellow,
            ColorTag::Violet => Color::Magenta,
            ColorTag::Grey => Color::BrightBlack,
            ColorTag::Black => Color::Black,
            ColorTag::Gold => Color::TrueColor { r: 255, g: 215, b: 0 },
        }
    }
    fn render(round: &Round<crate::map::Canvas>, leaderboard: &Leaderboard, now: Instant) -> String {
        use colored::Colorize;
        use std::fmt::Write;
        let mut out = String::new();
        let _ = writeln!(out, "{}", round.prompt().bold());
        if let Some(remaining) = round.countdown().remaining(now) {
            let filled = (round.countdown().progress(now) * Self::BAR as f64) as usize;
            let left = match round.countdown().expired(now) {
                true => String::from("time's up"),
                false => format!("{}s", remaining.as_secs()),
            };
            let _ = writeln!(
                out,
                "[{}{}] {}",
                "#".repeat(filled).yellow(),
                "-".repeat(Self::BAR - filled.min(Self::BAR)),
                left
            );
        }
        for pin in round.markers().surface().pins() {
            let dot = "●".color(Self::paint(pin.color()));
            let text = pin.popup.as_deref().unwrap_or_default().replace('\n', " | ");
            match pin.open {
                true => {
                    let _ = writeln!(out, "  {} {} {}", dot, pin.at, text.bold());
                }
                false => {
                    let _ = writeln!(out, "  {} {} {}", dot, pin.at, text);
                }
            }
        }
        for (color, line) in round.legend().lines() {
            let _ = writeln!(out, "  {} {}", "■".color(Self::paint(color)), line.dimmed());
        }
        let _ = write!(out, "{}", leaderboard);
        out
    }
}

#[cfg(feature = "cli")]
impl Screen<crate::map::Canvas> for Terminal {
    fn draw(&mut self, round: &Round<crate::map::Canvas>, leaderboard: &Leaderboard, now: Instant) {
        let frame = Self::render(round, leaderboard, now);
        if frame != self.last {
            println!("{}", frame);
            self.last = frame;
        }
    }
}

/// Counts redraws.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Tally(pub usize);

#[cfg(test)]
impl<S> Screen<S> for Tally {
    fn draw(&mut self, _: &Round<S>, _: &Leaderboard, _: Instant) {
        self.0 += 1;
    }
}
