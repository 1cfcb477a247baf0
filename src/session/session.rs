use super::*;
use crate::ANIMATION_TICK;
use crate::hud::Leaderboard;
use crate::identity::PlayerName;
use crate::map::MapSurface;
use crate::protocol::Inbound;
use crate::protocol::Outbound;
use crate::round::Round;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;

/// One joined game, from the handshake until the channel closes.
///
/// - joins exactly once, right after the channel opens
/// - routes every inbound event to the round or the leaderboard
/// - turns local inputs into answers while the round accepts them
/// - drives the score animation on a fixed tick
pub struct Session<T, S> {
    name: PlayerName,
    transport: T,
    round: Round<S>,
    leaderboard: Leaderboard,
}

impl<T, S> Session<T, S>
where
    T: Transport,
    S: MapSurface,
{
    /// Send `join_game` on a freshly opened transport.
    pub async fn join(name: PlayerName, mut transport: T, round: Round<S>) -> anyhow::Result<Self> {
        transport.send(Outbound::JoinGame(name.clone())).await?;
        log::info!("[session] joined as {}", name);
        Ok(Self {
            name,
            transport,
            round,
            leaderboard: Leaderboard::default(),
        })
    }
    pub fn name(&self) -> &PlayerName {
        &self.name
    }
    pub fn round(&self) -> &Round<S> {
        &self.round
    }
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}

impl<T, S> Session<T, S>
where
    T: Transport,
    S: MapSurface,
{
    /// Route one inbound event. Phase gating happens inside the round.
    pub fn dispatch(&mut self, event: Inbound, now: Instant) {
        log::debug!("[session] {}", event);
        match event {
            Inbound::NewTurn(ref announcement) => self.round.announce(announcement, now),
            Inbound::EndOfTurn(ref results) => self.round.reveal(results, now),
            Inbound::PlayerResults(result) => self.round.results(result, now),
            Inbound::LeaderboardUpdate(ref snapshot) => self.leaderboard.render(snapshot),
            Inbound::LegendChanges(update) => self.round.replace_legend(update),
            Inbound::ColorInform(color) => self.round.recolor(color),
        }
    }
    /// Apply one local input, transmitting the answer if the round takes it.
    pub async fn input(&mut self, input: Input) -> anyhow::Result<()> {
        match input {
            Input::Click(at) => match self.round.click(at) {
                Some(answer) => self.transport.send(answer).await,
                None => Ok(()),
            },
            Input::Toggle => {
                self.leaderboard.toggle();
                Ok(())
            }
            Input::Zoom(level) => {
                if !self.round.zoom(level) {
                    log::debug!("[session] zoom is locked");
                }
                Ok(())
            }
        }
    }
    /// Wait for and route the next inbound event.
    /// Returns `false` once the channel is closed.
    pub async fn pump(&mut self) -> bool {
        match self.transport.recv().await {
            Some(event) => {
                self.dispatch(event, Instant::now());
                true
            }
            None => false,
        }
    }
    /// Event loop until the channel closes. Inputs are optional: once their
    /// sender is dropped the session keeps following the game.
    pub async fn run<K>(mut self, mut inputs: UnboundedReceiver<Input>, screen: &mut K) -> anyhow::Result<()>
    where
        K: Screen<S>,
    {
        let mut ticker = tokio::time::interval(ANIMATION_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut listening = true;
        screen.draw(&self.round, &self.leaderboard, Instant::now());
        'sesh: loop {
            tokio::select! {
                biased;
                event = self.transport.recv() => match event {
                    Some(event) => self.dispatch(event, Instant::now()),
                    None => break 'sesh,
                },
                input = inputs.recv(), if listening => match input {
                    Some(input) => self.input(input).await?,
                    None => {
                        log::debug!("[session] no more local input");
                        listening = false;
                        continue 'sesh;
                    }
                },
                now = ticker.tick() => {
                    let animated = self.round.tick(now);
                    if !animated && !self.round.countdown().running() {
                        continue 'sesh;
                    }
                },
            }
            screen.draw(&self.round, &self.leaderboard, Instant::now());
        }
        log::info!("[session] {} left the game", self.name);
        Ok(())
    }
}
