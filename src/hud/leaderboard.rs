use crate::LEADERBOARD_SIZE;
use crate::Points;
use crate::protocol::LeaderboardSnapshot;

/// One rendered leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    pub score: Points,
    pub you: bool,
}

impl Row {
    fn you(rank: usize, score: Points) -> Self {
        Self {
            rank,
            name: String::from("You"),
            score,
            you: true,
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>3}  {:<24} {:>6}", self.rank, self.name, self.score)
    }
}

/// Top-ten table with the local player's rank and global score.
///
/// Every render replaces the previous rows entirely. The local player takes
/// the top-ten slot matching their rank, or a trailing row past the top ten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    rows: Vec<Row>,
    summary: String,
    score: Points,
    collapsed: bool,
}

impl Leaderboard {
    pub fn render(&mut self, snapshot: &LeaderboardSnapshot) {
        let rank = snapshot.player_rank;
        let score = snapshot.player_score;
        self.summary = format!("({} / {} players)", rank + 1, snapshot.total_player);
        self.score = score;
        self.rows.clear();
        for i in 0..LEADERBOARD_SIZE {
            match (rank == i, snapshot.top_ten.get(i)) {
                (true, _) => self.rows.push(Row::you(i + 1, score)),
                (false, Some(standing)) => self.rows.push(Row {
                    rank: i + 1,
                    name: standing.player_name.clone(),
                    score: standing.score,
                    you: false,
                }),
                (false, None) => continue,
            }
        }
        if rank >= LEADERBOARD_SIZE {
            self.rows.push(Row::you(rank + 1, score));
        }
        log::debug!("[leaderboard] {} rows {}", self.rows.len(), self.summary);
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    /// `(<rank> / <total> players)`
    pub fn summary(&self) -> &str {
        &self.summary
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }
    /// Collapse or expand the table and rank summary.
    /// The global score stays visible either way.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "score {}", self.score)?;
        if self.collapsed {
            return Ok(());
        }
        writeln!(f, "{}", self.summary)?;
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
