//! Test doubles: scripted draws, a manual frame host and sample rosters.

use amethyst_types::{Color, Item, Participant, Rarity};

use crate::{
    driver::{FrameHandle, FrameHost},
    selector::DrawSource,
};

/// Replays a fixed list of unit draws, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedDraws {
    /// Draws in `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "scripted draws need at least one value");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "scripted draws must lie in [0, 1)"
        );
        Self { draws, next: 0 }
    }

    /// Draws given on the selector's `[0, 100)` scale.
    pub fn percent(draws: impl IntoIterator<Item = f64>) -> Self {
        Self::new(draws.into_iter().map(|d| d / 100.0))
    }

    /// How many draws have been taken.
    pub fn taken(&self) -> usize {
        self.next
    }
}

impl DrawSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

/// Frame host that never fires on its own; the test calls the driver.
#[derive(Debug, Default)]
pub struct ManualFrameHost {
    next: u64,
    last: Option<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl ManualFrameHost {
    pub fn requested(&self) -> u64 {
        self.next
    }

    pub fn last_requested(&self) -> Option<FrameHandle> {
        self.last
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.last = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

const PALETTE: [Color; 3] = [
    Color::rgb(0xff, 0x5e, 0x7d),
    Color::rgb(0x4d, 0xff, 0xdf),
    Color::rgb(0xc1, 0x7b, 0xff),
];

/// One participant per value, ids `p1..pn`, each holding a single item.
pub fn participants_with_values(values: &[f64]) -> Vec<Participant> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let n = i + 1;
            Participant::new(format!("p{n}"), format!("Player {n}"), PALETTE[i % PALETTE.len()])
                .with_item(Item {
                    id: format!("item{n}"),
                    name: format!("Item {n}"),
                    value: *value,
                    rarity: Rarity::Godly,
                })
        })
        .collect()
}

/// Participants with `share_percent` set directly, bypassing the weight model.
pub fn participants_with_shares(shares: &[f64]) -> Vec<Participant> {
    let mut participants = participants_with_values(shares);
    for (participant, share) in participants.iter_mut().zip(shares) {
        participant.share_percent = *share;
    }
    participants
}

/// A three-player pot: 150, 400 and 300 worth of items.
pub fn sample_roster() -> Vec<Participant> {
    let item = |id: &str, name: &str, value: f64, rarity: Rarity| Item {
        id: id.to_string(),
        name: name.to_string(),
        value,
        rarity,
    };
    vec![
        Participant::new("1", "JohnDoe", PALETTE[0])
            .with_item(item("a1", "Chroma Darkbringer", 100.0, Rarity::Chroma))
            .with_item(item("a2", "Laser", 50.0, Rarity::Godly)),
        Participant::new("2", "TradeMaster", PALETTE[1])
            .with_item(item("b1", "Elderwood Scythe", 200.0, Rarity::Ancient))
            .with_item(item("b2", "Luger", 150.0, Rarity::Godly))
            .with_item(item("b3", "Ghost Blade", 50.0, Rarity::Godly)),
        Participant::new("3", "MM2Collector", PALETTE[2])
            .with_item(item("c1", "Corrupt", 180.0, Rarity::Unique))
            .with_item(item("c2", "Vintage Laser", 120.0, Rarity::Vintage)),
    ]
}
