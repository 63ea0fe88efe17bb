//! Role catalogue and deck composition.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum table size for a Werewolf game.
pub const MIN_PLAYERS: usize = 6;

/// A hidden role card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Werewolf,
    WhiteWerewolf,
    Villager,
    Seer,
    Witch,
    Hunter,
    Cupid,
    LittleGirl,
    Guardian,
    VillageIdiot,
}

impl Role {
    /// Every role, in catalogue order.
    pub const ALL: [Role; 10] = [
        Role::Werewolf,
        Role::WhiteWerewolf,
        Role::Villager,
        Role::Seer,
        Role::Witch,
        Role::Hunter,
        Role::Cupid,
        Role::LittleGirl,
        Role::Guardian,
        Role::VillageIdiot,
    ];

    /// Wolves hunt together at night; everyone else sides with the village.
    #[must_use]
    pub fn is_wolf_aligned(self) -> bool {
        matches!(self, Role::Werewolf | Role::WhiteWerewolf)
    }

    /// The white werewolf hunts with the pack but only wins alone.
    #[must_use]
    pub fn is_solitary_wolf(self) -> bool {
        self == Role::WhiteWerewolf
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Role::Werewolf => "Werewolf",
            Role::WhiteWerewolf => "White Werewolf",
            Role::Villager => "Villager",
            Role::Seer => "Seer",
            Role::Witch => "Witch",
            Role::Hunter => "Hunter",
            Role::Cupid => "Cupid",
            Role::LittleGirl => "Little Girl",
            Role::Guardian => "Guardian",
            Role::VillageIdiot => "Village Idiot",
        }
    }

    /// What the card tells its holder during the reveal.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Role::Werewolf => "Each night, devour a villager together with the pack.",
            Role::WhiteWerewolf => {
                "Hunt with the pack, but every other night you may devour a werewolf. You win alone."
            }
            Role::Villager => "Find the werewolves and banish them during the day.",
            Role::Seer => "Each night, learn the true role of one player.",
            Role::Witch => "You hold one healing potion and one poison potion.",
            Role::Hunter => "When you die, you immediately shoot someone.",
            Role::Cupid => "On the first night, bind two players as lovers.",
            Role::LittleGirl => "You may peek while the werewolves wake up.",
            Role::Guardian => "Each night, protect one player from the werewolves.",
            Role::VillageIdiot => {
                "If the village votes against you, you reveal your card and stay alive, but lose your vote."
            }
        }
    }

    /// What the moderator reads out for the role during the night.
    #[must_use]
    pub fn night_action(self) -> &'static str {
        match self {
            Role::Werewolf => "Choose a victim to devour together.",
            Role::WhiteWerewolf => "May devour another werewolf (every other night).",
            Role::Villager => "Stays asleep.",
            Role::Seer => "Points at a player to learn their true role.",
            Role::Witch => "Uses the potion of life or death if she wishes.",
            Role::Hunter => "If eliminated, immediately names a final victim.",
            Role::Cupid => "Designates the two lovers (night 1 only).",
            Role::LittleGirl => "May spy on the werewolves during their turn.",
            Role::Guardian => "Names a player to protect for the rest of the night.",
            Role::VillageIdiot => "Stays asleep. If banished, survives but no longer votes.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many copies of each role go into the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCounts(BTreeMap<Role, u32>);

impl RoleCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for `role`. A zero count removes the role.
    #[must_use]
    pub fn with(mut self, role: Role, count: u32) -> Self {
        self.set(role, count);
        self
    }

    pub fn set(&mut self, role: Role, count: u32) {
        if count == 0 {
            self.0.remove(&role);
        } else {
            self.0.insert(role, count);
        }
    }

    #[must_use]
    pub fn count(&self, role: Role) -> u32 {
        self.0.get(&role).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.count(role) > 0
    }

    /// Number of cards in the deck. Summed in `u64` so no combination of
    /// `u32` counts can overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|count| u64::from(*count)).sum()
    }

    /// Iterates `(role, count)` pairs in catalogue order, skipping zeros.
    pub fn iter(&self) -> impl Iterator<Item = (Role, u32)> + '_ {
        self.0.iter().map(|(role, count)| (*role, *count)).filter(|(_, count)| *count > 0)
    }

    /// Expands the counts into one card per copy.
    #[must_use]
    pub fn deck(&self) -> Vec<Role> {
        self.iter()
            .flat_map(|(role, count)| std::iter::repeat_n(role, count as usize))
            .collect()
    }
}

impl FromIterator<(Role, u32)> for RoleCounts {
    fn from_iter<I: IntoIterator<Item = (Role, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (role, count) in iter {
            counts.set(role, counts.count(role).saturating_add(count));
        }
        counts
    }
}

/// Suggested deck for a table of `player_count`: a quarter of the table as
/// werewolves (at least one), one seer, one witch, villagers for the rest.
#[must_use]
pub fn default_role_counts(player_count: u32) -> RoleCounts {
    let wolves = (player_count / 4).max(1);
    let villagers = player_count.saturating_sub(wolves + 2);
    RoleCounts::new()
        .with(Role::Werewolf, wolves)
        .with(Role::Seer, 1)
        .with(Role::Witch, 1)
        .with(Role::Villager, villagers)
}
