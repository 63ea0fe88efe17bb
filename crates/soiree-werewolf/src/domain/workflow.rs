//! The moderator's prompt sequencer.
//!
//! Moderation is a single-prompt state machine. [`decide`] turns a moderator
//! action into facts without touching the state; [`Moderation::evolve`]
//! folds one fact into the state. Deaths queue their follow-ups (hunter
//! shots, then lover grief, then a vacant mayor's office) and the queue is
//! drained one prompt at a time. Victory is only checked once nothing is
//! pending.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use soiree_core::error::DomainError;
use soiree_core::player::PlayerId;

use super::roles::Role;
use super::victory::{Winner, evaluate};
use super::village::{CAUSE_BANISHED, CAUSE_GRIEF, CAUSE_HUNTER_SHOT, CAUSE_NIGHT, Village};

/// The one question currently put to the moderator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "prompt", rename_all = "snake_case")]
pub enum Prompt {
    #[default]
    Idle,
    AskNightDeath,
    SelectNightDeath,
    SelectMayor,
    SelectVillageVote,
    SelectLovers,
    AnnounceLoverDeath { partner: PlayerId },
    ConfirmEnd,
    SelectHunterShot { hunter: PlayerId },
}

impl Prompt {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Prompt::Idle => "idle",
            Prompt::AskNightDeath => "ask_night_death",
            Prompt::SelectNightDeath => "select_night_death",
            Prompt::SelectMayor => "select_mayor",
            Prompt::SelectVillageVote => "select_village_vote",
            Prompt::SelectLovers => "select_lovers",
            Prompt::AnnounceLoverDeath { .. } => "announce_lover_death",
            Prompt::ConfirmEnd => "confirm_end",
            Prompt::SelectHunterShot { .. } => "select_hunter_shot",
        }
    }
}

/// A button press on the moderator's screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeratorAction {
    Sunrise,
    Sunset,
    OpenLovers,
    RequestEnd,
    DesignateLovers { first: PlayerId, second: PlayerId },
    NoNightDeath,
    ReportNightDeaths,
    ConfirmNightDeaths { victims: Vec<PlayerId> },
    HunterShoots { target: PlayerId },
    ConfirmGrief,
    ElectMayor { player_id: PlayerId },
    VillageVote { banished: Option<PlayerId> },
    ConfirmEnd,
    Cancel,
}

/// Something that happened during moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fact {
    DayBroke,
    NightFell { night_number: u32 },
    LoversDesignated { first: PlayerId, second: PlayerId },
    MayorElected { player_id: PlayerId },
    PlayerEliminated { player_id: PlayerId, cause: String },
    PromptOpened { prompt: Prompt },
    WinnerDeclared { winner: Winner },
    ModerationEnded,
}

impl Fact {
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Fact::DayBroke => "werewolf.day_broke",
            Fact::NightFell { .. } => "werewolf.night_fell",
            Fact::LoversDesignated { .. } => "werewolf.lovers_designated",
            Fact::MayorElected { .. } => "werewolf.mayor_elected",
            Fact::PlayerEliminated { .. } => "werewolf.player_eliminated",
            Fact::PromptOpened { .. } => "werewolf.prompt_opened",
            Fact::WinnerDeclared { .. } => "werewolf.winner_declared",
            Fact::ModerationEnded => "werewolf.moderation_ended",
        }
    }
}

/// Follow-ups waiting for a prompt. The mayor's office is not queued: a
/// vacancy is read straight off the village.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUps {
    pub hunter_shots: VecDeque<PlayerId>,
    pub griefs: VecDeque<PlayerId>,
}

impl FollowUps {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hunter_shots.is_empty() && self.griefs.is_empty()
    }
}

/// Moderation state for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moderation {
    pub village: Village,
    pub prompt: Prompt,
    pub night_number: u32,
    pub is_day: bool,
    pub follow_ups: FollowUps,
    pub winner: Option<Winner>,
    pub ended: bool,
    /// Cupid was dealt, so night 1 opens with the lovers.
    pub cupid_in_deck: bool,
    /// Some mayor has held office this round.
    pub had_mayor: bool,
}

impl Moderation {
    /// First night, nobody dead, no prompt open.
    #[must_use]
    pub fn new(village: Village, cupid_in_deck: bool) -> Self {
        Self {
            village,
            prompt: Prompt::Idle,
            night_number: 1,
            is_day: false,
            follow_ups: FollowUps::default(),
            winner: None,
            ended: false,
            cupid_in_deck,
            had_mayor: false,
        }
    }

    /// The round is over: a camp won or the moderator ended it.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.ended
    }

    /// True when the vacant office is being refilled rather than filled for
    /// the first time.
    #[must_use]
    pub fn is_succession(&self) -> bool {
        self.had_mayor && self.village.mayor().is_none()
    }

    /// Folds one fact into the state. Never fails; facts were validated when
    /// they were decided.
    pub fn evolve(&mut self, fact: &Fact) {
        match fact {
            Fact::DayBroke => self.is_day = true,
            Fact::NightFell { night_number } => {
                self.is_day = false;
                self.night_number = *night_number;
            }
            Fact::LoversDesignated { first, second } => {
                self.village.set_lovers(first.clone(), second.clone());
            }
            Fact::MayorElected { player_id } => {
                self.village.set_mayor(player_id.clone());
                self.had_mayor = true;
            }
            Fact::PlayerEliminated { player_id, cause } => {
                let effects = self.village.eliminate(player_id, cause);
                self.follow_ups.griefs.retain(|p| p != player_id);
                if effects.hunter_triggered {
                    self.follow_ups.hunter_shots.push_back(player_id.clone());
                }
                if let Some(partner) = effects.partner_to_follow {
                    self.follow_ups.griefs.push_back(partner);
                }
            }
            Fact::PromptOpened { prompt } => {
                match prompt {
                    Prompt::SelectHunterShot { hunter } => {
                        self.follow_ups.hunter_shots.retain(|h| h != hunter);
                    }
                    Prompt::AnnounceLoverDeath { partner } => {
                        self.follow_ups.griefs.retain(|p| p != partner);
                    }
                    _ => {}
                }
                self.prompt = prompt.clone();
            }
            Fact::WinnerDeclared { winner } => {
                self.winner = Some(winner.clone());
                self.prompt = Prompt::Idle;
            }
            Fact::ModerationEnded => {
                self.ended = true;
                self.prompt = Prompt::Idle;
            }
        }
    }

    /// Facts for opening moderation: a deck without wolves (or one already
    /// decided) ends before the first night.
    #[must_use]
    pub fn opening_facts(&self) -> Vec<Fact> {
        let mut recorder = Recorder::new(self);
        recorder.settle();
        recorder.facts
    }
}

/// Applies facts to a scratch copy as they are recorded, so later decisions
/// in the same action see their effects.
struct Recorder {
    state: Moderation,
    facts: Vec<Fact>,
}

impl Recorder {
    fn new(state: &Moderation) -> Self {
        Self {
            state: state.clone(),
            facts: Vec::new(),
        }
    }

    fn record(&mut self, fact: Fact) {
        self.state.evolve(&fact);
        self.facts.push(fact);
    }

    fn open(&mut self, prompt: Prompt) {
        self.record(Fact::PromptOpened { prompt });
    }

    fn eliminate(&mut self, player_id: &PlayerId, cause: &str) {
        self.record(Fact::PlayerEliminated {
            player_id: player_id.clone(),
            cause: cause.to_owned(),
        });
    }

    /// Surfaces the next follow-up, or checks for a winner once nothing is
    /// pending, then fills a vacant mayor's office.
    fn settle(&mut self) {
        if self.state.village.alive_count() == 0 {
            self.record(Fact::ModerationEnded);
            return;
        }
        if let Some(hunter) = self.state.follow_ups.hunter_shots.front().cloned() {
            self.open(Prompt::SelectHunterShot { hunter });
            return;
        }
        if let Some(partner) = self.state.follow_ups.griefs.front().cloned() {
            self.open(Prompt::AnnounceLoverDeath { partner });
            return;
        }
        let winner = match self.state.winner {
            Some(_) => None,
            None => evaluate(&self.state.village),
        };
        if let Some(winner) = winner {
            self.record(Fact::WinnerDeclared { winner });
            return;
        }
        // the first mayor is elected at the first daybreak
        let vacant = self.state.village.mayor().is_none();
        if vacant && (self.state.is_day || self.state.had_mayor) {
            self.open(Prompt::SelectMayor);
        } else {
            self.open(Prompt::Idle);
        }
    }
}

fn require_alive(village: &Village, id: &PlayerId) -> Result<(), DomainError> {
    if village.is_alive(id) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!("{id} is not a living player")))
    }
}

/// Decides which facts a moderator action produces.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the round is over, the action does
/// not answer the open prompt, or a chosen player is not eligible. Nothing
/// is recorded in that case.
#[allow(clippy::too_many_lines)]
pub fn decide(state: &Moderation, action: &ModeratorAction) -> Result<Vec<Fact>, DomainError> {
    if state.is_finished() {
        return Err(DomainError::validation("the round is already over"));
    }
    if state.village.alive_count() == 0 {
        return Err(DomainError::validation("nobody is left alive"));
    }

    let mut rec = Recorder::new(state);
    match (&state.prompt, action) {
        (Prompt::Idle, ModeratorAction::Sunrise) if !state.is_day => {
            if state.night_number == 1 && state.cupid_in_deck && state.village.lovers().is_none() {
                rec.open(Prompt::SelectLovers);
            } else {
                rec.open(Prompt::AskNightDeath);
            }
        }
        (Prompt::Idle, ModeratorAction::Sunset) if state.is_day => {
            rec.open(Prompt::SelectVillageVote);
        }
        (Prompt::Idle, ModeratorAction::OpenLovers)
            if !state.is_day
                && state.night_number == 1
                && state.village.is_role_alive(Role::Cupid)
                && state.village.lovers().is_none() =>
        {
            rec.open(Prompt::SelectLovers);
        }
        (Prompt::Idle, ModeratorAction::RequestEnd) => rec.open(Prompt::ConfirmEnd),
        (Prompt::SelectLovers, ModeratorAction::DesignateLovers { first, second }) => {
            if first == second {
                return Err(DomainError::validation("lovers must be two different players"));
            }
            require_alive(&state.village, first)?;
            require_alive(&state.village, second)?;
            rec.record(Fact::LoversDesignated {
                first: first.clone(),
                second: second.clone(),
            });
            rec.open(Prompt::AskNightDeath);
        }
        (Prompt::AskNightDeath, ModeratorAction::NoNightDeath) => {
            rec.record(Fact::DayBroke);
            rec.settle();
        }
        (Prompt::AskNightDeath, ModeratorAction::ReportNightDeaths) => {
            rec.open(Prompt::SelectNightDeath);
        }
        (Prompt::SelectNightDeath, ModeratorAction::ConfirmNightDeaths { victims }) => {
            if victims.is_empty() {
                return Err(DomainError::validation("select at least one victim"));
            }
            for (i, victim) in victims.iter().enumerate() {
                require_alive(&state.village, victim)?;
                if victims[..i].contains(victim) {
                    return Err(DomainError::Validation(format!("{victim} was selected twice")));
                }
            }
            rec.record(Fact::DayBroke);
            for victim in victims {
                rec.eliminate(victim, CAUSE_NIGHT);
            }
            rec.settle();
        }
        (Prompt::SelectHunterShot { hunter }, ModeratorAction::HunterShoots { target }) => {
            if target == hunter {
                return Err(DomainError::validation("the hunter cannot shoot themselves"));
            }
            require_alive(&state.village, target)?;
            rec.eliminate(target, CAUSE_HUNTER_SHOT);
            rec.settle();
        }
        (Prompt::AnnounceLoverDeath { partner }, ModeratorAction::ConfirmGrief) => {
            rec.eliminate(partner, CAUSE_GRIEF);
            rec.settle();
        }
        (Prompt::SelectMayor, ModeratorAction::ElectMayor { player_id }) => {
            require_alive(&state.village, player_id)?;
            rec.record(Fact::MayorElected {
                player_id: player_id.clone(),
            });
            rec.settle();
        }
        (Prompt::SelectVillageVote, ModeratorAction::VillageVote { banished }) => {
            if let Some(banished) = banished {
                require_alive(&state.village, banished)?;
            }
            rec.record(Fact::NightFell {
                night_number: state.night_number + 1,
            });
            match banished {
                Some(banished) => {
                    rec.eliminate(banished, CAUSE_BANISHED);
                    rec.settle();
                }
                None => rec.open(Prompt::Idle),
            }
        }
        (Prompt::ConfirmEnd, ModeratorAction::ConfirmEnd) => rec.record(Fact::ModerationEnded),
        (
            Prompt::SelectNightDeath | Prompt::SelectVillageVote | Prompt::ConfirmEnd,
            ModeratorAction::Cancel,
        ) => rec.open(Prompt::Idle),
        (prompt, action) => {
            return Err(DomainError::Validation(format!(
                "{action:?} is not available while the {} prompt is open",
                prompt.name()
            )));
        }
    }
    Ok(rec.facts)
}

#[cfg(test)]
mod tests {
    use soiree_core::player::Player;

    use super::*;
    use crate::domain::assignment::RoleAssignment;
    use crate::domain::victory::Camp;

    fn moderation(seats: &[(&str, Role)]) -> Moderation {
        let players = seats.iter().map(|(id, _)| Player::new(*id, *id)).collect();
        let assignments = seats
            .iter()
            .map(|(id, role)| RoleAssignment {
                player_id: PlayerId::from(*id),
                role: *role,
            })
            .collect();
        let cupid = seats.iter().any(|(_, role)| *role == Role::Cupid);
        Moderation::new(Village::new(players, assignments), cupid)
    }

    fn table() -> Moderation {
        moderation(&[
            ("ana", Role::Werewolf),
            ("ben", Role::Werewolf),
            ("cleo", Role::Hunter),
            ("dan", Role::Seer),
            ("eve", Role::Witch),
            ("fay", Role::Villager),
            ("gus", Role::Villager),
            ("hal", Role::Villager),
        ])
    }

    fn act(state: &mut Moderation, action: ModeratorAction) -> Vec<Fact> {
        let facts = decide(state, &action).unwrap();
        for fact in &facts {
            state.evolve(fact);
        }
        facts
    }

    fn pid(id: &str) -> PlayerId {
        PlayerId::from(id)
    }

    /// Night 1 with no deaths, then elect `mayor`.
    fn first_day(state: &mut Moderation, mayor: &str) {
        act(state, ModeratorAction::Sunrise);
        act(state, ModeratorAction::NoNightDeath);
        act(state, ModeratorAction::ElectMayor { player_id: pid(mayor) });
    }

    #[test]
    fn test_sunrise_goes_to_night_death_question_without_cupid() {
        let mut state = table();

        act(&mut state, ModeratorAction::Sunrise);

        assert_eq!(state.prompt, Prompt::AskNightDeath);
    }

    #[test]
    fn test_sunrise_on_night_one_with_cupid_asks_for_lovers_first() {
        let mut state = moderation(&[
            ("ana", Role::Werewolf),
            ("ben", Role::Cupid),
            ("cleo", Role::Villager),
            ("dan", Role::Villager),
            ("eve", Role::Seer),
            ("fay", Role::Villager),
        ]);

        act(&mut state, ModeratorAction::Sunrise);
        assert_eq!(state.prompt, Prompt::SelectLovers);
        act(
            &mut state,
            ModeratorAction::DesignateLovers {
                first: pid("cleo"),
                second: pid("dan"),
            },
        );

        assert_eq!(state.prompt, Prompt::AskNightDeath);
        assert_eq!(state.village.lovers(), Some(&(pid("cleo"), pid("dan"))));
    }

    #[test]
    fn test_no_night_death_breaks_day_and_asks_for_a_mayor() {
        let mut state = table();
        act(&mut state, ModeratorAction::Sunrise);

        act(&mut state, ModeratorAction::NoNightDeath);

        assert!(state.is_day);
        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(!state.is_succession());
    }

    #[test]
    fn test_electing_a_mayor_returns_to_idle() {
        let mut state = table();

        first_day(&mut state, "dan");

        assert_eq!(state.prompt, Prompt::Idle);
        assert_eq!(state.village.mayor(), Some(&pid("dan")));
    }

    #[test]
    fn test_village_vote_tie_brings_the_next_night() {
        let mut state = table();
        first_day(&mut state, "dan");
        act(&mut state, ModeratorAction::Sunset);

        act(&mut state, ModeratorAction::VillageVote { banished: None });

        assert!(!state.is_day);
        assert_eq!(state.night_number, 2);
        assert_eq!(state.prompt, Prompt::Idle);
    }

    #[test]
    fn test_banishing_the_hunter_opens_the_hunter_shot() {
        let mut state = table();
        first_day(&mut state, "dan");
        act(&mut state, ModeratorAction::Sunset);

        act(
            &mut state,
            ModeratorAction::VillageVote {
                banished: Some(pid("cleo")),
            },
        );

        assert_eq!(state.prompt, Prompt::SelectHunterShot { hunter: pid("cleo") });
        assert_eq!(state.village.dead()[0].cause, CAUSE_BANISHED);
    }

    #[test]
    fn test_hunter_cannot_shoot_the_dead_or_themselves() {
        let mut state = table();
        first_day(&mut state, "dan");
        act(&mut state, ModeratorAction::Sunset);
        act(
            &mut state,
            ModeratorAction::VillageVote {
                banished: Some(pid("cleo")),
            },
        );

        let self_shot = decide(&state, &ModeratorAction::HunterShoots { target: pid("cleo") });
        let unknown = decide(&state, &ModeratorAction::HunterShoots { target: pid("zed") });

        assert!(matches!(self_shot, Err(DomainError::Validation(_))));
        assert!(matches!(unknown, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_follow_ups_drain_hunter_then_grief_then_mayor() {
        let mut state = table();
        first_day(&mut state, "dan");
        state.village.set_lovers(pid("dan"), pid("fay"));
        act(&mut state, ModeratorAction::Sunset);
        act(&mut state, ModeratorAction::VillageVote { banished: None });
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        // the mayor (a lover) and the hunter die in the same night
        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("dan"), pid("cleo")],
            },
        );
        assert_eq!(state.prompt, Prompt::SelectHunterShot { hunter: pid("cleo") });

        act(&mut state, ModeratorAction::HunterShoots { target: pid("ana") });
        assert_eq!(state.prompt, Prompt::AnnounceLoverDeath { partner: pid("fay") });

        act(&mut state, ModeratorAction::ConfirmGrief);
        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(state.is_succession());

        let causes: Vec<&str> = state.village.dead().iter().map(|d| d.cause.as_str()).collect();
        assert_eq!(causes, vec![CAUSE_NIGHT, CAUSE_NIGHT, CAUSE_HUNTER_SHOT, CAUSE_GRIEF]);
    }

    #[test]
    fn test_hunter_shooting_the_grieving_partner_skips_the_grief_prompt() {
        let mut state = table();
        state.village.set_lovers(pid("cleo"), pid("fay"));
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("cleo")],
            },
        );
        act(&mut state, ModeratorAction::HunterShoots { target: pid("fay") });

        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(state.follow_ups.is_empty());
    }

    #[test]
    fn test_both_lovers_dying_together_open_no_grief_prompt() {
        let mut state = table();
        state.village.set_lovers(pid("fay"), pid("gus"));
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        let facts = act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("fay"), pid("gus")],
            },
        );

        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(state.follow_ups.griefs.is_empty());
        assert!(!facts.iter().any(|fact| matches!(
            fact,
            Fact::PromptOpened {
                prompt: Prompt::AnnounceLoverDeath { .. }
            }
        )));
        let causes: Vec<&str> = state.village.dead().iter().map(|d| d.cause.as_str()).collect();
        assert_eq!(causes, vec![CAUSE_NIGHT, CAUSE_NIGHT]);
    }

    #[test]
    fn test_two_hunters_shoot_in_selection_order() {
        let mut state = moderation(&[
            ("ana", Role::Werewolf),
            ("ben", Role::Werewolf),
            ("cleo", Role::Hunter),
            ("dan", Role::Hunter),
            ("eve", Role::Villager),
            ("fay", Role::Villager),
            ("gus", Role::Villager),
            ("hal", Role::Villager),
        ]);
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("dan"), pid("cleo")],
            },
        );
        assert_eq!(state.prompt, Prompt::SelectHunterShot { hunter: pid("dan") });

        act(&mut state, ModeratorAction::HunterShoots { target: pid("ana") });
        assert_eq!(state.prompt, Prompt::SelectHunterShot { hunter: pid("cleo") });

        act(&mut state, ModeratorAction::HunterShoots { target: pid("eve") });

        // one wolf left against three villagers
        assert_eq!(state.winner, None);
        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(state.follow_ups.is_empty());
        let shots: Vec<&str> = state
            .village
            .dead()
            .iter()
            .filter(|d| d.cause == CAUSE_HUNTER_SHOT)
            .map(|d| d.player_id.as_str())
            .collect();
        assert_eq!(shots, vec!["ana", "eve"]);
    }

    #[test]
    fn test_winner_is_checked_only_once_the_chain_settles() {
        // two wolves against hunter + two villagers: the hunter's shot decides
        let mut state = moderation(&[
            ("ana", Role::Werewolf),
            ("ben", Role::Werewolf),
            ("cleo", Role::Hunter),
            ("dan", Role::Villager),
            ("eve", Role::Villager),
            ("fay", Role::Villager),
        ]);
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("cleo"), pid("dan")],
            },
        );
        // wolves 2 vs 2 already, but the hunter still holds a shot
        assert_eq!(state.winner, None);
        assert_eq!(state.prompt, Prompt::SelectHunterShot { hunter: pid("cleo") });

        act(&mut state, ModeratorAction::HunterShoots { target: pid("ana") });

        assert_eq!(state.winner, None, "1 wolf vs 2 villagers");
        assert_eq!(state.prompt, Prompt::SelectMayor);
    }

    #[test]
    fn test_winner_declared_instead_of_mayor_prompt() {
        let mut state = table();
        first_day(&mut state, "ben");
        act(&mut state, ModeratorAction::Sunset);
        act(
            &mut state,
            ModeratorAction::VillageVote {
                banished: Some(pid("ana")),
            },
        );
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::NoNightDeath);
        act(&mut state, ModeratorAction::Sunset);

        // the last wolf is also the mayor
        act(
            &mut state,
            ModeratorAction::VillageVote {
                banished: Some(pid("ben")),
            },
        );

        assert_eq!(state.winner.as_ref().map(|w| w.camp), Some(Camp::Village));
        assert_eq!(state.prompt, Prompt::Idle);
    }

    #[test]
    fn test_banished_mayor_is_replaced_before_nightfall_continues() {
        let mut state = table();
        first_day(&mut state, "dan");
        act(&mut state, ModeratorAction::Sunset);

        act(
            &mut state,
            ModeratorAction::VillageVote {
                banished: Some(pid("dan")),
            },
        );

        assert_eq!(state.prompt, Prompt::SelectMayor);
        assert!(state.is_succession());
        assert_eq!(state.night_number, 2);
    }

    #[test]
    fn test_no_action_accepted_after_a_winner() {
        let mut state = table();
        state.winner = Some(Camp::Wolves.into());

        let result = decide(&state, &ModeratorAction::Sunrise);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_wrong_prompt_action_is_rejected_and_changes_nothing() {
        let state = table();
        let before = state.clone();

        let result = decide(&state, &ModeratorAction::ConfirmGrief);

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("idle")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_sunset_is_rejected_at_night() {
        let state = table();

        let result = decide(&state, &ModeratorAction::Sunset);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_cancel_returns_to_idle_from_night_death_selection() {
        let mut state = table();
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        act(&mut state, ModeratorAction::Cancel);

        assert_eq!(state.prompt, Prompt::Idle);
        assert!(!state.is_day);
    }

    #[test]
    fn test_cancel_is_not_available_for_the_hunter_shot() {
        let mut state = table();
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);
        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("cleo")],
            },
        );

        let result = decide(&state, &ModeratorAction::Cancel);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_duplicate_night_victims_are_rejected() {
        let mut state = table();
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        let result = decide(
            &state,
            &ModeratorAction::ConfirmNightDeaths {
                victims: vec![pid("fay"), pid("fay")],
            },
        );

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("twice")));
    }

    #[test]
    fn test_confirm_end_finishes_the_round() {
        let mut state = table();
        act(&mut state, ModeratorAction::RequestEnd);
        assert_eq!(state.prompt, Prompt::ConfirmEnd);

        act(&mut state, ModeratorAction::ConfirmEnd);

        assert!(state.ended);
        assert!(state.is_finished());
    }

    #[test]
    fn test_killing_everyone_ends_the_round_without_a_winner() {
        let mut state = moderation(&[
            ("ana", Role::Werewolf),
            ("ben", Role::Villager),
            ("cleo", Role::Villager),
            ("dan", Role::Villager),
            ("eve", Role::Villager),
            ("fay", Role::Villager),
        ]);
        act(&mut state, ModeratorAction::Sunrise);
        act(&mut state, ModeratorAction::ReportNightDeaths);

        act(
            &mut state,
            ModeratorAction::ConfirmNightDeaths {
                victims: ["ana", "ben", "cleo", "dan", "eve", "fay"].map(pid).to_vec(),
            },
        );

        assert!(state.ended);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_opening_facts_declare_a_wolfless_village_the_winner() {
        let state = moderation(&[
            ("ana", Role::Villager),
            ("ben", Role::Villager),
            ("cleo", Role::Seer),
        ]);

        let facts = state.opening_facts();

        assert!(matches!(
            facts.as_slice(),
            [Fact::WinnerDeclared { winner }] if winner.camp == Camp::Village
        ));
    }
}
