//! Per-entity rule checks.
//!
//! Every checker is a pure function from an input record to a
//! [`ValidationResult`]. Rules are evaluated independently: a checker never
//! stops at the first violation, so one call reports everything wrong with a
//! payload.
//!
//! Checkers take a [`CheckContext`] carrying the message catalog and the
//! single "now" reading used by every temporal rule of the call.
//!
//! # Domain purity
//!
//! Like the rest of `domain`, this module does not log. The application
//! layer traces each call.

mod address;
mod association;
mod club;
mod gym;
mod league;
mod league_group;
mod person;
mod season;
mod support;
mod team;

pub use address::check_address;
pub use association::check_association;
pub use club::check_club;
pub use gym::check_gym;
pub use league::check_league;
pub use league_group::check_league_group;
pub use person::check_person;
pub use season::check_season;
pub use support::parse_date;
pub use team::{MIN_TEAM_PLAYERS, check_team};

use chrono::{DateTime, Utc};

use crate::domain::inputs::EntityInput;
use crate::domain::messages::MessageCatalog;
use crate::domain::result::{ValidationResult, Violation};
use crate::domain::rules::Rule;
use crate::domain::value_objects::Severity;

/// Everything a checker needs besides the input itself.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    messages: &'a dyn MessageCatalog,
    now: DateTime<Utc>,
    require_team_players: bool,
}

impl<'a> CheckContext<'a> {
    /// A context enforcing every rule, including the team roster minimum.
    pub fn new(messages: &'a dyn MessageCatalog, now: DateTime<Utc>) -> Self {
        Self {
            messages,
            now,
            require_team_players: true,
        }
    }

    /// Toggle the minimum-roster rule for team creation and registration.
    pub fn require_team_players(mut self, enabled: bool) -> Self {
        self.require_team_players = enabled;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn messages(&self) -> &'a dyn MessageCatalog {
        self.messages
    }

    /// Record an error for `rule` under the rule's own field.
    pub(crate) fn report(&self, result: &mut ValidationResult, rule: Rule) {
        result.add_violation(
            Severity::Error,
            Violation::from_rule(rule, self.messages.message(rule)),
        );
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("locale", &self.messages.locale())
            .field("now", &self.now)
            .field("require_team_players", &self.require_team_players)
            .finish()
    }
}

/// Run the checker matching the input's entity.
pub fn check_entity(ctx: &CheckContext<'_>, input: &EntityInput) -> ValidationResult {
    match input {
        EntityInput::Address(i) => check_address(ctx, i),
        EntityInput::League(i) => check_league(ctx, i),
        EntityInput::Club(i) => check_club(ctx, i),
        EntityInput::Gym(i) => check_gym(ctx, i),
        EntityInput::Season(i) => check_season(ctx, i),
        EntityInput::Person(i) => check_person(ctx, i),
        EntityInput::Association(i) => check_association(ctx, i),
        EntityInput::LeagueGroup(i) => check_league_group(ctx, i),
        EntityInput::Team(i) => check_team(ctx, i),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::messages::BuiltinCatalog;

    pub static ENGLISH: BuiltinCatalog = BuiltinCatalog::english();
    pub static GERMAN: BuiltinCatalog = BuiltinCatalog::german();

    /// 2025-01-15 12:00 UTC, the fixed "now" for checker tests.
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    pub fn ctx() -> super::CheckContext<'static> {
        super::CheckContext::new(&ENGLISH, now())
    }

    pub fn german_ctx() -> super::CheckContext<'static> {
        super::CheckContext::new(&GERMAN, now())
    }
}
