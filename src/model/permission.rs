//! In-game permission catalog and weekday enumeration.
//!
//! The permission catalog is a closed set of 19 identifiers understood by the
//! game server's remote admin interface. An unrecognized identifier fails
//! serde deserialization at the schema boundary and is never stored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// In-game admin permission.
///
/// Wire strings are the exact identifiers the game server expects, e.g.
/// `changemap` or `canseeadminchat`. Deserializing anything outside the
/// catalog is an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    ChangeMap,
    CanSeeAdminChat,
    Balance,
    Pause,
    Cheat,
    Private,
    Chat,
    Kick,
    Ban,
    Config,
    Immune,
    ManageServer,
    Cameraman,
    FeatureTest,
    ForceTeamChange,
    Reserve,
    Demos,
    Debug,
    TeamChange,
}

impl Permission {
    /// Every permission in the catalog, in catalog order.
    pub const ALL: [Permission; 19] = [
        Permission::ChangeMap,
        Permission::CanSeeAdminChat,
        Permission::Balance,
        Permission::Pause,
        Permission::Cheat,
        Permission::Private,
        Permission::Chat,
        Permission::Kick,
        Permission::Ban,
        Permission::Config,
        Permission::Immune,
        Permission::ManageServer,
        Permission::Cameraman,
        Permission::FeatureTest,
        Permission::ForceTeamChange,
        Permission::Reserve,
        Permission::Demos,
        Permission::Debug,
        Permission::TeamChange,
    ];

    /// The identifier used on the wire and in game server config lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ChangeMap => "changemap",
            Permission::CanSeeAdminChat => "canseeadminchat",
            Permission::Balance => "balance",
            Permission::Pause => "pause",
            Permission::Cheat => "cheat",
            Permission::Private => "private",
            Permission::Chat => "chat",
            Permission::Kick => "kick",
            Permission::Ban => "ban",
            Permission::Config => "config",
            Permission::Immune => "immune",
            Permission::ManageServer => "manageserver",
            Permission::Cameraman => "cameraman",
            Permission::FeatureTest => "featuretest",
            Permission::ForceTeamChange => "forceteamchange",
            Permission::Reserve => "reserve",
            Permission::Demos => "demos",
            Permission::Debug => "debug",
            Permission::TeamChange => "teamchange",
        }
    }

    /// Human-readable description shown in the admin UI.
    pub fn description(&self) -> &'static str {
        match self {
            Permission::ChangeMap => {
                "Allows a user to use map commands such as adminSetNextLayer or adminChangeMap."
            }
            Permission::CanSeeAdminChat => {
                "Allows a user to see the in game admin chat as well as teamkills."
            }
            Permission::Balance => {
                "Allows a user to switch teams regardless of current balance."
            }
            Permission::Pause => {
                "Allows a user to pause the game. Does not work on licensed servers."
            }
            Permission::Cheat => {
                "Allows a user to gain access to some cheat commands. Does not work on licensed servers."
            }
            Permission::Private => {
                "Allows a user to set a server to private. Does not work on licensed servers."
            }
            Permission::Chat => {
                "Allows a user to write in admin chat, or use server broadcasts."
            }
            Permission::Kick => "Allows a user to use in game kick commands.",
            Permission::Ban => "Allows a user to use in game ban commands.",
            Permission::Config => {
                "Allows a user to set server configuration. Does not work on licensed servers."
            }
            Permission::Immune => "Users with this permission cannot be kicked or banned.",
            Permission::ManageServer => {
                "Allows a user to use various management commands, including to kill the server."
            }
            Permission::Cameraman => "Allows a user to use the in-game spectator camera.",
            Permission::FeatureTest => {
                "Allows a user to use debug commands, such as spawning vehicles."
            }
            Permission::ForceTeamChange => "Allows a user to force team swap other players.",
            Permission::Reserve => "Allows a user to use the priority/whitelist queue.",
            Permission::Demos => "Allows a user to record demos on the server.",
            Permission::Debug => "Allows a user to use debug commands.",
            Permission::TeamChange => "Allows a user to change teams without penalty.",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of the week, numbered the way JavaScript's `Date.getDay()` numbers
/// them: Sunday = 0 through Saturday = 6.
///
/// The numeric mapping is part of the persisted data format and must not
/// change. Values outside 0..=6 fail deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Display name of the weekday.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Weekday::Sunday),
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            other => Err(format!("{} is not a valid day of the week", other)),
        }
    }
}
