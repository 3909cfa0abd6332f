use loft_geom::{Direction, DirectionError};

/// Argument token that clears a property back to its default.
pub const CLEAR_TOKEN: &str = "default";

/// The closed set of actions a modification command can request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModificationAction {
    Add,
    Remove,
    HorizontalVelocity,
    VerticalVelocity,
    FixedDirection,
    Velocities,
    Abort,
}

impl ModificationAction {
    pub const ALL: [ModificationAction; 7] = [
        ModificationAction::Add,
        ModificationAction::Remove,
        ModificationAction::HorizontalVelocity,
        ModificationAction::VerticalVelocity,
        ModificationAction::FixedDirection,
        ModificationAction::Velocities,
        ModificationAction::Abort,
    ];

    pub fn command_name(self) -> &'static str {
        match self {
            ModificationAction::Add => "add",
            ModificationAction::Remove => "remove",
            ModificationAction::HorizontalVelocity => "horizontalVelocity",
            ModificationAction::VerticalVelocity => "verticalVelocity",
            ModificationAction::FixedDirection => "fixedDirection",
            ModificationAction::Velocities => "velocities",
            ModificationAction::Abort => "abort",
        }
    }

    pub fn needed_arguments(self) -> usize {
        match self {
            ModificationAction::Add | ModificationAction::Remove | ModificationAction::Abort => 0,
            ModificationAction::HorizontalVelocity
            | ModificationAction::VerticalVelocity
            | ModificationAction::FixedDirection => 1,
            ModificationAction::Velocities => 2,
        }
    }

    pub fn from_command_name(name: &str) -> Option<ModificationAction> {
        Self::ALL
            .into_iter()
            .find(|action| action.command_name().eq_ignore_ascii_case(name))
    }
}

/// An immutable, already-validated change awaiting a target block.
///
/// `None` payloads clear the property back to its default; validation happens
/// entirely at parse time, so applying a request can only fail on policy.
#[derive(Clone, Debug, PartialEq)]
pub enum ModificationRequest {
    Add,
    Remove,
    SetHorizontal(Option<f32>),
    SetVertical(Option<f32>),
    SetFixedDirection(Option<Direction>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("`{action}` needs {needed} argument(s)")]
    MissingArgument { action: &'static str, needed: usize },
    #[error("invalid velocity `{0}`: expected a non-negative number")]
    InvalidVelocity(String),
    #[error(transparent)]
    InvalidDirection(#[from] DirectionError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParsedCommand {
    /// Requests to merge into the actor's pending set (0..=2 of them).
    Queue(Vec<ModificationRequest>),
    /// Discard the actor's pending set immediately.
    Abort,
}

/// Parses one command invocation into pending requests.
///
/// Every argument is validated before any request is produced, so a rejected
/// command leaves no partial state behind. `velocities` expands into the two
/// independent single-velocity requests.
pub fn parse_command(name: &str, args: &[&str]) -> Result<ParsedCommand, CommandError> {
    let action = ModificationAction::from_command_name(name)
        .ok_or_else(|| CommandError::UnknownAction(name.to_string()))?;
    if args.len() < action.needed_arguments() {
        return Err(CommandError::MissingArgument {
            action: action.command_name(),
            needed: action.needed_arguments(),
        });
    }
    let requests = match action {
        ModificationAction::Add => vec![ModificationRequest::Add],
        ModificationAction::Remove => vec![ModificationRequest::Remove],
        ModificationAction::HorizontalVelocity => {
            vec![ModificationRequest::SetHorizontal(parse_velocity(args[0])?)]
        }
        ModificationAction::VerticalVelocity => {
            vec![ModificationRequest::SetVertical(parse_velocity(args[0])?)]
        }
        ModificationAction::FixedDirection => {
            vec![ModificationRequest::SetFixedDirection(parse_direction(
                args[0],
            )?)]
        }
        ModificationAction::Velocities => vec![
            ModificationRequest::SetHorizontal(parse_velocity(args[0])?),
            ModificationRequest::SetVertical(parse_velocity(args[1])?),
        ],
        ModificationAction::Abort => return Ok(ParsedCommand::Abort),
    };
    Ok(ParsedCommand::Queue(requests))
}

fn parse_velocity(token: &str) -> Result<Option<f32>, CommandError> {
    if token.eq_ignore_ascii_case(CLEAR_TOKEN) {
        return Ok(None);
    }
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(CommandError::InvalidVelocity(token.to_string())),
    }
}

fn parse_direction(token: &str) -> Result<Option<Direction>, CommandError> {
    if token.eq_ignore_ascii_case(CLEAR_TOKEN) {
        return Ok(None);
    }
    Ok(Some(Direction::from_name(token)?))
}
