//! The command table.
//!
//! Every trigger on the console maps to one [`CommandSpec`]: either a local
//! form reset, or a request builder plus success and failure appliers. The
//! appliers only touch [`ViewState`], so a command can be exercised without
//! a page.
//!
//! | Trigger | Command |
//! |---------|---------|
//! | `create-btn` | [`Command::Create`] |
//! | `update-btn` | [`Command::Update`] |
//! | `retrieve-btn` | [`Command::Retrieve`] |
//! | `delete-btn` | [`Command::Delete`] |
//! | `clearcart-btn` | [`Command::ClearCart`] |
//! | `search-btn` | [`Command::Search`] |
//! | `clear-btn` | [`Command::ClearForm`] |
//! | `cartitem-create-btn` | [`Command::ItemCreate`] |
//! | `cartitem-update-btn` | [`Command::ItemUpdate`] |
//! | `cartitem-delete-btn` | [`Command::ItemDelete`] |
//! | `cartitem-clear-btn` | [`Command::ItemClearForm`] |

mod cart_item;
mod shopcart;

use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value};
use shopcart_core::Severity;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::api::{ApiError, ApiRequest, ApiResponse, ShopcartClient};
use crate::view::{GENERIC_ERROR, ViewState};

/// A console command, named after the button that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Update,
    Retrieve,
    Delete,
    ClearCart,
    Search,
    ClearForm,
    ItemCreate,
    ItemUpdate,
    ItemDelete,
    ItemClearForm,
}

/// A trigger id that names no command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Every command, in button order.
    pub const ALL: [Self; 11] = [
        Self::Create,
        Self::Update,
        Self::Retrieve,
        Self::Delete,
        Self::ClearCart,
        Self::Search,
        Self::ClearForm,
        Self::ItemCreate,
        Self::ItemUpdate,
        Self::ItemDelete,
        Self::ItemClearForm,
    ];

    /// Id of the button bound to this command.
    #[must_use]
    pub fn trigger(self) -> &'static str {
        self.spec().trigger
    }

    /// Look up a command by button id.
    #[must_use]
    pub fn from_trigger(trigger: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.trigger == trigger)
            .map(|spec| spec.command)
    }

    /// This command's table entry.
    #[must_use]
    pub fn spec(self) -> &'static CommandSpec {
        &COMMANDS[self as usize]
    }

    /// True when the command never touches the network.
    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self.spec().action, Action::Local(_))
    }

    /// Build the request this command would send for the given view.
    ///
    /// Returns `None` for local commands.
    #[must_use]
    pub fn prepare(self, state: &ViewState) -> Option<ApiRequest> {
        match self.spec().action {
            Action::Local(_) => None,
            Action::Remote { prepare, .. } => Some(prepare(state)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_trigger(s.trim()).ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Builds the request from the current view.
pub type Prepare = fn(&ViewState) -> ApiRequest;

/// Applies a 2xx response. An error means the body did not decode, and the
/// failure applier runs instead.
pub type OnSuccess = fn(&mut ViewState, &ApiResponse) -> Result<(), ApiError>;

/// Applies a failed request.
pub type OnFailure = fn(&mut ViewState, &ApiError);

/// What a command does.
#[derive(Clone, Copy)]
pub enum Action {
    /// Mutates the view without a request.
    Local(fn(&mut ViewState)),
    /// Sends one request and applies the outcome.
    Remote {
        prepare: Prepare,
        on_success: OnSuccess,
        on_failure: OnFailure,
    },
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(_) => f.write_str("Local"),
            Self::Remote { .. } => f.write_str("Remote"),
        }
    }
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Command,
    pub trigger: &'static str,
    pub action: Action,
}

/// The command table, indexed by `Command as usize`.
pub static COMMANDS: [CommandSpec; 11] = [
    CommandSpec {
        command: Command::Create,
        trigger: "create-btn",
        action: Action::Remote {
            prepare: shopcart::create_request,
            on_success: shopcart::show_shopcart_in_form,
            on_failure: flash_server_message,
        },
    },
    CommandSpec {
        command: Command::Update,
        trigger: "update-btn",
        action: Action::Remote {
            prepare: shopcart::update_request,
            on_success: shopcart::show_shopcart_in_form,
            on_failure: flash_server_message,
        },
    },
    CommandSpec {
        command: Command::Retrieve,
        trigger: "retrieve-btn",
        action: Action::Remote {
            prepare: shopcart::retrieve_request,
            on_success: shopcart::show_retrieved,
            on_failure: shopcart::retrieve_failed,
        },
    },
    CommandSpec {
        command: Command::Delete,
        trigger: "delete-btn",
        action: Action::Remote {
            prepare: shopcart::delete_request,
            on_success: shopcart::deleted,
            on_failure: flash_generic_error,
        },
    },
    CommandSpec {
        command: Command::ClearCart,
        trigger: "clearcart-btn",
        action: Action::Remote {
            prepare: shopcart::clear_cart_request,
            on_success: shopcart::cleared,
            on_failure: flash_generic_error,
        },
    },
    CommandSpec {
        command: Command::Search,
        trigger: "search-btn",
        action: Action::Remote {
            prepare: shopcart::search_request,
            on_success: shopcart::show_search_results,
            on_failure: flash_server_message,
        },
    },
    CommandSpec {
        command: Command::ClearForm,
        trigger: "clear-btn",
        action: Action::Local(shopcart::clear_form),
    },
    CommandSpec {
        command: Command::ItemCreate,
        trigger: "cartitem-create-btn",
        action: Action::Remote {
            prepare: cart_item::create_request,
            on_success: cart_item::show_created,
            on_failure: flash_server_message,
        },
    },
    CommandSpec {
        command: Command::ItemUpdate,
        trigger: "cartitem-update-btn",
        action: Action::Remote {
            prepare: cart_item::update_request,
            on_success: cart_item::changed,
            on_failure: flash_generic_error,
        },
    },
    CommandSpec {
        command: Command::ItemDelete,
        trigger: "cartitem-delete-btn",
        action: Action::Remote {
            prepare: cart_item::delete_request,
            on_success: cart_item::changed,
            on_failure: flash_generic_error,
        },
    },
    CommandSpec {
        command: Command::ItemClearForm,
        trigger: "cartitem-clear-btn",
        action: Action::Local(cart_item::clear_form),
    },
];

/// How a command run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A local command ran.
    Local,
    /// The request succeeded and the response was applied.
    Applied,
    /// The request failed; the failure applier ran.
    Failed(ApiError),
}

impl Outcome {
    /// True unless the request failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Apply a request's result through a command's appliers.
///
/// Returns `Outcome::Local` for local commands, which have no result to
/// apply.
pub fn apply(command: Command, state: &mut ViewState, result: Result<ApiResponse, ApiError>) -> Outcome {
    let Action::Remote {
        on_success,
        on_failure,
        ..
    } = command.spec().action
    else {
        return Outcome::Local;
    };

    match result.and_then(|response| on_success(state, &response)) {
        Ok(()) => {
            debug!(%command, "Command applied");
            Outcome::Applied
        }
        Err(err) => {
            warn!(%command, error = %err, "Command failed");
            on_failure(state, &err);
            Outcome::Failed(err)
        }
    }
}

/// Run one command against a view owned by the caller.
///
/// The flash is emptied before the request goes out.
#[instrument(skip_all, fields(command = %command))]
pub async fn run(client: &ShopcartClient, command: Command, state: &mut ViewState) -> Outcome {
    let request = match command.spec().action {
        Action::Local(reset) => {
            reset(state);
            return Outcome::Local;
        }
        Action::Remote { prepare, .. } => {
            state.clear_flash();
            prepare(state)
        }
    };

    debug!(%request, "Sending command request");
    let result = client.send(&request).await;
    apply(command, state, result)
}

/// Failure applier: show the server's message, or the generic error.
pub fn flash_server_message(state: &mut ViewState, err: &ApiError) {
    state.show_flash(err.server_message().unwrap_or(GENERIC_ERROR), Severity::Danger);
}

/// Failure applier: always show the generic error.
pub fn flash_generic_error(state: &mut ViewState, _err: &ApiError) {
    state.show_flash(GENERIC_ERROR, Severity::Danger);
}

/// Convert a form value to the JSON value sent to the API.
///
/// Integer and decimal literals become numbers. Anything else is sent as the
/// trimmed string so the API can report it.
#[must_use]
pub fn json_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    Number::from_str(trimmed).map_or_else(|_| Value::String(trimmed.to_string()), Value::Number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_table_is_indexed_by_command() {
        for command in Command::ALL {
            assert_eq!(command.spec().command, command);
        }
    }

    #[test]
    fn test_triggers_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_trigger(command.trigger()), Some(command));
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
        assert_eq!(Command::from_trigger("explode-btn"), None);
        assert_eq!(
            "explode-btn".parse::<Command>(),
            Err(UnknownCommand("explode-btn".to_string()))
        );
    }

    #[test]
    fn test_local_commands() {
        let local: Vec<_> = Command::ALL.into_iter().filter(|c| c.is_local()).collect();
        assert_eq!(local, vec![Command::ClearForm, Command::ItemClearForm]);
        assert!(Command::ClearForm.prepare(&ViewState::default()).is_none());
    }

    #[test]
    fn test_json_scalar() {
        assert_eq!(json_scalar("1001"), json!(1001));
        assert_eq!(json_scalar(" 7 "), json!(7));
        assert_eq!(json_scalar("1.50"), json!(1.5));
        assert_eq!(json_scalar("-2"), json!(-2));
        assert_eq!(json_scalar("abc"), json!("abc"));
        assert_eq!(json_scalar(""), json!(""));
        assert_eq!(json_scalar("NaN"), json!("NaN"));
    }

    #[test]
    fn test_apply_local_command_is_noop() {
        let mut state = ViewState::default();
        let outcome = apply(
            Command::ClearForm,
            &mut state,
            Err(ApiError::Parse("unused".to_string())),
        );
        assert!(matches!(outcome, Outcome::Local));
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_failure_appliers() {
        let mut state = ViewState::default();
        let with_message = ApiError::Status {
            status: 404,
            message: Some("Shopcart not found".to_string()),
        };
        let without_message = ApiError::Status {
            status: 500,
            message: None,
        };

        flash_server_message(&mut state, &with_message);
        assert_eq!(state.flash.as_ref().map(|f| f.message.as_str()), Some("Shopcart not found"));

        flash_server_message(&mut state, &without_message);
        assert_eq!(state.flash.as_ref().map(|f| f.message.as_str()), Some(GENERIC_ERROR));

        flash_generic_error(&mut state, &with_message);
        let flash = state.flash.as_ref().expect("flash set");
        assert_eq!(flash.message, GENERIC_ERROR);
        assert_eq!(flash.severity, Severity::Danger);
    }
}
