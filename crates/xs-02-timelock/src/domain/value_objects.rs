//! # Domain Value Objects
//!
//! Escrow side, stage, action and caller role.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which escrow of the swap is being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Escrow holding the maker's assets.
    Source,
    /// Escrow holding the resolver's assets.
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// Time window an escrow is in.
///
/// Stages are ordered: a later variant never precedes an earlier one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Finality lock; nothing may happen yet.
    Locked,
    /// Resolver may withdraw with the secret.
    WithdrawWindow,
    /// Anyone may withdraw with the secret.
    PublicWithdrawWindow,
    /// Resolver may cancel.
    CancelWindow,
    /// Anyone may cancel. Source side only.
    PublicCancelWindow,
}

impl Stage {
    /// Actions legal during this stage.
    pub fn permitted_actions(&self) -> &'static [Action] {
        match self {
            Self::Locked => &[],
            Self::WithdrawWindow => &[Action::Withdraw],
            Self::PublicWithdrawWindow => &[Action::Withdraw, Action::PublicWithdraw],
            Self::CancelWindow => &[Action::Cancel],
            Self::PublicCancelWindow => &[Action::Cancel, Action::PublicCancel],
        }
    }

    /// True when `action` is legal during this stage.
    pub fn permits(&self, action: Action) -> bool {
        self.permitted_actions().contains(&action)
    }

    /// True when no later stage exists for `side`.
    pub fn is_terminal(&self, side: Side) -> bool {
        match side {
            Side::Source => *self == Self::PublicCancelWindow,
            Side::Destination => *self == Self::CancelWindow,
        }
    }

    /// True once the escrow may be withdrawn from, by someone.
    pub fn is_withdrawable(&self) -> bool {
        matches!(self, Self::WithdrawWindow | Self::PublicWithdrawWindow)
    }

    /// True once the escrow may be cancelled, by someone.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::CancelWindow | Self::PublicCancelWindow)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Locked => "locked",
            Self::WithdrawWindow => "withdraw window",
            Self::PublicWithdrawWindow => "public withdraw window",
            Self::CancelWindow => "cancel window",
            Self::PublicCancelWindow => "public cancel window",
        })
    }
}

/// Escrow action gated by the timelock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Resolver withdraws, presenting the secret.
    Withdraw,
    /// Anyone withdraws on the recipient's behalf, presenting the secret.
    PublicWithdraw,
    /// Resolver cancels and funds return.
    Cancel,
    /// Anyone cancels on the depositor's behalf.
    PublicCancel,
}

impl Action {
    /// Least privileged caller allowed to submit this action.
    pub fn required_caller(&self) -> Caller {
        match self {
            Self::Withdraw | Self::Cancel => Caller::Resolver,
            Self::PublicWithdraw | Self::PublicCancel => Caller::Public,
        }
    }

    /// True for the two withdrawal actions, which also need a valid secret.
    pub fn needs_secret(&self) -> bool {
        matches!(self, Self::Withdraw | Self::PublicWithdraw)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Withdraw => "withdraw",
            Self::PublicWithdraw => "public withdraw",
            Self::Cancel => "cancel",
            Self::PublicCancel => "public cancel",
        })
    }
}

/// Who is submitting an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Caller {
    /// The resolver (taker) who deployed the escrow.
    Resolver,
    /// Any other account.
    Public,
}

impl Caller {
    /// The withdrawal action this caller submits.
    pub fn withdraw_action(&self) -> Action {
        match self {
            Self::Resolver => Action::Withdraw,
            Self::Public => Action::PublicWithdraw,
        }
    }

    /// The cancellation action this caller submits.
    pub fn cancel_action(&self) -> Action {
        match self {
            Self::Resolver => Action::Cancel,
            Self::Public => Action::PublicCancel,
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolver => "resolver",
            Self::Public => "public",
        })
    }
}
