//! Add-on selection and pricing
//!
//! Pure computation over add-on definitions: given an add-on group and
//! the guest's selection, compute the price contribution. Selection
//! state is a tagged union so a single-select group can never silently
//! receive a checkbox-style set of options.
//!
//! Required/optional enforcement lives in the form layer, not here: an
//! empty multi-select is a valid selection totalling zero.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{Addon, SelectionMode};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised by add-on validation and pricing
///
/// All of these are caller contract violations or bad definitions,
/// reported rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddonError {
    #[error("selection mode mismatch: add-on '{addon}' is {mode:?}")]
    ModeMismatch { addon: String, mode: SelectionMode },

    #[error("single-select add-on '{addon}' requires exactly one selection")]
    MissingSelection { addon: String },

    #[error("option index {index} out of range for add-on '{addon}'")]
    OptionOutOfRange { addon: String, index: usize },

    #[error("add-on '{addon}' has no options")]
    NoOptions { addon: String },

    #[error("duplicate option name '{option}' in add-on '{addon}'")]
    DuplicateOptionName { addon: String, option: String },

    #[error("negative unit price for option '{option}' in add-on '{addon}'")]
    NegativeUnitPrice { addon: String, option: String },
}

impl From<AddonError> for AppError {
    fn from(err: AddonError) -> Self {
        let code = match &err {
            AddonError::ModeMismatch { .. }
            | AddonError::MissingSelection { .. }
            | AddonError::OptionOutOfRange { .. } => ErrorCode::AddonSelectionInvalid,
            AddonError::NoOptions { .. } => ErrorCode::AddonOptionsEmpty,
            AddonError::DuplicateOptionName { .. } => ErrorCode::AddonOptionDuplicate,
            AddonError::NegativeUnitPrice { .. } => ErrorCode::AddonOptionInvalidPrice,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// The guest's selection within one add-on group
///
/// Options are referenced by index into the add-on's ordered option
/// list. The variant must match the add-on's [`SelectionMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonSelection {
    /// Radio: at most one option, `None` while the guest has not picked yet
    Single(Option<usize>),
    /// Checkbox: any subset of options
    Multi(BTreeSet<usize>),
}

impl AddonSelection {
    /// Empty selection matching the add-on's mode (form initial state)
    pub fn empty_for(addon: &Addon) -> Self {
        match addon.selection_mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multi => Self::Multi(BTreeSet::new()),
        }
    }

    /// Single selection of one option index
    pub fn single(index: usize) -> Self {
        Self::Single(Some(index))
    }

    /// Multi selection from option indices
    pub fn multi(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Multi(indices.into_iter().collect())
    }
}

/// Validate an add-on definition on construction
///
/// Options must be non-empty, unit prices non-negative, and option
/// names unique within the group.
pub fn validate_addon(addon: &Addon) -> Result<(), AddonError> {
    if addon.options.is_empty() {
        return Err(AddonError::NoOptions {
            addon: addon.name.clone(),
        });
    }

    let mut seen = BTreeSet::new();
    for option in &addon.options {
        if option.unit_price < Decimal::ZERO {
            return Err(AddonError::NegativeUnitPrice {
                addon: addon.name.clone(),
                option: option.name.clone(),
            });
        }
        if !seen.insert(option.name.as_str()) {
            return Err(AddonError::DuplicateOptionName {
                addon: addon.name.clone(),
                option: option.name.clone(),
            });
        }
    }
    Ok(())
}

/// Compute the price contribution of a selection within one add-on group
///
/// Stateless: the same definition and selection always produce the same
/// total. A selection whose variant does not match the add-on's mode is
/// a caller contract violation.
pub fn total_price(addon: &Addon, selection: &AddonSelection) -> Result<Decimal, AddonError> {
    match (addon.selection_mode, selection) {
        (SelectionMode::Single, AddonSelection::Single(Some(index))) => {
            option_price(addon, *index)
        }
        (SelectionMode::Single, AddonSelection::Single(None)) => {
            Err(AddonError::MissingSelection {
                addon: addon.name.clone(),
            })
        }
        (SelectionMode::Multi, AddonSelection::Multi(indices)) => {
            let mut total = Decimal::ZERO;
            for &index in indices {
                total += option_price(addon, index)?;
            }
            Ok(total)
        }
        (mode, _) => Err(AddonError::ModeMismatch {
            addon: addon.name.clone(),
            mode,
        }),
    }
}

fn option_price(addon: &Addon, index: usize) -> Result<Decimal, AddonError> {
    addon
        .options
        .get(index)
        .map(|o| o.unit_price)
        .ok_or_else(|| AddonError::OptionOutOfRange {
            addon: addon.name.clone(),
            index,
        })
}
