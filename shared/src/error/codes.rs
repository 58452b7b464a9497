//! Unified error codes for the menu platform
//!
//! This module defines all error codes used across the client crates and
//! frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Catalog errors (service/category/subcategory)
//! - 4xxx: Item errors
//! - 5xxx: Add-on errors
//! - 6xxx: Tag errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Manager role required
    ManagerRequired = 2002,

    // ==================== 3xxx: Catalog ====================
    /// Service not found
    ServiceNotFound = 3001,
    /// Service is inactive
    ServiceInactive = 3002,
    /// Category not found
    CategoryNotFound = 3101,
    /// Category does not belong to the service
    CategoryNotInService = 3102,
    /// Subcategory not found
    SubCategoryNotFound = 3201,
    /// Subcategory does not belong to the category
    SubCategoryNotInCategory = 3202,
    /// Catalog family has not been loaded yet
    CatalogNotLoaded = 3301,

    // ==================== 4xxx: Item ====================
    /// Item not found
    ItemNotFound = 4001,
    /// Item has invalid price
    ItemInvalidPrice = 4002,
    /// Item is not available
    ItemUnavailable = 4003,
    /// Dietary type only applies to food items
    DietaryTypeNotApplicable = 4004,

    // ==================== 5xxx: Add-on ====================
    /// Add-on not found
    AddonNotFound = 5001,
    /// Add-on has no options
    AddonOptionsEmpty = 5002,
    /// Add-on option name duplicated within group
    AddonOptionDuplicate = 5003,
    /// Add-on option has invalid unit price
    AddonOptionInvalidPrice = 5004,
    /// Add-on selection violates the selection mode
    AddonSelectionInvalid = 5005,
    /// Add-on is already attached to the item
    AddonAlreadyAttached = 5006,
    /// Add-on is not attached to the item
    AddonNotAttached = 5007,

    // ==================== 6xxx: Tag ====================
    /// Tag not found
    TagNotFound = 6001,
    /// Tag is in use by items
    TagInUse = 6002,
    /// Tag name already exists
    TagNameExists = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::ManagerRequired => "Manager role is required",

            // Catalog
            ErrorCode::ServiceNotFound => "Service not found",
            ErrorCode::ServiceInactive => "Service is inactive",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNotInService => "Category does not belong to the service",
            ErrorCode::SubCategoryNotFound => "Subcategory not found",
            ErrorCode::SubCategoryNotInCategory => "Subcategory does not belong to the category",
            ErrorCode::CatalogNotLoaded => "Catalog family has not been loaded",

            // Item
            ErrorCode::ItemNotFound => "Item not found",
            ErrorCode::ItemInvalidPrice => "Item has invalid price",
            ErrorCode::ItemUnavailable => "Item is not available",
            ErrorCode::DietaryTypeNotApplicable => "Dietary type only applies to food items",

            // Add-on
            ErrorCode::AddonNotFound => "Add-on not found",
            ErrorCode::AddonOptionsEmpty => "Add-on must have at least one option",
            ErrorCode::AddonOptionDuplicate => "Add-on option names must be unique",
            ErrorCode::AddonOptionInvalidPrice => "Add-on option has invalid unit price",
            ErrorCode::AddonSelectionInvalid => "Add-on selection violates the selection mode",
            ErrorCode::AddonAlreadyAttached => "Add-on is already attached to the item",
            ErrorCode::AddonNotAttached => "Add-on is not attached to the item",

            // Tag
            ErrorCode::TagNotFound => "Tag not found",
            ErrorCode::TagInUse => "Tag is in use by items",
            ErrorCode::TagNameExists => "Tag name already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::ManagerRequired),

            // Catalog
            3001 => Ok(ErrorCode::ServiceNotFound),
            3002 => Ok(ErrorCode::ServiceInactive),
            3101 => Ok(ErrorCode::CategoryNotFound),
            3102 => Ok(ErrorCode::CategoryNotInService),
            3201 => Ok(ErrorCode::SubCategoryNotFound),
            3202 => Ok(ErrorCode::SubCategoryNotInCategory),
            3301 => Ok(ErrorCode::CatalogNotLoaded),

            // Item
            4001 => Ok(ErrorCode::ItemNotFound),
            4002 => Ok(ErrorCode::ItemInvalidPrice),
            4003 => Ok(ErrorCode::ItemUnavailable),
            4004 => Ok(ErrorCode::DietaryTypeNotApplicable),

            // Add-on
            5001 => Ok(ErrorCode::AddonNotFound),
            5002 => Ok(ErrorCode::AddonOptionsEmpty),
            5003 => Ok(ErrorCode::AddonOptionDuplicate),
            5004 => Ok(ErrorCode::AddonOptionInvalidPrice),
            5005 => Ok(ErrorCode::AddonSelectionInvalid),
            5006 => Ok(ErrorCode::AddonAlreadyAttached),
            5007 => Ok(ErrorCode::AddonNotAttached),

            // Tag
            6001 => Ok(ErrorCode::TagNotFound),
            6002 => Ok(ErrorCode::TagInUse),
            6003 => Ok(ErrorCode::TagNameExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}
