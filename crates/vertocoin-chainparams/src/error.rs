use thiserror::Error;

use crate::chain_type::ChainType;
use crate::deployments::DeploymentPos;
use crate::message_start::MessageStart;
use crate::uint256::BlockHash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ParamsErrDeploymentBitRange,
    ParamsErrDeploymentPeriod,
    ParamsErrDeploymentThreshold,
    ParamsErrDuplicateBit,
    ParamsErrDuplicateMessageStart,
    ParamsErrGenesisMismatch,

    OptionsErrMalformed,
    OptionsErrUnknownDeployment,
    OptionsErrInvalidHeight,
    OptionsErrInvalidTime,
    OptionsErrInvalidHex,
    OptionsErrMultipleValues,
    OptionsErrUnknownChain,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParamsErrDeploymentBitRange => "PARAMS_ERR_DEPLOYMENT_BIT_RANGE",
            ErrorCode::ParamsErrDeploymentPeriod => "PARAMS_ERR_DEPLOYMENT_PERIOD",
            ErrorCode::ParamsErrDeploymentThreshold => "PARAMS_ERR_DEPLOYMENT_THRESHOLD",
            ErrorCode::ParamsErrDuplicateBit => "PARAMS_ERR_DUPLICATE_BIT",
            ErrorCode::ParamsErrDuplicateMessageStart => "PARAMS_ERR_DUPLICATE_MESSAGE_START",
            ErrorCode::ParamsErrGenesisMismatch => "PARAMS_ERR_GENESIS_MISMATCH",

            ErrorCode::OptionsErrMalformed => "OPTIONS_ERR_MALFORMED",
            ErrorCode::OptionsErrUnknownDeployment => "OPTIONS_ERR_UNKNOWN_DEPLOYMENT",
            ErrorCode::OptionsErrInvalidHeight => "OPTIONS_ERR_INVALID_HEIGHT",
            ErrorCode::OptionsErrInvalidTime => "OPTIONS_ERR_INVALID_TIME",
            ErrorCode::OptionsErrInvalidHex => "OPTIONS_ERR_INVALID_HEX",
            ErrorCode::OptionsErrMultipleValues => "OPTIONS_ERR_MULTIPLE_VALUES",
            ErrorCode::OptionsErrUnknownChain => "OPTIONS_ERR_UNKNOWN_CHAIN",
        }
    }
}

/// A defect in compiled-in or option-derived chain parameters.
///
/// These are authoring errors, not runtime conditions. The infallible
/// constructors in [`crate::ChainParams`] abort on them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("deployment {deployment}: bit {bit} out of range")]
    DeploymentBitRange { deployment: DeploymentPos, bit: u8 },

    #[error("deployment {deployment}: period must be non-zero")]
    DeploymentPeriod { deployment: DeploymentPos },

    #[error("deployment {deployment}: threshold {threshold} exceeds period {period}")]
    DeploymentThreshold {
        deployment: DeploymentPos,
        threshold: u32,
        period: u32,
    },

    #[error("deployments {first} and {second} both signal on bit {bit}")]
    DuplicateBit {
        bit: u8,
        first: DeploymentPos,
        second: DeploymentPos,
    },

    #[error("{first} and {second} share message start {magic}")]
    DuplicateMessageStart {
        magic: MessageStart,
        first: ChainType,
        second: ChainType,
    },

    #[error("{chain}: genesis hash {computed} does not match expected {expected}")]
    GenesisMismatch {
        chain: ChainType,
        computed: BlockHash,
        expected: BlockHash,
    },
}

impl ParamsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParamsError::DeploymentBitRange { .. } => ErrorCode::ParamsErrDeploymentBitRange,
            ParamsError::DeploymentPeriod { .. } => ErrorCode::ParamsErrDeploymentPeriod,
            ParamsError::DeploymentThreshold { .. } => ErrorCode::ParamsErrDeploymentThreshold,
            ParamsError::DuplicateBit { .. } => ErrorCode::ParamsErrDuplicateBit,
            ParamsError::DuplicateMessageStart { .. } => ErrorCode::ParamsErrDuplicateMessageStart,
            ParamsError::GenesisMismatch { .. } => ErrorCode::ParamsErrGenesisMismatch,
        }
    }
}

/// Rejected textual configuration, reported back to whoever supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("malformed {option} value '{value}', expected {expected}")]
    Malformed {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid name ({0}) for deployment")]
    UnknownDeployment(String),

    #[error("invalid height value ({0})")]
    InvalidHeight(String),

    #[error("invalid time value ({0})")]
    InvalidTime(String),

    #[error("{option} must be hex, not '{value}'")]
    InvalidHex { option: &'static str, value: String },

    #[error("{0} cannot be multiple values")]
    MultipleValues(&'static str),

    #[error("unknown chain type '{0}'")]
    UnknownChain(String),
}

impl OptionsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OptionsError::Malformed { .. } => ErrorCode::OptionsErrMalformed,
            OptionsError::UnknownDeployment(_) => ErrorCode::OptionsErrUnknownDeployment,
            OptionsError::InvalidHeight(_) => ErrorCode::OptionsErrInvalidHeight,
            OptionsError::InvalidTime(_) => ErrorCode::OptionsErrInvalidTime,
            OptionsError::InvalidHex { .. } => ErrorCode::OptionsErrInvalidHex,
            OptionsError::MultipleValues(_) => ErrorCode::OptionsErrMultipleValues,
            OptionsError::UnknownChain(_) => ErrorCode::OptionsErrUnknownChain,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseHexError {
    #[error("expected {expected} hex digits, got {got}")]
    Length { expected: usize, got: usize },

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
