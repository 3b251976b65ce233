use vertocoin_chainparams::{
    ChainType, DeploymentPos, ErrorCode, MessageStart, OptionsError, ParamsError, Uint256,
};

#[test]
fn error_code_as_str_covers_all_variants() {
    let cases: &[(ErrorCode, &str)] = &[
        (
            ErrorCode::ParamsErrDeploymentBitRange,
            "PARAMS_ERR_DEPLOYMENT_BIT_RANGE",
        ),
        (
            ErrorCode::ParamsErrDeploymentPeriod,
            "PARAMS_ERR_DEPLOYMENT_PERIOD",
        ),
        (
            ErrorCode::ParamsErrDeploymentThreshold,
            "PARAMS_ERR_DEPLOYMENT_THRESHOLD",
        ),
        (ErrorCode::ParamsErrDuplicateBit, "PARAMS_ERR_DUPLICATE_BIT"),
        (
            ErrorCode::ParamsErrDuplicateMessageStart,
            "PARAMS_ERR_DUPLICATE_MESSAGE_START",
        ),
        (
            ErrorCode::ParamsErrGenesisMismatch,
            "PARAMS_ERR_GENESIS_MISMATCH",
        ),
        (ErrorCode::OptionsErrMalformed, "OPTIONS_ERR_MALFORMED"),
        (
            ErrorCode::OptionsErrUnknownDeployment,
            "OPTIONS_ERR_UNKNOWN_DEPLOYMENT",
        ),
        (ErrorCode::OptionsErrInvalidHeight, "OPTIONS_ERR_INVALID_HEIGHT"),
        (ErrorCode::OptionsErrInvalidTime, "OPTIONS_ERR_INVALID_TIME"),
        (ErrorCode::OptionsErrInvalidHex, "OPTIONS_ERR_INVALID_HEX"),
        (
            ErrorCode::OptionsErrMultipleValues,
            "OPTIONS_ERR_MULTIPLE_VALUES",
        ),
        (ErrorCode::OptionsErrUnknownChain, "OPTIONS_ERR_UNKNOWN_CHAIN"),
    ];

    for (code, want) in cases {
        assert_eq!(code.as_str(), *want);
    }
}

#[test]
fn params_error_display_and_code() {
    let err = ParamsError::DuplicateMessageStart {
        magic: MessageStart::new([0xf0, 0xd9, 0xb7, 0xd2]),
        first: ChainType::Main,
        second: ChainType::Testnet,
    };
    assert_eq!(err.code(), ErrorCode::ParamsErrDuplicateMessageStart);
    assert_eq!(err.to_string(), "main and test share message start f0d9b7d2");

    let err = ParamsError::DeploymentThreshold {
        deployment: DeploymentPos::Taproot,
        threshold: 3000,
        period: 2016,
    };
    assert_eq!(
        err.to_string(),
        "deployment taproot: threshold 3000 exceeds period 2016"
    );

    let err = ParamsError::GenesisMismatch {
        chain: ChainType::Regtest,
        computed: Uint256::ZERO,
        expected: Uint256::ZERO,
    };
    assert_eq!(err.code(), ErrorCode::ParamsErrGenesisMismatch);
    assert!(err.to_string().starts_with("regtest: genesis hash 0000"));
}

#[test]
fn options_error_display_and_code() {
    let err = OptionsError::UnknownDeployment("foo@1".to_string());
    assert_eq!(err.code(), ErrorCode::OptionsErrUnknownDeployment);
    assert_eq!(err.to_string(), "invalid name (foo@1) for deployment");

    let err = OptionsError::MultipleValues("-signetchallenge");
    assert_eq!(err.to_string(), "-signetchallenge cannot be multiple values");

    let err = "mainnet".parse::<ChainType>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::OptionsErrUnknownChain);
    assert_eq!(err.to_string(), "unknown chain type 'mainnet'");
}
