//! Runtime options for the networks that accept them, and the parser for
//! their command-line spelling.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::deployments::{BuriedDeployment, DeploymentPos, StartTime, Timeout};
use crate::error::OptionsError;

const ACTIVATION_HEIGHT_OPTION: &str = "-testactivationheight";
const VBPARAMS_OPTION: &str = "-vbparams";
const SIGNET_CHALLENGE_OPTION: &str = "-signetchallenge";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigNetOptions {
    /// Replaces the default challenge, and with it the network identity.
    pub challenge: Option<Vec<u8>>,
    /// Replaces the DNS seed list, with or without a custom challenge.
    pub seeds: Option<Vec<String>>,
}

impl SigNetOptions {
    /// Builds options from every `-signetchallenge` and `-signetseednode`
    /// value given, in order. At most one challenge is accepted.
    pub fn from_args<C, S>(challenges: C, seed_nodes: S) -> Result<Self, OptionsError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let challenges: Vec<C::Item> = challenges.into_iter().collect();
        let challenge = match challenges.as_slice() {
            [] => None,
            [one] => {
                let s: &str = one.as_ref();
                let bytes = hex::decode(s).map_err(|_| OptionsError::InvalidHex {
                    option: SIGNET_CHALLENGE_OPTION,
                    value: s.to_string(),
                })?;
                Some(bytes)
            }
            _ => return Err(OptionsError::MultipleValues(SIGNET_CHALLENGE_OPTION)),
        };

        let seeds: Vec<String> = seed_nodes
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        Ok(Self {
            challenge,
            seeds: (!seeds.is_empty()).then_some(seeds),
        })
    }
}

/// Replacement schedule for one BIP9 deployment. Bit, threshold and period
/// are not overridable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VersionBitsParameters {
    pub start: StartTime,
    pub timeout: Timeout,
    pub min_activation_height: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegTestOptions {
    pub activation_heights: BTreeMap<BuriedDeployment, u32>,
    pub version_bits_parameters: BTreeMap<DeploymentPos, VersionBitsParameters>,
    pub enforce_bip94: bool,
    /// Prune after 100 blocks instead of 1000.
    pub fastprune: bool,
}

impl RegTestOptions {
    /// Applies one `-testactivationheight=name@height` value. A later value
    /// for the same deployment replaces an earlier one.
    pub fn add_activation_height_arg(&mut self, arg: &str) -> Result<(), OptionsError> {
        let (dep, height) = parse_activation_height(arg)?;
        self.activation_heights.insert(dep, height);
        Ok(())
    }

    /// Applies one `-vbparams=deployment:start:end[:min_activation_height]` value.
    pub fn add_vbparams_arg(&mut self, arg: &str) -> Result<(), OptionsError> {
        let (pos, params) = parse_version_bits_params(arg)?;
        self.version_bits_parameters.insert(pos, params);
        Ok(())
    }

    pub fn from_args<A, V>(activation_heights: A, vbparams: V) -> Result<Self, OptionsError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let mut opts = Self::default();
        for arg in activation_heights {
            opts.add_activation_height_arg(arg.as_ref())?;
        }
        for arg in vbparams {
            opts.add_vbparams_arg(arg.as_ref())?;
        }
        Ok(opts)
    }
}

/// Parses `name@height`, where `name` is a buried deployment.
pub fn parse_activation_height(arg: &str) -> Result<(BuriedDeployment, u32), OptionsError> {
    let Some((name, value)) = arg.split_once('@') else {
        return Err(OptionsError::Malformed {
            option: ACTIVATION_HEIGHT_OPTION,
            value: arg.to_string(),
            expected: "name@height",
        });
    };

    let height = value
        .parse::<i32>()
        .ok()
        .filter(|h| (0..i32::MAX).contains(h))
        .ok_or_else(|| OptionsError::InvalidHeight(arg.to_string()))?;

    let dep = name
        .parse::<BuriedDeployment>()
        .map_err(|_| OptionsError::UnknownDeployment(arg.to_string()))?;

    Ok((dep, height as u32))
}

/// Parses `deployment:start:end[:min_activation_height]`. Start and end use
/// the raw sentinel encoding (`-1` always active, `-2` never active,
/// `9223372036854775807` no timeout).
pub fn parse_version_bits_params(
    arg: &str,
) -> Result<(DeploymentPos, VersionBitsParameters), OptionsError> {
    let fields: Vec<&str> = arg.split(':').collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(OptionsError::Malformed {
            option: VBPARAMS_OPTION,
            value: arg.to_string(),
            expected: "deployment:start:end[:min_activation_height]",
        });
    }

    let start = fields[1]
        .parse::<i64>()
        .map_err(|_| OptionsError::InvalidTime(fields[1].to_string()))?;
    let timeout = fields[2]
        .parse::<i64>()
        .map_err(|_| OptionsError::InvalidTime(fields[2].to_string()))?;
    let min_activation_height = match fields.get(3) {
        Some(h) => h
            .parse::<u32>()
            .map_err(|_| OptionsError::InvalidHeight(h.to_string()))?,
        None => 0,
    };

    let pos = fields[0].parse::<DeploymentPos>()?;
    info!(
        deployment = %pos,
        start,
        timeout,
        min_activation_height,
        "setting version bits activation parameters"
    );

    Ok((
        pos,
        VersionBitsParameters {
            start: StartTime::from_raw(start),
            timeout: Timeout::from_raw(timeout),
            min_activation_height,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn activation_height_ok() {
        assert_eq!(
            parse_activation_height("segwit@500").unwrap(),
            (BuriedDeployment::Segwit, 500)
        );
        assert_eq!(
            parse_activation_height("bip34@0").unwrap(),
            (BuriedDeployment::HeightInCb, 0)
        );
    }

    #[test]
    fn activation_height_errors() {
        assert_eq!(
            parse_activation_height("segwit500").unwrap_err().code(),
            ErrorCode::OptionsErrMalformed
        );
        assert_eq!(
            parse_activation_height("segwit@-1"),
            Err(OptionsError::InvalidHeight("segwit@-1".to_string()))
        );
        assert_eq!(
            parse_activation_height("segwit@2147483647").unwrap_err().code(),
            ErrorCode::OptionsErrInvalidHeight
        );
        assert_eq!(
            parse_activation_height("segwit@abc").unwrap_err().code(),
            ErrorCode::OptionsErrInvalidHeight
        );
        assert_eq!(
            parse_activation_height("taproot@10"),
            Err(OptionsError::UnknownDeployment("taproot@10".to_string()))
        );
    }

    #[test]
    fn vbparams_three_and_four_fields() {
        let (pos, p) = parse_version_bits_params("testdummy:-1:9223372036854775807").unwrap();
        assert_eq!(pos, DeploymentPos::TestDummy);
        assert_eq!(p.start, StartTime::AlwaysActive);
        assert_eq!(p.timeout, Timeout::NoTimeout);
        assert_eq!(p.min_activation_height, 0);

        let (pos, p) = parse_version_bits_params("taproot:100:200:432").unwrap();
        assert_eq!(pos, DeploymentPos::Taproot);
        assert_eq!(p.start, StartTime::At(100));
        assert_eq!(p.timeout, Timeout::At(200));
        assert_eq!(p.min_activation_height, 432);

        let (_, p) = parse_version_bits_params("taproot:-2:0").unwrap();
        assert_eq!(p.start, StartTime::NeverActive);
    }

    #[test]
    fn vbparams_errors() {
        let code = |s| parse_version_bits_params(s).unwrap_err().code();
        assert_eq!(code("taproot:1"), ErrorCode::OptionsErrMalformed);
        assert_eq!(code("taproot:1:2:3:4"), ErrorCode::OptionsErrMalformed);
        assert_eq!(code("taproot:x:2"), ErrorCode::OptionsErrInvalidTime);
        assert_eq!(code("taproot:1:y"), ErrorCode::OptionsErrInvalidTime);
        assert_eq!(code("taproot:1:2:-5"), ErrorCode::OptionsErrInvalidHeight);
        assert_eq!(code("segwit:1:2"), ErrorCode::OptionsErrUnknownDeployment);
    }

    #[test]
    fn regtest_args_last_write_wins() {
        let opts = RegTestOptions::from_args(
            ["segwit@10", "csv@3", "segwit@20"],
            ["taproot:1:2", "taproot:5:6:7"],
        )
        .unwrap();
        assert_eq!(opts.activation_heights[&BuriedDeployment::Segwit], 20);
        assert_eq!(opts.activation_heights[&BuriedDeployment::Csv], 3);
        assert_eq!(opts.activation_heights.len(), 2);
        let tr = opts.version_bits_parameters[&DeploymentPos::Taproot];
        assert_eq!(tr.start, StartTime::At(5));
        assert_eq!(tr.min_activation_height, 7);
        assert!(!opts.enforce_bip94);
        assert!(!opts.fastprune);
    }

    #[test]
    fn signet_args() {
        let none: [&str; 0] = [];
        assert_eq!(SigNetOptions::from_args(none, none).unwrap(), SigNetOptions::default());

        let opts = SigNetOptions::from_args(["51"], ["a.example.", "b.example."]).unwrap();
        assert_eq!(opts.challenge, Some(vec![0x51]));
        assert_eq!(
            opts.seeds,
            Some(vec!["a.example.".to_string(), "b.example.".to_string()])
        );

        assert_eq!(
            SigNetOptions::from_args(["51", "52"], none),
            Err(OptionsError::MultipleValues("-signetchallenge"))
        );
        assert_eq!(
            SigNetOptions::from_args(["zz"], none).unwrap_err().code(),
            ErrorCode::OptionsErrInvalidHex
        );
    }
}
